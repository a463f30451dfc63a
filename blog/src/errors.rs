use crate::utils::logger::log_error;
use actix_web::http::header::{ContentType, WWW_AUTHENTICATE};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::error::Error;
use std::fmt;

pub const BASIC_AUTH_CHALLENGE: &str = "Basic realm=\"blog\"";

#[derive(Debug)]
pub enum BlogError {
    // 400s
    Unauthorized(&'static str),
    Forbidden(&'static str),
    NotFound(String),
    ValidationError(String),
    // 500
    DatabaseError(sqlx::Error),
    TemplateError(String),
    ConfigError(String),
    InternalServerError(String),
}

impl fmt::Display for BlogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlogError::Unauthorized(e) => write!(f, "Unauthorized: {}", e),
            BlogError::Forbidden(e) => write!(f, "Forbidden: {}", e),
            BlogError::NotFound(e) => write!(f, "Not Found: {}", e),
            BlogError::ValidationError(e) => write!(f, "Validation Error: {}", e),
            BlogError::DatabaseError(e) => write!(f, "Database Error: \n{}", e),
            BlogError::TemplateError(e) => write!(f, "Template Error: \n{}", e),
            BlogError::ConfigError(e) => write!(f, "Config Error: {}", e),
            BlogError::InternalServerError(e) => write!(f, "InternalServerError: \n{}", e),
        }
    }
}

impl Error for BlogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BlogError::DatabaseError(e) => Some(e),
            BlogError::Unauthorized(_) => None,
            BlogError::Forbidden(_) => None,
            BlogError::NotFound(_) => None,
            BlogError::ValidationError(_) => None,
            BlogError::TemplateError(_) => None,
            BlogError::ConfigError(_) => None,
            BlogError::InternalServerError(_) => None,
        }
    }
}

impl ResponseError for BlogError {
    fn status_code(&self) -> StatusCode {
        match self {
            BlogError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            BlogError::Forbidden(_) => StatusCode::FORBIDDEN,
            BlogError::NotFound(_) => StatusCode::NOT_FOUND,
            BlogError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            BlogError::Unauthorized(e) => HttpResponse::build(status)
                .insert_header((WWW_AUTHENTICATE, BASIC_AUTH_CHALLENGE))
                .content_type(ContentType::html())
                .body(error_page(status, e)),
            BlogError::Forbidden(e) => error_page_response(status, e),
            BlogError::NotFound(e) => error_page_response(status, e),
            BlogError::ValidationError(e) => error_page_response(status, e),
            _ => {
                log_error(format!("Internal Server Error: {}", self));

                error_page_response(status, "Something went wrong")
            }
        }
    }
}

fn error_page_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(error_page(status, message))
}

fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{status}</title></head>\n<body>\n<h1>{status}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Back to posts</a></p>\n</body>\n</html>\n",
        status = status,
        message = handlebars::html_escape(message),
    )
}

impl From<sqlx::Error> for BlogError {
    fn from(e: sqlx::Error) -> Self {
        BlogError::DatabaseError(e)
    }
}

impl From<handlebars::RenderError> for BlogError {
    fn from(e: handlebars::RenderError) -> Self {
        BlogError::TemplateError(e.to_string())
    }
}

impl From<handlebars::TemplateError> for BlogError {
    fn from(e: handlebars::TemplateError) -> Self {
        BlogError::TemplateError(e.to_string())
    }
}

impl From<toml::de::Error> for BlogError {
    fn from(e: toml::de::Error) -> Self {
        BlogError::ConfigError(e.to_string())
    }
}
