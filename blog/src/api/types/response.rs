use crate::errors::BlogError;
use actix_web::http::header::{ContentType, LOCATION};
use actix_web::HttpResponse;

pub type Response = Result<HttpResponse, BlogError>;

pub fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

/// 303 so the browser follows up with a GET.
pub fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther().insert_header((LOCATION, location)).finish()
}
