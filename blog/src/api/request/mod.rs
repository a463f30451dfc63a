mod author;
mod db_connection;
mod same_origin;

pub use author::*;
pub use db_connection::*;
pub use same_origin::*;

use crate::app::App;
use crate::errors::BlogError;
use actix_web::{web, HttpRequest};

pub(crate) fn app_data(req: &HttpRequest) -> Result<web::Data<App>, BlogError> {
    req.app_data::<web::Data<App>>()
        .cloned()
        .ok_or_else(|| BlogError::InternalServerError("Could not get app data".to_string()))
}
