pub mod request;
pub mod types;

mod author_api;
mod post_api;

pub use author_api::*;
pub use post_api::*;

use actix_web::web;

use crate::constants::MAX_FORM_SIZE;
use crate::errors::BlogError;

/// Registers every route together with the extractor configs they rely on.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .app_data(path_config())
        .service(get_posts)
        .service(get_post)
        .service(web::scope("/users").service(get_author_posts))
        .service(new_post_form)
        .service(create_post)
        .service(edit_post_form)
        .service(update_post)
        .service(delete_post_form)
        .service(delete_post);
}

fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .limit(MAX_FORM_SIZE)
        .error_handler(|err, _req| BlogError::ValidationError(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| BlogError::ValidationError(err.to_string()).into())
}
