mod api;
mod app;
mod constants;
mod errors;
mod models;
mod resources;
mod utils;

use actix_web::middleware::Logger;
use actix_web::{web, App as ActixWebApp, HttpServer};
use app::App;
use utils::logger::{log_fatal, log_success};

#[tokio::main]
async fn main() {
    let app = App::new().await.unwrap_or_else(|e| {
        log_fatal(format!("Could not create app: {}", e));
        panic!("Could not create app.\n{}", e)
    });

    app.init().await.unwrap_or_else(|e| {
        log_fatal(format!("Could not initialize app: {}", e));
        panic!("Could not initialize app.\n{}", e)
    });

    let host = app.host().to_string();
    let port = app.port();
    let app_web_data = web::Data::new(app);

    log_success(format!("Serving blog on http://{}:{}", host, port));

    HttpServer::new(move || {
        ActixWebApp::new()
            .wrap(Logger::new("%a %r %s %b %{Referer}i %{User-Agent}i %T"))
            .app_data(app_web_data.clone())
            .configure(api::configure)
    })
    .bind((host.as_str(), port))
    .unwrap_or_else(|e| panic!("Could not bind to port {}.\n{}", port, e))
    .run()
    .await
    .unwrap_or_else(|e| panic!("Could not run server to port {}.\n{}", port, e));
}
