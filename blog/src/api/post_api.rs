use actix_web::{get, web};
use serde_json::json;

use crate::api::request::DbConnection;
use crate::api::types::{html, Response};
use crate::app::App;
use crate::models::post::Post;
use crate::resources::templates::{POST, POSTS};

#[get("/")]
pub async fn get_posts(app: web::Data<App>, mut conn: DbConnection) -> Response {
    let posts = Post::find_all(&mut conn).await?;
    let body = app.templates.render(POSTS, &json!({ "posts": posts }))?;

    Ok(html(body))
}

#[get("/posts/{id}")]
pub async fn get_post(app: web::Data<App>, id: web::Path<i64>, mut conn: DbConnection) -> Response {
    let post = Post::find_by_id(&mut conn, *id).await?;
    let body = app.templates.render(POST, &json!({ "post": post }))?;

    Ok(html(body))
}
