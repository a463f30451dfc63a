use actix_web::{get, post, web};
use log::info;
use serde_json::json;

use crate::api::request::{Author, DbConnection, SameOrigin};
use crate::api::types::{html, redirect_to, Response};
use crate::app::App;
use crate::models::post::{Post, PostForm};
use crate::resources::templates::{AUTHOR_POSTS, DELETE_POST, EDIT_POST, NEW_POST};

#[get("/me")]
pub async fn get_author_posts(author: Author, app: web::Data<App>, mut conn: DbConnection) -> Response {
    let posts = Post::find_all(&mut conn).await?;
    let body = app.templates.render(
        AUTHOR_POSTS,
        &json!({ "username": author.username, "posts": posts }),
    )?;

    Ok(html(body))
}

#[get("/new")]
pub async fn new_post_form(_author: Author, app: web::Data<App>) -> Response {
    let body = app.templates.render(NEW_POST, &json!({}))?;

    Ok(html(body))
}

#[post("/new")]
pub async fn create_post(
    _author: Author,
    _origin: SameOrigin,
    mut conn: DbConnection,
    form: web::Form<PostForm>,
) -> Response {
    let post = Post::create(&mut conn, &form).await?;

    info!("Created post {}", post.id);

    Ok(redirect_to("/"))
}

#[get("/edit/{id}")]
pub async fn edit_post_form(
    _author: Author,
    app: web::Data<App>,
    id: web::Path<i64>,
    mut conn: DbConnection,
) -> Response {
    let post = Post::find_by_id(&mut conn, *id).await?;
    let body = app.templates.render(EDIT_POST, &json!({ "post": post }))?;

    Ok(html(body))
}

#[post("/edit/{id}")]
pub async fn update_post(
    _author: Author,
    _origin: SameOrigin,
    id: web::Path<i64>,
    mut conn: DbConnection,
    form: web::Form<PostForm>,
) -> Response {
    let post = Post::update(&mut conn, *id, &form).await?;

    info!("Updated post {}", post.id);

    Ok(redirect_to("/"))
}

#[get("/delete/{id}")]
pub async fn delete_post_form(
    _author: Author,
    app: web::Data<App>,
    id: web::Path<i64>,
    mut conn: DbConnection,
) -> Response {
    let post = Post::find_by_id(&mut conn, *id).await?;
    let body = app.templates.render(DELETE_POST, &json!({ "post": post }))?;

    Ok(html(body))
}

#[post("/delete/{id}")]
pub async fn delete_post(
    _author: Author,
    _origin: SameOrigin,
    id: web::Path<i64>,
    mut conn: DbConnection,
) -> Response {
    Post::delete(&mut conn, *id).await?;

    info!("Deleted post {}", *id);

    Ok(redirect_to("/"))
}
