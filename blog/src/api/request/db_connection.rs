use std::ops::{Deref, DerefMut};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};

use crate::api::request::app_data;
use crate::errors::BlogError;

/// Pooled connection scoped to a single request.
///
/// Acquired while the handler's arguments are extracted and handed back to the
/// pool when the handler returns, on success and on error alike.
pub struct DbConnection(PoolConnection<Sqlite>);

impl FromRequest for DbConnection {
    type Error = BlogError;
    type Future = LocalBoxFuture<'static, Result<DbConnection, BlogError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let app = app_data(req);

        Box::pin(async move {
            let conn = app?.db_pool.acquire().await?;

            Ok(DbConnection(conn))
        })
    }
}

impl Deref for DbConnection {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
