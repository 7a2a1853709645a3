use crate::guards::Admin;
use crate::models::Subscription;
use crate::routes::error_chain_fmt;
use crate::startup::NewsletterDbConn;
use crate::store;
use anyhow::Context;
use diesel::PgConnection;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::{Request, Response};

#[derive(serde::Serialize)]
pub struct SubscriptionPage {
    pub subscriptions: Vec<Subscription>,
    pub total: i64,
}

/// Administrative listing. Unlike the form-facing routes, storage failures
/// here propagate as a hard 500: the consumer needs to tell "no data"
/// apart from "fetch failed".
#[tracing::instrument(name = "Listing newsletter subscribers", skip(conn, _admin))]
#[get("/subscriptions?<limit>&<offset>")]
pub async fn list_subscriptions(
    limit: Option<i64>,
    offset: Option<i64>,
    conn: NewsletterDbConn,
    _admin: Admin,
) -> Result<Json<SubscriptionPage>, ListError> {
    let limit = limit.unwrap_or(100);
    let offset = offset.unwrap_or(0);
    let (subscriptions, total) = conn
        .run(move |c: &mut PgConnection| store::list_active(c, limit, offset))
        .await
        .context("Failed to fetch active subscriptions from the database.")?;
    Ok(Json(SubscriptionPage {
        subscriptions,
        total,
    }))
}

#[derive(thiserror::Error)]
pub enum ListError {
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl<'r> Responder<'r, 'static> for ListError {
    fn respond_to(self, _request: &'r Request<'_>) -> rocket::response::Result<'static> {
        tracing::warn!("ListError: {:?}", self);
        Response::build()
            .status(match self {
                ListError::UnexpectedError(_) => Status::InternalServerError,
            })
            .ok()
    }
}
