use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::error;

use super::domain::{signup_form, SignUpSubmission};
use super::mailer::Mailer;
use super::repository::{AccountDirectory, StudentRepository};
use super::service::{SignUpError, SignUpService};

/// Router builder exposing the sign-up form, intake, and status endpoints.
pub fn signup_router<R, D, M>(service: Arc<SignUpService<R, D, M>>) -> Router
where
    R: StudentRepository + 'static,
    D: AccountDirectory + 'static,
    M: Mailer + 'static,
{
    Router::new()
        .route("/api/v1/signup/form", get(form_handler))
        .route("/api/v1/signup/registrations", post(submit_handler::<R, D, M>))
        .route(
            "/api/v1/signup/registrations/:email",
            get(lookup_handler::<R, D, M>),
        )
        .with_state(service)
}

pub(crate) async fn form_handler() -> Response {
    (StatusCode::OK, axum::Json(signup_form())).into_response()
}

pub(crate) async fn submit_handler<R, D, M>(
    State(service): State<Arc<SignUpService<R, D, M>>>,
    axum::Json(submission): axum::Json<SignUpSubmission>,
) -> Response
where
    R: StudentRepository + 'static,
    D: AccountDirectory + 'static,
    M: Mailer + 'static,
{
    match service.submit(submission) {
        Ok(receipt) => (StatusCode::CREATED, axum::Json(receipt)).into_response(),
        Err(SignUpError::Validation(rejection)) => {
            let payload = json!({
                "error": rejection.to_string(),
                "fields": rejection.errors,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(SignUpError::Repository(cause)) => {
            error!(%cause, "registration insert failed");
            let payload = json!({ "error": "internal error" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
        Err(SignUpError::Mail(cause)) => {
            error!(%cause, "registration notice dispatch failed");
            let payload = json!({
                "error": "registration saved but notification delivery failed",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn lookup_handler<R, D, M>(
    State(service): State<Arc<SignUpService<R, D, M>>>,
    Path(email): Path<String>,
) -> Response
where
    R: StudentRepository + 'static,
    D: AccountDirectory + 'static,
    M: Mailer + 'static,
{
    match service.lookup(&email) {
        Ok(Some(record)) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Ok(None) => {
            let payload = json!({ "error": "registration not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(cause) => {
            error!(%cause, "registration lookup failed");
            let payload = json!({ "error": "internal error" });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
