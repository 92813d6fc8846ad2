//! Route handlers.

use std::time::Instant;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::catalog::BeerQuery;
use crate::http::request::request_id;
use crate::http::response::{error_response, status_for};
use crate::http::server::AppState;
use crate::observability::metrics;

#[derive(Debug, Serialize)]
pub struct Welcome {
    pub version: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// `GET /`
pub async fn home() -> Json<Welcome> {
    Json(Welcome {
        version: env!("CARGO_PKG_VERSION"),
        message: "Welcome to the beer proxy!",
    })
}

/// `GET /hello`
pub async fn hello() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello, world!",
    })
}

/// `GET /beers?type=&name=&order_by=&order=`
pub async fn list_beers(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<BeerQuery>, QueryRejection>,
) -> Response {
    let start = Instant::now();
    let request_id = request_id(&headers);

    let response = match query {
        Err(rejection) => error_response(
            StatusCode::BAD_REQUEST,
            format!("Validation error: {}", rejection.body_text()),
        ),
        Ok(Query(query)) => match state.catalog.list_beers(&query).await {
            Ok(beers) => {
                tracing::info!(request_id = %request_id, count = beers.len(), "Returning beers");
                (StatusCode::OK, Json(beers)).into_response()
            }
            Err(e) => {
                let status = status_for(&e);
                if status.is_server_error() {
                    tracing::error!(
                        request_id = %request_id,
                        status = status.as_u16(),
                        error = %e,
                        "Beer listing failed"
                    );
                } else {
                    tracing::info!(
                        request_id = %request_id,
                        status = status.as_u16(),
                        error = %e,
                        "Beer listing rejected"
                    );
                }
                e.into_response()
            }
        },
    };

    metrics::record_request("/beers", response.status().as_u16(), start);
    response
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "not found")
}
