// Copyright 2026 Brandkit Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface for the scraper.
//!
//! `POST /scrape` takes a field `website`, urlencoded or multipart, and
//! answers with the metadata record; `POST /generate-ad` wraps the ad copy placeholder.
//! CORS is wide open so browser front ends on any origin can call it.

use crate::acquisition::PageFetcher;
use crate::adcopy::generate_ad;
use crate::orchestrator::Scraper;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Form, FromRequest, Multipart, Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Form body of `POST /scrape`.
#[derive(Debug, Deserialize)]
pub struct ScrapeForm {
    pub website: Option<String>,
}

/// JSON body of `POST /generate-ad`.
#[derive(Debug, Deserialize)]
pub struct GenerateAdRequest {
    pub prompt: String,
    #[serde(default)]
    pub brand: Value,
}

/// Build the router around a shared scraper.
pub fn router<S, R>(scraper: Arc<Scraper<S, R>>) -> Router
where
    S: PageFetcher + 'static,
    R: PageFetcher + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/scrape", post(handle_scrape::<S, R>))
        .route("/generate-ad", post(handle_generate_ad))
        .layer(cors)
        .with_state(scraper)
}

/// Serve the router on `addr` until the process exits.
pub async fn start<S, R>(
    addr: std::net::SocketAddr,
    scraper: Arc<Scraper<S, R>>,
) -> anyhow::Result<()>
where
    S: PageFetcher + 'static,
    R: PageFetcher + 'static,
{
    let app = router(scraper);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn handle_scrape<S, R>(
    State(scraper): State<Arc<Scraper<S, R>>>,
    request: Request,
) -> Response
where
    S: PageFetcher + 'static,
    R: PageFetcher + 'static,
{
    let Some(url) = website_field(request)
        .await
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
    else {
        return error_response(StatusCode::BAD_REQUEST, "Missing website URL");
    };

    let record = scraper.scrape(&url).await;
    Json(record).into_response()
}

/// Read `website` from a multipart or urlencoded form body.
async fn website_field(request: Request) -> Option<String> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    if !is_multipart {
        return match Form::<ScrapeForm>::from_request(request, &()).await {
            Ok(Form(form)) => form.website,
            Err(e) => {
                tracing::debug!("rejected scrape form: {}", e.body_text());
                None
            }
        };
    }

    let mut multipart = match Multipart::from_request(request, &()).await {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!("rejected multipart body: {}", e.body_text());
            return None;
        }
    };
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("website") => {
                return field.text().await.ok();
            }
            Ok(Some(_)) => continue,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!("failed to read multipart field: {e}");
                return None;
            }
        }
    }
}

async fn handle_generate_ad(payload: Result<Json<GenerateAdRequest>, JsonRejection>) -> Response {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, &e.body_text()),
    };

    let brand_name = request
        .brand
        .get("brand_name")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty());

    Json(generate_ad(&request.prompt, brand_name)).into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}
