use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::errors::{ExtractError, SummarizeError};
use crate::extract::extract_upload;
use crate::summarize::{validate_text, Summarizer, SummaryRequest, SummaryStyle, DEFAULT_PERCENTAGE};

const INDEX_PAGE: &str = include_str!("../static/index.html");
const INTERNAL_ERROR: &str = "Internal error while summarizing";

#[derive(Clone)]
struct AppState {
    summarizer: Arc<dyn Summarizer>,
    upload_dir: Arc<PathBuf>,
}

pub struct HttpServer {
    summarizer: Arc<dyn Summarizer>,
    upload_dir: PathBuf,
    max_upload_bytes: usize,
}

impl HttpServer {
    pub fn new(summarizer: Arc<dyn Summarizer>, upload_dir: PathBuf, max_upload_bytes: usize) -> Self {
        Self {
            summarizer,
            upload_dir,
            max_upload_bytes,
        }
    }

    pub fn router(&self) -> Router {
        let state = AppState {
            summarizer: self.summarizer.clone(),
            upload_dir: Arc::new(self.upload_dir.clone()),
        };
        Router::new()
            .route("/", get(index))
            .route("/summarize", post(summarize))
            .route("/upload", post(upload))
            .layer(DefaultBodyLimit::max(self.max_upload_bytes))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    pub async fn run<F>(self, listener: tokio::net::TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(%addr, "run loop started: accepting HTTP requests");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}

async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeBody>, JsonRejection>,
) -> Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(e) => {
            tracing::warn!(error=%e.body_text(), "invalid summarize body");
            return error_response(StatusCode::BAD_REQUEST, "Invalid JSON body");
        }
    };
    let request = match body.into_request() {
        Ok(r) => r,
        Err(e) => return summarize_error(e, None),
    };

    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, style=%request.style, percentage=request.percentage, "received summarize request");
    let summarizer = state.summarizer.clone();
    let res = tokio::task::spawn_blocking(move || summarizer.summarize(&request)).await;
    match res {
        Ok(Ok(result)) => (StatusCode::OK, Json(result)).into_response(),
        Ok(Err(e)) => summarize_error(e, Some(request_id)),
        Err(e) => summarize_error(SummarizeError::Other(e.to_string()), Some(request_id)),
    }
}

async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let Ok(mut multipart) = multipart else {
        return extract_error(ExtractError::NoFile);
    };

    let (file_name, data) = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("file") => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data: Bytes = match field.bytes().await {
                    Ok(b) => b,
                    Err(e) => return error_response(e.status(), &e.body_text()),
                };
                break (file_name, data);
            }
            Ok(Some(_)) => continue,
            Ok(None) => return extract_error(ExtractError::NoFile),
            Err(e) => return error_response(e.status(), &e.body_text()),
        }
    };

    tracing::info!(file_name=%file_name, bytes = data.len(), "received upload");
    let upload_dir = state.upload_dir.clone();
    let res = tokio::task::spawn_blocking(move || extract_upload(&upload_dir, &file_name, &data)).await;
    match res {
        Ok(Ok(text)) => (StatusCode::OK, Json(json!({ "text": text }))).into_response(),
        Ok(Err(e)) => extract_error(e),
        Err(e) => extract_error(ExtractError::Io(e.to_string())),
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

fn summarize_error(e: SummarizeError, request_id: Option<Uuid>) -> Response {
    if e.is_validation() {
        return error_response(StatusCode::BAD_REQUEST, &e.to_string());
    }
    tracing::error!(request_id=?request_id, error=%e, "summarization failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
}

fn extract_error(e: ExtractError) -> Response {
    if e.is_validation() {
        return error_response(StatusCode::BAD_REQUEST, &e.to_string());
    }
    tracing::error!(error=%e, "document extraction failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
}

// Wire struct for POST /summarize
#[derive(Debug, Deserialize)]
struct SummarizeBody {
    #[serde(default)]
    text: String,
    style: Option<String>,
    percentage: Option<serde_json::Value>,
}

impl SummarizeBody {
    /// Boundary checks in wire order: text, then style, then percentage.
    fn into_request(self) -> Result<SummaryRequest, SummarizeError> {
        validate_text(&self.text)?;
        let style = match self.style.as_deref() {
            None => SummaryStyle::default(),
            Some(s) => s.parse()?,
        };
        let percentage = parse_percentage(self.percentage.as_ref())?;
        Ok(SummaryRequest::new(self.text, style, percentage))
    }
}

fn parse_percentage(value: Option<&serde_json::Value>) -> Result<i64, SummarizeError> {
    use serde_json::Value;
    match value {
        None | Some(Value::Null) => Ok(DEFAULT_PERCENTAGE),
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .ok_or(SummarizeError::InvalidPercentage),
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| SummarizeError::InvalidPercentage),
        Some(_) => Err(SummarizeError::InvalidPercentage),
    }
}
