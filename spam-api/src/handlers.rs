//! API request handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use spam_rs::spam::{MessageResult, NumberResult};
use spam_rs::{SpamDetection, SpamError};
use std::sync::Arc;
use tracing::error;

/// Shared application state
pub struct AppState {
    pub detector: Arc<dyn SpamDetection>,
}

/// Message prediction request
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub message: String,
}

/// Number prediction request
#[derive(Debug, Deserialize)]
pub struct NumberRequest {
    pub number: String,
}

/// Message prediction response
#[derive(Debug, Serialize)]
pub struct MessagePrediction {
    pub prediction: String,
    pub confidence: f64,
    pub explanation: String,
    pub urls: Vec<String>,
    pub phones: Vec<String>,
    pub details: MessageDetails,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDetails {
    pub urls_detected: usize,
    pub phones_detected: usize,
    pub risk_factors: Vec<String>,
}

impl From<MessageResult> for MessagePrediction {
    fn from(result: MessageResult) -> Self {
        Self {
            prediction: result.verdict().to_string(),
            confidence: result.confidence(),
            explanation: result.explanation().to_string(),
            urls: result.urls().to_vec(),
            phones: result.phones().to_vec(),
            details: MessageDetails {
                urls_detected: result.url_count(),
                phones_detected: result.phone_count(),
                risk_factors: result.risk_factors().to_vec(),
            },
        }
    }
}

/// Number prediction response
#[derive(Debug, Serialize)]
pub struct NumberPrediction {
    pub prediction: String,
    pub confidence: f64,
    pub explanation: String,
    pub source: String,
    pub number: String,
}

impl From<NumberResult> for NumberPrediction {
    fn from(result: NumberResult) -> Self {
        Self {
            prediction: result.verdict().to_string(),
            confidence: result.confidence(),
            explanation: result.explanation().to_string(),
            source: result.source().to_string(),
            number: result.normalized_number().to_string(),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: &str) -> Self {
        Self {
            error: msg.to_string(),
        }
    }
}

fn error_response(err: SpamError) -> axum::response::Response {
    if err.is_invalid_input() {
        (StatusCode::BAD_REQUEST, Json(ApiError::new(&err.to_string()))).into_response()
    } else {
        error!("Prediction failed: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::new("Failed to analyze input. Please try again.")),
        )
            .into_response()
    }
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /api/predict/message - Classify a text message
pub async fn predict_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MessageRequest>,
) -> impl IntoResponse {
    match state.detector.predict_message(&req.message).await {
        Ok(result) => (StatusCode::OK, Json(MessagePrediction::from(result))).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/predict/number - Classify a phone number
pub async fn predict_number(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NumberRequest>,
) -> impl IntoResponse {
    match state.detector.predict_number(&req.number).await {
        Ok(result) => (StatusCode::OK, Json(NumberPrediction::from(result))).into_response(),
        Err(e) => error_response(e),
    }
}
