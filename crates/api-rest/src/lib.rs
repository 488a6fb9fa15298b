//! # API REST
//!
//! REST surface for the Minik validator.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - Mapping [`ValidationError`] onto `422 Unprocessable Entity` responses
//!
//! The router is built by [`router`] and served by the workspace's `minik-run` binary.

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use minik_core::{
    activity_field, baby_field, ActivityCandidate, BabyProfileCandidate, SanitizedActivity,
    SanitizedBabyProfile, ValidationError, Validator,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    validator: Arc<Validator>,
}

impl AppState {
    pub fn new(validator: Validator) -> Self {
        Self {
            validator: Arc::new(validator),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Body returned with every `422` response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    /// Snake-case error kind, e.g. `out_of_range`
    pub kind: String,
    /// Human-readable message, suitable for display
    pub message: String,
}

/// Wire shape of a baby profile, both as submitted and as returned once sanitized.
///
/// Unknown keys are accepted on input and silently dropped.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BabyProfileBody {
    pub name: Option<String>,
    /// ISO 8601 date or timestamp, not in the future
    pub birth_date: Option<String>,
    /// `male`, `female` or `other`
    pub gender: Option<String>,
    /// Kilograms
    pub weight: Option<f64>,
    /// Centimetres
    pub height: Option<f64>,
    /// `A+`, `A-`, `B+`, `B-`, `AB+`, `AB-`, `O+` or `O-`
    pub blood_type: Option<String>,
    #[schema(value_type = Object)]
    pub photo: Option<Value>,
}

/// Wire shape of an activity, both as submitted and as returned once sanitized.
#[derive(Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityBody {
    /// `feeding`, `sleep`, `diaper`, `health`, `milestone` or `growth`
    #[serde(rename = "type")]
    pub activity_type: String,
    pub start_time: String,
    pub end_time: Option<String>,
    /// Seconds, between 0 and 86400
    pub duration: Option<f64>,
    pub notes: Option<String>,
    pub baby_id: Option<u64>,
}

#[derive(Clone, Copy, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Baby,
    Activity,
}

#[derive(Deserialize, ToSchema)]
pub struct FieldCheckReq {
    pub field: String,
    pub kind: RecordKind,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct FieldCheckRes {
    /// Canonical field name
    pub field: String,
}

type ApiError = (StatusCode, Json<ErrorRes>);

#[derive(OpenApi)]
#[openapi(
    paths(health, sanitize_baby_profile, sanitize_activity, check_field),
    components(schemas(
        HealthRes,
        ErrorRes,
        BabyProfileBody,
        ActivityBody,
        RecordKind,
        FieldCheckReq,
        FieldCheckRes
    ))
)]
struct ApiDoc;

/// Builds the REST router, including Swagger UI at `/swagger-ui`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/babies/sanitize", post(sanitize_baby_profile))
        .route("/activities/sanitize", post(sanitize_activity))
        .route("/fields/check", post(check_field))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Logs a rejected request and converts the error into a `422` response.
fn reject(record: &'static str, err: ValidationError) -> ApiError {
    tracing::warn!(record, kind = %err.kind(), "validation failed");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorRes {
            kind: err.kind().as_str().to_owned(),
            message: err.message(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Minik validator is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/babies/sanitize",
    request_body = BabyProfileBody,
    responses(
        (status = 200, description = "Sanitized baby profile", body = BabyProfileBody),
        (status = 422, description = "Validation failed", body = ErrorRes)
    )
)]
/// Validate and sanitize a baby profile
///
/// Only whitelisted fields are returned. Absent fields stay absent.
///
/// # Returns
/// * `Ok(Json<SanitizedBabyProfile>)` - The profile as it may be stored
/// * `Err((StatusCode, Json<ErrorRes>))` - The first field that failed validation
#[axum::debug_handler]
async fn sanitize_baby_profile(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SanitizedBabyProfile>, ApiError> {
    let result = BabyProfileCandidate::from_value(body)
        .and_then(|candidate| state.validator.sanitize_baby_profile(&candidate));

    match result {
        Ok(profile) => {
            tracing::debug!(fields = profile.present_fields().len(), "baby profile accepted");
            Ok(Json(profile))
        }
        Err(e) => Err(reject("baby profile", e)),
    }
}

#[utoipa::path(
    post,
    path = "/activities/sanitize",
    request_body = ActivityBody,
    responses(
        (status = 200, description = "Sanitized activity", body = ActivityBody),
        (status = 422, description = "Validation failed", body = ErrorRes)
    )
)]
/// Validate and sanitize an activity
///
/// `type` and `startTime` are required; times may lie in the future.
#[axum::debug_handler]
async fn sanitize_activity(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SanitizedActivity>, ApiError> {
    let result = ActivityCandidate::from_value(body)
        .and_then(|candidate| state.validator.sanitize_activity(&candidate));

    match result {
        Ok(activity) => {
            tracing::debug!(activity_type = %activity.activity_type, "activity accepted");
            Ok(Json(activity))
        }
        Err(e) => Err(reject("activity", e)),
    }
}

#[utoipa::path(
    post,
    path = "/fields/check",
    request_body = FieldCheckReq,
    responses(
        (status = 200, description = "Field is whitelisted", body = FieldCheckRes),
        (status = 422, description = "Field is not whitelisted", body = ErrorRes)
    )
)]
/// Check a field name against the whitelist of a record kind
async fn check_field(Json(req): Json<FieldCheckReq>) -> Result<Json<FieldCheckRes>, ApiError> {
    let field = match req.kind {
        RecordKind::Baby => baby_field(&req.field).map(|f| f.as_str()),
        RecordKind::Activity => activity_field(&req.field).map(|f| f.as_str()),
    };

    field
        .map(|field| {
            Json(FieldCheckRes {
                field: field.to_owned(),
            })
        })
        .map_err(|e| reject("field", e))
}
