//! Shop JSON API Healthcheck Handlers

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::messages::MessageResponse;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
}

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Root handler
///
/// Confirms the API is accepting requests
#[endpoint(tags("health"), summary = "API status")]
pub(crate) async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("API is running"))
}
