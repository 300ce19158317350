use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::backend::{loggable_error, number_url};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Default)]
pub struct Params {
    pub num: Option<String>,
    pub key: Option<String>,
}

impl Params {
    /// Repeated keys collapse to their last value.
    pub fn from_query(mut query: HashMap<String, String>) -> Self {
        Params {
            num: query.remove("num"),
            key: query.remove("key"),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub async fn handler(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, AppError> {
    let request_id = Uuid::new_v4();
    forward(state, Params::from_query(query))
        .instrument(info_span!("forward", %request_id))
        .await
}

async fn forward(state: AppState, params: Params) -> Result<Response, AppError> {
    let (num, key) = match (present(params.num), present(params.key)) {
        (Some(num), Some(key)) => (num, key),
        _ => {
            warn!("Rejected request with missing parameters");
            return Err(AppError::MissingParameters);
        }
    };

    let base_url = state.backend_url.resolve();
    debug!(target_url = %number_url(&base_url, &num, "***"), "Forwarding to backend");

    match state.client.get_json(&number_url(&base_url, &num, &key)).await {
        Ok(backend) => {
            info!(status = backend.status.as_u16(), "Backend responded");
            Ok((backend.status, Json(backend.body)).into_response())
        }
        Err(e) => {
            error!(error = %loggable_error(&e), "Backend connection failed");
            Err(e.into())
        }
    }
}
