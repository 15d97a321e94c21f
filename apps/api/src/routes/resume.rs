use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/parse-resume
///
/// Thin relay: takes the uploaded `resume` file and forwards it to the
/// external parsing service, passing the upstream JSON and status back
/// verbatim. No parsing happens here.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("resume") {
            let file_name = field.file_name().unwrap_or("resume").to_string();
            let bytes = field.bytes().await?;
            file = Some((file_name, bytes));
            break;
        }
    }

    let Some((file_name, bytes)) = file else {
        return Err(AppError::Validation("No resume file uploaded".to_string()));
    };

    let relayed = state.parser.parse_resume(file_name, bytes).await?;
    let status = StatusCode::from_u16(relayed.status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((status, Json(relayed.body)))
}
