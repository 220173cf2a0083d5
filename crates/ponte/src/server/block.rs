use axum::extract::{Path, State};
use axum::Json;

use super::error::{map_core_error, AppError};
use super::SharedState;

/// Fixed message for heights that do not parse; returned before any RPC
/// call is made.
pub(super) const INVALID_HEIGHT_MESSAGE: &str = "Height must be a non-negative integer.";

/// GET /block/{height}
///
/// Resolves the height to a block hash via `getblockhash`, then relays the
/// node's block JSON from `getblock` unchanged.
pub(super) async fn get_block_by_height(
    State(state): State<SharedState>,
    Path(height): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let height: u64 = height
        .parse()
        .map_err(|_| AppError::BadRequest(INVALID_HEIGHT_MESSAGE.to_string()))?;

    let hash = state
        .rpc
        .get_block_hash(height)
        .await
        .map_err(map_core_error)?;
    let block = state.rpc.get_block(&hash).await.map_err(map_core_error)?;

    Ok(Json(block))
}
