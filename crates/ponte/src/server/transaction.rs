use axum::extract::{Path, State};
use axum::Json;

use super::error::{map_core_error, AppError};
use super::SharedState;

/// GET /transaction/{txid}
///
/// Relays `getrawtransaction` verbose output unchanged. The txid is
/// forwarded as received; the node performs format validation.
pub(super) async fn get_transaction(
    State(state): State<SharedState>,
    Path(txid): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let tx = state
        .rpc
        .get_raw_transaction(&txid)
        .await
        .map_err(map_core_error)?;

    Ok(Json(tx))
}
