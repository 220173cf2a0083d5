use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use ponte_core::balance::sum_unspent;

use super::error::{map_core_error, AppError};
use super::SharedState;

/// Wallet whose UTXO set is consulted for balance queries.
// TODO: allow selecting the wallet via a CLI flag instead of a fixed name.
const BALANCE_WALLET: &str = "wallet1";

#[derive(Serialize)]
pub(super) struct BalanceResponse {
    address: String,
    balance: f64,
}

/// GET /address/{address}/balance
///
/// Sums `amount` over the wallet's unspent outputs paying to the address,
/// mempool outputs included. The sum is plain `f64` addition over the
/// node's own representation; an address with no unspent outputs reports a
/// balance of zero.
pub(super) async fn get_address_balance(
    State(state): State<SharedState>,
    Path(address): Path<String>,
) -> Result<Json<BalanceResponse>, AppError> {
    let utxos = state
        .rpc
        .list_unspent(BALANCE_WALLET, &address)
        .await
        .map_err(map_core_error)?;

    let balance = sum_unspent(&utxos);
    Ok(Json(BalanceResponse { address, balance }))
}
