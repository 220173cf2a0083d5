//! Address balance aggregation over `listunspent` results.

use crate::rpc::types::UnspentOutput;

/// Sum the `amount` field across unspent outputs.
///
/// Amounts are added as `f64` exactly as the node reports them; no rounding
/// or unit conversion is applied, so the result carries the same
/// floating-point precision as the node's own JSON representation.
pub fn sum_unspent(utxos: &[UnspentOutput]) -> f64 {
    utxos.iter().map(|utxo| utxo.amount).sum()
}
