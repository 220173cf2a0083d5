pub mod balance;
pub mod error;
pub mod rpc;

pub use error::{CoreError, RpcError};
