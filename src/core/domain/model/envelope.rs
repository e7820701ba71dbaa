//! Wire envelopes for Moonraker responses.
//!
//! Moonraker wraps every JSON-RPC-over-HTTP response in a `result` object,
//! and object queries add a `status` level below that. Deserialization of
//! these envelopes is strict: a body missing the expected nesting is a
//! protocol error, while optional fields *inside* the fragments are not.

use serde::Deserialize;

/// The outer `{"result": ...}` wrapper.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResult<T> {
    pub result: T,
}

/// The `{"status": ...}` level of `/printer/objects/query` responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ObjectStatus<T> {
    pub status: T,
}

/// The object list returned by `/printer/objects/list`.
#[derive(Debug, Deserialize)]
pub(crate) struct ObjectList {
    pub objects: Vec<String>,
}
