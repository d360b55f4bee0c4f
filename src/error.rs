//! Fetch Errors
//!
//! Everything that can go wrong while loading the items list.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Shown when a failure carries no usable message
pub const UNKNOWN_ERROR: &str = "An unknown error occurred.";

/// Errors produced by the items fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("API returned status {status}: {status_text}")]
    HttpStatus { status: u16, status_text: String },

    /// The request threw (network failure) or the body was not a valid item array.
    #[error("{}", .0.as_deref().unwrap_or(UNKNOWN_ERROR))]
    Network(Option<String>),
}

impl FetchError {
    /// Network/parse failure; an empty message counts as no message.
    pub fn network(message: Option<String>) -> Self {
        FetchError::Network(message.filter(|m| !m.is_empty()))
    }

    /// Convert a thrown JS value (usually a `TypeError` from `fetch`).
    /// Only `Error` objects carry a message; anything else thrown gets the fallback.
    pub fn from_js(value: &JsValue) -> Self {
        Self::network(value.dyn_ref::<js_sys::Error>().map(|err| String::from(err.message())))
    }
}

impl From<JsValue> for FetchError {
    fn from(value: JsValue) -> Self {
        Self::from_js(&value)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::network(Some(err.to_string()))
    }
}
