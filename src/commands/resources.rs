//! Resources Commands
//!
//! Loads the item collection from the resources endpoint through the browser
//! Fetch API.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config::ItemsListConfig;
use crate::error::FetchError;
use crate::models::Item;

/// Anything that can produce the item collection once.
#[allow(async_fn_in_trait)]
pub trait ItemSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, FetchError>;
}

/// `GET {endpoint}` over the browser Fetch API
#[derive(Debug, Clone)]
pub struct HttpItemSource {
    endpoint: String,
}

impl HttpItemSource {
    pub fn new(config: &ItemsListConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ItemSource for HttpItemSource {
    async fn fetch_items(&self) -> Result<Vec<Item>, FetchError> {
        fetch_resources(&self.endpoint).await
    }
}

// ========================
// Commands
// ========================

pub async fn fetch_resources(endpoint: &str) -> Result<Vec<Item>, FetchError> {
    let window = web_sys::window()
        .ok_or_else(|| FetchError::network(Some("no window available".to_string())))?;

    let headers = Headers::new()?;
    headers.set("Content-Type", "application/json")?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(endpoint, &opts)?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    check_status(response.status(), &response.status_text())?;

    let body = JsFuture::from(response.text()?).await?;
    parse_items(&body.as_string().unwrap_or_default())
}

/// Reject anything outside 200..=299
pub fn check_status(status: u16, status_text: &str) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::HttpStatus {
            status,
            status_text: status_text.to_string(),
        })
    }
}

/// Decode the response body as an array of items
pub fn parse_items(body: &str) -> Result<Vec<Item>, FetchError> {
    Ok(serde_json::from_str(body)?)
}
