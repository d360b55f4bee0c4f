//! Items List Configuration

/// Endpoint queried when no override is given
pub const DEFAULT_ENDPOINT: &str = "/api/resources";

/// Where the items list loads its data from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsListConfig {
    pub endpoint: String,
}

impl Default for ItemsListConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl ItemsListConfig {
    /// Use `endpoint` if given, otherwise the default path
    pub fn with_endpoint(endpoint: Option<String>) -> Self {
        match endpoint {
            Some(endpoint) if !endpoint.trim().is_empty() => Self { endpoint },
            _ => Self::default(),
        }
    }
}
