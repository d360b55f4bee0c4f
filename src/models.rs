//! Frontend Models
//!
//! Data structures matching the `/api/resources` payload.

use serde::{Deserialize, Serialize};

/// Item data structure (one entry of the resources array)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

#[cfg(test)]
impl Item {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}
