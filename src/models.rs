//! Frontend Models
//!
//! Data structures matching the remote API.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Record returned by the records endpoint.
///
/// Imported as the server sends it: any JSON number is a valid id and
/// missing or `null` fields stay `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: Number,
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<Number>,
}
