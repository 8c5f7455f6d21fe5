//! Access entries attached to an admin metadata set.

use serde::{Deserialize, Serialize};

/// A user granted access to a metadata set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccess {
    pub name: String,
    pub read: bool,
    pub write: bool,
}

/// A group granted access to a metadata set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAccess {
    pub id: String,
    pub name: String,
    pub read: bool,
    pub write: bool,
}
