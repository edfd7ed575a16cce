#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// Canonical identity shape for the authenticated user. The `name | fullname`
/// fallback chains seen across portal profiles are coalesced once, at the
/// profile boundary, into this shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub name: String,
    pub email: String,
    pub phone: String,
}
