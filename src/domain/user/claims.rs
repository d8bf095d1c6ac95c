// src/domain/user/claims.rs
use crate::domain::user::value_objects::Role;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Session claims as issued by the identity provider. Only the fields this
/// service reads are typed; anything else is kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ClaimsMetadata>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClaimsMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Derive the viewer's role from session claims.
///
/// `metadata.role` is the one canonical location. Role values found anywhere
/// else in the claims (`role`, `publicMetadata.role`, `custom.role`) are
/// ignored, as are unrecognised role names.
#[must_use]
pub fn role_of(claims: &SessionClaims) -> Option<Role> {
    claims
        .metadata
        .as_ref()
        .and_then(|meta| meta.role.as_deref())
        .and_then(|role| role.trim().to_ascii_lowercase().parse().ok())
}
