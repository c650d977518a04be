use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Authentication state as last observed from the platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque identity returned by the platform.
    #[serde(default)]
    pub user: Option<Value>,
    pub is_authenticated: bool,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: Value) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }
}
