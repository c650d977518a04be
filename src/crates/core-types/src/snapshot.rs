use crate::session::Session;
use serde::{Deserialize, Serialize};

/// Observable store state, republished after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub platform_ready: bool,
    pub is_loading: bool,
    #[serde(default)]
    pub error: Option<String>,
    pub auth: Session,
}
