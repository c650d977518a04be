//! Session/auth facade
//!
//! Sign-in, sign-out and session checks against the platform, folded into the
//! store's `auth` state. Failures land in the store error and leave the
//! previous session untouched.

use super::actor::StoreActor;
use crate::util::errors::{user_message, FactCheckError, FactCheckResult};
use factcheck_core_types::Session;
use factcheck_runtime_ports::Platform;
use log::{debug, warn};

impl StoreActor {
    pub(super) async fn check_auth_status(&self) {
        let Some(platform) = self.platform() else {
            return;
        };

        match load_session(platform.as_ref()).await {
            Ok(session) => {
                debug!(
                    "Auth status checked: is_authenticated={}",
                    session.is_authenticated
                );
                self.state.set_session(session);
            }
            Err(e) => {
                warn!("Failed to check auth status: error={}", e);
                self.state
                    .fail(user_message(&e, "Failed to check auth status"));
            }
        }
    }

    pub(super) async fn sign_in(&self) {
        let Some(platform) = self.platform() else {
            return;
        };
        self.state.begin();

        match platform.sign_in().await {
            Ok(()) => self.check_auth_status().await,
            Err(e) => {
                let e = FactCheckError::Auth(e.to_string());
                warn!("Sign in failed: error={}", e);
                self.state.fail(user_message(&e, "Sign in failed"));
            }
        }
    }

    pub(super) async fn sign_out(&self) {
        let Some(platform) = self.platform() else {
            return;
        };
        self.state.begin();

        match platform.sign_out().await {
            Ok(()) => self.state.set_session(Session::anonymous()),
            Err(e) => {
                let e = FactCheckError::Auth(e.to_string());
                warn!("Sign out failed: error={}", e);
                self.state.fail(user_message(&e, "Sign out failed"));
            }
        }
    }
}

async fn load_session(platform: &dyn Platform) -> FactCheckResult<Session> {
    let signed_in = platform
        .is_signed_in()
        .await
        .map_err(|e| FactCheckError::Auth(e.to_string()))?;
    if !signed_in {
        return Ok(Session::anonymous());
    }

    let user = platform
        .get_user()
        .await
        .map_err(|e| FactCheckError::Auth(e.to_string()))?;
    Ok(Session::signed_in(user))
}
