/// Session gate
///
/// Owns the credential check and the persisted session record. Only this
/// component reads or writes the local store; everything else sees sessions
/// as values.
use std::sync::Arc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::session::Session,
    storage::LocalStore,
};

/// Single rejection line for every bad credential pair. Unknown address and
/// wrong secret are indistinguishable on purpose.
const REJECTION_MESSAGE: &str = "Invalid email or password. Please use the provided credentials.";

pub struct SessionGate {
    store: Arc<dyn LocalStore>,
    auth: AuthConfig,
}

impl SessionGate {
    pub fn new(store: Arc<dyn LocalStore>, auth: AuthConfig) -> Self {
        Self { store, auth }
    }

    /// Restore a persisted session
    ///
    /// Honored only when the stored email is the authorized address; the
    /// timestamp never expires a session. Any other record (foreign email,
    /// unreadable JSON) clears the slot. Storage read errors are absorbed.
    pub fn restore(&self) -> Option<Session> {
        let raw = match self.store.get(&self.auth.session_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Session restore read failed");
                return None;
            }
        };

        match serde_json::from_str::<Session>(&raw) {
            Ok(session) if session.email == self.auth.authorized_email => {
                tracing::info!(email = %session.email, "Session restored");
                Some(session)
            }
            Ok(session) => {
                tracing::warn!(
                    email = %session.email,
                    "Stored session is not the authorized address; clearing slot"
                );
                self.clear_slot();
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Stored session unreadable; clearing slot");
                self.clear_slot();
                None
            }
        }
    }

    /// Check the credential pair and establish a persisted session
    ///
    /// A persist failure is logged and absorbed: the session is still
    /// established for this process, it just will not survive a restart.
    pub fn authenticate(&self, email: &str, password: &str) -> AppResult<Session> {
        if email != self.auth.authorized_email || password != self.auth.authorized_password {
            tracing::info!(email = %email, "Sign-in rejected");
            return Err(AppError::Unauthorized(REJECTION_MESSAGE.to_string()));
        }

        let session = Session::new(email);
        match serde_json::to_string(&session) {
            Ok(raw) => {
                if let Err(e) = self.store.set(&self.auth.session_key, &raw) {
                    tracing::warn!(error = %e, "Session persist failed; continuing unpersisted");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session serialize failed; continuing unpersisted");
            }
        }

        tracing::info!(email = %session.email, "Sign-in accepted");
        Ok(session)
    }

    /// Drop the persisted session
    pub fn sign_out(&self) {
        self.clear_slot();
        tracing::info!("Signed out; session slot cleared");
    }

    fn clear_slot(&self) {
        if let Err(e) = self.store.remove(&self.auth.session_key) {
            tracing::warn!(error = %e, "Session clear failed");
        }
    }
}
