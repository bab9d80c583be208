use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::app::{AppEvent, AuthOutcome};
use crate::model::Campus;

/// Fallback for addresses checked before any campus is selected.
const GENERIC_SUFFIX: &str = "@comsats.edu.pk";

/// Service for authentication validation and the simulated sign-in call
pub struct AuthService;

impl AuthService {
    pub fn email_suffix(campus: Option<Campus>) -> &'static str {
        campus.map(|c| c.email_suffix()).unwrap_or(GENERIC_SUFFIX)
    }

    /// An address is valid only under the selected campus's domain.
    pub fn validate_email(email: &str, campus: Option<Campus>) -> Result<(), String> {
        let suffix = Self::email_suffix(campus);
        if email.ends_with(suffix) {
            Ok(())
        } else {
            let label = campus.map(|c| c.name()).unwrap_or("university");
            Err(format!(
                "Invalid email: please use a valid {} address ending with {}",
                label, suffix
            ))
        }
    }

    pub fn validate_login(
        email: &str,
        password: &str,
        campus: Option<Campus>,
    ) -> Result<(), String> {
        if email.trim().is_empty() || password.is_empty() {
            return Err("Fields cannot be empty".to_string());
        }
        Self::validate_email(email, campus)
    }

    pub fn validate_signup(
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
        campus: Option<Campus>,
    ) -> Result<(), String> {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            return Err("Fields cannot be empty".to_string());
        }
        Self::validate_email(email, campus)?;
        if password != confirm {
            return Err("Passwords don't match: please make sure your passwords match".to_string());
        }
        Ok(())
    }

    /// Simulate the network round-trip for login/signup: a fixed delay, then
    /// a completion event. The returned handle is held by the auth screen
    /// and aborted if the user navigates away first.
    pub fn spawn_auth_delay(
        tx: mpsc::UnboundedSender<AppEvent>,
        outcome: AuthOutcome,
        delay: Duration,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(AppEvent::Auth(outcome)).is_err() {
                tracing::warn!("auth completion dropped: event channel closed");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lahore_address_validates_only_for_lahore() {
        let email = "a@cuilahore.edu.pk";
        assert!(AuthService::validate_email(email, Some(Campus::Lahore)).is_ok());
        assert!(AuthService::validate_email(email, Some(Campus::Islamabad)).is_err());
    }

    #[test]
    fn no_campus_falls_back_to_the_generic_suffix() {
        assert!(AuthService::validate_email("a@comsats.edu.pk", None).is_ok());
        assert!(AuthService::validate_email("a@cuilahore.edu.pk", None).is_err());
    }

    #[test]
    fn login_rejects_empty_fields_before_the_domain_check() {
        let err = AuthService::validate_login("", "pw", Some(Campus::Wah)).unwrap_err();
        assert!(err.contains("empty"));
        let err = AuthService::validate_login("a@cuiwah.edu.pk", "", Some(Campus::Wah)).unwrap_err();
        assert!(err.contains("empty"));
    }

    #[test]
    fn signup_requires_matching_passwords() {
        let err = AuthService::validate_signup(
            "Ayesha",
            "a@cuiwah.edu.pk",
            "secret",
            "secrett",
            Some(Campus::Wah),
        )
        .unwrap_err();
        assert!(err.contains("match"));
        assert!(AuthService::validate_signup(
            "Ayesha",
            "a@cuiwah.edu.pk",
            "secret",
            "secret",
            Some(Campus::Wah),
        )
        .is_ok());
    }
}
