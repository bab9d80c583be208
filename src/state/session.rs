use crate::model::{Campus, Profile};

/// The session shared by every screen: selected campus, auth flag, profile.
///
/// Owned by `App` and passed down explicitly; nothing in the crate reaches
/// for it through globals.
pub struct SessionState {
    selected_campus: Option<Campus>,
    authenticated: bool,
    pub profile: Profile,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            selected_campus: None,
            authenticated: false,
            profile: Profile::default(),
        }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn selected_campus(&self) -> Option<Campus> {
        self.selected_campus
    }

    pub fn select_campus(&mut self, campus: Campus) {
        self.selected_campus = Some(campus);
    }

    pub fn login(&mut self) {
        self.authenticated = true;
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    /// Profile saves are wholesale: the edited draft replaces the record.
    pub fn replace_profile(&mut self, profile: Profile) {
        self.profile = profile;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_starts_unauthenticated_with_no_campus() {
        let session = SessionState::default();
        assert!(!session.is_authenticated());
        assert!(session.selected_campus().is_none());
        assert_eq!(session.profile.name, "Student Name");
    }

    #[test]
    fn login_logout_flip_the_flag() {
        let mut session = SessionState::default();
        session.login();
        assert!(session.is_authenticated());
        session.logout();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn profile_save_replaces_wholesale() {
        let mut session = SessionState::default();
        let mut draft = session.profile.clone();
        draft.name = "Ayesha Khan".to_string();
        draft.skills.clear();
        session.replace_profile(draft);
        assert_eq!(session.profile.name, "Ayesha Khan");
        assert!(session.profile.skills.is_empty());
    }
}
