use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFocus {
    Name,
    Email,
    Password,
    Confirm,
    Submit,
    Switch,
}

/// State for the login/signup screen.
pub struct AuthScreenState {
    pub mode: AuthMode,
    pub name_input: String,
    pub email_input: String,
    pub password_input: String,
    pub confirm_input: String,
    pub focus: AuthFocus,
    /// The in-flight simulated authentication call. Held so navigating away
    /// can abort it before it completes against a screen the user has left.
    pub pending: Option<JoinHandle<()>>,
}

impl Default for AuthScreenState {
    fn default() -> Self {
        Self {
            mode: AuthMode::Login,
            name_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            confirm_input: String::new(),
            focus: AuthFocus::Email,
            pending: None,
        }
    }
}

impl AuthScreenState {
    pub fn focus_order(&self) -> &'static [AuthFocus] {
        match self.mode {
            AuthMode::Login => &[
                AuthFocus::Email,
                AuthFocus::Password,
                AuthFocus::Submit,
                AuthFocus::Switch,
            ],
            AuthMode::Signup => &[
                AuthFocus::Name,
                AuthFocus::Email,
                AuthFocus::Password,
                AuthFocus::Confirm,
                AuthFocus::Submit,
                AuthFocus::Switch,
            ],
        }
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + order.len() - 1) % order.len()];
    }

    pub fn switch_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        self.clear_inputs();
        self.focus = self.focus_order()[0];
    }

    pub fn clear_inputs(&mut self) {
        self.name_input.clear();
        self.email_input.clear();
        self.password_input.clear();
        self.confirm_input.clear();
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Abort the in-flight auth simulation, if any. Called when the user
    /// leaves the screen so a stale completion can never land afterwards.
    pub fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            tracing::debug!("aborted pending authentication task");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_around_the_login_order() {
        let mut auth = AuthScreenState::default();
        assert_eq!(auth.focus, AuthFocus::Email);
        for _ in 0..auth.focus_order().len() {
            auth.focus_next();
        }
        assert_eq!(auth.focus, AuthFocus::Email);
    }

    #[test]
    fn switching_mode_clears_inputs_and_resets_focus() {
        let mut auth = AuthScreenState::default();
        auth.email_input.push_str("someone@cuilahore.edu.pk");
        auth.password_input.push_str("secret");
        auth.switch_mode();
        assert_eq!(auth.mode, AuthMode::Signup);
        assert!(auth.email_input.is_empty());
        assert!(auth.password_input.is_empty());
        assert_eq!(auth.focus, AuthFocus::Name);
    }

    #[test]
    fn signup_order_includes_name_and_confirm() {
        let mut auth = AuthScreenState::default();
        auth.switch_mode();
        let order = auth.focus_order();
        assert!(order.contains(&AuthFocus::Name));
        assert!(order.contains(&AuthFocus::Confirm));
    }
}
