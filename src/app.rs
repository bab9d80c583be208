use tokio::sync::mpsc;

use crate::data;
use crate::model::{JobPosting, PostAuthor, SocietyEvent};
use crate::state::{
    AppConfig, AuthMode, AuthScreenState, Directory, FeedState, NotificationState, PapersState,
    ProfileState, Screen, SessionState, UiState,
};

/// Application events multiplexed onto the main loop
pub enum AppEvent {
    Terminal(crossterm::event::Event),
    Auth(AuthOutcome),
    Tick,
}

/// What a finished (not aborted) sign-in simulation carries back.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
}

pub struct App {
    pub config: AppConfig,
    pub session: SessionState,
    pub auth: AuthScreenState,
    pub feed: FeedState,
    pub jobs: Directory<JobPosting>,
    pub papers: PapersState,
    pub events: Directory<SocietyEvent>,
    pub profile: ProfileState,
    pub notifications: NotificationState,
    pub ui: UiState,
    pub events_tx: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(events_tx: mpsc::UnboundedSender<AppEvent>) -> App {
        App {
            config: AppConfig::default(),
            session: SessionState::default(),
            auth: AuthScreenState::default(),
            feed: FeedState::new(data::seed_posts()),
            jobs: Directory::new(data::seed_jobs()),
            papers: PapersState::new(data::seed_papers()),
            events: Directory::new(data::seed_events()),
            profile: ProfileState::default(),
            notifications: NotificationState::default(),
            ui: UiState::default(),
            events_tx,
        }
    }

    pub fn set_notification(&mut self, message: impl Into<String>) {
        let close_tick =
            self.ui.tick_count + self.config.notification_timeout_ms / self.config.tick_ms;
        self.notifications.set(message, Some(close_tick));
    }

    pub fn on_tick(&mut self) {
        self.ui.tick();
        if self.notifications.should_close(self.ui.tick_count) {
            self.notifications.clear();
        }
    }

    /// All navigation funnels through here so the guard holds everywhere:
    /// guarded screens fall back to the entry screen when unauthenticated,
    /// and the auth screen itself needs a campus first. Leaving the auth
    /// screen aborts any in-flight sign-in simulation.
    pub fn navigate_to(&mut self, screen: Screen) {
        if self.ui.screen == Screen::Auth && screen != Screen::Auth {
            self.auth.cancel_pending();
        }
        let mut target = screen;
        if target.requires_auth() && !self.session.is_authenticated() {
            target = Screen::CampusSelect;
        }
        if target == Screen::Auth && self.session.selected_campus().is_none() {
            target = Screen::CampusSelect;
        }
        self.ui.set_screen(target);
    }

    pub fn navigate_path(&mut self, path: &str) {
        self.navigate_to(Screen::from_path(path));
    }

    /// Apply a completed sign-in simulation. Completions that arrive after
    /// the user left the screen (or after an abort raced the send) are
    /// stale and ignored.
    pub fn handle_auth_completed(&mut self, outcome: AuthOutcome) {
        if self.ui.screen != Screen::Auth || self.auth.pending.take().is_none() {
            tracing::debug!("ignoring stale authentication completion");
            return;
        }
        self.session.login();
        if outcome.mode == AuthMode::Signup && !outcome.name.trim().is_empty() {
            self.session.profile.name = outcome.name;
            self.session.profile.email = outcome.email;
        }
        self.set_notification(match outcome.mode {
            AuthMode::Login => "Logged in successfully. Welcome to COMSATS University App",
            AuthMode::Signup => "Account created successfully. Welcome to COMSATS University App",
        });
        self.auth.clear_inputs();
        self.navigate_to(Screen::Home);
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.auth = AuthScreenState::default();
        self.set_notification("Logged out: you have been logged out successfully");
        self.navigate_to(Screen::CampusSelect);
    }

    /// The current user as a feed author.
    pub fn current_author(&self) -> PostAuthor {
        PostAuthor {
            name: self.session.profile.name.clone(),
            avatar: self.session.profile.avatar_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Campus;
    use crate::services::AuthService;
    use std::time::Duration;

    fn test_app() -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(tx), rx)
    }

    #[test]
    fn guarded_screens_redirect_to_the_entry_screen() {
        let (mut app, _rx) = test_app();
        for path in ["/home", "/alumni", "/papers", "/societies", "/profile"] {
            app.navigate_path(path);
            assert_eq!(app.ui.screen, Screen::CampusSelect, "path {}", path);
        }
    }

    #[test]
    fn auth_screen_needs_a_selected_campus() {
        let (mut app, _rx) = test_app();
        app.navigate_to(Screen::Auth);
        assert_eq!(app.ui.screen, Screen::CampusSelect);
        app.session.select_campus(Campus::Lahore);
        app.navigate_to(Screen::Auth);
        assert_eq!(app.ui.screen, Screen::Auth);
    }

    #[test]
    fn unknown_paths_render_the_not_found_screen() {
        let (mut app, _rx) = test_app();
        app.navigate_path("/dashboard");
        assert_eq!(app.ui.screen, Screen::NotFound);
    }

    #[test]
    fn logout_redirects_to_root() {
        let (mut app, _rx) = test_app();
        app.session.select_campus(Campus::Wah);
        app.session.login();
        app.navigate_to(Screen::Profile);
        assert_eq!(app.ui.screen, Screen::Profile);
        app.logout();
        assert!(!app.session.is_authenticated());
        assert_eq!(app.ui.screen, Screen::CampusSelect);
    }

    #[test]
    fn completions_without_a_pending_task_are_stale() {
        let (mut app, _rx) = test_app();
        app.session.select_campus(Campus::Lahore);
        app.ui.set_screen(Screen::Auth);
        app.handle_auth_completed(AuthOutcome {
            mode: AuthMode::Login,
            name: String::new(),
            email: "a@cuilahore.edu.pk".to_string(),
        });
        assert!(!app.session.is_authenticated());
        assert_eq!(app.ui.screen, Screen::Auth);
    }

    #[tokio::test]
    async fn navigating_away_aborts_the_pending_sign_in() {
        let (mut app, mut rx) = test_app();
        app.session.select_campus(Campus::Lahore);
        app.ui.set_screen(Screen::Auth);
        let outcome = AuthOutcome {
            mode: AuthMode::Login,
            name: String::new(),
            email: "a@cuilahore.edu.pk".to_string(),
        };
        app.auth.pending = Some(AuthService::spawn_auth_delay(
            app.events_tx.clone(),
            outcome,
            Duration::from_secs(60),
        ));
        app.navigate_to(Screen::CampusSelect);
        assert!(app.auth.pending.is_none());
        assert!(!app.session.is_authenticated());
        // The aborted task never delivers a completion.
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn a_live_completion_authenticates_and_lands_on_the_feed() {
        let (mut app, mut rx) = test_app();
        app.session.select_campus(Campus::Lahore);
        app.ui.set_screen(Screen::Auth);
        let outcome = AuthOutcome {
            mode: AuthMode::Signup,
            name: "Ayesha Khan".to_string(),
            email: "ayesha@cuilahore.edu.pk".to_string(),
        };
        app.auth.pending = Some(AuthService::spawn_auth_delay(
            app.events_tx.clone(),
            outcome,
            Duration::from_millis(1),
        ));
        let event = rx.recv().await.expect("completion event");
        match event {
            AppEvent::Auth(outcome) => app.handle_auth_completed(outcome),
            _ => panic!("expected an auth event"),
        }
        assert!(app.session.is_authenticated());
        assert_eq!(app.ui.screen, Screen::Home);
        assert_eq!(app.session.profile.name, "Ayesha Khan");
        assert_eq!(app.session.profile.email, "ayesha@cuilahore.edu.pk");
    }
}
