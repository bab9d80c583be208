use ratatui::widgets::ListState;

/// The navigable surface: a fixed set of named screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    CampusSelect,
    Auth,
    Home,
    Jobs,
    Papers,
    Events,
    Profile,
    NotFound,
}

impl Screen {
    /// Resolve a direct path to a screen. Unknown paths land on not-found.
    pub fn from_path(path: &str) -> Screen {
        match path.trim_end_matches('/') {
            "" | "/" | "/campus-selection" => Screen::CampusSelect,
            "/authentication" => Screen::Auth,
            "/home" => Screen::Home,
            "/alumni" => Screen::Jobs,
            "/papers" => Screen::Papers,
            "/societies" => Screen::Events,
            "/profile" => Screen::Profile,
            _ => Screen::NotFound,
        }
    }

    /// Everything past the entry flow requires the session to be
    /// authenticated.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::CampusSelect | Screen::Auth | Screen::NotFound)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::CampusSelect => "Campus Selection",
            Screen::Auth => "Sign In",
            Screen::Home => "Home Feed",
            Screen::Jobs => "Alumni Job Portal",
            Screen::Papers => "Past Papers",
            Screen::Events => "Society Events",
            Screen::Profile => "My Profile",
            Screen::NotFound => "Not Found",
        }
    }
}

/// State management for UI-wide concerns.
pub struct UiState {
    pub screen: Screen,
    pub should_quit: bool,
    pub tick_count: u64,

    pub campus_list_state: ListState,

    // Quit confirmation
    pub show_quit_confirm: bool,
    pub quit_confirm_selected: usize,

    // Preferences popup
    pub show_prefs: bool,
    pub prefs_selected: usize,
}

impl Default for UiState {
    fn default() -> Self {
        let mut campus_list_state = ListState::default();
        campus_list_state.select(Some(0));
        Self {
            screen: Screen::CampusSelect,
            should_quit: false,
            tick_count: 0,
            campus_list_state,
            show_quit_confirm: false,
            quit_confirm_selected: 0,
            show_prefs: false,
            prefs_selected: 0,
        }
    }
}

impl UiState {
    pub fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve_to_their_screens() {
        assert_eq!(Screen::from_path("/"), Screen::CampusSelect);
        assert_eq!(Screen::from_path("/campus-selection"), Screen::CampusSelect);
        assert_eq!(Screen::from_path("/authentication"), Screen::Auth);
        assert_eq!(Screen::from_path("/home"), Screen::Home);
        assert_eq!(Screen::from_path("/alumni"), Screen::Jobs);
        assert_eq!(Screen::from_path("/papers"), Screen::Papers);
        assert_eq!(Screen::from_path("/societies"), Screen::Events);
        assert_eq!(Screen::from_path("/profile"), Screen::Profile);
    }

    #[test]
    fn unknown_paths_land_on_not_found() {
        assert_eq!(Screen::from_path("/admin"), Screen::NotFound);
        assert_eq!(Screen::from_path("nonsense"), Screen::NotFound);
    }

    #[test]
    fn entry_screens_are_unguarded() {
        assert!(!Screen::CampusSelect.requires_auth());
        assert!(!Screen::Auth.requires_auth());
        assert!(!Screen::NotFound.requires_auth());
        assert!(Screen::Home.requires_auth());
        assert!(Screen::Profile.requires_auth());
    }
}
