use crate::model::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileEditFocus {
    Name,
    Bio,
    RegNumber,
    Batch,
    Degree,
    NewSkill,
    NewInterest,
    Avatar,
    Cv,
    Save,
    Cancel,
}

/// State management for viewing and editing the user profile.
///
/// Edits accumulate in a draft copy; saving replaces the session profile
/// wholesale, cancelling throws the draft away.
pub struct ProfileState {
    pub editing: bool,
    pub draft: Profile,
    pub new_skill: String,
    pub new_interest: String,
    pub avatar_input: String,
    pub cv_input: String,
    pub focus: ProfileEditFocus,
    pub edit_error: Option<String>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            editing: false,
            draft: Profile::default(),
            new_skill: String::new(),
            new_interest: String::new(),
            avatar_input: String::new(),
            cv_input: String::new(),
            focus: ProfileEditFocus::Name,
            edit_error: None,
        }
    }
}

impl ProfileState {
    const FOCUS_ORDER: [ProfileEditFocus; 11] = [
        ProfileEditFocus::Name,
        ProfileEditFocus::Bio,
        ProfileEditFocus::RegNumber,
        ProfileEditFocus::Batch,
        ProfileEditFocus::Degree,
        ProfileEditFocus::NewSkill,
        ProfileEditFocus::NewInterest,
        ProfileEditFocus::Avatar,
        ProfileEditFocus::Cv,
        ProfileEditFocus::Save,
        ProfileEditFocus::Cancel,
    ];

    pub fn begin_edit(&mut self, profile: &Profile) {
        self.editing = true;
        self.draft = profile.clone();
        self.new_skill.clear();
        self.new_interest.clear();
        self.avatar_input.clear();
        self.cv_input.clear();
        self.focus = ProfileEditFocus::Name;
        self.edit_error = None;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.edit_error = None;
    }

    /// Finish editing and hand the draft over for the wholesale replace.
    pub fn take_draft(&mut self) -> Profile {
        self.editing = false;
        self.edit_error = None;
        self.draft.clone()
    }

    pub fn focus_next(&mut self) {
        let idx = Self::FOCUS_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = Self::FOCUS_ORDER[(idx + 1) % Self::FOCUS_ORDER.len()];
    }

    pub fn focus_prev(&mut self) {
        let idx = Self::FOCUS_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus =
            Self::FOCUS_ORDER[(idx + Self::FOCUS_ORDER.len() - 1) % Self::FOCUS_ORDER.len()];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_edit_copies_the_profile_into_the_draft() {
        let mut state = ProfileState::default();
        let mut profile = Profile::default();
        profile.name = "Zain Abbas".to_string();
        state.begin_edit(&profile);
        assert!(state.editing);
        assert_eq!(state.draft.name, "Zain Abbas");
    }

    #[test]
    fn cancel_leaves_the_original_untouched() {
        let mut state = ProfileState::default();
        let profile = Profile::default();
        state.begin_edit(&profile);
        state.draft.name = "Someone Else".to_string();
        state.cancel_edit();
        assert!(!state.editing);
        // the caller never sees the abandoned draft
        assert_eq!(profile.name, "Student Name");
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut state = ProfileState::default();
        state.begin_edit(&Profile::default());
        for _ in 0..ProfileState::FOCUS_ORDER.len() {
            state.focus_next();
        }
        assert_eq!(state.focus, ProfileEditFocus::Name);
        state.focus_prev();
        assert_eq!(state.focus, ProfileEditFocus::Cancel);
    }
}
