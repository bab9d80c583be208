use ratatui::widgets::ListState;
use uuid::Uuid;

use crate::model::{ExamType, Listing, PaperSubmission, PastPaper};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneFocus {
    Search,
    List,
}

/// A searchable, faceted directory of records with a single-selection
/// detail dialog. One implementation, instantiated for jobs, papers,
/// and events.
pub struct Directory<R: Listing> {
    pub records: Vec<R>,
    pub query: String,
    pub facet: Option<R::Facet>,
    pub focus: PaneFocus,
    pub list_state: ListState,
    selected: Option<Uuid>,
}

impl<R: Listing> Directory<R> {
    pub fn new(records: Vec<R>) -> Self {
        let mut list_state = ListState::default();
        if !records.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            records,
            query: String::new(),
            facet: None,
            focus: PaneFocus::Search,
            list_state,
            selected: None,
        }
    }

    /// The derived view: records whose searchable fields contain the query
    /// as a case-insensitive substring and whose facet matches the active
    /// one (or all, when none is active). Pure and order-preserving.
    pub fn filtered(&self) -> Vec<&R> {
        let query = self.query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                let matches_query = query.is_empty()
                    || r.search_fields()
                        .iter()
                        .any(|field| field.to_lowercase().contains(&query));
                let matches_facet = self.facet.map_or(true, |f| r.facet() == f);
                matches_query && matches_facet
            })
            .collect()
    }

    /// Selecting the active facet again clears it back to "all".
    pub fn toggle_facet(&mut self, facet: R::Facet) {
        self.facet = if self.facet == Some(facet) {
            None
        } else {
            Some(facet)
        };
        self.clamp_cursor();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.clamp_cursor();
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.clamp_cursor();
    }

    pub fn cursor_down(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    pub fn cursor_up(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + len - 1) % len));
    }

    /// Open the detail dialog for the record under the cursor.
    pub fn select_at_cursor(&mut self) {
        let id = self
            .list_state
            .selected()
            .and_then(|idx| self.filtered().get(idx).map(|r| r.id()));
        if let Some(id) = id {
            self.select(id);
        }
    }

    pub fn select(&mut self, id: Uuid) {
        self.selected = Some(id);
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected
    }

    /// Resolve the selected id against the FULL collection, not the filtered
    /// view. Stale or absent ids resolve to nothing.
    pub fn selected_record(&self) -> Option<&R> {
        self.selected
            .and_then(|id| self.records.iter().find(|r| r.id() == id))
    }

    fn clamp_cursor(&mut self) {
        let len = self.filtered().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        match self.list_state.selected() {
            Some(idx) if idx >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            _ => {}
        }
    }
}

// --- Past papers: directory plus the contribute dialog ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFocus {
    CourseCode,
    CourseName,
    ExamType,
    Semester,
    Year,
    File,
    Submit,
    Cancel,
}

pub const SEMESTERS: [&str; 3] = ["Spring", "Fall", "Summer"];
pub const YEARS: [&str; 5] = ["2024", "2023", "2022", "2021", "2020"];

/// The contribute-a-paper form. Exam type, semester, and year are pick-one
/// selects; the rest are free text.
pub struct UploadForm {
    pub course_code: String,
    pub course_name: String,
    pub exam_type: Option<ExamType>,
    pub semester: Option<usize>,
    pub year: Option<usize>,
    pub file: String,
    pub focus: UploadFocus,
}

impl Default for UploadForm {
    fn default() -> Self {
        Self {
            course_code: String::new(),
            course_name: String::new(),
            exam_type: None,
            semester: None,
            year: None,
            file: String::new(),
            focus: UploadFocus::CourseCode,
        }
    }
}

impl UploadForm {
    const FOCUS_ORDER: [UploadFocus; 8] = [
        UploadFocus::CourseCode,
        UploadFocus::CourseName,
        UploadFocus::ExamType,
        UploadFocus::Semester,
        UploadFocus::Year,
        UploadFocus::File,
        UploadFocus::Submit,
        UploadFocus::Cancel,
    ];

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
        self.focus = Self::FOCUS_ORDER[(idx + Self::FOCUS_ORDER.len() - 1) % Self::FOCUS_ORDER.len()];
    }

    /// Step the focused select through its options.
    pub fn cycle_select(&mut self, forward: bool) {
        match self.focus {
            UploadFocus::ExamType => {
                self.exam_type = Some(match (self.exam_type, forward) {
                    (None, _) => ExamType::Midterm,
                    (Some(ExamType::Midterm), _) => ExamType::Final,
                    (Some(ExamType::Final), _) => ExamType::Midterm,
                });
            }
            UploadFocus::Semester => {
                self.semester = Some(step(self.semester, SEMESTERS.len(), forward));
            }
            UploadFocus::Year => {
                self.year = Some(step(self.year, YEARS.len(), forward));
            }
            _ => {}
        }
    }

    /// Validate the form and produce a review-pending submission. Course
    /// code, course name, exam type, and the file are required.
    pub fn submit(&self) -> Result<PaperSubmission, String> {
        let exam_type = match self.exam_type {
            Some(exam_type)
                if !self.course_code.trim().is_empty()
                    && !self.course_name.trim().is_empty()
                    && !self.file.trim().is_empty() =>
            {
                exam_type
            }
            _ => return Err("Please fill all required fields and upload a file".to_string()),
        };
        Ok(PaperSubmission {
            course_code: self.course_code.trim().to_string(),
            course_name: self.course_name.trim().to_string(),
            exam_type,
            semester: self
                .semester
                .map(|i| SEMESTERS[i].to_string())
                .unwrap_or_default(),
            year: self.year.map(|i| YEARS[i].to_string()).unwrap_or_default(),
            file_name: self.file.trim().to_string(),
        })
    }
}

fn step(current: Option<usize>, len: usize, forward: bool) -> usize {
    match current {
        None => 0,
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
    }
}

/// Past papers screen: the published directory, the contribute dialog, and
/// the review-pending queue. Accepted submissions are acknowledged and
/// queued; the published list never changes in this mock.
pub struct PapersState {
    pub directory: Directory<PastPaper>,
    pub upload_open: bool,
    pub upload: UploadForm,
    pub pending: Vec<PaperSubmission>,
}

impl PapersState {
    /// Only approved papers are published; contributed ones wait in
    /// `pending` until an administrator (who never shows up in this mock)
    /// approves them.
    pub fn new(papers: Vec<PastPaper>) -> Self {
        let published = papers.into_iter().filter(|p| p.approved).collect();
        Self {
            directory: Directory::new(published),
            upload_open: false,
            upload: UploadForm::default(),
            pending: Vec::new(),
        }
    }

    pub fn open_upload(&mut self) {
        self.upload_open = true;
        self.upload = UploadForm::default();
    }

    pub fn close_upload(&mut self) {
        self.upload_open = false;
    }

    /// Accept the current form as a submission. On success the form resets
    /// and the dialog closes; the submission sits in the pending queue.
    pub fn submit_upload(&mut self) -> Result<(), String> {
        let submission = self.upload.submit()?;
        self.pending.push(submission);
        self.upload = UploadForm::default();
        self.upload_open = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{seed_events, seed_jobs, seed_papers};
    use crate::model::{EventKind, WorkStyle};

    #[test]
    fn empty_query_and_no_facet_match_everything() {
        let jobs = Directory::new(seed_jobs());
        assert_eq!(jobs.filtered().len(), jobs.records.len());
    }

    #[test]
    fn query_matches_case_insensitive_substrings() {
        let mut jobs = Directory::new(seed_jobs());
        jobs.query = "ISLAMABAD".to_string();
        let hits = jobs.filtered();
        assert_eq!(hits.len(), 2);
        assert!(hits
            .iter()
            .all(|j| j.location.to_lowercase().contains("islamabad")));
    }

    #[test]
    fn filter_output_is_a_stable_order_subset() {
        let mut events = Directory::new(seed_events());
        events.query = "workshop".to_string();
        let hits = events.filtered();
        assert!(!hits.is_empty());
        let mut last_pos = 0;
        for hit in &hits {
            let pos = events
                .records
                .iter()
                .position(|r| r.id == hit.id)
                .expect("every hit comes from the input");
            assert!(pos >= last_pos);
            last_pos = pos;
        }
    }

    #[test]
    fn facet_and_query_combine() {
        let mut jobs = Directory::new(seed_jobs());
        jobs.query = "developer".to_string();
        jobs.facet = Some(WorkStyle::OnSite);
        let hits = jobs.filtered();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Full Stack Developer");
    }

    #[test]
    fn toggling_a_facet_twice_returns_to_all() {
        let mut events = Directory::new(seed_events());
        let all = events.filtered().len();
        events.toggle_facet(EventKind::Online);
        assert!(events.filtered().len() < all);
        events.toggle_facet(EventKind::Online);
        assert_eq!(events.filtered().len(), all);
    }

    #[test]
    fn selecting_another_record_replaces_the_selection() {
        let mut jobs = Directory::new(seed_jobs());
        let first = jobs.records[0].id;
        let second = jobs.records[1].id;
        jobs.select(first);
        jobs.select(second);
        assert_eq!(jobs.selected_record().map(|j| j.id), Some(second));
        jobs.deselect();
        assert!(jobs.selected_record().is_none());
    }

    #[test]
    fn stale_selection_resolves_to_nothing() {
        let mut papers = Directory::new(seed_papers());
        papers.select(uuid::Uuid::new_v4());
        assert!(papers.selected_record().is_none());
    }

    #[test]
    fn detail_lookup_ignores_the_active_filter() {
        let mut jobs = Directory::new(seed_jobs());
        let online_job = jobs
            .records
            .iter()
            .find(|j| j.style == WorkStyle::Online)
            .map(|j| j.id)
            .unwrap();
        jobs.select(online_job);
        // Filter the online job out of the visible list
        jobs.toggle_facet(WorkStyle::OnSite);
        assert!(jobs.selected_record().is_some());
    }

    #[test]
    fn incomplete_upload_forms_are_rejected() {
        let mut papers = PapersState::new(seed_papers());
        papers.open_upload();
        papers.upload.course_code = "CSC354".to_string();
        assert!(papers.submit_upload().is_err());
        assert!(papers.pending.is_empty());
    }

    #[test]
    fn accepted_submissions_queue_without_publishing() {
        let mut papers = PapersState::new(seed_papers());
        let published = papers.directory.records.len();
        papers.open_upload();
        papers.upload.course_code = "CSC336".to_string();
        papers.upload.course_name = "Web Technologies".to_string();
        papers.upload.exam_type = Some(ExamType::Midterm);
        papers.upload.file = "web_mid_2024.pdf".to_string();
        papers.submit_upload().unwrap();
        assert_eq!(papers.pending.len(), 1);
        assert_eq!(papers.directory.records.len(), published);
        assert!(!papers.upload_open);
    }
}
