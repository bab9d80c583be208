use uuid::Uuid;

// --- Campuses ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Campus {
    Islamabad,
    Lahore,
    Wah,
    Vehari,
    Sahiwal,
    Attock,
    Abbottabad,
}

impl Campus {
    pub const ALL: [Campus; 7] = [
        Campus::Islamabad,
        Campus::Lahore,
        Campus::Wah,
        Campus::Vehari,
        Campus::Sahiwal,
        Campus::Attock,
        Campus::Abbottabad,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Campus::Islamabad => "Islamabad Campus",
            Campus::Lahore => "Lahore Campus",
            Campus::Wah => "Wah Campus",
            Campus::Vehari => "Vehari Campus",
            Campus::Sahiwal => "Sahiwal Campus",
            Campus::Attock => "Attock Campus",
            Campus::Abbottabad => "Abbottabad Campus",
        }
    }

    /// Each campus issues addresses under its own domain.
    pub fn email_suffix(&self) -> &'static str {
        match self {
            Campus::Islamabad => "@cuiislamabad.edu.pk",
            Campus::Lahore => "@cuilahore.edu.pk",
            Campus::Wah => "@cuiwah.edu.pk",
            Campus::Vehari => "@cuivehari.edu.pk",
            Campus::Sahiwal => "@cuisahiwal.edu.pk",
            Campus::Attock => "@cuiattok.edu.pk",
            Campus::Abbottabad => "@cuiabbottabad.edu.pk",
        }
    }
}

// --- User profile ---

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub reg_number: String,
    pub batch: String,
    pub degree: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    /// Opaque image reference (data URL) or empty.
    pub avatar: String,
    /// Display file name of the uploaded CV, or empty.
    pub cv: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Student Name".to_string(),
            email: String::new(),
            bio: "Computer Science student at COMSATS University".to_string(),
            reg_number: "SP20-BCS-000".to_string(),
            batch: "2020-2024".to_string(),
            degree: "BS Computer Science".to_string(),
            skills: vec![
                "React".to_string(),
                "JavaScript".to_string(),
                "UI/UX Design".to_string(),
            ],
            interests: vec![
                "Mobile Development".to_string(),
                "Web Design".to_string(),
                "AI".to_string(),
            ],
            avatar: String::new(),
            cv: String::new(),
        }
    }
}

impl Profile {
    /// Insert a skill tag, keeping insertion order and rejecting duplicates.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }

    pub fn add_interest(&mut self, interest: &str) -> bool {
        let interest = interest.trim();
        if interest.is_empty() || self.interests.iter().any(|i| i == interest) {
            return false;
        }
        self.interests.push(interest.to_string());
        true
    }

    pub fn remove_interest(&mut self, interest: &str) {
        self.interests.retain(|i| i != interest);
    }

    /// Two-letter label shown where there is no avatar image.
    pub fn avatar_label(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

// --- Feed ---

#[derive(Debug, Clone, PartialEq)]
pub struct PostAuthor {
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Media {
    Image(String),
    Video(String),
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: Uuid,
    pub author: PostAuthor,
    pub body: String,
    pub media: Option<Media>,
    pub timestamp: i64,
    pub likes: u32,
    pub user_liked: bool,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: Uuid,
    pub author: PostAuthor,
    pub body: String,
    pub timestamp: i64,
}

// --- Directory records ---

/// A record that can live in a searchable, faceted directory.
///
/// The three feature pages (jobs, papers, events) share no base struct;
/// this trait is the only thing the generic directory needs from them.
pub trait Listing {
    type Facet: Copy + PartialEq;

    fn id(&self) -> Uuid;
    /// Fields the free-text query is matched against, one by one.
    fn search_fields(&self) -> Vec<&str>;
    fn facet(&self) -> Self::Facet;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkStyle {
    Hybrid,
    Online,
    OnSite,
}

impl WorkStyle {
    pub fn label(&self) -> &'static str {
        match self {
            WorkStyle::Hybrid => "Hybrid",
            WorkStyle::Online => "Online",
            WorkStyle::OnSite => "On-Site",
        }
    }
}

#[derive(Debug, Clone)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub style: WorkStyle,
    pub salary: String,
    pub location: String,
    pub package: String,
    pub working_hours: String,
    pub qualification: String,
    pub apply_link: String,
    pub website: String,
    pub linkedin: String,
}

impl Listing for JobPosting {
    type Facet = WorkStyle;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.company, &self.location]
    }

    fn facet(&self) -> WorkStyle {
        self.style
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamType {
    Midterm,
    Final,
}

impl ExamType {
    pub fn label(&self) -> &'static str {
        match self {
            ExamType::Midterm => "Midterm",
            ExamType::Final => "Final",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PastPaper {
    pub id: Uuid,
    pub course_code: String,
    pub course_name: String,
    pub exam_type: ExamType,
    pub semester: String,
    pub year: String,
    pub uploaded_by: String,
    pub date_uploaded: String,
    pub file_url: String,
    pub approved: bool,
}

impl Listing for PastPaper {
    type Facet = ExamType;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.course_code, &self.course_name]
    }

    fn facet(&self) -> ExamType {
        self.exam_type
    }
}

/// A contributed paper waiting on administrator review. Submissions are
/// queued separately from the published list and never merged into it.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperSubmission {
    pub course_code: String,
    pub course_name: String,
    pub exam_type: ExamType,
    pub semester: String,
    pub year: String,
    pub file_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Online,
    Physical,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Online => "Online",
            EventKind::Physical => "Physical",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SocietyEvent {
    pub id: Uuid,
    pub title: String,
    pub society: String,
    pub kind: EventKind,
    pub date: String,
    pub day: String,
    pub time: String,
    pub location: String,
    pub campus: String,
    pub join_link: String,
    pub details: String,
    pub image: String,
}

impl Listing for SocietyEvent {
    type Facet = EventKind;

    fn id(&self) -> Uuid {
        self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.society, &self.campus]
    }

    fn facet(&self) -> EventKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_are_deduplicated_case_sensitively() {
        let mut profile = Profile::default();
        assert!(!profile.add_skill("React"));
        assert!(profile.add_skill("react"));
        let count = profile.skills.iter().filter(|s| *s == "react").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn blank_tags_are_rejected() {
        let mut profile = Profile::default();
        let before = profile.interests.len();
        assert!(!profile.add_interest("   "));
        assert_eq!(profile.interests.len(), before);
    }

    #[test]
    fn tag_insertion_preserves_order() {
        let mut profile = Profile::default();
        profile.add_interest("Robotics");
        profile.add_interest("Databases");
        assert_eq!(profile.interests.last().unwrap(), "Databases");
        assert_eq!(profile.interests[profile.interests.len() - 2], "Robotics");
    }

    #[test]
    fn avatar_label_is_uppercased_prefix() {
        let profile = Profile {
            name: "ayesha khan".to_string(),
            ..Profile::default()
        };
        assert_eq!(profile.avatar_label(), "AY");
    }

    #[test]
    fn campus_suffixes_are_distinct() {
        for a in Campus::ALL {
            for b in Campus::ALL {
                if a != b {
                    assert_ne!(a.email_suffix(), b.email_suffix());
                }
            }
        }
    }
}
