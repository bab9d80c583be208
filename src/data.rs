//! Hard-coded portal data. Everything the mock shows lives here, in memory.

use chrono::{Duration, Local};
use uuid::Uuid;

use crate::model::{
    Comment, EventKind, ExamType, JobPosting, Media, PastPaper, Post, PostAuthor, SocietyEvent,
    WorkStyle,
};

fn author(name: &str, avatar: &str) -> PostAuthor {
    PostAuthor {
        name: name.to_string(),
        avatar: avatar.to_string(),
    }
}

pub fn seed_posts() -> Vec<Post> {
    let now = Local::now();
    vec![
        Post {
            id: Uuid::new_v4(),
            author: author("Ahmed Khan", "AK"),
            body: "Just submitted my final project for Software Engineering class!".to_string(),
            media: Some(Media::Image(
                "https://images.unsplash.com/photo-1587620962725-abab7fe55159".to_string(),
            )),
            timestamp: (now - Duration::hours(2)).timestamp(),
            likes: 24,
            user_liked: false,
            comments: vec![Comment {
                id: Uuid::new_v4(),
                author: author("Fatima Ali", "FA"),
                body: "Congratulations! What was your project about?".to_string(),
                timestamp: (now - Duration::hours(1)).timestamp(),
            }],
        },
        Post {
            id: Uuid::new_v4(),
            author: author("Sara Ahmed", "SA"),
            body: "Our team won the COMSATS hackathon! So proud of everyone's hard work."
                .to_string(),
            media: Some(Media::Image(
                "https://images.unsplash.com/photo-1535016120720-40c646be5580".to_string(),
            )),
            timestamp: (now - Duration::hours(5)).timestamp(),
            likes: 56,
            user_liked: true,
            comments: vec![],
        },
        Post {
            id: Uuid::new_v4(),
            author: author("Muhammad Ali", "MA"),
            body: "Looking for study partners for the upcoming Algorithms exam next week. Anyone interested?"
                .to_string(),
            media: None,
            timestamp: (now - Duration::days(1)).timestamp(),
            likes: 8,
            user_liked: false,
            comments: vec![
                Comment {
                    id: Uuid::new_v4(),
                    author: author("Zain Abbas", "ZA"),
                    body: "I'm in! Let's meet at the library tomorrow.".to_string(),
                    timestamp: (now - Duration::hours(16)).timestamp(),
                },
                Comment {
                    id: Uuid::new_v4(),
                    author: author("Ayesha Khan", "AK"),
                    body: "Count me in too! What time?".to_string(),
                    timestamp: (now - Duration::hours(12)).timestamp(),
                },
            ],
        },
    ]
}

pub fn seed_jobs() -> Vec<JobPosting> {
    let job = |title: &str,
               company: &str,
               style: WorkStyle,
               salary: &str,
               location: &str,
               package: &str,
               working_hours: &str,
               qualification: &str,
               website: &str,
               linkedin: &str| JobPosting {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: company.to_string(),
        style,
        salary: salary.to_string(),
        location: location.to_string(),
        package: package.to_string(),
        working_hours: working_hours.to_string(),
        qualification: qualification.to_string(),
        apply_link: "https://example.com/apply".to_string(),
        website: website.to_string(),
        linkedin: linkedin.to_string(),
    };

    vec![
        job(
            "Frontend Developer",
            "Tech Innovators Ltd",
            WorkStyle::Hybrid,
            "80,000 - 100,000 PKR",
            "Islamabad, Pakistan",
            "Healthcare, Annual bonus, Retirement plan",
            "9:00 AM - 5:00 PM (Mon-Fri)",
            "Bachelor's in Computer Science, 2+ years React experience",
            "https://techinnov.example.com",
            "https://linkedin.com/company/techinnov",
        ),
        job(
            "Machine Learning Engineer",
            "AI Solutions Pakistan",
            WorkStyle::Online,
            "120,000 - 150,000 PKR",
            "Remote",
            "Healthcare, Education allowance, Stock options",
            "Flexible hours",
            "Master's in AI/ML, Experience with TensorFlow or PyTorch",
            "https://aisol.example.com",
            "https://linkedin.com/company/aisol",
        ),
        job(
            "Full Stack Developer",
            "FinTech Innovations",
            WorkStyle::OnSite,
            "90,000 - 120,000 PKR",
            "Lahore, Pakistan",
            "Healthcare, Transportation, Meal allowance",
            "9:00 AM - 6:00 PM (Mon-Fri)",
            "Bachelor's in Software Engineering, MERN stack experience",
            "https://fintech.example.com",
            "https://linkedin.com/company/fintech",
        ),
        job(
            "Data Analyst",
            "Analytics PRO",
            WorkStyle::Hybrid,
            "70,000 - 85,000 PKR",
            "Islamabad, Pakistan",
            "Healthcare, Annual bonus",
            "10:00 AM - 6:00 PM (Mon-Fri)",
            "Bachelor's in Statistics or related field, SQL proficiency",
            "https://analytics.example.com",
            "https://linkedin.com/company/analytics",
        ),
        job(
            "UI/UX Designer",
            "Creative Solutions",
            WorkStyle::OnSite,
            "75,000 - 95,000 PKR",
            "Karachi, Pakistan",
            "Healthcare, Training budget",
            "9:00 AM - 5:00 PM (Mon-Fri)",
            "Degree in Design, Portfolio showcasing UI/UX projects",
            "https://creative.example.com",
            "https://linkedin.com/company/creative",
        ),
    ]
}

pub fn seed_papers() -> Vec<PastPaper> {
    let paper = |course_code: &str,
                 course_name: &str,
                 exam_type: ExamType,
                 semester: &str,
                 year: &str,
                 uploaded_by: &str,
                 date_uploaded: &str| {
        PastPaper {
            id: Uuid::new_v4(),
            course_code: course_code.to_string(),
            course_name: course_name.to_string(),
            exam_type,
            semester: semester.to_string(),
            year: year.to_string(),
            uploaded_by: uploaded_by.to_string(),
            date_uploaded: date_uploaded.to_string(),
            file_url: format!(
                "/papers/{}_{}_{}_{}.pdf",
                course_code,
                exam_type.label(),
                semester,
                year
            ),
            approved: true,
        }
    };

    vec![
        paper(
            "CSE357",
            "Business Process Engineering",
            ExamType::Midterm,
            "Spring",
            "2023",
            "Dr. Amin Khan",
            "15 Apr, 2023",
        ),
        paper(
            "CSE357",
            "Business Process Engineering",
            ExamType::Final,
            "Spring",
            "2023",
            "Dr. Amin Khan",
            "20 Jun, 2023",
        ),
        paper(
            "CSC356",
            "Human Computer Interaction",
            ExamType::Midterm,
            "Fall",
            "2022",
            "Dr. Sara Ali",
            "12 Nov, 2022",
        ),
        paper(
            "CSC356",
            "Human Computer Interaction",
            ExamType::Final,
            "Fall",
            "2022",
            "Dr. Sara Ali",
            "25 Jan, 2023",
        ),
        paper(
            "CSC354",
            "Machine Learning",
            ExamType::Midterm,
            "Spring",
            "2023",
            "Dr. Ahmed Hassan",
            "10 Mar, 2023",
        ),
        paper(
            "CSC354",
            "Machine Learning",
            ExamType::Final,
            "Spring",
            "2023",
            "Dr. Ahmed Hassan",
            "15 Jun, 2023",
        ),
        paper(
            "CSC325",
            "Software Construction and Development",
            ExamType::Midterm,
            "Fall",
            "2022",
            "Dr. Bilal Khan",
            "5 Nov, 2022",
        ),
        paper(
            "CSC325",
            "Software Construction and Development",
            ExamType::Final,
            "Fall",
            "2022",
            "Dr. Bilal Khan",
            "10 Jan, 2023",
        ),
        paper(
            "CSC494",
            "Software Project Management",
            ExamType::Midterm,
            "Spring",
            "2023",
            "Prof. Zainab Ali",
            "20 Mar, 2023",
        ),
        paper(
            "CSC494",
            "Software Project Management",
            ExamType::Final,
            "Spring",
            "2023",
            "Prof. Zainab Ali",
            "25 Jun, 2023",
        ),
    ]
}

pub fn seed_events() -> Vec<SocietyEvent> {
    let event = |title: &str,
                 society: &str,
                 kind: EventKind,
                 date: &str,
                 day: &str,
                 time: &str,
                 location: &str,
                 campus: &str,
                 join_link: &str,
                 details: &str,
                 image: &str| SocietyEvent {
        id: Uuid::new_v4(),
        title: title.to_string(),
        society: society.to_string(),
        kind,
        date: date.to_string(),
        day: day.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        campus: campus.to_string(),
        join_link: join_link.to_string(),
        details: details.to_string(),
        image: image.to_string(),
    };

    vec![
        event(
            "Annual Tech Hackathon",
            "Computing Society",
            EventKind::Physical,
            "May 20, 2025",
            "Tuesday",
            "9:00 AM - 5:00 PM",
            "Main Auditorium",
            "Islamabad Campus",
            "",
            "Join us for a full-day hackathon where teams will compete to build innovative solutions. Cash prizes for the top three teams!",
            "https://images.unsplash.com/photo-1504384308090-c894fdcc538d",
        ),
        event(
            "AI Workshop Series",
            "AI & Data Science Society",
            EventKind::Online,
            "May 25, 2025",
            "Sunday",
            "3:00 PM - 5:00 PM",
            "",
            "Virtual",
            "https://zoom.us/j/example",
            "Learn the fundamentals of artificial intelligence in this beginner-friendly workshop series. Topics include machine learning basics, neural networks, and practical applications.",
            "https://images.unsplash.com/photo-1620712943543-bcc4688e7485",
        ),
        event(
            "Business Plan Competition",
            "Entrepreneurship Society",
            EventKind::Physical,
            "June 5, 2025",
            "Thursday",
            "10:00 AM - 2:00 PM",
            "Business Studies Building",
            "Lahore Campus",
            "",
            "Present your business ideas to industry professionals and compete for funding opportunities. This competition aims to foster entrepreneurial spirit among students.",
            "https://images.unsplash.com/photo-1521737604893-d14cc237f11d",
        ),
        event(
            "Game Development Workshop",
            "Gaming Society",
            EventKind::Online,
            "May 30, 2025",
            "Friday",
            "4:00 PM - 6:00 PM",
            "",
            "Virtual",
            "https://zoom.us/j/examplegame",
            "Learn the basics of game development using Unity. This workshop is suitable for beginners with basic programming knowledge. By the end, you'll have created a simple 2D game.",
            "https://images.unsplash.com/photo-1552820728-8b83bb6b773f",
        ),
        event(
            "Engineering Project Exhibition",
            "Engineering Society",
            EventKind::Physical,
            "June 10, 2025",
            "Wednesday",
            "12:00 PM - 4:00 PM",
            "Engineering Block",
            "Abbottabad Campus",
            "",
            "Showcase of student engineering projects across all disciplines. Come explore innovative solutions and network with industry representatives.",
            "https://images.unsplash.com/photo-1581094794329-c8112a89af12",
        ),
        event(
            "Web Development Bootcamp",
            "Web Development Society",
            EventKind::Online,
            "June 15-20, 2025",
            "Monday-Saturday",
            "5:00 PM - 7:00 PM",
            "",
            "Virtual",
            "https://zoom.us/j/webdev",
            "Intensive 6-day web development bootcamp covering HTML, CSS, JavaScript, React, and Node.js. Build a full-stack web application by the end of the week.",
            "https://images.unsplash.com/photo-1522542550221-31fd19575a2d",
        ),
        event(
            "Art Exhibition",
            "Fine Arts Society",
            EventKind::Physical,
            "June 25, 2025",
            "Wednesday",
            "3:00 PM - 7:00 PM",
            "Art Gallery",
            "Wah Campus",
            "",
            "Showcasing student artwork across various mediums including painting, sculpture, photography, and digital art. Refreshments will be served.",
            "https://images.unsplash.com/photo-1594627882045-57465104050f",
        ),
    ]
}
