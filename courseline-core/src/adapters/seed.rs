//! Seed data
//!
//! The fixed catalog and default user written to storage when there is no
//! usable document. Deterministic: every call returns identical data.

use crate::domain::{Course, Level, Preferences, StoreData, User, CURRENT_USER_ID};

struct SeedCourse {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: &'static str,
    duration: f64,
    is_free: bool,
    level: Level,
    instructor: &'static str,
    prerequisites: &'static [&'static str],
}

const SAMPLE_COURSES: &[SeedCourse] = &[
    SeedCourse {
        id: "1",
        title: "Introduction to Web Development",
        description: "Learn the basics of HTML, CSS, and JavaScript",
        category: "Programming",
        duration: 8.0,
        is_free: true,
        level: Level::Beginner,
        instructor: "John Doe",
        prerequisites: &[],
    },
    SeedCourse {
        id: "2",
        title: "Advanced React Patterns",
        description: "Master advanced React concepts and patterns",
        category: "Programming",
        duration: 12.0,
        is_free: false,
        level: Level::Advanced,
        instructor: "Jane Smith",
        prerequisites: &["1"],
    },
    SeedCourse {
        id: "3",
        title: "Figma for Designers",
        description: "Master Figma to design responsive and interactive interfaces",
        category: "Design",
        duration: 11.0,
        is_free: false,
        level: Level::Intermediate,
        instructor: "Daniel Lee",
        prerequisites: &[],
    },
    SeedCourse {
        id: "4",
        title: "Machine Learning Fundamentals",
        description: "Introduction to machine learning algorithms",
        category: "Programming",
        duration: 15.0,
        is_free: false,
        level: Level::Intermediate,
        instructor: "Sarah Wilson",
        prerequisites: &["1"],
    },
    SeedCourse {
        id: "5",
        title: "Mobile App Development with Flutter",
        description: "Build cross-platform mobile apps with Flutter",
        category: "Programming",
        duration: 14.0,
        is_free: true,
        level: Level::Beginner,
        instructor: "Alex Brown",
        prerequisites: &["1"],
    },
    SeedCourse {
        id: "6",
        title: "UI/UX Design Principles",
        description: "Learn essential design principles to create user-friendly interfaces",
        category: "Design",
        duration: 9.0,
        is_free: true,
        level: Level::Beginner,
        instructor: "Emily Carter",
        prerequisites: &["3"],
    },
    SeedCourse {
        id: "7",
        title: "Python for Data Science",
        description: "Learn Python programming for data analysis",
        category: "Programming",
        duration: 10.0,
        is_free: true,
        level: Level::Intermediate,
        instructor: "Mike Johnson",
        prerequisites: &["1", "4"],
    },
    SeedCourse {
        id: "8",
        title: "Typography and Color Theory in Design",
        description: "Explore how typography and color influence user experience",
        category: "Design",
        duration: 7.0,
        is_free: true,
        level: Level::Intermediate,
        instructor: "Laura Kim",
        prerequisites: &["3", "6"],
    },
];

/// The seed catalog, in display order
pub fn sample_courses() -> Vec<Course> {
    SAMPLE_COURSES
        .iter()
        .map(|c| Course {
            id: c.id.to_string(),
            title: c.title.to_string(),
            description: c.description.to_string(),
            category: c.category.to_string(),
            duration: c.duration,
            is_free: c.is_free,
            level: c.level,
            instructor: c.instructor.to_string(),
            image_url: None,
            prerequisites: Some(c.prerequisites.iter().map(|p| p.to_string()).collect()),
        })
        .collect()
}

pub fn default_user() -> User {
    User {
        user_id: CURRENT_USER_ID.to_string(),
        name: "Demo User".to_string(),
        email: "demo@example.com".to_string(),
        avatar: None,
        preferences: Preferences {
            preferred_categories: vec!["Programming".to_string(), "Design".to_string()],
            notifications: false,
        },
    }
}

/// A complete fresh document: seed catalog, no enrollments, default user
pub fn initial_data() -> StoreData {
    StoreData {
        courses: sample_courses(),
        enrollments: Vec::new(),
        user: default_user(),
    }
}
