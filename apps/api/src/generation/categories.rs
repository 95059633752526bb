//! The closed set of blog categories and their fixed lookup tables.
//!
//! Topic phrases (Prompt Builder) and Unsplash photo ids (Image Resolver)
//! live in one shared table so the two consumers cannot drift apart.

/// Per-category fixed data.
#[derive(Debug)]
pub struct CategoryProfile {
    pub name: &'static str,
    /// Descriptive phrase used as the topic when the caller gives none.
    pub topic_phrase: &'static str,
    /// Curated Unsplash photo ids for technology-related imagery.
    pub photo_ids: &'static [&'static str],
}

/// Topic used when the category falls outside the known set.
pub const FALLBACK_TOPIC_PHRASE: &str = "software development and best practices";

/// All known categories, in rotation order.
pub const CATEGORIES: [CategoryProfile; 10] = [
    CategoryProfile {
        name: "React",
        topic_phrase: "modern React development, performance optimization, or best practices",
        photo_ids: &[
            "1633356122544-f134324a6cee",
            "1461749280689-9d3de136cfe4",
            "1516321318289-607f3c6c0c0b",
            "1551650975-87deedd944c3",
            "1555066931-4365d14b8c6b",
        ],
    },
    CategoryProfile {
        name: "Django",
        topic_phrase: "Django REST API, database optimization, or deployment strategies",
        photo_ids: &[
            "1627398242454-45a1465c2479",
            "1526374965320-7f61d105fbb8",
            "1551650975-87deedd944c3",
            "1555066931-4365d14b8c6b",
            "1461749280689-9d3de136cfe4",
        ],
    },
    CategoryProfile {
        name: "AWS",
        topic_phrase: "cloud architecture, AWS services, or infrastructure as code",
        photo_ids: &[
            "1544383835-bda2bc66a55d",
            "1550751827-4bd374c3f58b",
            "1558494949-ef5f4c4e5c5b",
            "1551650975-87deedd944c3",
            "1550751827-4bd374c3f58b",
        ],
    },
    CategoryProfile {
        name: "DevOps",
        topic_phrase: "CI/CD pipelines, containerization, or automation",
        photo_ids: &[
            "1551650975-87deedd944c3",
            "1558494949-ef5f4c4e5c5b",
            "1461749280689-9d3de136cfe4",
            "1555066931-4365d14b8c6b",
            "1516321318289-607f3c6c0c0b",
        ],
    },
    CategoryProfile {
        name: "Frontend",
        topic_phrase: "user experience, responsive design, or frontend frameworks",
        photo_ids: &[
            "1507003211169-0a1dd7228f2d",
            "1516321318289-607f3c6c0c0b",
            "1461749280689-9d3de136cfe4",
            "1633356122544-f134324a6cee",
            "1551650975-87deedd944c3",
        ],
    },
    CategoryProfile {
        name: "Backend",
        topic_phrase: "API design, server architecture, or database management",
        photo_ids: &[
            "1627398242454-45a1465c2479",
            "1526374965320-7f61d105fbb8",
            "1555066931-4365d14b8c6b",
            "1461749280689-9d3de136cfe4",
            "1551650975-87deedd944c3",
        ],
    },
    CategoryProfile {
        name: "Mobile",
        topic_phrase: "mobile app development, cross-platform solutions, or mobile UX",
        photo_ids: &[
            "1551650975-87deedd944c3",
            "1516321318289-607f3c6c0c0b",
            "1507003211169-0a1dd7228f2d",
            "1461749280689-9d3de136cfe4",
            "1555066931-4365d14b8c6b",
        ],
    },
    CategoryProfile {
        name: "Cloud",
        topic_phrase: "cloud computing, scalability, or cloud-native applications",
        photo_ids: &[
            "1544383835-bda2bc66a55d",
            "1550751827-4bd374c3f58b",
            "1558494949-ef5f4c4e5c5b",
            "1551650975-87deedd944c3",
            "1461749280689-9d3de136cfe4",
        ],
    },
    CategoryProfile {
        name: "JavaScript",
        topic_phrase: "JavaScript features, ES6+, or modern JavaScript patterns",
        photo_ids: &[
            "1633356122544-f134324a6cee",
            "1461749280689-9d3de136cfe4",
            "1516321318289-607f3c6c0c0b",
            "1551650975-87deedd944c3",
            "1555066931-4365d14b8c6b",
        ],
    },
    CategoryProfile {
        name: "Python",
        topic_phrase: "Python programming, best practices, or Python libraries",
        photo_ids: &[
            "1627398242454-45a1465c2479",
            "1526374965320-7f61d105fbb8",
            "1555066931-4365d14b8c6b",
            "1461749280689-9d3de136cfe4",
            "1551650975-87deedd944c3",
        ],
    },
];

/// Looks up a category by name (case-sensitive, as the original tables are).
pub fn profile(category: &str) -> Option<&'static CategoryProfile> {
    CATEGORIES.iter().find(|p| p.name == category)
}

/// Deterministic weekday rotation: one category per day, cycling with
/// period 10 (the category count), not 7.
pub fn category_for_weekday(days_from_monday: u32) -> &'static CategoryProfile {
    &CATEGORIES[days_from_monday as usize % CATEGORIES.len()]
}
