//! Presentation rules shared by the views.

use std::borrow::Cow;

use flix_api::{CourseSummary, Teacher};

/// Longest description shown on a course card before it gets cut.
pub const DESCRIPTION_LIMIT: usize = 80;

/// Number of courses shown in the home page carousel.
pub const CAROUSEL_LEN: usize = 4;

/// Cover shown for courses without a thumbnail.
pub const FALLBACK_THUMBNAIL: &str =
    "https://kinsta.com/es/wp-content/uploads/sites/8/2023/04/react-must-be-in-scope-when-using-jsx-2048x1024.jpg";

pub const SITE_NAME: &str = "Platzi Flix";

/// Cuts `text` to its first [`DESCRIPTION_LIMIT`] characters followed by `...` when it is
/// longer than that. A text of exactly the limit is kept as is.
pub fn truncate_description(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Two digit, one-based position of a lesson in its course.
pub fn lesson_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

pub fn thumbnail_or_fallback(thumbnail: &str) -> &str {
    if thumbnail.is_empty() {
        FALLBACK_THUMBNAIL
    } else {
        thumbnail
    }
}

/// Decorative icon of the first carousel positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardIcon {
    Diamond,
    Star,
    Cloud,
    Play,
}

impl CardIcon {
    pub fn for_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Diamond),
            1 => Some(Self::Star),
            2 => Some(Self::Cloud),
            3 => Some(Self::Play),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Diamond => "\u{1F537}",
            Self::Star => "\u{2B50}",
            Self::Cloud => "\u{2601}\u{FE0F}",
            Self::Play => "\u{25B6}\u{FE0F}",
        }
    }

    /// Style class of the icon tone.
    pub fn class(self) -> &'static str {
        match self {
            Self::Diamond | Self::Cloud => "icon-green",
            Self::Star => "icon-purple",
            Self::Play => "icon-blue",
        }
    }
}

/// Courses whose name or description contains `query`, ignoring case. Only an empty query keeps
/// every course, whitespace is matched as typed.
pub fn filter_courses<'a>(courses: &'a [CourseSummary], query: &str) -> Vec<&'a CourseSummary> {
    let query = query.to_lowercase();
    courses
        .iter()
        .filter(|course| {
            query.is_empty()
                || course.name.to_lowercase().contains(&query)
                || course.description.to_lowercase().contains(&query)
        })
        .collect()
}

pub fn join_teacher_names(teachers: &[Teacher]) -> String {
    teachers
        .iter()
        .map(|teacher| teacher.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Title of a page in the browser tab.
pub fn page_title(name: &str) -> String {
    format!("{name} - {SITE_NAME}")
}

#[cfg(test)]
mod test {
    use super::*;

    use googletest::prelude::*;

    fn course(id: u64, name: &str, description: &str) -> CourseSummary {
        CourseSummary {
            id,
            name: name.to_string(),
            description: description.to_string(),
            thumbnail: String::new(),
            slug: format!("course-{id}"),
        }
    }

    #[googletest::test]
    fn test_truncate_boundaries() {
        let exact = "a".repeat(80);
        expect_that!(truncate_description(&exact), eq(exact.as_str()));

        let long = "b".repeat(81);
        expect_that!(
            truncate_description(&long),
            eq(format!("{}...", "b".repeat(80)).as_str())
        );

        expect_that!(truncate_description("short"), eq("short"));
        expect_that!(truncate_description(""), eq(""));
    }

    #[googletest::test]
    fn test_truncate_counts_characters() {
        let accented = "á".repeat(81);
        let truncated = truncate_description(&accented);
        expect_that!(truncated.chars().count(), eq(83));
        expect_that!(truncated.ends_with("á..."), eq(true));
    }

    #[googletest::test]
    fn test_lesson_numbers() {
        expect_that!(lesson_number(0), eq("01"));
        expect_that!(lesson_number(8), eq("09"));
        expect_that!(lesson_number(9), eq("10"));
        expect_that!(lesson_number(99), eq("100"));
    }

    #[googletest::test]
    fn test_card_icons() {
        expect_that!(CardIcon::for_index(0), some(eq(CardIcon::Diamond)));
        expect_that!(CardIcon::for_index(1), some(eq(CardIcon::Star)));
        expect_that!(CardIcon::for_index(2), some(eq(CardIcon::Cloud)));
        expect_that!(CardIcon::for_index(3), some(eq(CardIcon::Play)));
        expect_that!(CardIcon::for_index(4), none());
        expect_that!(CardIcon::Cloud.class(), eq(CardIcon::Diamond.class()));
    }

    #[googletest::test]
    fn test_filter_courses() {
        let courses = vec![
            course(1, "Curso de React", "Aprende React desde cero"),
            course(2, "Curso de Swift", "Domina el desarrollo iOS"),
            course(3, "Curso de Node.js", "Backend con Express"),
        ];

        let ids = |query| {
            filter_courses(&courses, query)
                .iter()
                .map(|course| course.id)
                .collect::<Vec<_>>()
        };

        expect_that!(ids(""), elements_are![eq(&1), eq(&2), eq(&3)]);
        expect_that!(ids("   ").is_empty(), eq(true));
        expect_that!(ids("de "), elements_are![eq(&1), eq(&2), eq(&3)]);
        expect_that!(ids("swift"), elements_are![eq(&2)]);
        expect_that!(ids("EXPRESS"), elements_are![eq(&3)]);
        expect_that!(ids("python").is_empty(), eq(true));
    }

    #[googletest::test]
    fn test_thumbnail_fallback() {
        expect_that!(thumbnail_or_fallback(""), eq(FALLBACK_THUMBNAIL));
        expect_that!(thumbnail_or_fallback("cover.png"), eq("cover.png"));
    }

    #[googletest::test]
    fn test_join_teacher_names() {
        let teacher = |id, name: &str| Teacher {
            id,
            name: name.to_string(),
            email: String::new(),
            created_at: None,
            updated_at: None,
            deleted_at: None,
        };
        expect_that!(join_teacher_names(&[]), eq(""));
        expect_that!(
            join_teacher_names(&[teacher(1, "Ana"), teacher(2, "Luis")]),
            eq("Ana, Luis")
        );
    }

    #[googletest::test]
    fn test_page_title() {
        expect_that!(page_title("Curso de Python"), eq("Curso de Python - Platzi Flix"));
    }
}
