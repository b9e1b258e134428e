//! Common data types used by the APIs

/// Numeric identifier of a teacher
pub type TeacherId = u64;

/// Summary of a course, as listed by the catalog.
#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
pub struct CourseSummary {
    /// Unique identifier of the course
    pub id: u64,
    /// Human-readable name of the course
    pub name: String,
    pub description: String,
    /// URL of the course cover image. May be empty.
    #[serde(default)]
    pub thumbnail: String,
    /// Stable routing key of the course
    pub slug: String,
}

/// Summary of a lecture, as embedded in the detail of its course.
#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
pub struct LectureSummary {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub slug: String,
}

/// Full detail of a course.
#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
pub struct CourseDetail {
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    pub slug: String,
    /// Teachers of the course. The wire format accepts both plain ids and expanded teacher
    /// objects, see [`TeacherRef`].
    #[serde(
        rename = "teacher_id",
        default,
        deserialize_with = "normalize_teacher_refs"
    )]
    pub teacher_ids: Vec<TeacherId>,
    #[serde(default)]
    pub lectures: Vec<LectureSummary>,
}

/// A full lecture, including the URL of its video.
#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
pub struct Lecture {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub slug: String,
    /// URL of the video on YouTube, in any of the supported URL shapes.
    pub video_url: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Eq, Clone)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}

/// A reference to a teacher as found in the `teacher_id` list of a course.
///
/// The backend returns expanded objects, older versions returned plain ids.
#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum TeacherRef {
    Id(TeacherId),
    Expanded {
        id: TeacherId,
        #[serde(default)]
        name: Option<String>,
    },
    /// Anything else. Kept so that a single bad entry does not reject the whole course.
    Invalid(serde_json::Value),
}

impl TeacherRef {
    pub fn id(&self) -> Option<TeacherId> {
        match self {
            Self::Id(id) | Self::Expanded { id, .. } => Some(*id),
            Self::Invalid(_) => None,
        }
    }
}

fn normalize_teacher_refs<'de, D>(deserializer: D) -> Result<Vec<TeacherId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let refs: Option<Vec<TeacherRef>> = serde::Deserialize::deserialize(deserializer)?;
    Ok(refs
        .unwrap_or_default()
        .into_iter()
        .filter_map(|teacher| {
            let id = teacher.id();
            if id.is_none() {
                log::warn!("Ignoring invalid teacher reference: {teacher:?}");
            }
            id
        })
        .collect())
}

#[cfg(test)]
mod test {
    use super::*;

    use googletest::prelude::*;

    #[googletest::test]
    fn test_course_detail_with_expanded_teachers() -> googletest::Result<()> {
        let course: CourseDetail = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Curso de Python",
                "description": "Aprende Python",
                "thumbnail": "https://example.com/python.png",
                "slug": "curso-de-python",
                "teacher_id": [{"id": 3, "name": "Ana"}, {"id": 5, "name": "Luis"}],
                "lectures": [
                    {"id": 40, "name": "Intro", "description": "Primeros pasos", "slug": "intro"}
                ]
            }"#,
        )
        .or_fail()?;

        expect_that!(course.teacher_ids, elements_are![eq(&3), eq(&5)]);
        expect_that!(course.lectures.len(), eq(1));
        expect_that!(course.slug, eq("curso-de-python"));
        Ok(())
    }

    #[googletest::test]
    fn test_course_detail_with_mixed_teacher_shapes() -> googletest::Result<()> {
        let course: CourseDetail = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Curso de Python",
                "description": "Aprende Python",
                "slug": "curso-de-python",
                "teacher_id": [2, {"id": 4}, "seven", null, {"name": "no id"}]
            }"#,
        )
        .or_fail()?;

        expect_that!(course.teacher_ids, elements_are![eq(&2), eq(&4)]);
        expect_that!(course.lectures.is_empty(), eq(true));
        expect_that!(course.thumbnail, eq(""));
        Ok(())
    }

    #[googletest::test]
    fn test_course_detail_without_teachers() -> googletest::Result<()> {
        let course: CourseDetail = serde_json::from_str(
            r#"{"id": 1, "name": "n", "description": "d", "slug": "s", "teacher_id": null}"#,
        )
        .or_fail()?;
        expect_that!(course.teacher_ids.is_empty(), eq(true));
        Ok(())
    }

    #[googletest::test]
    fn test_course_detail_serializes_plain_ids() -> googletest::Result<()> {
        let course = CourseDetail {
            id: 1,
            name: "n".to_string(),
            description: "d".to_string(),
            thumbnail: String::new(),
            slug: "s".to_string(),
            teacher_ids: vec![9],
            lectures: vec![],
        };
        let value = serde_json::to_value(&course).or_fail()?;
        expect_that!(value["teacher_id"], eq(&serde_json::json!([9])));
        Ok(())
    }

    #[googletest::test]
    fn test_lecture_without_timestamps() -> googletest::Result<()> {
        let lecture: Lecture = serde_json::from_str(
            r#"{
                "id": 40,
                "name": "Introducción a Python",
                "description": "Primeros pasos con Python, instalación y configuración.",
                "slug": "introduccion-a-python",
                "video_url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
            }"#,
        )
        .or_fail()?;
        expect_that!(lecture.id, eq(40));
        expect_that!(lecture.created_at, none());
        Ok(())
    }

    #[googletest::test]
    fn test_teacher_ref_ids() {
        expect_that!(TeacherRef::Id(1).id(), some(eq(1)));
        expect_that!(
            TeacherRef::Expanded {
                id: 2,
                name: None
            }
            .id(),
            some(eq(2))
        );
        expect_that!(TeacherRef::Invalid(serde_json::Value::Null).id(), none());
    }
}
