//! Route level data loading, shared by the site pages and the server side rendering.

use std::future::Future;
use std::ops::Deref;

use flix_api::{CourseDetail, Lecture, Teacher};

use crate::format::{SITE_NAME, page_title};
use crate::{CatalogClient, FetchError, Transport};

/// Data needed to render the course detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoursePage {
    Found {
        course: CourseDetail,
        teachers: Vec<Teacher>,
    },
    NotFound,
}

/// Loads a course and its teachers.
///
/// Never fails: a course that cannot be fetched, for whatever reason, renders as not found, and
/// teachers that cannot all be fetched render as an empty list.
pub async fn load_course_page<T: Transport>(client: &CatalogClient<T>, slug: &str) -> CoursePage {
    let course = match client.course(slug).await {
        Ok(course) => course,
        Err(e) => {
            log::warn!("Course {slug} not available: {e}");
            return CoursePage::NotFound;
        }
    };

    let teachers = if course.teacher_ids.is_empty() {
        Vec::new()
    } else {
        client
            .teachers(&course.teacher_ids)
            .await
            .unwrap_or_else(|e| {
                log::warn!("Teachers of course {slug} not available: {e}");
                Vec::new()
            })
    };

    CoursePage::Found { course, teachers }
}

/// The course page load for `slug`, or `None` while the slug is unknown.
pub fn course_page_request<C, T>(
    client: C,
    slug: String,
) -> Option<impl Future<Output = CoursePage>>
where
    C: Deref<Target = CatalogClient<T>>,
    T: Transport,
{
    if slug.is_empty() {
        return None;
    }
    Some(async move { load_course_page(&*client, &slug).await })
}

/// Document metadata of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// Preview image, `og:image`.
    pub image: Option<String>,
}

impl PageMetadata {
    pub fn for_course_page(page: &CoursePage) -> Self {
        match page {
            CoursePage::Found { course, .. } => Self {
                title: page_title(&course.name),
                description: course.description.clone(),
                image: (!course.thumbnail.is_empty()).then(|| course.thumbnail.clone()),
            },
            CoursePage::NotFound => Self {
                title: page_title("Course not found"),
                description: "The course you are looking for does not exist.".to_string(),
                image: None,
            },
        }
    }

    /// Metadata of every page without data of its own.
    pub fn site() -> Self {
        Self {
            title: SITE_NAME.to_string(),
            description: "Online courses catalog".to_string(),
            image: None,
        }
    }
}

/// Query string of the lecture route.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct LectureQuery {
    #[serde(rename = "courseSlug", default, skip_serializing_if = "Option::is_none")]
    pub course_slug: Option<String>,
}

/// Parameters of the lecture route, `/lectures/{id}?courseSlug={slug}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LectureRoute {
    pub lecture_id: String,
    /// Empty when the query did not carry it.
    pub course_slug: String,
}

impl LectureRoute {
    pub fn from_parts(lecture_id: &str, query: &LectureQuery) -> Self {
        Self {
            lecture_id: lecture_id.to_string(),
            course_slug: query.course_slug.clone().unwrap_or_default(),
        }
    }

    /// Both parameters are known, the lecture can be requested.
    pub fn is_complete(&self) -> bool {
        !self.lecture_id.is_empty() && !self.course_slug.is_empty()
    }

    /// The lecture request, or `None` while the route is incomplete.
    pub fn request<C, T>(
        self,
        client: C,
    ) -> Option<impl Future<Output = Result<Lecture, FetchError>>>
    where
        C: Deref<Target = CatalogClient<T>>,
        T: Transport,
    {
        if !self.is_complete() {
            return None;
        }
        Some(async move { client.lecture(&self.course_slug, &self.lecture_id).await })
    }
}
