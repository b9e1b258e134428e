use flix_api::api;
use flix_api::{CourseDetail, CourseSummary, Lecture, Teacher, TeacherId};
use serde_json::Value;

use crate::{FetchError, Transport};

/// Origin of the catalog backend when nothing else is configured.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// A body that can be returned by the catalog backend.
///
/// The body is checked with [`Resource::is_present`] before it is decoded, so that a response
/// that parses but carries no usable entity is reported as [`FetchError::MissingResource`]
/// rather than as a decoding problem.
pub trait Resource: serde::de::DeserializeOwned {
    fn is_present(body: &Value) -> bool;
}

/// The entity has a non-empty identifier. Zero and the empty string do not count.
fn has_identifier(body: &Value) -> bool {
    match body.get("id") {
        Some(Value::Number(id)) => id.as_f64().is_some_and(|id| id != 0.0),
        Some(Value::String(id)) => !id.is_empty(),
        _ => false,
    }
}

impl Resource for CourseDetail {
    fn is_present(body: &Value) -> bool {
        has_identifier(body)
    }
}

impl Resource for Lecture {
    fn is_present(body: &Value) -> bool {
        has_identifier(body)
    }
}

impl Resource for Teacher {
    fn is_present(body: &Value) -> bool {
        has_identifier(body)
    }
}

/// An empty catalog is reported as a failure, there is nothing to show on the home page.
impl Resource for Vec<CourseSummary> {
    fn is_present(body: &Value) -> bool {
        body.as_array().is_some_and(|courses| !courses.is_empty())
    }
}

/// Read-only access to the catalog backend.
///
/// This is the single data access path of the application: the site hooks and the server side
/// page rendering both go through it, only the [`Transport`] differs.
#[derive(Debug, Clone)]
pub struct CatalogClient<T> {
    origin: String,
    transport: T,
}

impl<T: Transport> CatalogClient<T> {
    pub fn new(origin: impl Into<String>, transport: T) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self { origin, transport }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }

    pub async fn courses(&self) -> Result<api::courses::get::Response, FetchError> {
        self.get_resource(&api::courses::get::path()).await
    }

    pub async fn course(
        &self,
        slug: &str,
    ) -> Result<api::courses::slug::get::Response, FetchError> {
        self.get_resource(&api::courses::slug::get::path(slug))
            .await
    }

    pub async fn teacher(
        &self,
        id: TeacherId,
    ) -> Result<api::teachers::id::get::Response, FetchError> {
        self.get_resource(&api::teachers::id::get::path(id)).await
    }

    /// Fetches every teacher concurrently. Fails as soon as one of them fails.
    pub async fn teachers(
        &self,
        ids: &[TeacherId],
    ) -> Result<Vec<api::teachers::id::get::Response>, FetchError> {
        futures::future::try_join_all(ids.iter().map(|id| self.teacher(*id))).await
    }

    pub async fn lecture(
        &self,
        slug: &str,
        id: &str,
    ) -> Result<api::courses::slug::lectures::id::get::Response, FetchError> {
        self.get_resource(&api::courses::slug::lectures::id::get::path(slug, id))
            .await
    }

    async fn get_resource<R: Resource>(&self, path: &str) -> Result<R, FetchError> {
        let url = self.url(path);
        let result = self.fetch_and_decode(&url).await;
        if let Err(e) = &result {
            log::error!("Failed to fetch {url}: {e}");
        }
        result
    }

    async fn fetch_and_decode<R: Resource>(&self, url: &str) -> Result<R, FetchError> {
        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(FetchError::Status(response.status));
        }

        let body: Value = serde_json::from_str(&response.body)
            .map_err(|e| FetchError::Decode(e.to_string()))?;
        if !R::is_present(&body) {
            return Err(FetchError::MissingResource);
        }

        serde_json::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::MockTransport;

    use googletest::prelude::*;
    use serde_json::json;

    fn python_lecture() -> Value {
        json!({
            "id": 40,
            "name": "Introducción a Python",
            "description": "Primeros pasos con Python, instalación y configuración.",
            "slug": "introduccion-a-python",
            "video_url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        })
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_lecture_success() -> googletest::Result<()> {
        let transport = MockTransport::default();
        transport.respond_json(
            "http://localhost:8000/courses/curso-de-python/lectures/40",
            200,
            python_lecture(),
        );
        let client = CatalogClient::new(DEFAULT_ORIGIN, transport);

        let lecture = client.lecture("curso-de-python", "40").await.or_fail()?;
        expect_that!(lecture.id, eq(40));
        expect_that!(
            lecture.video_url,
            eq("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        );
        expect_that!(
            client.transport.requests(),
            elements_are![eq("http://localhost:8000/courses/curso-de-python/lectures/40")]
        );
        Ok(())
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_network_failure() {
        let transport = MockTransport::default();
        transport.fail(
            "http://localhost:8000/courses",
            FetchError::network("Network error"),
        );
        let client = CatalogClient::new(DEFAULT_ORIGIN, transport);

        let result = client.courses().await;
        expect_that!(result, err(eq(&FetchError::Network("Network error".into()))));
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_bad_status() {
        let transport = MockTransport::default();
        transport.respond_raw(
            "http://localhost:8000/courses/curso-de-python/lectures/999",
            404,
            r#"{"detail": "Not Found"}"#,
        );
        let client = CatalogClient::new(DEFAULT_ORIGIN, transport);

        let result = client.lecture("curso-de-python", "999").await;
        expect_that!(
            result.map_err(|e| e.to_string()),
            err(eq("HTTP error! status: 404"))
        );
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_missing_identifier() {
        let transport = MockTransport::default();
        transport.respond_json(
            "http://localhost:8000/courses/curso-de-python/lectures/40",
            200,
            json!({"name": "Test Lecture", "description": "Test description"}),
        );
        let client = CatalogClient::new(DEFAULT_ORIGIN, transport);

        let result = client.lecture("curso-de-python", "40").await;
        expect_that!(result, err(eq(&FetchError::MissingResource)));
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_zero_identifier_is_missing() {
        let transport = MockTransport::default();
        transport.respond_json(
            "http://localhost:8000/teachers/1",
            200,
            json!({"id": 0, "name": "Nobody"}),
        );
        let client = CatalogClient::new(DEFAULT_ORIGIN, transport);

        expect_that!(
            client.teacher(1).await,
            err(eq(&FetchError::MissingResource))
        );
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_invalid_json() {
        let transport = MockTransport::default();
        transport.respond_raw("http://localhost:8000/courses", 200, "<html>oops</html>");
        let client = CatalogClient::new(DEFAULT_ORIGIN, transport);

        expect_that!(
            client.courses().await,
            err(matches_pattern!(FetchError::Decode(anything())))
        );
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_wrong_shape_is_decode_error() {
        let transport = MockTransport::default();
        transport.respond_json(
            "http://localhost:8000/courses/curso-de-python/lectures/40",
            200,
            json!({"id": 40, "name": "No video"}),
        );
        let client = CatalogClient::new(DEFAULT_ORIGIN, transport);

        expect_that!(
            client.lecture("curso-de-python", "40").await,
            err(matches_pattern!(FetchError::Decode(anything())))
        );
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_empty_catalog_is_missing() {
        let transport = MockTransport::default();
        transport.respond_json("http://localhost:8000/courses", 200, json!([]));
        let client = CatalogClient::new(DEFAULT_ORIGIN, transport);

        expect_that!(
            client.courses().await,
            err(eq(&FetchError::MissingResource))
        );
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_courses_success() -> googletest::Result<()> {
        let transport = MockTransport::default();
        transport.respond_json(
            "http://localhost:8000/courses",
            200,
            json!([{
                "id": 1,
                "name": "React Course",
                "description": "Learn React",
                "thumbnail": "react.jpg",
                "slug": "react-course",
            }]),
        );
        let client = CatalogClient::new(DEFAULT_ORIGIN, transport);

        let courses = client.courses().await.or_fail()?;
        expect_that!(
            courses,
            elements_are![matches_pattern!(CourseSummary {
                id: eq(&1),
                slug: eq("react-course"),
                ..
            })]
        );
        Ok(())
    }

    #[tokio::test]
    #[googletest::test]
    async fn test_teachers_all_or_nothing() {
        let transport = MockTransport::default();
        transport.respond_json(
            "http://localhost:8000/teachers/1",
            200,
            json!({"id": 1, "name": "Ana", "email": "ana@example.com"}),
        );
        transport.respond_raw("http://localhost:8000/teachers/2", 500, "");
        let client = CatalogClient::new(DEFAULT_ORIGIN, transport);

        expect_that!(
            client.teachers(&[1]).await,
            ok(elements_are![matches_pattern!(Teacher {
                name: eq("Ana"),
                ..
            })])
        );
        expect_that!(
            client.teachers(&[1, 2]).await,
            err(eq(&FetchError::Status(500)))
        );
    }

    #[googletest::test]
    fn test_origin_trailing_slash() {
        let client = CatalogClient::new("http://backend:8000/", MockTransport::default());
        expect_that!(client.origin(), eq("http://backend:8000"));
        expect_that!(client.url("/courses"), eq("http://backend:8000/courses"));
    }
}
