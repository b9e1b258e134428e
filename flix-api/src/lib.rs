//! The `flix-api` crate defines the data types of the catalog backend consumed by `flix-site`
//! and `flix-server`.
//!
//! The crate follows these conventions:
//! - Each API endpoint of the catalog backend defines a full namespace path.
//! - For each endpoint namespace, `flix-api` defines a nested namespace
//!   with the API method of the endpoint.
//! - Inside the namespace for a given API endpoint, the following types are defined:
//!   - A `path` function building the request path from the endpoint parameters.
//!   - A `Response` type defining the contents of the JSON body.
//!
//! The supported endpoints are:
//!  - `GET` `courses`. Returns the summaries of every published course.
//!  - `GET` `courses/{slug}`. Returns the detail of a course, including its lectures and the ids
//!    of its teachers.
//!  - `GET` `courses/{slug}/lectures/{id}`. Returns a single lecture, including its video URL.
//!  - `GET` `teachers/{id}`. Returns a single teacher.
//!
//! All endpoints are read-only and unauthenticated.

mod types;

pub use types::{
    CourseDetail, CourseSummary, Lecture, LectureSummary, Teacher, TeacherId, TeacherRef,
};

pub mod api {
    pub mod courses {
        pub mod get {
            pub use crate::types::CourseSummary;

            pub fn path() -> String {
                "/courses".to_string()
            }

            /// The response to the `GET` `courses` request
            pub type Response = Vec<CourseSummary>;
        }

        pub mod slug {
            pub mod get {
                pub use crate::types::{CourseDetail, LectureSummary, TeacherId, TeacherRef};

                pub fn path(slug: &str) -> String {
                    format!("/courses/{slug}")
                }

                /// The response to the `GET` `courses/{slug}` request
                pub type Response = CourseDetail;
            }

            pub mod lectures {
                pub mod id {
                    pub mod get {
                        pub use crate::types::Lecture;

                        /// The lecture id is kept as it was received from the route, the
                        /// backend is the one validating it.
                        pub fn path(slug: &str, id: &str) -> String {
                            format!("/courses/{slug}/lectures/{id}")
                        }

                        /// The response to the `GET` `courses/{slug}/lectures/{id}` request
                        pub type Response = Lecture;
                    }
                }
            }
        }
    }

    pub mod teachers {
        pub mod id {
            pub mod get {
                pub use crate::types::{Teacher, TeacherId};

                pub fn path(id: TeacherId) -> String {
                    format!("/teachers/{id}")
                }

                /// The response to the `GET` `teachers/{id}` request
                pub type Response = Teacher;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::api;
    use googletest::prelude::*;

    #[googletest::test]
    fn test_endpoint_paths() {
        expect_that!(api::courses::get::path(), eq("/courses"));
        expect_that!(
            api::courses::slug::get::path("curso-de-python"),
            eq("/courses/curso-de-python")
        );
        expect_that!(
            api::courses::slug::lectures::id::get::path("curso-de-python", "40"),
            eq("/courses/curso-de-python/lectures/40")
        );
        expect_that!(api::teachers::id::get::path(7), eq("/teachers/7"));
    }
}
