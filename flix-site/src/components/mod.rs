mod catalog;
mod course;
mod feedback;
mod layout;
mod player;

pub use catalog::{CourseCarousel, CourseSuggestions};
pub use course::{CourseDetailHeader, LessonsList};
pub use feedback::{ErrorPanel, Loader};
pub use layout::{Header, Sidebar};
pub use player::LecturePlayer;
