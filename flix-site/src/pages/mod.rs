pub mod course;
pub mod home;
pub mod lecture;
pub mod not_found;
