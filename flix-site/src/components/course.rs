use flix_api::{CourseDetail, LectureSummary, Teacher};
use flix_client::controller::LectureQuery;
use flix_client::format::{join_teacher_names, lesson_number, thumbnail_or_fallback};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

fn lecture_link(course_slug: &str, lecture: &LectureSummary) -> (Route, LectureQuery) {
    (
        Route::Lecture {
            id: lecture.id.to_string(),
        },
        LectureQuery {
            course_slug: Some(course_slug.to_string()),
        },
    )
}

#[derive(Properties, PartialEq)]
pub struct CourseDetailHeaderProps {
    pub course: CourseDetail,
    pub teachers: Vec<Teacher>,
}

#[function_component(CourseDetailHeader)]
pub fn course_detail_header(
    CourseDetailHeaderProps { course, teachers }: &CourseDetailHeaderProps,
) -> Html {
    let start = course.lectures.first().map(|lecture| {
        let (to, query) = lecture_link(&course.slug, lecture);
        html! {
            <Link<Route, LectureQuery> {to} query={Some(query)} classes={"start-button"}>
                <span class="button-icon">{ "\u{25B6}" }</span>
                { "Start course" }
            </Link<Route, LectureQuery>>
        }
    });

    html! {
        <header class="course-header">
            <div class="container">
                <div class="thumbnail-container">
                    <img
                        src={thumbnail_or_fallback(&course.thumbnail).to_string()}
                        alt={course.name.clone()}
                        class="thumbnail"
                    />
                </div>

                <div class="content">
                    <div class="breadcrumb">
                        <Link<Route> to={Route::Home} classes={"breadcrumb-item"}>{ "Courses" }</Link<Route>>
                        <span class="separator">{ "\u{203A}" }</span>
                        <span class="breadcrumb-item">{ &course.name }</span>
                    </div>

                    <h1 class="title">{ &course.name }</h1>

                    if !teachers.is_empty() {
                        <div class="instructors">
                            <span class="instructors-label">{ "Instructors: " }</span>
                            <span class="instructors-list">{ join_teacher_names(teachers) }</span>
                        </div>
                    }

                    <div class="stats">
                        <div class="stat">
                            <span class="stat-value">{ course.lectures.len() }</span>
                            <span class="stat-label">{ "Lessons" }</span>
                        </div>
                    </div>

                    { for start }
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct LessonsListProps {
    pub lessons: Vec<LectureSummary>,
    pub course_slug: String,
}

#[function_component(LessonsList)]
pub fn lessons_list(
    LessonsListProps {
        lessons,
        course_slug,
    }: &LessonsListProps,
) -> Html {
    if lessons.is_empty() {
        return html! {
            <section class="lessons">
                <h2 class="title">{ "Course content" }</h2>
                <div class="empty-state">
                    <p>{ "This course has no lessons available yet." }</p>
                </div>
            </section>
        };
    }

    html! {
        <section class="lessons">
            <div class="lessons-header">
                <h2 class="title">{ "Course content" }</h2>
                <span class="count">{ format!("{} lessons", lessons.len()) }</span>
            </div>

            <div class="lessons-list">
            {
                lessons.iter().enumerate().map(|(index, lesson)| {
                    let (to, query) = lecture_link(course_slug, lesson);
                    html! {
                        <div key={lesson.id} class="lesson-item">
                            <div class="lesson-number">{ lesson_number(index) }</div>
                            <div class="lesson-content">
                                <h3 class="lesson-title">{ &lesson.name }</h3>
                                <p class="lesson-description">{ &lesson.description }</p>
                            </div>
                            <Link<Route, LectureQuery> {to} query={Some(query)} classes={"play-button"}>
                                <span class="play-icon" title="Play lesson">{ "\u{25B6}" }</span>
                            </Link<Route, LectureQuery>>
                        </div>
                    }
                }).collect::<Html>()
            }
            </div>
        </section>
    }
}
