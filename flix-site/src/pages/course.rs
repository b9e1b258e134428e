use std::rc::Rc;

use flix_client::FetchState;
use flix_client::controller::{self, PageMetadata};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{CourseDetailHeader, ErrorPanel, LessonsList, Loader};
use crate::hooks::{use_course_page, use_page_title};

#[derive(Properties, PartialEq, Eq)]
pub struct CoursePageProps {
    pub slug: String,
}

#[function_component(CoursePage)]
pub fn course_page(CoursePageProps { slug }: &CoursePageProps) -> Html {
    let page = use_course_page(slug);

    let page = match page.state {
        FetchState::Waiting | FetchState::Loading => {
            return html! { <Loader message="Loading course..." /> };
        }
        FetchState::Failure(error) => {
            return html! { <ErrorPanel message={error.to_string()} on_retry={page.retry} /> };
        }
        FetchState::Success(page) => page,
    };

    html! { <CourseView page={page} /> }
}

#[derive(Properties, PartialEq)]
struct CourseViewProps {
    page: Rc<controller::CoursePage>,
}

#[function_component(CourseView)]
fn course_view(CourseViewProps { page }: &CourseViewProps) -> Html {
    use_page_title(Some(PageMetadata::for_course_page(page).title));

    let controller::CoursePage::Found { course, teachers } = &**page else {
        return html! {
            <div class="error-state">
                <h1>{ "Course not found" }</h1>
                <p>{ "The course you are looking for does not exist or has been removed." }</p>
                <Link<Route> to={Route::Home}>{ "Back to the catalog" }</Link<Route>>
            </div>
        };
    };

    html! {
        <>
            <CourseDetailHeader course={course.clone()} teachers={teachers.clone()} />

            <div class="course-content">
                <div class="course-main">
                    <section class="description">
                        <h2>{ "Course description" }</h2>
                        <p>{ &course.description }</p>
                    </section>

                    <LessonsList lessons={course.lectures.clone()} course_slug={course.slug.clone()} />
                </div>

                <aside class="course-sidebar">
                    <div class="course-info">
                        <h3>{ "Course information" }</h3>
                        <div class="info-item">
                            <span class="label">{ "Lessons: " }</span>
                            <span class="value">{ course.lectures.len() }</span>
                        </div>
                        if !teachers.is_empty() {
                            <div class="info-item">
                                <span class="label">{ "Instructors:" }</span>
                                <div class="teachers">
                                {
                                    for teachers.iter().map(|teacher| html! {
                                        <div key={teacher.id} class="teacher">
                                            <span class="teacher-name">{ &teacher.name }</span>
                                        </div>
                                    })
                                }
                                </div>
                            </div>
                        }
                    </div>
                </aside>
            </div>
        </>
    }
}
