use flix_client::FetchState;
use flix_client::controller::PageMetadata;
use flix_client::format::filter_courses;
use yew::prelude::*;

use crate::components::{
    CourseCarousel, CourseSuggestions, ErrorPanel, Header, Loader, Sidebar,
};
use crate::hooks::{use_courses, use_page_title};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_page_title(Some(PageMetadata::site().title));
    let courses = use_courses();
    let query = use_state(String::new);

    let on_search = {
        let query = query.clone();
        Callback::from(move |text: String| query.set(text))
    };

    let courses = match courses.state {
        FetchState::Waiting | FetchState::Loading => {
            return html! { <Loader message="Loading courses..." /> };
        }
        FetchState::Failure(error) => {
            return html! {
                <ErrorPanel message={error.to_string()} on_retry={courses.retry} />
            };
        }
        FetchState::Success(courses) => courses,
    };

    let matching = filter_courses(&courses, &query)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

    html! {
        <div class="app">
            <Sidebar />
            <div class="main-content">
                <Header query={(*query).clone()} {on_search} />
                <div class="content">
                    if matching.is_empty() {
                        <p class="no-results">{ format!("No courses match \"{}\".", *query) }</p>
                    } else {
                        <CourseCarousel courses={matching} />
                    }
                    <CourseSuggestions />
                </div>
            </div>
        </div>
    }
}
