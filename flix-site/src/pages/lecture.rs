use flix_client::FetchState;
use flix_client::controller::{LectureQuery, LectureRoute};
use flix_client::format::page_title;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::{ErrorPanel, LecturePlayer, Loader};
use crate::hooks::{use_lecture, use_page_title};

#[derive(Properties, PartialEq, Eq)]
pub struct LecturePageProps {
    pub id: String,
}

#[function_component(LecturePage)]
pub fn lecture_page(LecturePageProps { id }: &LecturePageProps) -> Html {
    let query = use_location()
        .and_then(|location| location.query::<LectureQuery>().ok())
        .unwrap_or_default();
    let route = LectureRoute::from_parts(id, &query);
    let lecture = use_lecture(&route);
    let navigator = use_navigator();

    use_page_title(lecture.state.data().map(|lecture| page_title(&lecture.name)));

    let lecture = match lecture.state {
        FetchState::Waiting | FetchState::Loading => {
            return html! {
                <div class="page-container">
                    <Loader message="Loading lecture..." />
                </div>
            };
        }
        FetchState::Failure(error) => {
            return html! {
                <div class="page-container">
                    <ErrorPanel message={error.to_string()} on_retry={lecture.retry} />
                </div>
            };
        }
        FetchState::Success(lecture) => lecture,
    };

    let on_back = {
        let slug = route.course_slug.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Course { slug: slug.clone() });
            }
        })
    };

    html! {
        <div class="page-container">
            <header class="lecture-header">
                <button class="back-button" type="button" onclick={on_back}>
                    <span class="back-icon">{ "\u{2190}" }</span>
                    <span>{ "Back to the course" }</span>
                </button>
            </header>

            <main class="lecture-main">
                <div class="video-section">
                    <LecturePlayer video_url={lecture.video_url.clone()} title={lecture.name.clone()} />
                </div>

                <div class="lecture-info">
                    <h1 class="lecture-title">{ &lecture.name }</h1>
                    <div class="lecture-description">
                        <p>{ &lecture.description }</p>
                    </div>
                </div>
            </main>
        </div>
    }
}
