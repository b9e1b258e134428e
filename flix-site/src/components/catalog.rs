use std::collections::HashSet;

use flix_api::CourseSummary;
use flix_client::format::{CAROUSEL_LEN, CardIcon, thumbnail_or_fallback, truncate_description};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct CourseCardProps {
    pub course: CourseSummary,
    /// Position in the carousel.
    pub index: usize,
    /// Only the second card can be dismissed.
    #[prop_or_default]
    pub on_dismiss: Option<Callback<u64>>,
}

#[function_component(CourseCard)]
pub fn course_card(
    CourseCardProps {
        course,
        index,
        on_dismiss,
    }: &CourseCardProps,
) -> Html {
    let dismiss_button = match on_dismiss {
        Some(on_dismiss) if *index == 1 => {
            let on_dismiss = on_dismiss.clone();
            let id = course.id;
            let onclick = Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                e.stop_propagation();
                on_dismiss.emit(id);
            });
            html! {
                <button class="dismiss-button" title="Dismiss course" {onclick}>{ "\u{2715}" }</button>
            }
        }
        _ => html! {},
    };

    let icon = CardIcon::for_index(*index).map(|icon| {
        html! { <span class={icon.class()}>{ icon.glyph() }</span> }
    });

    html! {
        <Link<Route> to={Route::Course { slug: course.slug.clone() }} classes={"course-card-link"}>
            <div class="course-card">
                <div class="card-thumbnail">
                    <img
                        src={thumbnail_or_fallback(&course.thumbnail).to_string()}
                        alt={course.name.clone()}
                        class="thumbnail"
                    />
                    <div class="play-button">{ "\u{25B6}\u{FE0F}" }</div>
                </div>
                <div class="card-content">
                    <h3 class="card-title">{ &course.name }</h3>
                    <p class="card-description">{ truncate_description(&course.description).into_owned() }</p>
                    <div class="course-icon">{ for icon }</div>
                </div>
                { dismiss_button }
            </div>
        </Link<Route>>
    }
}

#[derive(Properties, PartialEq)]
pub struct CourseCarouselProps {
    pub courses: Vec<CourseSummary>,
}

/// The first [`CAROUSEL_LEN`] courses that were not dismissed.
#[function_component(CourseCarousel)]
pub fn course_carousel(CourseCarouselProps { courses }: &CourseCarouselProps) -> Html {
    let dismissed = use_state(HashSet::<u64>::new);

    let on_dismiss = {
        let dismissed = dismissed.clone();
        Callback::from(move |id: u64| {
            log::info!("Course dismissed: {id}");
            let mut ids = (*dismissed).clone();
            ids.insert(id);
            dismissed.set(ids);
        })
    };

    html! {
        <section class="continue-learning">
            <div class="courses-carousel">
            {
                courses
                    .iter()
                    .filter(|course| !dismissed.contains(&course.id))
                    .take(CAROUSEL_LEN)
                    .enumerate()
                    .map(|(index, course)| html! {
                        <CourseCard
                            key={course.id}
                            course={course.clone()}
                            {index}
                            on_dismiss={on_dismiss.clone()}
                        />
                    })
                    .collect::<Html>()
            }
            </div>
        </section>
    }
}

/// Asks the visitor which course should be created next. Suggestions are only logged.
#[function_component(CourseSuggestions)]
pub fn course_suggestions() -> Html {
    let suggestion = use_state(String::new);
    let sent = use_state(|| false);

    let oninput = {
        let suggestion = suggestion.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            suggestion.set(input.value());
        })
    };

    let onclick = {
        let suggestion = suggestion.clone();
        let sent = sent.clone();
        Callback::from(move |_: MouseEvent| {
            let text = suggestion.trim();
            if text.is_empty() {
                return;
            }
            log::info!("Course suggestion: {text}");
            suggestion.set(String::new());
            sent.set(true);
        })
    };

    html! {
        <section class="course-suggestions">
            <h2 class="section-title">{ "Which courses do you want Platzi to create for you?" }</h2>
            <div class="suggestion-input">
                <input
                    type="text"
                    placeholder="Write the course you want"
                    class="suggestion-field"
                    value={(*suggestion).clone()}
                    {oninput}
                />
                <button class="send-button" {onclick}>{ "\u{1F4E4}" }</button>
            </div>
            if *sent {
                <p class="suggestion-sent">{ "Thanks for your suggestion!" }</p>
            }
        </section>
    }
}
