use yew::prelude::*;
use yew_router::prelude::*;

use crate::context::ApiProvider;
use crate::pages::course::CoursePage;
use crate::pages::home::HomePage;
use crate::pages::lecture::LecturePage;
use crate::pages::not_found::NotFound;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/courses/:slug")]
    Course { slug: String },

    /// The course of the lecture comes in the `courseSlug` query parameter.
    #[at("/lectures/:id")]
    Lecture { id: String },

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => {
            html! {
                <HomePage />
            }
        }
        Route::Course { slug } => {
            html! {
                <CoursePage slug={slug} />
            }
        }
        Route::Lecture { id } => {
            html! {
                <LecturePage id={id} />
            }
        }
        Route::NotFound => {
            html! {
                <NotFound />
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ApiProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ApiProvider>
    }
}
