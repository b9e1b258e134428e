//! Hooks binding a screen to a catalog resource.
//!
//! Every hook exposes a [`FetchState`] driven by a [`FetchStore`]. A request cycle starts
//! whenever the parameters change, or when the user asks for a retry, and is cancelled by the
//! effect destructor, so the response of a stale cycle never reaches the screen.

use std::future::Future;
use std::rc::Rc;

use flix_api::{CourseSummary, Lecture};
use flix_client::controller::{CoursePage, LectureRoute, course_page_request};
use flix_client::{FetchAction, FetchError, FetchState, FetchStore, TicketCounter};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::context::use_api;

struct FetchReducer<T>(FetchStore<T>);

impl<T> Default for FetchReducer<T> {
    fn default() -> Self {
        Self(FetchStore::default())
    }
}

impl<T> Reducible for FetchReducer<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut store = self.0.clone();
        if store.apply(action) {
            Rc::new(Self(store))
        } else {
            self
        }
    }
}

/// State of a fetched resource plus a way to fetch it again.
pub struct FetchHandle<T> {
    pub state: FetchState<T>,
    /// Starts a new cycle with the same parameters.
    pub retry: Callback<()>,
}

/// Keeps a [`FetchState`] in sync with the resource selected by `deps`.
///
/// `fetcher` builds the request for the current parameters, or returns `None` when one of them
/// is missing, in which case the state stays [`FetchState::Waiting`] and nothing is requested.
#[hook]
pub fn use_fetch<D, T, F, Fut>(deps: D, fetcher: F) -> FetchHandle<T>
where
    D: PartialEq + 'static,
    T: 'static,
    F: FnOnce(&D) -> Option<Fut> + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let store = use_reducer(FetchReducer::<T>::default);
    let tickets = use_mut_ref(TicketCounter::default);
    let attempt = use_state(|| 0_u32);

    {
        let dispatcher = store.dispatcher();
        use_effect_with((deps, *attempt), move |(deps, _)| {
            let ticket = match fetcher(deps) {
                Some(request) => {
                    let ticket = tickets.borrow_mut().next();
                    dispatcher.dispatch(FetchAction::Begin(ticket));

                    let dispatcher = dispatcher.clone();
                    spawn_local(async move {
                        let result = request.await;
                        dispatcher.dispatch(FetchAction::Settle(ticket, result));
                    });
                    Some(ticket)
                }
                None => {
                    dispatcher.dispatch(FetchAction::Wait);
                    None
                }
            };

            move || {
                if let Some(ticket) = ticket {
                    dispatcher.dispatch(FetchAction::Cancel(ticket));
                }
            }
        });
    }

    let retry = Callback::from(move |()| attempt.set(*attempt + 1));

    FetchHandle {
        state: store.0.state().clone(),
        retry,
    }
}

#[hook]
pub fn use_courses() -> FetchHandle<Vec<CourseSummary>> {
    let api = use_api();
    use_fetch((), move |_| {
        let client = api.client();
        Some(async move { client.courses().await })
    })
}

/// The lecture selected by `route`. Waits while the route is incomplete.
#[hook]
pub fn use_lecture(route: &LectureRoute) -> FetchHandle<Lecture> {
    let api = use_api();
    use_fetch(route.clone(), move |route: &LectureRoute| {
        route.clone().request(api.client())
    })
}

/// A course and its teachers. Never fails, see [`flix_client::controller::load_course_page`].
#[hook]
pub fn use_course_page(slug: &str) -> FetchHandle<CoursePage> {
    let api = use_api();
    use_fetch(slug.to_string(), move |slug: &String| {
        course_page_request(api.client(), slug.clone())
            .map(|request| async move { Ok::<_, FetchError>(request.await) })
    })
}

/// Sets the document title once it is known.
#[hook]
pub fn use_page_title(title: Option<String>) {
    use_effect_with(title, |title| {
        if let Some(title) = title
            && let Some(document) = web_sys::window().and_then(|window| window.document())
        {
            document.set_title(title);
        }
        || ()
    });
}
