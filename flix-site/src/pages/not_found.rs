use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::Sidebar;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="app">
            <Sidebar />
            <div class="main-content">
                <div class="error-state">
                    <h1>{ "Page not found" }</h1>
                    <Link<Route> to={Route::Home}>{ "Back to the catalog" }</Link<Route>>
                </div>
            </div>
        </div>
    }
}
