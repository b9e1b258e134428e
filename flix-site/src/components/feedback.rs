use yew::prelude::*;

use crate::components::Sidebar;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    #[prop_or(AttrValue::Static("Loading..."))]
    pub message: AttrValue,
}

#[function_component(Loader)]
pub fn loader(LoaderProps { message }: &LoaderProps) -> Html {
    html! {
        <div class="app">
            <Sidebar />
            <div class="main-content">
                <div class="loading">
                    <div class="loading-spinner"></div>
                    <p>{ message }</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: String,
    /// Shows a retry button when set.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

#[function_component(ErrorPanel)]
pub fn error_panel(ErrorPanelProps { message, on_retry }: &ErrorPanelProps) -> Html {
    html! {
        <div class="app">
            <Sidebar />
            <div class="main-content">
                <div class="error">
                    <p>{ format!("Error: {message}") }</p>
                    if let Some(on_retry) = on_retry {
                        <button class="btn-primary" onclick={on_retry.reform(|_: MouseEvent| ())}>
                            { "Try again" }
                        </button>
                    }
                </div>
            </div>
        </div>
    }
}
