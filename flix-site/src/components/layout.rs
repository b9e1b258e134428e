use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

const NAV_ITEMS: [(&str, &str); 5] = [
    ("\u{1F4AC}", "Comments"),
    ("\u{1F4C1}", "My paths"),
    ("\u{1F4CA}", "My progress"),
    ("\u{2B50}", "My certificates"),
    ("\u{1F514}", "Notifications"),
];

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html! {
        <div class="sidebar">
            <div class="logo">{ "Platzi" }</div>
            <nav class="nav">
                <Link<Route> to={Route::Home} classes={"nav-item"}>
                    <span class="nav-icon">{ "\u{1F3E0}" }</span>
                    { "Home" }
                </Link<Route>>
                {
                    for NAV_ITEMS.iter().map(|(icon, label)| html! {
                        <a href="#" class="nav-item">
                            <span class="nav-icon">{ *icon }</span>
                            { *label }
                        </a>
                    })
                }
            </nav>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub query: String,
    pub on_search: Callback<String>,
}

#[function_component(Header)]
pub fn header(HeaderProps { query, on_search }: &HeaderProps) -> Html {
    let oninput = {
        let on_search = on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_search.emit(input.value());
        })
    };

    html! {
        <header class="header">
            <div class="header-left">
                <div class="logo">{ "Platzi" }</div>
            </div>
            <div class="search-bar">
                <input
                    type="text"
                    placeholder="What do you want to learn?"
                    class="search-input"
                    value={query.clone()}
                    {oninput}
                />
                <span class="search-icon">{ "\u{1F50D}" }</span>
            </div>
        </header>
    }
}
