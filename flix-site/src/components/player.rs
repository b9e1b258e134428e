use flix_client::youtube::embed_url_for;
use yew::prelude::*;

const IFRAME_ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

#[derive(Properties, PartialEq)]
pub struct LecturePlayerProps {
    pub video_url: String,
    pub title: String,
}

/// Embedded YouTube player. Shows a loading overlay until the frame reports it has loaded.
#[function_component(LecturePlayer)]
pub fn lecture_player(LecturePlayerProps { video_url, title }: &LecturePlayerProps) -> Html {
    let loading = use_state(|| true);

    {
        let loading = loading.clone();
        use_effect_with(video_url.clone(), move |_| {
            loading.set(true);
            || ()
        });
    }

    let Some(embed_url) = embed_url_for(video_url) else {
        log::warn!("Unsupported video URL: {video_url}");
        return html! {
            <div class="player-container">
                <div class="error-message">
                    <p>{ "Could not load the video" }</p>
                    <p>{ format!("Invalid URL: {video_url}") }</p>
                </div>
            </div>
        };
    };

    let onload = {
        let loading = loading.clone();
        Callback::from(move |_: Event| loading.set(false))
    };

    html! {
        <div class="player-container">
            if *loading {
                <div class="loading-overlay">
                    <div class="loading-spinner"></div>
                    <p>{ "Loading video..." }</p>
                </div>
            }
            <iframe
                class="video-player"
                src={embed_url}
                title={title.clone()}
                allow={IFRAME_ALLOW}
                allowfullscreen=true
                {onload}
            />
        </div>
    }
}
