//! Extraction of YouTube video ids from the URLs stored with the lectures.

use std::sync::LazyLock;

use regex::Regex;

const EMBED_BASE_URL: &str = "https://www.youtube.com/embed/";

/// Supported URL shapes, in the order they are tried.
static VIDEO_ID_REGEXES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        Regex::new(r"youtube\.com/watch\?v=([A-Za-z0-9_-]+)(?:[&#\s]|$)")
            .expect("Should be able to parse the watch URL regex"),
        Regex::new(r"youtu\.be/([A-Za-z0-9_-]+)(?:[?&#\s]|$)")
            .expect("Should be able to parse the short URL regex"),
        Regex::new(r"youtube\.com/embed/([A-Za-z0-9_-]+)(?:[?&#\s]|$)")
            .expect("Should be able to parse the embed URL regex"),
    ]
});

/// Returns the video id of a `watch?v=`, `youtu.be/` or `embed/` URL, or `None` when the URL has
/// none of these shapes.
pub fn video_id(url: &str) -> Option<&str> {
    VIDEO_ID_REGEXES.iter().find_map(|regex| {
        regex
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str())
    })
}

pub fn embed_url(video_id: &str) -> String {
    format!("{EMBED_BASE_URL}{video_id}")
}

/// Embed URL of the video behind a lecture URL, if it has a recognisable id.
pub fn embed_url_for(url: &str) -> Option<String> {
    video_id(url).map(embed_url)
}
