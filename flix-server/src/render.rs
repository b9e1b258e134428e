//! Injection of page metadata into the `<head>` of the site shell.

use std::sync::LazyLock;

use flix_client::controller::PageMetadata;
use regex::Regex;

/// Shell served when the site bundle was not packed into the binary.
pub const FALLBACK_SHELL: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n    <meta charset=\"utf-8\" />\n    <title>Platzi Flix</title>\n  </head>\n  <body></body>\n</html>\n";

static TITLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\s*<title>.*?</title>").expect("Should be able to parse the title regex")
});

static DESCRIPTION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s*<meta\s+name="description"[^>]*>"#)
        .expect("Should be able to parse the description regex")
});

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn metadata_tags(metadata: &PageMetadata) -> String {
    let title = escape(&metadata.title);
    let description = escape(&metadata.description);

    let mut tags = format!(
        "    <title>{title}</title>\n    <meta name=\"description\" content=\"{description}\" />\n    <meta property=\"og:title\" content=\"{title}\" />\n    <meta property=\"og:description\" content=\"{description}\" />\n"
    );
    if let Some(image) = &metadata.image {
        tags.push_str(&format!(
            "    <meta property=\"og:image\" content=\"{}\" />\n",
            escape(image)
        ));
    }
    tags
}

/// Replaces the title and description of `shell` with `metadata`. Open Graph tags are added
/// right before `</head>`. A shell without `</head>` gets the tags prepended.
pub fn inject_metadata(shell: &str, metadata: &PageMetadata) -> String {
    let shell = TITLE_REGEX.replace_all(shell, "");
    let shell = DESCRIPTION_REGEX.replace_all(&shell, "");
    let tags = metadata_tags(metadata);

    match shell.find("</head>") {
        Some(end) => format!("{}\n{tags}  {}", &shell[..end].trim_end(), &shell[end..]),
        None => format!("{tags}{shell}"),
    }
}
