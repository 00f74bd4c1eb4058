//! Markdown to HTML rendering for assistant answers and database results.
//!
//! Raw HTML blocks and inline HTML in the source are dropped before
//! rendering, and link and image destinations are limited to `http`,
//! `https`, `mailto` and relative URLs. The output is injected with
//! `inner_html`.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// Render markdown to an HTML fragment.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Link { link_type, dest_url: checked_destination(dest_url), title, id }))
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            Some(Event::Start(Tag::Image { link_type, dest_url: checked_destination(dest_url), title, id }))
        }
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// `dest` unchanged if it is relative or uses an allowed scheme, else empty.
fn checked_destination(dest: CowStr<'_>) -> CowStr<'_> {
    if is_allowed_destination(&dest) { dest } else { CowStr::Borrowed("") }
}

/// Browsers ignore whitespace and control characters inside a scheme, so
/// they are stripped before the scheme is read.
fn is_allowed_destination(dest: &str) -> bool {
    let compact: String = dest
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    let Some(colon) = compact.find(':') else {
        return true;
    };
    // A `/`, `?` or `#` before the first colon means there is no scheme.
    if compact[..colon].contains(['/', '?', '#']) {
        return true;
    }
    let scheme = compact[..colon].to_ascii_lowercase();
    ALLOWED_SCHEMES.contains(&scheme.as_str())
}

/// Render results-pane content; absent or blank input clears the pane.
#[must_use]
pub fn render_results_html(markdown: Option<&str>) -> String {
    match markdown {
        Some(text) if !text.trim().is_empty() => render_markdown_html(text),
        _ => String::new(),
    }
}
