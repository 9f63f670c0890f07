//! Recipe Instructions Rendering
//!
//! Instructions are written as Markdown (numbered steps, bold, lists).
//! Raw HTML typed by users is shown as text, and single line breaks are
//! kept since most recipes are written one step per line.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

fn get_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

fn is_safe_url(url: &str) -> bool {
    let lower = url.trim().to_ascii_lowercase();
    !(lower.starts_with("javascript:") || lower.starts_with("data:") || lower.starts_with("vbscript:"))
}

fn transform_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
        Event::SoftBreak => Event::HardBreak,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) if !is_safe_url(&dest_url) => {
            Event::Start(Tag::Link { link_type, dest_url: CowStr::Borrowed("#"), title, id })
        }
        other => other,
    }
}

/// HTML for a recipe's instructions
pub fn render_instructions(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options()).map(transform_event);
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_steps() {
        let html = render_instructions("1. Chop the onion\n2. Fry **slowly**");
        assert!(html.contains("<ol>"));
        assert!(html.contains("<strong>slowly</strong>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_instructions("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_line_breaks_are_kept() {
        let html = render_instructions("Boil water\nAdd pasta");
        assert!(html.contains("<br />"));
    }

    #[test]
    fn test_script_links_are_neutralized() {
        let html = render_instructions("[click](javascript:alert(1))");
        assert!(html.contains(r##"href="#""##));
    }
}
