use super::*;

#[test]
fn renders_emphasis() {
    assert_eq!(render_markdown_html("**bold**"), "<p><strong>bold</strong></p>\n");
}

#[test]
fn renders_tables() {
    let html = render_markdown_html("| id | name |\n| --- | --- |\n| 1 | AC/DC |");
    assert!(html.contains("<table>"));
    assert!(html.contains("<td>AC/DC</td>"));
}

#[test]
fn drops_raw_html_blocks() {
    let html = render_markdown_html("<script>alert(1)</script>\n\ntext");
    assert!(!html.contains("<script>"));
    assert!(html.contains("<p>text</p>"));
}

#[test]
fn drops_inline_html() {
    let html = render_markdown_html("hello <img src=x onerror=alert(1)> world");
    assert!(!html.contains("<img"));
    assert!(html.contains("hello"));
}

#[test]
fn strips_javascript_link_destination() {
    let html = render_markdown_html("[click](javascript:alert(document.cookie))");
    assert!(!html.contains("javascript:"));
    assert!(html.contains(">click</a>"));
}

#[test]
fn strips_obfuscated_scheme() {
    let html = render_markdown_html("[x](<JaVa\tScRiPt:alert(1)>) and <vbscript:msgbox(1)>");
    assert_eq!(html.matches(r#"href="""#).count(), 2);
    assert!(!html.to_ascii_lowercase().contains(r#"href="java"#));
    assert!(!html.contains(r#"href="vbscript"#));
}

#[test]
fn strips_data_image_source() {
    let html = render_markdown_html("![chart](data:text/html;base64,PHNjcmlwdD4=)");
    assert!(!html.contains("data:"));
    assert!(html.contains("<img"));
}

#[test]
fn keeps_safe_destinations() {
    let html = render_markdown_html("[a](https://example.com/x) [b](/docs?q=1:2) [c](mailto:dba@example.com) [d](#top)");
    assert!(html.contains(r#"href="https://example.com/x""#));
    assert!(html.contains(r#"href="/docs?q=1:2""#));
    assert!(html.contains(r#"href="mailto:dba@example.com""#));
    assert!(html.contains(r##"href="#top""##));
}

#[test]
fn allowed_destination_rules() {
    assert!(is_allowed_destination("results.csv"));
    assert!(is_allowed_destination("HTTP://example.com"));
    assert!(!is_allowed_destination(" javascript:void(0)"));
    assert!(!is_allowed_destination("file:///etc/passwd"));
}

#[test]
fn escapes_text_entities() {
    let html = render_markdown_html("a < b & c");
    assert!(html.contains("a &lt; b &amp; c"));
}

#[test]
fn results_blank_input_clears() {
    assert_eq!(render_results_html(None), "");
    assert_eq!(render_results_html(Some("")), "");
    assert_eq!(render_results_html(Some("   \n\t")), "");
}

#[test]
fn results_non_blank_input_renders() {
    assert_eq!(render_results_html(Some("rows: 3")), "<p>rows: 3</p>\n");
}
