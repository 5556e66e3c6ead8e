use article_layout::render_markdown;

#[test]
fn test_heading() {
    assert!(render_markdown("# Hi").contains(r#"<h1 class="md-h1">Hi</h1>"#));
}

#[test]
fn test_heading_levels() {
    let html = render_markdown("###### six\n## two\n### three");
    assert!(html.contains(r#"<h6 class="md-h6">six</h6>"#));
    assert!(html.contains(r#"<h2 class="md-h2">two</h2>"#));
    assert!(html.contains(r#"<h3 class="md-h3">three</h3>"#));
}

#[test]
fn test_bold_and_italic() {
    let html = render_markdown("**a** *b*");
    assert!(html.contains(r#"<strong class="md-strong">a</strong>"#));
    assert!(html.contains(r#"<em class="md-em">b</em>"#));
}

#[test]
fn test_underscore_variants() {
    let html = render_markdown("__a__ _b_");
    assert_eq!(
        html,
        r#"<p><strong class="md-strong">a</strong> <em class="md-em">b</em></p>"#
    );
}

#[test]
fn test_bold_does_not_span_lines() {
    let html = render_markdown("**a\nb**");
    assert!(!html.contains("<strong"));
}

#[test]
fn test_list_wrapped_once() {
    let html = render_markdown("- a\n- b");
    assert_eq!(html.matches(r#"<li class="md-li">"#).count(), 2);
    assert_eq!(html.matches(r#"<ul class="md-ul">"#).count(), 1);
    assert_eq!(
        html,
        r#"<p><ul class="md-ul"><li class="md-li">a</li><br><li class="md-li">b</li></ul></p>"#
    );
}

#[test]
fn test_ordered_list_renders_as_unordered() {
    let html = render_markdown("1. one\n2. two");
    assert!(html.contains(r#"<ul class="md-ul">"#));
    assert!(!html.contains("<ol"));
    assert_eq!(html.matches("<li").count(), 2);
}

#[test]
fn test_separate_lists_share_one_wrapper() {
    let html = render_markdown("- a\n\ntext\n\n- b");
    assert_eq!(html.matches("<ul").count(), 1);
    assert_eq!(html.matches("</ul>").count(), 1);
}

#[test]
fn test_blockquote_is_per_line() {
    let html = render_markdown("> one\n> two");
    assert_eq!(html.matches(r#"<blockquote class="md-blockquote">"#).count(), 2);
}

#[test]
fn test_inline_code() {
    let html = render_markdown("use `cargo`");
    assert!(html.contains(r#"<code class="md-code">cargo</code>"#));
}

#[test]
fn test_fenced_code_block() {
    let html = render_markdown("```\nlet x = 1;\n```");
    assert!(html.starts_with(r#"<p><pre class="md-pre"><code class="md-code">"#));
    assert!(html.contains("let x = 1;"));
    assert!(html.contains("</code></pre>"));
}

#[test]
fn test_link_and_image() {
    let html = render_markdown("[site](https://example.com) ![pic](a.png)");
    assert!(html.contains(r#"<a href="https://example.com" target="_blank">site</a>"#));
    assert!(html.contains(r#"<img src="a.png" alt="pic" style="max-width:100%">"#));
}

#[test]
fn test_paragraphs_and_line_breaks() {
    assert_eq!(render_markdown("a\nb\n\nc"), "<p>a<br>b</p><p>c</p>");
}

#[test]
fn test_empty_paragraphs_dropped() {
    assert_eq!(render_markdown("\n\n"), "");
}

#[test]
fn test_raw_html_passes_through_unescaped() {
    let html = render_markdown("<script>alert(1)</script>");
    assert_eq!(html, "<p><script>alert(1)</script></p>");
}

#[test]
fn test_deterministic() {
    let source = "# T\n\n**b** and `c`\n\n- x\n- y";
    assert_eq!(render_markdown(source), render_markdown(source));
}

#[test]
fn test_crlf_line_endings() {
    assert_eq!(
        render_markdown("# Hi\r\nnext"),
        r#"<p><h1 class="md-h1">Hi</h1><br>next</p>"#
    );
    assert_eq!(
        render_markdown("- a\r\n- b\r\n\r\nend"),
        render_markdown("- a\n- b\n\nend")
    );
}
