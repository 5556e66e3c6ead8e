use article_layout::element::factory;
use article_layout::element::{Block, ComponentKind, Element, FieldUpdate};
use article_layout::{Editor, export_html, render_markdown};

fn block(kind: ComponentKind, id: &str) -> Block {
    match factory::create_element(kind, id, 0.0, 0.0) {
        Element::Block(b) => b,
        Element::Group(_) => panic!("{kind:?} is a layout"),
    }
}

#[test]
fn test_text_fragment() {
    let html = export_html(&[block(ComponentKind::Text, "element_1").into()]);
    assert_eq!(
        html,
        r#"<p style="font-size:16px; color:#333333; text-align:left; line-height: 1.8;">Enter text</p>"#
    );
}

#[test]
fn test_title_fragment() {
    let html = export_html(&[block(ComponentKind::Title, "element_1").into()]);
    assert_eq!(
        html,
        r#"<h2 style="font-size:24px; color:#222222; font-weight:bold; text-align:left; margin: 20px 0;">Title</h2>"#
    );
}

#[test]
fn test_image_fragment() {
    let html = export_html(&[block(ComponentKind::Image, "element_1").into()]);
    assert_eq!(
        html,
        r#"<div style="text-align: center; margin: 20px 0;"><img src="https://via.placeholder.com/300x200.png" style="max-width: 100%; height: auto; border-radius: 4px;" width="300" height="200"></div>"#
    );
}

#[test]
fn test_divider_fragment() {
    let html = export_html(&[block(ComponentKind::Divider, "element_1").into()]);
    assert_eq!(
        html,
        r#"<hr style="border: 0; height: 2px; background-color: #cccccc; margin: 20px 0;">"#
    );
}

#[test]
fn test_markdown_fragment_is_unwrapped_transformer_output() {
    let md = block(ComponentKind::Markdown, "element_1");
    let Block::Markdown(ref m) = md else {
        unreachable!()
    };
    let expected = render_markdown(&m.content);
    assert_eq!(export_html(&[md.into()]), expected);
}

#[test]
fn test_raw_text_is_not_escaped() {
    let mut editor = Editor::in_memory();
    let id = editor.add_element(ComponentKind::Text, 0.0, 0.0);
    editor
        .update_field(&id, FieldUpdate::Text("<b>bold</b> & co".into()))
        .unwrap();

    let html = editor.export_html();
    assert!(html.contains("<b>bold</b> & co</p>"));
    assert!(!html.contains("&lt;"));
}

#[test]
fn test_group_expands_to_child_fragments_in_order() {
    let group = factory::create_image_layout("element_1", 0.0, 0.0);
    let expected: String = group
        .elements
        .iter()
        .map(|b| export_html(&[b.clone().into()]))
        .collect();

    let html = export_html(&[group.clone().into()]);
    assert_eq!(html, expected);
    assert!(!html.contains("element_1"));

    let fragments = html.matches("<h2").count() + html.matches("<div").count() + html.matches("<p ").count();
    assert_eq!(fragments, group.elements.len());
}

#[test]
fn test_book_layout_fragment_count() {
    let group = factory::create_book_layout("element_1", 0.0, 0.0);
    let html = export_html(&[group.into()]);
    assert_eq!(html.matches("<h2").count(), 1);
    assert_eq!(html.matches("<img").count(), 5);
    assert_eq!(html.matches("<p ").count(), 5);
}

#[test]
fn test_export_is_idempotent() {
    let mut editor = Editor::in_memory();
    editor.add_element(ComponentKind::BookLayout, 0.0, 0.0);
    editor.add_element(ComponentKind::Markdown, 0.0, 0.0);
    editor.add_element(ComponentKind::Divider, 0.0, 0.0);

    assert_eq!(editor.export_html(), editor.export_html());
}

#[test]
fn test_empty_document_exports_nothing() {
    assert_eq!(export_html(&[]), "");
}
