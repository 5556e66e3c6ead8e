//! Flattening of a document into publishable article HTML.

use serde::{Deserialize, Serialize};

use crate::element::{Block, Element, flatten};
use crate::markdown::render_markdown;

/// Render the publishable HTML body for `elements`.
///
/// Groups are expanded in place, so a group of N blocks contributes exactly N
/// fragments and nothing for the container itself.
pub fn export_html(elements: &[Element]) -> String {
    flatten(elements).map(block_html).collect()
}

/// The HTML fragment for a single block.
pub fn block_html(block: &Block) -> String {
    match block {
        Block::Text(t) => format!(
            r#"<p style="font-size:{}px; color:{}; text-align:{}; line-height: 1.8;">{}</p>"#,
            t.font_size, t.color, t.text_align, t.text
        ),
        Block::Title(t) => format!(
            r#"<h2 style="font-size:{}px; color:{}; font-weight:{}; text-align:{}; margin: 20px 0;">{}</h2>"#,
            t.font_size, t.color, t.font_weight, t.text_align, t.text
        ),
        Block::Image(i) => format!(
            r#"<div style="text-align: center; margin: 20px 0;"><img src="{}" style="max-width: 100%; height: auto; border-radius: 4px;" width="{}" height="{}"></div>"#,
            i.src, i.width, i.height
        ),
        Block::Divider(d) => format!(
            r#"<hr style="border: 0; height: {}px; background-color: {}; margin: 20px 0;">"#,
            d.height, d.color
        ),
        Block::Markdown(m) => render_markdown(&m.content),
    }
}

/// What the publish action hands over to the publishing flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishSnapshot {
    pub elements: Vec<Element>,
    pub content: String,
}

impl PublishSnapshot {
    pub fn new(elements: &[Element]) -> Self {
        Self {
            elements: elements.to_vec(),
            content: export_html(elements),
        }
    }
}
