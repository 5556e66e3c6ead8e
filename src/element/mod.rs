use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

mod common;
mod field;
pub mod factory;

pub use common::{ElementId, FontWeight, TextAlign};
pub(crate) use common::parse_color;
pub use factory::ComponentKind;
pub use field::{Field, FieldUpdate};

/// The kind tag of an element, as written in the `type` field of its JSON form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Text,
    Title,
    Image,
    Divider,
    Markdown,
    Group,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Title => "title",
            ElementKind::Image => "image",
            ElementKind::Divider => "divider",
            ElementKind::Markdown => "markdown",
            ElementKind::Group => "group",
        }
    }
}

/// Shared shape of a text or title block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub id: ElementId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// May contain raw markup; it is passed through untouched on export.
    pub text: String,
    pub font_size: u32,
    pub color: String,
    pub font_weight: FontWeight,
    pub text_align: TextAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    pub id: ElementId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub src: String,
}

/// A horizontal bar. `height` is the line thickness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerBlock {
    pub id: ElementId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkdownBlock {
    pub id: ElementId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub content: String,
    pub font_size: u32,
    pub color: String,
}

/// A leaf element: everything that is not a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Text(TextBlock),
    Title(TextBlock),
    Image(ImageBlock),
    Divider(DividerBlock),
    Markdown(MarkdownBlock),
}

impl Block {
    pub fn id(&self) -> &str {
        match self {
            Block::Text(t) | Block::Title(t) => &t.id,
            Block::Image(i) => &i.id,
            Block::Divider(d) => &d.id,
            Block::Markdown(m) => &m.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Block::Text(_) => ElementKind::Text,
            Block::Title(_) => ElementKind::Title,
            Block::Image(_) => ElementKind::Image,
            Block::Divider(_) => ElementKind::Divider,
            Block::Markdown(_) => ElementKind::Markdown,
        }
    }

    pub fn position(&self) -> Pos2 {
        let (x, y) = match self {
            Block::Text(t) | Block::Title(t) => (t.x, t.y),
            Block::Image(i) => (i.x, i.y),
            Block::Divider(d) => (d.x, d.y),
            Block::Markdown(m) => (m.x, m.y),
        };
        Pos2::new(x, y)
    }

    pub fn size(&self) -> Vec2 {
        let (w, h) = match self {
            Block::Text(t) | Block::Title(t) => (t.width, t.height),
            Block::Image(i) => (i.width, i.height),
            Block::Divider(d) => (d.width, d.height),
            Block::Markdown(m) => (m.width, m.height),
        };
        Vec2::new(w, h)
    }

    /// Canvas rectangle covered by this block.
    ///
    /// Negative sizes are kept as-is, which yields an empty (negative) rect.
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position(), self.size())
    }
}

/// A bundle of blocks created together from a layout template.
///
/// Groups have no geometry of their own and cannot contain other groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: ElementId,
    #[serde(rename = "type")]
    tag: GroupTag,
    pub elements: Vec<Block>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
enum GroupTag {
    #[default]
    #[serde(rename = "group")]
    Group,
}

impl Group {
    pub fn new(id: impl Into<ElementId>, elements: Vec<Block>) -> Self {
        Self {
            id: id.into(),
            tag: GroupTag::Group,
            elements,
        }
    }
}

/// A top-level entry of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Block(Block),
    Group(Group),
}

impl Element {
    pub fn id(&self) -> &str {
        match self {
            Element::Block(b) => b.id(),
            Element::Group(g) => &g.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Block(b) => b.kind(),
            Element::Group(_) => ElementKind::Group,
        }
    }

    /// The leaf blocks this element contributes, in drawing order.
    pub fn blocks(&self) -> &[Block] {
        match self {
            Element::Block(b) => std::slice::from_ref(b),
            Element::Group(g) => &g.elements,
        }
    }

    pub fn blocks_mut(&mut self) -> &mut [Block] {
        match self {
            Element::Block(b) => std::slice::from_mut(b),
            Element::Group(g) => &mut g.elements,
        }
    }
}

impl From<Block> for Element {
    fn from(block: Block) -> Self {
        Element::Block(block)
    }
}

impl From<Group> for Element {
    fn from(group: Group) -> Self {
        Element::Group(group)
    }
}

/// Iterate every leaf block of `elements`, expanding groups in place.
pub fn flatten(elements: &[Element]) -> impl Iterator<Item = &Block> {
    elements.iter().flat_map(Element::blocks)
}

/// A borrowed view of whatever [`crate::Document::find_element`] located.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementRef<'a> {
    Block(&'a Block),
    Group(&'a Group),
}

impl ElementRef<'_> {
    pub fn id(&self) -> &str {
        match self {
            ElementRef::Block(b) => b.id(),
            ElementRef::Group(g) => &g.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ElementRef::Block(b) => b.kind(),
            ElementRef::Group(_) => ElementKind::Group,
        }
    }
}
