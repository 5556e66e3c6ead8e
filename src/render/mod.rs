//! Projection of the element list onto the canvas.
//!
//! [`render`] is a full rebuild: it produces a flat [`Scene`] of primitives,
//! one per leaf block, which [`painter`] then draws with egui.

use egui::{Color32, Pos2, Rect};

use crate::element::{Block, Element, ElementId, TextAlign, flatten, parse_color};
use crate::markdown::render_markdown;

pub mod painter;

pub const SELECTION_COLOR: Color32 = Color32::from_rgb(0x1A, 0xAD, 0x19);
pub const SELECTION_WIDTH: f32 = 2.0;
pub const SELECTION_DASH: f32 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveKind {
    /// Editable text; edits write straight back into the block's `text`.
    TextRegion {
        text: String,
        font_size: f32,
        color: Color32,
        bold: bool,
        align: TextAlign,
    },
    Image {
        src: String,
    },
    /// Filled rectangle used for dividers.
    Bar {
        color: Color32,
    },
    /// Scrollable region showing the transformer's HTML.
    MarkdownRegion {
        html: String,
        font_size: f32,
        color: Color32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub element_id: ElementId,
    pub rect: Rect,
    pub kind: PrimitiveKind,
    pub selected: bool,
}

impl Primitive {
    /// Text regions keep clicks for editing instead of selecting.
    pub fn takes_selection_click(&self) -> bool {
        !matches!(self.kind, PrimitiveKind::TextRegion { .. })
    }
}

/// What a click on the canvas landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    /// A primitive that selects its element when clicked.
    Element(ElementId),
    /// A text region; the click goes to the text editor.
    Text(ElementId),
    Background,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn selected(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter().filter(|p| p.selected)
    }

    pub fn find(&self, id: &str) -> Option<&Primitive> {
        self.primitives.iter().find(|p| p.element_id == id)
    }

    /// The topmost primitive under `pos`, in canvas coordinates.
    pub fn hit_test(&self, pos: Pos2) -> Hit {
        match self.primitives.iter().rev().find(|p| p.rect.contains(pos)) {
            Some(p) if p.takes_selection_click() => Hit::Element(p.element_id.clone()),
            Some(p) => Hit::Text(p.element_id.clone()),
            None => Hit::Background,
        }
    }
}

/// Rebuild the scene for `elements`, flagging the primitive whose id is `selected`.
pub fn render(elements: &[Element], selected: Option<&str>) -> Scene {
    let primitives = flatten(elements)
        .map(|block| project(block, selected))
        .collect();
    Scene { primitives }
}

fn project(block: &Block, selected: Option<&str>) -> Primitive {
    let kind = match block {
        Block::Text(t) | Block::Title(t) => PrimitiveKind::TextRegion {
            text: t.text.clone(),
            font_size: t.font_size as f32,
            color: parse_color(&t.color),
            bold: t.font_weight == crate::element::FontWeight::Bold,
            align: t.text_align,
        },
        Block::Image(i) => PrimitiveKind::Image { src: i.src.clone() },
        Block::Divider(d) => PrimitiveKind::Bar {
            color: parse_color(&d.color),
        },
        Block::Markdown(m) => PrimitiveKind::MarkdownRegion {
            html: render_markdown(&m.content),
            font_size: m.font_size as f32,
            color: parse_color(&m.color),
        },
    };

    Primitive {
        element_id: block.id().to_owned(),
        rect: block.rect(),
        kind,
        selected: selected == Some(block.id()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ComponentKind, factory};

    fn sample() -> Vec<Element> {
        vec![
            factory::create_element(ComponentKind::Title, "element_1", 0.0, 0.0),
            factory::create_element(ComponentKind::ImageLayout, "element_2", 0.0, 100.0),
            factory::create_element(ComponentKind::Divider, "element_3", 0.0, 500.0),
        ]
    }

    #[test]
    fn test_render_expands_groups_in_order() {
        let scene = render(&sample(), None);
        let ids: Vec<_> = scene.primitives().iter().map(|p| p.element_id.as_str()).collect();
        assert_eq!(
            ids,
            ["element_1", "element_2_title", "element_2_img1", "element_2_text1", "element_3"]
        );
    }

    #[test]
    fn test_render_flags_only_selected() {
        let scene = render(&sample(), Some("element_2_img1"));
        let selected: Vec<_> = scene.selected().map(|p| p.element_id.as_str()).collect();
        assert_eq!(selected, ["element_2_img1"]);

        assert_eq!(render(&sample(), None).selected().count(), 0);
    }

    #[test]
    fn test_selecting_group_id_highlights_nothing() {
        let scene = render(&sample(), Some("element_2"));
        assert_eq!(scene.selected().count(), 0);
    }

    #[test]
    fn test_hit_test() {
        let scene = render(&sample(), None);
        // Image of the layout group spans (0,170)-(300,370)
        assert_eq!(scene.hit_test(egui::pos2(10.0, 200.0)), Hit::Element("element_2_img1".into()));
        assert_eq!(scene.hit_test(egui::pos2(10.0, 10.0)), Hit::Text("element_1".into()));
        assert_eq!(scene.hit_test(egui::pos2(900.0, 900.0)), Hit::Background);
    }

    #[test]
    fn test_divider_projects_to_bar() {
        let scene = render(&sample(), None);
        let bar = scene.find("element_3").unwrap();
        assert_eq!(bar.rect, Rect::from_min_size(egui::pos2(0.0, 500.0), egui::vec2(400.0, 2.0)));
        assert_eq!(
            bar.kind,
            PrimitiveKind::Bar {
                color: Color32::from_rgb(0xcc, 0xcc, 0xcc)
            }
        );
    }
}
