use super::{Block, FontWeight, TextAlign};

/// Names of the editable fields, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    X,
    Y,
    Width,
    Height,
    Text,
    FontSize,
    Color,
    FontWeight,
    TextAlign,
    Src,
    Content,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::X => "x",
            Field::Y => "y",
            Field::Width => "width",
            Field::Height => "height",
            Field::Text => "text",
            Field::FontSize => "fontSize",
            Field::Color => "color",
            Field::FontWeight => "fontWeight",
            Field::TextAlign => "textAlign",
            Field::Src => "src",
            Field::Content => "content",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field assignment coming from the property panel or the canvas.
///
/// Values are not range checked: zero or negative sizes are stored as given.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    X(f32),
    Y(f32),
    Width(f32),
    Height(f32),
    Text(String),
    FontSize(u32),
    Color(String),
    FontWeight(FontWeight),
    TextAlign(TextAlign),
    Src(String),
    Content(String),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::X(_) => Field::X,
            FieldUpdate::Y(_) => Field::Y,
            FieldUpdate::Width(_) => Field::Width,
            FieldUpdate::Height(_) => Field::Height,
            FieldUpdate::Text(_) => Field::Text,
            FieldUpdate::FontSize(_) => Field::FontSize,
            FieldUpdate::Color(_) => Field::Color,
            FieldUpdate::FontWeight(_) => Field::FontWeight,
            FieldUpdate::TextAlign(_) => Field::TextAlign,
            FieldUpdate::Src(_) => Field::Src,
            FieldUpdate::Content(_) => Field::Content,
        }
    }
}

impl Block {
    /// Assign a field in place. Returns `false` when this kind has no such field.
    pub fn apply(&mut self, update: FieldUpdate) -> bool {
        match update {
            FieldUpdate::X(v) => *self.x_mut() = v,
            FieldUpdate::Y(v) => *self.y_mut() = v,
            FieldUpdate::Width(v) => *self.width_mut() = v,
            FieldUpdate::Height(v) => *self.height_mut() = v,
            FieldUpdate::Text(v) => match self {
                Block::Text(t) | Block::Title(t) => t.text = v,
                _ => return false,
            },
            FieldUpdate::FontSize(v) => match self {
                Block::Text(t) | Block::Title(t) => t.font_size = v,
                Block::Markdown(m) => m.font_size = v,
                _ => return false,
            },
            FieldUpdate::Color(v) => match self {
                Block::Text(t) | Block::Title(t) => t.color = v,
                Block::Divider(d) => d.color = v,
                Block::Markdown(m) => m.color = v,
                Block::Image(_) => return false,
            },
            FieldUpdate::FontWeight(v) => match self {
                Block::Text(t) | Block::Title(t) => t.font_weight = v,
                _ => return false,
            },
            FieldUpdate::TextAlign(v) => match self {
                Block::Text(t) | Block::Title(t) => t.text_align = v,
                _ => return false,
            },
            FieldUpdate::Src(v) => match self {
                Block::Image(i) => i.src = v,
                _ => return false,
            },
            FieldUpdate::Content(v) => match self {
                Block::Markdown(m) => m.content = v,
                _ => return false,
            },
        }
        true
    }

    fn x_mut(&mut self) -> &mut f32 {
        match self {
            Block::Text(t) | Block::Title(t) => &mut t.x,
            Block::Image(i) => &mut i.x,
            Block::Divider(d) => &mut d.x,
            Block::Markdown(m) => &mut m.x,
        }
    }

    fn y_mut(&mut self) -> &mut f32 {
        match self {
            Block::Text(t) | Block::Title(t) => &mut t.y,
            Block::Image(i) => &mut i.y,
            Block::Divider(d) => &mut d.y,
            Block::Markdown(m) => &mut m.y,
        }
    }

    fn width_mut(&mut self) -> &mut f32 {
        match self {
            Block::Text(t) | Block::Title(t) => &mut t.width,
            Block::Image(i) => &mut i.width,
            Block::Divider(d) => &mut d.width,
            Block::Markdown(m) => &mut m.width,
        }
    }

    fn height_mut(&mut self) -> &mut f32 {
        match self {
            Block::Text(t) | Block::Title(t) => &mut t.height,
            Block::Image(i) => &mut i.height,
            Block::Divider(d) => &mut d.height,
            Block::Markdown(m) => &mut m.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ComponentKind, Element, factory};

    fn block(kind: ComponentKind) -> Block {
        match factory::create_element(kind, "element_1", 0.0, 0.0) {
            Element::Block(b) => b,
            Element::Group(_) => panic!("expected a block"),
        }
    }

    #[test]
    fn test_apply_accepts_degenerate_sizes() {
        let mut image = block(ComponentKind::Image);
        assert!(image.apply(FieldUpdate::Width(-10.0)));
        assert!(image.apply(FieldUpdate::Height(0.0)));
        assert_eq!(image.size(), egui::vec2(-10.0, 0.0));
    }

    #[test]
    fn test_apply_rejects_foreign_fields() {
        let mut divider = block(ComponentKind::Divider);
        assert!(!divider.apply(FieldUpdate::Text("nope".into())));
        assert!(!divider.apply(FieldUpdate::Src("x.png".into())));
        assert!(divider.apply(FieldUpdate::Color("#ff0000".into())));

        let mut image = block(ComponentKind::Image);
        assert!(!image.apply(FieldUpdate::Color("#ff0000".into())));
    }

    #[test]
    fn test_apply_text_fields() {
        let mut title = block(ComponentKind::Title);
        assert!(title.apply(FieldUpdate::TextAlign(TextAlign::Right)));
        assert!(title.apply(FieldUpdate::FontWeight(FontWeight::Normal)));
        match title {
            Block::Title(t) => {
                assert_eq!(t.text_align, TextAlign::Right);
                assert_eq!(t.font_weight, FontWeight::Normal);
            }
            other => panic!("unexpected block {other:?}"),
        }
    }
}
