use std::sync::LazyLock;

use egui::{Align, Color32, FontId, Pos2, Rect, RichText, Sense, Shape, Stroke, Vec2};
use regex::Regex;

use super::{Primitive, PrimitiveKind, SELECTION_COLOR, SELECTION_DASH, SELECTION_WIDTH, Scene};
use crate::element::{ComponentKind, ElementId, TextAlign};

const CANVAS_BACKGROUND: Color32 = Color32::WHITE;
const IMAGE_PLACEHOLDER_FILL: Color32 = Color32::from_gray(230);
const TEXT_PADDING: f32 = 5.0;
const MARKDOWN_PADDING: f32 = 10.0;

/// Something the user did on the canvas during this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    TextEdited { id: ElementId, text: String },
    /// Click in canvas coordinates that no text region consumed.
    Clicked(Pos2),
    Dropped { kind: ComponentKind, pos: Pos2 },
}

/// Draw `scene` into a canvas of `size` and collect the user's interactions.
///
/// Positions in the scene and in the returned events are relative to the
/// canvas' top-left corner.
pub fn show_canvas(ui: &mut egui::Ui, scene: &Scene, size: Vec2) -> Vec<CanvasEvent> {
    let mut events = Vec::new();
    let (response, painter) = ui.allocate_painter(size, Sense::click());
    let origin = response.rect.min;
    let to_canvas = |pos: Pos2| Pos2::new(pos.x - origin.x, pos.y - origin.y);

    painter.rect_filled(response.rect, 0.0, CANVAS_BACKGROUND);

    for primitive in scene.primitives() {
        let rect = primitive.rect.translate(origin.to_vec2());
        match &primitive.kind {
            PrimitiveKind::TextRegion {
                text,
                font_size,
                color,
                bold,
                align,
            } => {
                if let Some(edited) = text_region(ui, primitive, rect, text, *font_size, *color, *bold, *align) {
                    events.push(CanvasEvent::TextEdited {
                        id: primitive.element_id.clone(),
                        text: edited,
                    });
                }
            }
            PrimitiveKind::Image { src } => {
                painter.rect(rect, 0.0, IMAGE_PLACEHOLDER_FILL, Stroke::new(1.0, Color32::GRAY));
                painter.with_clip_rect(rect).text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    src,
                    FontId::proportional(12.0),
                    Color32::DARK_GRAY,
                );
            }
            PrimitiveKind::Bar { color } => {
                painter.rect_filled(rect, 0.0, *color);
            }
            PrimitiveKind::MarkdownRegion {
                html,
                font_size,
                color,
            } => markdown_region(ui, primitive, rect, html, *font_size, *color),
        }

        if primitive.selected {
            painter.extend(dashed_outline(rect));
        }
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(CanvasEvent::Clicked(to_canvas(pos)));
        }
    }

    if let Some(kind) = response.dnd_release_payload::<ComponentKind>() {
        if let Some(pos) = response.hover_pos() {
            events.push(CanvasEvent::Dropped {
                kind: *kind,
                pos: to_canvas(pos),
            });
        }
    }

    events
}

#[allow(clippy::too_many_arguments)]
fn text_region(
    ui: &mut egui::Ui,
    primitive: &Primitive,
    rect: Rect,
    text: &str,
    font_size: f32,
    color: Color32,
    bold: bool,
    align: TextAlign,
) -> Option<String> {
    let mut buffer = text.to_owned();
    // egui has no bold variant of the default font; bold text is drawn one step larger
    let size = if bold { font_size + 1.0 } else { font_size };

    let edit = egui::TextEdit::multiline(&mut buffer)
        .id_salt(&primitive.element_id)
        .frame(false)
        .margin(Vec2::splat(TEXT_PADDING))
        .font(FontId::proportional(size))
        .text_color(color)
        .horizontal_align(match align {
            TextAlign::Left => Align::Min,
            TextAlign::Center => Align::Center,
            TextAlign::Right => Align::Max,
        });

    let response = ui.put(rect, edit);
    response.changed().then_some(buffer)
}

fn markdown_region(ui: &mut egui::Ui, primitive: &Primitive, rect: Rect, html: &str, font_size: f32, color: Color32) {
    let inner = rect.shrink(MARKDOWN_PADDING);
    if inner.width() <= 0.0 || inner.height() <= 0.0 {
        return;
    }

    ui.allocate_new_ui(egui::UiBuilder::new().max_rect(inner), |ui| {
        egui::ScrollArea::vertical()
            .id_salt(&primitive.element_id)
            .max_height(inner.height())
            .show(ui, |ui| {
                ui.label(RichText::new(html_to_display_text(html)).size(font_size).color(color));
            });
    });
}

fn dashed_outline(rect: Rect) -> Vec<Shape> {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    Shape::dashed_line(
        &corners,
        Stroke::new(SELECTION_WIDTH, SELECTION_COLOR),
        SELECTION_DASH,
        SELECTION_DASH,
    )
}

static BLOCK_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<br>|</p>|</h[1-6]>|</li>|</blockquote>|</pre>").unwrap_or_else(|e| panic!("{e}"))
});
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<li[^>]*>").unwrap_or_else(|e| panic!("{e}")));
static ANY_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap_or_else(|e| panic!("{e}")));
static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap_or_else(|e| panic!("{e}")));

/// Readable plain text for transformer output, since egui cannot lay out HTML.
pub fn html_to_display_text(html: &str) -> String {
    let text = BLOCK_END.replace_all(html, "\n");
    let text = LIST_ITEM.replace_all(&text, "• ");
    let text = ANY_TAG.replace_all(&text, "");
    let text = BLANK_RUNS.replace_all(&text, "\n");
    text.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::render_markdown;

    #[test]
    fn test_display_text_strips_markup() {
        let text = html_to_display_text(&render_markdown("# Hi\n\n- a\n- b"));
        assert_eq!(text, "Hi\n• a\n• b");
    }

    #[test]
    fn test_dashed_outline_produces_segments() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(100.0, 20.0));
        assert!(!dashed_outline(rect).is_empty());
    }
}
