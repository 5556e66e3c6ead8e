use egui::{Color32, DragValue, TextEdit};

use crate::app::LayoutApp;
use crate::element::{Block, FieldUpdate, FontWeight, TextAlign, parse_color};

pub fn properties_panel(app: &mut LayoutApp, ctx: &egui::Context) {
    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            if app.is_blocked() {
                ui.disable();
            }

            ui.heading("Properties");
            ui.separator();

            let Some(block) = app.editor.selected_block().cloned() else {
                ui.label("Select an element to edit its properties");
                return;
            };

            ui.label(format!("{} ({})", block.id(), block.kind().as_str()));
            ui.separator();

            for update in field_editors(ui, &block) {
                if let Err(e) = app.editor.update_field(block.id(), update) {
                    app.report(e);
                }
            }
        });
}

/// Draw the editors for `block` and return what the user changed this frame.
fn field_editors(ui: &mut egui::Ui, block: &Block) -> Vec<FieldUpdate> {
    let mut updates = Vec::new();

    match block {
        Block::Text(t) | Block::Title(t) => {
            multiline(ui, "Text", &t.text, 4, FieldUpdate::Text, &mut updates);
            font_size(ui, t.font_size, &mut updates);
            color(ui, &t.color, &mut updates);

            let mut weight = t.font_weight;
            egui::ComboBox::from_label("Weight")
                .selected_text(weight.as_css())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut weight, FontWeight::Normal, "normal");
                    ui.selectable_value(&mut weight, FontWeight::Bold, "bold");
                });
            if weight != t.font_weight {
                updates.push(FieldUpdate::FontWeight(weight));
            }

            let mut align = t.text_align;
            egui::ComboBox::from_label("Align")
                .selected_text(align.as_css())
                .show_ui(ui, |ui| {
                    for option in TextAlign::ALL {
                        ui.selectable_value(&mut align, option, option.as_css());
                    }
                });
            if align != t.text_align {
                updates.push(FieldUpdate::TextAlign(align));
            }
        }
        Block::Image(i) => {
            ui.label("Image URL");
            let mut src = i.src.clone();
            if ui.text_edit_singleline(&mut src).changed() {
                updates.push(FieldUpdate::Src(src));
            }
            size(ui, i.width, i.height, &mut updates);
        }
        Block::Divider(d) => {
            color(ui, &d.color, &mut updates);
            size(ui, d.width, d.height, &mut updates);
        }
        Block::Markdown(m) => {
            multiline(ui, "Markdown", &m.content, 8, FieldUpdate::Content, &mut updates);
            font_size(ui, m.font_size, &mut updates);
            color(ui, &m.color, &mut updates);
        }
    }

    updates
}

fn multiline(
    ui: &mut egui::Ui,
    label: &str,
    value: &str,
    rows: usize,
    to_update: fn(String) -> FieldUpdate,
    updates: &mut Vec<FieldUpdate>,
) {
    ui.label(label);
    let mut buffer = value.to_owned();
    if ui.add(TextEdit::multiline(&mut buffer).desired_rows(rows)).changed() {
        updates.push(to_update(buffer));
    }
}

fn font_size(ui: &mut egui::Ui, value: u32, updates: &mut Vec<FieldUpdate>) {
    let mut size = value;
    ui.horizontal(|ui| {
        ui.label("Font size");
        ui.add(DragValue::new(&mut size).suffix(" px"));
    });
    if size != value {
        updates.push(FieldUpdate::FontSize(size));
    }
}

fn size(ui: &mut egui::Ui, width: f32, height: f32, updates: &mut Vec<FieldUpdate>) {
    let (mut w, mut h) = (width, height);
    ui.horizontal(|ui| {
        ui.label("Width");
        ui.add(DragValue::new(&mut w));
        ui.label("Height");
        ui.add(DragValue::new(&mut h));
    });
    if w != width {
        updates.push(FieldUpdate::Width(w));
    }
    if h != height {
        updates.push(FieldUpdate::Height(h));
    }
}

fn color(ui: &mut egui::Ui, value: &str, updates: &mut Vec<FieldUpdate>) {
    let mut hex = value.to_owned();
    let mut picked = parse_color(value);

    ui.horizontal(|ui| {
        ui.label("Color");
        if ui.color_edit_button_srgba(&mut picked).changed() {
            hex = to_hex(picked);
        }
        ui.add(TextEdit::singleline(&mut hex).desired_width(80.0));
    });

    if hex != value {
        updates.push(FieldUpdate::Color(hex));
    }
}

fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
