use crate::app::LayoutApp;
use crate::element::FieldUpdate;
use crate::render::painter::{CanvasEvent, show_canvas};

pub fn canvas_panel(app: &mut LayoutApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if app.is_blocked() {
            ui.disable();
        }

        let size = egui::vec2(app.config.canvas_width, app.config.canvas_height);

        let events = egui::ScrollArea::both()
            .id_salt("canvas_scroll")
            .show(ui, |ui| show_canvas(ui, app.editor.scene(), size))
            .inner;

        for event in events {
            match event {
                CanvasEvent::TextEdited { id, text } => {
                    if let Err(e) = app.editor.update_field(&id, FieldUpdate::Text(text)) {
                        app.report(e);
                    }
                }
                CanvasEvent::Clicked(pos) => app.editor.handle_click(pos),
                CanvasEvent::Dropped { kind, pos } => {
                    app.editor.add_element(kind, pos.x, pos.y);
                }
            }
        }
    });
}
