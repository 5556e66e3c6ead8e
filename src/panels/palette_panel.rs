use crate::app::LayoutApp;
use crate::element::ComponentKind;

pub fn palette_panel(app: &mut LayoutApp, ctx: &egui::Context) {
    egui::SidePanel::left("palette_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            if app.is_blocked() {
                ui.disable();
            }

            ui.heading("Components");
            ui.label("Drag onto the canvas");
            ui.separator();

            for kind in ComponentKind::ALL {
                if kind == ComponentKind::ImageLayout {
                    ui.separator();
                    ui.strong("Layouts");
                }
                ui.dnd_drag_source(egui::Id::new(("palette", kind.token())), kind, |ui| {
                    ui.add(egui::Button::new(kind.label()).sense(egui::Sense::hover()));
                });
            }

            ui.separator();
            templates_section(app, ui);

            ui.separator();
            publish_section(app, ui);
        });
}

fn templates_section(app: &mut LayoutApp, ui: &mut egui::Ui) {
    ui.heading("Templates");

    ui.horizontal(|ui| {
        ui.text_edit_singleline(&mut app.panel_state.template_name);
        if ui.button("Save").clicked() {
            let name = app.panel_state.template_name.trim().to_owned();
            if name.is_empty() {
                app.notify("Enter a template name first");
            } else if let Err(e) = app.editor.save_current_as_template(&name) {
                app.report(e);
            } else {
                app.notify(format!("Template '{name}' saved"));
            }
        }
    });

    // Collect names first so the buttons below can mutate the store
    let names: Vec<String> = app
        .editor
        .templates()
        .names()
        .into_iter()
        .map(str::to_owned)
        .collect();

    egui::ScrollArea::vertical()
        .id_salt("template_list")
        .max_height(220.0)
        .show(ui, |ui| {
            for name in &names {
                ui.horizontal(|ui| {
                    ui.label(name);
                    if ui.small_button("Load").clicked() {
                        if let Err(e) = app.editor.load_template_by_name(name) {
                            app.report(e);
                        }
                    }
                    if ui.small_button("Delete").clicked() {
                        if let Err(e) = app.editor.delete_template(name) {
                            app.report(e);
                        }
                    }
                    if ui.small_button("Export").clicked() {
                        export_template_file(app, name);
                    }
                });
            }
        });

    ui.label("Import from file");
    ui.horizontal(|ui| {
        ui.text_edit_singleline(&mut app.panel_state.import_path);
        let busy = app.pending_import.is_some();
        if ui.add_enabled(!busy, egui::Button::new("Import")).clicked() {
            let path = app.panel_state.import_path.trim().to_owned();
            if path.is_empty() {
                app.notify("Enter the path of a template .json file");
            } else {
                app.start_import(&path);
            }
        }
        if busy {
            ui.spinner();
        }
    });
}

fn export_template_file(app: &mut LayoutApp, name: &str) {
    let json = match app.editor.export_template(name) {
        Ok(json) => json,
        Err(e) => return app.report(e),
    };

    let path = app.config.export_path(name);
    match std::fs::write(&path, json) {
        Ok(()) => {
            log::info!("Exported template '{}' to {}", name, path.display());
            app.notify(format!("Template exported to {}", path.display()));
        }
        Err(e) => app.report(format!("Failed to write {}: {}", path.display(), e)),
    }
}

fn publish_section(app: &mut LayoutApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if ui.button("Publish").clicked() {
            match app.editor.publish() {
                Ok(snapshot) => app.notify(format!(
                    "Article snapshot written ({} elements)",
                    snapshot.elements.len()
                )),
                Err(e) => app.report(e),
            }
        }
        if ui.button("Copy HTML").clicked() {
            ui.ctx().copy_text(app.editor.export_html());
        }
    });
}
