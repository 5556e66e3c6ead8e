use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::editor::Editor;
use crate::import::{self, PendingImport};
use crate::panels;

/// Panel inputs restored across restarts through eframe's storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PanelState {
    pub template_name: String,
    pub import_path: String,
}

pub struct LayoutApp {
    pub(crate) editor: Editor,
    pub(crate) config: Config,
    pub(crate) panel_state: PanelState,
    /// Blocking message shown until dismissed.
    pub(crate) message: Option<String>,
    pub(crate) pending_import: Option<PendingImport>,
}

impl LayoutApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let panel_state = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self::with_panel_state(config, panel_state)
    }

    pub fn with_panel_state(config: Config, panel_state: PanelState) -> Self {
        let (editor, startup_error) = Editor::open(&config);
        Self {
            editor,
            config,
            panel_state,
            message: startup_error.map(|e| e.to_string()),
            pending_import: None,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub(crate) fn report(&mut self, error: impl std::fmt::Display) {
        log::error!("{}", error);
        self.message = Some(error.to_string());
    }

    pub(crate) fn notify(&mut self, text: impl Into<String>) {
        self.message = Some(text.into());
    }

    pub(crate) fn start_import(&mut self, path: &str) {
        if self.pending_import.is_some() {
            self.notify("An import is already in progress");
            return;
        }
        self.pending_import = Some(PendingImport::spawn(path));
    }

    fn poll_import(&mut self, ctx: &egui::Context) {
        let Some(pending) = self.pending_import.as_mut() else {
            return;
        };

        match pending.poll() {
            None => ctx.request_repaint(),
            Some(read) => {
                self.pending_import = None;
                match import::commit(&mut self.editor, read) {
                    Ok(name) => self.notify(format!("Template '{name}' imported")),
                    Err(e) => self.report(e),
                }
            }
        }
    }

    /// Whether a message is waiting to be acknowledged.
    pub fn is_blocked(&self) -> bool {
        self.message.is_some()
    }

    pub(crate) fn dismiss_message(&mut self) {
        self.message = None;
    }

    /// Modal over the whole viewport; nothing behind it takes input until dismissed.
    fn message_modal(&mut self, ctx: &egui::Context) {
        let Some(text) = self.message.clone() else {
            return;
        };

        let response = egui::Modal::new(egui::Id::new("message_modal")).show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.label(text);
            ui.add_space(8.0);
            ui.button("OK").clicked()
        });

        if response.inner || response.should_close() {
            self.dismiss_message();
        }
    }
}

impl eframe::App for LayoutApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.panel_state);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_import(ctx);

        panels::palette_panel(self, ctx);
        panels::properties_panel(self, ctx);
        panels::canvas_panel(self, ctx);

        // Drawn last so it sits on top of the panels
        self.message_modal(ctx);
    }
}
