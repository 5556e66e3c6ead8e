//! The editor controller.
//!
//! [`Editor`] is the single owner of the live [`Document`] and the
//! [`TemplateStore`]. Every mutation goes through it, and every mutation is
//! followed by a full re-render of the [`Scene`].

use egui::Pos2;

use crate::config::Config;
use crate::document::Document;
use crate::element::{Block, ComponentKind, Element, ElementId, FieldUpdate};
use crate::error::{EditorError, EditorResult, TemplateError};
use crate::export::{PublishSnapshot, export_html};
use crate::render::{Hit, Scene, render};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::template::TemplateStore;

pub struct Editor {
    document: Document,
    templates: TemplateStore,
    publish_backend: Box<dyn KeyValueStore>,
    publish_key: String,
    scene: Scene,
    renders: u64,
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("document", &self.document)
            .field("templates", &self.templates)
            .field("publish_key", &self.publish_key)
            .field("renders", &self.renders)
            .finish()
    }
}

impl Editor {
    pub fn new(
        templates: TemplateStore,
        publish_backend: Box<dyn KeyValueStore>,
        publish_key: impl Into<String>,
    ) -> Self {
        let mut editor = Self {
            document: Document::new(),
            templates,
            publish_backend,
            publish_key: publish_key.into(),
            scene: Scene::default(),
            renders: 0,
        };
        editor.rerender();
        editor
    }

    /// An editor whose templates and publish snapshots live only in memory.
    pub fn in_memory() -> Self {
        Self::new(
            TemplateStore::empty(Box::new(MemoryStore::new()), "templates"),
            Box::new(MemoryStore::new()),
            "publish",
        )
    }

    /// Open the editor over the file-backed stores described by `config`.
    ///
    /// A corrupted template store does not prevent start-up: the editor
    /// starts with an empty store and the parse error is handed back so the
    /// caller can tell the user. The corrupted data stays on disk until the
    /// next template write.
    pub fn open(config: &Config) -> (Self, Option<TemplateError>) {
        let backend = || Box::new(FileStore::new(&config.data_dir));

        let (mut templates, mut startup_error) = match TemplateStore::open(backend(), &config.templates_key) {
            Ok(store) => (store, None),
            Err(e) => {
                log::error!("Failed to open template store: {}", e);
                (TemplateStore::empty(backend(), &config.templates_key), Some(e))
            }
        };

        if startup_error.is_none() && config.seed_default_templates {
            if let Err(e) = templates.seed_defaults_if_empty() {
                log::error!("Failed to seed default templates: {}", e);
                startup_error = Some(e);
            }
        }

        (Self::new(templates, backend(), &config.publish_key), startup_error)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn elements(&self) -> &[Element] {
        self.document.elements()
    }

    pub fn selected(&self) -> Option<&str> {
        self.document.selected()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.document.selected_block()
    }

    pub fn templates(&self) -> &TemplateStore {
        &self.templates
    }

    /// The most recent render pass.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// How many render passes have run since construction.
    pub fn render_count(&self) -> u64 {
        self.renders
    }

    fn rerender(&mut self) {
        self.scene = render(self.document.elements(), self.document.selected());
        self.renders += 1;
    }

    /// Create a default element of `kind` at (`x`, `y`), append it and select it.
    pub fn add_element(&mut self, kind: ComponentKind, x: f32, y: f32) -> ElementId {
        let element = self.document.create_element(kind, x, y);
        let id = element.id().to_owned();
        log::info!("Created {} element {} at ({}, {})", kind.token(), id, x, y);

        self.document.push(element);
        self.select(Some(id.as_str()));
        id
    }

    /// Like [`Editor::add_element`] but takes a palette drag token.
    ///
    /// Unknown tokens create nothing.
    pub fn add_element_by_token(&mut self, token: &str, x: f32, y: f32) -> Option<ElementId> {
        match token.parse::<ComponentKind>() {
            Ok(kind) => Some(self.add_element(kind, x, y)),
            Err(e) => {
                log::warn!("Ignoring drop: {}", e);
                None
            }
        }
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.document.set_selected(id.map(str::to_owned));
        self.rerender();
    }

    /// Assign one field of the block `id` and re-render.
    pub fn update_field(&mut self, id: &str, update: FieldUpdate) -> EditorResult<()> {
        let field = update.field();
        let block = self
            .document
            .find_block_mut(id)
            .ok_or_else(|| EditorError::ElementNotFound(id.to_owned()))?;

        if !block.apply(update) {
            return Err(EditorError::UnsupportedField {
                id: id.to_owned(),
                field,
            });
        }

        self.rerender();
        Ok(())
    }

    /// Route a canvas click: selectable primitives take the selection,
    /// empty background clears it, text regions leave it alone.
    pub fn handle_click(&mut self, pos: Pos2) {
        match self.scene.hit_test(pos) {
            Hit::Element(id) => self.select(Some(id.as_str())),
            Hit::Background => self.select(None),
            Hit::Text(_) => {}
        }
    }

    /// Replace the whole document. The selection is always cleared.
    pub fn replace_document(&mut self, elements: Vec<Element>) {
        self.document.replace(elements);
        self.rerender();
    }

    pub fn save_current_as_template(&mut self, name: &str) -> EditorResult<()> {
        self.templates.save(name, self.document.elements())?;
        Ok(())
    }

    pub fn load_template_by_name(&mut self, name: &str) -> EditorResult<()> {
        let elements = self.templates.load(name)?;
        log::info!("Loaded template '{}'", name);
        self.replace_document(elements);
        Ok(())
    }

    pub fn delete_template(&mut self, name: &str) -> EditorResult<()> {
        self.templates.remove(name)?;
        Ok(())
    }

    pub fn export_template(&self, name: &str) -> EditorResult<String> {
        Ok(self.templates.export(name)?)
    }

    pub fn import_template(&mut self, json: &str) -> EditorResult<String> {
        Ok(self.templates.import(json)?)
    }

    /// Article HTML for the current document.
    pub fn export_html(&self) -> String {
        export_html(self.document.elements())
    }

    /// Write the publish snapshot for the external publishing flow.
    pub fn publish(&mut self) -> EditorResult<PublishSnapshot> {
        let snapshot = PublishSnapshot::new(self.document.elements());
        let json = serde_json::to_string(&snapshot).map_err(crate::error::StorageError::from)?;
        self.publish_backend.set(&self.publish_key, json)?;
        log::info!(
            "Wrote publish snapshot with {} elements ({} bytes of HTML)",
            snapshot.elements.len(),
            snapshot.content.len()
        );
        Ok(snapshot)
    }

    /// Read back the last publish snapshot, if any.
    pub fn last_publish(&self) -> EditorResult<Option<PublishSnapshot>> {
        let Some(json) = self.publish_backend.get(&self.publish_key)? else {
            return Ok(None);
        };
        let snapshot = serde_json::from_str(&json).map_err(TemplateError::Parse)?;
        Ok(Some(snapshot))
    }
}
