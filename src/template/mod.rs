//! Named snapshots of element sequences, persisted as one JSON object.
//!
//! The store owns its own copies of every element. Nothing handed in or out
//! aliases the live document, so either side can be mutated independently.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::element::Element;
use crate::error::{TemplateError, TemplateResult};
use crate::storage::KeyValueStore;

pub mod defaults;

/// A named snapshot of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub name: String,
    pub elements: Vec<Element>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Template {
    /// Snapshot `elements` under `name`, stamped with the current time.
    pub fn new(name: impl Into<String>, elements: &[Element]) -> Self {
        Self {
            name: name.into(),
            elements: elements.to_vec(),
            created_at: Utc::now(),
        }
    }
}

/// Serializes as `{ name: Template }` in insertion order.
struct StoredTemplates<'a>(&'a [Template]);

impl Serialize for StoredTemplates<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for template in self.0 {
            map.serialize_entry(&template.name, template)?;
        }
        map.end()
    }
}

fn parse_stored(json: &str) -> TemplateResult<Vec<Template>> {
    let map: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(json).map_err(TemplateError::Parse)?;

    map.into_iter()
        .map(|(key, value)| {
            let mut template: Template =
                serde_json::from_value(value).map_err(TemplateError::Parse)?;
            // The map key is what lookups use
            template.name = key;
            Ok(template)
        })
        .collect()
}

/// Template collection backed by a single durable key.
pub struct TemplateStore {
    backend: Box<dyn KeyValueStore>,
    key: String,
    templates: Vec<Template>,
}

impl std::fmt::Debug for TemplateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateStore")
            .field("key", &self.key)
            .field("templates", &self.names())
            .finish()
    }
}

impl TemplateStore {
    /// Open the store persisted under `key`.
    ///
    /// A missing key yields an empty store. Content that does not parse is
    /// reported as [`TemplateError::Parse`] and left untouched on disk.
    pub fn open(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> TemplateResult<Self> {
        let key = key.into();
        let templates = match backend.get(&key)? {
            Some(json) => parse_stored(&json)?,
            None => Vec::new(),
        };
        log::info!("Opened template store '{}' with {} templates", key, templates.len());

        Ok(Self {
            backend,
            key,
            templates,
        })
    }

    /// An empty store bound to `key`. Nothing is written until the first mutation.
    pub fn empty(backend: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            templates: Vec::new(),
        }
    }

    /// Seed the built-in templates if the store holds nothing yet.
    pub fn seed_defaults_if_empty(&mut self) -> TemplateResult<bool> {
        if !self.templates.is_empty() {
            return Ok(false);
        }
        self.commit(defaults::builtin_templates())?;
        log::info!("Seeded {} default templates", self.templates.len());
        Ok(true)
    }

    /// Store a copy of `elements` as `name`, replacing any template of that name.
    pub fn save(&mut self, name: &str, elements: &[Element]) -> TemplateResult<()> {
        self.insert(Template::new(name, elements))?;
        log::info!("Saved template '{}' ({} elements)", name, elements.len());
        Ok(())
    }

    /// A fresh copy of the elements stored under `name`.
    pub fn load(&self, name: &str) -> TemplateResult<Vec<Element>> {
        self.get(name)
            .map(|t| t.elements.clone())
            .ok_or_else(|| TemplateError::NotFound(name.to_owned()))
    }

    pub fn remove(&mut self, name: &str) -> TemplateResult<()> {
        let index = self
            .position(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_owned()))?;

        let mut next = self.templates.clone();
        next.remove(index);
        self.commit(next)?;
        log::info!("Deleted template '{}'", name);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Template names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Pretty-printed JSON of one template, suitable for a `.json` download.
    pub fn export(&self, name: &str) -> TemplateResult<String> {
        let template = self
            .get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_owned()))?;
        serde_json::to_string_pretty(template).map_err(|e| TemplateError::Storage(e.into()))
    }

    /// Parse a serialized template and store it under its own `name`.
    ///
    /// On any failure the store is left exactly as it was.
    pub fn import(&mut self, json: &str) -> TemplateResult<String> {
        let template: Template = serde_json::from_str(json).map_err(TemplateError::Parse)?;
        let name = template.name.clone();
        self.insert(template)?;
        log::info!("Imported template '{}'", name);
        Ok(name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.templates.iter().position(|t| t.name == name)
    }

    /// Overwrite in place on a name collision, append otherwise.
    fn insert(&mut self, template: Template) -> TemplateResult<()> {
        let mut next = self.templates.clone();
        match self.position(&template.name) {
            Some(index) => next[index] = template,
            None => next.push(template),
        }
        self.commit(next)
    }

    /// Persist `next` and adopt it only once the write succeeded.
    fn commit(&mut self, next: Vec<Template>) -> TemplateResult<()> {
        let json = serde_json::to_string(&StoredTemplates(&next))
            .map_err(|e| TemplateError::Storage(e.into()))?;
        self.backend.set(&self.key, json)?;
        self.templates = next;
        Ok(())
    }
}
