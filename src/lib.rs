#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod document;
pub mod editor;
pub mod element;
pub mod error;
pub mod export;
pub mod import;
pub mod markdown;
pub mod panels;
pub mod render;
pub mod storage;
pub mod template;

pub use app::LayoutApp;
pub use config::Config;
pub use document::Document;
pub use editor::Editor;
pub use element::{Block, ComponentKind, Element, ElementKind, FieldUpdate, Group};
pub use error::{EditorError, StorageError, TemplateError, UnknownComponent};
pub use export::{PublishSnapshot, export_html};
pub use markdown::render_markdown;
pub use render::{Scene, render};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use template::{Template, TemplateStore};
