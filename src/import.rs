//! Template file import.
//!
//! The file is read off the UI thread; the result comes back exactly once
//! through a one-shot channel and is committed to the store (or dropped)
//! by whoever polls it.

use futures::channel::oneshot;
use std::fs;
use std::path::{Path, PathBuf};

use crate::editor::Editor;
use crate::error::{EditorResult, TemplateError};

type ReadResult = Result<String, std::io::Error>;

#[derive(Debug)]
pub struct PendingImport {
    path: PathBuf,
    receiver: oneshot::Receiver<ReadResult>,
}

impl PendingImport {
    /// Start reading `path` on a background thread.
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (sender, receiver) = oneshot::channel();

        let read_path = path.clone();
        std::thread::spawn(move || {
            // The receiver may already be gone if the app closed
            let _ = sender.send(fs::read_to_string(read_path));
        });

        log::info!("Reading template file {}", path.display());
        Self { path, receiver }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-blocking check. `None` while the read is still in flight.
    pub fn poll(&mut self) -> Option<Result<String, TemplateError>> {
        match self.receiver.try_recv() {
            Ok(Some(read)) => Some(self.map_read(read)),
            Ok(None) => None,
            Err(oneshot::Canceled) => Some(Err(TemplateError::ImportCancelled)),
        }
    }

    /// Wait for the read to finish.
    pub async fn finish(mut self) -> Result<String, TemplateError> {
        match (&mut self.receiver).await {
            Ok(read) => self.map_read(read),
            Err(oneshot::Canceled) => Err(TemplateError::ImportCancelled),
        }
    }

    fn map_read(&self, read: ReadResult) -> Result<String, TemplateError> {
        read.map_err(|source| TemplateError::ReadFile {
            path: self.path.clone(),
            source,
        })
    }
}

/// Commit a finished read into the editor's template store.
///
/// Read failures and malformed content leave the store untouched.
pub fn commit(editor: &mut Editor, read: Result<String, TemplateError>) -> EditorResult<String> {
    let json = read?;
    editor.import_template(&json)
}
