// In memory implementation of the ChatApi port for tests.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::modules::notifier::ports::{ChatApi, ChatApiError};

pub struct RecordingChat {
    accept_documents: bool,
    texts: Mutex<Vec<String>>,
    documents: Mutex<Vec<PathBuf>>,
}

impl RecordingChat {
    pub fn accepting() -> Self {
        Self::new(true)
    }

    /// Remote that takes the upload but answers with a non-200 status.
    pub fn rejecting() -> Self {
        Self::new(false)
    }

    fn new(accept_documents: bool) -> Self {
        Self {
            accept_documents,
            texts: Mutex::new(Vec::new()),
            documents: Mutex::new(Vec::new()),
        }
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }

    pub fn documents(&self) -> Vec<PathBuf> {
        self.documents.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatApi for RecordingChat {
    async fn send_text(&self, text: &str) -> Result<(), ChatApiError> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn send_document(&self, path: &Path) -> Result<bool, ChatApiError> {
        if self.accept_documents {
            self.documents.lock().unwrap().push(path.to_path_buf());
        }
        Ok(self.accept_documents)
    }
}
