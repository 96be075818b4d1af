//! Online clipboard service.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::entities::{Clipboard, NewClipboard};
use crate::domain::repositories::ClipboardRepository;
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::unique_code::insert_with_unique_code;

pub struct ClipboardService {
    clipboard_repository: Arc<dyn ClipboardRepository>,
    codes: Arc<CodeGenerator>,
    max_attempts: usize,
}

impl ClipboardService {
    pub fn new(
        clipboard_repository: Arc<dyn ClipboardRepository>,
        codes: Arc<CodeGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            clipboard_repository,
            codes,
            max_attempts,
        }
    }

    /// Stores `text` under a freshly generated code.
    ///
    /// Any text is accepted, including an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no free code is found.
    pub async fn create(&self, text: String) -> Result<Clipboard, AppError> {
        let repo = &self.clipboard_repository;

        let clipboard = insert_with_unique_code(
            &self.codes,
            self.max_attempts,
            |code| async move { repo.code_exists(&code).await },
            |code| {
                let new_clipboard = NewClipboard {
                    clipboard_text: text.clone(),
                    clipboard_short_url: code,
                };
                async move { repo.create(new_clipboard).await }
            },
        )
        .await?;

        info!(
            clipboard_short_url = %clipboard.clipboard_short_url,
            length = clipboard.clipboard_text.len(),
            "Clipboard created"
        );

        Ok(clipboard)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no clipboard has this code.
    pub async fn get(&self, code: &str) -> Result<Clipboard, AppError> {
        self.clipboard_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Replaces the text of an existing clipboard. The code never changes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no clipboard has this code.
    pub async fn update(&self, code: &str, text: &str) -> Result<(), AppError> {
        if !self.clipboard_repository.update_text(code, text).await? {
            return Err(not_found(code));
        }

        info!(clipboard_short_url = code, "Clipboard updated");
        Ok(())
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.clipboard_repository.count().await
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Clipboard not found", json!({ "code": code }))
}
