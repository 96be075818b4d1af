#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use linkdrop::api;
use linkdrop::api::handlers::{health_handler, redirect_handler};
use linkdrop::prelude::*;

/// In-memory short URL store enforcing the same unique keys as the schema.
#[derive(Default)]
pub struct MemoryUrlRepository {
    pub rows: Mutex<Vec<ShortUrl>>,
    pub fail_writes: AtomicBool,
}

impl MemoryUrlRepository {
    pub fn insert(&self, url: ShortUrl) {
        self.rows.lock().unwrap().push(url);
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn create(&self, new_url: NewShortUrl) -> Result<ShortUrl, AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::persistence("Database error", json!({})));
        }

        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|r| r.short_url == new_url.short_url) {
            return Err(unique_violation("urls_short_url_key"));
        }
        if let Some(custom) = &new_url.custom_url
            && rows.iter().any(|r| r.custom_url.as_ref() == Some(custom))
        {
            return Err(unique_violation("urls_custom_url_key"));
        }

        let url = ShortUrl {
            id: rows.len() as i64 + 1,
            original_url: new_url.original_url,
            short_url: new_url.short_url,
            custom_url: new_url.custom_url,
            expiration_date: new_url.expiration_date,
            created_at: Utc::now(),
        };
        rows.push(url.clone());
        Ok(url)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortUrl>, AppError> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|r| r.short_url == code)
            .or_else(|| rows.iter().find(|r| r.matches_code(code)))
            .cloned())
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.rows.lock().unwrap().iter().any(|r| r.matches_code(code)))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}

#[derive(Default)]
pub struct MemoryLinkListRepository {
    pub rows: Mutex<Vec<LinkList>>,
    pub fail_writes: AtomicBool,
}

#[async_trait]
impl LinkListRepository for MemoryLinkListRepository {
    async fn create(&self, new_list: NewLinkList) -> Result<LinkList, AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::persistence("Database error", json!({})));
        }

        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|r| r.short_link == new_list.short_link) {
            return Err(unique_violation("link_lists_short_link_key"));
        }

        let first_id: i64 = rows.iter().map(|r| r.entries.len() as i64).sum::<i64>() + 1;
        let list = LinkList {
            id: rows.len() as i64 + 1,
            short_link: new_list.short_link,
            entries: new_list
                .entries
                .into_iter()
                .enumerate()
                .map(|(i, e)| LinkEntry {
                    id: first_id + i as i64,
                    title: e.title,
                    description: e.description,
                    url: e.url,
                    position: i as i32,
                })
                .collect(),
        };
        rows.push(list.clone());
        Ok(list)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<LinkList>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.short_link == code)
            .cloned())
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.rows.lock().unwrap().iter().any(|r| r.short_link == code))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.short_link != code);
        Ok(rows.len() != before)
    }
}

#[derive(Default)]
pub struct MemoryClipboardRepository {
    pub rows: Mutex<Vec<Clipboard>>,
    pub fail_writes: AtomicBool,
}

#[async_trait]
impl ClipboardRepository for MemoryClipboardRepository {
    async fn create(&self, new_clipboard: NewClipboard) -> Result<Clipboard, AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::persistence("Database error", json!({})));
        }

        let mut rows = self.rows.lock().unwrap();

        if rows
            .iter()
            .any(|r| r.clipboard_short_url == new_clipboard.clipboard_short_url)
        {
            return Err(unique_violation("clipboards_clipboard_short_url_key"));
        }

        let clipboard = Clipboard {
            id: rows.len() as i64 + 1,
            clipboard_text: new_clipboard.clipboard_text,
            clipboard_short_url: new_clipboard.clipboard_short_url,
            created_at: Utc::now(),
        };
        rows.push(clipboard.clone());
        Ok(clipboard)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Clipboard>, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.clipboard_short_url == code)
            .cloned())
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.clipboard_short_url == code))
    }

    async fn update_text(&self, code: &str, clipboard_text: &str) -> Result<bool, AppError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::persistence("Database error", json!({})));
        }

        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.clipboard_short_url == code) {
            Some(row) => {
                row.clipboard_text = clipboard_text.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.rows.lock().unwrap().len() as i64)
    }
}

#[derive(Default)]
pub struct MemoryStoreProbe {
    pub down: AtomicBool,
}

#[async_trait]
impl StoreProbe for MemoryStoreProbe {
    async fn ping(&self) -> Result<(), AppError> {
        if self.down.load(Ordering::SeqCst) {
            Err(AppError::persistence("connection refused", json!({})))
        } else {
            Ok(())
        }
    }
}

fn unique_violation(constraint: &str) -> AppError {
    AppError::conflict(
        "Unique constraint violation",
        json!({ "constraint": constraint }),
    )
}

/// Handles to the stores behind a test state.
pub struct TestStores {
    pub urls: Arc<MemoryUrlRepository>,
    pub lists: Arc<MemoryLinkListRepository>,
    pub clipboards: Arc<MemoryClipboardRepository>,
    pub probe: Arc<MemoryStoreProbe>,
}

pub fn create_test_state() -> (AppState, TestStores) {
    let stores = TestStores {
        urls: Arc::new(MemoryUrlRepository::default()),
        lists: Arc::new(MemoryLinkListRepository::default()),
        clipboards: Arc::new(MemoryClipboardRepository::default()),
        probe: Arc::new(MemoryStoreProbe::default()),
    };

    let codes = Arc::new(CodeGenerator::seeded(2024));

    let state = AppState::new(
        Arc::new(UrlService::new(stores.urls.clone(), codes.clone(), 10)),
        Arc::new(LinkListService::new(stores.lists.clone(), codes.clone(), 10)),
        Arc::new(ClipboardService::new(stores.clipboards.clone(), codes, 10)),
        stores.probe.clone(),
    );

    (state, stores)
}

/// The full route table without the outer layers.
pub fn create_test_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .merge(api::routes::routes())
        .with_state(state)
}
