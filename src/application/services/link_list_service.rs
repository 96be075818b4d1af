//! Link list creation and retrieval service.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::entities::{LinkList, MAX_LIST_ENTRIES, NewLinkEntry, NewLinkList};
use crate::domain::repositories::LinkListRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, validate_custom_code};
use crate::utils::unique_code::insert_with_unique_code;

/// Service for link lists: one code pointing at an ordered batch of links.
pub struct LinkListService {
    link_list_repository: Arc<dyn LinkListRepository>,
    codes: Arc<CodeGenerator>,
    max_attempts: usize,
}

impl LinkListService {
    pub fn new(
        link_list_repository: Arc<dyn LinkListRepository>,
        codes: Arc<CodeGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            link_list_repository,
            codes,
            max_attempts,
        }
    }

    /// Creates a list with all of its entries.
    ///
    /// The entry limit is checked before the store is touched. With a custom
    /// code the list is stored under it as-is; otherwise a code is generated.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for more than [`MAX_LIST_ENTRIES`] entries
    /// or a malformed custom code.
    /// Returns [`AppError::Conflict`] if the custom code is already in use.
    pub async fn create(
        &self,
        entries: Vec<NewLinkEntry>,
        custom_short_link: Option<String>,
    ) -> Result<LinkList, AppError> {
        if entries.len() > MAX_LIST_ENTRIES {
            return Err(too_many_entries(entries.len()));
        }

        let repo = &self.link_list_repository;

        let list = match custom_short_link {
            Some(custom) => {
                validate_custom_code(&custom)?;

                if repo.code_exists(&custom).await? {
                    return Err(custom_link_taken(&custom));
                }

                let new_list = NewLinkList {
                    short_link: custom.clone(),
                    entries,
                };

                repo.create(new_list).await.map_err(|e| {
                    if e.violated_constraint().is_some() {
                        custom_link_taken(&custom)
                    } else {
                        e
                    }
                })?
            }
            None => {
                insert_with_unique_code(
                    &self.codes,
                    self.max_attempts,
                    |code| async move { repo.code_exists(&code).await },
                    |code| {
                        let new_list = NewLinkList {
                            short_link: code,
                            entries: entries.clone(),
                        };
                        async move { repo.create(new_list).await }
                    },
                )
                .await?
            }
        };

        info!(
            short_link = %list.short_link,
            entries = list.entries.len(),
            "Link list created"
        );

        Ok(list)
    }

    /// Retrieves a list with its entries in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no list has this code.
    pub async fn get(&self, code: &str) -> Result<LinkList, AppError> {
        self.link_list_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Deletes a list together with its entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no list has this code.
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        if self.link_list_repository.delete(code).await? {
            info!(short_link = code, "Link list deleted");
            Ok(())
        } else {
            Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ))
        }
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_list_repository.count().await
    }
}

fn too_many_entries(count: usize) -> AppError {
    AppError::bad_request(
        "Cannot exceed 50 URLs.",
        json!({ "max": MAX_LIST_ENTRIES, "provided": count }),
    )
}

fn custom_link_taken(custom: &str) -> AppError {
    AppError::conflict(
        "Custom short link already in use.",
        json!({ "customShortLink": custom }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LinkEntry;
    use crate::domain::repositories::MockLinkListRepository;

    fn entries(count: usize) -> Vec<NewLinkEntry> {
        (0..count)
            .map(|i| {
                NewLinkEntry::new(
                    format!("Link {i}"),
                    None,
                    format!("https://example.com/{i}"),
                )
            })
            .collect()
    }

    fn stored(new_list: NewLinkList) -> LinkList {
        LinkList {
            id: 1,
            short_link: new_list.short_link,
            entries: new_list
                .entries
                .into_iter()
                .enumerate()
                .map(|(i, e)| LinkEntry {
                    id: i as i64 + 1,
                    title: e.title,
                    description: e.description,
                    url: e.url,
                    position: i as i32,
                })
                .collect(),
        }
    }

    fn service(repo: MockLinkListRepository) -> LinkListService {
        LinkListService::new(Arc::new(repo), Arc::new(CodeGenerator::seeded(2)), 10)
    }

    #[tokio::test]
    async fn test_create_with_generated_code() {
        let mut repo = MockLinkListRepository::new();
        repo.expect_code_exists().times(1).returning(|_| Ok(false));
        repo.expect_create()
            .withf(|n| n.entries.len() == 3 && n.short_link.len() == 6)
            .times(1)
            .returning(|n| Ok(stored(n)));

        let list = service(repo).create(entries(3), None).await.unwrap();

        assert_eq!(list.entries.len(), 3);
        assert_eq!(list.entries[0].title, "Link 0");
        assert_eq!(list.entries[2].position, 2);
    }

    #[tokio::test]
    async fn test_create_accepts_exactly_fifty_entries() {
        let mut repo = MockLinkListRepository::new();
        repo.expect_code_exists().returning(|_| Ok(false));
        repo.expect_create().times(1).returning(|n| Ok(stored(n)));

        let list = service(repo).create(entries(50), None).await.unwrap();
        assert_eq!(list.entries.len(), 50);
    }

    #[tokio::test]
    async fn test_create_rejects_fifty_one_entries_before_any_store_call() {
        let mut repo = MockLinkListRepository::new();
        repo.expect_code_exists().times(0);
        repo.expect_create().times(0);

        let err = service(repo).create(entries(51), None).await.unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Cannot exceed 50 URLs.");
    }

    #[tokio::test]
    async fn test_create_empty_list() {
        let mut repo = MockLinkListRepository::new();
        repo.expect_code_exists().returning(|_| Ok(false));
        repo.expect_create().times(1).returning(|n| Ok(stored(n)));

        let list = service(repo).create(Vec::new(), None).await.unwrap();
        assert!(list.entries.is_empty());
    }

    #[tokio::test]
    async fn test_create_with_custom_code() {
        let mut repo = MockLinkListRepository::new();
        repo.expect_code_exists()
            .withf(|code| code == "reading")
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_create()
            .withf(|n| n.short_link == "reading")
            .times(1)
            .returning(|n| Ok(stored(n)));

        let list = service(repo)
            .create(entries(2), Some("reading".to_string()))
            .await
            .unwrap();

        assert_eq!(list.short_link, "reading");
    }

    #[tokio::test]
    async fn test_create_custom_code_taken() {
        let mut repo = MockLinkListRepository::new();
        repo.expect_code_exists().times(1).returning(|_| Ok(true));
        repo.expect_create().times(0);

        let err = service(repo)
            .create(entries(2), Some("reading".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
        assert_eq!(err.to_string(), "Custom short link already in use.");
    }

    #[tokio::test]
    async fn test_create_custom_code_rejected_by_store() {
        let mut repo = MockLinkListRepository::new();
        repo.expect_code_exists().times(1).returning(|_| Ok(false));
        repo.expect_create().times(1).returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "link_lists_short_link_key" }),
            ))
        });

        let err = service(repo)
            .create(entries(1), Some("reading".to_string()))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Custom short link already in use.");
    }

    #[tokio::test]
    async fn test_create_propagates_persistence_errors() {
        let mut repo = MockLinkListRepository::new();
        repo.expect_code_exists().returning(|_| Ok(false));
        repo.expect_create()
            .times(1)
            .returning(|_| Err(AppError::persistence("Database error", json!({}))));

        let err = service(repo).create(entries(1), None).await.unwrap_err();
        assert!(matches!(err, AppError::Persistence { .. }));
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let mut repo = MockLinkListRepository::new();
        repo.expect_find_by_code().returning(|_| Ok(None));

        let err = service(repo).get("nolist").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_list() {
        let mut repo = MockLinkListRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let err = service(repo).delete("nolist").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
