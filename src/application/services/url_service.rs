//! Short URL creation and resolution service.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::expiry::Expiry;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, validate_root_code};
use crate::utils::unique_code::insert_with_unique_code;
use crate::utils::url_validator::is_valid_url;

const CUSTOM_URL_CONSTRAINT: &str = "urls_custom_url_key";

/// Service for shortening URLs and resolving codes back to them.
pub struct UrlService {
    url_repository: Arc<dyn UrlRepository>,
    codes: Arc<CodeGenerator>,
    max_attempts: usize,
}

impl UrlService {
    pub fn new(
        url_repository: Arc<dyn UrlRepository>,
        codes: Arc<CodeGenerator>,
        max_attempts: usize,
    ) -> Self {
        Self {
            url_repository,
            codes,
            max_attempts,
        }
    }

    /// Creates a short URL.
    ///
    /// # Arguments
    ///
    /// - `original_url` - The URL to shorten; must pass [`is_valid_url`]
    /// - `expiry` - Expiry token (`1h`, `1d`, `1w`, `1m`, `1y`); anything else never expires
    /// - `custom_url` - Optional caller-chosen alternate code
    ///
    /// A six-character `short_url` is always generated, also when a custom
    /// code is given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL or custom code.
    /// Returns [`AppError::Conflict`] if the custom code is already taken.
    /// Returns [`AppError::Internal`] if no free code is found.
    pub async fn shorten(
        &self,
        original_url: String,
        expiry: Option<&str>,
        custom_url: Option<String>,
    ) -> Result<ShortUrl, AppError> {
        if !is_valid_url(&original_url) {
            return Err(AppError::bad_request(
                "Invalid URL format. Please enter a valid URL.",
                json!({ "original_url": original_url }),
            ));
        }

        if let Some(custom) = &custom_url {
            validate_root_code(custom)?;

            if self.url_repository.code_exists(custom).await? {
                return Err(custom_url_taken(custom));
            }
        }

        let expiry = Expiry::from_token(expiry);
        let expiration_date = expiry.expiration_from(Utc::now());

        let repo = &self.url_repository;
        let url = insert_with_unique_code(
            &self.codes,
            self.max_attempts,
            |code| async move { repo.code_exists(&code).await },
            |code| {
                let new_url = NewShortUrl {
                    original_url: original_url.clone(),
                    short_url: code,
                    custom_url: custom_url.clone(),
                    expiration_date,
                };
                let custom = custom_url.clone();
                async move {
                    repo.create(new_url).await.map_err(|e| {
                        // The custom code was taken after the pre-check.
                        if let Some(custom) = custom.as_deref()
                            && e.violated_constraint() == Some(CUSTOM_URL_CONSTRAINT)
                        {
                            custom_url_taken(custom)
                        } else {
                            e
                        }
                    })
                }
            },
        )
        .await?;

        info!(
            short_url = %url.short_url,
            expiry = expiry.as_token(),
            "Short URL created"
        );

        Ok(url)
    }

    /// Resolves a code (generated or custom) to its record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code.
    /// Returns [`AppError::Expired`] if the record's expiration date has passed.
    pub async fn resolve(&self, code: &str) -> Result<ShortUrl, AppError> {
        let url = self
            .url_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found", json!({ "code": code })))?;

        if url.is_expired_at(Utc::now()) {
            debug!(code, "Refusing expired short URL");
            return Err(AppError::expired(
                "URL expired",
                json!({ "code": code, "expiration_date": url.expiration_date }),
            ));
        }

        Ok(url)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        self.url_repository.count().await
    }
}

fn custom_url_taken(custom: &str) -> AppError {
    AppError::conflict("Custom URL already in use.", json!({ "custom_url": custom }))
}
