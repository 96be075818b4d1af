//! Request extractors whose rejections use the application error format.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};

use crate::error::AppError;

/// JSON body extractor.
///
/// Behaves like [`axum::Json`], but a missing, mistyped or unparsable body is
/// rejected with [`AppError::Validation`] (400) instead of axum's plain-text
/// response.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{StatusCode, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        clipboard_text: String,
    }

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/clipboard")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_extracts_valid_body() {
        let JsonBody(payload) =
            JsonBody::<Payload>::from_request(json_request(r#"{"clipboard_text":"hi"}"#), &())
                .await
                .unwrap();

        assert_eq!(payload.clipboard_text, "hi");
    }

    #[tokio::test]
    async fn test_missing_field_is_validation_error() {
        let err = JsonBody::<Payload>::from_request(json_request("{}"), &())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("clipboard_text"));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_validation_error() {
        let req = Request::builder()
            .method("POST")
            .uri("/clipboard")
            .body(Body::from(r#"{"clipboard_text":"hi"}"#))
            .unwrap();

        let err = JsonBody::<Payload>::from_request(req, &()).await.unwrap_err();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_error_info().details["rejected_status"], 415);
    }
}
