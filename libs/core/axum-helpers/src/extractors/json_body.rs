//! JSON body extractor that reports rejections as structured errors.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection is rendered as an [`ErrorResponse`](crate::ErrorResponse).
///
/// Axum's plain `Json` extractor answers malformed bodies with a text/plain
/// message; this wrapper keeps the same status codes but uses the standard
/// error body.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateNote {
///     text: Option<String>,
/// }
///
/// async fn create_note(JsonBody(payload): JsonBody<CreateNote>) -> String {
///     format!("Creating note: {:?}", payload.text)
/// }
///
/// let app = Router::new().route("/notes", post(create_note));
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::JsonExtractorRejection(e).into_response())?;

        Ok(JsonBody(data))
    }
}
