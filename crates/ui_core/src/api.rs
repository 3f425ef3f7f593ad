//! Seams to the outside world: the backend and the system clipboard.
//!
//! The browser implementations live in the frontend crate; tests use
//! in-memory fakes.

use web_types::{
    ActionResponse, GenerateResponse, GenerationRequest, SaveRequest, SavedPasswordsResponse,
};

use crate::error::Result;

/// The four backend calls.
///
/// Implementations map network and decode failures to
/// [`ClientError::Transport`](crate::ClientError::Transport) and hand back
/// the response body untouched; interpreting `success` is the controller's job.
#[allow(async_fn_in_trait)]
pub trait PasswordApi {
    /// `POST /generate`
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateResponse>;
    /// `POST /save`
    async fn save(&self, request: &SaveRequest) -> Result<ActionResponse>;
    /// `GET /saved`
    async fn list(&self) -> Result<SavedPasswordsResponse>;
    /// `DELETE /delete/{id}`
    async fn delete(&self, id: i64) -> Result<ActionResponse>;
}

/// System clipboard access.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    /// Write `text`, failing with
    /// [`ClientError::ClipboardDenied`](crate::ClientError::ClipboardDenied).
    async fn write_text(&self, text: &str) -> Result<()>;
}
