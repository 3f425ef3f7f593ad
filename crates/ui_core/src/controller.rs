//! Generator/list controller: one method per user action.
//!
//! The controller owns no view state. It validates, talks to the backend
//! through [`PasswordApi`] and hands results back for the view to apply.

use std::cell::Cell;

use web_types::{SaveRequest, SavedPasswordEntry};

use crate::api::{Clipboard, PasswordApi};
use crate::error::{ClientError, Result};
use crate::view::{GeneratorForm, PendingPassword};

/// Outcome of a copy request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// No password to copy; nothing was written.
    NothingToCopy,
}

/// Outcome of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined the confirmation.
    Cancelled,
}

/// Orders list refreshes so a slow, older response never overwrites a
/// newer snapshot.
#[derive(Debug, Default)]
pub struct RefreshTickets {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl RefreshTickets {
    /// Take the next ticket; call before sending the request.
    pub fn issue(&self) -> u64 {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        ticket
    }

    /// Record `ticket` as applied if it is newer than anything applied so far.
    pub fn try_apply(&self, ticket: u64) -> bool {
        if ticket > self.applied.get() {
            self.applied.set(ticket);
            true
        } else {
            false
        }
    }
}

/// Front-end controller over a backend implementation.
pub struct PasswordController<A> {
    api: A,
    tickets: RefreshTickets,
}

impl<A: PasswordApi> PasswordController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            tickets: RefreshTickets::default(),
        }
    }

    #[cfg(test)]
    fn api(&self) -> &A {
        &self.api
    }

    /// Ask the backend for a password matching `form`.
    ///
    /// Fails locally with [`ClientError::InvalidOptions`] before any request
    /// when no character class is selected.
    pub async fn generate(&self, form: &GeneratorForm) -> Result<PendingPassword> {
        let request = form.request()?;
        let response = self.api.generate(&request).await?;

        match response.password {
            Some(password) if response.success => Ok(PendingPassword {
                password,
                site_name: form.site_name.clone(),
            }),
            Some(_) => Err(ClientError::Server(response.error)),
            None if response.success => Err(ClientError::Transport(
                "generate response is missing the password".to_string(),
            )),
            None => Err(ClientError::Server(response.error)),
        }
    }

    /// Persist the pending password under its site name.
    ///
    /// Returns the site name that was saved. The caller clears its
    /// transient state and refreshes the list on success.
    pub async fn save(&self, pending: Option<&PendingPassword>) -> Result<String> {
        let pending = pending
            .filter(|p| !p.password.is_empty() && !p.site_name.trim().is_empty())
            .ok_or(ClientError::MissingInput)?;

        let request = SaveRequest {
            site_name: pending.site_name.clone(),
            password: pending.password.clone(),
        };
        let response = self.api.save(&request).await?;

        if response.success {
            Ok(request.site_name)
        } else {
            Err(ClientError::Server(response.error))
        }
    }

    /// Fetch the full saved list.
    ///
    /// Returns `Ok(None)` when a newer refresh has already been applied and
    /// this snapshot must be dropped.
    pub async fn list(&self) -> Result<Option<Vec<SavedPasswordEntry>>> {
        let ticket = self.tickets.issue();
        let response = self.api.list().await?;

        if self.tickets.try_apply(ticket) {
            Ok(Some(response.passwords))
        } else {
            Ok(None)
        }
    }

    /// Delete entry `id` after `confirm` approves the prompt.
    pub async fn delete(
        &self,
        id: i64,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<DeleteOutcome> {
        if !confirm(crate::view::DELETE_PROMPT) {
            return Ok(DeleteOutcome::Cancelled);
        }

        let response = self.api.delete(id).await?;
        if response.success {
            Ok(DeleteOutcome::Deleted)
        } else {
            Err(ClientError::Server(response.error))
        }
    }
}

/// Write `password` to the clipboard; an empty password is a no-op.
pub async fn copy<C: Clipboard>(clipboard: &C, password: &str) -> Result<CopyOutcome> {
    if password.is_empty() {
        return Ok(CopyOutcome::NothingToCopy);
    }
    clipboard.write_text(password).await?;
    Ok(CopyOutcome::Copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use web_types::{
        ActionResponse, GenerateResponse, GenerationOptions, GenerationRequest,
        SavedPasswordsResponse,
    };

    /// In-memory backend recording every call it receives.
    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<String>>,
        generate_replies: RefCell<VecDeque<Result<GenerateResponse>>>,
        action_replies: RefCell<VecDeque<Result<ActionResponse>>>,
        saved: RefCell<Vec<SavedPasswordEntry>>,
        /// Number of yields the n-th list call waits before answering
        list_delays: RefCell<VecDeque<usize>>,
    }

    impl FakeApi {
        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn next_action(&self) -> Result<ActionResponse> {
            self.action_replies.borrow_mut().pop_front().unwrap_or(Ok(ActionResponse {
                success: true,
                error: None,
            }))
        }
    }

    impl PasswordApi for FakeApi {
        async fn generate(&self, request: &GenerationRequest) -> Result<GenerateResponse> {
            self.calls.borrow_mut().push(format!("generate:{}", request.length));
            self.generate_replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(ClientError::Transport("no reply queued".to_string())))
        }

        async fn save(&self, request: &SaveRequest) -> Result<ActionResponse> {
            self.calls.borrow_mut().push(format!("save:{}", request.site_name));
            let reply = self.next_action();
            if matches!(reply, Ok(ActionResponse { success: true, .. })) {
                let id = self.saved.borrow().len() as i64 + 1;
                self.saved.borrow_mut().insert(
                    0,
                    SavedPasswordEntry {
                        id,
                        site_name: request.site_name.clone(),
                        password: request.password.clone(),
                        created_at: "2024-01-05T15:07:12".to_string(),
                    },
                );
            }
            reply
        }

        async fn list(&self) -> Result<SavedPasswordsResponse> {
            self.calls.borrow_mut().push("list".to_string());
            let snapshot = self.saved.borrow().clone();
            let delay = self.list_delays.borrow_mut().pop_front().unwrap_or(0);
            for _ in 0..delay {
                tokio::task::yield_now().await;
            }
            Ok(SavedPasswordsResponse {
                passwords: snapshot,
            })
        }

        async fn delete(&self, id: i64) -> Result<ActionResponse> {
            self.calls.borrow_mut().push(format!("delete:{id}"));
            let reply = self.next_action();
            if matches!(reply, Ok(ActionResponse { success: true, .. })) {
                self.saved.borrow_mut().retain(|e| e.id != id);
            }
            reply
        }
    }

    struct FakeClipboard {
        allow: bool,
        written: RefCell<Vec<String>>,
    }

    impl Clipboard for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<()> {
            if !self.allow {
                return Err(ClientError::ClipboardDenied("NotAllowedError".to_string()));
            }
            self.written.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn form(site_name: &str, options: GenerationOptions) -> GeneratorForm {
        GeneratorForm {
            length: 12,
            options,
            site_name: site_name.to_string(),
        }
    }

    fn upper_lower() -> GenerationOptions {
        GenerationOptions {
            uppercase: true,
            lowercase: true,
            numbers: false,
            special: false,
        }
    }

    fn generated(password: &str) -> Result<GenerateResponse> {
        Ok(GenerateResponse {
            success: true,
            password: Some(password.to_string()),
            error: None,
        })
    }

    #[tokio::test]
    async fn test_generate_rejects_empty_options_without_request() {
        let controller = PasswordController::new(FakeApi::default());
        let none = GenerationOptions {
            uppercase: false,
            lowercase: false,
            numbers: false,
            special: false,
        };

        let result = controller.generate(&form("github", none)).await;

        assert_eq!(result, Err(ClientError::InvalidOptions));
        assert!(controller.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_generate_scenario_with_site_name() {
        let api = FakeApi::default();
        api.generate_replies.borrow_mut().push_back(generated("Ab3xyzQWErty"));
        let controller = PasswordController::new(api);

        let pending = controller.generate(&form("github", upper_lower())).await.unwrap();

        assert_eq!(pending.password, "Ab3xyzQWErty");
        assert_eq!(pending.site_name, "github");
        assert!(pending.save_visible());
        assert_eq!(controller.api().calls(), vec!["generate:12"]);
    }

    #[tokio::test]
    async fn test_generate_without_site_name_hides_save() {
        let api = FakeApi::default();
        api.generate_replies.borrow_mut().push_back(generated("Ab3xyzQWErty"));
        let controller = PasswordController::new(api);

        let pending = controller.generate(&form("", upper_lower())).await.unwrap();

        assert_eq!(pending.password, "Ab3xyzQWErty");
        assert!(!pending.save_visible());
    }

    #[tokio::test]
    async fn test_generate_server_error() {
        let api = FakeApi::default();
        api.generate_replies.borrow_mut().push_back(Ok(GenerateResponse {
            success: false,
            password: None,
            error: Some("No character types selected".to_string()),
        }));
        let controller = PasswordController::new(api);

        let result = controller.generate(&form("", upper_lower())).await;

        assert_eq!(
            result,
            Err(ClientError::Server(Some("No character types selected".to_string())))
        );
    }

    #[tokio::test]
    async fn test_generate_transport_error() {
        let controller = PasswordController::new(FakeApi::default());

        let result = controller.generate(&form("", upper_lower())).await;

        assert!(matches!(result, Err(ClientError::Transport(_))));
    }

    #[tokio::test]
    async fn test_save_requires_site_name_and_password() {
        let controller = PasswordController::new(FakeApi::default());

        assert_eq!(controller.save(None).await, Err(ClientError::MissingInput));

        let blank_site = PendingPassword {
            password: "pw".to_string(),
            site_name: "  ".to_string(),
        };
        assert_eq!(controller.save(Some(&blank_site)).await, Err(ClientError::MissingInput));

        let no_password = PendingPassword {
            password: String::new(),
            site_name: "github".to_string(),
        };
        assert_eq!(controller.save(Some(&no_password)).await, Err(ClientError::MissingInput));

        assert!(controller.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_list() {
        let controller = PasswordController::new(FakeApi::default());
        let pending = PendingPassword {
            password: "Ab3xyzQWErty".to_string(),
            site_name: "github".to_string(),
        };

        let saved = controller.save(Some(&pending)).await.unwrap();
        let entries = controller.list().await.unwrap().unwrap();

        assert_eq!(saved, "github");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].site_name, "github");
        assert_eq!(entries[0].password, "Ab3xyzQWErty");
        assert_eq!(controller.api().calls(), vec!["save:github", "list"]);
    }

    #[tokio::test]
    async fn test_save_server_error() {
        let api = FakeApi::default();
        api.action_replies.borrow_mut().push_back(Ok(ActionResponse {
            success: false,
            error: Some("Missing site name or password".to_string()),
        }));
        let controller = PasswordController::new(api);
        let pending = PendingPassword {
            password: "pw".to_string(),
            site_name: "github".to_string(),
        };

        let result = controller.save(Some(&pending)).await;

        assert_eq!(
            result,
            Err(ClientError::Server(Some("Missing site name or password".to_string())))
        );
        assert!(controller.api().saved.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_delete_cancelled_sends_nothing() {
        let controller = PasswordController::new(FakeApi::default());

        let outcome = controller.delete(4, |_| false).await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert!(controller.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_confirmed() {
        let api = FakeApi::default();
        api.saved.borrow_mut().push(SavedPasswordEntry {
            id: 4,
            site_name: "bank".to_string(),
            password: "pw".to_string(),
            created_at: "2024-01-05T15:07:12".to_string(),
        });
        let controller = PasswordController::new(api);
        let mut prompt = String::new();

        let outcome = controller
            .delete(4, |text| {
                prompt = text.to_string();
                true
            })
            .await
            .unwrap();
        let entries = controller.list().await.unwrap().unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(prompt, "Are you sure you want to delete this password?");
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_delete_failure_is_reported() {
        let api = FakeApi::default();
        api.action_replies.borrow_mut().push_back(Ok(ActionResponse {
            success: false,
            error: None,
        }));
        let controller = PasswordController::new(api);

        let result = controller.delete(9, |_| true).await;

        assert_eq!(result, Err(ClientError::Server(None)));
    }

    #[tokio::test]
    async fn test_stale_list_response_is_discarded() {
        let api = FakeApi::default();
        // First refresh answers late, second answers immediately.
        api.list_delays.borrow_mut().extend([3, 0]);
        let controller = PasswordController::new(api);

        let (first, second) = tokio::join!(controller.list(), controller.list());

        assert_eq!(first, Ok(None));
        assert_eq!(second, Ok(Some(Vec::new())));
    }

    #[tokio::test]
    async fn test_in_order_list_responses_both_apply() {
        let controller = PasswordController::new(FakeApi::default());

        assert!(controller.list().await.unwrap().is_some());
        assert!(controller.list().await.unwrap().is_some());
    }

    #[test]
    fn test_refresh_tickets() {
        let tickets = RefreshTickets::default();
        let a = tickets.issue();
        let b = tickets.issue();

        assert!(b > a);
        assert!(tickets.try_apply(b));
        assert!(!tickets.try_apply(a));
        assert!(!tickets.try_apply(b));
    }

    #[tokio::test]
    async fn test_copy() {
        let clipboard = FakeClipboard {
            allow: true,
            written: RefCell::new(Vec::new()),
        };

        assert_eq!(copy(&clipboard, "").await, Ok(CopyOutcome::NothingToCopy));
        assert_eq!(copy(&clipboard, "Ab3xyzQWErty").await, Ok(CopyOutcome::Copied));
        assert_eq!(clipboard.written.borrow().as_slice(), ["Ab3xyzQWErty".to_string()]);
    }

    #[tokio::test]
    async fn test_copy_denied() {
        let clipboard = FakeClipboard {
            allow: false,
            written: RefCell::new(Vec::new()),
        };

        let result = copy(&clipboard, "pw").await;

        assert!(matches!(result, Err(ClientError::ClipboardDenied(_))));
    }
}
