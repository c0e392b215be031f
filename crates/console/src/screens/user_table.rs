//! Admin user table: list, select, add, edit and bulk-delete users.

use tracing::{error, info, warn};

use common::AppError;
use domain::{DomainError, DomainResult, DraftField, UserRecord};

use super::{SubmitOutcome, MSG_NO_DATA};
use crate::clients::UserApi;
use crate::forms::{FormController, Submit};
use crate::session::{Credentials, Session};

/// Shown when "Delete Selected" is pressed with nothing selected.
pub const MSG_SELECT_USERS: &str = "Please select users.";

/// Which rows disappear from the table after a bulk delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalPolicy {
    /// Only users the server confirmed as deleted
    #[default]
    ConfirmedOnly,
    /// Every selected user, whatever the server answered
    AllSelected,
}

impl std::str::FromStr for RemovalPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "confirmed-only" | "confirmed" => Ok(RemovalPolicy::ConfirmedOnly),
            "all-selected" | "all" => Ok(RemovalPolicy::AllSelected),
            other => Err(format!("unknown removal policy: {}", other)),
        }
    }
}

/// Per-item result of a bulk delete, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteReport {
    pub deleted: Vec<String>,
    pub failed: Vec<String>,
}

impl DeleteReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// What the table currently renders.
#[derive(Debug, PartialEq, Eq)]
pub enum TableView<'a> {
    Loading,
    Empty,
    Loaded(&'a [UserRecord]),
}

/// Open add/edit surface.
#[derive(Debug, Clone)]
struct EditSurface {
    form: FormController,
    /// Record being edited; `None` when adding a new user
    target: Option<UserRecord>,
}

#[derive(Debug)]
pub struct UserTableScreen {
    session: Session,
    auth: Credentials,
    removal_policy: RemovalPolicy,
    users: Option<Vec<UserRecord>>,
    selected: Vec<String>,
    editing: Option<EditSurface>,
    show_delete_confirmation: bool,
    message: String,
    error: Option<String>,
    /// Why the last load failed
    load_failure: Option<AppError>,
    loading: bool,
}

impl UserTableScreen {
    pub fn new(session: Session, auth: Credentials, removal_policy: RemovalPolicy) -> Self {
        Self {
            session,
            auth,
            removal_policy,
            users: None,
            selected: Vec::new(),
            editing: None,
            show_delete_confirmation: false,
            message: String::new(),
            error: None,
            load_failure: None,
            loading: true,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Whether the edit, add and delete actions are offered
    pub fn can_manage(&self) -> bool {
        self.session.is_admin()
    }

    pub fn users(&self) -> Option<&[UserRecord]> {
        self.users.as_deref()
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn is_selected(&self, email: &str) -> bool {
        self.selected.iter().any(|e| e == email)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_confirming_delete(&self) -> bool {
        self.show_delete_confirmation
    }

    /// The open add/edit form
    pub fn editing(&self) -> Option<&FormController> {
        self.editing.as_ref().map(|s| &s.form)
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.as_ref().is_some_and(|s| s.target.is_some())
    }

    /// Heading of the add/edit surface
    pub fn edit_title(&self) -> Option<String> {
        let surface = self.editing.as_ref()?;
        Some(match surface.target {
            Some(_) => {
                let draft = surface.form.draft();
                format!("Edit: {} {}", draft.first_name, draft.last_name)
            }
            None => "Add New User".to_string(),
        })
    }

    pub fn view(&self) -> TableView<'_> {
        if self.loading {
            return TableView::Loading;
        }
        match self.users.as_deref() {
            Some(users) => TableView::Loaded(users),
            None => TableView::Empty,
        }
    }

    pub fn empty_message(&self) -> &'static str {
        MSG_NO_DATA
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Fetch the user list.
    ///
    /// Only transport failures are shown on the screen; every failure is kept
    /// for [`take_load_failure`](Self::take_load_failure).
    pub async fn load(&mut self, api: &dyn UserApi) {
        self.loading = true;
        match api.list_users(&self.auth).await {
            Ok(users) => {
                info!("Loaded {} users", users.len());
                self.error = None;
                self.load_failure = None;
                self.users = Some(users);
            }
            Err(e) => {
                if e.is_transport() {
                    self.error = Some(e.user_message());
                } else {
                    error!("Error: {}", e);
                }
                self.load_failure = Some(e);
            }
        }
        self.loading = false;
    }

    /// Hand out the error of the last failed load, if any
    pub fn take_load_failure(&mut self) -> Option<AppError> {
        self.load_failure.take()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Tick or untick the checkbox of `email`.
    pub fn toggle_select(&mut self, email: &str) {
        if let Some(pos) = self.selected.iter().position(|e| e == email) {
            self.selected.remove(pos);
        } else {
            self.selected.push(email.to_string());
        }
        self.message.clear();
    }

    /// Tick the checkbox of `email`; already ticked rows stay ticked.
    pub fn select(&mut self, email: &str) {
        if !self.is_selected(email) {
            self.selected.push(email.to_string());
        }
        self.message.clear();
    }

    // =========================================================================
    // Add / edit
    // =========================================================================

    fn require_admin(&mut self) -> bool {
        if self.can_manage() {
            true
        } else {
            self.message = AppError::Forbidden.user_message();
            false
        }
    }

    /// Open an empty "add user" form.
    pub fn add_new_user(&mut self) {
        if !self.require_admin() {
            return;
        }
        self.editing = Some(EditSurface {
            form: FormController::add_user(),
            target: None,
        });
    }

    /// Open the edit form for `record`.
    pub fn edit_user(&mut self, record: &UserRecord) {
        if !self.require_admin() {
            return;
        }
        self.editing = Some(EditSurface {
            form: FormController::edit_user(record),
            target: Some(record.clone()),
        });
    }

    /// Edit a field of the open form; every change re-validates.
    pub fn set_field(&mut self, field: DraftField, value: &str) -> DomainResult<()> {
        let surface = self
            .editing
            .as_mut()
            .ok_or_else(|| DomainError::invalid_state("no user form is open"))?;
        surface.form.set_field(field, value)?;
        self.message = surface.form.summary_message().to_string();
        Ok(())
    }

    pub fn is_save_disabled(&self) -> bool {
        self.editing
            .as_ref()
            .map_or(true, |s| s.form.is_submit_disabled())
    }

    /// Close the add/edit surface without saving.
    pub fn close_edit(&mut self) {
        if let Some(mut surface) = self.editing.take() {
            surface.form.cancel();
        }
    }

    /// Save the open form.
    ///
    /// Edits are applied to the local list only, since the API has no update
    /// endpoint. New users are registered through the API and appended.
    pub async fn save_user(&mut self, api: &dyn UserApi) -> SubmitOutcome<UserRecord> {
        let Some(surface) = self.editing.as_mut() else {
            return SubmitOutcome::Unavailable;
        };

        let draft = match surface.form.submit() {
            Submit::Ready(draft) => draft,
            Submit::Invalid => {
                self.message = surface.form.summary_message().to_string();
                return SubmitOutcome::Invalid(self.message.clone());
            }
            Submit::Unavailable => return SubmitOutcome::Unavailable,
        };

        if let Some(target) = surface.target.as_ref() {
            let updated = target.with_draft(&draft);
            if let Some(users) = self.users.as_mut() {
                for user in users.iter_mut().filter(|u| u.id == updated.id) {
                    *user = updated.clone();
                }
            }
            info!("Updated user {} locally", updated.id);
            surface.form.mark_saved();
            self.editing = None;
            return SubmitOutcome::Saved(updated);
        }

        match api.register(&draft).await {
            Ok(user) => {
                info!("Added user {}", user.email);
                self.users.get_or_insert_with(Vec::new).push(user.clone());
                surface.form.mark_saved();
                self.editing = None;
                SubmitOutcome::Saved(user)
            }
            Err(e) => {
                error!("Failed to register new user: {}", e);
                surface.form.mark_failed();
                self.message = e.user_message();
                SubmitOutcome::Failed(e)
            }
        }
    }

    // =========================================================================
    // Bulk delete
    // =========================================================================

    /// Press "Delete Selected": ask for confirmation, or complain about an
    /// empty selection.
    pub fn delete_selected(&mut self) {
        if !self.require_admin() {
            return;
        }
        if self.selected.is_empty() {
            self.message = MSG_SELECT_USERS.to_string();
        } else {
            self.show_delete_confirmation = true;
        }
    }

    /// Confirm the prompt: delete every selected user, one request at a time.
    ///
    /// A failed delete is logged and recorded but does not stop the loop.
    pub async fn confirm_delete(&mut self, api: &dyn UserApi) -> DeleteReport {
        let selected = std::mem::take(&mut self.selected);
        let mut report = DeleteReport::default();

        for email in &selected {
            match api.delete_user(&self.auth, email).await {
                Ok(()) => {
                    info!("User with ID: {} was deleted successfully", email);
                    report.deleted.push(email.clone());
                }
                Err(e) => {
                    error!("Failed to delete user with ID: {}: {}", email, e);
                    self.error = Some(format!("Failed to delete user with ID: {}", email));
                    report.failed.push(email.clone());
                }
            }
        }

        let removed = match self.removal_policy {
            RemovalPolicy::ConfirmedOnly => &report.deleted,
            RemovalPolicy::AllSelected => &selected,
        };
        if let Some(users) = self.users.as_mut() {
            users.retain(|u| !removed.contains(&u.email));
        }
        if !report.failed.is_empty() {
            warn!(
                "{} of {} deletions failed",
                report.failed.len(),
                selected.len()
            );
        }

        self.show_delete_confirmation = false;
        report
    }

    /// Dismiss the prompt and clear the selection.
    pub fn cancel_delete(&mut self) {
        self.show_delete_confirmation = false;
        self.selected.clear();
    }
}
