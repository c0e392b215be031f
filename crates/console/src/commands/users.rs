//! Users command - User administration.
//!
//! ## Usage
//!
//! ```bash
//! # List users
//! user-admin users -e admin@admin.com -p admin list
//!
//! # Delete two users without prompting
//! user-admin users -e admin@admin.com -p admin delete a@x.com b@x.com --yes
//! ```

use tokio::io::{AsyncBufReadExt, BufReader};

use common::{AppError, AppResult};
use domain::UserRecord;

use super::{authenticate, fill_fields, saved};
use crate::cli::args::{UserFields, UsersAction, UsersArgs};
use crate::routes::{resolve, Route};
use crate::screens::{RemovalPolicy, TableView, UserTableScreen};
use crate::session::Session;
use crate::state::AppState;

/// Execute the users command
pub async fn execute(args: UsersArgs, state: &AppState) -> AppResult<()> {
    let session = authenticate(state, &args.credentials).await?;
    if resolve(Route::Users, Some(&session)) != Route::Users {
        return Err(AppError::Forbidden);
    }

    match args.action {
        UsersAction::List => list_users(state, session).await,
        UsersAction::Add(fields) => add_user(state, session, fields).await,
        UsersAction::Delete {
            emails,
            yes,
            hide_failed,
        } => {
            let policy = if hide_failed {
                RemovalPolicy::AllSelected
            } else {
                state.removal_policy
            };
            delete_users(state, session, emails, yes, policy).await
        }
    }
}

async fn load_table(state: &AppState, mut screen: UserTableScreen) -> AppResult<UserTableScreen> {
    screen.load(state.api()).await;
    match screen.take_load_failure() {
        Some(e) => Err(e),
        None => Ok(screen),
    }
}

fn print_users(screen: &UserTableScreen) {
    match screen.view() {
        TableView::Loaded(users) => {
            for user in users {
                println!("{}", format_row(user));
            }
        }
        TableView::Empty | TableView::Loading => println!("{}", screen.empty_message()),
    }
}

fn format_row(user: &UserRecord) -> String {
    format!(
        "{:>5}  {:<20} {:<20} {:<32} {}",
        user.id,
        user.first_name,
        user.last_name,
        user.email,
        user.primary_role()
    )
}

async fn list_users(state: &AppState, session: Session) -> AppResult<()> {
    let screen = load_table(state, state.user_table_screen(session)).await?;
    print_users(&screen);
    Ok(())
}

async fn add_user(state: &AppState, session: Session, fields: UserFields) -> AppResult<()> {
    let mut screen = load_table(state, state.user_table_screen(session)).await?;
    screen.add_new_user();
    fill_fields(&fields, |field, value| screen.set_field(field, value))?;

    let user = saved(screen.save_user(state.api()).await)?;
    println!("Added {}", format_row(&user));
    Ok(())
}

async fn delete_users(
    state: &AppState,
    session: Session,
    emails: Vec<String>,
    yes: bool,
    policy: RemovalPolicy,
) -> AppResult<()> {
    let auth = state.credential_policy.credentials_for(&session);
    let mut screen = load_table(state, UserTableScreen::new(session, auth, policy)).await?;

    for email in &emails {
        screen.select(email);
    }
    screen.delete_selected();
    if !screen.is_confirming_delete() {
        return Err(AppError::validation(screen.message()));
    }

    if !yes && !confirm(&emails).await? {
        screen.cancel_delete();
        println!("Cancelled");
        return Ok(());
    }

    let report = screen.confirm_delete(state.api()).await;
    for email in &report.deleted {
        println!("Deleted {}", email);
    }
    for email in &report.failed {
        eprintln!("Failed to delete user with ID: {}", email);
    }
    print_users(&screen);

    if report.is_complete() {
        Ok(())
    } else {
        Err(AppError::internal(format!(
            "{} of {} deletions failed",
            report.failed.len(),
            emails.len()
        )))
    }
}

/// Ask on stdin before deleting.
async fn confirm(emails: &[String]) -> AppResult<bool> {
    println!("Delete {}? [y/N]", emails.join(", "));

    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .map_err(|e| AppError::internal(format!("Failed to read confirmation: {}", e)))?;

    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::cli::args::CredentialArgs;
    use crate::clients::MockUserApi;
    use crate::config::ConsoleConfig;
    use domain::{LoginResponse, RoleRef};

    fn args(action: UsersAction) -> UsersArgs {
        UsersArgs {
            credentials: CredentialArgs {
                email: "admin@admin.com".to_string(),
                password: "admin".to_string(),
            },
            action,
        }
    }

    fn logged_in_as(role: &'static str) -> MockUserApi {
        let mut api = MockUserApi::new();
        api.expect_login().returning(move |_, _| {
            Ok(LoginResponse {
                name: "Admin".to_string(),
                role: role.to_string(),
            })
        });
        api
    }

    fn state(api: MockUserApi) -> AppState {
        AppState::new(Arc::new(api), &ConsoleConfig::default())
    }

    fn user(id: i64, email: &str) -> UserRecord {
        UserRecord {
            id,
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
            email: email.to_string(),
            roles: vec![RoleRef {
                role_name: "USER".to_string(),
            }],
        }
    }

    #[tokio::test]
    async fn test_list_fails_when_server_rejects() {
        let mut api = logged_in_as("ADMIN");
        api.expect_list_users()
            .returning(|_| Err(AppError::Unauthorized));

        let result = execute(args(UsersAction::List), &state(api)).await;
        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_list_fails_on_server_error() {
        let mut api = logged_in_as("ADMIN");
        api.expect_list_users()
            .returning(|_| Err(AppError::from_status(503, "down")));

        let result = execute(args(UsersAction::List), &state(api)).await;
        assert!(matches!(result, Err(AppError::Http { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_delete_with_repeated_email_deletes_once() {
        let mut api = logged_in_as("ADMIN");
        api.expect_list_users()
            .returning(|_| Ok(vec![user(1, "a@x.com"), user(2, "b@x.com")]));
        api.expect_delete_user()
            .withf(|_, email| email == "a@x.com")
            .times(1)
            .returning(|_, _| Ok(()));

        let action = UsersAction::Delete {
            emails: vec!["a@x.com".to_string(), "a@x.com".to_string()],
            yes: true,
            hide_failed: false,
        };
        let result = execute(args(action), &state(api)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_does_not_run_after_failed_load() {
        let mut api = logged_in_as("ADMIN");
        api.expect_list_users()
            .returning(|_| Err(AppError::Forbidden));
        api.expect_delete_user().never();

        let action = UsersAction::Delete {
            emails: vec!["a@x.com".to_string()],
            yes: true,
            hide_failed: false,
        };
        let result = execute(args(action), &state(api)).await;
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_non_admin_is_refused() {
        let mut api = logged_in_as("USER");
        api.expect_list_users().never();

        let result = execute(args(UsersAction::List), &state(api)).await;
        assert!(matches!(result, Err(AppError::Forbidden)));
    }
}
