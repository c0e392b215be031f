//! Login command - Check credentials and show the landing route.

use common::AppResult;

use super::authenticate;
use crate::cli::args::CredentialArgs;
use crate::routes::{resolve, Route};
use crate::state::AppState;

/// Execute the login command
pub async fn execute(args: CredentialArgs, state: &AppState) -> AppResult<()> {
    let session = authenticate(state, &args).await?;
    let landing = resolve(Route::Login, Some(&session));

    println!("Welcome, {} ({})", session.name, session.role);
    println!("Landing on {}", landing);
    Ok(())
}
