//! Profile command - Show the logged-in user's details.

use common::{AppError, AppResult};

use super::authenticate;
use crate::cli::args::CredentialArgs;
use crate::screens::ProfileView;
use crate::state::AppState;

/// Execute the profile command
pub async fn execute(args: CredentialArgs, state: &AppState) -> AppResult<()> {
    let session = authenticate(state, &args).await?;
    let mut screen = state.profile_screen(session);
    screen.load(state.api()).await;

    match screen.view() {
        ProfileView::Loaded(user) => {
            println!("First name: {}", user.first_name);
            println!("Last name:  {}", user.last_name);
            println!("Email:      {}", user.email);
            println!("Role:       {}", user.role);
        }
        ProfileView::Empty => println!("{}", screen.empty_message()),
        ProfileView::Error(message) => return Err(AppError::network(message)),
        ProfileView::Loading => {}
    }
    Ok(())
}
