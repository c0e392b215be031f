//! Register command - Self-registration.

use common::AppResult;

use super::{fill_fields, saved};
use crate::cli::args::RegisterArgs;
use crate::state::AppState;

/// Execute the register command
pub async fn execute(args: RegisterArgs, state: &AppState) -> AppResult<()> {
    let mut screen = state.registration_screen();
    fill_fields(&args.user, |field, value| screen.set_field(field, value))?;

    let user = saved(screen.register(state.api()).await)?;
    println!("{}", screen.message());
    tracing::info!("Created user {} with id {}", user.email, user.id);
    Ok(())
}
