//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Args, Parser, Subcommand};

/// User administration console for the user-management API
#[derive(Parser, Debug)]
#[command(name = "user-admin")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the user-management API
    #[arg(long, global = true, env = "API_BASE_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and show where the session lands
    Login(CredentialArgs),

    /// Register a new account
    Register(RegisterArgs),

    /// Show the logged-in user's profile
    Profile(CredentialArgs),

    /// Administer users (ADMIN only)
    Users(UsersArgs),
}

/// Login credentials
#[derive(Args, Debug, Clone)]
pub struct CredentialArgs {
    /// Account email
    #[arg(short, long, env = "CONSOLE_EMAIL")]
    pub email: String,

    /// Account password
    #[arg(short, long, env = "CONSOLE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Fields of a new user
#[derive(Args, Debug, Clone)]
pub struct UserFields {
    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Email of the new account
    #[arg(long = "user-email")]
    pub user_email: String,

    /// Password of the new account
    #[arg(long = "user-password", default_value = "")]
    pub user_password: String,

    /// USER or ADMIN
    #[arg(long, default_value = "USER")]
    pub role: String,
}

/// Arguments for the register command
#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[command(flatten)]
    pub user: UserFields,
}

/// Arguments for the users command
#[derive(Args, Debug)]
pub struct UsersArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(subcommand)]
    pub action: UsersAction,
}

/// User administration actions
#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// List all users
    List,
    /// Add a user
    Add(UserFields),
    /// Delete users by email
    Delete {
        /// Emails of the users to delete
        #[arg(required = true)]
        emails: Vec<String>,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Remove every selected user from the listing, even failed ones
        #[arg(long)]
        hide_failed: bool,
    },
}
