//! User CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// User management commands.
#[derive(Debug, Parser)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// Available user actions.
#[derive(Debug, Subcommand)]
pub enum UsersAction {
    /// List all users.
    List,
    /// Create a new user.
    Create {
        /// User name.
        #[arg(long)]
        name: String,
        /// User email.
        #[arg(long)]
        email: String,
    },
    /// Get user by UUID.
    Get {
        /// User UUID.
        uuid: Uuid,
    },
    /// Update a user's name and/or email.
    Update {
        /// User UUID.
        uuid: Uuid,
        /// New name.
        #[arg(long)]
        name: Option<String>,
        /// New email.
        #[arg(long)]
        email: Option<String>,
    },
    /// Delete user by UUID.
    Delete {
        /// User UUID.
        uuid: Uuid,
    },
}
