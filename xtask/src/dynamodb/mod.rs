//! DynamoDB table provisioning commands.

mod client;
mod config;
mod error;
mod provision;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;
use userstore_core::config::{create_dynamodb_client, StoreArgs};

/// DynamoDB table provisioning commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Create the users table.
    CreateTable(CreateTableCommand),

    /// Delete the users table.
    DeleteTable(DeleteTableCommand),
}

/// Create the users table.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Create the users table.

Issues a single CreateTable call with one string hash key (uuid) and
10 read / 10 write provisioned capacity units. Running it against an
existing table fails with the service's error; nothing is retried.")]
pub struct CreateTableCommand {
    /// Wait until the table is ACTIVE before returning.
    #[arg(long)]
    pub wait: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Delete the users table.
#[derive(Debug, clap::Parser)]
pub struct DeleteTableCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::CreateTable(cmd) => run_create_table(cmd, &global).await,
        DynamodbAction::DeleteTable(cmd) => run_delete_table(cmd, &global).await,
    }
}

async fn run_create_table(cmd: CreateTableCommand, global: &crate::Global) -> Result<()> {
    let store_config = cmd.store.into_config()?;
    let table_config = config::users_table_config().with_table_name(&store_config.table_name);

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), store_config.target_display());
        aprintln!();
        aprintln!("{}", p_c("Create Plan:"));
        for line in config::format_table_config(&table_config) {
            if line.starts_with('+') {
                aprintln!("  {}", p_g(&line));
            } else {
                aprintln!("  {}", line);
            }
        }
        aprintln!();
    }

    let dynamo_client = create_dynamodb_client(&store_config).await;

    if global.is_verbose() {
        aprintln!("{}", p_b("Creating table..."));
    }

    provision::create_table(&dynamo_client, &table_config).await?;

    if cmd.wait {
        if !global.is_silent() {
            aprintln!("{}", p_b("Waiting for table to become active..."));
        }
        provision::wait_for_table_active(&dynamo_client, &table_config.table_name).await?;
    }

    if !global.is_silent() {
        aprintln!(
            "{} {}",
            p_g("Table created:"),
            table_config.table_name
        );
    }

    Ok(())
}

async fn run_delete_table(cmd: DeleteTableCommand, global: &crate::Global) -> Result<()> {
    let store_config = cmd.store.into_config()?;

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), store_config.target_display());
        aprintln!();
        aprintln!("{}", p_y("Destroy Plan:"));
        aprintln!("  {}", p_r(&format!("- Table: {}", store_config.table_name)));
        aprintln!();
    }

    if !cmd.force {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to delete this table? ALL DATA WILL BE LOST")
            .default(false)
            .interact()
            .map_err(|e| DynamodbError::Prompt(e.to_string()))?;

        if !confirmed {
            return Err(DynamodbError::UserCancelled);
        }
    }

    let dynamo_client = create_dynamodb_client(&store_config).await;

    if global.is_verbose() {
        aprintln!("{}", p_b("Deleting table..."));
    }

    provision::delete_table(&dynamo_client, &store_config.table_name).await?;

    if !global.is_silent() {
        aprintln!("{}", p_g("Table deleted successfully."));
    }

    Ok(())
}
