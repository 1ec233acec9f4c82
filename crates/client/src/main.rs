//! userstore-client CLI entry point.

use clap::Parser;
use userstore_client::cli::{Cli, Commands, OutputFormat};
use userstore_client::client::UserstoreClient;
use userstore_client::output::{format_output, pretty};
use userstore_core::user::{CreateUserRequest, UpdateUserRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = UserstoreClient::new(&cli.base_url);

    match cli.command {
        Commands::Users(users_cmd) => {
            use userstore_client::cli::users::UsersAction;
            match users_cmd.action {
                UsersAction::List => {
                    let users = client.list_users().await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&users, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_users(&users)),
                    }
                }
                UsersAction::Create { name, email } => {
                    let response = client
                        .create_user(&CreateUserRequest::new(name, email))
                        .await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Created:\n{}", pretty::format_user(&response.user))
                        }
                    }
                }
                UsersAction::Get { uuid } => {
                    let user = client.get_user(uuid).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&user, cli.format)),
                        OutputFormat::Pretty => println!("{}", pretty::format_user(&user)),
                    }
                }
                UsersAction::Update { uuid, name, email } => {
                    let mut request = UpdateUserRequest::new();
                    request.name = name;
                    request.email = email;
                    let response = client.update_user(uuid, &request).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                        OutputFormat::Pretty => {
                            println!("Updated:\n{}", pretty::format_user(&response.user))
                        }
                    }
                }
                UsersAction::Delete { uuid } => {
                    let response = client.delete_user(uuid).await?;
                    match cli.format {
                        OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                        OutputFormat::Pretty => {
                            if !cli.quiet {
                                println!("Deleted user {}", uuid);
                            }
                        }
                    }
                }
            }
        }
        Commands::Health(health_cmd) => {
            use userstore_client::cli::health::HealthAction;
            match health_cmd.action {
                HealthAction::Livez => {
                    client.livez().await?;
                    if !cli.quiet {
                        println!("{} is live", client.base_url());
                    }
                }
            }
        }
    }

    Ok(())
}
