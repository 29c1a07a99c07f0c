mod cli;
mod client;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod render;
mod types;

use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use cli::{
    Cli, ClientCommands, Commands, ContactCommands, ProjectCommands, SubscriberCommands,
};
use client::CmsClient;
use config::Config;
use error::Result;
use std::error::Error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    output::init(cli.output_format(), cli.quiet, cli.out.clone());

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "cms", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        // Commands that require config and client
        command => {
            let config = Config::load()?;
            let client = CmsClient::new(config.base_url()?);

            match command {
                Commands::Projects { action } => match action {
                    ProjectCommands::List => {
                        commands::projects::list(&client, &config).await?;
                    }
                    ProjectCommands::Add(args) => {
                        commands::projects::add(&client, &config, args).await?;
                    }
                },
                Commands::Clients { action } => match action {
                    ClientCommands::List => {
                        commands::clients::list(&client, &config).await?;
                    }
                    ClientCommands::Add(args) => {
                        commands::clients::add(&client, &config, args).await?;
                    }
                },
                Commands::Contacts { action } => match action {
                    ContactCommands::List => {
                        commands::contacts::list(&client).await?;
                    }
                    ContactCommands::Submit(args) => {
                        commands::contacts::submit(&client, args).await?;
                    }
                },
                Commands::Subscribers { action } => match action {
                    SubscriberCommands::List => {
                        commands::subscribers::list(&client).await?;
                    }
                    SubscriberCommands::Add { email } => {
                        commands::subscribers::subscribe(&client, &email).await?;
                    }
                },
                Commands::Subscribe { email } => {
                    commands::subscribers::subscribe(&client, &email).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
