//! GitCommander binary entry point.
//!
//! Wires the interactive terminal onto the workflow crates: captures the
//! operator session, builds the GitHub client and the git adapter, then runs
//! the home-screen menu loop until the operator exits.

use clap::Parser;
use colored::Colorize;
use git_commander_core::{AccessToken, GitCommandLine, Session};
use github_client::{create_token_client, GitHubClient};
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod banner;
mod commands;
mod errors;
mod prompts;

use commands::clone_cmd::{self, DEFAULT_DESTINATION};
use commands::{delete_cmd, migrate_cmd};
use errors::Error;

const MENU: [&str; 4] = [
    "Clone All Repositories",
    "Delete All Repositories",
    "Migrate Repository",
    "Exit",
];

/// Interactive bulk management of the GitHub repositories of one account.
#[derive(Parser)]
#[command(name = "git-commander", version)]
struct Cli {}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty())
        .with(EnvFilter::from_env("GIT_COMMANDER_LOG"))
        .init();

    let Cli {} = Cli::parse();

    if let Err(e) = run().await {
        error!(error = %e, "GitCommander terminated with an error");
        eprintln!("{}", format!("Error: {e}").red());
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    banner::print_home_screen();

    let session = capture_session()?;
    info!(
        username = session.username(),
        token_length = session.token().len(),
        "session established"
    );

    let client = create_token_client(session.token().as_str())?;
    let host = GitHubClient::new(client);
    let vcs = GitCommandLine::new();

    loop {
        let choice = prompts::select("What would you like to do?", &MENU)?;

        let result = match choice {
            0 => clone_cmd::handle_clone_command(&host, &vcs, || {
                prompts::ask_text_with_default("Enter the destination folder", DEFAULT_DESTINATION)
            })
            .await
            .map(|_| ()),
            1 => delete_cmd::handle_delete_command(&host, &session, |message| {
                prompts::ask_confirm(message, false)
            })
            .await
            .map(|_| ()),
            2 => migrate_cmd::handle_migrate_command(&host, &vcs, prompts::ask_text)
                .await
                .map(|_| ()),
            _ => break,
        };

        // A failed operation returns the operator to the menu; only prompt
        // failures (closed terminal) end the process.
        if let Err(e) = result {
            if matches!(e, Error::Prompt(_)) {
                return Err(e);
            }
            error!(error = %e, "operation failed");
            eprintln!("{}", format!("Error: {e}").red());
        }

        if !prompts::ask_confirm("Would you like to go back to the home screen?", true)? {
            break;
        }
    }

    println!("{}", "Exiting GitCommander. Goodbye!".green());
    Ok(())
}

/// Prompts for the access token and username until both pass validation.
fn capture_session() -> Result<Session, Error> {
    loop {
        let token = prompts::ask_token("Enter your GitHub access token:")?;
        let username = prompts::ask_text("Enter your GitHub username:")?;

        match AccessToken::new(token).and_then(|token| Session::new(token, username)) {
            Ok(session) => return Ok(session),
            Err(e) => eprintln!("{}", format!("{e}. Please try again.").red()),
        }
    }
}
