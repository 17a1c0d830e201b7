//! Home screen banner and token instructions.

use colored::Colorize;

const BANNER: &str = r#"
  ____ _ _    ____                                          _
 / ___(_) |_ / ___|___  _ __ ___  _ __ ___   __ _ _ __   __| | ___ _ __
| |  _| | __| |   / _ \| '_ ` _ \| '_ ` _ \ / _` | '_ \ / _` |/ _ \ '__|
| |_| | | |_| |__| (_) | | | | | | | | | | | (_| | | | | (_| |  __/ |
 \____|_|\__|\____\___/|_| |_| |_|_| |_| |_|\__,_|_| |_|\__,_|\___|_|
"#;

/// Prints the home screen: banner, welcome line, and instructions for
/// generating a GitHub access token.
pub fn print_home_screen() {
    println!("{}", BANNER.green().bold());
    println!(
        "{}",
        " Welcome to GitCommander - GitHub Repository Management CLI \n".on_cyan()
    );
    println!(
        "{}",
        "This CLI application helps you manage GitHub repositories with ease.\n".bold()
    );
    println!(
        "{}",
        "Before you begin, generate a GitHub access token:".yellow()
    );
    println!("{}", "1. Log in to GitHub.".yellow());
    println!(
        "{}",
        "2. Go to \"Settings\" > \"Developer settings\" > \"Personal access tokens (classic)\"."
            .yellow()
    );
    println!(
        "{}",
        "3. Generate a new token with required permissions.".yellow()
    );
    println!(
        "{}",
        "4. Copy the token and paste it here when prompted.\n".yellow()
    );
}
