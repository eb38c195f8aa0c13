//! certproof - verify DNS-attested credential documents from the command line.

use colored::Colorize;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match certproof_cli::run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "Error:".red().bold());
            ExitCode::from(certproof_cli::EXIT_ERROR)
        }
    }
}
