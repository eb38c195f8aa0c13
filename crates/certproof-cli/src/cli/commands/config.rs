//! `certproof config` - CLI configuration management.

use anyhow::Result;
use certproof::DEFAULT_DOH_ENDPOINT;
use colored::Colorize;
use std::process::ExitCode;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::{Config, ResolverKind, DEFAULT_SUBJECT, DEFAULT_TIMEOUT_SECS};

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<ExitCode> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx)?,
        ConfigCommands::Set { key, value } => set_config(&key, &value)?,
        ConfigCommands::Path => show_path()?,
        ConfigCommands::Reset => reset_config()?,
    }
    Ok(ExitCode::SUCCESS)
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    if ctx.output_format.print_structured(config)? {
        return Ok(());
    }

    let unset = || "(not set)".dimmed().to_string();

    println!("{}", "Current Configuration:".bold());
    println!();
    println!(
        "  {} {}",
        "resolver:".bold(),
        config.resolver.unwrap_or(ResolverKind::Doh)
    );
    println!(
        "  {} {}",
        "doh_endpoint:".bold(),
        config
            .doh_endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_DOH_ENDPOINT.dimmed().to_string())
    );
    println!(
        "  {} {}",
        "timeout_secs:".bold(),
        config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    );
    println!(
        "  {} {}",
        "max_retries:".bold(),
        config.max_retries.unwrap_or(0)
    );
    println!(
        "  {} {}",
        "record_log:".bold(),
        config
            .record_log
            .as_ref()
            .map_or_else(unset, |p| p.display().to_string())
    );
    println!(
        "  {} {}",
        "subject:".bold(),
        config.subject.as_deref().unwrap_or(DEFAULT_SUBJECT)
    );
    println!(
        "  {} {}",
        "output_format:".bold(),
        config.output_format.unwrap_or_default()
    );

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set(key, value)?;
    config.save()?;

    println!(
        "{} {} set to {}.",
        "Success:".green().bold(),
        key,
        value.cyan()
    );
    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}

fn reset_config() -> Result<()> {
    Config::default().save()?;
    println!("{} configuration reset.", "Success:".green().bold());
    Ok(())
}
