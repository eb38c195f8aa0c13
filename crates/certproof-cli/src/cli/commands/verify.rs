//! `certproof verify` - run the full verification.

use anyhow::Result;
use certproof::{
    CertProofError, ErrorResponse, VerificationOutcome, VerificationService, VerificationVerdict,
    VerifyResponse,
};
use colored::Colorize;
use std::process::ExitCode;

use super::{read_input, Context};
use crate::cli::args::VerifyArgs;
use crate::{EXIT_ERROR, EXIT_OK, EXIT_REJECTED};

pub async fn execute(ctx: Context, args: VerifyArgs) -> Result<ExitCode> {
    let bytes = read_input(&args.file).await?;

    let resolver = ctx.resolver(&args.resolver)?;
    let records = ctx.record_sink(args.record_log.as_deref(), args.no_record);
    let subject = ctx.subject(args.subject);
    let service = VerificationService::new(resolver, records);

    match service.verify_upload(&subject, &bytes).await {
        Ok(verdict) => {
            print_verdict(&ctx, &verdict, &subject)?;
            Ok(ExitCode::from(if verdict.is_verified() {
                EXIT_OK
            } else {
                EXIT_REJECTED
            }))
        }
        Err(err) => {
            print_error(&ctx, &err)?;
            Ok(ExitCode::from(EXIT_ERROR))
        }
    }
}

fn print_verdict(ctx: &Context, verdict: &VerificationVerdict, subject: &str) -> Result<()> {
    if ctx.output_format.print_structured(&VerifyResponse::from(verdict))? {
        return Ok(());
    }

    let outcome = verdict.outcome();
    if outcome.is_verified() {
        println!(
            "{} {} issued by {}",
            "✔".green().bold(),
            outcome.as_str().to_uppercase().green().bold(),
            verdict.issuer().cyan()
        );
    } else {
        println!(
            "{} {}",
            "✘".red().bold(),
            outcome.as_str().to_uppercase().red().bold()
        );
        println!("  {}", explain(outcome).dimmed());
    }

    if ctx.verbose {
        println!("  {} {}", "subject:".bold(), subject);
    }
    Ok(())
}

fn print_error(ctx: &Context, err: &CertProofError) -> Result<()> {
    let body = ErrorResponse::from(err);
    if ctx.output_format.print_structured(&body)? {
        return Ok(());
    }

    eprintln!("{} {}", "Error:".red().bold(), body.error);
    if let CertProofError::MissingField { path } = err {
        eprintln!(
            "  {}",
            format!("`{path}` must be present for the document to be checked").dimmed()
        );
    }
    Ok(())
}

const fn explain(outcome: VerificationOutcome) -> &'static str {
    match outcome {
        VerificationOutcome::Verified => "all checks passed",
        VerificationOutcome::InvalidRecipient => "recipient name or email is missing",
        VerificationOutcome::InvalidIssuer => {
            "issuer identity proof is incomplete or its key is not published in DNS"
        }
        VerificationOutcome::InvalidSignature => {
            "document contents do not match signature.targetHash"
        }
    }
}
