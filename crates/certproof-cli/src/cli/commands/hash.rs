//! `certproof hash` - recompute the target hash of a document.

use anyhow::Result;
use certproof::{compute_target_hash, decode_document, leaf_digests};
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use super::{read_input, Context};
use crate::cli::args::HashArgs;
use crate::{EXIT_OK, EXIT_REJECTED};

#[derive(Debug, Serialize)]
struct HashReport {
    computed: String,
    claimed: Option<String>,
    matches: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    leaves: Option<Vec<LeafReport>>,
}

#[derive(Debug, Serialize)]
struct LeafReport {
    path: &'static str,
    digest: String,
}

pub async fn execute(ctx: Context, args: HashArgs) -> Result<ExitCode> {
    let bytes = read_input(&args.file).await?;
    let doc = decode_document(&bytes)?;

    let computed = compute_target_hash(&doc)?;
    let claimed = doc.target_hash().map(ToString::to_string);
    let matches = claimed.as_deref() == Some(computed.as_str());

    let leaves = if args.leaves {
        Some(
            leaf_digests(&doc)?
                .into_iter()
                .map(|(path, digest)| LeafReport { path, digest })
                .collect(),
        )
    } else {
        None
    };

    let report = HashReport {
        computed,
        claimed,
        matches,
        leaves,
    };

    if !ctx.output_format.print_structured(&report)? {
        print_pretty(&report);
    }

    Ok(ExitCode::from(if report.matches {
        EXIT_OK
    } else {
        EXIT_REJECTED
    }))
}

fn print_pretty(report: &HashReport) {
    println!("  {} {}", "computed:".bold(), report.computed);
    println!(
        "  {}  {}",
        "claimed:".bold(),
        report
            .claimed
            .as_deref()
            .map_or_else(|| "(not set)".dimmed().to_string(), ToString::to_string)
    );
    println!();
    if report.matches {
        println!("{} target hash matches", "✔".green().bold());
    } else {
        println!("{} target hash does not match", "✘".red().bold());
    }

    if let Some(leaves) = &report.leaves {
        println!();
        println!("{}", "Leaves:".bold());
        let width = leaves.iter().map(|l| l.path.len()).max().unwrap_or(0);
        for leaf in leaves {
            println!("  {:width$}  {}", leaf.path, leaf.digest.dimmed());
        }
    }
}
