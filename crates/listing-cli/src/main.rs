//! `listing-sheet` command line driver
//!
//! Replays recorded sheet sessions and checks saved listings for
//! completeness without a host UI.

mod script;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use listing_draft::{OrderBump, ProductDraft};
use listing_sheet::SheetConfig;
use listing_validation::{join_labels, missing_main_fields, BumpPolicy, CompletenessEvaluator};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// A saved listing as read by `check`
#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(default = "ProductDraft::empty")]
    draft: ProductDraft,
    #[serde(default)]
    order_bumps: Vec<OrderBump>,
}

fn cli() -> Command {
    Command::new("listing-sheet")
        .version(listing_sheet::VERSION)
        .about("Product sheet session tools")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging (overridden by RUST_LOG)"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("replay")
                .about("Replay a scripted session against a fresh sheet")
                .arg(
                    Arg::new("script")
                        .long("script")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON script with an optional starting draft and steps"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML sheet configuration"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report missing fields of a saved listing")
                .arg(
                    Arg::new("draft")
                        .long("draft")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("JSON listing with `draft` and `order_bumps`"),
                )
                .arg(
                    Arg::new("loose")
                        .long("loose")
                        .action(ArgAction::SetTrue)
                        .help("Do not require prices on order bumps"),
                ),
        )
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

async fn run_replay(args: &ArgMatches) -> Result<bool> {
    let config = match args.get_one::<PathBuf>("config") {
        Some(path) => SheetConfig::load(path)
            .with_context(|| format!("cannot load config {}", path.display()))?,
        None => SheetConfig::default(),
    };
    let script_path = args
        .get_one::<PathBuf>("script")
        .context("missing --script")?;
    let script: script::Script = read_json(script_path)?;

    tracing::info!(
        "Replaying {} steps from {}",
        script.steps.len(),
        script_path.display()
    );
    let report = script::replay(script, config).await;

    if args.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Replay Report:");
        print!("{}", report.generate_text());
    }
    Ok(report.passed())
}

fn run_check(args: &ArgMatches) -> Result<bool> {
    let path = args.get_one::<PathBuf>("draft").context("missing --draft")?;
    let listing: Listing = read_json(path)?;
    let evaluator = CompletenessEvaluator::new(BumpPolicy::from_strict(!args.get_flag("loose")));

    let mut complete = true;
    let missing = missing_main_fields(&listing.draft);
    if missing.is_empty() {
        println!("Main product: complete");
    } else {
        complete = false;
        println!("Main product: missing {}", join_labels(&missing));
    }

    for (i, bump) in listing.order_bumps.iter().enumerate() {
        let missing = evaluator.missing_bump_fields(bump);
        if missing.is_empty() {
            println!("Order Bump #{}: complete", i + 1);
        } else {
            complete = false;
            println!("Order Bump #{}: missing {}", i + 1, join_labels(&missing));
        }
    }
    Ok(complete)
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let passed = match matches.subcommand() {
        Some(("replay", args)) => run_replay(args).await?,
        Some(("check", args)) => run_check(args)?,
        _ => unreachable!("subcommand is required"),
    };

    std::process::exit(if passed { 0 } else { 1 });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn parses_replay_args() {
        let matches = cli()
            .try_get_matches_from(["listing-sheet", "-v", "replay", "--script", "s.json", "--json"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "replay");
        assert!(args.get_flag("json"));
        assert!(args.get_one::<PathBuf>("config").is_none());
    }

    #[test]
    fn check_requires_draft() {
        assert!(cli().try_get_matches_from(["listing-sheet", "check"]).is_err());
    }

    #[test]
    fn listing_defaults_missing_sections() {
        let listing: Listing = serde_json::from_str(r#"{"order_bumps": [{"product_name": "x"}]}"#).unwrap();
        assert_eq!(listing.draft, ProductDraft::empty());
        assert_eq!(listing.order_bumps[0].product_name, "x");
        assert!(listing.order_bumps[0].enabled);
    }
}
