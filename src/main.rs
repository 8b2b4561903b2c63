//! civicvoice CLI - look up your federal representatives by ZIP code
//! and draft a contact-form message from selected civic issues.
//!
//! The generated message is printed in clipboard form; paste it into
//! each representative's web contact form.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use civicvoice::api::CivicApiClient;
use civicvoice::cache::{CacheStore, FileCacheStore, MemoryCacheStore};
use civicvoice::config::Config;
use civicvoice::issues::{find_issue, issue_catalog};
use civicvoice::legislators::LegislatorDirectory;
use civicvoice::message::{format_message_for_clipboard, generate_message};
use civicvoice::models::Issue;
use civicvoice::resolver::RepresentativeResolver;
use civicvoice::utils::format_phone;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_usage() {
    eprintln!("Usage: civicvoice <ZIP> [issue-id ...]");
    eprintln!("       civicvoice --issues        list the issue catalog");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.is_empty() {
        print_usage();
        return Ok(());
    }

    if args[0] == "--issues" {
        list_issues();
        return Ok(());
    }

    let zip = &args[0];
    let selected = collect_issues(&args[1..]);

    let config = Config::load()?;

    let store: Arc<dyn CacheStore> = match config.cache_dir() {
        Ok(dir) => Arc::new(FileCacheStore::new(dir)),
        Err(e) => {
            warn!(error = %e, "No cache directory available, caching in memory only");
            Arc::new(MemoryCacheStore::new())
        }
    };

    let client = CivicApiClient::new()?.with_token(config.api_token());
    let directory = LegislatorDirectory::new(store);
    let resolver = RepresentativeResolver::new(client, directory, config.provider);

    info!(zip = %zip, "Looking up representatives");
    let result = resolver.get_representatives_by_zip(zip).await;

    if let Some(error) = &result.error {
        eprintln!("{}", error);
        return Ok(());
    }

    match &result.location {
        Some(location) => println!("Representatives for {}:", location),
        None => println!("Representatives:"),
    }
    println!();

    for rep in &result.representatives {
        match &rep.party {
            Some(party) => println!("  {} ({})", rep.name, party),
            None => println!("  {}", rep.name),
        }
        println!("    {}", rep.office_label());
        if let Some(phone) = &rep.phone {
            println!("    {}", format_phone(phone));
        }
        // Contact form preferred; the member's website otherwise.
        match rep.contact_url() {
            Some(url) => println!("    {}", url),
            None => println!("    (no contact link listed - search the member's website)"),
        }
        for office in &rep.field_offices {
            println!("    {} office: {}", office.city, format_phone(&office.phone));
        }
        println!();
    }

    let message = generate_message(&selected, &result.representatives);
    println!("--- Message (paste into each contact form) ---");
    println!();
    println!("{}", format_message_for_clipboard(&message));

    Ok(())
}

fn list_issues() {
    for issue in issue_catalog() {
        println!("{}", issue.id);
        println!("    {}", issue.title);
        println!("    {}", issue.description);
        println!();
    }
}

/// Resolves issue ids from the command line against the catalog,
/// preserving the order they were given in.
fn collect_issues(ids: &[String]) -> Vec<Issue> {
    let mut selected = Vec::new();
    for id in ids {
        match find_issue(id) {
            Some(issue) => selected.push(issue.clone()),
            None => eprintln!("Unknown issue id: {} (see --issues)", id),
        }
    }
    selected
}
