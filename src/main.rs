use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use newsdigest::cli::Cli;
use newsdigest::config::Config;
use newsdigest::domain::Digest;
use newsdigest::errors::DigestResult;
use newsdigest::services::scheduler::run_daily;
use newsdigest::services::{DailySchedule, NewsFetcher, NotificationService};
use newsdigest::sources::{FeedRetriever, RssAtomRetriever};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("newsdigest=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // --time and --timezone only matter on the scheduled path
    let schedule = if cli.run_once {
        None
    } else {
        Some(DailySchedule::parse(&cli.time, &cli.timezone).context("Invalid schedule")?)
    };

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    let notifier = if cli.dry_run {
        None
    } else {
        Some(NotificationService::new(&config)?)
    };

    let fetcher = NewsFetcher::new(RssAtomRetriever::new());

    let Some(schedule) = schedule else {
        run_job(&fetcher, notifier.as_ref(), &cli)?;
        return Ok(());
    };

    println!(
        "Scheduler started. Daily digest at {}. Press Ctrl+C to stop.",
        schedule
    );

    run_daily(schedule, || run_job(&fetcher, notifier.as_ref(), &cli))
}

fn run_job<R: FeedRetriever>(
    fetcher: &NewsFetcher<R>,
    notifier: Option<&NotificationService>,
    cli: &Cli,
) -> DigestResult<()> {
    tracing::info!(sources = fetcher.registry().source_count(), "Fetching news");

    let items = fetcher.fetch(cli.per_topic);
    let digest = Digest::now(&items);

    match notifier {
        None if cli.json => {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        None => {
            println!("[DRY RUN]\n{}", digest.format());
        }
        Some(notifier) => {
            notifier.send(&digest.format())?;
            println!(
                "Sent digest with {} stories via {}.",
                digest.item_count(),
                notifier.channels().join(" and ")
            );
        }
    }

    Ok(())
}
