use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "newsdigest")]
#[command(about = "Daily news digest for tech, AI, jobs and new software, sent by Telegram and/or email")]
#[command(version)]
pub struct Cli {
    /// Fetch and send now, then exit
    #[arg(long)]
    pub run_once: bool,

    /// Daily time in 24h format, e.g., 09:30
    #[arg(long, env = "DIGEST_TIME", default_value = "09:00")]
    pub time: String,

    /// Timezone name, e.g., Asia/Kolkata
    #[arg(long, env = "DIGEST_TIMEZONE", default_value = "UTC")]
    pub timezone: String,

    /// Top stories per topic
    #[arg(long = "per-topic", env = "DIGEST_PER_TOPIC", default_value_t = 5)]
    pub per_topic: usize,

    /// Dry run - print the digest instead of sending it
    #[arg(long)]
    pub dry_run: bool,

    /// With --dry-run, print the fetched stories as JSON instead of the digest text
    #[arg(long, requires = "dry_run")]
    pub json: bool,
}
