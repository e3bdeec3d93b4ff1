use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};
use clap::Parser;
use notion_pusher_client::{NotionClient, PageId, PageSink, push_blocks};
use notion_pusher_config::{Config, Credentials, Overrides};
use notion_pusher_engine::{parse_file, wire};
use std::fmt::Display;
use std::path::{Path, PathBuf};

const TITLE_FORMAT: &str = "%Y-%m-%d %H:%M Report";

#[derive(Parser, Debug)]
#[command(name = "np", version)]
#[command(about = "Publish a markdown file as a new Notion page")]
struct Cli {
    /// Markdown file to publish
    #[arg(required_unless_present = "init_config")]
    file: Option<PathBuf>,

    /// Title of the new page (defaults to the current date and time)
    #[arg(short, long)]
    title: Option<String>,

    /// Parent page id or URL, overriding NOTION_PAGE_ID and the config file
    #[arg(short, long)]
    page: Option<String>,

    /// Integration token, overriding NOTION_TOKEN and the config file
    #[arg(long)]
    token: Option<String>,

    /// Config file to use instead of ~/.config/notion-pusher/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the converted blocks as JSON instead of pushing them
    #[arg(long)]
    dry_run: bool,

    /// Write a config template and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref());

    if cli.init_config {
        if Config::write_template(&config_path)? {
            log::info!("Created config template at {}", config_path.display());
        } else {
            log::warn!("Config file already exists at {}", config_path.display());
        }
        return Ok(());
    }

    let file = cli.file.as_deref().context("No input file given")?;
    let doc = parse_file(file)?;
    for diagnostic in &doc.diagnostics {
        log::warn!("{}: {diagnostic}", file.display());
    }
    if doc.is_empty() {
        log::warn!("No blocks generated from {}; nothing to push", file.display());
        return Ok(());
    }

    let blocks = wire::to_values(&doc.blocks)?;
    log::info!("Parsed {} blocks from {}", blocks.len(), file.display());

    if cli.dry_run {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
        return Ok(());
    }

    let config = Config::load_from_path(&config_path)?;
    if config.is_none() {
        log::info!("No config file at {}", config_path.display());
    }
    let overrides = Overrides {
        token: cli.token.clone(),
        page_id: cli.page.clone(),
    };
    let credentials = Credentials::resolve_from_env(&overrides, config.as_ref())?;
    let push = config.map(|c| c.push).unwrap_or_default();

    let parent = PageId::parse(&credentials.root_page_id)?;
    let client = NotionClient::new(credentials.token, push.notion_version.as_str());
    let title = cli
        .title
        .clone()
        .unwrap_or_else(|| default_title(&Local::now()));

    let page = client
        .create_child_page(&parent, &title)
        .with_context(|| format!("Failed to create page '{title}'"))?;
    let report = push_blocks(&client, &page.id, &blocks, push.effective_batch_size())?;
    log::info!(
        "Published {} blocks in {} batches",
        report.blocks,
        report.batches
    );

    println!("{}", page.url);
    Ok(())
}

fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => Config::expand_path(path).unwrap_or_else(|| path.to_path_buf()),
        None => Config::config_path(),
    }
}

fn default_title<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    now.format(TITLE_FORMAT).to_string()
}
