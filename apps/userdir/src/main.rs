use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use listing_core::SortDir;
use mimalloc::MiMalloc;
use runtime::{AppConfig, CliArgs};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use user_directory::domain::route::parse_page;
use user_directory::{
    DirectoryService, HttpUserSource, RouteQuery, UserDirectoryConfig, UserDirectoryError,
};

mod render;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const MODULE_NAME: &str = "user_directory";

/// userdir - search, sort and page through a user directory
#[derive(Parser)]
#[command(name = "userdir")]
#[command(about = "userdir - search, sort and page through a user directory")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// URL of the users document (overrides config)
    #[arg(long)]
    url: Option<String>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch users and print one page (default)
    List(ListArgs),
    /// Print the table columns and which ones are sortable
    Columns,
    /// Check configuration
    Check,
}

#[derive(Args, Default)]
struct ListArgs {
    /// Route query string, e.g. "search=smith&page=2&sortKey=dob.age&sortOrder=desc"
    #[arg(short, long)]
    query: Option<String>,

    /// Case-insensitive search over first name, last name and email
    #[arg(short, long)]
    search: Option<String>,

    /// 1-based page number; malformed values fall back to 1
    #[arg(short, long, allow_hyphen_values = true)]
    page: Option<String>,

    /// Dotted field path to sort by, e.g. name.last or dob.age
    #[arg(long)]
    sort_key: Option<String>,

    /// asc or desc; anything else means asc
    #[arg(long)]
    sort_order: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl ListArgs {
    /// Explicit flags win over values carried in `--query`.
    fn route(&self) -> RouteQuery {
        let mut route = self
            .query
            .as_deref()
            .map(RouteQuery::parse)
            .unwrap_or_default();

        if let Some(search) = &self.search {
            route.search = search.clone();
        }
        if let Some(page) = &self.page {
            route.page = parse_page(page);
        }
        if let Some(key) = &self.sort_key {
            route.sort_key = key.clone();
        }
        if let Some(order) = &self.sort_order {
            route.sort_order = SortDir::parse_lossy(order);
        }
        route
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        verbose: cli.verbose,
        url: cli.url.clone(),
    };

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config.logging.clone().unwrap_or_default();
    runtime::logging::init_logging_from_config(&logging_config, config.home_dir());
    tracing::debug!("userdir starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or_else(|| Commands::List(ListArgs::default())) {
        Commands::List(list) => run_list(&config, &list).await,
        Commands::Columns => {
            print!("{}", render::columns_table());
            Ok(())
        }
        Commands::Check => check_config(&config),
    }
}

async fn run_list(config: &AppConfig, list: &ListArgs) -> Result<()> {
    let module_cfg: UserDirectoryConfig = config.module_config(MODULE_NAME)?;
    let source_cfg = config.source.clone().unwrap_or_default();

    let source = HttpUserSource::from_url(
        &source_cfg.url,
        source_cfg.timeout_sec.map(Duration::from_secs),
    )
    .map_err(UserDirectoryError::from)?;

    let mut service = DirectoryService::new(Arc::new(source), &module_cfg);

    // Route filters land before the fetch fills users.
    let route = list.route();
    route.apply_to(service.state_mut());

    service
        .refresh()
        .await
        .map_err(UserDirectoryError::from)
        .with_context(|| format!("Failed to load users from {}", source_cfg.url))?;

    match list.format {
        OutputFormat::Table => print!("{}", render::users_table(service.state())),
        OutputFormat::Json => println!("{}", render::users_json(service.state())?),
    }
    Ok(())
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    let module_cfg: UserDirectoryConfig = config.module_config(MODULE_NAME)?;
    if let Some(source) = &config.source {
        HttpUserSource::from_url(&source.url, None).map_err(UserDirectoryError::from)?;
    }

    println!("Configuration check passed");
    println!("Items per page: {}", module_cfg.items_per_page);
    println!("{}", config.to_yaml()?);
    Ok(())
}
