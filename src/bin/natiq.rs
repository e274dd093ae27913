use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use natiq_client::config::{load_config, ClientConfig};
use natiq_client::observability::init_logging;
use natiq_client::resources::auth::LoginRequest;
use natiq_client::resources::surahs::SurahListParams;
use natiq_client::resources::ListParams;
use natiq_client::{ApiClient, Selection};

#[derive(Parser)]
#[command(name = "natiq")]
#[command(about = "Command-line client for the Natiq API", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Candidate endpoint; repeat for several. Overrides the config file.
    #[arg(short, long = "endpoint")]
    endpoints: Vec<String>,

    /// Authentication token.
    #[arg(short, long, env = "NATIQ_TOKEN")]
    token: Option<String>,

    /// Skip the selection round before running the command.
    #[arg(long)]
    no_probe: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe every endpoint and report the selection
    Probe,
    /// GET an arbitrary API path and print the JSON
    Get { path: String },
    /// List mushafs
    Mushafs,
    /// List surahs of a mushaf
    Surahs {
        #[arg(short, long, default_value = "hafs")]
        mushaf: String,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Log in and print the issued token
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    if !cli.endpoints.is_empty() {
        config.endpoints = cli.endpoints.clone();
    }
    if cli.token.is_some() {
        config.auth.token = cli.token.clone();
    }

    init_logging(&config.observability)?;

    let client = ApiClient::new(&config)?;

    let probe = !cli.no_probe || matches!(cli.command, Commands::Probe);
    let selection = if probe {
        Some(client.refresh_endpoint().await)
    } else {
        None
    };

    match cli.command {
        Commands::Probe => print_endpoints(&client, selection.as_ref()),
        Commands::Get { path } => {
            let body: Value = client.get(&path).await?;
            print_json(&body)?;
        }
        Commands::Mushafs => {
            let mushafs = client.mushafs().list(&ListParams::default()).await?;
            for mushaf in mushafs {
                println!("{:<12} {}", mushaf.short_name, mushaf.name);
            }
        }
        Commands::Surahs { mushaf, limit } => {
            let mut params = SurahListParams::new(mushaf);
            params.page.limit = limit;
            let page = client.surahs().list(&params).await?;
            print_json(&serde_json::to_value(&page)?)?;
        }
        Commands::Login { username, password } => {
            let session = client
                .auth()
                .login(&LoginRequest { username, password })
                .await?;
            println!("{}", session.token);
            eprintln!("expires {}", session.expiry);
        }
    }

    Ok(())
}

fn print_endpoints(client: &ApiClient, selection: Option<&Selection>) {
    let active = client.selector().active_endpoint();
    println!(
        "{:<2} {:<40} {:<8} {:>10}  {}",
        "", "ENDPOINT", "HEALTH", "LATENCY", "LAST FAILURE"
    );
    for endpoint in client.selector().endpoints() {
        let marker = if *endpoint.address() == active { "*" } else { "" };
        let latency = endpoint
            .latency_ms()
            .map(|ms| format!("{ms} ms"))
            .unwrap_or_else(|| "-".to_string());
        let failure = endpoint
            .last_failure()
            .map(ToString::to_string)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<2} {:<40} {:<8} {:>10}  {}",
            marker,
            endpoint.address().as_str(),
            endpoint.health().to_string(),
            latency,
            failure
        );
    }

    match selection {
        Some(Selection::Switched { from, to }) => println!("\nswitched {from} -> {to}"),
        Some(Selection::Unchanged(url)) => println!("\nkeeping {url}"),
        Some(Selection::NoEligible) => eprintln!("\nno endpoint is reachable; keeping {active}"),
        None => {}
    }
}

fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
