use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use okulno_api::query::SearchQuery;

#[derive(Parser)]
#[command(name = "okulno-cli")]
#[command(about = "Command-line client for the okulno record query API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    /// Search endpoint path on the server.
    #[arg(short, long, default_value = "/f3/api/okulno")]
    path: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show channel metadata
    Info,
    /// Search records; every filter is an optional substring
    Search(SearchArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// National identifier
    #[arg(long)]
    tc: Option<String>,
    /// Given name (case-insensitive)
    #[arg(long)]
    ad: Option<String>,
    /// Family name (case-insensitive)
    #[arg(long)]
    soyad: Option<String>,
    /// School number
    #[arg(long)]
    okulno: Option<String>,
    /// Status (case-insensitive)
    #[arg(long)]
    durum: Option<String>,
}

impl From<SearchArgs> for SearchQuery {
    fn from(args: SearchArgs) -> Self {
        SearchQuery {
            national_id: args.tc,
            given_name: args.ad,
            family_name: args.soyad,
            school_no: args.okulno,
            status: args.durum,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Info => client.get(format!("{}/", base)).send().await?,
        Commands::Search(args) => {
            let query = SearchQuery::from(args);
            client
                .get(format!("{}{}", base, cli.path))
                .query(&query)
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
