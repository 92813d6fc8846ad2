use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "beers-cli")]
#[command(about = "Query a running beer proxy", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080", env = "BEER_PROXY_URL")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show service version
    Status,
    /// List beers of a category
    List {
        /// Category: ale, stouts or red-ale
        #[arg(value_name = "TYPE")]
        category: String,
        /// Case-insensitive name filter
        #[arg(short, long)]
        name: Option<String>,
        /// Sort key: id, name, price, average or reviews
        #[arg(long)]
        order_by: Option<String>,
        /// Sort direction: asc or desc
        #[arg(long)]
        order: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Status => client.get(format!("{base}/")).send().await?,
        Commands::List {
            category,
            name,
            order_by,
            order,
        } => {
            let mut params = vec![("type", category)];
            params.extend(name.map(|v| ("name", v)));
            params.extend(order_by.map(|v| ("order_by", v)));
            params.extend(order.map(|v| ("order", v)));
            client
                .get(format!("{base}/beers"))
                .query(&params)
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    let rendered = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    if status.is_success() {
        println!("{rendered}");
        Ok(())
    } else {
        eprintln!("Error: service returned status {status}");
        eprintln!("{rendered}");
        std::process::exit(1);
    }
}
