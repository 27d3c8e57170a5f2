use clap::Parser;
use cocktail_grader::services::catalog::{CatalogProvider, JsonFileCatalog};
use cocktail_grader::services::validation;
use serde_json::{Map, Value};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Grade a single cocktail submission against the JSON catalog.
#[derive(Parser, Debug)]
#[command(name = "grade", version, about, long_about = None)]
struct Args {
    /// Directory holding cocktails.json and alcohols.json
    #[arg(short, long, env = "DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Submission JSON file, or "-" for stdin
    submission: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .compact()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let raw = match read_submission(&args.submission) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::error!(error = %e, source = %args.submission, "Failed to read submission");
            return ExitCode::from(2);
        }
    };
    let payload = serde_json::from_str::<Value>(&raw)
        .ok()
        .filter(Value::is_object)
        .unwrap_or_else(|| Value::Object(Map::new()));

    let catalog = JsonFileCatalog::new(args.data_dir);
    let loaded = tokio::try_join!(catalog.cocktails(), catalog.alcohols());
    let (cocktails, alcohols) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load catalog");
            return ExitCode::from(2);
        }
    };

    let verdict = validation::evaluate_payload(&payload, &cocktails, &alcohols);
    match serde_json::to_string_pretty(&verdict) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize verdict");
            return ExitCode::from(2);
        }
    }

    if verdict.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

fn read_submission(source: &str) -> std::io::Result<String> {
    if source == "-" {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        std::fs::read_to_string(source)
    }
}
