use clap::Parser;
use futures::StreamExt;
use libsitecheck::{load_domains, write_csv_file, ProbeConfig, Prober, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    time::Duration,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Deserialize, Serialize)]
struct Config {
    #[serde(default)]
    probe: ProbeSection,
    #[serde(default)]
    signatures: SignatureSection,
}

#[derive(Debug, Deserialize, Serialize)]
struct ProbeSection {
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

impl Default for ProbeSection {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct SignatureSection {
    #[serde(default)]
    extra: Vec<String>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("bsc").join("config.toml"))
}

fn load_config() -> Config {
    config_path()
        .and_then(|path| std::fs::read_to_string(&path).ok())
        .and_then(|content| toml::from_str(&content).ok())
        .unwrap_or_default()
}

fn get_default_config_toml() -> String {
    r#"# Boats Group site checker (bsc) Configuration

[probe]
# Per-request timeout in seconds
timeout_secs = 10

[signatures]
# Extra substrings to treat as Boats Group signatures, in addition
# to the built-in list
# extra = ["example-cdn.boats"]
extra = []
"#
    .to_string()
}

#[derive(Parser, Debug)]
#[command(name = "bsc")]
#[command(about = "Boats Group site checker - batch liveness and platform detection", long_about = None)]
struct Args {
    /// Input file with one domain per line
    #[arg(long, short = 'i', default_value = "domains.txt")]
    input: PathBuf,

    /// Output CSV file (overwritten if it exists)
    #[arg(long, short = 'o', default_value = "final_site_status.csv")]
    output: PathBuf,

    /// Per-request timeout in seconds (overrides the config file)
    #[arg(long)]
    timeout: Option<u64>,

    /// Output results as NDJSON stream (one JSON object per line) instead of CSV
    #[arg(long, short = 'j')]
    ndjson: bool,

    /// Print the default config to stdout and exit
    #[arg(long)]
    print_default_config: bool,

    /// Write the default config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.print_default_config {
        println!("{}", get_default_config_toml());
        return Ok(());
    }

    if args.write_default_config {
        if let Some(path) = config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, get_default_config_toml())?;
            println!("Default config written to: {}", path.display());
        } else {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = load_config();
    let timeout_secs = args.timeout.unwrap_or(config.probe.timeout_secs);
    let probe_config = ProbeConfig {
        timeout: Duration::from_secs(timeout_secs),
        user_agent: DEFAULT_USER_AGENT.to_string(),
        extra_signatures: config.signatures.extra,
    };

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let domains = load_domains(&args.input)?;
        let prober = Prober::with_config(probe_config);

        if args.ndjson {
            run_ndjson(&prober, domains).await
        } else {
            run_batch(&prober, domains, &args.output).await
        }
    })
}

async fn run_batch(
    prober: &Prober,
    domains: Vec<String>,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut results = Vec::with_capacity(domains.len());

    for domain in domains {
        println!("Checking: {domain}");
        let result = prober.probe_one(&domain).await;
        println!("{:<35} → {}", domain, result.status_label);
        results.push(result);
    }

    write_csv_file(output, &results)?;
    println!("\n✅ Done. Results saved to {}", output.display());

    Ok(())
}

async fn run_ndjson(
    prober: &Prober,
    domains: Vec<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let stream = prober.probe_stream(domains);
    futures::pin_mut!(stream);

    while let Some(result) = stream.next().await {
        if let Ok(json) = serde_json::to_string(&result) {
            println!("{}", json);
            io::stdout().flush()?;
        }
    }

    Ok(())
}
