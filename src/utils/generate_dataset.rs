use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rsa_key_dataset::common::config::{
    DatasetConfig, KeyGenConfig, DEFAULT_COUNT, DEFAULT_KEY_BITS, DEFAULT_OUTPUT_PATH,
    DEFAULT_PUBLIC_EXPONENT,
};
use rsa_key_dataset::common::dataset::generate_dataset;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Generate a CSV dataset of DER-encoded RSA key pairs
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Number of key pairs to generate
    #[arg(long, default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Destination CSV file, overwritten if present
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Modulus size in bits
    #[arg(long, default_value_t = DEFAULT_KEY_BITS)]
    key_bits: usize,

    /// Public exponent shared by every key
    #[arg(long, default_value_t = DEFAULT_PUBLIC_EXPONENT)]
    public_exponent: u64,

    /// Seed a deterministic RNG instead of using the OS RNG
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Args> for DatasetConfig {
    fn from(args: Args) -> Self {
        DatasetConfig {
            count: args.count,
            output_path: args.output,
            key: KeyGenConfig {
                bits: args.key_bits,
                public_exponent: args.public_exponent,
            },
            seed: args.seed,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = DatasetConfig::from(Args::parse());

    match generate_dataset(&config) {
        Ok(rows) => {
            println!("Wrote {} key pairs to {}", rows, config.output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(phase = e.phase(), "{}", e);
            eprintln!("Dataset {} failed: {}", e.phase(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_arguments() {
        let config = DatasetConfig::from(Args::parse_from(["generate_dataset"]));
        assert_eq!(config, DatasetConfig::default());
    }

    #[test]
    fn test_all_arguments() {
        let args = Args::parse_from([
            "generate_dataset",
            "--count",
            "3",
            "--output",
            "/tmp/keys.csv",
            "--key-bits",
            "1024",
            "--public-exponent",
            "3",
            "--seed",
            "7",
        ]);
        let config = DatasetConfig::from(args);
        assert_eq!(config.count, 3);
        assert_eq!(config.output_path, PathBuf::from("/tmp/keys.csv"));
        assert_eq!(config.key, KeyGenConfig { bits: 1024, public_exponent: 3 });
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_rejects_negative_count() {
        assert!(Args::try_parse_from(["generate_dataset", "--count", "-1"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
