use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use modtimes::config::Config;
use modtimes::report;
use modtimes::storage::config::StorageConfig;
use tokio::runtime::Runtime;

const DEFAULT_BUCKET: &str = "iceberg-tutorial-bucket-ruben";
const DEFAULT_PREFIX: &str = "nyc_taxi_iceberg_data_manipulation/";

/// Report the distinct last-modified times of data files under an S3 prefix.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct ModTimes {
    /// TOML config file with a [storage] table (bucket, prefix).
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Bucket name; ${VAR} references are expanded from the environment.
    #[clap(short, long)]
    bucket: Option<String>,
    /// Key prefix to scan under.
    #[clap(short, long)]
    prefix: Option<String>,
    /// Also print the per-object listing, newest first.
    #[clap(long)]
    objects: bool,
}

/// ```
/// export RUST_LOG=error,modtimes=info
/// cargo run --release -- --bucket my-bucket --prefix tables/trips/
/// ```
fn main() {
    env_logger::init();

    let args = ModTimes::parse();

    let mut storage_config = match &args.config {
        Some(path) => Config::from_path(path).storage,
        None => StorageConfig {
            bucket: DEFAULT_BUCKET.into(),
            prefix: DEFAULT_PREFIX.into(),
        },
    };
    if let Some(bucket) = args.bucket {
        storage_config.bucket = bucket;
    }
    if let Some(prefix) = args.prefix {
        storage_config.prefix = prefix;
    }

    let runtime = Runtime::new().unwrap();
    let handle = runtime.handle();

    let s3 = storage_config.build_s3(handle.clone()).unwrap();
    let report = report::scan(&s3).unwrap();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report.write_summary(&mut out).unwrap();
    if args.objects {
        writeln!(out).unwrap();
        report.write_listing(&mut out).unwrap();
    }
}
