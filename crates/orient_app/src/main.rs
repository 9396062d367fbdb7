//! orient - report the EXIF display orientation of JPEG images.

mod report;

use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use orient_core::ImageFormat;
use orient_io::{local_path, metadata_for_format};
use tracing_subscriber::EnvFilter;

use report::Report;

#[derive(Parser, Debug)]
#[command(name = "orient")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Image files, plain paths or file:// URLs.
    #[arg(required = true)]
    paths: Vec<String>,

    /// Declared format; `auto` derives it from the file extension.
    #[arg(short, long, default_value = "auto")]
    format: String,

    /// Emit one JSON object per line.
    #[arg(long, default_value_t = false)]
    json: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn declared_format(flag: &str, path: &std::path::Path) -> ImageFormat {
    if flag == "auto" {
        ImageFormat::from_extension(path)
    } else {
        ImageFormat::from_declared(flag)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for raw in &args.paths {
        let path: PathBuf = local_path(raw).to_path_buf();
        if !path.is_file() {
            tracing::warn!(path = %path.display(), "not a regular file");
        }

        let format = declared_format(&args.format, &path);
        let meta = metadata_for_format(&path, &format);
        tracing::info!(
            path = %path.display(),
            format = %format,
            orientation = %meta.orientation(),
            "resolved orientation"
        );

        let report = Report::new(&path, &format, meta);
        if args.json {
            report.write_json(&mut out)?;
        } else {
            report.write_tsv(&mut out)?;
        }
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
