//! `modinspect`: print the structure of a ProTracker M.K. module.
//!
//! Header, computed layout, size issues and a table of decoded pattern
//! cells, or a raw hex dump of the start of the file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use protracker_mod::report::{
    hex_dump, render_cells, render_header, render_issues, render_layout, ReportConfig,
};
use protracker_mod::{load_file, sample_regions, ModCell, ModFile, ModHeader, ModLayout, SampleRegion};

#[derive(Parser)]
#[command(name = "modinspect")]
#[command(about = "Inspect ProTracker M.K. module files")]
struct Args {
    /// MOD file to inspect
    file: PathBuf,

    /// Print a hex dump of the first bytes instead of the decoded view
    #[arg(long)]
    dump: bool,

    /// Print the decoded view as JSON
    #[arg(long, conflicts_with = "dump")]
    json: bool,

    /// Pattern rows to decode
    #[arg(long, default_value_t = ReportConfig::default().rows_to_show)]
    rows: usize,

    /// Pattern index to decode (defaults to the first order table entry)
    #[arg(long)]
    pattern: Option<usize>,

    /// Bytes covered by --dump
    #[arg(long, default_value_t = ReportConfig::default().hex_dump_len)]
    dump_len: usize,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn report_config(&self) -> ReportConfig {
        ReportConfig {
            rows_to_show: self.rows,
            hex_dump_len: self.dump_len,
            pattern: self.pattern,
            ..ReportConfig::default()
        }
    }
}

#[derive(Serialize)]
struct Inspection<'a> {
    file: String,
    size: usize,
    header: &'a ModHeader,
    layout: &'a ModLayout,
    samples: Vec<SampleRegion>,
    issues: Vec<String>,
    pattern: Option<usize>,
    rows: Vec<Vec<ModCell>>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let config = args.report_config();

    let data = load_file(&args.file)
        .with_context(|| format!("failed to read '{}'", args.file.display()))?;

    if args.dump {
        let len = config.hex_dump_len.min(data.len());
        println!("file: {}", args.file.display());
        println!("size: {} bytes", data.len());
        println!();
        println!("hex dump (first {} bytes):", len);
        println!("{}", hex_dump(&data[..len], 0, config.hex_bytes_per_row));
        return Ok(());
    }

    let module = ModFile::parse(&data)
        .with_context(|| format!("failed to parse '{}'", args.file.display()))?;
    let pattern_index = config
        .pattern
        .unwrap_or(module.header.order_table[0] as usize);
    let pattern = module.pattern(pattern_index);

    if args.json {
        let rows = match &pattern {
            Ok(p) => p
                .rows()
                .take(config.rows_to_show)
                .map(|cells| cells.to_vec())
                .collect(),
            Err(_) => Vec::new(),
        };
        let inspection = Inspection {
            file: args.file.display().to_string(),
            size: module.file_size(),
            header: &module.header,
            layout: &module.layout,
            samples: sample_regions(&module.header, &module.layout),
            issues: module.issues.iter().map(|i| i.to_string()).collect(),
            pattern: pattern.as_ref().ok().map(|p| p.index()),
            rows,
        };
        println!("{}", serde_json::to_string_pretty(&inspection)?);
        return Ok(());
    }

    println!("file: {}", args.file.display());
    println!("size: {} bytes", module.file_size());
    println!();
    print!("{}", render_header(&module.header));
    println!();
    print!("{}", render_layout(&module.layout, module.file_size()));
    println!();
    print!("{}", render_issues(&module.issues));
    println!();
    match pattern {
        Ok(p) => print!("{}", render_cells(&p, config.rows_to_show)),
        Err(e) => println!("pattern {}: {}", pattern_index, e),
    }
    println!();
    println!("cell format: s=sample, p=period (raw decimal), e=effect (hex nibble), a=param (hex byte)");

    Ok(())
}
