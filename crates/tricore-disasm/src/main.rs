use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tricore_decode::disasm::Sweep;
use tricore_decode::{DecodeError, DecodedInstruction, DecoderConfig, Tc16Decoder};
use tricore_disasm::{load_raw_bin, text_line, Record};

#[derive(Parser, Debug)]
#[command(author, version, about = "TriCore decoder CLI", long_about=None)]
struct Cli {
    /// Load address for the binary in target address space
    #[arg(long, default_value_t = 0u64)]
    base: u64,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: PathBuf,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Decoder configuration (JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments (simple single-segment for raw .bin)
    Sections,
    /// Decode a range [start, end) in bytes
    Range {
        /// Start address (hex or dec)
        start: String,
        /// End address (hex or dec, exclusive)
        end: String,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_u64(s: &str) -> Result<u64> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u64::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u64>()?)
    }
}

fn load_config(path: Option<&Path>) -> Result<DecoderConfig> {
    let Some(path) = path else { return Ok(DecoderConfig::default()) };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let img = load_raw_bin(&cli.input, cli.base, cli.skip, cli.len)?;
    let config = load_config(cli.config.as_deref())?;
    info!(features = ?config.features, segments = img.segments.len(), "image loaded");

    match cli.cmd {
        Command::Sections => {
            println!("{:<10} {:<12} {:<12} {:<6} {:<6}", "name", "start", "end", "perms", "kind");
            for s in &img.segments {
                println!("{:<10} {:#010x} {:#010x} {:<6} {:<6}", s.name, s.base, s.end(), s.perms, s.kind);
            }
        }
        Command::Range { start, end, show_bytes, format, out } => {
            let start = parse_u64(&start)?;
            let end = parse_u64(&end)?;
            anyhow::ensure!(end >= start, "end must be >= start");
            let bytes = img
                .window(start, end)
                .with_context(|| format!("{start:#x} is not mapped"))?;

            let dec = Tc16Decoder::with_config(config);
            let results: Vec<_> = Sweep::new(&dec, bytes, start).collect();
            let raw = move |addr: u64, result: &Result<DecodedInstruction, DecodeError>| {
                let lo = (addr - start) as usize;
                let size = result.as_ref().map_or(2, DecodedInstruction::size);
                show_bytes.then(|| &bytes[lo..(lo + size).min(bytes.len())])
            };

            let rendered = match format {
                OutputFormat::Text => {
                    let mut buf = String::new();
                    for (addr, result) in &results {
                        let _ = writeln!(buf, "{}", text_line(*addr, raw(*addr, result), result));
                    }
                    buf
                }
                OutputFormat::Json => {
                    let records: Vec<Record<'_>> = results
                        .iter()
                        .map(|(addr, result)| Record::new(*addr, raw(*addr, result), result))
                        .collect();
                    serde_json::to_string_pretty(&records)? + "\n"
                }
            };
            let failures = results.iter().filter(|(_, r)| r.is_err()).count();
            info!(attempts = results.len(), failures, "range decoded");
            if let Some(path) = out {
                std::fs::write(path, rendered)?;
            } else {
                print!("{rendered}");
            }
        }
    }

    Ok(())
}
