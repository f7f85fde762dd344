// crates/bbntt-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{Context, Result};
use bbntt_field::{BabyBear, P};
use bbntt_params::{DomainParameters, DomainTable, TWO_ADICITY};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "bbntt-cli",
    about = "BabyBear NTT domain parameter tool",
    long_about = "BabyBear NTT domain parameter tool.\n\nValidate the published root-of-unity tables, look up the roots for a transform size, or dump every table as JSON.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Run every consistency check on the published tables
    Validate,

    /// Print the forward root, inverse root and size inverse for n = 2^k
    Roots {
        /// log2 of the transform size (0..=27)
        #[arg(long, short = 'k')]
        log_size: u32,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Dump the generators and all three tables as JSON
    Dump {
        /// Output path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd {
        Cmd::Validate => validate(),
        Cmd::Roots { log_size, json } => roots(log_size, json),
        Cmd::Dump { out } => dump(out.as_deref()),
    }
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(io::stderr)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Ensure the parent directory for a file exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", dir.display()))?;
        }
    }
    Ok(())
}

fn params() -> Result<&'static DomainParameters> {
    DomainParameters::global().context("published domain parameters are inconsistent")
}

fn validate() -> Result<()> {
    let params = params()?;
    let top = params.roots_for_size(params.max_log_size())?;
    info!(
        modulus = P,
        two_adicity = TWO_ADICITY,
        two_adic_generator = %top.forward_root,
        coset_shift = %params.coset_shift(),
        "all domain parameter checks passed"
    );
    println!("ok");
    Ok(())
}

fn roots(log_size: u32, json: bool) -> Result<()> {
    let r = params()?
        .roots_for_size(log_size)
        .with_context(|| format!("looking up roots for n = 2^{log_size}"))?;

    if json {
        let s = serde_json::to_string_pretty(&r).context("serialize roots to JSON")?;
        println!("{s}");
    } else {
        println!("n            = 2^{}", r.log2_size);
        println!("forward_root = {} (mont {:#010x})", r.forward_root, r.forward_root.to_montgomery());
        println!("inverse_root = {} (mont {:#010x})", r.inverse_root, r.inverse_root.to_montgomery());
        println!("size_inverse = {} (mont {:#010x})", r.size_inverse, r.size_inverse.to_montgomery());
    }
    Ok(())
}

/// One field element in both representations.
#[derive(Serialize)]
struct Entry {
    canonical: u32,
    montgomery: String,
}

impl From<BabyBear> for Entry {
    fn from(x: BabyBear) -> Self {
        Self {
            canonical: x.to_canonical(),
            montgomery: format!("{:#010x}", x.to_montgomery()),
        }
    }
}

#[derive(Serialize)]
struct TableDump {
    modulus: u32,
    two_adicity: usize,
    generator: Entry,
    generator_inverse: Entry,
    forward_roots: Vec<Entry>,
    inverse_roots: Vec<Entry>,
    domain_size_inverse: Vec<Entry>,
}

impl From<&DomainTable> for TableDump {
    fn from(t: &DomainTable) -> Self {
        let entries =
            |xs: &[BabyBear]| -> Vec<Entry> { xs.iter().copied().map(Entry::from).collect() };
        Self {
            modulus: P,
            two_adicity: TWO_ADICITY,
            generator: t.generator().into(),
            generator_inverse: t.generator_inverse().into(),
            forward_roots: entries(t.forward()),
            inverse_roots: entries(t.inverse()),
            domain_size_inverse: entries(t.size_inverse()),
        }
    }
}

fn dump(out: Option<&Path>) -> Result<()> {
    let dump = TableDump::from(params()?.table());

    match out {
        Some(path) => {
            ensure_parent_dir(path)?;
            let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &dump).context("serialize tables to JSON")?;
            w.flush().context("flush output")?;
            info!(path = %path.display(), "wrote domain tables");
        }
        None => {
            let stdout = io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &dump).context("serialize tables to JSON")?;
            writeln!(w).context("write newline")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn roots_flag_parses() {
        let cli = Cli::try_parse_from(["bbntt-cli", "roots", "-k", "12", "--json"]).unwrap();
        assert!(matches!(cli.cmd, Cmd::Roots { log_size: 12, json: true }));
    }

    #[test]
    fn dump_shows_both_representations() {
        let dump = TableDump::from(&DomainTable::published());
        assert_eq!(dump.forward_roots.len(), TWO_ADICITY + 1);
        assert_eq!(dump.forward_roots[0].canonical, 1);
        assert_eq!(dump.forward_roots[0].montgomery, "0x0ffffffe");
        assert_eq!(dump.generator.canonical, 3);

        let v = serde_json::to_value(&dump).unwrap();
        assert_eq!(v["inverse_roots"][1]["montgomery"], "0x68000003");
        assert_eq!(v["modulus"], 2_013_265_921u64);
    }
}
