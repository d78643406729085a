#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

//! Builds tapered piece-square tables and reports on them.

mod cli;

use anyhow::{Context, bail};
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use tapered::{EvalParams, NAME, PieceSquareTable, VERSION, piecesquaretable::tables};

fn main() -> anyhow::Result<()> {
    let cli = <cli::Cli as clap::Parser>::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    SimpleLogger::init(level, Config::default()).context("failed to initialise logging")?;

    let params = match &cli.eparams {
        Some(path) => EvalParams::from_file(path)
            .with_context(|| format!("failed to load parameters from {}", path.display()))?,
        None => EvalParams::default(),
    };

    let pst = PieceSquareTable::new(&params);
    log::info!("built {} piece-square entries", pst.entries().count());

    if cli.info {
        println!("{NAME} {VERSION}");
        println!("parameter vector length: {}", EvalParams::VECTOR_LEN);
        println!("{params}");
    }

    if let Some(path) = &cli.dumpparams {
        EvalParams::save_param_vec(&params.vectorise(), path)
            .with_context(|| format!("failed to write parameters to {}", path.display()))?;
        log::info!("wrote parameters to {}", path.display());
    }

    if cli.vispsqt {
        let mut out = String::new();
        pst.write_tables(&mut out).context("failed to render tables")?;
        print!("{out}");
    }

    if cli.gensource {
        let mut out = String::new();
        tables::write_pst_source(&pst, &mut out).context("failed to generate source")?;
        print!("{out}");
    }

    if cli.check {
        let violations = pst.check_invariants(&params);
        for violation in &violations {
            log::error!("{violation}");
        }
        if !violations.is_empty() {
            bail!("{} invariant violations", violations.len());
        }
        log::info!("all piece-square table invariants hold");
    }

    Ok(())
}
