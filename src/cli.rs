use clap::Parser;

#[derive(Parser)]
#[clap(author, version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// A path to the evaluation parameters - if omitted, the tuned defaults will be used
    #[clap(long, value_parser, value_name = "PATH")]
    pub eparams: Option<std::path::PathBuf>,
    /// Visualise the Piece-Square Tables
    #[clap(long)]
    pub vispsqt: bool,
    /// Generate source code for the bonus tables based on the evaluation parameters
    #[clap(long)]
    pub gensource: bool,
    /// Write the evaluation parameters out as a comma-separated vector
    #[clap(long, value_name = "PATH")]
    pub dumpparams: Option<std::path::PathBuf>,
    /// Check the built tables for colour and file symmetry and material additivity
    #[clap(long)]
    pub check: bool,
    /// Display misc. information about the tables
    #[clap(short, long)]
    pub info: bool,
    /// Log table construction in detail
    #[clap(short, long)]
    pub verbose: bool,
}
