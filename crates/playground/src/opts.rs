use std::path::PathBuf;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use cli::args::{FormatArg, PageArg, StrategyArg};

#[derive(Parser, Debug)]
#[command(name = "playground")]
#[command(bin_name = "playground")]
#[command(version, about, long_about = None)]
pub(crate) struct Opts {
    #[command(subcommand)]
    pub(crate) command: Command,

    /// Trace log file
    #[arg(long, num_args = 0..=1, default_missing_value = "trace.log")]
    pub(crate) trace: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) verbose: Verbosity<InfoLevel>,
}

#[derive(Subcommand, Debug)]
#[command(arg_required_else_help(true))]
pub(crate) enum Command {
    /// Render a single page
    Page {
        /// Page to render
        #[arg(value_name = "PAGE")]
        page: PageArg,
    },
    /// Render every page, in reading order
    All {
    },
    /// Print the equality comparison matrix of the demonstration boxes
    Matrix {
        /// How the boxes are constructed
        #[arg(long, default_value = "naive")]
        strategy: StrategyArg,

        /// Output format
        #[arg(long, default_value = "text")]
        format: FormatArg,
    },
}
