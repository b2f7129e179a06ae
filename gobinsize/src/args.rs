use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "gobinsize",
    version,
    about = "Break down a Go binary's size by the packages that produced it"
)]
pub struct Cli {
    #[arg(short = 'f', long = "binary-file", help = "go binary to inspect")]
    pub binary_file: PathBuf,

    #[arg(
        short = 'n',
        long = "top-n",
        default_value_t = 100,
        help = "rows to show per table"
    )]
    pub top_n: usize,

    #[arg(
        short = 'g',
        long = "grep",
        default_value = "",
        help = "keep only listing lines containing this substring"
    )]
    pub grep: String,

    #[arg(
        short = 's',
        long = "sort",
        default_value = "size",
        help = "symbol table sort key: size, address, or symbol"
    )]
    pub sort: String,

    #[arg(
        short = 'a',
        long = "asc",
        default_value_t = false,
        help = "sort the symbol table ascending instead of descending"
    )]
    pub asc: bool,

    #[arg(
        short = 'w',
        long = "max-width",
        help = "symbol/package column width cap (50-256, defaults to the terminal width)"
    )]
    pub max_width: Option<usize>,

    #[arg(
        long = "timeout-secs",
        default_value_t = 60,
        help = "timeout for each go toolchain invocation"
    )]
    pub timeout_secs: u64,

    #[arg(short = 'v', long = "verbose", default_value_t = false)]
    pub verbose: bool,
}
