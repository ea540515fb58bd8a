use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "isd-extractor")]
#[command(about = "Per-year temperature extraction from fixed-width ISD station records")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract (year, temperature) pairs from record files
    Extract {
        #[arg(short, long, required = true, num_args = 1.., help = "Input record files or directories")]
        input: Vec<PathBuf>,

        #[arg(
            short,
            long,
            help = "Output file path [default: output/isd-temperatures-{YYMMDD}.txt]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, help = "Write extracted lines to stdout instead of a file")]
        to_stdout: bool,

        #[arg(long, default_value_t = num_cpus::get())]
        max_workers: usize,

        #[arg(long, default_value = "false")]
        use_mmap: bool,
    },

    /// Scan records and report extraction statistics without writing output
    Validate {
        #[arg(short, long, required = true, num_args = 1.., help = "Input record files or directories")]
        input: Vec<PathBuf>,

        #[arg(long, default_value_t = num_cpus::get())]
        max_workers: usize,

        #[arg(long, help = "Emit the report as JSON")]
        json: bool,

        #[arg(long, default_value = "false")]
        strict: bool,
    },

    /// Display information about an extracted output file
    Info {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long, default_value = "10")]
        sample: usize,

        #[arg(
            long,
            default_value = "0",
            help = "Maximum lines to analyze (0 = all lines)"
        )]
        analysis_limit: usize,
    },
}
