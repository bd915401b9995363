mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "voucher",
    version,
    about = "Generate branded hotel booking confirmation vouchers from spreadsheets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a booking spreadsheet into normalized records (without rendering)
    Parse {
        /// Path to .xlsx or .xls file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write normalized records to a JSON file (editable, usable as
        /// input to `generate`)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Render one PDF voucher per record and bundle them into a ZIP archive
    Generate {
        /// Path to a .xlsx/.xls spreadsheet, or a records JSON file as
        /// written by `parse --out`
        input_file: PathBuf,

        /// Archive path (default: hotel_vouchers_{timestamp}.zip)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            out,
        } => commands::parse::run(input_file, &output, out),
        Commands::Generate { input_file, out } => commands::generate::run(input_file, out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
