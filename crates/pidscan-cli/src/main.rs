mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pidscan",
    version,
    about = "Extract and categorize instrumentation and piping tags from P&ID drawings"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Harvest a P&ID PDF and write the intermediate JSON artifacts
    Extract {
        /// Path to PDF file
        pdf_file: PathBuf,

        /// Directory for the extraction artifacts
        #[arg(short = 'd', long = "out-dir", default_value = "output")]
        out_dir: PathBuf,

        /// Output format for the on-screen summary: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Build the component table from previously written artifacts
    Table {
        /// Directory holding the extraction artifacts
        artifact_dir: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Run the full pipeline on a PDF in one shot
    Scan {
        /// Path to PDF file
        pdf_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the sheet set to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Inspect the component taxonomy
    Categories {
        #[command(subcommand)]
        action: CategoriesAction,
    },
}

#[derive(Subcommand)]
enum CategoriesAction {
    /// List the output columns in order
    List,
    /// Print the classification pattern table in priority order
    Patterns,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            pdf_file,
            out_dir,
            output,
        } => commands::extract::run(pdf_file, out_dir, &output),
        Commands::Table {
            artifact_dir,
            output,
        } => commands::table::run(artifact_dir, &output),
        Commands::Scan {
            pdf_file,
            output,
            out,
        } => commands::scan::run(pdf_file, &output, out),
        Commands::Categories { action } => match action {
            CategoriesAction::List => commands::categories::list(),
            CategoriesAction::Patterns => commands::categories::patterns(),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
