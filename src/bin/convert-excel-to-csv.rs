use std::path::PathBuf;

use automation_setup_tools::convert;
use automation_setup_tools::logging;
use automation_setup_tools::{Result, ToolError};
use clap::Parser;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // Usage errors exit with 1; --help and --version are not failures.
            let code = if error.use_stderr() { 1 } else { 0 };
            let _ = error.print();
            std::process::exit(code);
        }
    };

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(ToolError::MissingInput(path)) => {
            eprintln!("File {} does not exist", path.display());
            std::process::exit(1);
        }
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    logging::init()?;

    if !cli.source.exists() {
        return Err(ToolError::MissingInput(cli.source));
    }

    // The conversion routine reports its own failures.
    match convert::convert_excel_to_csv(&cli.source, cli.destination.as_deref()) {
        Some(_) => Ok(0),
        None => Ok(1),
    }
}

#[derive(Parser)]
#[command(
    name = "convert-excel-to-csv",
    author,
    version,
    about = "Convert a spreadsheet to CSV for Firefly III account import."
)]
struct Cli {
    /// Spreadsheet to convert (xlsx, xlsm, xlsb, xls or ods).
    source: PathBuf,

    /// Output file path. Defaults to the source path with a `.csv` extension.
    destination: Option<PathBuf>,
}
