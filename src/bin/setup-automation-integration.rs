use std::io::{self, Write};
use std::path::PathBuf;

use automation_setup_tools::Result;
use automation_setup_tools::checklist;
use automation_setup_tools::logging;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    logging::init()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = if cli.json {
        let report = checklist::inspect(&cli.root);
        writeln!(out, "{}", report.to_json()?)?;
        report
    } else {
        checklist::run_checklist(&cli.root, &mut out)?
    };

    out.flush()?;
    Ok(report.exit_code())
}

#[derive(Parser)]
#[command(
    name = "setup-automation-integration",
    author,
    version,
    about = "Check that the Firefly III automation integration files are in place."
)]
struct Cli {
    /// Firefly III base directory to check.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Print the check results as JSON instead of the guided walkthrough.
    #[arg(long)]
    json: bool,
}
