mod analysis;
mod cli;
mod report;

use analysis::run_analysis;
use clap::Parser;
use cli::Cli;
use report::{render_json, render_summary};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // Either the individual flags or a JSON test file describe the test. Flag
    // defaults reproduce the field sheet: subgrade soil, 76 cm plate, 0.5 MPa.
    let inputs = cli.test_inputs()?;

    // Range checks belong to the caller rather than the formulas, so they run
    // here and can be bypassed to see what the raw algebra yields.
    let summary = run_analysis(&inputs, !cli.skip_validation)?;

    let report = if cli.json {
        render_json(&summary)?
    } else {
        render_summary(&summary, cli.locale, cli.verbose)
    };
    println!("{report}");

    Ok(())
}
