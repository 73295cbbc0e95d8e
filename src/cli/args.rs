//! Command-line argument definitions
//!
//! The tool always works on the current directory, so the only options are
//! the ones clap provides (`--help`, `--version`).

use clap::Parser;

/// Consolidates claims expenses from ANS quarterly accounting statements
///
/// Reads every `.csv` file in the current directory, keeps the lines about
/// claims/events expenses, consolidates them and writes
/// `consolidado_despesas.csv`, `consolidado_despesas.zip` and
/// `processamento.log` next to the inputs.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ans-claims-processor",
    version,
    about = "Consolidate claims expenses from ANS quarterly statements into one CSV"
)]
pub struct Args {}
