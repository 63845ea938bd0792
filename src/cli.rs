//! Command-line interface implementation for examplegen.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::brand::Brand;
use crate::constants::DEFAULT_TEMPLATE_ROOT;

/// Command-line arguments structure for examplegen.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "examplegen: brand-aware example tree generator for the tfbrew Terraform providers",
    long_about = None
)]
pub struct Args {
    /// Brand whose examples should be generated
    #[arg(long, value_enum, default_value = "awx")]
    pub brand: Brand,

    /// Template tree to render, resolved relative to the working directory.
    /// Rendered files are written into its parent directory.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_TEMPLATE_ROOT)]
    pub templates: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
