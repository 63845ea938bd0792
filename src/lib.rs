//! examplegen renders the brand-specific example trees shipped with the
//! tfbrew Terraform providers. One template tree is shared by the `aap` and
//! `awx` brands; each build expands it into an output tree whose directory
//! names and file contents carry the selected brand.

/// Brand table for the aap and awx provider variants
pub mod brand;

/// Command-line interface module for the examplegen application
pub mod cli;

/// Common constants shared across modules
pub mod constants;

/// Error types and handling for the examplegen application
pub mod error;

/// Template tree walking and output generation
pub mod generator;

/// Logger initialization
pub mod logger;

/// Template parsing and rendering functionality
pub mod renderer;

/// Path rewriting between the template tree and the branded output tree
pub mod rewrite;
