//! Common constants used throughout the examplegen application.

/// Default template tree location, relative to the working directory
pub const DEFAULT_TEMPLATE_ROOT: &str = "examples/templates";

/// Suffix marking a file as a template; stripped from rendered output names
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Directory name reserved by the Terraform registry layout; never decorated
pub const PROVIDER_DIR: &str = "provider";
