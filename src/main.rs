//! examplegen's main application entry point.
//! Parses arguments, selects the brand, and renders the template tree into
//! the branded output tree, aborting on the first error.

use examplegen::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    generator::Generator,
    logger::init_logger,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the brand configuration record
/// 2. Builds the template engine and the generator
/// 3. Walks the template tree and renders every file
fn run(args: Args) -> Result<()> {
    let config = args.brand.config();
    let engine = MiniJinjaRenderer::new();

    let generator = Generator::new(&engine, &args.templates, config)?;
    let rendered = generator.run()?;

    println!(
        "Rendered {} example files for brand '{}' into '{}'.",
        rendered,
        config.prefix,
        generator.output_root().display()
    );
    Ok(())
}
