//! Core generation logic for examplegen.
//! Walks the template tree, mirrors it into the output tree with branded
//! directory names, and renders every file against the brand context.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::brand::BrandConfig;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::rewrite::{rewrite_dir_path, rewrite_file_path};

/// One-shot generator for a branded example tree.
///
/// The output tree is the parent of the template root, so a template at
/// `examples/templates/resources/inventory/import.tf.tmpl` renders to
/// `examples/<prefix>_resources/<prefix>_inventory/import.tf`.
pub struct Generator<'a> {
    engine: &'a dyn TemplateRenderer,
    template_root: &'a Path,
    output_root: PathBuf,
    prefix: &'a str,
    context: serde_json::Value,
}

impl<'a> Generator<'a> {
    /// Creates a generator for the given template root and brand.
    ///
    /// # Errors
    /// * `Error::Config` if the brand prefix is empty or the template root
    ///   has no parent directory to serve as the output root
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        template_root: &'a Path,
        brand: &'a BrandConfig,
    ) -> Result<Self> {
        if brand.prefix.is_empty() {
            return Err(Error::Config("brand prefix is empty".to_string()));
        }

        let output_root = template_root
            .parent()
            .ok_or_else(|| {
                Error::Config(format!(
                    "template root '{}' has no parent directory",
                    template_root.display()
                ))
            })?
            .to_path_buf();

        let context = serde_json::json!({
            "Prefix": brand.prefix,
            "ProviderSource": brand.provider_source,
        });

        Ok(Self { engine, template_root, output_root, prefix: brand.prefix, context })
    }

    /// Directory the rendered examples are written into.
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Walks the template tree and renders it into the output tree.
    ///
    /// Entries are visited in lexicographic order, parents before children.
    /// The first error at any step terminates the walk; outputs written
    /// before the failure remain in place.
    ///
    /// # Returns
    /// * `Result<usize>` - Number of files rendered
    pub fn run(&self) -> Result<usize> {
        let mut rendered = 0;

        for entry in WalkDir::new(self.template_root).min_depth(1).sort_by_file_name() {
            let entry = entry?;
            let relative = entry
                .path()
                .strip_prefix(self.template_root)
                .map_err(|e| Error::Config(e.to_string()))?;
            if relative.to_str().is_none() {
                return Err(Error::Config(format!(
                    "template path is not valid UTF-8: {}",
                    relative.display()
                )));
            }

            if entry.file_type().is_dir() {
                let target = self.output_root.join(rewrite_dir_path(relative, self.prefix));
                debug!("Creating output directory: {}", target.display());
                fs::create_dir_all(&target).map_err(Error::CreateDir)?;
            } else {
                let target = self.output_root.join(rewrite_file_path(relative, self.prefix));
                debug!("Rendering {} to {}", entry.path().display(), target.display());
                self.render_file(entry.path(), &target)?;
                rendered += 1;
            }
        }

        Ok(rendered)
    }

    fn render_file(&self, source: &Path, target: &Path) -> Result<()> {
        let template = fs::read_to_string(source).map_err(Error::ReadTemplate)?;
        let content = self.engine.render(&template, &self.context)?;

        // Covers files sitting directly under the template root, whose
        // parent directory was never visited as a walk entry.
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(Error::CreateDir)?;
        }
        fs::write(target, content).map_err(Error::WriteOutput)
    }
}
