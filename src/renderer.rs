//! Template rendering functionality for examplegen.
//! Wraps a MiniJinja environment configured for strict placeholder
//! resolution, so a reference to an unrecognized placeholder aborts the run
//! instead of rendering as empty text.

use minijinja::{Environment, ErrorKind, UndefinedBehavior};

use crate::error::{Error, Result};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer with a strict environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // MiniJinja drops the template's final newline by default; rendered
        // files must differ from their templates only at placeholders.
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::ParseTemplate` if the template syntax is malformed
    /// * `Error::ExecuteTemplate` if rendering fails, including references
    ///   to placeholders absent from the context
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env.render_str(template, context).map_err(|err| match err.kind() {
            ErrorKind::SyntaxError => Error::ParseTemplate(err),
            _ => Error::ExecuteTemplate(err),
        })
    }
}
