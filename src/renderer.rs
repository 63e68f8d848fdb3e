//! Template rendering for htmlify.
//! Wraps MiniJinja with support for swapping delimiter pairs per render call
//! and for recursive (fixed-point) substitution, so placeholders carried
//! inside injected content are resolved in the same render.

use crate::error::{Error, Result};
use minijinja::syntax::SyntaxConfig;
use minijinja::{Environment, Value};

/// How many times a template is re-rendered before giving up on reaching
/// a fixed point. Content fragments nest at most one level in practice.
const MAX_RENDER_PASSES: usize = 8;

/// A delimiter set for one render call.
///
/// Delimiters are an explicit parameter rather than engine state, so two
/// passes with different marker syntaxes can run in the same process
/// without interfering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub variable: (&'static str, &'static str),
    pub block: (&'static str, &'static str),
    pub comment: (&'static str, &'static str),
}

impl Default for Delimiters {
    /// The engine's standard syntax: `{{ }}`, `{% %}`, `{# #}`.
    fn default() -> Self {
        Self { variable: ("{{", "}}"), block: ("{%", "%}"), comment: ("{#", "#}") }
    }
}

impl Delimiters {
    /// The alternate "curly" pair used for page and packaging rendering:
    /// variables are written `{% expr %}`. Chosen so content fragments can
    /// contain literal occurrences of the standard `{{ }}` markers without
    /// being substituted during this pass.
    pub fn curly() -> Self {
        Self { variable: ("{%", "%}"), block: ("<%", "%>"), comment: ("<#", "#>") }
    }

    fn to_syntax(&self) -> Result<SyntaxConfig> {
        let syntax = SyntaxConfig::builder()
            .variable_delimiters(self.variable.0, self.variable.1)
            .block_delimiters(self.block.0, self.block.1)
            .comment_delimiters(self.comment.0, self.comment.1)
            .build()?;
        Ok(syntax)
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string once with the given context and delimiters.
    fn render(&self, template: &str, context: &Value, delimiters: &Delimiters)
        -> Result<String>;

    /// Renders repeatedly until the output stabilizes, so markers inside
    /// substituted values are resolved too. This is how the base layout
    /// picks up placeholders carried in the injected page content.
    fn render_recursive(
        &self,
        template: &str,
        context: &Value,
        delimiters: &Delimiters,
    ) -> Result<String> {
        let mut current = template.to_string();
        for _ in 0..MAX_RENDER_PASSES {
            let rendered = self.render(&current, context, delimiters)?;
            if rendered == current {
                return Ok(rendered);
            }
            current = rendered;
        }
        Err(Error::TemplateError(format!(
            "template did not stabilize after {} passes",
            MAX_RENDER_PASSES
        )))
    }
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with a default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Rendered files must round-trip byte-for-byte; the engine strips
        // the template's final newline by default.
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
    /// * `Error::MinijinjaError` if the syntax is invalid, the template
    ///   cannot be compiled, or rendering fails
    fn render(&self, template: &str, context: &Value, delimiters: &Delimiters)
        -> Result<String>
    {
        let mut env = self.env.clone();
        env.set_syntax(delimiters.to_syntax()?);
        env.add_template("temp", template).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("temp").map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_default_delimiters() {
        let engine = MiniJinjaRenderer::new();
        let ctx = context! { name => "picker" };
        let out = engine
            .render("Hello {{ name }}!", &ctx, &Delimiters::default())
            .unwrap();
        assert_eq!(out, "Hello picker!");
    }

    #[test]
    fn test_curly_delimiters_leave_default_markers_alone() {
        let engine = MiniJinjaRenderer::new();
        let ctx = context! { name => "picker" };
        let out = engine
            .render("{% name %} uses {{ literal }}", &ctx, &Delimiters::curly())
            .unwrap();
        assert_eq!(out, "picker uses {{ literal }}");
    }

    #[test]
    fn test_trailing_newline_is_kept() {
        let engine = MiniJinjaRenderer::new();
        let ctx = context! { name => "picker" };
        let out = engine
            .render("{{ name }}\n", &ctx, &Delimiters::default())
            .unwrap();
        assert_eq!(out, "picker\n");
    }

    #[test]
    fn test_recursive_render_resolves_injected_markers() {
        let engine = MiniJinjaRenderer::new();
        let ctx = context! { page => "x", content => "Hello {% page %}" };
        let out = engine
            .render_recursive("<body>{% content %}</body>", &ctx, &Delimiters::curly())
            .unwrap();
        assert_eq!(out, "<body>Hello x</body>");
    }
}
