//! Tera-backed substitution templates.
//!
//! Parsing and execution are separate steps so callers can tell a malformed
//! template apart from one that references a value the context lacks.
//!
//! Field references may be written with a leading dot, `{{.ProjectName}}`,
//! as well as plain `{{ ProjectName }}`; the dotted form is rewritten before
//! Tera sees the source.

use std::borrow::Cow;
use std::io::Write;

use tera::Tera;

use crate::context::TemplateContext;
use crate::error::RenderError;

/// A template that has been parsed and is ready to execute.
pub struct ParsedTemplate {
    name: String,
    tera: Tera,
}

impl ParsedTemplate {
    /// Parse `source` as a template registered under `name`.
    pub fn parse(name: &str, source: &str) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(name, &strip_field_dots(source))?;
        Ok(ParsedTemplate {
            name: name.to_string(),
            tera,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Execute against `ctx`, streaming the output into `out`.
    ///
    /// Referencing a variable absent from the context is an error.
    pub fn render_to<W: Write>(&self, ctx: &TemplateContext, out: W) -> Result<(), RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        self.tera.render_to(&self.name, &tera_ctx, out)?;
        Ok(())
    }

    /// Execute against `ctx` into a string.
    pub fn render(&self, ctx: &TemplateContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(&self.name, &tera_ctx)?)
    }
}

/// Rewrite `{{.Field}}` / `{{ .Field }}` / `{{- .Field }}` to drop the dot.
fn strip_field_dots(source: &str) -> Cow<'_, str> {
    if !source.contains("{{") {
        return Cow::Borrowed(source);
    }
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(open) = rest.find("{{") {
        let after = open + 2;
        out.push_str(&rest[..after]);
        let tail = &rest[after..];
        let body = tail.trim_start_matches(|c: char| c == '-' || c.is_whitespace());
        out.push_str(&tail[..tail.len() - body.len()]);
        rest = match body.strip_prefix('.') {
            Some(field) if field.starts_with(|c: char| c.is_alphabetic() || c == '_') => field,
            _ => body,
        };
    }
    out.push_str(rest);
    Cow::Owned(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
