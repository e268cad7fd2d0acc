//! Emit phase - renders the stylesheet.

use eyre::{Result, eyre};
use tracing::debug;

use crate::{
    generator::generate,
    pipeline::{Diagnostic, GenerationContext, Phase},
};

const UTILITIES_DIRECTIVE: &str = "@tailwind utilities;";
const DROPPED_DIRECTIVES: &[&str] = &["@tailwind base;", "@tailwind components;"];

/// Phase that generates rules for the used classes and renders the output.
///
/// With an input stylesheet, the rules replace its utilities directive (or
/// are appended when it has none). Custom properties referenced by the
/// rules but never defined in the input are reported as warnings.
pub struct EmitPhase;

impl Phase for EmitPhase {
    fn name(&self) -> &'static str {
        "emit"
    }

    fn description(&self) -> &'static str {
        "Render CSS rules for the used classes"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let used = ctx
            .used
            .as_ref()
            .ok_or_else(|| eyre!("emit phase requires the used class set"))?;
        let registry = ctx
            .registry
            .as_ref()
            .ok_or_else(|| eyre!("emit phase requires a token registry"))?;
        let scales = ctx
            .scales
            .as_ref()
            .ok_or_else(|| eyre!("emit phase requires scale definitions"))?;

        let stylesheet = generate(used, registry, scales, ctx.manifest.dark_mode);
        let css = stylesheet.render(ctx.style);
        debug!(rules = stylesheet.len(), "rendered stylesheet");

        let output = match &ctx.input {
            Some(input) => {
                for variable in stylesheet.referenced_variables() {
                    if !defines_custom_property(&input.content, variable) {
                        ctx.diagnostics.push(
                            Diagnostic::warning(
                                "emit",
                                format!("custom property '{}' is used but never defined", variable),
                            )
                            .at(input.path.display().to_string()),
                        );
                    }
                }
                splice(&input.content, &css)
            }
            None => css,
        };

        ctx.stylesheet = Some(stylesheet);
        ctx.output = Some(output);
        Ok(())
    }
}

/// Insert generated rules into an input stylesheet.
fn splice(input: &str, generated: &str) -> String {
    let mut output = String::with_capacity(input.len() + generated.len());
    let mut replaced = false;

    for line in input.lines() {
        let directive = line.trim();
        if directive == UTILITIES_DIRECTIVE {
            output.push_str(generated);
            if !generated.is_empty() && !generated.ends_with('\n') {
                output.push('\n');
            }
            replaced = true;
        } else if !DROPPED_DIRECTIVES.contains(&directive) {
            output.push_str(line);
            output.push('\n');
        }
    }

    if !replaced && !generated.is_empty() {
        if !output.trim().is_empty() {
            output.push('\n');
        }
        output.push_str(generated);
    }

    output
}

/// Whether `css` contains a declaration of the custom property `name`.
fn defines_custom_property(css: &str, name: &str) -> bool {
    css.match_indices(name).any(|(pos, _)| {
        let before = css[..pos].chars().next_back();
        let after = &css[pos + name.len()..];
        let starts_cleanly = !before.is_some_and(is_ident_char);
        let ends_cleanly = !after.starts_with(is_ident_char);
        starts_cleanly && ends_cleanly && after.trim_start().starts_with(':')
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}
