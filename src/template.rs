//! `{placeholder}` substitution for reports and engine command lines.
//!
//! - `{name}` is replaced by the value bound to `name` (surrounding whitespace
//!   inside the braces is ignored)
//! - `{{` and `}}` render a literal brace
//! - a lone `}` is passed through unchanged
//!
//! Unknown names are an error rather than an empty substitution, so a typo in a
//! template cannot silently drop content.

use std::collections::HashMap;
use thiserror::Error;

/// Why a template could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },
}

/// Render `template`, substituting every placeholder from `variables`.
///
/// Values are inserted as-is and never re-scanned, so braces inside a value
/// are safe.
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(idx) = rest.find(['{', '}']) {
        rendered.push_str(&rest[..idx]);
        let position = offset + idx;
        let tail = &rest[idx..];

        let consumed = if tail.starts_with("{{") {
            rendered.push('{');
            2
        } else if tail.starts_with("}}") {
            rendered.push('}');
            2
        } else if tail.starts_with('}') {
            rendered.push('}');
            1
        } else {
            let close = tail
                .find('}')
                .ok_or(TemplateError::UnmatchedBrace { position })?;
            let raw_name = &tail[1..close];
            if raw_name.is_empty() {
                return Err(TemplateError::EmptyVariableName { position });
            }
            let name = raw_name.trim();
            let value = variables
                .get(name)
                .ok_or_else(|| TemplateError::UndefinedVariable {
                    name: name.to_string(),
                    position,
                })?;
            rendered.push_str(value);
            close + 1
        };

        rest = &tail[consumed..];
        offset = position + consumed;
    }

    rendered.push_str(rest);
    Ok(rendered)
}

/// Build a variables map from key/value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
