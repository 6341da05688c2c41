//! Format string rendering
//!
//! Placeholder syntax:
//! - `{}`  next unused argument, lowest index first
//! - `{N}` argument `N` (base-10, ASCII digits only)
//! - `{{`  literal `{`
//! - `}}`  literal `}`
//!
//! Any other `}` is an error. The scan runs left to right over the string and
//! keeps one usage mask for the whole render, so auto-indexing skips every
//! slot already taken by an explicit or earlier auto placeholder. Explicit
//! placeholders may reference a slot more than once.

use crate::error::FormatError;

/// Render `format_string`, substituting placeholders with `args`
///
/// Returns the whole rendered string or an error, never a partial result.
///
/// # Example
///
/// ```
/// use jac_print::jac::render;
///
/// let args = ["x".to_string(), "y".to_string()];
/// assert_eq!(render("{1} {} {0}", &args).unwrap(), "y x x");
/// assert_eq!(render("{{{}}}", &args).unwrap(), "{x}");
/// ```
pub fn render(format_string: &str, args: &[String]) -> Result<String, FormatError> {
    let mut used = vec![false; args.len()];
    let mut output = String::with_capacity(format_string.len());
    let mut cursor = 0;

    loop {
        let rest = &format_string[cursor..];

        let Some(brace) = rest.find(['{', '}']) else {
            output.push_str(rest);
            return Ok(output);
        };

        // Braces are ASCII, so every offset below lands on a char boundary
        let after = &rest[brace + 1..];

        if rest.as_bytes()[brace] == b'{' {
            if after.starts_with('{') {
                output.push_str(&rest[..=brace]);
                cursor += brace + 2;
                continue;
            }

            let body_len = after
                .find('}')
                .ok_or(FormatError::UnclosedPlaceholder(cursor + brace))?;
            let index = resolve_index(&after[..body_len], &mut used)?;

            output.push_str(&rest[..brace]);
            output.push_str(&args[index]);
            cursor += brace + 1 + body_len + 1;
        } else {
            if !after.starts_with('}') {
                return Err(FormatError::UnexpectedClosingBrace);
            }

            output.push_str(&rest[..=brace]);
            cursor += brace + 2;
        }
    }
}

/// Resolve a placeholder body to an argument index and mark it used
fn resolve_index(body: &str, used: &mut [bool]) -> Result<usize, FormatError> {
    if used.is_empty() {
        return Err(FormatError::NoArguments);
    }

    let index = if body.is_empty() {
        used.iter().position(|taken| !taken).unwrap_or(used.len())
    } else {
        parse_index(body)?
    };

    if index >= used.len() {
        return Err(FormatError::IndexOutOfBounds {
            index,
            len: used.len(),
        });
    }

    used[index] = true;

    Ok(index)
}

fn parse_index(body: &str) -> Result<usize, FormatError> {
    // usize::from_str alone would also take a leading '+'
    if !body.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::ExpectedInteger(body.to_string()));
    }

    body.parse()
        .map_err(|_| FormatError::ExpectedInteger(body.to_string()))
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
