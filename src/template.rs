//! Placeholder grammar and interpolation over form fields.
//!
//! Clause templates interleave literal text with `${identifier}` tokens,
//! where `identifier` is one or more ASCII word characters. There is no
//! escape for a literal `${...}` sequence.

use crate::fields::{FieldKey, FormFields};

/// One parsed template segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateToken<'a> {
    /// Verbatim text.
    Literal(&'a str),
    /// Placeholder identifier, without the `${` / `}` delimiters.
    Placeholder(&'a str),
}

/// Parse a clause template into literal and placeholder tokens.
///
/// A `${` not followed by one or more `[A-Za-z0-9_]` characters and a
/// closing `}` stays literal text.
pub fn parse_template(template: &str) -> Vec<TemplateToken<'_>> {
    let bytes = template.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'$' && bytes.get(i + 1) == Some(&b'{') {
            let ident_start = i + 2;
            let mut ident_end = ident_start;
            while ident_end < bytes.len()
                && (bytes[ident_end].is_ascii_alphanumeric() || bytes[ident_end] == b'_')
            {
                ident_end += 1;
            }
            if ident_end > ident_start && bytes.get(ident_end) == Some(&b'}') {
                if literal_start < i {
                    tokens.push(TemplateToken::Literal(&template[literal_start..i]));
                }
                tokens.push(TemplateToken::Placeholder(&template[ident_start..ident_end]));
                i = ident_end + 1;
                literal_start = i;
                continue;
            }
        }
        i += 1;
    }

    if literal_start < template.len() {
        tokens.push(TemplateToken::Literal(&template[literal_start..]));
    }
    tokens
}

/// Substitute every placeholder in `template` with its field value.
///
/// Unknown identifiers resolve to the empty string rather than staying
/// literal or failing. Substituted values are rendered once and never
/// re-scanned for placeholders.
pub fn interpolate(template: &str, fields: &FormFields) -> String {
    let mut out = String::with_capacity(template.len());
    for token in parse_template(template) {
        match token {
            TemplateToken::Literal(text) => out.push_str(text),
            TemplateToken::Placeholder(identifier) => match FieldKey::parse(identifier) {
                Some(key) => out.push_str(fields.get(key)),
                None => {
                    log::debug!("placeholder `{identifier}` has no matching field, rendered empty");
                }
            },
        }
    }
    out
}
