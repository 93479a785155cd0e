//! Parameter names for signatures that carry no source-level names.

use crate::model::TypeRef;

/// Lower-camel-cases the type's simple name and appends the parameter index.
///
/// ```
/// use lambda_stubs_core::{naming::synthetic_name, TypeRef};
/// assert_eq!(synthetic_name(&TypeRef::raw("String"), 0), "string0");
/// assert_eq!(synthetic_name(&TypeRef::id("java.net.URLConnection"), 1), "urlConnection1");
/// ```
pub fn synthetic_name(type_ref: &TypeRef, index: usize) -> String {
    let base = lower_camel(type_ref.simple_name());
    let base = if base.is_empty() { "arg".to_string() } else { base };
    format!("{}{}", base, index)
}

/// `URLConnection` -> `urlConnection`, `String` -> `string`, `URL` -> `url`.
///
/// Characters that cannot appear in an identifier are dropped.
fn lower_camel(name: &str) -> String {
    let chars: Vec<char> = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
        .collect();
    let leading_upper = chars.iter().take_while(|c| c.is_uppercase()).count();
    // Keep the last capital of an acronym when it starts the next word.
    let lower_until = if leading_upper > 1 && leading_upper < chars.len() {
        leading_upper - 1
    } else {
        leading_upper.max(1)
    };

    let mut out = String::with_capacity(chars.len());
    for (i, c) in chars.iter().enumerate() {
        if i < lower_until {
            out.extend(c.to_lowercase());
        } else {
            out.push(*c);
        }
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}
