use lambda_stubs_core::{ResolvedTarget, SignatureResolver};
use lambda_stubs_java::{JavaResolver, JavaSite};

/// Marks the cursor position inside inline test sources.
pub const CURSOR: &str = "/*|*/";

/// Strips the cursor marker and returns the clean source with the marker's offset.
pub fn split_cursor(marked: &str) -> (String, usize) {
    let offset = marked
        .find(CURSOR)
        .unwrap_or_else(|| panic!("missing cursor marker in {:?}", marked));
    (marked.replacen(CURSOR, "", 1), offset)
}

#[allow(dead_code)]
pub fn resolve_marked(marked: &str) -> (String, Option<ResolvedTarget<JavaSite>>) {
    let (source, offset) = split_cursor(marked);
    let target = JavaResolver::new()
        .resolve(&source, offset)
        .expect("resolution should not fail");
    (source, target)
}
