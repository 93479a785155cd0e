use crate::error::{JavaError, Result};
use tree_sitter::{Node, Parser, Tree};

/// An `import` line of a compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    /// Imported name without the trailing `.*`.
    pub path: String,
    pub is_static: bool,
    pub is_wildcard: bool,
    pub end_byte: usize,
}

impl ImportDecl {
    /// Whether this import makes `fqn` visible by its simple name.
    pub fn covers(&self, fqn: &str) -> bool {
        if self.is_static {
            return false;
        }
        if self.is_wildcard {
            fqn.rsplit_once('.')
                .is_some_and(|(package, _)| package == self.path)
        } else {
            self.path == fqn
        }
    }
}

/// Package and imports of a compilation unit.
#[derive(Debug, Clone, Default)]
pub struct FileHeader {
    pub package: Option<String>,
    pub package_end: Option<usize>,
    pub imports: Vec<ImportDecl>,
}

impl FileHeader {
    /// Whether the simple name of `fqn` denotes `fqn` in this file.
    ///
    /// A single-type import of another type with the same simple name wins
    /// over `java.lang`, the file's package and on-demand imports.
    pub fn makes_visible(&self, fqn: &str) -> bool {
        let Some((package, simple)) = fqn.rsplit_once('.') else {
            return false;
        };
        let shadowed = self.imports.iter().any(|i| {
            !i.is_static
                && !i.is_wildcard
                && i.path != fqn
                && i.path.rsplit('.').next() == Some(simple)
        });
        if shadowed {
            return false;
        }
        package == "java.lang"
            || self.package.as_deref() == Some(package)
            || self.imports.iter().any(|i| i.covers(fqn))
    }
}

#[derive(Clone)]
pub struct JavaParser {
    pub language: tree_sitter::Language,
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_java::LANGUAGE.into(),
        }
    }

    pub fn parse(&self, source: &str) -> Result<Tree> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| JavaError::Language(e.to_string()))?;
        parser.parse(source, None).ok_or(JavaError::Parse)
    }

    pub fn extract_header(&self, tree: &Tree, source: &str) -> FileHeader {
        let mut header = FileHeader::default();
        let root = tree.root_node();
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            match child.kind() {
                "package_declaration" => {
                    header.package = qualified_name_child(child, source);
                    header.package_end = Some(child.end_byte());
                }
                "import_declaration" => {
                    let Some(path) = qualified_name_child(child, source) else {
                        continue;
                    };
                    let mut inner = child.walk();
                    let mut is_static = false;
                    let mut is_wildcard = false;
                    for part in child.children(&mut inner) {
                        match part.kind() {
                            "static" => is_static = true,
                            "asterisk" => is_wildcard = true,
                            _ => {}
                        }
                    }
                    header.imports.push(ImportDecl {
                        path,
                        is_static,
                        is_wildcard,
                        end_byte: child.end_byte(),
                    });
                }
                _ => {}
            }
        }
        header
    }
}

fn qualified_name_child(node: Node, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))
        .and_then(|c| c.utf8_text(source.as_bytes()).ok())
        .map(|text| text.split_whitespace().collect())
}

pub(crate) fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lists_package_and_imports() {
        let source = "package com.example;\n\nimport java.util.List;\nimport static java.lang.Math.max;\nimport java.time.*;\n\nclass A {}\n";
        let parser = JavaParser::new();
        let tree = parser.parse(source).unwrap();
        let header = parser.extract_header(&tree, source);

        assert_eq!(header.package.as_deref(), Some("com.example"));
        assert_eq!(header.imports.len(), 3);
        assert!(header.imports[0].covers("java.util.List"));
        assert!(!header.imports[1].covers("java.lang.Math"));
        assert!(header.imports[2].is_wildcard);
        assert!(header.imports[2].covers("java.time.Instant"));
        assert!(!header.imports[2].covers("java.time.format.DateTimeFormatter"));

        assert!(header.makes_visible("java.util.List"));
        assert!(header.makes_visible("java.time.Instant"));
        assert!(header.makes_visible("java.lang.Runnable"));
        assert!(!header.makes_visible("java.util.function.Supplier"));
    }
}
