//! Functional interfaces and methods declared in the file being edited.

use crate::catalog;
use crate::parser::{FileHeader, node_text};
use crate::types::{binding_args, parse_type_node, substitute};
use lambda_stubs_core::{MethodSignature, TypeRef};
use std::collections::{HashMap, HashSet};
use tree_sitter::Node;

/// Methods every interface inherits from `Object`; redeclaring them does not
/// count toward the single abstract method.
const OBJECT_METHODS: &[(&str, usize)] = &[("equals", 1), ("hashCode", 0), ("toString", 0)];

#[derive(Debug, Clone, PartialEq)]
pub struct JavaParameter {
    pub name: String,
    pub type_ref: TypeRef,
    pub is_varargs: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JavaMethod {
    pub name: String,
    pub parameters: Vec<JavaParameter>,
    pub return_type: TypeRef,
    pub is_abstract: bool,
    pub is_generic: bool,
}

#[derive(Debug, Clone)]
pub struct InterfaceDecl {
    pub name: String,
    pub type_params: Vec<String>,
    pub methods: Vec<JavaMethod>,
}

impl InterfaceDecl {
    /// The single abstract method, if this interface has exactly one.
    pub fn functional_method(&self) -> Option<&JavaMethod> {
        let mut abstract_methods = self.methods.iter().filter(|m| {
            m.is_abstract
                && !OBJECT_METHODS
                    .iter()
                    .any(|(name, arity)| m.name == *name && m.parameters.len() == *arity)
        });
        let method = abstract_methods.next()?;
        if abstract_methods.next().is_some() || method.is_generic {
            return None;
        }
        Some(method)
    }
}

/// Every interface and method declaration in a compilation unit.
#[derive(Debug, Default)]
pub struct SourceIndex {
    pub interfaces: HashMap<String, InterfaceDecl>,
    pub methods: Vec<JavaMethod>,
    /// Simple names of classes, enums and records declared in the file.
    pub local_types: HashSet<String>,
    /// Without a header (standalone type text) catalog names resolve by
    /// simple name alone.
    pub header: Option<FileHeader>,
}

impl SourceIndex {
    pub fn build(root: Node, source: &str) -> Self {
        let mut index = SourceIndex::default();
        index.visit(root, source);
        index
    }

    pub fn with_header(mut self, header: FileHeader) -> Self {
        self.header = Some(header);
        self
    }

    fn visit(&mut self, node: Node, source: &str) {
        match node.kind() {
            "interface_declaration" => {
                if let Some(decl) = parse_interface(node, source) {
                    self.methods.extend(decl.methods.iter().cloned());
                    self.interfaces.insert(decl.name.clone(), decl);
                }
            }
            "method_declaration" if !is_interface_member(node) => {
                self.methods.push(parse_method(node, source));
            }
            "class_declaration" | "enum_declaration" | "record_declaration"
            | "annotation_type_declaration" => {
                if let Some(name) = node.child_by_field_name("name") {
                    self.local_types.insert(node_text(name, source).to_string());
                }
            }
            _ => {}
        }
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(child, source);
        }
    }

    /// Resolves the functional method behind a declared type, preferring
    /// interfaces declared in this file over the JDK catalog.
    pub fn functional_signature(&self, declared: &TypeRef) -> Option<MethodSignature> {
        let name = declared.simple_name();
        if let Some(decl) = self.interfaces.get(name) {
            let method = decl.functional_method()?;
            let args = binding_args(declared, decl.type_params.len());
            let bindings: HashMap<&str, TypeRef> = decl
                .type_params
                .iter()
                .map(String::as_str)
                .zip(args)
                .collect();
            let signature = MethodSignature::with_names(
                method
                    .parameters
                    .iter()
                    .map(|p| substitute(&p.type_ref, &bindings))
                    .collect(),
                method.parameters.iter().map(|p| p.name.clone()).collect(),
                substitute(&method.return_type, &bindings),
            )
            .ok()?;
            return Some(signature.named(decl.name.as_str(), method.name.as_str()));
        }

        let base = match declared {
            TypeRef::Generic { base, .. } => base.as_ref(),
            other => other,
        };
        let entry = match base {
            TypeRef::Id(fqn) => catalog::by_fqn(fqn)?,
            _ if self.local_types.contains(name) => return None,
            _ => {
                let entry = catalog::by_simple_name(name)?;
                if self
                    .header
                    .as_ref()
                    .is_some_and(|h| !h.makes_visible(entry.fqn))
                {
                    tracing::debug!("{} does not denote {} in this file", name, entry.fqn);
                    return None;
                }
                entry
            }
        };
        Some(entry.signature(declared))
    }

    /// Methods called `name` that accept `arity` arguments.
    pub fn methods_named<'a>(
        &'a self,
        name: &'a str,
        arity: usize,
    ) -> impl Iterator<Item = &'a JavaMethod> + 'a {
        self.methods.iter().filter(move |m| {
            m.name == name
                && (m.parameters.len() == arity
                    || m.parameters.last().is_some_and(|p| p.is_varargs)
                        && arity + 1 >= m.parameters.len())
        })
    }
}

fn is_interface_member(node: Node) -> bool {
    node.parent()
        .is_some_and(|p| p.kind() == "interface_body")
}

fn parse_interface(node: Node, source: &str) -> Option<InterfaceDecl> {
    let name = node_text(node.child_by_field_name("name")?, source).to_string();
    let type_params = node
        .child_by_field_name("type_parameters")
        .map(|tp| type_parameter_names(tp, source))
        .unwrap_or_default();

    let mut methods = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for member in body.named_children(&mut cursor) {
            if member.kind() == "method_declaration" {
                methods.push(parse_method(member, source));
            }
        }
    }
    Some(InterfaceDecl {
        name,
        type_params,
        methods,
    })
}

fn type_parameter_names(node: Node, source: &str) -> Vec<String> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| c.kind() == "type_parameter")
        .filter_map(|tp| {
            let mut inner = tp.walk();
            tp.named_children(&mut inner)
                .find(|c| matches!(c.kind(), "type_identifier" | "identifier"))
                .map(|id| node_text(id, source).to_string())
        })
        .collect()
}

fn parse_method(node: Node, source: &str) -> JavaMethod {
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default();
    let return_type = node
        .child_by_field_name("type")
        .map(|t| parse_type_node(t, source))
        .unwrap_or_default();

    let modifiers = modifier_keywords(node, source);
    let in_interface = is_interface_member(node);
    let has_body = node.child_by_field_name("body").is_some();
    let is_abstract = !has_body
        && (in_interface || modifiers.contains(&"abstract"))
        && !modifiers
            .iter()
            .any(|m| matches!(*m, "default" | "static" | "private"));

    JavaMethod {
        name,
        parameters: extract_method_parameters(node, source),
        return_type,
        is_abstract,
        is_generic: node.child_by_field_name("type_parameters").is_some(),
    }
}

fn modifier_keywords<'a>(node: Node, source: &'a str) -> Vec<&'a str> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find(|c| c.kind() == "modifiers")
        .map(|m| {
            node_text(m, source)
                .split_whitespace()
                .filter(|w| !w.starts_with('@'))
                .collect()
        })
        .unwrap_or_default()
}

/// Parameters of a method declaration, with varargs widened to arrays.
pub(crate) fn extract_method_parameters(node: Node, source: &str) -> Vec<JavaParameter> {
    let Some(params_node) = node.child_by_field_name("parameters") else {
        return vec![];
    };

    let mut result = Vec::new();
    let mut cursor = params_node.walk();
    for child in params_node.named_children(&mut cursor) {
        match child.kind() {
            "formal_parameter" => {
                if let Some(type_node) = child.child_by_field_name("type") {
                    let name = child
                        .child_by_field_name("name")
                        .map(|n| node_text(n, source))
                        .unwrap_or("arg")
                        .to_string();
                    result.push(JavaParameter {
                        name,
                        type_ref: parse_type_node(type_node, source),
                        is_varargs: false,
                    });
                }
            }
            "spread_parameter" => {
                let mut type_ref = TypeRef::Unknown;
                let mut name = "arg".to_string();
                let mut inner = child.walk();
                for part in child.named_children(&mut inner) {
                    match part.kind() {
                        "variable_declarator" => {
                            if let Some(n) = part.child_by_field_name("name") {
                                name = node_text(n, source).to_string();
                            }
                        }
                        "modifiers" | "annotation" | "marker_annotation" => {}
                        _ => type_ref = TypeRef::array(parse_type_node(part, source), 1),
                    }
                }
                result.push(JavaParameter {
                    name,
                    type_ref,
                    is_varargs: true,
                });
            }
            _ => {}
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::JavaParser;

    fn index(source: &str) -> SourceIndex {
        let tree = JavaParser::new().parse(source).unwrap();
        SourceIndex::build(tree.root_node(), source)
    }

    fn header_of(source: &str) -> FileHeader {
        let parser = JavaParser::new();
        let tree = parser.parse(source).unwrap();
        parser.extract_header(&tree, source)
    }

    #[test]
    fn single_abstract_method_is_functional() {
        let idx = index(
            "interface Mapper<A, B> {\n  B map(A input, int position);\n  default void log() {}\n  static Mapper<?, ?> none() { return null; }\n  boolean equals(Object other);\n}\n",
        );
        let decl = &idx.interfaces["Mapper"];
        assert_eq!(decl.type_params, vec!["A", "B"]);
        let method = decl.functional_method().unwrap();
        assert_eq!(method.name, "map");
        assert_eq!(method.parameters.len(), 2);
    }

    #[test]
    fn two_abstract_methods_are_not_functional() {
        let idx = index("interface Pair { void a(); void b(); }");
        assert!(idx.interfaces["Pair"].functional_method().is_none());
        assert!(idx.functional_signature(&TypeRef::raw("Pair")).is_none());
    }

    #[test]
    fn source_signature_keeps_names_and_binds_generics() {
        let idx = index("interface Mapper<A, B> { B map(A input); }");
        let declared = TypeRef::generic(
            TypeRef::raw("Mapper"),
            vec![TypeRef::raw("String"), TypeRef::raw("Integer")],
        );
        let sig = idx.functional_signature(&declared).unwrap();
        assert_eq!(sig.parameter_names(), Some(&["input".to_string()][..]));
        assert_eq!(sig.parameter_types(), &[TypeRef::raw("String")]);
        assert_eq!(sig.return_type(), &TypeRef::raw("Integer"));
        assert_eq!(sig.interface_name(), Some("Mapper"));
    }

    #[test]
    fn catalog_names_need_an_import() {
        let supplier = TypeRef::generic(TypeRef::raw("Supplier"), vec![TypeRef::raw("String")]);

        let imported = index("import java.util.function.*;\nclass A {}").with_header(header_of(
            "import java.util.function.*;\nclass A {}",
        ));
        assert!(imported.functional_signature(&supplier).is_some());

        let missing = index("class A {}").with_header(header_of("class A {}"));
        assert!(missing.functional_signature(&supplier).is_none());
        assert!(
            missing
                .functional_signature(&TypeRef::raw("Runnable"))
                .is_some()
        );
    }

    #[test]
    fn local_classes_shadow_catalog_names() {
        let source = "import java.util.function.*;\nclass Supplier<T> { T get() { return null; } }";
        let idx = index(source).with_header(header_of(source));
        assert!(idx.functional_signature(&TypeRef::raw("Supplier")).is_none());
    }

    #[test]
    fn class_methods_are_indexed_with_varargs() {
        let idx = index("class C { void run(Runnable r, String... rest) {} }");
        let run: Vec<_> = idx.methods_named("run", 3).collect();
        assert_eq!(run.len(), 1);
        assert!(run[0].parameters[1].is_varargs);
        assert_eq!(
            run[0].parameters[1].type_ref,
            TypeRef::array(TypeRef::raw("String"), 1)
        );
    }
}
