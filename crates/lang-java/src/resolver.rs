use crate::error::{JavaError, Result};
use crate::interfaces::SourceIndex;
use crate::parser::{JavaParser, node_text};
use crate::types::parse_type_node;
use lambda_stubs_core::{MethodSignature, ResolvedTarget, SignatureResolver, TypeRef};
use serde::Serialize;
use tree_sitter::Node;

/// Ancestors past which a cursor no longer belongs to an enclosing site.
const SCOPE_BOUNDARIES: &[&str] = &[
    "block",
    "class_body",
    "interface_body",
    "enum_body",
    "program",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteKind {
    /// The lambda replaces `start..end` (an argument, or an existing initializer).
    Replace,
    /// The declarator has no initializer; ` = <lambda>` is inserted at `start`.
    Initializer,
}

/// Where in a Java file the generated lambda goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JavaSite {
    pub start: usize,
    pub end: usize,
    pub kind: SiteKind,
    /// The declared functional interface as written, e.g. `Function<String, Integer>`.
    pub expected_type: String,
}

#[derive(Clone, Default)]
pub struct JavaResolver {
    parser: JavaParser,
}

impl JavaResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parser(&self) -> &JavaParser {
        &self.parser
    }

    /// Resolves a standalone type such as `BiFunction<String, Integer, Long>`
    /// against the JDK catalog.
    pub fn resolve_type_text(&self, type_text: &str) -> Result<Option<MethodSignature>> {
        let wrapper = format!("class __LambdaStubs {{ {} __target; }}", type_text);
        let tree = self.parser.parse(&wrapper)?;
        let root = tree.root_node();
        let Some(field) = find_first(root, "field_declaration") else {
            return Ok(None);
        };
        let Some(type_node) = field.child_by_field_name("type") else {
            return Ok(None);
        };
        let declared = parse_type_node(type_node, &wrapper);
        Ok(SourceIndex::default().functional_signature(&declared))
    }

    fn site_at(
        &self,
        node: Node,
        offset: usize,
        source: &str,
        index: &SourceIndex,
    ) -> Option<ResolvedTarget<JavaSite>> {
        let mut current = Some(node);
        while let Some(n) = current {
            match n.kind() {
                "argument_list" => return argument_site(n, offset, source, index),
                "variable_declarator" => return declarator_site(n, source, index),
                "local_variable_declaration" | "field_declaration" => {
                    let mut cursor = n.walk();
                    let declarator = n
                        .children_by_field_name("declarator", &mut cursor)
                        .filter(|d| d.start_byte() <= offset)
                        .last()?;
                    return declarator_site(declarator, source, index);
                }
                kind if SCOPE_BOUNDARIES.contains(&kind) => return None,
                _ => {}
            }
            current = n.parent();
        }
        None
    }
}

impl SignatureResolver for JavaResolver {
    type Site = JavaSite;
    type Error = JavaError;

    fn resolve(&self, source: &str, offset: usize) -> Result<Option<ResolvedTarget<JavaSite>>> {
        if offset > source.len() {
            return Err(JavaError::OffsetOutOfRange {
                offset,
                len: source.len(),
            });
        }
        let tree = self.parser.parse(source)?;
        let root = tree.root_node();
        let index =
            SourceIndex::build(root, source).with_header(self.parser.extract_header(&tree, source));
        let Some(node) = root.descendant_for_byte_range(offset, offset) else {
            return Ok(None);
        };

        let target = self.site_at(node, offset, source, &index);
        match &target {
            Some(t) => tracing::debug!(
                "Resolved lambda site {}..{} expecting {} ({})",
                t.site.start,
                t.site.end,
                t.site.expected_type,
                t.signature
            ),
            None => tracing::debug!("No lambda site at offset {}", offset),
        }
        Ok(target)
    }
}

fn declarator_site(
    declarator: Node,
    source: &str,
    index: &SourceIndex,
) -> Option<ResolvedTarget<JavaSite>> {
    let declaration = declarator.parent()?;
    let type_node = declaration.child_by_field_name("type")?;
    let declared = parse_type_node(type_node, source);
    let signature = index.functional_signature(&declared)?;

    let (start, end, kind) = match declarator.child_by_field_name("value") {
        Some(value) => (value.start_byte(), value.end_byte(), SiteKind::Replace),
        None => (declarator.end_byte(), declarator.end_byte(), SiteKind::Initializer),
    };
    Some(ResolvedTarget {
        signature,
        site: JavaSite {
            start,
            end,
            kind,
            expected_type: declared.to_string(),
        },
    })
}

fn argument_site(
    list: Node,
    offset: usize,
    source: &str,
    index: &SourceIndex,
) -> Option<ResolvedTarget<JavaSite>> {
    let invocation = list.parent().filter(|p| p.kind() == "method_invocation")?;
    let method_name = node_text(invocation.child_by_field_name("name")?, source);

    let mut cursor = list.walk();
    let args: Vec<Node> = list
        .named_children(&mut cursor)
        .filter(|a| !a.kind().ends_with("comment"))
        .collect();

    let (position, arity, start, end) = if args.is_empty() {
        (0, 1, offset, offset)
    } else {
        let (position, arg) = args
            .iter()
            .enumerate()
            .find(|(_, a)| a.start_byte() <= offset && offset <= a.end_byte())?;
        (position, args.len(), arg.start_byte(), arg.end_byte())
    };

    let (declared, signature) = index
        .methods_named(method_name, arity)
        .filter_map(|method| parameter_type(&method.parameters, position))
        .find_map(|declared| {
            index
                .functional_signature(&declared)
                .map(|signature| (declared, signature))
        })?;

    Some(ResolvedTarget {
        signature,
        site: JavaSite {
            start,
            end,
            kind: SiteKind::Replace,
            expected_type: declared.to_string(),
        },
    })
}

/// The declared type at argument `position`, unwrapping a trailing varargs array.
fn parameter_type(parameters: &[crate::interfaces::JavaParameter], position: usize) -> Option<TypeRef> {
    let last = parameters.last()?;
    match parameters.get(position) {
        Some(p) if !p.is_varargs => Some(p.type_ref.clone()),
        _ if last.is_varargs && position + 1 >= parameters.len() => match &last.type_ref {
            TypeRef::Array { element, .. } => Some((**element).clone()),
            other => Some(other.clone()),
        },
        _ => None,
    }
}

fn find_first<'a>(node: Node<'a>, kind: &str) -> Option<Node<'a>> {
    if node.kind() == kind {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'a>> = node.named_children(&mut cursor).collect();
    children.into_iter().find_map(|child| find_first(child, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_standalone_type_text() {
        let resolver = JavaResolver::new();
        let sig = resolver
            .resolve_type_text("BiFunction<String, Integer, Long>")
            .unwrap()
            .unwrap();
        assert_eq!(sig.arity(), 2);
        assert_eq!(sig.return_type(), &TypeRef::raw("Long"));

        assert!(resolver.resolve_type_text("String").unwrap().is_none());
    }

    #[test]
    fn varargs_parameter_unwraps_element() {
        let params = vec![crate::interfaces::JavaParameter {
            name: "tasks".into(),
            type_ref: TypeRef::array(TypeRef::raw("Runnable"), 1),
            is_varargs: true,
        }];
        assert_eq!(parameter_type(&params, 2), Some(TypeRef::raw("Runnable")));
    }
}
