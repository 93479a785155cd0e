use crate::parser::node_text;
use lambda_stubs_core::TypeRef;
use std::collections::HashMap;
use tree_sitter::Node;

/// Converts a tree-sitter type node into a [`TypeRef`].
///
/// Simple identifiers stay [`TypeRef::Raw`] since they are already visible in
/// the file they were read from; dotted names become [`TypeRef::Id`] so an
/// explicit-types lambda can import them and use the simple name.
pub(crate) fn parse_type_node(node: Node, source: &str) -> TypeRef {
    match node.kind() {
        "generic_type" => {
            let mut base = TypeRef::Unknown;
            let mut args = Vec::new();
            let mut cursor = node.walk();
            for child in node.named_children(&mut cursor) {
                match child.kind() {
                    "type_arguments" => {
                        let mut args_cursor = child.walk();
                        for arg in child.named_children(&mut args_cursor) {
                            if !is_annotation(arg) {
                                args.push(parse_type_node(arg, source));
                            }
                        }
                    }
                    "type_identifier" | "scoped_type_identifier" => {
                        base = parse_type_node(child, source);
                    }
                    _ => {}
                }
            }
            TypeRef::generic(base, args)
        }
        "array_type" => {
            let element = node
                .child_by_field_name("element")
                .map(|e| parse_type_node(e, source))
                .unwrap_or_default();
            let dimensions = node
                .child_by_field_name("dimensions")
                .map(|d| node_text(d, source).matches('[').count())
                .unwrap_or(1);
            TypeRef::array(element, dimensions)
        }
        "wildcard" => {
            let mut bound = None;
            let mut is_upper = true;
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                match child.kind() {
                    "super" => is_upper = false,
                    "extends" | "?" => {}
                    _ if child.is_named() && !is_annotation(child) => {
                        bound = Some(Box::new(parse_type_node(child, source)));
                    }
                    _ => {}
                }
            }
            TypeRef::Wildcard {
                bound,
                is_upper_bound: is_upper,
            }
        }
        "annotated_type" => {
            let mut cursor = node.walk();
            node.named_children(&mut cursor)
                .filter(|c| !is_annotation(*c))
                .last()
                .map(|inner| parse_type_node(inner, source))
                .unwrap_or_default()
        }
        "void_type" => TypeRef::Void,
        "scoped_type_identifier" => {
            let text: String = node_text(node, source).split_whitespace().collect();
            if text.is_empty() {
                TypeRef::Unknown
            } else {
                TypeRef::Id(text)
            }
        }
        _ => {
            let text = node_text(node, source).trim();
            if text.is_empty() {
                TypeRef::Unknown
            } else {
                TypeRef::raw(text)
            }
        }
    }
}

fn is_annotation(node: Node) -> bool {
    matches!(node.kind(), "annotation" | "marker_annotation")
}

/// Type arguments of a declared type, with wildcards collapsed to their bound
/// and missing arguments defaulting to `Object`.
pub(crate) fn binding_args(declared: &TypeRef, arity: usize) -> Vec<TypeRef> {
    let args: &[TypeRef] = match declared {
        TypeRef::Generic { args, .. } => args,
        _ => &[],
    };
    (0..arity)
        .map(|i| match args.get(i) {
            Some(TypeRef::Wildcard {
                bound: Some(bound), ..
            }) => (**bound).clone(),
            Some(TypeRef::Wildcard { bound: None, .. }) | None => TypeRef::raw("Object"),
            Some(arg) => arg.clone(),
        })
        .collect()
}

/// Replaces type variables named in `bindings` throughout `ty`.
pub(crate) fn substitute(ty: &TypeRef, bindings: &HashMap<&str, TypeRef>) -> TypeRef {
    match ty {
        TypeRef::Raw(name) => bindings
            .get(name.as_str())
            .cloned()
            .unwrap_or_else(|| ty.clone()),
        TypeRef::Generic { base, args } => TypeRef::Generic {
            base: base.clone(),
            args: args.iter().map(|a| substitute(a, bindings)).collect(),
        },
        TypeRef::Array {
            element,
            dimensions,
        } => TypeRef::Array {
            element: Box::new(substitute(element, bindings)),
            dimensions: *dimensions,
        },
        TypeRef::Wildcard {
            bound,
            is_upper_bound,
        } => TypeRef::Wildcard {
            bound: bound.as_ref().map(|b| Box::new(substitute(b, bindings))),
            is_upper_bound: *is_upper_bound,
        },
        _ => ty.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcards_bind_to_their_bound() {
        let declared = TypeRef::generic(
            TypeRef::raw("Function"),
            vec![
                TypeRef::Wildcard {
                    bound: Some(Box::new(TypeRef::raw("Number"))),
                    is_upper_bound: false,
                },
                TypeRef::Wildcard {
                    bound: None,
                    is_upper_bound: true,
                },
            ],
        );
        assert_eq!(
            binding_args(&declared, 2),
            vec![TypeRef::raw("Number"), TypeRef::raw("Object")]
        );
        assert_eq!(binding_args(&TypeRef::raw("Function"), 1), vec![TypeRef::raw("Object")]);
    }

    #[test]
    fn substitution_reaches_nested_positions() {
        let bindings = HashMap::from([("T", TypeRef::raw("String"))]);
        let ty = TypeRef::generic(
            TypeRef::raw("List"),
            vec![TypeRef::array(TypeRef::raw("T"), 1)],
        );
        assert_eq!(
            substitute(&ty, &bindings),
            TypeRef::generic(
                TypeRef::raw("List"),
                vec![TypeRef::array(TypeRef::raw("String"), 1)],
            )
        );
    }
}
