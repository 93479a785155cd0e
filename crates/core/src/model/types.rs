use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a type as it appears in a functional interface signature.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash, Default)]
#[serde(tag = "kind", content = "data")]
pub enum TypeRef {
    /// Primitive or unresolved type name as written (e.g., "int", "String", "T")
    Raw(String),

    /// Resolved fully qualified type name (e.g., "java.time.Instant")
    Id(String),

    /// Generic instantiation (e.g., List<String>)
    Generic {
        base: Box<TypeRef>,
        args: Vec<TypeRef>,
    },

    /// Array type (e.g., String[])
    Array {
        element: Box<TypeRef>,
        dimensions: usize,
    },

    /// Wildcard type (e.g., ? extends Number)
    Wildcard {
        bound: Option<Box<TypeRef>>,
        is_upper_bound: bool, // true: extends, false: super
    },

    /// The reserved "no value" return type.
    Void,

    #[default]
    Unknown,
}

impl TypeRef {
    pub fn raw(s: impl Into<String>) -> Self {
        TypeRef::Raw(s.into())
    }

    pub fn id(s: impl Into<String>) -> Self {
        TypeRef::Id(s.into())
    }

    pub fn generic(base: TypeRef, args: Vec<TypeRef>) -> Self {
        TypeRef::Generic {
            base: Box::new(base),
            args,
        }
    }

    pub fn array(element: TypeRef, dimensions: usize) -> Self {
        TypeRef::Array {
            element: Box::new(element),
            dimensions,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeRef::Void)
    }

    /// The unqualified name of the outermost named type.
    ///
    /// Unbounded wildcards and unknown types fall back to `Object`, the
    /// implicit upper bound of every reference type.
    pub fn simple_name(&self) -> &str {
        match self {
            TypeRef::Raw(name) | TypeRef::Id(name) => {
                name.rsplit('.').next().unwrap_or(name.as_str())
            }
            TypeRef::Generic { base, .. } => base.simple_name(),
            TypeRef::Array { element, .. } => element.simple_name(),
            TypeRef::Wildcard {
                bound: Some(bound), ..
            } => bound.simple_name(),
            TypeRef::Wildcard { bound: None, .. } | TypeRef::Unknown => "Object",
            TypeRef::Void => "void",
        }
    }

    /// Collects every fully qualified name reachable from this type.
    pub fn qualified_names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_qualified(&mut out);
        out
    }

    fn collect_qualified<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            TypeRef::Id(fqn) => out.push(fqn),
            TypeRef::Generic { base, args } => {
                base.collect_qualified(out);
                for arg in args {
                    arg.collect_qualified(out);
                }
            }
            TypeRef::Array { element, .. } => element.collect_qualified(out),
            TypeRef::Wildcard {
                bound: Some(bound), ..
            } => bound.collect_qualified(out),
            _ => {}
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Raw(name) | TypeRef::Id(name) => f.write_str(name),
            TypeRef::Generic { base, args } => {
                write!(f, "{}<", base)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
            TypeRef::Array {
                element,
                dimensions,
            } => {
                write!(f, "{}", element)?;
                for _ in 0..*dimensions {
                    f.write_str("[]")?;
                }
                Ok(())
            }
            TypeRef::Wildcard {
                bound: None, ..
            } => f.write_str("?"),
            TypeRef::Wildcard {
                bound: Some(bound),
                is_upper_bound,
            } => {
                let keyword = if *is_upper_bound { "extends" } else { "super" };
                write!(f, "? {} {}", keyword, bound)
            }
            TypeRef::Void => f.write_str("void"),
            TypeRef::Unknown => f.write_str("?unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name_strips_qualification_and_structure() {
        assert_eq!(TypeRef::id("java.time.Instant").simple_name(), "Instant");
        assert_eq!(
            TypeRef::generic(TypeRef::raw("List"), vec![TypeRef::raw("String")]).simple_name(),
            "List"
        );
        assert_eq!(TypeRef::array(TypeRef::raw("byte"), 2).simple_name(), "byte");
        assert_eq!(
            TypeRef::Wildcard {
                bound: None,
                is_upper_bound: true
            }
            .simple_name(),
            "Object"
        );
    }

    #[test]
    fn qualified_names_walk_nested_types() {
        let ty = TypeRef::generic(
            TypeRef::id("java.util.Map"),
            vec![
                TypeRef::raw("String"),
                TypeRef::Wildcard {
                    bound: Some(Box::new(TypeRef::id("java.time.Instant"))),
                    is_upper_bound: false,
                },
            ],
        );
        assert_eq!(ty.qualified_names(), vec!["java.util.Map", "java.time.Instant"]);
        assert_eq!(ty.to_string(), "java.util.Map<String, ? super java.time.Instant>");
    }
}
