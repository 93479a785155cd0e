use crate::error::{JavaError, Result};
use crate::parser::{FileHeader, JavaParser};
use crate::resolver::{JavaSite, SiteKind};
use lambda_stubs_core::render::DEFAULT_PLACEHOLDER;
use lambda_stubs_core::{BodyKind, FragmentSink, RenderedLambda, ResolvedTarget, TypeRef};
use serde::Serialize;

/// A byte-range replacement in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub new_text: String,
}

/// Everything needed to insert one lambda stub into a Java file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditPlan {
    pub label: String,
    pub lambda: String,
    /// The lambda edit comes first; an import edit follows when needed.
    pub edits: Vec<TextEdit>,
    pub imports: Vec<String>,
}

impl EditPlan {
    pub fn apply(&self, source: &str) -> String {
        let mut edits: Vec<&TextEdit> = self.edits.iter().collect();
        edits.sort_by(|a, b| b.start.cmp(&a.start));
        let mut out = source.to_string();
        for edit in edits {
            out.replace_range(edit.start..edit.end, &edit.new_text);
        }
        out
    }
}

/// The value a non-void stub returns. `null` cannot stand in for a primitive,
/// so the default placeholder becomes that primitive's zero value.
fn result_text(lambda: &RenderedLambda) -> String {
    match &lambda.return_type {
        TypeRef::Raw(name) if lambda.placeholder == DEFAULT_PLACEHOLDER => primitive_default(name)
            .map(str::to_string)
            .unwrap_or_else(|| lambda.placeholder.clone()),
        _ => lambda.placeholder.clone(),
    }
}

fn primitive_default(name: &str) -> Option<&'static str> {
    match name {
        "int" | "short" | "byte" => Some("0"),
        "long" => Some("0L"),
        "float" => Some("0f"),
        "double" => Some("0.0"),
        "boolean" => Some("false"),
        "char" => Some("'\\0'"),
        _ => None,
    }
}

/// Turns rendered lambdas into edits against one Java file.
#[derive(Debug, Clone, Default)]
pub struct JavaEmitter {
    header: FileHeader,
}

impl JavaEmitter {
    pub fn new(header: FileHeader) -> Self {
        Self { header }
    }

    pub fn for_source(parser: &JavaParser, source: &str) -> Result<Self> {
        let tree = parser.parse(source)?;
        Ok(Self::new(parser.extract_header(&tree, source)))
    }

    /// Single-line Java text for `lambda`.
    pub fn lambda_text(lambda: &RenderedLambda) -> String {
        let params: Vec<String> = lambda
            .params
            .iter()
            .map(|p| match &p.type_ref {
                Some(ty) => format!("{} {}", type_text(ty), p.name),
                None => p.name.clone(),
            })
            .collect();
        let params = if lambda.parenthesized {
            format!("({})", params.join(", "))
        } else {
            params.join(", ")
        };
        let body = match lambda.body {
            BodyKind::EmptyBlock => "{}".to_string(),
            BodyKind::ExpressionPlaceholder => result_text(lambda),
            BodyKind::ReturnBlockPlaceholder => format!("{{ return {}; }}", result_text(lambda)),
        };
        format!("{} -> {}", params, body)
    }

    /// Qualified names that must be imported for `lambda` to compile here.
    pub fn required_imports(&self, lambda: &RenderedLambda) -> Vec<String> {
        let mut imports: Vec<String> = Vec::new();
        for ty in lambda.required_types() {
            for fqn in ty.qualified_names() {
                let Some((package, _)) = fqn.rsplit_once('.') else {
                    continue;
                };
                let visible = package == "java.lang"
                    || self.header.package.as_deref() == Some(package)
                    || self.header.imports.iter().any(|i| i.covers(fqn));
                if !visible && !imports.iter().any(|i| i == fqn) {
                    imports.push(fqn.to_string());
                }
            }
        }
        imports
    }

    fn import_edit(&self, imports: &[String]) -> Option<TextEdit> {
        if imports.is_empty() {
            return None;
        }
        let lines: Vec<String> = imports.iter().map(|i| format!("import {};", i)).collect();
        let (at, new_text) = if let Some(last) = self.header.imports.last() {
            (last.end_byte, format!("\n{}", lines.join("\n")))
        } else if let Some(end) = self.header.package_end {
            (end, format!("\n\n{}", lines.join("\n")))
        } else {
            (0, format!("{}\n\n", lines.join("\n")))
        };
        Some(TextEdit {
            start: at,
            end: at,
            new_text,
        })
    }
}

impl FragmentSink for JavaEmitter {
    type Site = JavaSite;
    type Output = EditPlan;
    type Error = JavaError;

    fn emit(&self, lambda: &RenderedLambda, target: &ResolvedTarget<JavaSite>) -> Result<EditPlan> {
        let text = Self::lambda_text(lambda);
        let site = &target.site;
        let new_text = match site.kind {
            SiteKind::Replace => text.clone(),
            SiteKind::Initializer => format!(" = {}", text),
        };

        let imports = self.required_imports(lambda);
        let mut edits = vec![TextEdit {
            start: site.start,
            end: site.end,
            new_text,
        }];
        edits.extend(self.import_edit(&imports));

        Ok(EditPlan {
            label: lambda.label.to_string(),
            lambda: text,
            edits,
            imports,
        })
    }
}

/// Java source text for a type, using simple names for qualified types.
pub fn type_text(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Raw(name) => name.clone(),
        TypeRef::Id(_) => ty.simple_name().to_string(),
        TypeRef::Generic { base, args } => {
            let args: Vec<String> = args.iter().map(type_text).collect();
            format!("{}<{}>", type_text(base), args.join(", "))
        }
        TypeRef::Array {
            element,
            dimensions,
        } => format!("{}{}", type_text(element), "[]".repeat(*dimensions)),
        TypeRef::Wildcard { bound: None, .. } => "?".to_string(),
        TypeRef::Wildcard {
            bound: Some(bound),
            is_upper_bound,
        } => {
            let keyword = if *is_upper_bound { "extends" } else { "super" };
            format!("? {} {}", keyword, type_text(bound))
        }
        TypeRef::Void => "void".to_string(),
        TypeRef::Unknown => "Object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_stubs_core::{LambdaVariant, MethodSignature, render};

    fn text(sig: &MethodSignature, explicit: bool, expr: bool, omit: bool) -> String {
        let lambda = render(sig, &LambdaVariant::new(explicit, expr, omit)).unwrap();
        JavaEmitter::lambda_text(&lambda)
    }

    #[test]
    fn renders_each_body_shape() {
        let runnable = MethodSignature::synthetic(vec![], TypeRef::Void);
        assert_eq!(text(&runnable, false, false, false), "() -> {}");

        let function = MethodSignature::synthetic(vec![TypeRef::raw("String")], TypeRef::raw("R"));
        assert_eq!(text(&function, false, true, true), "string0 -> null");
        assert_eq!(text(&function, false, true, false), "(string0) -> null");
        assert_eq!(
            text(&function, true, false, false),
            "(String string0) -> { return null; }"
        );
    }

    #[test]
    fn primitive_returns_get_a_zero_value() {
        let add = MethodSignature::synthetic(
            vec![TypeRef::raw("int"), TypeRef::raw("int")],
            TypeRef::raw("int"),
        );
        assert_eq!(text(&add, false, true, false), "(int0, int1) -> 0");
        assert_eq!(text(&add, false, false, false), "(int0, int1) -> { return 0; }");

        let test = MethodSignature::synthetic(vec![TypeRef::raw("String")], TypeRef::raw("boolean"));
        assert_eq!(text(&test, false, true, true), "string0 -> false");
        let letter = MethodSignature::synthetic(vec![], TypeRef::raw("char"));
        assert_eq!(text(&letter, false, true, false), "() -> '\\0'");
        let count = MethodSignature::synthetic(vec![], TypeRef::raw("long"));
        assert_eq!(text(&count, false, true, false), "() -> 0L");

        let custom = lambda_stubs_core::render::render_with_placeholder(
            &add,
            &LambdaVariant::new(false, true, false),
            "Integer.MIN_VALUE",
        )
        .unwrap();
        assert_eq!(JavaEmitter::lambda_text(&custom), "(int0, int1) -> Integer.MIN_VALUE");
    }

    #[test]
    fn qualified_types_use_simple_names() {
        let ty = TypeRef::generic(
            TypeRef::id("java.util.List"),
            vec![TypeRef::Wildcard {
                bound: Some(Box::new(TypeRef::id("java.time.Instant"))),
                is_upper_bound: true,
            }],
        );
        assert_eq!(type_text(&ty), "List<? extends Instant>");
        assert_eq!(type_text(&TypeRef::array(TypeRef::raw("int"), 2)), "int[][]");
    }

    #[test]
    fn apply_runs_edits_back_to_front() {
        let plan = EditPlan {
            label: String::new(),
            lambda: String::new(),
            edits: vec![
                TextEdit {
                    start: 6,
                    end: 7,
                    new_text: "xyz".into(),
                },
                TextEdit {
                    start: 0,
                    end: 0,
                    new_text: ">".into(),
                },
            ],
            imports: vec![],
        };
        assert_eq!(plan.apply("hello w!"), ">hello xyz!");
    }
}
