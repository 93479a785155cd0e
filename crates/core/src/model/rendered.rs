use super::{LambdaVariant, TypeRef};
use serde::Serialize;

/// One declared lambda parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LambdaParam {
    pub name: String,
    /// Present only when the variant declares explicit types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_ref: Option<TypeRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// `{}`: the interface method returns nothing.
    EmptyBlock,
    /// A bare placeholder expression.
    ExpressionPlaceholder,
    /// `{ return <placeholder>; }`
    ReturnBlockPlaceholder,
}

/// The syntactic shape of a lambda, ready for a host to turn into text or nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLambda {
    pub variant: LambdaVariant,
    pub params: Vec<LambdaParam>,
    pub parenthesized: bool,
    pub body: BodyKind,
    pub placeholder: String,
    /// Declared return type of the interface method.
    pub return_type: TypeRef,
    pub label: &'static str,
}

impl RenderedLambda {
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }

    /// Types the host must make resolvable (e.g. by importing) before the
    /// fragment is inserted.
    pub fn required_types(&self) -> Vec<&TypeRef> {
        self.params
            .iter()
            .filter_map(|p| p.type_ref.as_ref())
            .collect()
    }
}
