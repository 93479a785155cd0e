use crate::error::Result;
use crate::label;
use crate::model::{BodyKind, LambdaParam, LambdaVariant, MethodSignature, RenderedLambda};
use crate::naming::synthetic_name;

/// The placeholder standing in for a lambda's result when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "null";

/// Renders `variant` for `signature` with the default placeholder.
pub fn render(signature: &MethodSignature, variant: &LambdaVariant) -> Result<RenderedLambda> {
    render_with_placeholder(signature, variant, DEFAULT_PLACEHOLDER)
}

pub fn render_with_placeholder(
    signature: &MethodSignature,
    variant: &LambdaVariant,
    placeholder: &str,
) -> Result<RenderedLambda> {
    variant.validate(signature)?;

    let params = signature
        .parameter_types()
        .iter()
        .enumerate()
        .map(|(index, type_ref)| {
            let name = signature
                .parameter_names()
                .and_then(|names| names.get(index))
                .cloned()
                .unwrap_or_else(|| synthetic_name(type_ref, index));
            LambdaParam {
                name,
                type_ref: variant.explicit_types.then(|| type_ref.clone()),
            }
        })
        .collect();

    let body = if signature.returns_void() {
        BodyKind::EmptyBlock
    } else if variant.expression_bodied {
        BodyKind::ExpressionPlaceholder
    } else {
        BodyKind::ReturnBlockPlaceholder
    };

    Ok(RenderedLambda {
        variant: *variant,
        params,
        parenthesized: !variant.omit_parentheses,
        body,
        placeholder: placeholder.to_string(),
        return_type: signature.return_type().clone(),
        label: label::describe(variant),
    })
}
