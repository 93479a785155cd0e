//! Display labels for lambda variants.

use crate::model::LambdaVariant;

pub const GENERATE_LAMBDA: &str = "Generate lambda";
pub const GENERATE_LAMBDA_EXPLICIT_TYPES: &str = "Generate lambda with explicit parameter types";
pub const GENERATE_LAMBDA_NO_PARENTHESES: &str = "Generate lambda without parentheses";
pub const GENERATE_EXPRESSION_LAMBDA: &str = "Generate expression-bodied lambda";
pub const GENERATE_EXPRESSION_LAMBDA_EXPLICIT_TYPES: &str =
    "Generate expression-bodied lambda with explicit parameter types";
pub const GENERATE_EXPRESSION_LAMBDA_NO_PARENTHESES: &str =
    "Generate expression-bodied lambda without parentheses";

/// Keyed by `(expression_bodied, explicit_types, omit_parentheses)`.
///
/// Explicit types take precedence over omitted parentheses, so the two
/// unreachable `(_, true, true)` keys share the explicit-types label.
pub const LABEL_TABLE: [((bool, bool, bool), &str); 8] = [
    ((false, false, false), GENERATE_LAMBDA),
    ((false, false, true), GENERATE_LAMBDA_NO_PARENTHESES),
    ((false, true, false), GENERATE_LAMBDA_EXPLICIT_TYPES),
    ((false, true, true), GENERATE_LAMBDA_EXPLICIT_TYPES),
    ((true, false, false), GENERATE_EXPRESSION_LAMBDA),
    ((true, false, true), GENERATE_EXPRESSION_LAMBDA_NO_PARENTHESES),
    ((true, true, false), GENERATE_EXPRESSION_LAMBDA_EXPLICIT_TYPES),
    ((true, true, true), GENERATE_EXPRESSION_LAMBDA_EXPLICIT_TYPES),
];

pub fn describe(variant: &LambdaVariant) -> &'static str {
    let key = (
        variant.expression_bodied,
        variant.explicit_types,
        variant.omit_parentheses,
    );
    LABEL_TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or(GENERATE_LAMBDA)
}
