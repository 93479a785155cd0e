//! Enumeration of the lambda forms a signature admits.

use crate::model::{LambdaVariant, MethodSignature};
use std::collections::HashSet;

/// Every combination of the three stylistic axes.
const CANDIDATES: [LambdaVariant; 8] = [
    LambdaVariant::new(false, false, false),
    LambdaVariant::new(false, false, true),
    LambdaVariant::new(false, true, false),
    LambdaVariant::new(false, true, true),
    LambdaVariant::new(true, false, false),
    LambdaVariant::new(true, false, true),
    LambdaVariant::new(true, true, false),
    LambdaVariant::new(true, true, true),
];

/// All variants valid for `signature`.
pub fn enumerate(signature: &MethodSignature) -> HashSet<LambdaVariant> {
    let variants: HashSet<_> = CANDIDATES
        .into_iter()
        .filter(|candidate| candidate.is_valid_for(signature))
        .collect();
    tracing::debug!(
        signature = %signature,
        count = variants.len(),
        "enumerated lambda variants"
    );
    variants
}

/// The same variants as [`enumerate`] in presentation order: block bodies
/// before expression bodies, inferred before explicit types, parenthesized
/// before bare.
pub fn enumerate_ordered(signature: &MethodSignature) -> Vec<LambdaVariant> {
    let mut variants: Vec<_> = enumerate(signature).into_iter().collect();
    variants.sort_by_key(|v| (v.expression_bodied, v.explicit_types, v.omit_parentheses));
    variants
}
