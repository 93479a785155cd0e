use super::MethodSignature;
use crate::error::{Result, StubError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One stylistic form of a lambda implementing a functional interface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LambdaVariant {
    /// The parameter list declares each parameter's type.
    pub explicit_types: bool,
    /// The body is a single expression rather than a block.
    pub expression_bodied: bool,
    /// A single inferred parameter is written without parentheses.
    pub omit_parentheses: bool,
}

/// A validity rule a variant must satisfy against its signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantRule {
    ExplicitTypesNeedParentheses,
    OmittedParenthesesNeedSingleParameter,
    NoParametersToType,
    VoidCannotBeExpressionBodied,
}

impl VariantRule {
    pub const ALL: [VariantRule; 4] = [
        VariantRule::ExplicitTypesNeedParentheses,
        VariantRule::OmittedParenthesesNeedSingleParameter,
        VariantRule::NoParametersToType,
        VariantRule::VoidCannotBeExpressionBodied,
    ];

    /// Whether `variant` breaks this rule for `signature`.
    pub fn is_violated(self, variant: &LambdaVariant, signature: &MethodSignature) -> bool {
        match self {
            VariantRule::ExplicitTypesNeedParentheses => {
                variant.explicit_types && variant.omit_parentheses
            }
            VariantRule::OmittedParenthesesNeedSingleParameter => {
                variant.omit_parentheses && (signature.arity() != 1 || variant.explicit_types)
            }
            VariantRule::NoParametersToType => signature.arity() == 0 && variant.explicit_types,
            VariantRule::VoidCannotBeExpressionBodied => {
                signature.returns_void() && variant.expression_bodied
            }
        }
    }
}

impl fmt::Display for VariantRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VariantRule::ExplicitTypesNeedParentheses => {
                "parentheses cannot be omitted if parameter types are explicit"
            }
            VariantRule::OmittedParenthesesNeedSingleParameter => {
                "parentheses can only be omitted around a single inferred parameter"
            }
            VariantRule::NoParametersToType => {
                "a lambda without parameters has no types to make explicit"
            }
            VariantRule::VoidCannotBeExpressionBodied => {
                "lambdas that return void cannot be expression-bodied"
            }
        })
    }
}

impl LambdaVariant {
    pub const fn new(explicit_types: bool, expression_bodied: bool, omit_parentheses: bool) -> Self {
        Self {
            explicit_types,
            expression_bodied,
            omit_parentheses,
        }
    }

    /// Builds a variant, rejecting any combination `signature` cannot express.
    pub fn for_signature(
        signature: &MethodSignature,
        explicit_types: bool,
        expression_bodied: bool,
        omit_parentheses: bool,
    ) -> Result<Self> {
        let variant = Self::new(explicit_types, expression_bodied, omit_parentheses);
        variant.validate(signature)?;
        Ok(variant)
    }

    /// The first rule this variant violates, if any.
    pub fn violation(&self, signature: &MethodSignature) -> Option<VariantRule> {
        VariantRule::ALL
            .into_iter()
            .find(|rule| rule.is_violated(self, signature))
    }

    pub fn is_valid_for(&self, signature: &MethodSignature) -> bool {
        self.violation(signature).is_none()
    }

    pub fn validate(&self, signature: &MethodSignature) -> Result<()> {
        match self.violation(signature) {
            Some(rule) => Err(StubError::InvalidVariant {
                rule,
                variant: *self,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for LambdaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{explicit_types: {}, expression_bodied: {}, omit_parentheses: {}}}",
            self.explicit_types, self.expression_bodied, self.omit_parentheses
        )
    }
}
