use crate::model::{LambdaVariant, VariantRule};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StubError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid lambda variant {variant}: {rule}")]
    InvalidVariant {
        rule: VariantRule,
        variant: LambdaVariant,
    },
    #[error("`{0}` is not a functional interface")]
    NotFunctional(String),
}

pub type Result<T> = std::result::Result<T, StubError>;
