pub mod rendered;
pub mod signature;
pub mod types;
pub mod variant;

pub use rendered::{BodyKind, LambdaParam, RenderedLambda};
pub use signature::MethodSignature;
pub use types::TypeRef;
pub use variant::{LambdaVariant, VariantRule};
