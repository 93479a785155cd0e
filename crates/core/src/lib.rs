pub mod config;
pub mod enumerate;
pub mod error;
pub mod host;
pub mod label;
pub mod logging;
pub mod model;
pub mod naming;
pub mod render;

pub use config::StubConfig;
pub use enumerate::{enumerate, enumerate_ordered};
pub use error::{Result, StubError};
pub use host::{FragmentSink, Proposal, ResolvedTarget, SignatureResolver, StubGenerator};
pub use model::*;
pub use render::render;
