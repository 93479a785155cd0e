pub mod catalog;
pub mod emitter;
pub mod error;
pub mod interfaces;
pub mod parser;
pub mod resolver;
mod types;

pub use emitter::{EditPlan, JavaEmitter, TextEdit};
pub use error::{JavaError, Result};
pub use parser::JavaParser;
pub use resolver::{JavaResolver, JavaSite, SiteKind};
