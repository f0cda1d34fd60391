//! Template registry and repository.

pub mod registry;
pub mod repository;

pub use registry::find_template;
pub use repository::{TemplateFile, TemplateRepository};
