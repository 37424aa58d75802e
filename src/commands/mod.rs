//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule.

pub mod catalog;
pub mod generate;
pub mod validate;

pub use catalog::{execute_categories, execute_sections, CatalogSource, CategoriesOptions, SectionsOptions};
pub use generate::{execute_generate, generate_plan, resolve_profile, GenerateOptions};
pub use validate::{execute_validate, validate_catalog, ValidateOptions};
