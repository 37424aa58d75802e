#![forbid(unsafe_code)]

//! @acp:module "Pageplan Library"
//! @acp:summary "Section selection and variant configuration for generated marketing pages"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # pageplan
//!
//! Decides which content sections a generated marketing page contains, in
//! what order, with which presentation variants, and what is worth adding.
//!
//! ## Features
//!
//! - **Declarative catalogs**: built-in JSON catalog, project JSON/YAML layers
//! - **Fail-closed registry**: unknown categories and sections are errors
//! - **Named hooks**: per-category override logic and per-section variant rules
//! - **Templated advice**: recommendation messages rendered with handlebars
//!
//! ## Example
//!
//! ```rust,no_run
//! use pageplan::{BusinessProfile, Catalog, Category, Goal, Tone};
//!
//! fn main() -> pageplan::Result<()> {
//!     let catalog = Catalog::builtin()?;
//!     let profile = BusinessProfile::new(Category::LocalService, Tone::High, Goal::Trust)
//!         .with_industry("Construction");
//!
//!     let plan = catalog.generate(&profile)?;
//!     for section in &plan.ordered_sections {
//!         println!("{} {:?}", section.id, section.variants);
//!     }
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod planner;

// Re-exports
pub use config::Config;
pub use error::{PlanError, Result};
pub use planner::{
    generate, BusinessProfile, Catalog, Category, CategoryCatalog, CliOverrides, GenerationResult,
    Goal, Hooks, OutputFormat, PlannedSection, Tone, VariantValue, Variants,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
