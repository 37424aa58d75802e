//! @acp:module "Planner"
//! @acp:summary "Section selection and variant configuration for generated marketing pages"
//! @acp:domain planner
//! @acp:layer feature

pub mod condition;
pub mod engine;
pub mod loader;
pub mod overrides;
pub mod policy;
pub mod profile;
pub mod recommend;
pub mod registry;
pub mod renderer;
pub mod selector;
pub mod types;
pub mod variants;

pub use condition::{evaluate_condition, is_eligible, validate_condition};
pub use engine::{generate, GenerationResult, PlannedSection};
pub use loader::{load_catalog, load_catalog_config, CliOverrides};
pub use profile::{BusinessProfile, Category, Goal, Tone};
pub use registry::{Catalog, CategoryCatalog, Hooks};
pub use renderer::{render_plan, OutputFormat};
pub use selector::{list_sections, select_sections, SectionInfo, Selection};
pub use types::*;
pub use variants::{VariantValue, Variants};
