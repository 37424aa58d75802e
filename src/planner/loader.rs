//! @acp:module "Planner Loader"
//! @acp:summary "Load and merge catalog documents from multiple sources"
//! @acp:domain planner
//! @acp:layer io

use std::path::Path;

use super::registry::{Catalog, Hooks};
use super::types::*;
use crate::error::{PlanError, Result};

/// CLI overrides for catalog configuration
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub exclude: Vec<String>,
    pub no_override: bool,
}

/// Load the catalog with 3-layer merging:
/// 1. Built-in defaults (catalog.defaults.json)
/// 2. Project catalog (JSON or YAML)
/// 3. CLI overrides
pub fn load_catalog_config(project_catalog: Option<&Path>, cli: &CliOverrides) -> Result<CatalogConfig> {
    let mut config = builtin_config()?;

    if let Some(path) = project_catalog {
        let project = load_project_catalog(path)?;
        config = merge_configs(config, project);
    }

    Ok(apply_cli_overrides(config, cli))
}

/// Load, merge and validate the catalog with the built-in hooks
pub fn load_catalog(project_catalog: Option<&Path>, cli: &CliOverrides) -> Result<Catalog> {
    let config = load_catalog_config(project_catalog, cli)?;
    Catalog::new(config, Hooks::builtin())
}

/// Built-in catalog document
pub fn builtin_config() -> Result<CatalogConfig> {
    let json = include_str!("../../catalogs/catalog.defaults.json");
    Ok(serde_json::from_str(json)?)
}

/// Load a project catalog; `.yaml`/`.yml` files are read as YAML, anything
/// else as JSON
pub fn load_project_catalog(path: &Path) -> Result<CatalogConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);

    if is_yaml {
        Ok(serde_yaml::from_str(&content)?)
    } else {
        Ok(serde_json::from_str(&content)?)
    }
}

/// Merge a project catalog into the base catalog
fn merge_configs(base: CatalogConfig, project: CatalogConfig) -> CatalogConfig {
    let mut result = base;

    for category in project.categories {
        match result.categories.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => merge_category(existing, category),
            None => result.categories.push(category),
        }
    }

    // Rules are replaced by id, new rules keep their priority after the base table
    for rule in project.recommendations {
        if let Some(existing) = result.recommendations.iter_mut().find(|r| r.id == rule.id) {
            *existing = rule;
        } else {
            result.recommendations.push(rule);
        }
    }

    if project.metadata.is_some() {
        result.metadata = project.metadata;
    }

    result
}

fn merge_category(existing: &mut CategoryConfig, project: CategoryConfig) {
    // Merge sections by ID (project wins for same ID)
    for section in project.sections {
        if let Some(current) = existing.sections.iter_mut().find(|s| s.id == section.id) {
            *current = section;
        } else {
            existing.sections.push(section);
        }
    }

    existing.additional_sections.extend(project.additional_sections);
    existing.disabled_sections.extend(project.disabled_sections);

    if project.name.is_some() {
        existing.name = project.name;
    }
    if project.description.is_some() {
        existing.description = project.description;
    }
    if !project.default_sections.is_empty() {
        existing.default_sections = project.default_sections;
    }
    if !project.preferred_order.is_empty() {
        existing.preferred_order = project.preferred_order;
    }
    if project.section_count.is_some() {
        existing.section_count = project.section_count;
    }
    if project.override_logic.is_some() {
        existing.override_logic = project.override_logic;
    }
}

/// Apply CLI overrides to config
fn apply_cli_overrides(mut config: CatalogConfig, cli: &CliOverrides) -> CatalogConfig {
    for id in &cli.exclude {
        let known = config.categories.iter().any(|c| {
            c.sections
                .iter()
                .chain(&c.additional_sections)
                .any(|s| &s.id == id)
        });
        if !known {
            tracing::warn!("Unknown section ID in --exclude: {}", id);
        }
    }

    for category in &mut config.categories {
        category.disabled_sections.extend(cli.exclude.iter().cloned());
        if cli.no_override {
            category.override_logic = None;
        }
    }

    config
}
