//! @acp:module "Validate Command"
//! @acp:summary "Validate a project catalog merged over the built-in catalog"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::planner::{load_catalog, Catalog, CliOverrides};

/// Options for the validate command
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Project catalog to validate (JSON or YAML)
    pub file: PathBuf,
}

/// Execute the validate command
pub fn execute_validate(options: ValidateOptions) -> Result<()> {
    let catalog = match validate_catalog(&options) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{} {}", style("✗").red(), e);
            std::process::exit(1);
        }
    };

    println!(
        "{} {} is valid ({} categories)",
        style("✓").green(),
        options.file.display(),
        catalog.categories().len()
    );

    for warning in catalog.lint() {
        println!("  {} {}", style("⚠").yellow(), warning);
    }

    Ok(())
}

/// Load and validate a project catalog without printing anything
pub fn validate_catalog(options: &ValidateOptions) -> Result<Catalog> {
    Ok(load_catalog(Some(&options.file), &CliOverrides::default())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_valid_project_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(
            &dir,
            "catalog.yaml",
            "version: \"1.0.0\"\ncategories:\n  - id: retail\n    additionalSections:\n      - id: gift-cards\n        name: Gift Cards\n",
        );
        let catalog = validate_catalog(&ValidateOptions { file }).unwrap();
        let retail = catalog.category(crate::planner::Category::Retail).unwrap();
        assert!(retail.section("gift-cards").is_ok());
    }

    #[test]
    fn test_unknown_default_section_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(
            &dir,
            "catalog.json",
            r#"{"version": "1.0.0", "categories": [{"id": "retail", "defaultSections": ["blog"]}]}"#,
        );
        assert!(validate_catalog(&ValidateOptions { file }).is_err());
    }

    #[test]
    fn test_unknown_category_id_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(
            &dir,
            "catalog.json",
            r#"{"version": "1.0.0", "categories": [{"id": "bakery"}]}"#,
        );
        assert!(validate_catalog(&ValidateOptions { file }).is_err());
    }
}
