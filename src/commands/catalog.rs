//! @acp:module "Catalog Commands"
//! @acp:summary "List categories and catalog sections"
//! @acp:domain cli
//! @acp:layer handler

use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::planner::{list_sections, load_catalog, Catalog, Category, CliOverrides};

/// Catalog sources shared by every command that needs a catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogSource {
    /// Project catalog given on the command line; falls back to the config
    pub catalog: Option<PathBuf>,
    /// Section ids to disable, on top of the config's disabled sections
    pub exclude: Vec<String>,
    /// Ignore category override hooks
    pub no_override: bool,
}

impl CatalogSource {
    /// Load the built-in catalog merged with the project layers
    pub fn open(&self, config: &Config, config_path: &Path) -> Result<Catalog> {
        let project = self
            .catalog
            .clone()
            .or_else(|| config.catalog_path(config_path));

        let mut exclude = config.disabled_sections.clone();
        exclude.extend(self.exclude.iter().cloned());
        let cli = CliOverrides {
            exclude,
            no_override: self.no_override,
        };

        Ok(load_catalog(project.as_deref(), &cli)?)
    }
}

/// Options for the sections command
#[derive(Debug, Clone)]
pub struct SectionsOptions {
    pub category: Category,
    pub source: CatalogSource,
}

/// Execute the sections command
pub fn execute_sections(options: SectionsOptions, config: &Config, config_path: &Path) -> Result<()> {
    let catalog = options.source.open(config, config_path)?;
    let category = catalog.category(options.category)?;
    let sections = list_sections(category);

    println!(
        "{} sections for {} ({}-{}):\n",
        sections.len(),
        style(category.category).bold(),
        category.section_count.min,
        category.section_count.max
    );

    for section in sections {
        let mut flags = Vec::new();
        if section.default {
            flags.push("default".to_string());
        }
        if section.disabled {
            flags.push("disabled".to_string());
        }
        if let Some(ref rule) = section.variants {
            flags.push(format!("variants={}", rule));
        }

        let line = format!(
            "  {:20} {:24} {:12} {}",
            section.id,
            section.name,
            section.tier.as_str(),
            section.conditions.join(" ")
        );
        if section.disabled {
            print!("{}", style(line.trim_end()).dim());
        } else {
            print!("{}", line.trim_end());
        }
        if flags.is_empty() {
            println!();
        } else {
            println!(" [{}]", flags.join(", "));
        }
    }

    Ok(())
}

/// Options for the categories command
#[derive(Debug, Clone, Default)]
pub struct CategoriesOptions {
    pub source: CatalogSource,
}

/// Execute the categories command
pub fn execute_categories(options: CategoriesOptions, config: &Config, config_path: &Path) -> Result<()> {
    let catalog = options.source.open(config, config_path)?;

    println!("Catalog version {}\n", catalog.version());
    for category in catalog.categories() {
        let hook = category
            .override_logic
            .as_deref()
            .map(|h| format!(" hook={}", h))
            .unwrap_or_default();
        println!(
            "  {} {:3}-{:<3} {:3} sections{}",
            style(format!("{:15}", category.category.as_str())).bold(),
            category.section_count.min,
            category.section_count.max,
            category.sections.len(),
            hook
        );
        if let Some(ref description) = category.description {
            println!("  {:15} {}", "", style(description).dim());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_merges_config_exclusions() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(".pageplan.json");
        let config = Config {
            disabled_sections: vec!["faq".to_string()],
            ..Default::default()
        };
        let source = CatalogSource {
            exclude: vec!["stats".to_string()],
            ..Default::default()
        };

        let catalog = source.open(&config, &config_path).unwrap();
        let saas = catalog.category(Category::SaasLike).unwrap();
        assert!(saas.is_disabled("faq"));
        assert!(saas.is_disabled("stats"));
    }

    #[test]
    fn test_source_reads_catalog_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("catalog.json"),
            r#"{"version": "2.0.0", "categories": []}"#,
        )
        .unwrap();
        let config = Config {
            catalog: Some(PathBuf::from("catalog.json")),
            ..Default::default()
        };

        let catalog = CatalogSource::default()
            .open(&config, &dir.path().join(".pageplan.json"))
            .unwrap();
        // An empty project catalog leaves the built-in categories intact
        assert_eq!(catalog.version(), "1.0.0");
        assert_eq!(catalog.categories().len(), Category::ALL.len());
    }

    #[test]
    fn test_missing_project_catalog_fails() {
        let source = CatalogSource {
            catalog: Some(PathBuf::from("/nonexistent/catalog.json")),
            ..Default::default()
        };
        assert!(source
            .open(&Config::default(), Path::new(".pageplan.json"))
            .is_err());
    }
}
