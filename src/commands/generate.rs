//! @acp:module "Generate Command"
//! @acp:summary "Plan the sections of a marketing page for a business profile"
//! @acp:domain cli
//! @acp:layer handler

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use console::style;

use super::catalog::CatalogSource;
use crate::config::Config;
use crate::planner::{render_plan, BusinessProfile, Category, GenerationResult, Goal, OutputFormat, Tone};

/// Options for the generate command
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub category: Option<Category>,
    pub tone: Option<Tone>,
    pub goal: Option<Goal>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub audience: Option<String>,
    /// Key facts; replace the profile file's facts when given
    pub facts: Vec<String>,
    /// JSON profile file used as the base profile
    pub profile: Option<PathBuf>,
    /// Output format; falls back to the config, then markdown
    pub format: Option<OutputFormat>,
    pub source: CatalogSource,
}

/// Execute the generate command
pub fn execute_generate(options: GenerateOptions, config: &Config, config_path: &Path) -> Result<()> {
    let format = match options.format {
        Some(format) => format,
        None => config.output.format()?,
    };

    let plan = generate_plan(&options, config, config_path)?;
    println!("{}", render_plan(&plan, format)?);

    if plan.is_short() {
        eprintln!(
            "{} Only {} of the minimum {} sections were eligible",
            style("⚠").yellow(),
            plan.total_sections,
            plan.section_range.min
        );
    }

    Ok(())
}

/// Resolve the profile and catalog, then plan the page
pub fn generate_plan(options: &GenerateOptions, config: &Config, config_path: &Path) -> Result<GenerationResult> {
    let profile = resolve_profile(options, config)?;
    let catalog = options.source.open(config, config_path)?;
    Ok(catalog.generate(&profile)?)
}

/// Build the profile: command-line flags over the profile file, over the
/// config defaults
pub fn resolve_profile(options: &GenerateOptions, config: &Config) -> Result<BusinessProfile> {
    let mut profile = match options.profile {
        Some(ref path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read profile {}", path.display()))?;
            BusinessProfile::from_json(&json)?
        }
        None => {
            let Some(category) = options.category else {
                bail!("A category is required (use --category or --profile)");
            };
            let defaults = &config.defaults;
            let mut profile = BusinessProfile::new(
                category,
                defaults.tone.unwrap_or_default(),
                defaults.goal.unwrap_or_default(),
            );
            if let Some(ref name) = defaults.company_name {
                profile.company_name = name.clone();
            }
            if let Some(ref label) = defaults.industry_label {
                profile.industry_label = label.clone();
            }
            if let Some(ref label) = defaults.audience_label {
                profile.audience_label = label.clone();
            }
            profile
        }
    };

    if let Some(category) = options.category {
        profile.category = category;
    }
    if let Some(tone) = options.tone {
        profile.tone = tone;
    }
    if let Some(goal) = options.goal {
        profile.goal = goal;
    }
    if let Some(ref company) = options.company {
        profile.company_name = company.clone();
    }
    if let Some(ref industry) = options.industry {
        profile.industry_label = industry.clone();
    }
    if let Some(ref audience) = options.audience {
        profile.audience_label = audience.clone();
    }
    if !options.facts.is_empty() {
        profile.key_facts = options.facts.clone();
    }

    Ok(profile)
}
