//! @acp:module "Planner Renderer"
//! @acp:summary "Plan output formats for the command line"
//! @acp:domain planner
//! @acp:layer output

use std::fmt::Write;

use super::engine::GenerationResult;
use super::variants::Variants;
use crate::error::{PlanError, Result};

/// Output format for a page plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(PlanError::InvalidValue {
                field: "output format",
                value: s.to_string(),
            }),
        }
    }
}

/// Render a plan in the requested format
pub fn render_plan(plan: &GenerationResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(plan)?),
        OutputFormat::Markdown => Ok(render_markdown(plan)),
        OutputFormat::Text => Ok(render_text(plan)),
    }
}

fn render_markdown(plan: &GenerationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Page plan: {}", plan.company_name);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Category `{}`, {} of {} target sections (range {}-{}).",
        plan.category,
        plan.total_sections,
        plan.target_sections,
        plan.section_range.min,
        plan.section_range.max
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "## Sections");
    let _ = writeln!(out);

    for (idx, section) in plan.ordered_sections.iter().enumerate() {
        let _ = write!(out, "{}. **{}** (`{}`)", idx + 1, section.display_name, section.id);
        if !section.variants.is_empty() {
            let _ = write!(out, ": {}", format_variants(&section.variants));
        }
        let _ = writeln!(out);
    }

    if !plan.recommendations.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Recommendations");
        let _ = writeln!(out);
        for rec in &plan.recommendations {
            let _ = writeln!(out, "- {}", rec);
        }
    }

    out.trim_end().to_string()
}

fn render_text(plan: &GenerationResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}): {} sections",
        plan.company_name, plan.category, plan.total_sections
    );

    let width = plan
        .ordered_sections
        .iter()
        .map(|s| s.id.len())
        .max()
        .unwrap_or(0);
    for section in &plan.ordered_sections {
        let _ = write!(out, "  {:width$}  {}", section.id, section.display_name, width = width);
        if !section.variants.is_empty() {
            let _ = write!(out, " [{}]", format_variants(&section.variants));
        }
        let _ = writeln!(out);
    }

    for rec in &plan.recommendations {
        let _ = writeln!(out, "  * {}", rec);
    }

    out.trim_end().to_string()
}

fn format_variants(variants: &Variants) -> String {
    variants
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::engine::PlannedSection;
    use crate::planner::profile::Category;
    use crate::planner::types::CountRange;
    use crate::planner::variants::VariantValue;

    fn plan() -> GenerationResult {
        let mut variants = Variants::new();
        variants.insert("layout".to_string(), VariantValue::from("split"));
        variants.insert("showSubheadline".to_string(), VariantValue::from(true));
        GenerationResult {
            category: Category::Agency,
            company_name: "Northwind".to_string(),
            ordered_sections: vec![
                PlannedSection {
                    id: "hero".to_string(),
                    display_name: "Hero".to_string(),
                    variants,
                },
                PlannedSection {
                    id: "contact".to_string(),
                    display_name: "Contact".to_string(),
                    variants: Variants::new(),
                },
            ],
            recommendations: vec!["Add case studies".to_string()],
            total_sections: 2,
            target_sections: 7,
            section_range: CountRange { min: 5, max: 9 },
        }
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("compact".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_markdown() {
        let out = render_plan(&plan(), OutputFormat::Markdown).unwrap();
        assert!(out.starts_with("# Page plan: Northwind"));
        assert!(out.contains("1. **Hero** (`hero`): layout=split, showSubheadline=true"));
        assert!(out.contains("2. **Contact** (`contact`)\n"));
        assert!(out.ends_with("- Add case studies"));
    }

    #[test]
    fn test_render_text_aligns_ids() {
        let out = render_plan(&plan(), OutputFormat::Text).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Northwind (agency): 2 sections");
        assert_eq!(lines[1], "  hero     Hero [layout=split, showSubheadline=true]");
        assert_eq!(lines[2], "  contact  Contact");
        assert_eq!(lines[3], "  * Add case studies");
    }

    #[test]
    fn test_render_json_round_trips() {
        let out = render_plan(&plan(), OutputFormat::Json).unwrap();
        let parsed: GenerationResult = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, plan());
    }
}
