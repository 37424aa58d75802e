//! @acp:module "Planner Condition Evaluator"
//! @acp:summary "Evaluate section inclusion conditions and custom predicate expressions"
//! @acp:domain planner
//! @acp:layer logic

use regex::RegexBuilder;

use super::profile::{BusinessProfile, Category, Goal, Tone};
use super::types::{SectionConditions, SectionDefinition, Tier};
use crate::error::{PlanError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Contains,
    Matches,
}

#[derive(Debug)]
struct Condition<'a> {
    path: &'a str,
    operator: Operator,
    value: &'a str,
}

/// Profile field resolved from a condition path
enum Resolved<'a> {
    Text(&'a str),
    List(&'a [String]),
    Number(i64),
    Tone(Tone),
    Goal(Goal),
    Category(Category),
}

/// Decide whether a section may join the candidate pool.
///
/// Sections without conditions are eligible unless they are optional, in which
/// case they only appear at high tone. A failing custom predicate makes the
/// section ineligible and is logged, never propagated.
pub fn is_eligible(section: &SectionDefinition, profile: &BusinessProfile) -> bool {
    match &section.conditions {
        None => match section.tier {
            Tier::Core | Tier::Conditional => true,
            Tier::Optional => profile.tone == Tone::High,
        },
        Some(conditions) => conditions_hold(conditions, profile, &section.id),
    }
}

/// Evaluate a condition bundle (AND of every set sub-condition).
///
/// `subject` names what is being evaluated and only appears in log output.
pub fn conditions_hold(
    conditions: &SectionConditions,
    profile: &BusinessProfile,
    subject: &str,
) -> bool {
    if let Some(categories) = &conditions.categories {
        if !categories.contains(&profile.category) {
            return false;
        }
    }
    if let Some(goals) = &conditions.goals {
        if !goals.contains(&profile.goal) {
            return false;
        }
    }
    if let Some(tones) = &conditions.tones {
        if !tones.contains(&profile.tone) {
            return false;
        }
    }
    if let Some(expr) = &conditions.custom {
        return match evaluate_condition(expr, profile) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Custom predicate for '{}' failed, treating as false: {}", subject, e);
                false
            }
        };
    }
    true
}

/// Evaluate a custom predicate expression against a profile
///
/// Supports expressions like:
/// - "industry matches construct|remodel|roof"
/// - "audience contains local"
/// - "keyFacts.count >= 4"
/// - "tone >= medium"
pub fn evaluate_condition(expr: &str, profile: &BusinessProfile) -> Result<bool> {
    let condition = parse_condition(expr)?;
    let actual = resolve_path(expr, condition.path, profile)?;
    compare(expr, actual, &condition)
}

/// Check that an expression parses and type-checks, without a real profile
pub fn validate_condition(expr: &str) -> Result<()> {
    let sample = BusinessProfile::new(Category::General, Tone::Medium, Goal::Conversion);
    evaluate_condition(expr, &sample).map(|_| ())
}

fn parse_condition(expr: &str) -> Result<Condition<'_>> {
    let trimmed = expr.trim();
    let (path, rest) = trimmed
        .split_once(char::is_whitespace)
        .ok_or_else(|| PlanError::invalid_condition(expr, "expected 'path operator value'"))?;
    let (op, value) = rest
        .trim_start()
        .split_once(char::is_whitespace)
        .ok_or_else(|| PlanError::invalid_condition(expr, "expected 'path operator value'"))?;

    let operator = match op {
        "==" => Operator::Eq,
        "!=" => Operator::Ne,
        ">" => Operator::Gt,
        ">=" => Operator::Gte,
        "<" => Operator::Lt,
        "<=" => Operator::Lte,
        "contains" => Operator::Contains,
        "matches" => Operator::Matches,
        other => {
            return Err(PlanError::invalid_condition(
                expr,
                format!("unknown operator '{}'", other),
            ))
        }
    };

    let value = value.trim().trim_matches('"');
    if value.is_empty() {
        return Err(PlanError::invalid_condition(expr, "missing value"));
    }

    Ok(Condition {
        path,
        operator,
        value,
    })
}

fn resolve_path<'a>(expr: &str, path: &str, profile: &'a BusinessProfile) -> Result<Resolved<'a>> {
    match path {
        "company" | "companyName" => Ok(Resolved::Text(&profile.company_name)),
        "industry" | "industryLabel" => Ok(Resolved::Text(&profile.industry_label)),
        "audience" | "audienceLabel" => Ok(Resolved::Text(&profile.audience_label)),
        "keyFacts" => Ok(Resolved::List(&profile.key_facts)),
        "keyFacts.count" => Ok(Resolved::Number(profile.key_facts.len() as i64)),
        "tone" => Ok(Resolved::Tone(profile.tone)),
        "goal" => Ok(Resolved::Goal(profile.goal)),
        "category" => Ok(Resolved::Category(profile.category)),
        _ => Err(PlanError::invalid_condition(
            expr,
            format!("unknown path '{}'", path),
        )),
    }
}

fn compare(expr: &str, actual: Resolved<'_>, condition: &Condition<'_>) -> Result<bool> {
    let op = condition.operator;
    let value = condition.value;

    match actual {
        Resolved::Text(text) => match op {
            Operator::Eq => Ok(text.eq_ignore_ascii_case(value)),
            Operator::Ne => Ok(!text.eq_ignore_ascii_case(value)),
            Operator::Contains => Ok(contains_ignore_case(text, value)),
            Operator::Matches => {
                let re = build_regex(expr, value)?;
                Ok(re.is_match(text))
            }
            _ => Err(unsupported(expr, op, "text")),
        },
        Resolved::List(items) => match op {
            Operator::Contains => Ok(items.iter().any(|item| contains_ignore_case(item, value))),
            Operator::Matches => {
                let re = build_regex(expr, value)?;
                Ok(items.iter().any(|item| re.is_match(item)))
            }
            _ => Err(unsupported(expr, op, "list")),
        },
        Resolved::Number(n) => {
            let wanted = value.parse::<i64>().map_err(|_| {
                PlanError::invalid_condition(expr, format!("invalid numeric value '{}'", value))
            })?;
            ordered(expr, op, n, wanted, "number")
        }
        Resolved::Tone(tone) => {
            let wanted = value
                .parse::<Tone>()
                .map_err(|e| PlanError::invalid_condition(expr, e.to_string()))?;
            ordered(expr, op, tone, wanted, "tone")
        }
        Resolved::Goal(goal) => {
            let wanted = value
                .parse::<Goal>()
                .map_err(|e| PlanError::invalid_condition(expr, e.to_string()))?;
            equality(expr, op, goal, wanted, "goal")
        }
        Resolved::Category(category) => {
            let wanted = value
                .parse::<Category>()
                .map_err(|e| PlanError::invalid_condition(expr, e.to_string()))?;
            equality(expr, op, category, wanted, "category")
        }
    }
}

fn ordered<T: Ord>(expr: &str, op: Operator, actual: T, wanted: T, kind: &str) -> Result<bool> {
    Ok(match op {
        Operator::Eq => actual == wanted,
        Operator::Ne => actual != wanted,
        Operator::Gt => actual > wanted,
        Operator::Gte => actual >= wanted,
        Operator::Lt => actual < wanted,
        Operator::Lte => actual <= wanted,
        Operator::Contains | Operator::Matches => return Err(unsupported(expr, op, kind)),
    })
}

fn equality<T: PartialEq>(expr: &str, op: Operator, actual: T, wanted: T, kind: &str) -> Result<bool> {
    match op {
        Operator::Eq => Ok(actual == wanted),
        Operator::Ne => Ok(actual != wanted),
        _ => Err(unsupported(expr, op, kind)),
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn build_regex(expr: &str, pattern: &str) -> Result<regex::Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| PlanError::invalid_condition(expr, format!("invalid pattern: {}", e)))
}

fn unsupported(expr: &str, op: Operator, kind: &str) -> PlanError {
    PlanError::invalid_condition(expr, format!("operator {:?} not supported for {}", op, kind))
}
