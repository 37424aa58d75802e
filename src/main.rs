#![forbid(unsafe_code)]
//! Pageplan Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pageplan::commands::{
    execute_categories, execute_generate, execute_sections, execute_validate, CatalogSource,
    CategoriesOptions, GenerateOptions, SectionsOptions, ValidateOptions,
};
use pageplan::{Category, Config, Goal, OutputFormat, Tone};

#[derive(Parser)]
#[command(name = "pageplan")]
#[command(about = "Plan the sections of generated marketing pages")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".pageplan.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a page plan for a business profile
    Generate {
        /// Business category (saas-like, local-service, agency, retail, landing-only, general, portfolio)
        #[arg(long)]
        category: Option<Category>,

        /// Tone: low, medium, high
        #[arg(long)]
        tone: Option<Tone>,

        /// Goal: conversion, trust, engagement, information, credibility
        #[arg(long)]
        goal: Option<Goal>,

        /// Company name
        #[arg(long)]
        company: Option<String>,

        /// Industry label
        #[arg(long)]
        industry: Option<String>,

        /// Audience label
        #[arg(long)]
        audience: Option<String>,

        /// Key fact (can specify multiple)
        #[arg(long = "fact")]
        facts: Vec<String>,

        /// JSON profile file
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Output format: json, markdown, text
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Project catalog (JSON or YAML)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Section IDs to exclude (can specify multiple)
        #[arg(long)]
        exclude: Vec<String>,

        /// Ignore category override logic
        #[arg(long)]
        no_override: bool,
    },

    /// List the sections of a category
    Sections {
        /// Business category
        #[arg(long)]
        category: Category,

        /// Project catalog (JSON or YAML)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List categories with their section ranges
    Categories {
        /// Project catalog (JSON or YAML)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Validate a project catalog
    Validate {
        /// Catalog file to validate
        file: PathBuf,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "pageplan=debug" } else { "pageplan=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load_if_present(&cli.config)?;

    match cli.command {
        Commands::Generate {
            category,
            tone,
            goal,
            company,
            industry,
            audience,
            facts,
            profile,
            format,
            catalog,
            exclude,
            no_override,
        } => {
            let options = GenerateOptions {
                category,
                tone,
                goal,
                company,
                industry,
                audience,
                facts,
                profile,
                format,
                source: CatalogSource {
                    catalog,
                    exclude,
                    no_override,
                },
            };
            execute_generate(options, &config, &cli.config)?;
        }

        Commands::Sections { category, catalog } => {
            let options = SectionsOptions {
                category,
                source: CatalogSource {
                    catalog,
                    ..Default::default()
                },
            };
            execute_sections(options, &config, &cli.config)?;
        }

        Commands::Categories { catalog } => {
            let options = CategoriesOptions {
                source: CatalogSource {
                    catalog,
                    ..Default::default()
                },
            };
            execute_categories(options, &config, &cli.config)?;
        }

        Commands::Validate { file } => {
            execute_validate(ValidateOptions { file })?;
        }
    }

    Ok(())
}
