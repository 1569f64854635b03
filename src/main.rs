// SPDX-License-Identifier: PMPL-1.0-or-later

//! taxonomy-locales: generate theme locales and country options from taxonomies
//!
//! Without a subcommand the full generation runs against the default
//! taxonomy URLs and the default checkout layout.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use taxonomy_locales::config::{
    EnglishMode, GeneratorConfig, TaxonomySource, DEFAULT_COUNTRIES_URL, DEFAULT_LANGUAGES_URL,
    DEFAULT_RUNTIME_DIR, DEFAULT_THEME_DIR, DEFAULT_TIMEOUT_SECS,
};
use taxonomy_locales::{diagnostics, fetch, generate, logging};

#[derive(Parser)]
#[command(name = "taxonomy-locales")]
#[command(version)]
#[command(about = "Generate theme locales and country options from Open Food Facts taxonomies")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Generation options when no subcommand is given
    #[command(flatten)]
    generate: GenerateArgs,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch taxonomies and regenerate every output (default)
    Generate(GenerateArgs),

    /// Download both taxonomies into a directory for offline runs
    Fetch {
        /// Snapshot directory
        #[arg(short, long, value_name = "DIR")]
        out: PathBuf,

        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Check the checkout layout the generator writes into
    Doctor {
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Debug, Clone, Args)]
struct GenerateArgs {
    #[command(flatten)]
    sources: SourceArgs,

    #[command(flatten)]
    layout: LayoutArgs,

    /// How locale names are added to the English messages
    #[arg(long, value_enum, default_value_t = EnglishMode::Append)]
    english_mode: EnglishMode,

    /// Save a JSON report of the run
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct SourceArgs {
    /// Languages taxonomy URL
    #[arg(long, default_value = DEFAULT_LANGUAGES_URL)]
    languages_url: String,

    /// Countries taxonomy URL
    #[arg(long, default_value = DEFAULT_COUNTRIES_URL)]
    countries_url: String,

    /// Read the languages taxonomy from a file instead of the URL
    #[arg(long, value_name = "FILE")]
    languages_file: Option<PathBuf>,

    /// Read the countries taxonomy from a file instead of the URL
    #[arg(long, value_name = "FILE")]
    countries_file: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,
}

#[derive(Debug, Clone, Args)]
struct LayoutArgs {
    /// Checkout root the layout directories are relative to
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Theme directory (theme.properties, messages/)
    #[arg(long, default_value = DEFAULT_THEME_DIR)]
    theme_dir: PathBuf,

    /// Runtime scripts directory (realm_settings.json, users_profile.json)
    #[arg(long, default_value = DEFAULT_RUNTIME_DIR)]
    runtime_dir: PathBuf,
}

impl SourceArgs {
    fn apply(self, config: &mut GeneratorConfig) {
        config.languages = TaxonomySource::pick(self.languages_url, self.languages_file);
        config.countries = TaxonomySource::pick(self.countries_url, self.countries_file);
        config.timeout = Duration::from_secs(self.timeout);
    }
}

impl LayoutArgs {
    fn apply(self, mut config: GeneratorConfig) -> GeneratorConfig {
        config.theme_dir = self.theme_dir;
        config.runtime_dir = self.runtime_dir;
        match self.root {
            Some(root) => config.rooted_at(&root),
            None => config,
        }
    }
}

impl From<GenerateArgs> for GeneratorConfig {
    fn from(args: GenerateArgs) -> Self {
        let mut config = GeneratorConfig::default();
        args.sources.apply(&mut config);
        config.english_mode = args.english_mode;
        args.layout.apply(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logger(logging::level_for(cli.verbose, cli.quiet));

    match cli.command.unwrap_or(Commands::Generate(cli.generate)) {
        Commands::Generate(args) => {
            let report_path = args.report.clone();
            let config = GeneratorConfig::from(args);

            let report = generate::run(&config)?;
            generate::print_summary(&report, cli.quiet);

            if let Some(path) = report_path {
                generate::write_report(&report, &path)?;
                if !cli.quiet {
                    println!("Report saved to: {}", path.display());
                }
            }
        }

        Commands::Fetch { out, sources } => {
            let mut config = GeneratorConfig::default();
            sources.apply(&mut config);
            let written = fetch::snapshot_taxonomies(&config, &out)?;
            if !cli.quiet {
                for path in &written {
                    println!("Saved: {}", path.display());
                }
            }
        }

        Commands::Doctor { layout } => {
            let config = layout.apply(GeneratorConfig::default());
            diagnostics::run_diagnostics(&config)?;
        }
    }

    Ok(())
}
