//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use copydesk_domain::{Language, ServiceDomain, Theme, Tone, UiComponent};

/// Copydesk - generative UX copy, error analysis, and JSON conversion.
#[derive(Debug, Parser)]
#[command(name = "copydesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// API key (overrides the config file)
    #[arg(long, global = true, env = "COPYDESK_API_KEY")]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate UX copy suggestions
    Copy(CopyArgs),

    /// Analyze an error message
    Analyze(AnalyzeArgs),

    /// Convert between JSON and type definitions
    Convert(ConvertArgs),

    /// Show the daily front-end concept
    Concept(ConceptArgs),

    /// Manage saved copy favorites
    Favorites(FavoritesArgs),

    /// Show or change the theme preference
    Theme(ThemeArgs),

    /// Enter interactive session mode
    Session,
}

/// Arguments for the copy command.
#[derive(Debug, Parser)]
pub struct CopyArgs {
    /// UI component the copy is for
    #[arg(short, long, value_enum)]
    pub component: ComponentArg,

    /// Tone and manner
    #[arg(short, long, value_enum, default_value = "neutral")]
    pub tone: ToneArg,

    /// Service domain
    #[arg(short, long, value_enum)]
    pub service: ServiceArg,

    /// Situation description
    pub detail: String,

    /// Save suggestion N (1-3) as a favorite after generation
    #[arg(long, value_name = "N")]
    pub save: Option<usize>,
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// The error message to analyze
    pub message: Option<String>,

    /// Read the error message from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Language for the explanation
    #[arg(short, long, value_enum, default_value = "en")]
    pub language: LanguageArg,
}

/// Arguments for the convert command.
#[derive(Debug, Parser)]
pub struct ConvertArgs {
    #[command(subcommand)]
    pub direction: ConvertDirection,
}

/// Conversion direction.
#[derive(Debug, Subcommand)]
pub enum ConvertDirection {
    /// Convert JSON data to a type definition
    JsonToType {
        /// JSON input (or use --file)
        input: Option<String>,

        /// Read JSON input from a file
        #[arg(long)]
        file: Option<String>,

        /// Name for the top-level type
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Generate a JSON example from a type definition
    TypeToJson {
        /// Type definition input (or use --file)
        input: Option<String>,

        /// Read the definition from a file
        #[arg(long)]
        file: Option<String>,
    },
}

/// Arguments for the concept command.
#[derive(Debug, Parser)]
pub struct ConceptArgs {
    /// Fetch a fresh concept even if today's is cached
    #[arg(long)]
    pub refresh: bool,
}

/// Arguments for favorites management.
#[derive(Debug, Parser)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub action: Option<FavoritesAction>,
}

/// Favorites actions.
#[derive(Debug, Subcommand)]
pub enum FavoritesAction {
    /// List all favorites (default)
    List,

    /// Remove a favorite by id
    Remove {
        /// Favorite id (full or unique prefix)
        id: String,
    },
}

/// Arguments for theme management.
#[derive(Debug, Parser)]
pub struct ThemeArgs {
    #[command(subcommand)]
    pub action: Option<ThemeAction>,
}

/// Theme actions.
#[derive(Debug, Subcommand)]
pub enum ThemeAction {
    /// Show the current theme (default)
    Show,

    /// Set the theme
    Set {
        /// Theme name
        #[arg(value_enum)]
        theme: ThemeArg,
    },

    /// Toggle between light and dark
    Toggle,
}

/// UI component argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ComponentArg {
    /// Action button label
    Button,
    /// Modal body copy
    Modal,
    /// Push/in-app notification
    Notification,
    /// Error message
    Error,
    /// Informational helper text
    Info,
    /// Confirm/cancel dialog
    Dialog,
}

/// Tone argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ToneArg {
    /// Warm and approachable
    Friendly,
    /// Formal and polite
    Formal,
    /// Witty and playful
    Funny,
    /// Plain and neutral
    Neutral,
}

/// Service domain argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ServiceArg {
    /// Food delivery
    Delivery,
    /// E-commerce
    Commerce,
    /// Social networking
    Social,
    /// Banking and fintech
    Finance,
    /// Health and wellness
    Healthcare,
}

/// Language argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LanguageArg {
    /// Korean
    Ko,
    /// English
    En,
    /// Japanese
    Ja,
    /// Chinese
    Zh,
}

/// Theme argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ThemeArg {
    /// Light theme
    Light,
    /// Dark theme
    Dark,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ComponentArg> for UiComponent {
    fn from(arg: ComponentArg) -> Self {
        match arg {
            ComponentArg::Button => UiComponent::Button,
            ComponentArg::Modal => UiComponent::Modal,
            ComponentArg::Notification => UiComponent::Notification,
            ComponentArg::Error => UiComponent::Error,
            ComponentArg::Info => UiComponent::Info,
            ComponentArg::Dialog => UiComponent::Dialog,
        }
    }
}

impl From<ToneArg> for Tone {
    fn from(arg: ToneArg) -> Self {
        match arg {
            ToneArg::Friendly => Tone::Friendly,
            ToneArg::Formal => Tone::Formal,
            ToneArg::Funny => Tone::Funny,
            ToneArg::Neutral => Tone::Neutral,
        }
    }
}

impl From<ServiceArg> for ServiceDomain {
    fn from(arg: ServiceArg) -> Self {
        match arg {
            ServiceArg::Delivery => ServiceDomain::Delivery,
            ServiceArg::Commerce => ServiceDomain::Commerce,
            ServiceArg::Social => ServiceDomain::Social,
            ServiceArg::Finance => ServiceDomain::Finance,
            ServiceArg::Healthcare => ServiceDomain::Healthcare,
        }
    }
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::Ko => Language::Ko,
            LanguageArg::En => Language::En,
            LanguageArg::Ja => Language::Ja,
            LanguageArg::Zh => Language::Zh,
        }
    }
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}
