//! CLI argument definitions for the material remapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use remap_model::RuleField;

#[derive(Parser)]
#[command(
    name = "material-remap",
    version,
    about = "Batch material remapping for the selected objects of a scene",
    long_about = "Maintain an ordered list of old -> new material rules and apply it to every\n\
                  material slot of the selected objects.\n\n\
                  Each command loads the workspace document, runs once and saves it back."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Workspace document holding the scene and the rule list.
    #[arg(
        long = "workspace",
        value_name = "PATH",
        default_value = "remap.json",
        global = true
    )]
    pub workspace: PathBuf,

    /// Read settings from this file instead of the platform config directory.
    #[arg(long = "settings", value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a workspace with empty starter rows.
    Init(InitArgs),

    /// Print the rule list with the status of each label.
    Show,

    /// Append an empty rule.
    Add,

    /// Remove the rule at INDEX (0-based).
    Remove {
        #[arg(value_name = "INDEX")]
        index: usize,
    },

    /// Remove the last rule.
    RemoveLast,

    /// Swap old and new in every rule.
    Swap,

    /// Set one label of the rule at INDEX (0-based).
    Set {
        #[arg(value_name = "INDEX")]
        index: usize,
        /// Which label to edit: old or new.
        #[arg(value_name = "FIELD", value_parser = parse_field)]
        field: RuleField,
        #[arg(value_name = "VALUE")]
        value: String,
    },

    /// Rewrite the material slots of the selected objects.
    Apply,

    /// Rename the selected objects' materials to plain ASCII identifiers.
    CleanNames,

    /// Fill the old column with the selected objects' materials.
    Populate,

    /// Write the rule list to a JSON file.
    Export {
        /// Target file; `.json` is appended when missing.
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// Merge rules from a JSON file into the rule list.
    Import {
        #[arg(value_name = "PATH")]
        path: PathBuf,
    },

    /// List pool materials matching a partially typed name.
    Suggest {
        #[arg(value_name = "QUERY", default_value = "")]
        query: String,
        /// Maximum number of suggestions (default from settings).
        #[arg(long = "limit", value_name = "N")]
        limit: Option<usize>,
    },
}

#[derive(Parser)]
pub struct InitArgs {
    /// Scene file (JSON) to seed the workspace with; empty scene if omitted.
    #[arg(long = "scene", value_name = "FILE")]
    pub scene: Option<PathBuf>,

    /// Overwrite an existing workspace.
    #[arg(long = "force")]
    pub force: bool,
}

fn parse_field(value: &str) -> Result<RuleField, String> {
    value.parse().map_err(|e| format!("{e}"))
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
