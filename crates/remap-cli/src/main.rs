//! Material remapper CLI.

use clap::{ColorChoice, Parser};
use remap_cli::logging::{LogConfig, LogFormat, init_logging};
use remap_cli::settings::load_settings;
use remap_core::{Report, ReportLevel};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{action_for, run_action, run_init, run_show, run_suggest};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let settings = load_settings(cli.settings.as_deref());
    let workspace = cli.workspace.as_path();

    let result = match cli.command {
        Command::Init(args) => run_init(workspace, &args, &settings).map(Some),
        Command::Show => run_show(workspace).map(|()| None),
        Command::Suggest { query, limit } => {
            run_suggest(workspace, &query, limit, &settings).map(|()| None)
        }
        command => match action_for(command) {
            Some(action) => run_action(workspace, action, &settings).map(Some),
            None => Ok(None),
        },
    };

    let exit_code = match result {
        Ok(report) => {
            if let Some(report) = report {
                print_report(&report);
            }
            0
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn print_report(report: &Report) {
    match report.level {
        ReportLevel::Info => println!("{report}"),
        ReportLevel::Warning => println!("warning: {report}"),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
