use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use remap_cli::render::{rule_table, suggestion_table};
use remap_cli::settings::Settings;
use remap_cli::workspace::{Action, Workspace};
use remap_core::{Report, Scene, suggest_names};

use crate::cli::{Command, InitArgs};

pub fn run_init(workspace: &Path, args: &InitArgs, settings: &Settings) -> Result<Report> {
    let scene = match &args.scene {
        Some(path) => read_scene(path)?,
        None => Scene::new(),
    };
    let (_, report) = Workspace::create(workspace, scene, settings, args.force)?;
    info!(workspace = %workspace.display(), "created workspace");
    Ok(report)
}

pub fn run_show(workspace: &Path) -> Result<()> {
    let workspace = Workspace::open(workspace)?;
    let session = workspace.session();
    if session.rules().is_empty() {
        println!("No mapping rows. Run `material-remap add` or `populate`.");
        return Ok(());
    }
    let statuses = session.resolve(workspace.scene());
    println!("{}", rule_table(session.rules(), &statuses));
    Ok(())
}

pub fn run_suggest(
    workspace: &Path,
    query: &str,
    limit: Option<usize>,
    settings: &Settings,
) -> Result<()> {
    let workspace = Workspace::open(workspace)?;
    let limit = limit.unwrap_or(settings.suggestion_limit);
    let suggestions = suggest_names(workspace.scene(), query, limit);
    if suggestions.is_empty() {
        println!("No materials match '{query}'");
    } else {
        println!("{}", suggestion_table(&suggestions));
    }
    Ok(())
}

/// Load the workspace, run one action and save when it can have changed.
pub fn run_action(workspace: &Path, action: Action, settings: &Settings) -> Result<Report> {
    let mut document = Workspace::open(workspace)?;
    let mutates = action.mutates();
    let report = document.execute(action, settings)?;
    if mutates {
        document.save()?;
        debug!(workspace = %document.path().display(), "saved workspace");
    }
    Ok(report)
}

/// Translate a mutating subcommand into its action.
pub fn action_for(command: Command) -> Option<Action> {
    let action = match command {
        Command::Add => Action::Add,
        Command::Remove { index } => Action::Remove(index),
        Command::RemoveLast => Action::RemoveLast,
        Command::Swap => Action::Swap,
        Command::Set {
            index,
            field,
            value,
        } => Action::Set {
            index,
            field,
            value,
        },
        Command::Apply => Action::Apply,
        Command::CleanNames => Action::CleanNames,
        Command::Populate => Action::Populate,
        Command::Export { path } => Action::Export(path),
        Command::Import { path } => Action::Import(path),
        Command::Init(_) | Command::Show | Command::Suggest { .. } => return None,
    };
    Some(action)
}

fn read_scene(path: &Path) -> Result<Scene> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse scene file {}", path.display()))
}
