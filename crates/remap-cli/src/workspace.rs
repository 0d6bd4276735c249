//! A workspace document opened for one command.
//!
//! Each invocation loads the document, runs exactly one action against it and
//! saves it back, so every mutating command is a single discrete step on
//! disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use remap_core::{Report, ReportLevel, Scene, Session};
use remap_model::RuleField;
use remap_persistence::{
    PersistenceError, WorkspaceDocument, export_rules, import_rules, load_workspace,
    save_workspace,
};

use crate::settings::Settings;

/// One user-facing command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove(usize),
    RemoveLast,
    Swap,
    Set {
        index: usize,
        field: RuleField,
        value: String,
    },
    Apply,
    CleanNames,
    Populate,
    Export(Option<PathBuf>),
    Import(PathBuf),
}

impl Action {
    /// Whether the action can change the workspace document.
    pub fn mutates(&self) -> bool {
        !matches!(self, Self::Export(_))
    }
}

pub struct Workspace {
    path: PathBuf,
    scene: Scene,
    session: Session,
}

impl Workspace {
    /// Create a new workspace document at `path` with starter rows.
    pub fn create(
        path: &Path,
        scene: Scene,
        settings: &Settings,
        force: bool,
    ) -> Result<(Self, Report)> {
        if path.exists() && !force {
            bail!(
                "workspace {} already exists (use --force to overwrite)",
                path.display()
            );
        }
        let mut session = Session::new();
        let report = session.initialize(settings.starter_rows);
        let workspace = Self {
            path: path.to_path_buf(),
            scene,
            session,
        };
        workspace.save()?;
        Ok((workspace, report))
    }

    pub fn open(path: &Path) -> Result<Self> {
        let document = load_workspace(path).map_err(describe)?;
        Ok(Self {
            path: path.to_path_buf(),
            scene: document.scene,
            session: Session::from_rules(document.rules),
        })
    }

    pub fn save(&self) -> Result<()> {
        let document = WorkspaceDocument::new(self.scene.clone(), self.session.rules().clone());
        save_workspace(&document, &self.path)
            .with_context(|| format!("failed to save workspace {}", self.path.display()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run one action. Errors leave the in-memory document unchanged.
    pub fn execute(&mut self, action: Action, settings: &Settings) -> Result<Report> {
        let report = match action {
            Action::Add => self.session.add(),
            Action::Remove(index) => self.session.remove(index),
            Action::RemoveLast => self.session.remove_last(),
            Action::Swap => self.session.swap_all(),
            Action::Set {
                index,
                field,
                value,
            } => self.session.set_field(index, field, &value),
            Action::Apply => self.session.apply(&mut self.scene),
            Action::CleanNames => self.session.clean_names(&mut self.scene),
            Action::Populate => self.session.populate_from_selection(&self.scene),
            Action::Export(path) => {
                let target = path.unwrap_or_else(|| PathBuf::from(&settings.default_export_name));
                let written = export_rules(self.session.rules(), &target).map_err(describe)?;
                Report::info(format!(
                    "Material mapping exported successfully to {}",
                    written.display()
                ))
            }
            Action::Import(path) => {
                let outcome = import_rules(&mut self.session, &path).map_err(describe)?;
                Report::info(format!(
                    "Material mapping imported successfully ({} rows)",
                    outcome.total()
                ))
            }
        };

        match report.level {
            ReportLevel::Info => tracing::info!("{report}"),
            ReportLevel::Warning => tracing::warn!("{report}"),
        }
        Ok(report)
    }
}

/// Attach the user-facing message and hint to a persistence error.
fn describe(error: PersistenceError) -> anyhow::Error {
    let message = match error.suggestion() {
        Some(hint) => format!("{} ({hint})", error.user_message()),
        None => error.user_message(),
    };
    anyhow::Error::new(error).context(message)
}
