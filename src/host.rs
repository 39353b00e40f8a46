/// Host application boundary
/// Everything the exporter consumes from the modeling host: the scene
/// selection, well-known directories, blocking dialogs, and the FBX exporter
/// itself. A concrete binding implements `Host` against the host's own API;
/// tests run against an in-memory implementation.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::material::MaterialNode;

/// Stable handle to a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u64);

/// A scene object as the exporter sees it: a name and an optional assigned
/// material tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub material: Option<MaterialNode>,
}

/// Errors surfaced by host operations.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Unknown object id {0:?}")]
    UnknownObject(ObjectId),

    #[error("Exporter rejected parameter {name}: {message}")]
    BadExportParam { name: String, message: String },

    #[error("FBX export to {path:?} failed: {message}")]
    ExportFailed { path: PathBuf, message: String },
}

/// Value for a named exporter option.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Bool(bool),
    Num(f64),
}

/// The modeling host as consumed by the export flow.
pub trait Host {
    /// Current selection, in selection order.
    fn selection(&self) -> Vec<SceneObject>;

    /// Replace the current selection with exactly `ids`.
    fn select(&mut self, ids: &[ObjectId]) -> Result<(), HostError>;

    /// The host's default export directory.
    fn default_export_dir(&self) -> PathBuf;

    /// The host's user-scripts settings directory.
    fn settings_dir(&self) -> PathBuf;

    /// Blocking folder picker, pre-filled with `initial`.
    /// Returns `None` if the user cancels.
    fn pick_folder(&mut self, caption: &str, initial: &Path) -> Option<PathBuf>;

    /// Blocking message/alert dialog.
    fn message_box(&mut self, title: &str, text: &str);

    /// Set a named option on the host's FBX exporter.
    fn set_export_param(&mut self, name: &str, value: ParamValue) -> Result<(), HostError>;

    /// Export the current selection as FBX to `path`, suppressing any
    /// interactive exporter prompts.
    fn export_selected(&mut self, path: &Path) -> Result<(), HostError>;
}
