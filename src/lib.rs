//! Batch-export selected scene objects from a 3D modeling host into a game
//! project folder layout: one subfolder per object holding an FBX export and
//! copies of every bitmap texture its material tree references. The last
//! used destination directory is remembered between runs.
//!
//! The host application (scene, dialogs, FBX exporter) is consumed through
//! the [`host::Host`] trait; [`export::run`] drives the whole flow against
//! any implementation of it.

pub mod export;
pub mod host;
pub mod material;
pub mod settings;
pub mod textures;

#[cfg(test)]
pub(crate) mod mock;

pub use export::{run, ExportSummary, FbxExportOptions, RunOutcome};
pub use host::{Host, HostError, ObjectId, ParamValue, SceneObject};
pub use material::{MaterialNode, Property, PropertyValue};
pub use settings::ExportSettings;
pub use textures::find_textures;
