/// Batch export orchestration
/// Drives the whole flow: destination prompt, selection capture, exporter
/// configuration, the per-object loop (folder, textures, FBX), and the final
/// summary. The original selection is restored no matter how the run ends.

use anyhow::{Context, Result};
use log::{error, info, warn};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::host::{Host, HostError, ObjectId, ParamValue, SceneObject};
use crate::material::MaterialNode;
use crate::settings::ExportSettings;
use crate::textures::find_textures;

/// Caption shown on the destination folder picker.
pub const FOLDER_PROMPT: &str = "Select Unreal Project's Content Folder";

/// Fixed FBX exporter configuration for game-engine meshes.
/// Not user-configurable in this flow.
#[derive(Debug, Clone, Copy)]
pub struct FbxExportOptions {
    pub up_axis: &'static str,
    pub scale_factor: f64,
    pub convert_unit: &'static str,
    pub smoothing_groups: bool,
    pub tangents_and_binormals: bool,
    pub embed_media: bool,
    pub animation: bool,
    pub generate_log: bool,
}

impl FbxExportOptions {
    /// Static game mesh: Z-up, centimeters, smoothing groups and tangents
    /// baked in, no media embedding, no animation takes.
    pub const GAME_MESH: Self = Self {
        up_axis: "Z",
        scale_factor: 1.0,
        convert_unit: "cm",
        smoothing_groups: true,
        tangents_and_binormals: true,
        embed_media: false,
        animation: false,
        generate_log: false,
    };

    /// Push every option to the host exporter as a named parameter.
    fn apply(&self, host: &mut dyn Host) -> Result<(), HostError> {
        host.set_export_param("UpAxis", ParamValue::Str(self.up_axis.to_string()))?;
        host.set_export_param("ScaleFactor", ParamValue::Num(self.scale_factor))?;
        host.set_export_param("ConvertUnit", ParamValue::Str(self.convert_unit.to_string()))?;
        host.set_export_param("SmoothingGroups", ParamValue::Bool(self.smoothing_groups))?;
        host.set_export_param(
            "TangentsandBinormals",
            ParamValue::Bool(self.tangents_and_binormals),
        )?;
        host.set_export_param("EmbedMedia", ParamValue::Bool(self.embed_media))?;
        host.set_export_param("Animation", ParamValue::Bool(self.animation))?;
        host.set_export_param("GenerateLog", ParamValue::Bool(self.generate_log))?;
        Ok(())
    }
}

/// Totals reported at the end of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub base_path: PathBuf,
    pub models_exported: usize,
    pub textures_copied: usize,
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Export complete.")?;
        writeln!(f)?;
        writeln!(f, "Base path: {}", self.base_path.display())?;
        writeln!(
            f,
            "Exported {} models into individual subfolders.",
            self.models_exported
        )?;
        write!(f, "Copied a total of {} texture files.", self.textures_copied)
    }
}

/// How a run ended.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(ExportSummary),
    /// The user dismissed the destination prompt. Nothing was written.
    Cancelled,
    /// No objects were selected. Nothing was written.
    NothingSelected,
    /// A fatal error, already reported to the user and the log.
    Failed(String),
}

/// Run the full export flow against `host`.
///
/// Fatal errors are reported through an error dialog and the log rather than
/// propagated; the caller gets them back as `RunOutcome::Failed`.
pub fn run(host: &mut dyn Host) -> RunOutcome {
    let settings = ExportSettings::load(&host.settings_dir());
    let initial = settings.initial_dir(&host.default_export_dir());

    let base_path = match host.pick_folder(FOLDER_PROMPT, &initial) {
        Some(path) => path,
        None => {
            info!("Export cancelled by user");
            return RunOutcome::Cancelled;
        }
    };

    let chosen = ExportSettings {
        last_path: Some(base_path.clone()),
    };
    if let Err(e) = chosen.save(&host.settings_dir()) {
        // Nothing captured yet, so there is no selection to restore.
        return fail(host, None, e);
    }

    let original_selection = host.selection();
    if original_selection.is_empty() {
        host.message_box("Export", "Please select one or more objects to export.");
        info!("Nothing selected, export skipped");
        return RunOutcome::NothingSelected;
    }
    let original_ids: Vec<ObjectId> = original_selection.iter().map(|o| o.id).collect();

    info!(
        "Starting export of {} objects to {:?}",
        original_selection.len(),
        base_path
    );

    match export_objects(host, &original_selection, &base_path) {
        Ok(summary) => {
            if let Err(e) = host.select(&original_ids) {
                return fail(host, None, e.into());
            }
            let report = summary.to_string();
            host.message_box("Export Complete", &report);
            info!("{}", report);
            RunOutcome::Completed(summary)
        }
        Err(e) => fail(host, Some(&original_ids), e),
    }
}

/// Report a fatal error and restore the captured selection, if any.
fn fail(host: &mut dyn Host, selection: Option<&[ObjectId]>, error: anyhow::Error) -> RunOutcome {
    error!("Export failed: {:#}", error);
    host.message_box(
        "Export Error",
        &format!("An error occurred during export:\n\n{:#}", error),
    );
    if let Some(ids) = selection {
        if let Err(restore_err) = host.select(ids) {
            warn!("Failed to restore selection: {}", restore_err);
        }
    }
    RunOutcome::Failed(format!("{:#}", error))
}

/// The per-object loop. Any error returned here is fatal to the run.
fn export_objects(
    host: &mut dyn Host,
    objects: &[SceneObject],
    base_path: &Path,
) -> Result<ExportSummary> {
    FbxExportOptions::GAME_MESH.apply(host)?;

    let mut models_exported = 0;
    let mut textures_copied = 0;

    for obj in objects {
        info!("Processing: {}", obj.name);

        // The object name is used verbatim as folder and file name.
        let model_dir = base_path.join(&obj.name);
        fs::create_dir_all(&model_dir)
            .with_context(|| format!("Failed to create subfolder {:?}", model_dir))?;

        if let Some(material) = &obj.material {
            textures_copied += copy_textures(material, &model_dir);
        }

        // Exporters operate on the current selection, so isolate this object.
        host.select(&[obj.id])?;

        let fbx_path = model_dir.join(format!("{}.fbx", obj.name));
        info!("  Exporting {} to {:?}", obj.name, fbx_path);
        host.export_selected(&fbx_path)
            .with_context(|| format!("FBX export failed for {}", obj.name))?;
        models_exported += 1;
    }

    Ok(ExportSummary {
        base_path: base_path.to_path_buf(),
        models_exported,
        textures_copied,
    })
}

/// Copy every discovered texture into `model_dir`, preserving file names.
/// Returns the number copied; a failed copy is logged and skipped without
/// aborting the object.
fn copy_textures(material: &MaterialNode, model_dir: &Path) -> usize {
    let textures = find_textures(material);
    if textures.is_empty() {
        info!("  No textures found on material");
        return 0;
    }
    info!("  Found {} textures", textures.len());

    let mut copied = 0;
    for texture_path in &textures {
        let file_name = match texture_path.file_name() {
            Some(name) => name,
            None => {
                warn!("  Texture path has no file name: {:?}", texture_path);
                continue;
            }
        };
        let dest = model_dir.join(file_name);
        match fs::copy(texture_path, &dest) {
            Ok(_) => {
                info!("    Copied texture: {}", file_name.to_string_lossy());
                copied += 1;
            }
            Err(e) => {
                warn!("    Failed to copy texture {:?}: {}", texture_path, e);
            }
        }
    }
    copied
}
