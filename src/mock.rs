/// In-memory host used by the unit tests: a scripted folder picker, a
/// recorded dialog/exporter call log, and a scene whose selection behaves
/// like the real thing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::host::{Host, HostError, ObjectId, ParamValue, SceneObject};

pub struct MockHost {
    pub scene: Vec<SceneObject>,
    pub selected: Vec<ObjectId>,
    pub default_export_dir: PathBuf,
    pub settings_dir: PathBuf,

    /// What the folder picker answers; `None` means the user cancels.
    pub pick_folder_answer: Option<PathBuf>,
    /// Name of an object whose FBX export should fail, if any.
    pub fail_export_for: Option<String>,

    /// Recorded calls, newest last.
    pub messages: Vec<(String, String)>,
    pub export_params: Vec<(String, ParamValue)>,
    pub exports: Vec<PathBuf>,
    pub pick_folder_initials: Vec<PathBuf>,
}

impl MockHost {
    pub fn new(settings_dir: impl Into<PathBuf>, default_export_dir: impl Into<PathBuf>) -> Self {
        MockHost {
            scene: Vec::new(),
            selected: Vec::new(),
            default_export_dir: default_export_dir.into(),
            settings_dir: settings_dir.into(),
            pick_folder_answer: None,
            fail_export_for: None,
            messages: Vec::new(),
            export_params: Vec::new(),
            exports: Vec::new(),
            pick_folder_initials: Vec::new(),
        }
    }

    /// Add an object to the scene and to the current selection.
    pub fn add_selected(&mut self, name: &str, material: Option<crate::material::MaterialNode>) -> ObjectId {
        let id = ObjectId(self.scene.len() as u64 + 1);
        self.scene.push(SceneObject {
            id,
            name: name.to_string(),
            material,
        });
        self.selected.push(id);
        id
    }

    fn object(&self, id: ObjectId) -> Result<&SceneObject, HostError> {
        self.scene
            .iter()
            .find(|o| o.id == id)
            .ok_or(HostError::UnknownObject(id))
    }
}

impl Host for MockHost {
    fn selection(&self) -> Vec<SceneObject> {
        self.selected
            .iter()
            .filter_map(|id| self.scene.iter().find(|o| o.id == *id))
            .cloned()
            .collect()
    }

    fn select(&mut self, ids: &[ObjectId]) -> Result<(), HostError> {
        for id in ids {
            self.object(*id)?;
        }
        self.selected = ids.to_vec();
        Ok(())
    }

    fn default_export_dir(&self) -> PathBuf {
        self.default_export_dir.clone()
    }

    fn settings_dir(&self) -> PathBuf {
        self.settings_dir.clone()
    }

    fn pick_folder(&mut self, _caption: &str, initial: &Path) -> Option<PathBuf> {
        self.pick_folder_initials.push(initial.to_path_buf());
        self.pick_folder_answer.clone()
    }

    fn message_box(&mut self, title: &str, text: &str) {
        self.messages.push((title.to_string(), text.to_string()));
    }

    fn set_export_param(&mut self, name: &str, value: ParamValue) -> Result<(), HostError> {
        self.export_params.push((name.to_string(), value));
        Ok(())
    }

    fn export_selected(&mut self, path: &Path) -> Result<(), HostError> {
        if let Some(fail_for) = &self.fail_export_for {
            let selected_names: Vec<&str> = self
                .selected
                .iter()
                .filter_map(|id| self.scene.iter().find(|o| o.id == *id))
                .map(|o| o.name.as_str())
                .collect();
            if selected_names.contains(&fail_for.as_str()) {
                return Err(HostError::ExportFailed {
                    path: path.to_path_buf(),
                    message: "simulated exporter failure".to_string(),
                });
            }
        }

        // Write a stub file so layout assertions can check the output tree.
        fs::write(path, b"FBX").map_err(|e| HostError::ExportFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.exports.push(path.to_path_buf());
        Ok(())
    }
}
