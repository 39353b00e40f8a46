/// Texture discovery
/// Recursively collects every on-disk bitmap file referenced by a material
/// tree: composite sub-materials, nested maps (bump, diffuse, ...), the lot.

use log::debug;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::material::{MaterialNode, PropertyValue};

/// Find every bitmap file reachable from `material` that exists on disk.
///
/// Duplicate references across different slots collapse to one entry; the
/// result is unordered. Bitmaps with an empty or nonexistent backing path
/// are excluded. The walk assumes the material graph is a tree.
pub fn find_textures(material: &MaterialNode) -> HashSet<PathBuf> {
    let mut found = HashSet::new();
    walk(material, &mut found);
    found
}

fn walk(node: &MaterialNode, found: &mut HashSet<PathBuf>) {
    match node {
        MaterialNode::Multi { slots } => {
            // Empty slots are normal on multi-materials, skip them.
            for sub_material in slots.iter().flatten() {
                walk(sub_material, found);
            }
        }
        MaterialNode::Map { name, properties } => {
            for prop in properties {
                match &prop.value {
                    PropertyValue::Node(child) => walk(child, found),
                    PropertyValue::Scalar => {}
                    PropertyValue::Unreadable => {
                        debug!("Skipping unreadable property {} on {}", prop.name, name);
                    }
                }
            }
        }
        MaterialNode::Bitmap { file } => {
            if let Some(file) = file {
                if !file.as_os_str().is_empty() && file.exists() {
                    found.insert(file.clone());
                } else {
                    debug!("Skipping missing bitmap file {:?}", file);
                }
            }
        }
    }
}
