/// Material node model
/// A closed set of variants standing in for the host's introspected
/// material/texture-map objects. The host adapter builds these trees once at
/// the boundary; everything downstream works against this model instead of
/// raw host introspection.

use std::path::PathBuf;

/// A node in an object's material/texture-map tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaterialNode {
    /// Composite material assigning sub-materials by slot index.
    /// Slots may be empty.
    Multi { slots: Vec<Option<MaterialNode>> },

    /// A standard material or a non-bitmap texture map (procedural, layered,
    /// ...) carrying dynamic properties, some of which may hold further
    /// material nodes.
    Map {
        name: String,
        properties: Vec<Property>,
    },

    /// A texture map backed directly by an image file on disk. Terminal:
    /// traversal never descends into a bitmap's own properties.
    Bitmap { file: Option<PathBuf> },
}

/// One dynamic property on a `Map` node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

/// Value held by a dynamic property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// Another material/texture-map node (e.g. a bump or diffuse map slot).
    Node(MaterialNode),

    /// Non-map value (color, float, string). Irrelevant to texture discovery.
    Scalar,

    /// The host failed to read this property. Skipped during traversal;
    /// stands in for the host adapter's fallible per-property lookup.
    Unreadable,
}

impl MaterialNode {
    /// A bitmap texture backed by `file`.
    pub fn bitmap(file: impl Into<PathBuf>) -> Self {
        MaterialNode::Bitmap {
            file: Some(file.into()),
        }
    }

    /// A named material or texture map with the given properties.
    pub fn map(name: impl Into<String>, properties: Vec<Property>) -> Self {
        MaterialNode::Map {
            name: name.into(),
            properties,
        }
    }
}

impl Property {
    /// A property holding a nested material node.
    pub fn node(name: impl Into<String>, node: MaterialNode) -> Self {
        Property {
            name: name.into(),
            value: PropertyValue::Node(node),
        }
    }

    /// A property holding a non-map value.
    pub fn scalar(name: impl Into<String>) -> Self {
        Property {
            name: name.into(),
            value: PropertyValue::Scalar,
        }
    }

    /// A property the host could not read.
    pub fn unreadable(name: impl Into<String>) -> Self {
        Property {
            name: name.into(),
            value: PropertyValue::Unreadable,
        }
    }
}
