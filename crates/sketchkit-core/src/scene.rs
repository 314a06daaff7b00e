//! Editable scene model and its JSON file format.
//!
//! The scene is a flat store of shapes keyed by id. Edits are expressed
//! as [`SceneChange`] values so the undo history can replay them in
//! either direction. Persistence goes through [`SceneFile`], a versioned
//! JSON envelope with metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scene file format version.
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// A drawable shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
    },
    Path {
        points: Vec<(f64, f64)>,
        #[serde(default)]
        closed: bool,
    },
}

/// The drawable content a document works on.
///
/// Shape ids are handed out by the scene and never reused within its
/// lifetime. Iteration order is id order, which keeps serialization
/// deterministic.
#[derive(Debug, Clone)]
pub struct Scene {
    name: String,
    shapes: BTreeMap<u64, Shape>,
    next_id: u64,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::with_name("Untitled")
    }

    /// Creates an empty scene with a display name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// The scene's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts a shape and returns its new id.
    pub fn insert(&mut self, shape: Shape) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.shapes.insert(id, shape);
        id
    }

    /// Re-inserts a shape under a known id (undo/redo and file load).
    pub fn restore(&mut self, id: u64, shape: Shape) {
        self.shapes.insert(id, shape);
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }

    /// Removes a shape, returning it if present.
    pub fn remove(&mut self, id: u64) -> Option<Shape> {
        self.shapes.remove(&id)
    }

    /// Gets a shape by id.
    pub fn get(&self, id: u64) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Number of shapes in the scene.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the scene holds no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iterates shapes in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Shape)> {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

/// A single undoable edit against a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneChange {
    Insert { id: u64, shape: Shape },
    Remove { id: u64, shape: Shape },
    Replace { id: u64, before: Shape, after: Shape },
}

impl SceneChange {
    /// The change that reverts this one.
    pub fn inverse(&self) -> Self {
        match self {
            SceneChange::Insert { id, shape } => SceneChange::Remove {
                id: *id,
                shape: shape.clone(),
            },
            SceneChange::Remove { id, shape } => SceneChange::Insert {
                id: *id,
                shape: shape.clone(),
            },
            SceneChange::Replace { id, before, after } => SceneChange::Replace {
                id: *id,
                before: after.clone(),
                after: before.clone(),
            },
        }
    }

    /// Applies the change to a scene.
    pub fn apply(&self, scene: &mut Scene) {
        match self {
            SceneChange::Insert { id, shape } => scene.restore(*id, shape.clone()),
            SceneChange::Remove { id, .. } => {
                scene.remove(*id);
            }
            SceneChange::Replace { id, after, .. } => scene.restore(*id, after.clone()),
        }
    }
}

/// Scene metadata stored in the file envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub generator: String,
}

/// Serialized shape record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeRecord {
    pub id: u64,
    #[serde(flatten)]
    pub shape: Shape,
}

/// Complete scene file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub version: String,
    pub metadata: SceneMetadata,
    pub shapes: Vec<ShapeRecord>,
}

impl SceneFile {
    /// Builds a file envelope from a scene.
    pub fn from_scene(scene: &Scene) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: SceneMetadata {
                name: scene.name().to_string(),
                created: now,
                modified: now,
                generator: format!("sketchkit {}", env!("CARGO_PKG_VERSION")),
            },
            shapes: scene
                .iter()
                .map(|(id, shape)| ShapeRecord {
                    id,
                    shape: shape.clone(),
                })
                .collect(),
        }
    }

    /// Rebuilds a scene from the envelope.
    pub fn into_scene(self) -> Scene {
        let mut scene = Scene::with_name(self.metadata.name);
        for record in self.shapes {
            scene.restore(record.id, record.shape);
        }
        scene
    }

    /// Serializes the envelope to JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }

    /// Parses an envelope from JSON bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
