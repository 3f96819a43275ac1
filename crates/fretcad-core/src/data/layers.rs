//! Layer tree behind the layer browser.
//!
//! A guitar design is organised as nested groups of drawable layers. The tree
//! is an owned value: every operation mutates the tree it is called on, and a
//! clone taken earlier keeps its old state.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::LayerError;

/// A node of the layer tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayerNode {
    /// A folder of layers and nested groups
    Group {
        /// Unique id.
        id: String,
        /// Display name.
        name: String,
        /// Whether the group and its contents are shown.
        visible: bool,
        /// Whether the group is protected from edits.
        locked: bool,
        /// Whether the group is unfolded in the browser.
        expanded: bool,
        /// Child nodes in display order.
        children: Vec<LayerNode>,
    },
    /// A drawable layer
    Layer {
        /// Unique id.
        id: String,
        /// Display name.
        name: String,
        /// Whether the layer is shown.
        visible: bool,
        /// Whether the layer is protected from edits.
        locked: bool,
        /// Highlight colour used in colour mode.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
}

impl LayerNode {
    /// New visible, locked, expanded group.
    pub fn group(id: &str, name: &str, children: Vec<LayerNode>) -> Self {
        LayerNode::Group {
            id: id.to_string(),
            name: name.to_string(),
            visible: true,
            locked: true,
            expanded: true,
            children,
        }
    }

    /// New visible, locked layer without a colour.
    pub fn layer(id: &str, name: &str) -> Self {
        LayerNode::Layer {
            id: id.to_string(),
            name: name.to_string(),
            visible: true,
            locked: true,
            color: None,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            LayerNode::Group { id, .. } | LayerNode::Layer { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            LayerNode::Group { name, .. } | LayerNode::Layer { name, .. } => name,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            LayerNode::Group { visible, .. } | LayerNode::Layer { visible, .. } => *visible,
        }
    }

    pub fn is_locked(&self) -> bool {
        match self {
            LayerNode::Group { locked, .. } | LayerNode::Layer { locked, .. } => *locked,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, LayerNode::Group { .. })
    }

    /// Colour of a layer; groups never carry one.
    pub fn color(&self) -> Option<&str> {
        match self {
            LayerNode::Layer { color, .. } => color.as_deref(),
            LayerNode::Group { .. } => None,
        }
    }

    fn children(&self) -> &[LayerNode] {
        match self {
            LayerNode::Group { children, .. } => children,
            LayerNode::Layer { .. } => &[],
        }
    }

    fn find(&self, target: &str) -> Option<&LayerNode> {
        if self.id() == target {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(target))
    }

    fn find_mut(&mut self, target: &str) -> Option<&mut LayerNode> {
        if self.id() == target {
            return Some(self);
        }
        match self {
            LayerNode::Group { children, .. } => {
                children.iter_mut().find_map(|child| child.find_mut(target))
            }
            LayerNode::Layer { .. } => None,
        }
    }

    fn for_each_layer_mut(&mut self, f: &mut dyn FnMut(&mut Option<String>)) {
        match self {
            LayerNode::Group { children, .. } => {
                for child in children {
                    child.for_each_layer_mut(f);
                }
            }
            LayerNode::Layer { color, .. } => f(color),
        }
    }

    fn collect_layer_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            LayerNode::Group { children, .. } => {
                for child in children {
                    child.collect_layer_ids(out);
                }
            }
            LayerNode::Layer { id, .. } => out.push(id),
        }
    }

    /// Visibility of `target` taking ancestors into account.
    fn visible_path(&self, target: &str) -> Option<bool> {
        if self.id() == target {
            return Some(self.is_visible());
        }
        self.children()
            .iter()
            .find_map(|child| child.visible_path(target))
            .map(|visible| visible && self.is_visible())
    }
}

/// Layer browser state: the tree plus the selected layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerTree {
    root: LayerNode,
    #[serde(default)]
    selected: Option<String>,
}

impl LayerTree {
    pub fn new(root: LayerNode) -> Self {
        Self {
            root,
            selected: None,
        }
    }

    /// The default electric guitar hierarchy
    pub fn guitar() -> Self {
        Self::new(LayerNode::group(
            "guitar",
            "Guitar",
            vec![
                LayerNode::group(
                    "body",
                    "Body",
                    vec![
                        LayerNode::layer("main-body", "Main Body"),
                        LayerNode::layer("cavities", "Cavities"),
                    ],
                ),
                LayerNode::group(
                    "neck",
                    "Neck",
                    vec![
                        LayerNode::layer("fretboard", "Fretboard"),
                        LayerNode::layer("frets", "Frets"),
                        LayerNode::layer("headstock", "Headstock"),
                    ],
                ),
                LayerNode::group(
                    "hardware",
                    "Hardware",
                    vec![
                        LayerNode::layer("bridge", "Bridge"),
                        LayerNode::layer("tuners", "Tuners"),
                    ],
                ),
                LayerNode::group(
                    "electronics",
                    "Electronics",
                    vec![
                        LayerNode::layer("pickups", "Pickups"),
                        LayerNode::layer("potentiometers", "Potentiometers"),
                        LayerNode::layer("switch", "Switch"),
                    ],
                ),
            ],
        ))
    }

    pub fn root(&self) -> &LayerNode {
        &self.root
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn find(&self, id: &str) -> Result<&LayerNode, LayerError> {
        self.root.find(id).ok_or_else(|| unknown(id))
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut LayerNode, LayerError> {
        self.root.find_mut(id).ok_or_else(|| unknown(id))
    }

    /// Flip a node's own visibility. Returns the new value.
    pub fn toggle_visibility(&mut self, id: &str) -> Result<bool, LayerError> {
        let visible = match self.find_mut(id)? {
            LayerNode::Group { visible, .. } | LayerNode::Layer { visible, .. } => {
                *visible = !*visible;
                *visible
            }
        };
        tracing::debug!(id, visible, "Layer visibility toggled");
        Ok(visible)
    }

    /// Flip a node's lock. Returns the new value.
    pub fn toggle_lock(&mut self, id: &str) -> Result<bool, LayerError> {
        match self.find_mut(id)? {
            LayerNode::Group { locked, .. } | LayerNode::Layer { locked, .. } => {
                *locked = !*locked;
                Ok(*locked)
            }
        }
    }

    /// Fold or unfold a group. Layers have nothing to expand and stay `false`.
    pub fn toggle_expanded(&mut self, id: &str) -> Result<bool, LayerError> {
        match self.find_mut(id)? {
            LayerNode::Group { expanded, .. } => {
                *expanded = !*expanded;
                Ok(*expanded)
            }
            LayerNode::Layer { .. } => Ok(false),
        }
    }

    /// Give every layer a random hue.
    pub fn assign_colors<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.root.for_each_layer_mut(&mut |color| {
            let hue: u16 = rng.random_range(0..360);
            *color = Some(format!("hsl({}, 75%, 50%)", hue));
        });
    }

    pub fn clear_colors(&mut self) {
        self.root.for_each_layer_mut(&mut |color| *color = None);
    }

    /// Whether a node is shown: it and every ancestor must be visible.
    pub fn effective_visible(&self, id: &str) -> Result<bool, LayerError> {
        self.root.visible_path(id).ok_or_else(|| unknown(id))
    }

    /// Ids of all leaf layers, depth first.
    pub fn layer_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        self.root.collect_layer_ids(&mut ids);
        ids
    }

    /// Toggle selection of a layer.
    ///
    /// Selecting the selected layer clears the selection. Returns the
    /// selection after the call.
    pub fn select(&mut self, id: &str) -> Result<Option<&str>, LayerError> {
        if self.find(id)?.is_group() {
            return Err(LayerError::NotALayer { id: id.to_string() });
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
        Ok(self.selected.as_deref())
    }
}

impl Default for LayerTree {
    fn default() -> Self {
        Self::guitar()
    }
}

fn unknown(id: &str) -> LayerError {
    LayerError::UnknownLayer { id: id.to_string() }
}
