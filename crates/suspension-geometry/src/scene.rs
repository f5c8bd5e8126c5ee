//! Named, colored scene tree. Leaves hold kernel solids; groups hold
//! children. Each node carries a placement relative to its parent.

use solid_kernel::{Color, KernelSolidHandle, Placement};

#[derive(Debug, Clone)]
pub enum SceneContent {
    Solid(KernelSolidHandle),
    Group(Vec<SceneNode>),
}

#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,
    pub placement: Placement,
    pub color: Option<Color>,
    pub content: SceneContent,
}

/// A leaf resolved to world coordinates.
#[derive(Debug, Clone)]
pub struct PlacedSolid {
    /// Node names from the root down, joined with `/`.
    pub path: String,
    pub handle: KernelSolidHandle,
    pub placement: Placement,
    pub color: Option<Color>,
}

impl SceneNode {
    pub fn solid(name: impl Into<String>, handle: KernelSolidHandle) -> Self {
        Self {
            name: name.into(),
            placement: Placement::identity(),
            color: None,
            content: SceneContent::Solid(handle),
        }
    }

    pub fn group(name: impl Into<String>, children: Vec<SceneNode>) -> Self {
        Self {
            name: name.into(),
            placement: Placement::identity(),
            color: None,
            content: SceneContent::Group(children),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn children(&self) -> &[SceneNode] {
        match &self.content {
            SceneContent::Group(children) => children,
            SceneContent::Solid(_) => &[],
        }
    }

    pub fn handle(&self) -> Option<&KernelSolidHandle> {
        match &self.content {
            SceneContent::Solid(h) => Some(h),
            SceneContent::Group(_) => None,
        }
    }

    /// Depth-first search by node name.
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(name))
    }

    /// Number of solid leaves in this subtree.
    pub fn solid_count(&self) -> usize {
        match &self.content {
            SceneContent::Solid(_) => 1,
            SceneContent::Group(children) => children.iter().map(SceneNode::solid_count).sum(),
        }
    }

    /// Every leaf with its placement composed up to the root. A leaf with no
    /// color of its own inherits the nearest ancestor's.
    pub fn world_solids(&self) -> Vec<PlacedSolid> {
        let mut out = Vec::new();
        self.collect(&Placement::identity(), None, "", &mut out);
        out
    }

    fn collect(
        &self,
        parent: &Placement,
        inherited: Option<Color>,
        prefix: &str,
        out: &mut Vec<PlacedSolid>,
    ) {
        let world = self.placement.then(parent);
        let color = self.color.or(inherited);
        let path = if prefix.is_empty() {
            self.name.clone()
        } else {
            format!("{prefix}/{}", self.name)
        };
        match &self.content {
            SceneContent::Solid(handle) => out.push(PlacedSolid {
                path,
                handle: handle.clone(),
                placement: world,
                color,
            }),
            SceneContent::Group(children) => {
                for child in children {
                    child.collect(&world, color, &path, out);
                }
            }
        }
    }
}
