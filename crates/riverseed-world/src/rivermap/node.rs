use riverseed_geom::Vec2i;
use serde::{Deserialize, Serialize};

/// Lowest height that still counts as a river end.
pub const END_HEIGHT: f32 = 0.6;
/// Start band, `[START_HEIGHT, START_LIMIT)`.
pub const START_HEIGHT: f32 = 0.25;
pub const START_LIMIT: f32 = 0.35;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    #[default]
    None,
    Start,
    End,
}

impl NodeType {
    pub const ALL: [NodeType; 3] = [NodeType::None, NodeType::Start, NodeType::End];

    #[inline]
    pub fn classify(value: f32) -> NodeType {
        if value >= END_HEIGHT {
            NodeType::End
        } else if (START_HEIGHT..START_LIMIT).contains(&value) {
            NodeType::Start
        } else {
            NodeType::None
        }
    }

    /// The type a river partner must have. `None` pairs with itself.
    #[inline]
    pub fn opposite(self) -> NodeType {
        match self {
            NodeType::None => NodeType::None,
            NodeType::Start => NodeType::End,
            NodeType::End => NodeType::Start,
        }
    }
}

/// An accepted river placement in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RiverNode {
    pub x: i32,
    pub z: i32,
    pub kind: NodeType,
}

impl RiverNode {
    #[inline]
    pub const fn new(x: i32, z: i32, kind: NodeType) -> Self {
        Self { x, z, kind }
    }

    #[inline]
    pub fn pos(&self) -> Vec2i {
        Vec2i::new(self.x, self.z)
    }
}

/// Height plus its classification, copied out of the heightmap per query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightSample {
    pub value: f32,
    pub kind: NodeType,
}

impl HeightSample {
    #[inline]
    pub fn new(value: f32) -> Self {
        Self {
            value,
            kind: NodeType::classify(value),
        }
    }
}
