//! Scene object store and node lifecycle
//!
//! Nodes live in a generational slot map: keys handed out at spawn stay
//! valid until the node is removed, after which they dangle harmlessly —
//! removal with a stale key is a no-op. This is what lets a deferred
//! removal event race a kill-floor sweep without either party checking the
//! other.

pub mod bounds;
pub mod camera;

use slotmap::SlotMap;

use crate::foundation::math::Vec3;
use crate::physics::RigidBody;

use self::bounds::Aabb;
use self::camera::Camera;

slotmap::new_key_type! {
    /// Generational key identifying a scene node
    pub struct NodeKey;
}

/// Gameplay identity of a node, rolled at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Tapping this one is safe
    Friend,
    /// Tapping this one is penalized
    Enemy,
}

/// Removal lifecycle of a node
///
/// A node is `Alive` until something starts a fade; entering `FadingOut`
/// a second time is a no-op (guarded by the engine). Removal itself happens
/// when the scheduled removal event is delivered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadeState {
    /// In play, fully interactive
    Alive,
    /// Opacity animating toward zero; removal already scheduled
    FadingOut {
        /// Simulation time at which the fade began
        started_at: f64,
        /// Fade length in seconds
        duration: f32,
        /// Opacity captured when the fade began
        from_opacity: f32,
    },
}

/// One falling object in the scene
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Gameplay identity
    pub tag: Tag,
    /// World-space position, advanced by the simulation step
    pub position: Vec3,
    /// Ballistic state (velocity); impulses land here
    pub body: RigidBody,
    /// Half-size of the picking bounds around `position`
    pub half_extents: Vec3,
    /// Current opacity in `[0, 1]`
    pub opacity: f32,
    /// Removal lifecycle state
    pub fade: FadeState,
}

impl SceneNode {
    /// Create a live, fully opaque node
    pub fn new(tag: Tag, position: Vec3, half_extents: Vec3) -> Self {
        Self {
            tag,
            position,
            body: RigidBody::default(),
            half_extents,
            opacity: 1.0,
            fade: FadeState::Alive,
        }
    }

    /// Picking bounds at the node's current position
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_extents(self.position, self.half_extents)
    }

    /// Whether a fade has already been started on this node
    pub fn is_fading(&self) -> bool {
        matches!(self.fade, FadeState::FadingOut { .. })
    }
}

/// The scene: a camera plus the live node set
#[derive(Debug)]
pub struct Scene {
    nodes: SlotMap<NodeKey, SceneNode>,
    /// The single fixed camera, oriented once at construction
    pub camera: Camera,
}

impl Scene {
    /// Create an empty scene observed by `camera`
    pub fn new(camera: Camera) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            camera,
        }
    }

    /// Add a node, returning its key
    pub fn insert(&mut self, node: SceneNode) -> NodeKey {
        self.nodes.insert(node)
    }

    /// Remove a node. Returns `None` (and does nothing) for stale keys.
    pub fn remove(&mut self, key: NodeKey) -> Option<SceneNode> {
        self.nodes.remove(key)
    }

    /// Look up a node
    pub fn get(&self, key: NodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    /// Look up a node mutably
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut SceneNode> {
        self.nodes.get_mut(key)
    }

    /// Iterate over all live nodes
    pub fn iter(&self) -> impl Iterator<Item = (NodeKey, &SceneNode)> + '_ {
        self.nodes.iter()
    }

    /// Iterate mutably over all live nodes
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (NodeKey, &mut SceneNode)> + '_ {
        self.nodes.iter_mut()
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_scene() -> Scene {
        Scene::new(Camera::aimed_at(
            Vec3::new(0.0, 5.0, 10.0),
            Vec3::zeros(),
            60.0,
            0.5,
            0.1,
            100.0,
        ))
    }

    fn test_node(y: f32) -> SceneNode {
        SceneNode::new(Tag::Friend, Vec3::new(0.0, y, 0.0), Vec3::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn insert_and_remove() {
        let mut scene = test_scene();
        let a = scene.insert(test_node(0.0));
        let b = scene.insert(test_node(1.0));
        assert_eq!(scene.len(), 2);

        assert!(scene.remove(a).is_some());
        assert_eq!(scene.len(), 1);
        assert!(scene.get(b).is_some());
    }

    #[test]
    fn stale_key_removal_is_noop() {
        let mut scene = test_scene();
        let key = scene.insert(test_node(0.0));
        assert!(scene.remove(key).is_some());

        // Second removal through the same key must not disturb anything.
        assert!(scene.remove(key).is_none());
        let other = scene.insert(test_node(2.0));
        assert!(scene.remove(key).is_none());
        assert!(scene.get(other).is_some());
    }

    #[test]
    fn new_nodes_start_alive_and_opaque() {
        let node = test_node(0.0);
        assert_eq!(node.fade, FadeState::Alive);
        assert!(!node.is_fading());
        assert_eq!(node.opacity, 1.0);
    }
}
