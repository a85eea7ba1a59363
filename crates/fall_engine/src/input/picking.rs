//! Tap-to-object resolution
//!
//! Determining what the player touched is input-system responsibility: a
//! screen point becomes a camera ray, the ray is tested against every live
//! node's bounds, and hits come back nearest first. Callers that only care
//! about "the topmost thing under the finger" take the first element.

use crate::scene::{NodeKey, Scene};

use super::TouchState;

/// A single pick result
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// The node struck by the pick ray
    pub node: NodeKey,
    /// Distance from the camera to the ray's entry point
    pub distance: f32,
}

/// Resolve a touch against the scene.
///
/// Returns every node whose bounds the pick ray crosses, ordered nearest
/// first. An empty vector means the touch landed on background.
pub fn hit_test(scene: &Scene, touch: &TouchState) -> Vec<Hit> {
    let (ndc_x, ndc_y) = touch.screen_to_ndc();
    let ray = scene.camera.pick_ray(ndc_x, ndc_y);

    let mut hits: Vec<Hit> = scene
        .iter()
        .filter_map(|(key, node)| {
            node.bounds()
                .intersect_ray(ray.origin, ray.direction)
                .map(|distance| Hit {
                    node: key,
                    distance,
                })
        })
        .collect();

    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}
