//! Game logic: per-frame spawn/cleanup and tap handling
//!
//! Each frame runs the spawner and then the kill-floor sweep. Taps arrive
//! asynchronously through the event queue, resolve against the scene, and
//! remove the topmost struck pyramid with a fast fade plus a background
//! color flash telling the player what they hit.

use fall_engine::foundation::math::Vec3;
use fall_engine::input::hit_test;
use fall_engine::prelude::*;
use fall_engine::scene::NodeKey;

use crate::spawn::Spawner;

/// Feedback color after tapping a friend
fn friend_feedback() -> Vec3 {
    Vec3::new(0.0, 0.0, 0.0)
}

/// Feedback color after tapping an enemy
fn enemy_feedback() -> Vec3 {
    Vec3::new(1.0, 0.0, 0.0)
}

pub struct PyramidGame {
    spawner: Spawner,
    kill_floor: f32,
    cleanup_fade: f32,
    tap_fade: f32,
    spawned: u64,
    swept: u64,
    tapped: u64,
}

impl PyramidGame {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            spawner: Spawner::new(&config.spawn),
            kill_floor: config.world.kill_floor,
            cleanup_fade: config.fade.cleanup_duration,
            tap_fade: config.fade.tap_duration,
            spawned: 0,
            swept: 0,
            tapped: 0,
        }
    }

    /// Fade out every pyramid that has fallen past the kill floor.
    ///
    /// Runs every frame; nodes already fading are skipped, so each pyramid
    /// is swept at most once.
    fn sweep_kill_floor(&mut self, engine: &mut Engine) {
        let doomed: Vec<NodeKey> = engine
            .scene
            .iter()
            .filter(|(_, node)| node.position.y < self.kill_floor && !node.is_fading())
            .map(|(key, _)| key)
            .collect();

        for key in doomed {
            if engine.fade_out(key, self.cleanup_fade) {
                self.swept += 1;
            }
        }
    }

    /// Resolve a tap: topmost hit gets a fast fade, background flashes by
    /// tag. A tap on empty background changes nothing.
    fn handle_tap(&mut self, engine: &mut Engine, x: f64, y: f64) {
        engine.touch.update_position(x, y);

        let first_hit = hit_test(&engine.scene, &engine.touch).into_iter().next();
        let Some(hit) = first_hit else {
            log::debug!("tap at ({x:.0}, {y:.0}) hit nothing");
            return;
        };

        let Some(tag) = engine.scene.get(hit.node).map(|node| node.tag) else {
            return;
        };

        engine.set_background(match tag {
            Tag::Friend => friend_feedback(),
            Tag::Enemy => enemy_feedback(),
        });

        if engine.fade_out(hit.node, self.tap_fade) {
            self.tapped += 1;
            log::info!("tapped a {:?} at distance {:.2}", tag, hit.distance);
        }
    }
}

impl Application for PyramidGame {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        log::info!(
            "camera fixed at {:?}, orientation {:?}",
            engine.scene.camera.position(),
            engine.scene.camera.orientation()
        );
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        if let Some(node) = self.spawner.poll(engine.now()) {
            engine.spawn(node);
            self.spawned += 1;
        }

        self.sweep_kill_floor(engine);
        Ok(())
    }

    fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        if let AppEvent::TouchBegan { x, y } = event {
            self.handle_tap(engine, x, y);
        }
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        log::info!(
            "session over: {} spawned, {} swept, {} tapped, {} still airborne",
            self.spawned,
            self.swept,
            self.tapped,
            engine.scene.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use fall_engine::scene::{FadeState, SceneNode};

    fn game_and_engine() -> (PyramidGame, Engine) {
        let config = GameConfig::default().with_seed(3);
        let engine = Engine::new(config.clone()).unwrap();
        (PyramidGame::new(&config), engine)
    }

    fn pyramid_at(position: Vec3, tag: Tag) -> SceneNode {
        SceneNode::new(tag, position, Vec3::new(0.5, 0.5, 0.5))
    }

    fn screen_center(engine: &Engine) -> (f64, f64) {
        (
            f64::from(engine.config().engine.window_width) / 2.0,
            f64::from(engine.config().engine.window_height) / 2.0,
        )
    }

    #[test]
    fn sweep_only_touches_nodes_below_floor() {
        let (mut game, mut engine) = game_and_engine();
        let sunk = engine.spawn(pyramid_at(Vec3::new(0.0, -2.5, 0.0), Tag::Friend));
        let near_floor = engine.spawn(pyramid_at(Vec3::new(0.0, -1.9, 0.0), Tag::Friend));
        let on_floor = engine.spawn(pyramid_at(Vec3::new(0.0, -2.0, 0.0), Tag::Friend));

        game.update(&mut engine, 0.016).unwrap();

        assert!(engine.scene.get(sunk).unwrap().is_fading());
        assert!(!engine.scene.get(near_floor).unwrap().is_fading());
        assert!(!engine.scene.get(on_floor).unwrap().is_fading());
    }

    #[test]
    fn sweep_marks_each_node_once() {
        let (mut game, mut engine) = game_and_engine();
        engine.spawn(pyramid_at(Vec3::new(0.0, -3.0, 0.0), Tag::Enemy));

        game.update(&mut engine, 0.016).unwrap();
        game.update(&mut engine, 0.016).unwrap();

        assert_eq!(game.swept, 1);
        assert_eq!(engine.events.pending_deferred(), 1);
    }

    #[test]
    fn tap_on_enemy_flashes_red_and_fast_fades() {
        let (mut game, mut engine) = game_and_engine();
        let key = engine.spawn(pyramid_at(Vec3::zeros(), Tag::Enemy));

        let (x, y) = screen_center(&engine);
        game.handle_event(&mut engine, AppEvent::TouchBegan { x, y })
            .unwrap();

        assert_eq!(engine.background(), enemy_feedback());
        let node = engine.scene.get(key).unwrap();
        match node.fade {
            FadeState::FadingOut { duration, .. } => {
                assert_relative_eq!(duration, 0.1);
            }
            FadeState::Alive => panic!("tapped node did not start fading"),
        }
    }

    #[test]
    fn tap_on_friend_flashes_black() {
        let (mut game, mut engine) = game_and_engine();
        engine.spawn(pyramid_at(Vec3::zeros(), Tag::Friend));
        engine.set_background(Vec3::new(0.5, 0.5, 0.5));

        let (x, y) = screen_center(&engine);
        game.handle_event(&mut engine, AppEvent::TouchBegan { x, y })
            .unwrap();

        assert_eq!(engine.background(), friend_feedback());
        assert_eq!(game.tapped, 1);
    }

    #[test]
    fn tap_on_background_changes_nothing() {
        let (mut game, mut engine) = game_and_engine();
        let key = engine.spawn(pyramid_at(Vec3::zeros(), Tag::Enemy));
        let before = engine.background();

        game.handle_event(&mut engine, AppEvent::TouchBegan { x: 1.0, y: 1.0 })
            .unwrap();

        assert_eq!(engine.background(), before);
        assert!(!engine.scene.get(key).unwrap().is_fading());
        assert_eq!(game.tapped, 0);
    }

    #[test]
    fn tapped_pyramid_is_gone_shortly_after() {
        let (mut game, mut engine) = game_and_engine();
        let key = engine.spawn(pyramid_at(Vec3::zeros(), Tag::Enemy));

        let (x, y) = screen_center(&engine);
        game.handle_event(&mut engine, AppEvent::TouchBegan { x, y })
            .unwrap();
        engine.step(0.2);

        assert!(engine.scene.get(key).is_none());
    }

    #[test]
    fn first_update_arms_without_spawning() {
        let (mut game, mut engine) = game_and_engine();

        game.update(&mut engine, 0.016).unwrap();
        assert!(engine.scene.is_empty());
        assert_eq!(game.spawned, 0);
    }

    #[test]
    fn played_session_spawns_and_cleans_up() {
        let (mut game, mut engine) = game_and_engine();

        // Drive five simulated seconds at a fixed frame rate.
        for _ in 0..300 {
            engine.step(1.0 / 60.0);
            game.update(&mut engine, 1.0 / 60.0).unwrap();
        }

        assert!(game.spawned >= 6);
        // Early pyramids have long since fallen past the floor and finished
        // their fades.
        assert!(game.swept >= 1);
        assert!((engine.scene.len() as u64) < game.spawned);
    }
}
