//! Presentation contract
//!
//! The rendering and physics engines are external. They implement the traits
//! here; `present` walks the scene once per frame and issues draw calls.
//! Adapters only read the scene and never keep references into it.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec3;

use super::vertex::colors;
use crate::scene::{DynamicBody, Point3, SceneModel, SubscriptionId};
use crate::settings::Settings;

/// Rendering collaborator
pub trait PresentationAdapter {
    /// Called before any draw call of a frame
    fn begin_frame(&mut self) {}

    /// A free point drawn as a marker of the given radius
    fn draw_point(&mut self, at: Point3, radius: f32, color: [f32; 4]);

    /// Connected line strip through `vertices`
    fn draw_polyline(&mut self, vertices: &[Point3], color: [f32; 4]);

    /// A spawned body at its spawn pose
    fn draw_body(&mut self, body: &DynamicBody, color: [f32; 4]);

    fn end_frame(&mut self) {}
}

/// Physics collaborator, told about each body once when it is spawned
pub trait PhysicsAdapter {
    fn insert_body(&mut self, index: usize, body: &DynamicBody);
}

/// Draw the whole scene through `adapter`.
///
/// Order: axis guides, points, squares, cube faces, bodies. Within each
/// collection entries are drawn in insertion order.
pub fn present(scene: &SceneModel, adapter: &mut dyn PresentationAdapter, settings: &Settings) {
    adapter.begin_frame();

    if settings.show_axes {
        let len = settings.axis_length;
        adapter.draw_polyline(&[Vec3::ZERO, Vec3::new(len, 0.0, 0.0)], colors::AXIS_X);
        adapter.draw_polyline(&[Vec3::ZERO, Vec3::new(0.0, len, 0.0)], colors::AXIS_Y);
        adapter.draw_polyline(&[Vec3::ZERO, Vec3::new(0.0, 0.0, len)], colors::AXIS_Z);
    }

    for p in scene.points() {
        adapter.draw_point(*p, settings.point_marker_size, colors::POINT);
    }

    for square in scene.squares() {
        adapter.draw_polyline(&square.ring(settings.outline), colors::SQUARE);
    }

    for cube in scene.cubes() {
        for face in &cube.faces {
            adapter.draw_polyline(&face.ring(settings.outline), colors::CUBE);
        }
    }

    for body in scene.dynamic_bodies() {
        adapter.draw_body(body, colors::BODY);
    }

    adapter.end_frame();
}

/// Redraws on the frame after a scene change and hands new bodies to physics.
///
/// Subscribes to the scene on `attach`; call `detach` with the same scene
/// before dropping it to remove the subscription.
#[derive(Debug)]
pub struct ScenePresenter {
    dirty: Rc<Cell<bool>>,
    subscription: SubscriptionId,
    /// Bodies already handed to physics (the list only grows)
    synced_bodies: usize,
}

impl ScenePresenter {
    pub fn attach(scene: &mut SceneModel) -> Self {
        // Draw once even if nothing is ever added
        let dirty = Rc::new(Cell::new(true));
        let flag = dirty.clone();
        let subscription = scene.subscribe(move |_| flag.set(true));
        Self {
            dirty,
            subscription,
            synced_bodies: 0,
        }
    }

    pub fn detach(self, scene: &mut SceneModel) {
        scene.unsubscribe(self.subscription);
    }

    /// True if the scene changed since the last drawn frame
    pub fn needs_redraw(&self) -> bool {
        self.dirty.get()
    }

    /// Force a redraw on the next frame (e.g. after a settings change)
    pub fn invalidate(&self) {
        self.dirty.set(true);
    }

    /// Frame tick: redraw if the scene changed. Returns whether it drew.
    pub fn frame(
        &mut self,
        scene: &SceneModel,
        adapter: &mut dyn PresentationAdapter,
        settings: &Settings,
    ) -> bool {
        if !self.dirty.replace(false) {
            return false;
        }
        present(scene, adapter, settings);
        true
    }

    /// Hand bodies spawned since the last sync to physics. Returns how many.
    ///
    /// A scene holding fewer bodies than already synced (not the attached
    /// scene) hands over nothing.
    pub fn sync_physics(&mut self, scene: &SceneModel, physics: &mut dyn PhysicsAdapter) -> usize {
        let bodies = scene.dynamic_bodies();
        let Some(fresh) = bodies.get(self.synced_bodies..) else {
            log::warn!(
                "Physics sync skipped: scene has {} bodies, {} already synced",
                bodies.len(),
                self.synced_bodies
            );
            return 0;
        };
        for (offset, body) in fresh.iter().enumerate() {
            physics.insert_body(self.synced_bodies + offset, body);
        }
        let count = fresh.len();
        self.synced_bodies += count;
        if count > 0 {
            log::debug!("Handed {count} new bodies to physics");
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{BodyKind, Outline, ParamRng, SpawnRanges};

    #[derive(Debug, PartialEq)]
    enum Call {
        Begin,
        Point(Point3),
        Polyline(usize, [f32; 4]),
        Body(BodyKind),
        End,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl PresentationAdapter for Recorder {
        fn begin_frame(&mut self) {
            self.calls.push(Call::Begin);
        }
        fn draw_point(&mut self, at: Point3, _radius: f32, _color: [f32; 4]) {
            self.calls.push(Call::Point(at));
        }
        fn draw_polyline(&mut self, vertices: &[Point3], color: [f32; 4]) {
            self.calls.push(Call::Polyline(vertices.len(), color));
        }
        fn draw_body(&mut self, body: &DynamicBody, _color: [f32; 4]) {
            self.calls.push(Call::Body(body.kind));
        }
        fn end_frame(&mut self) {
            self.calls.push(Call::End);
        }
    }

    #[derive(Default)]
    struct Physics {
        inserted: Vec<usize>,
    }

    impl PhysicsAdapter for Physics {
        fn insert_body(&mut self, index: usize, _body: &DynamicBody) {
            self.inserted.push(index);
        }
    }

    #[test]
    fn test_present_order() {
        let mut scene = SceneModel::new();
        scene.add_point(Vec3::ONE).unwrap();
        scene.add_square(Vec3::ZERO, 1.0).unwrap();
        scene.add_cube(Vec3::ZERO, 1.0).unwrap();
        scene.spawn_dynamic_body(BodyKind::Box, &SpawnRanges::default(), &mut ParamRng::new(1));

        let mut rec = Recorder::default();
        present(&scene, &mut rec, &Settings::default());

        let mut expected = vec![
            Call::Begin,
            Call::Polyline(2, colors::AXIS_X),
            Call::Polyline(2, colors::AXIS_Y),
            Call::Polyline(2, colors::AXIS_Z),
            Call::Point(Vec3::ONE),
            Call::Polyline(5, colors::SQUARE),
        ];
        expected.extend((0..6).map(|_| Call::Polyline(5, colors::CUBE)));
        expected.push(Call::Body(BodyKind::Box));
        expected.push(Call::End);
        assert_eq!(rec.calls, expected);
    }

    #[test]
    fn test_open_outline_without_axes() {
        let mut scene = SceneModel::new();
        scene.add_square(Vec3::ZERO, 2.0).unwrap();
        let settings = Settings {
            outline: Outline::Open,
            show_axes: false,
            ..Settings::default()
        };

        let mut rec = Recorder::default();
        present(&scene, &mut rec, &settings);
        assert_eq!(
            rec.calls,
            vec![Call::Begin, Call::Polyline(4, colors::SQUARE), Call::End]
        );
    }

    #[test]
    fn test_presenter_redraws_only_after_change() {
        let mut scene = SceneModel::new();
        let settings = Settings::default();
        let mut presenter = ScenePresenter::attach(&mut scene);
        let mut rec = Recorder::default();

        // First frame always draws
        assert!(presenter.frame(&scene, &mut rec, &settings));
        assert!(!presenter.frame(&scene, &mut rec, &settings));

        scene.add_point(Vec3::ZERO).unwrap();
        assert!(presenter.needs_redraw());
        assert!(presenter.frame(&scene, &mut rec, &settings));
        assert!(!presenter.needs_redraw());

        // Rejected input does not dirty the frame
        let _ = scene.add_point(Vec3::INFINITY);
        assert!(!presenter.frame(&scene, &mut rec, &settings));

        presenter.invalidate();
        assert!(presenter.frame(&scene, &mut rec, &settings));

        presenter.detach(&mut scene);
    }

    #[test]
    fn test_physics_sync_hands_each_body_once() {
        let mut scene = SceneModel::new();
        let mut rng = ParamRng::new(5);
        let ranges = SpawnRanges::default();
        let mut presenter = ScenePresenter::attach(&mut scene);
        let mut physics = Physics::default();

        scene.spawn_dynamic_body(BodyKind::Sphere, &ranges, &mut rng);
        scene.spawn_dynamic_body(BodyKind::Box, &ranges, &mut rng);
        assert_eq!(presenter.sync_physics(&scene, &mut physics), 2);
        assert_eq!(presenter.sync_physics(&scene, &mut physics), 0);

        scene.spawn_dynamic_body(BodyKind::Sphere, &ranges, &mut rng);
        assert_eq!(presenter.sync_physics(&scene, &mut physics), 1);
        assert_eq!(physics.inserted, vec![0, 1, 2]);
    }

    #[test]
    fn test_physics_sync_with_shorter_scene() {
        let mut scene = SceneModel::new();
        let mut presenter = ScenePresenter::attach(&mut scene);
        let mut physics = Physics::default();
        scene.spawn_dynamic_body(BodyKind::Box, &SpawnRanges::default(), &mut ParamRng::new(9));
        assert_eq!(presenter.sync_physics(&scene, &mut physics), 1);

        assert_eq!(presenter.sync_physics(&SceneModel::new(), &mut physics), 0);
        assert_eq!(physics.inserted, vec![0]);

        // The attached scene still syncs from where it left off
        scene.spawn_dynamic_body(BodyKind::Sphere, &SpawnRanges::default(), &mut ParamRng::new(9));
        assert_eq!(presenter.sync_physics(&scene, &mut physics), 1);
        assert_eq!(physics.inserted, vec![0, 1]);
    }
}
