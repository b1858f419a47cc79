//! Geo Playground entry point
//!
//! On the web this exposes a `Playground` to the host page, which owns the
//! canvas, camera controls and physics engine. Natively it runs a short demo
//! session and logs what would be drawn.

#[cfg(target_arch = "wasm32")]
mod wasm_playground {
    use wasm_bindgen::prelude::*;

    use geo_playground::forms::{Axis, CubeForm, PointForm, SquareForm};
    use geo_playground::renderer::{LineBatch, ScenePresenter};
    use geo_playground::scene::{BodyKind, Outline, ParamRng, SceneModel};
    use geo_playground::{Settings, axis_markers};

    fn js_err(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    fn axis(name: &str) -> Result<Axis, JsValue> {
        Axis::from_str(name).ok_or_else(|| js_err(format!("unknown axis {name:?}")))
    }

    /// Scene, forms and line batch for one page session
    #[wasm_bindgen]
    pub struct Playground {
        scene: SceneModel,
        settings: Settings,
        rng: ParamRng,
        presenter: ScenePresenter,
        batch: LineBatch,
        point_form: PointForm,
        square_form: SquareForm,
        cube_form: CubeForm,
    }

    #[wasm_bindgen]
    impl Playground {
        #[wasm_bindgen(constructor)]
        pub fn new() -> Result<Playground, JsValue> {
            let settings = Settings::load();
            let rng = match settings.seed {
                Some(seed) => ParamRng::new(seed),
                None => ParamRng::from_entropy(),
            };
            log::info!("Playground initialized with seed: {}", rng.seed());

            let mut scene = SceneModel::new();
            let presenter = ScenePresenter::attach(&mut scene);
            for p in axis_markers(settings.axis_length) {
                scene.add_point(p).map_err(js_err)?;
            }

            Ok(Playground {
                batch: LineBatch::new(settings.sphere_segments),
                cube_form: CubeForm::new(settings.cube_form),
                point_form: PointForm::new(),
                square_form: SquareForm::new(),
                scene,
                settings,
                rng,
                presenter,
            })
        }

        pub fn set_point_field(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
            self.point_form.set_field(axis(name)?, value).map_err(js_err)
        }

        pub fn submit_point(&mut self) -> Result<usize, JsValue> {
            self.point_form.submit(&mut self.scene).map_err(js_err)
        }

        pub fn set_square_field(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
            let result = if name == "length" {
                self.square_form.set_length(value)
            } else {
                self.square_form.set_origin(axis(name)?, value)
            };
            result.map_err(js_err)
        }

        pub fn submit_square(&mut self) -> Result<usize, JsValue> {
            self.square_form.submit(&mut self.scene).map_err(js_err)
        }

        pub fn set_cube_field(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
            let result = if name == "length" {
                self.cube_form.set_length(value)
            } else {
                self.cube_form.set_origin(axis(name)?, value)
            };
            result.map_err(js_err)
        }

        pub fn submit_cube(&mut self) -> Result<usize, JsValue> {
            self.cube_form
                .submit(&mut self.scene, &mut self.rng)
                .map_err(js_err)
        }

        /// Current cube form values: [length, x, y, z]
        pub fn cube_defaults(&self) -> Vec<f32> {
            let o = self.cube_form.origin;
            vec![self.cube_form.length, o.x, o.y, o.z]
        }

        /// Spawn a "sphere" or "box"; returns [x, y, z, size, mass]
        pub fn spawn_body(&mut self, kind: &str) -> Result<Vec<f32>, JsValue> {
            let kind =
                BodyKind::from_str(kind).ok_or_else(|| js_err(format!("unknown body {kind:?}")))?;
            let body = self
                .scene
                .spawn_dynamic_body(kind, &self.settings.spawn, &mut self.rng);
            let p = body.position;
            Ok(vec![p.x, p.y, p.z, body.size, body.mass])
        }

        /// Toggle closed outlines and axis guides, persisting the choice
        pub fn set_display(&mut self, closed_outline: bool, show_axes: bool) {
            self.settings.outline = if closed_outline {
                Outline::Closed
            } else {
                Outline::Open
            };
            self.settings.show_axes = show_axes;
            self.settings.save();
            self.presenter.invalidate();
        }

        /// Frame tick. Returns true when `line_vertices` changed.
        pub fn frame(&mut self) -> bool {
            self.presenter
                .frame(&self.scene, &mut self.batch, &self.settings)
        }

        /// Interleaved xyz rgba line-list vertices of the last drawn frame
        pub fn line_vertices(&self) -> js_sys::Float32Array {
            js_sys::Float32Array::from(self.batch.as_floats())
        }
    }

    pub fn init() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
        log::info!("Geo Playground starting...");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_playground::init();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use geo_playground::renderer::{LineBatch, ScenePresenter};
    use geo_playground::scene::{BodyKind, ParamRng, SceneModel};
    use geo_playground::{Settings, axis_markers};
    use glam::Vec3;

    env_logger::init();
    log::info!("Geo Playground (native) starting...");
    log::info!("Rendering requires a browser host - run with `trunk serve` for the web version");

    let settings = Settings::load();
    let mut rng = settings.seed.map(ParamRng::new).unwrap_or_else(ParamRng::from_entropy);
    log::info!("Seed: {}", rng.seed());

    let mut scene = SceneModel::new();
    let mut presenter = ScenePresenter::attach(&mut scene);
    let mut batch = LineBatch::new(settings.sphere_segments);

    let demo = axis_markers(settings.axis_length)
        .into_iter()
        .try_for_each(|p| scene.add_point(p).map(|_| ()))
        .and_then(|_| scene.add_square(Vec3::ZERO, 1.0))
        .and_then(|_| scene.add_cube(Vec3::splat(5.0), 5.0));
    if let Err(e) = demo {
        log::error!("Demo scene rejected: {e}");
        return;
    }
    for kind in [BodyKind::Sphere, BodyKind::Box, BodyKind::Sphere] {
        scene.spawn_dynamic_body(kind, &settings.spawn, &mut rng);
    }

    if presenter.frame(&scene, &mut batch, &settings) {
        println!(
            "{} points, {} squares, {} cubes, {} bodies -> {} line segments ({} bytes)",
            scene.points().len(),
            scene.squares().len(),
            scene.cubes().len(),
            scene.dynamic_bodies().len(),
            batch.segment_count(),
            batch.as_bytes().len()
        );
    }
    presenter.detach(&mut scene);
}
