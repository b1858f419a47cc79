//! Presentation module
//!
//! Defines the contract the external rendering/physics engines implement and
//! a line-list batcher producing GPU-ready vertex data.

pub mod adapter;
pub mod batch;
pub mod shapes;
pub mod vertex;

pub use adapter::{PhysicsAdapter, PresentationAdapter, ScenePresenter, present};
pub use batch::LineBatch;
pub use vertex::Vertex;
