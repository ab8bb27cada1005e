//! Headless core of the box-drop sandbox: a Rapier world, the registry pairing each
//! body with its visual mesh, fixed-step driving and click-to-spawn picking.
//!
//! Nothing here knows about rendering. Hosts supply meshes through [`MeshSpawner`]
//! and read poses back through [`Sandbox::sync`] or [`Sandbox::sync_with`].

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod picking;
pub mod pose;
pub mod rapier;
pub mod registry;
pub mod sandbox;
mod startup;
pub mod world;

// Re-export the math and physics crates so hosts use the exact versions the core was built with.
pub use nalgebra;
pub use rapier3d;

pub use config::{CameraConfig, GroundConfig, SceneConfig, SpawnConfig, SphereConfig};
pub use constants::TIME_STEP;
pub use error::{ConfigError, PickError, ViewportError};
pub use events::{EventQueue, InputEvent};
pub use picking::{CameraRig, Plane, Viewport};
pub use pose::{MeshProxy, Pose};
pub use rapier::{BodyDef, BodyKind, ShapeDef};
pub use registry::{ProxyKind, ProxyPair, Registry};
pub use sandbox::{FrameReport, MeshShape, MeshSpawner, Sandbox};
pub use world::PhysicsWorld;
