//! Recoverable error conditions of the sandbox core.

use thiserror::Error;

/// The output surface has no area, so no aspect ratio or NDC mapping exists.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ViewportError {
    #[error("viewport has zero area ({width}x{height})")]
    ZeroArea { width: f32, height: f32 },
}

/// A click that could not be turned into a world point. The spawn is skipped.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PickError {
    #[error("pointer ray does not intersect the pick plane")]
    NoIntersection,

    #[error(transparent)]
    Viewport(#[from] ViewportError),
}

/// Scene configuration rejected at startup.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("time step must be positive and finite, got {0}")]
    NonPositiveTimeStep(f32),

    #[error("clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    InvalidClipPlanes { near: f32, far: f32 },

    #[error("vertical field of view must be in (0, pi), got {0}")]
    InvalidFov(f32),

    #[error("camera eye, target and up vector do not define a view")]
    DegenerateCamera,

    #[error("aspect ratio must be positive and finite, got {0}")]
    InvalidAspect(f32),

    #[error("mass must be positive, got {0}")]
    NonPositiveMass(f32),

    #[error("shape extents must be positive, got {0}")]
    NonPositiveExtent(f32),
}
