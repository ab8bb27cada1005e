/// Fixed simulation increment in seconds. One step is taken per display frame,
/// independent of the wall-clock time between frames.
pub const TIME_STEP: f32 = 1.0 / 60.0;

/// Gravity along -Y in meters per second squared.
pub const GRAVITY_MPS2: f32 = 9.81;

/// Edge length of the visual ground square (meters). The collider is an infinite half-space.
pub const GROUND_SIZE: f32 = 30.0;

/// Half-extents of a clicked box (meters), i.e. a 2x2x2 cube.
pub const BOX_HALF_EXTENT: f32 = 1.0;

/// Mass of a clicked box (kilograms).
pub const BOX_MASS: f32 = 1.0;

/// Initial spin given to a clicked box around +Y (radians per second).
pub const BOX_SPIN_RAD_PER_S: f32 = 10.0;

/// Angular damping applied to a clicked box.
pub const BOX_ANGULAR_DAMPING: f32 = 0.5;

/// Friction used for the "slippery" box/ground contact when enabled.
pub const SLIPPERY_FRICTION: f32 = 0.05;

/// Demo sphere parameters.
pub const SPHERE_RADIUS: f32 = 2.0;
pub const SPHERE_MASS: f32 = 10.0;
pub const SPHERE_START_HEIGHT: f32 = 15.0;
pub const SPHERE_LINEAR_DAMPING: f32 = 0.31;

/// Default camera placement. The camera looks at the scene origin.
pub const CAMERA_EYE: [f32; 3] = [0.0, 20.0, -30.0];
pub const CAMERA_FOV_Y_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Aspect ratio used until the first valid viewport size is known.
pub const DEFAULT_ASPECT: f32 = 16.0 / 9.0;

/// Depth (in normalized device coordinates) used when unprojecting the pointer.
pub const UNPROJECT_DEPTH: f32 = 0.5;

/// Below this `|normal . dir|` a ray is treated as parallel to a plane.
pub const PARALLEL_EPS: f32 = 1.0e-6;
