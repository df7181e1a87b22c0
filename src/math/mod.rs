//! Vector and matrix types used throughout the pipeline.
//!
//! All scalars are `f64`. The clipping engine relies on a shared absolute
//! tolerance (see [`crate::clip::EPS`]) that is only meaningful at double
//! precision.

pub mod mat4;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use mat4::Mat4;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
