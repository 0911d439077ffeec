use crate::core::prelude::*;

/// Maps a point of `[0,1)^2` to a direction uniformly distributed over the
/// unit sphere.
pub fn uniform_sample_sphere(u: &Point2f) -> Vector3f {
    let z = 1.0 - 2.0 * u[0];
    // z*z may round slightly above one
    let r = Float::sqrt(Float::max(0.0, 1.0 - z * z));
    let phi = 2.0 * PI * u[1];
    return Vector3f::new(r * Float::cos(phi), r * Float::sin(phi), z).normalize();
}

/// Solid angle density of `uniform_sample_sphere`.
#[inline]
pub fn uniform_sphere_pdf() -> Float {
    return INV_4_PI;
}
