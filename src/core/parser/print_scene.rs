use crate::core::prelude::*;

use std::io;
use std::io::Write;

fn format_vector(v: &Vector3f) -> String {
    return format!("{} {} {}", v.x, v.y, v.z);
}

fn format_spectrum(s: &Spectrum) -> String {
    let c = s.to_rgb();
    return format!("{} {} {}", c[0], c[1], c[2]);
}

/// Writes `scene` back in scene file syntax: objects first, then lights.
///
/// Loading the output yields a scene equal to `scene`. Area lights have no
/// scene syntax and are written as comments.
pub fn print_scene<W: Write>(scene: &Scene, w: &mut W) -> Result<(), SwanError> {
    for object in scene.objects() {
        let material = match scene.material(object.material()) {
            Some(m) => m,
            None => {
                let msg = format!("material {} is not in the scene", object.material().index());
                return Err(SwanError::from(io::Error::new(io::ErrorKind::InvalidData, msg)));
            }
        };
        let shape = match object.shape() {
            Shape::Sphere(s) => format!("Sphere {} {}", format_vector(&s.center), s.radius),
        };
        writeln!(
            w,
            "Object {} {} {}",
            material.name(),
            format_spectrum(&material.reflectance()),
            shape
        )?;
    }
    for light in scene.lights() {
        match light {
            Light::Point(l) => {
                writeln!(
                    w,
                    "Light Point {} {}",
                    format_vector(&l.position()),
                    format_spectrum(&l.intensity())
                )?;
            }
            Light::Directional(l) => {
                writeln!(
                    w,
                    "Light Directional {} {}",
                    format_vector(&l.travel_direction()),
                    format_spectrum(&l.intensity())
                )?;
            }
            Light::Area(_) => {
                writeln!(w, "# Light Area")?;
            }
        }
    }
    return Ok(());
}
