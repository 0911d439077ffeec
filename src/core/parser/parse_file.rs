use crate::core::prelude::*;
use crate::lights::create_light;
use crate::materials::create_material;
use crate::shapes::create_shape;

use log::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads a scene description from `path`.
///
/// The first malformed line aborts the load; no partial scene is returned.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Scene, SwanError> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            return Err(SwanError::Open {
                path: path.display().to_string(),
                source: e,
            });
        }
    };
    info!("Loading scene \"{}\"", path.display());
    return parse_reader(BufReader::new(file));
}

pub fn parse_string(s: &str) -> Result<Scene, SwanError> {
    return parse_reader(s.as_bytes());
}

pub fn parse_reader<R: BufRead>(reader: R) -> Result<Scene, SwanError> {
    let mut scene = Scene::new();
    for (i, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => return Err(SwanError::Read { line: i + 1, source: e }),
        };
        if is_comment_or_empty(&line) {
            continue;
        }
        let mut params = Parameter::new(&line, i + 1);
        if params.is_empty() {
            continue;
        }
        parse_line(&mut scene, &mut params)?;
    }
    info!(
        "Scene loaded: {} lights, {} objects",
        scene.num_lights(),
        scene.num_objects()
    );
    return Ok(scene);
}

// A '#' anywhere comments out the whole line.
fn is_comment_or_empty(line: &str) -> bool {
    return line.is_empty() || line.contains('#');
}

fn parse_line(scene: &mut Scene, params: &mut Parameter) -> Result<(), SwanError> {
    let keyword = params.find_string()?;
    match keyword.as_str() {
        "Object" => {
            let id = find_object(scene, params)?;
            debug!("line: {}: object {}", params.line(), id.index());
        }
        "Light" => {
            let id = find_light(scene, params)?;
            debug!("line: {}: light {}", params.line(), id.index());
        }
        _ => {
            let expected = "\"Object\" or \"Light\"";
            return Err(SwanError::syntax(params.line(), expected, &keyword));
        }
    }
    let rest = params.remaining();
    if !rest.is_empty() {
        warn!(
            "line: {}: ignoring trailing fields \"{}\"",
            params.line(),
            rest.join(" ")
        );
    }
    return Ok(());
}

fn find_object(scene: &mut Scene, params: &mut Parameter) -> Result<ObjectId, SwanError> {
    let name = params.find_keyword("\"Diffuse\" or \"Reflect\"")?;
    let material = create_material(&name, params)?;
    let shape_name = params.find_keyword("\"Sphere\"")?;
    let shape = create_shape(&shape_name, params)?;
    let material = scene.add_material(material);
    return Ok(scene.add_object(shape, material));
}

fn find_light(scene: &mut Scene, params: &mut Parameter) -> Result<LightId, SwanError> {
    let name = params.find_keyword("\"Point\" or \"Directional\"")?;
    let light = create_light(&name, params)?;
    return Ok(scene.add_light(light));
}
