use crate::core::prelude::*;

use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LightId(usize);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ObjectId(usize);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MaterialId(usize);

impl LightId {
    pub fn index(&self) -> usize {
        return self.0;
    }
}

impl ObjectId {
    pub fn index(&self) -> usize {
        return self.0;
    }
}

impl MaterialId {
    pub fn index(&self) -> usize {
        return self.0;
    }
}

/// A shape bound to the material stored in the owning scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Object {
    shape: Shape,
    material: MaterialId,
}

impl Object {
    pub fn new(shape: Shape, material: MaterialId) -> Self {
        Object { shape, material }
    }

    pub fn shape(&self) -> &Shape {
        return &self.shape;
    }

    pub fn material(&self) -> MaterialId {
        return self.material;
    }
}

/// Lights, objects and materials loaded from a scene description.
///
/// The scene owns every item; callers refer to them through the ids handed
/// out while loading. Items are only ever appended, so ids stay valid for the
/// lifetime of the scene.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    lights: Vec<Light>,
    objects: Vec<Object>,
    materials: Vec<Material>,
}

impl Scene {
    pub fn new() -> Self {
        Scene::default()
    }

    pub(crate) fn add_light(&mut self, light: Light) -> LightId {
        self.lights.push(light);
        return LightId(self.lights.len() - 1);
    }

    pub(crate) fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        return MaterialId(self.materials.len() - 1);
    }

    pub(crate) fn add_object(&mut self, shape: Shape, material: MaterialId) -> ObjectId {
        self.objects.push(Object::new(shape, material));
        return ObjectId(self.objects.len() - 1);
    }

    pub fn lights(&self) -> &[Light] {
        return &self.lights;
    }

    pub fn objects(&self) -> &[Object] {
        return &self.objects;
    }

    pub fn materials(&self) -> &[Material] {
        return &self.materials;
    }

    pub fn light(&self, id: LightId) -> Option<&Light> {
        return self.lights.get(id.0);
    }

    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        return self.objects.get(id.0);
    }

    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        return self.materials.get(id.0);
    }

    pub fn light_ids(&self) -> impl Iterator<Item = LightId> {
        return (0..self.lights.len()).map(LightId);
    }

    pub fn object_ids(&self) -> impl Iterator<Item = ObjectId> {
        return (0..self.objects.len()).map(ObjectId);
    }

    pub fn num_lights(&self) -> usize {
        return self.lights.len();
    }

    pub fn num_objects(&self) -> usize {
        return self.objects.len();
    }

    /// Sum of the power of all lights.
    pub fn total_power(&self) -> Spectrum {
        return self
            .lights
            .iter()
            .fold(Spectrum::zero(), |acc, l| acc + l.power());
    }
}
