//! Scene: the ordered list of bodies a frame is traced against.

use glint_core::{BodyDescription, SceneDescription, ShaderDescription, ShapeDescription};
use glint_math::{Color, Interval, Ray};

use crate::{
    Body, BodyId, Camera, Floor, Hit, NormalShader, RenderConfig, RenderError, RenderResult,
    SceneError, SolidColor, Sphere, Texture,
};

/// Owns every body for the lifetime of a render.
///
/// Bodies are read-only once added, so a `&Scene` can be shared freely
/// between render threads.
#[derive(Default)]
pub struct Scene {
    bodies: Vec<Body>,
}

impl Scene {
    /// Create a new empty scene.
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Add a body, returning its id.
    pub fn add(&mut self, body: Body) -> BodyId {
        self.bodies.push(body);
        BodyId(self.bodies.len() - 1)
    }

    /// Builder-style [`Scene::add`].
    pub fn with_body(mut self, body: Body) -> Self {
        self.add(body);
        self
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    /// Get the number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate over bodies with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    /// Find the closest body hit by `ray`, skipping `exclude`.
    ///
    /// A later body only replaces the current best when it is strictly
    /// closer, so the first body wins exact ties. Cost is linear in the
    /// number of bodies.
    pub fn nearest_hit(&self, ray: &Ray, exclude: Option<BodyId>) -> Option<(BodyId, &Body, Hit)> {
        let mut closest: Option<(BodyId, &Body, Hit)> = None;

        for (id, body) in self.iter() {
            if Some(id) == exclude {
                continue;
            }
            let Some(hit) = body.intersect(ray) else {
                continue;
            };
            if !Interval::FORWARD.contains(hit.distance) {
                continue;
            }
            match closest {
                Some((_, _, best)) if best.distance <= hit.distance => {}
                _ => closest = Some((id, body, hit)),
            }
        }

        closest
    }

    /// Build a renderable scene from its description.
    pub fn from_description(desc: &SceneDescription) -> RenderResult<Self> {
        let mut scene = Scene::new();
        for (index, body_desc) in desc.bodies.iter().enumerate() {
            let body = build_body(body_desc)
                .map_err(|source| RenderError::InvalidBody { index, source })?;
            scene.add(body);
        }
        log::debug!("Built scene '{}' with {} bodies", desc.name, scene.len());
        Ok(scene)
    }
}

fn build_body(desc: &BodyDescription) -> Result<Body, SceneError> {
    let tex = &desc.texture;
    let texture = match tex.shader {
        ShaderDescription::Solid { color } => {
            Texture::new(SolidColor::new(Color::from(color)), tex.reflectivity, tex.diffusivity)?
        }
        ShaderDescription::Normal => Texture::new(NormalShader, tex.reflectivity, tex.diffusivity)?,
    };

    let body = match desc.shape {
        ShapeDescription::Sphere { center, radius } => {
            Body::new(Sphere::new(center, radius)?, texture)
        }
        ShapeDescription::Floor { height } => Body::new(Floor::new(height)?, texture),
    };
    Ok(body)
}

/// Turn a scene description into everything needed to render it.
pub fn build_scene(desc: &SceneDescription) -> RenderResult<(Scene, Camera, RenderConfig)> {
    let scene = Scene::from_description(desc)?;
    let camera = Camera::from_description(&desc.camera)?;
    let config = RenderConfig::from(&desc.render);
    Ok((scene, camera, config))
}
