//! # Scene attachment
//!
//! The orbit core does not own a renderer. It only needs a place to **attach** entities and a way
//! to reach them again. That capability is the [`SceneAttachment`] trait:
//!
//! * `add(entity) -> EntityHandle` – attach and receive a stable handle,
//! * `get` / `get_mut` – direct access through the handle,
//! * `get_by_name` – lookup for hosts that still address entities by name.
//!
//! The controller keeps the handle of its own curve and never looks it up by name. A handle that
//! no longer resolves (the host removed the entity) is reported as
//! [`OrbitError::EntityNotFound`](crate::orbit_errors::OrbitError::EntityNotFound).
//!
//! [`Scene`] is the in-memory implementation: a slot vector where removed entities leave an empty
//! slot, so that handles are never reused.
//!
//! The module also provides [`CelestialBody`] descriptors for the Earth and the Moon placed in
//! Moon-radii units. They carry geometry and spin only, no textures or materials.

use nalgebra::Point3;

use crate::{
    constants::{
        MoonRadii, Radian, EARTH_DISPLACEMENT, EARTH_RADIUS_MOONS, EARTH_SPIN_PER_FRAME,
        MOON_PLACEMENT_OFFSET, MOON_SPIN_PER_FRAME, TRIAD_NAME,
    },
    curve::OrbitCurve,
    triad::ReferenceTriad,
};

/// Stable identifier of an attached entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle(usize);

impl EntityHandle {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A spherical body of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub radius: MoonRadii,
    pub position: Point3<f64>,
    /// Current spin about the body's Y axis.
    pub spin: Radian,
    pub spin_per_frame: Radian,
}

impl CelestialBody {
    /// The Earth, at the origin, radius `EARTH_RADIUS_MOONS`.
    pub fn earth() -> Self {
        CelestialBody {
            name: "earth".into(),
            radius: EARTH_RADIUS_MOONS,
            position: Point3::origin(),
            spin: 0.0,
            spin_per_frame: EARTH_SPIN_PER_FRAME,
        }
    }

    /// The Moon, unit radius, at `x = −(EARTH_DISPLACEMENT + 0.5)`.
    pub fn moon() -> Self {
        CelestialBody {
            name: "moon".into(),
            radius: 1.0,
            position: Point3::new(-EARTH_DISPLACEMENT - MOON_PLACEMENT_OFFSET, 0.0, 0.0),
            spin: 0.0,
            spin_per_frame: MOON_SPIN_PER_FRAME,
        }
    }

    pub fn advance(&mut self) {
        self.spin += self.spin_per_frame;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneEntity {
    Curve(OrbitCurve),
    Triad(ReferenceTriad),
    Body(CelestialBody),
}

impl SceneEntity {
    pub fn name(&self) -> &str {
        match self {
            SceneEntity::Curve(c) => c.name(),
            SceneEntity::Triad(_) => TRIAD_NAME,
            SceneEntity::Body(b) => &b.name,
        }
    }

    pub fn as_curve(&self) -> Option<&OrbitCurve> {
        match self {
            SceneEntity::Curve(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_curve_mut(&mut self) -> Option<&mut OrbitCurve> {
        match self {
            SceneEntity::Curve(c) => Some(c),
            _ => None,
        }
    }
}

/// Capability to attach entities and reach them again.
pub trait SceneAttachment {
    fn add(&mut self, entity: SceneEntity) -> EntityHandle;

    fn get(&self, handle: EntityHandle) -> Option<&SceneEntity>;

    fn get_mut(&mut self, handle: EntityHandle) -> Option<&mut SceneEntity>;

    fn get_by_name(&self, name: &str) -> Option<EntityHandle>;
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    slots: Vec<Option<SceneEntity>>,
}

impl Scene {
    pub fn new() -> Self {
        Scene::default()
    }

    /// A scene holding the Earth and the Moon.
    pub fn with_bodies() -> Self {
        let mut scene = Scene::new();
        scene.add(SceneEntity::Body(CelestialBody::earth()));
        scene.add(SceneEntity::Body(CelestialBody::moon()));
        scene
    }

    /// Detach an entity. Its handle stays invalid afterwards.
    pub fn remove(&mut self, handle: EntityHandle) -> Option<SceneEntity> {
        self.slots.get_mut(handle.0).and_then(Option::take)
    }

    /// Number of attached entities.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityHandle, &SceneEntity)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (EntityHandle(i), e)))
    }

    /// Advance the spin of every body by one frame.
    pub fn advance_frame(&mut self) {
        for slot in self.slots.iter_mut().flatten() {
            if let SceneEntity::Body(body) = slot {
                body.advance();
            }
        }
    }
}

impl SceneAttachment for Scene {
    fn add(&mut self, entity: SceneEntity) -> EntityHandle {
        self.slots.push(Some(entity));
        EntityHandle(self.slots.len() - 1)
    }

    fn get(&self, handle: EntityHandle) -> Option<&SceneEntity> {
        self.slots.get(handle.0).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, handle: EntityHandle) -> Option<&mut SceneEntity> {
        self.slots.get_mut(handle.0).and_then(Option::as_mut)
    }

    fn get_by_name(&self, name: &str) -> Option<EntityHandle> {
        self.iter()
            .find(|(_, entity)| entity.name() == name)
            .map(|(handle, _)| handle)
    }
}
