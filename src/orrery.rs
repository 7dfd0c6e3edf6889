//! The body collection driven once per animation frame.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::body::Body;
use crate::config::{BodyConfig, SimulationConfig, SystemConfig};
use crate::error::{Error, Result};
use crate::rotation::RenderTransform;
use crate::vec::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

/// One body's output for a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyFrame {
    pub id: BodyId,
    /// Position relative to the parent, plus spin and sweep.
    pub local: RenderTransform,
    /// Position relative to the scene origin.
    pub world_position: Vec3<f64>,
    /// The solver gave up this frame and a fallback transform was used.
    pub diverged: bool,
}

#[derive(Clone, Debug)]
struct Entry {
    body: Body,
    parent: Option<BodyId>,
    last_good: Option<RenderTransform>,
}

pub struct Orrery {
    simulation: SimulationConfig,
    entries: Vec<Entry>,
    rng: SmallRng,
}

impl Orrery {
    pub fn new(simulation: SimulationConfig) -> Result<Self> {
        simulation.validate()?;
        let rng = SmallRng::seed_from_u64(simulation.seed);
        Ok(Self {
            simulation,
            entries: Vec::new(),
            rng,
        })
    }

    /// Builds an orrery from a parsed system file.
    ///
    /// Bodies that fail validation are left out of the scene, along with their
    /// satellites; their errors are logged and returned next to the orrery.
    pub fn from_config(config: &SystemConfig) -> Result<(Self, Vec<Error>)> {
        let mut orrery = Self::new(config.simulation.clone())?;
        let rejected = orrery.load(&config.bodies);

        for err in &rejected {
            tracing::warn!("skipping body: {err}");
        }
        tracing::info!(
            bodies = orrery.len(),
            rejected = rejected.len(),
            "loaded system"
        );

        Ok((orrery, rejected))
    }

    /// Adds every body in `bodies` with its satellites. Returns the errors of
    /// the bodies that were rejected; satellites of a rejected body are skipped
    /// and reported too.
    pub fn load(&mut self, bodies: &[BodyConfig]) -> Vec<Error> {
        let mut rejected = Vec::new();
        for config in bodies {
            self.load_tree(None, config, &mut rejected);
        }
        rejected
    }

    fn load_tree(&mut self, parent: Option<BodyId>, config: &BodyConfig, rejected: &mut Vec<Error>) {
        let added = match parent {
            Some(parent) => self.add_satellite(parent, config),
            None => self.add_body(config),
        };
        match added {
            Ok(id) => {
                for satellite in &config.satellites {
                    self.load_tree(Some(id), satellite, rejected);
                }
            }
            Err(err) => {
                rejected.push(err);
                Self::reject_satellites(config, rejected);
            }
        }
    }

    fn reject_satellites(parent: &BodyConfig, rejected: &mut Vec<Error>) {
        for satellite in &parent.satellites {
            rejected.push(Error::configuration(
                &satellite.name,
                format!("parent `{}` was rejected", parent.name),
            ));
            Self::reject_satellites(satellite, rejected);
        }
    }

    /// Adds a body orbiting the scene origin. Its `satellites` are ignored; see [`Orrery::load`].
    pub fn add_body(&mut self, config: &BodyConfig) -> Result<BodyId> {
        self.insert(None, config)
    }

    pub fn add_satellite(&mut self, parent: BodyId, config: &BodyConfig) -> Result<BodyId> {
        if parent.0 >= self.entries.len() {
            return Err(Error::UnknownBody(parent.0));
        }
        self.insert(Some(parent), config)
    }

    fn insert(&mut self, parent: Option<BodyId>, config: &BodyConfig) -> Result<BodyId> {
        // Drawn even when the config fixes its own phase, so one body's
        // setting doesn't shift everyone else's random phase.
        let phase_offset = self.rng.gen_range(0.0..TAU);
        let body = Body::from_config(config, phase_offset, &self.simulation)?;

        tracing::debug!(
            name = body.name(),
            kind = ?body.elements().kind(),
            phase_offset = body.elements().phase_offset(),
            "added body"
        );

        let id = BodyId(self.entries.len());
        self.entries.push(Entry {
            body,
            parent,
            last_good: None,
        });
        Ok(id)
    }

    pub fn simulation(&self) -> &SimulationConfig {
        &self.simulation
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.entries.get(id.0).map(|entry| &entry.body)
    }

    pub fn parent(&self, id: BodyId) -> Option<BodyId> {
        self.entries.get(id.0).and_then(|entry| entry.parent)
    }

    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.entries
            .iter()
            .position(|entry| entry.body.name() == name)
            .map(BodyId)
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (BodyId(index), &entry.body))
    }

    /// Advances every body to `elapsed` real seconds.
    ///
    /// A body whose solver diverges keeps its last converged position (or the
    /// circular approximation if it never converged) with a current spin.
    pub fn tick(&mut self, elapsed: f64) -> Vec<BodyFrame> {
        let mut frames: Vec<BodyFrame> = Vec::with_capacity(self.entries.len());

        for (index, entry) in self.entries.iter_mut().enumerate() {
            let (local, diverged) = match entry.body.tick(elapsed, &self.simulation) {
                Ok(transform) => {
                    entry.last_good = Some(transform);
                    (transform, false)
                }
                Err(err) => {
                    tracing::warn!(body = entry.body.name(), elapsed, "{err}; using fallback position");
                    let spin = entry.body.spin(elapsed, &self.simulation);
                    let fallback = match entry.last_good {
                        Some(last) => RenderTransform { spin, ..last },
                        None => entry.body.circular_transform(elapsed, &self.simulation),
                    };
                    (fallback, true)
                }
            };

            // Parents are always inserted before their satellites.
            let origin = entry
                .parent
                .map(|parent| frames[parent.0].world_position)
                .unwrap_or(Vec3::ZERO);

            frames.push(BodyFrame {
                id: BodyId(index),
                local,
                world_position: origin + local.position,
                diverged,
            });
        }

        frames
    }
}
