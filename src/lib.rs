//! Keplerian orrery core: turns per-body orbital elements and an elapsed
//! time into a render-space position and rotation, once per frame.

pub mod body;
pub mod clock;
pub mod config;
pub mod elements;
pub mod error;
pub mod kepler;
pub mod orrery;
pub mod propagator;
pub mod rotation;
pub mod vec;

pub use body::Body;
pub use clock::SimulationClock;
pub use config::{BodyConfig, SimulationConfig, SystemConfig, DEFAULT_TIME_FACTOR};
pub use elements::{OrbitKind, OrbitalElements};
pub use error::{Error, Result};
pub use kepler::SolverConfig;
pub use orrery::{BodyFrame, BodyId, Orrery};
pub use rotation::{RenderTransform, Rotation};
pub use vec::Vec3;
