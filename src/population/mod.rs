//! Occupancy population from rigid bodies tested against a collision backend.

pub use self::collision_backend::CollisionBackend;
pub use self::parry_world::{BodyHandle, BodyLink, ParryWorld, ParryWorldError, ProbeHandle};
pub use self::scoped_probe::ScopedProbe;
pub use self::voxel_grid_population::CoveringLinks;

mod collision_backend;
mod parry_world;
mod scoped_probe;
mod voxel_grid_population;
