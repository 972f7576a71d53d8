//! Fixed-step integrators for the rocket.
//!
//! One call advances the rocket by exactly one tick (dt = 1). The default
//! [`Integrator::Euler`] reproduces the classic game's trajectories; the
//! symplectic [`Integrator::Leapfrog`] is an opt-in upgrade with much
//! smaller energy drift on close passes.

use crate::types::{Body, Rocket};

use super::gravity::{Contact, GravityField};

/// Time-stepping method for the rocket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Integrator {
    /// Apply the full acceleration to velocity, then velocity to position.
    #[default]
    Euler,
    /// Kick-drift-kick leapfrog: half kick, full drift, half kick.
    Leapfrog,
}

impl Integrator {
    pub fn name(&self) -> &'static str {
        match self {
            Integrator::Euler => "euler",
            Integrator::Leapfrog => "leapfrog",
        }
    }
}

/// Advance `rocket` by one tick under the pull of `bodies`.
///
/// The pre-step position is appended to the trail before moving. On a
/// contact found while accumulating gravity the rocket is left untouched
/// (no velocity change, no trail entry, no move) and the contact is
/// returned.
///
/// Contact at the post-step position is not reported here; callers test
/// the new position separately.
pub fn step(
    integrator: Integrator,
    rocket: &mut Rocket,
    bodies: &[Body],
    gravity_constant: f64,
    min_distance_squared: f64,
) -> Result<(), Contact> {
    let field = GravityField::new(bodies, gravity_constant, min_distance_squared);

    match integrator {
        Integrator::Euler => {
            rocket.vel = field.kick(rocket.pos, rocket.radius, rocket.vel, 1.0)?;
            rocket.trail.push(rocket.pos);
            rocket.pos += rocket.vel;
        }
        Integrator::Leapfrog => {
            rocket.vel = field.kick(rocket.pos, rocket.radius, rocket.vel, 0.5)?;
            rocket.trail.push(rocket.pos);
            rocket.pos += rocket.vel;
            // Closing half kick is skipped on contact; the caller's
            // post-step check reports the crash.
            if let Ok(vel) = field.kick(rocket.pos, rocket.radius, rocket.vel, 0.5) {
                rocket.vel = vel;
            }
        }
    }

    Ok(())
}
