//! Gravity calculation for the rocket.
//!
//! Bodies are fixed; only the rocket feels gravity. The rocket mass is
//! normalized to 1, so force and acceleration are the same number.

use bevy::math::DVec2;

use crate::types::Body;

/// The rocket touched (or sat on the center of) a body while gravity was
/// being accumulated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Index of the body in the body list.
    pub body: usize,
    /// Center-to-center distance at contact.
    pub distance: f64,
}

/// Gravity produced by a fixed set of bodies.
#[derive(Clone, Copy, Debug)]
pub struct GravityField<'a> {
    bodies: &'a [Body],
    gravity_constant: f64,
    min_distance_squared: f64,
}

impl<'a> GravityField<'a> {
    pub fn new(bodies: &'a [Body], gravity_constant: f64, min_distance_squared: f64) -> Self {
        Self {
            bodies,
            gravity_constant,
            min_distance_squared,
        }
    }

    /// Index and distance of the first body in contact with a probe of
    /// `radius` at `pos`, in body-list order.
    pub fn contact(&self, pos: DVec2, radius: f64) -> Option<Contact> {
        self.bodies.iter().enumerate().find_map(|(index, body)| {
            let r_squared = (body.pos() - pos).length_squared();
            let distance = r_squared.sqrt();
            if r_squared < self.min_distance_squared || distance < body.radius() + radius {
                Some(Contact {
                    body: index,
                    distance,
                })
            } else {
                None
            }
        })
    }

    /// Add `scale` times the pull of every body to `vel`, one body at a time
    /// in list order.
    ///
    /// Stops at the first body the probe touches and reports it; the partial
    /// velocity is discarded in that case.
    ///
    /// Velocity is updated per body, in list order, with the angle form of
    /// the pull; both are part of the trajectory.
    pub fn kick(&self, pos: DVec2, radius: f64, vel: DVec2, scale: f64) -> Result<DVec2, Contact> {
        let mut vel = vel;

        for (index, body) in self.bodies.iter().enumerate() {
            let delta = body.pos() - pos;
            let r_squared = delta.length_squared();
            let distance = r_squared.sqrt();

            if r_squared < self.min_distance_squared || distance < body.radius() + radius {
                return Err(Contact {
                    body: index,
                    distance,
                });
            }

            // a = G·M / r² along the direction of delta
            let magnitude = self.gravity_constant * body.mass() / r_squared;
            let angle = delta.y.atan2(delta.x);
            vel.x += angle.cos() * magnitude * scale;
            vel.y += angle.sin() * magnitude * scale;
        }

        Ok(vel)
    }

    /// Total acceleration at `pos` in vector form, ignoring contact.
    ///
    /// Bodies closer than the epsilon guard contribute nothing. Only used to
    /// cross-check [`GravityField::kick`].
    #[cfg(test)]
    pub(crate) fn acceleration(&self, pos: DVec2) -> DVec2 {
        let mut acc = DVec2::ZERO;

        for body in self.bodies {
            let delta = body.pos() - pos;
            let r_squared = delta.length_squared();

            if r_squared > self.min_distance_squared {
                let r = r_squared.sqrt();
                acc += delta * (self.gravity_constant * body.mass() / (r_squared * r));
            }
        }

        acc
    }

    /// Gravitational potential energy per unit mass at `pos` (−Σ G·M/r).
    pub fn potential(&self, pos: DVec2) -> f64 {
        self.bodies
            .iter()
            .map(|body| {
                let r = body.pos().distance(pos).max(self.min_distance_squared.sqrt());
                -self.gravity_constant * body.mass() / r
            })
            .sum()
    }

    /// Specific orbital energy of a rocket at `pos` moving with `vel`.
    pub fn energy(&self, pos: DVec2, vel: DVec2) -> f64 {
        0.5 * vel.length_squared() + self.potential(pos)
    }
}
