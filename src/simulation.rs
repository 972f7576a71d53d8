//! The orbital sandbox simulation context.
//!
//! [`Simulation`] owns every body, the rocket, the goal and the pointer, and
//! is the only thing that changes them. Input handlers and the physics tick
//! both go through it; a renderer reads it back once per frame.

use bevy::log::{debug, info, warn};
use bevy::math::DVec2;
use bevy::prelude::Resource;

use crate::collision::{WorldBounds, check_termination};
use crate::config::SimulationConfig;
use crate::error::SlingshotError;
use crate::input::{Pointer, launch_velocity};
use crate::outcome::{FlightOutcome, Mode, SimulationState};
use crate::physics;
use crate::sandbox::{SandboxEdit, Tool};
use crate::scenarios::{LEVELS, Level, LevelLayout};
use crate::types::{Body, Goal, Rocket};

/// Complete state of one level being played or edited.
#[derive(Resource, Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    level: &'static Level,
    bounds: WorldBounds,
    bodies: Vec<Body>,
    rocket: Rocket,
    goal: Goal,
    state: SimulationState,
    mode: Mode,
    tool: Tool,
    pointer: Pointer,
    flight_ticks: u64,
}

impl Simulation {
    /// Build a simulation for `level` in a `width × height` world.
    pub fn new(
        config: SimulationConfig,
        level: &'static Level,
        width: f64,
        height: f64,
    ) -> Result<Self, SlingshotError> {
        config.validate()?;
        let bounds = WorldBounds::new(width, height)?;
        let LevelLayout {
            bodies,
            launch,
            goal,
        } = level.build(&bounds, config.goal_radius)?;

        info!(
            "Level '{}' ready: {} bodies in {}x{} world ({} integrator)",
            level.name,
            bodies.len(),
            width,
            height,
            config.integrator.name()
        );

        Ok(Self {
            rocket: Rocket::new(launch, config.rocket_radius, config.trail_capacity),
            config,
            level,
            bounds,
            bodies,
            goal,
            state: SimulationState::Aiming,
            mode: Mode::Play,
            tool: Tool::default(),
            pointer: Pointer::default(),
            flight_ticks: 0,
        })
    }

    /// Default configuration and the first preset level.
    pub fn with_defaults(width: f64, height: f64) -> Result<Self, SlingshotError> {
        Self::new(SimulationConfig::default(), &LEVELS[0], width, height)
    }

    // -------------------------------------------------------------------------
    // Read access for renderers and tests
    // -------------------------------------------------------------------------

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn rocket(&self) -> &Rocket {
        &self.rocket
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn bounds(&self) -> &WorldBounds {
        &self.bounds
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn level(&self) -> &'static Level {
        self.level
    }

    /// Ticks advanced since the current flight was launched.
    pub fn flight_ticks(&self) -> u64 {
        self.flight_ticks
    }

    /// Aim preview from the rocket toward where it would be fired, while a
    /// drag is active in aiming. The segment is the reversed drag, unscaled.
    pub fn aim_line(&self) -> Option<(DVec2, DVec2)> {
        if self.state != SimulationState::Aiming {
            return None;
        }
        let drag = self.pointer.drag()?;
        Some((self.rocket.pos, self.rocket.pos - drag))
    }

    /// Specific orbital energy of the rocket. Negative means bound to the
    /// bodies; with no bodies it is the kinetic term alone.
    pub fn rocket_energy(&self) -> f64 {
        physics::GravityField::new(
            &self.bodies,
            self.config.gravity_constant,
            self.config.min_distance_squared,
        )
        .energy(self.rocket.pos, self.rocket.vel)
    }

    /// Overlay headline when the flight has ended.
    pub fn headline(&self) -> Option<&'static str> {
        self.state.outcome().map(|outcome| outcome.headline())
    }

    // -------------------------------------------------------------------------
    // Input surface
    // -------------------------------------------------------------------------

    /// Pointer pressed at `pos`.
    ///
    /// Aiming or finished: reset the rocket and start a drag. Sandbox: apply
    /// the active tool. Flight: ignored.
    pub fn press(&mut self, pos: DVec2) {
        match self.state {
            SimulationState::Sandbox => {
                self.pointer.move_to(pos);
                if let Err(err) = self.apply_tool(pos) {
                    warn!("Sandbox placement rejected: {err}");
                }
            }
            SimulationState::Aiming | SimulationState::Finished(_) => {
                if self.state.is_terminal() {
                    debug!("Restarting after {}", self.state.label());
                }
                self.rocket.reset();
                self.state = SimulationState::Aiming;
                self.flight_ticks = 0;
                self.pointer.press(pos);
            }
            SimulationState::Flight => self.pointer.move_to(pos),
        }
    }

    /// Pointer moved to `pos`.
    pub fn move_to(&mut self, pos: DVec2) {
        self.pointer.move_to(pos);
    }

    /// Pointer released at `pos`. Launches the rocket if a drag was active
    /// while aiming.
    pub fn release(&mut self, pos: DVec2) {
        let drag = self.pointer.release(pos);

        if let (SimulationState::Aiming, Some(drag)) = (self.state, drag) {
            self.launch(drag);
        }
    }

    /// Switch between play and sandbox. Always resets the rocket and drops
    /// any drag in progress.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.pointer.cancel();
        self.rocket.reset();
        self.flight_ticks = 0;
        self.state = self.idle_state();
        info!("Mode: {:?}", mode);
    }

    /// Select the sandbox tool. Takes effect on the next sandbox press.
    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        debug!("Sandbox tool: {}", tool.label());
    }

    // -------------------------------------------------------------------------
    // Level control
    // -------------------------------------------------------------------------

    /// Return the rocket to its launch point at rest with an empty trail.
    ///
    /// Play mode goes back to aiming; sandbox mode stays in sandbox.
    pub fn reset(&mut self) {
        self.rocket.reset();
        self.pointer.cancel();
        self.flight_ticks = 0;
        self.state = self.idle_state();
        debug!("Rocket reset to ({:.1}, {:.1})", self.rocket.pos.x, self.rocket.pos.y);
    }

    /// Rebuild the current level from its layout, discarding sandbox edits.
    pub fn reload_level(&mut self) -> Result<(), SlingshotError> {
        self.load_level(self.level)
    }

    /// Replace the world with `level`, laid out for the current bounds.
    pub fn load_level(&mut self, level: &'static Level) -> Result<(), SlingshotError> {
        let layout = level.build(&self.bounds, self.config.goal_radius)?;

        self.level = level;
        self.bodies = layout.bodies;
        self.goal = layout.goal;
        self.rocket = Rocket::new(
            layout.launch,
            self.config.rocket_radius,
            self.config.trail_capacity,
        );
        self.pointer.cancel();
        self.flight_ticks = 0;
        self.state = self.idle_state();

        info!("Loaded level '{}' ({} bodies)", level.name, self.bodies.len());
        Ok(())
    }

    /// Change the world extent. Nothing moves; only the bounds test changes.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), SlingshotError> {
        self.bounds = WorldBounds::new(width, height)?;
        debug!("World resized to {}x{}", width, height);
        Ok(())
    }

    /// Append a body. Bodies are never validated against the rocket or
    /// each other; overlap only matters once a flight is ticking.
    pub fn place_body(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    fn apply_tool(&mut self, pos: DVec2) -> Result<SandboxEdit, SlingshotError> {
        let edit = match self.tool.template() {
            Some(template) => SandboxEdit::BodyPlaced(self.place_body(template.place(pos)?)),
            None => {
                self.goal.relocate(pos);
                SandboxEdit::GoalMoved(pos)
            }
        };
        debug!("Sandbox edit: {:?}", edit);
        Ok(edit)
    }

    fn launch(&mut self, drag: DVec2) {
        self.rocket.vel = launch_velocity(drag, self.config.launch_power);
        self.state = SimulationState::Flight;
        self.flight_ticks = 0;
        info!(
            "Launch: drag ({:.1}, {:.1}) -> velocity ({:.3}, {:.3})",
            drag.x, drag.y, self.rocket.vel.x, self.rocket.vel.y
        );
    }

    fn idle_state(&self) -> SimulationState {
        match self.mode {
            Mode::Play => SimulationState::Aiming,
            Mode::Sandbox => SimulationState::Sandbox,
        }
    }

    // -------------------------------------------------------------------------
    // Physics
    // -------------------------------------------------------------------------

    /// Advance one tick. Only does work in flight; returns the outcome if
    /// this tick ended the flight.
    pub fn tick(&mut self) -> Option<FlightOutcome> {
        if self.state != SimulationState::Flight {
            return None;
        }

        self.flight_ticks += 1;

        let outcome = match physics::step(
            self.config.integrator,
            &mut self.rocket,
            &self.bodies,
            self.config.gravity_constant,
            self.config.min_distance_squared,
        ) {
            Err(contact) => Some(FlightOutcome::Crashed { body: contact.body }),
            Ok(()) => check_termination(
                &self.rocket,
                &self.bodies,
                &self.goal,
                &self.bounds,
                self.config.min_distance_squared,
            ),
        }?;

        self.state = outcome.into();
        info!(
            "Flight ended after {} ticks: {} at ({:.1}, {:.1})",
            self.flight_ticks,
            self.state.label(),
            self.rocket.pos.x,
            self.rocket.pos.y
        );
        Some(outcome)
    }
}
