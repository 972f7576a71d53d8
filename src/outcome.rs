//! Simulation states and flight outcomes.
//!
//! The state machine is:
//! - `Aiming` → `Flight` on release of a drag
//! - `Flight` → `Crashed` | `Lost` | `Won` from the physics tick
//! - terminal → `Aiming` on the next press
//! - any → `Sandbox` / `Aiming` through the mode switch

/// How a flight ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlightOutcome {
    /// The rocket touched a body.
    Crashed {
        /// Index of the body that was hit.
        body: usize,
    },
    /// The rocket left the world bounds.
    Lost,
    /// The rocket entered the goal region.
    Won,
}

impl FlightOutcome {
    /// Overlay headline for this outcome.
    pub fn headline(&self) -> &'static str {
        match self {
            FlightOutcome::Crashed { .. } => "Ship Destroyed!",
            FlightOutcome::Lost => "Lost in Deep Space...",
            FlightOutcome::Won => "Target Reached!",
        }
    }
}

/// Current simulation state. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SimulationState {
    /// Waiting for a drag gesture to launch the rocket.
    #[default]
    Aiming,
    /// Rocket in flight; physics advances every tick.
    Flight,
    /// Editing the level; physics is frozen.
    Sandbox,
    /// Terminal: the flight ended.
    Finished(FlightOutcome),
}

impl SimulationState {
    /// True for crashed, lost and won.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SimulationState::Finished(_))
    }

    /// Outcome of the last flight, if the state is terminal.
    pub fn outcome(&self) -> Option<FlightOutcome> {
        match self {
            SimulationState::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }

    /// Short label for logs and the status line.
    pub fn label(&self) -> &'static str {
        match self {
            SimulationState::Aiming => "AIMING",
            SimulationState::Flight => "FLIGHT",
            SimulationState::Sandbox => "SANDBOX",
            SimulationState::Finished(FlightOutcome::Crashed { .. }) => "CRASHED",
            SimulationState::Finished(FlightOutcome::Lost) => "LOST",
            SimulationState::Finished(FlightOutcome::Won) => "WON",
        }
    }
}

impl From<FlightOutcome> for SimulationState {
    fn from(outcome: FlightOutcome) -> Self {
        SimulationState::Finished(outcome)
    }
}

/// Top-level interaction mode chosen from the toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Play,
    Sandbox,
}

impl Mode {
    /// One-line hint shown under the toolbar.
    pub fn instructions(&self) -> &'static str {
        match self {
            Mode::Play => "Drag anywhere to aim and set power. Release to launch!",
            Mode::Sandbox => "Click to place bodies and build your own level.",
        }
    }
}
