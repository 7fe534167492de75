//! ## The building model
//!
//! This module holds the in-memory model of the building: the static facts
//! fetched once per connection, the per-floor call button sets, and one
//! [`Elevator`] entity per physical elevator. The model is owned by the cycle
//! supervisor and refreshed every cycle by [`sync`]; presentation layers only
//! ever see cloned snapshots of it.

pub mod sync;

use serde::{Serialize, Deserialize};
use crate::elevio::{Direction, DoorStatus};

/// Dynamic state of one physical elevator.
///
/// One entity is allocated per elevator at initialization and then mutated in
/// place every cycle; the entity itself is never replaced while the
/// connection lasts.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Elevator {
    /// The floor the elevator is currently at (or closest to).
    /// Default: 0
    pub current_floor: usize,

    /// The floor the elevator is currently targeting.
    /// Default: 0
    pub current_target: usize,

    /// Current speed in m/s.
    /// Default: 0.0
    pub current_speed: f64,

    /// Current acceleration in m/s².
    /// Default: 0.0
    pub current_acceleration: f64,

    /// Height over ground in meters.
    /// Default: 0.0
    pub current_height_over_ground: f64,

    /// Passenger weight currently inside the cab, in kg.
    /// Default: 0.0
    pub current_passenger_weight: f64,

    /// Passenger capacity of the cab.
    /// Default: 0
    pub max_passenger_number: usize,

    /// [Direction] the elevator is committed to. Mirrors remote state and is
    /// the state variable of the automatic sweep.
    /// Default: [Direction::Uncommitted]
    pub committed_direction: Direction,

    /// [DoorStatus] of the cab doors.
    /// Default: [DoorStatus::Closed]
    pub door_status: DoorStatus,

    /// Floors whose cab button is pressed inside this elevator.
    /// Rebuilt wholesale every cycle.
    /// Default: empty
    pub active_floor_buttons: Vec<usize>,

    /// Whether the elevator is operated by the automatic sweep policy.
    /// Toggled only by the set-mode entry point.
    /// Default: false (manual)
    pub automatic: bool,
}

impl Default for Elevator {
    fn default() -> Self {
        Self {
            current_floor: 0,
            current_target: 0,
            current_speed: 0.0,
            current_acceleration: 0.0,
            current_height_over_ground: 0.0,
            current_passenger_weight: 0.0,
            max_passenger_number: 0,
            committed_direction: Direction::Uncommitted,
            door_status: DoorStatus::Closed,
            active_floor_buttons: Vec::new(),
            automatic: false,
        }
    }
}

impl Elevator {
    /// Returns whether the elevator is parked: arrived at its target, at
    /// rest, with doors open. Only a parked elevator accepts a new dispatch
    /// decision.
    pub fn is_parked(&self) -> bool {
        self.current_floor == self.current_target
            && self.current_speed == 0.0
            && self.door_status == DoorStatus::Open
    }

    /// Returns whether the elevator is at rest with doors open, regardless of
    /// its target. The automatic sweep only issues commands in this state.
    pub fn is_at_rest(&self) -> bool {
        self.current_speed == 0.0 && self.door_status == DoorStatus::Open
    }
}

/// The aggregate state of the building.
///
/// `Building` contains the static facts fetched once per connection, the
/// call button sets outside the elevators, and all [`Elevator`] entities.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Building {
    /// Number of floors. Set at initialization, immutable afterward.
    pub num_floors: usize,

    /// Height of one floor in meters. Set at initialization.
    pub floor_height: f64,

    /// One entity per physical elevator, index addressed. Populated at
    /// initialization, never resized afterward.
    pub elevators: Vec<Elevator>,

    /// Floors whose up call button is pressed. Replaced wholesale every cycle.
    pub floor_buttons_up: Vec<usize>,

    /// Floors whose down call button is pressed. Replaced wholesale every cycle.
    pub floor_buttons_down: Vec<usize>,

    /// The elevator currently selected by the operator, if any. Mutated only
    /// by the select entry point; `Some(0)` once elevators exist.
    pub selected_elevator: Option<usize>,
}

impl Default for Building {
    /// Creates an empty `Building` with no floors and no elevators.
    fn default() -> Self {
        Self {
            num_floors: 0,
            floor_height: 0.0,
            elevators: Vec::new(),
            floor_buttons_up: Vec::new(),
            floor_buttons_down: Vec::new(),
            selected_elevator: None,
        }
    }
}

impl Building {
    /// Returns the number of elevators in the building.
    pub fn num_elevators(&self) -> usize {
        self.elevators.len()
    }

    /// Returns the index of the top floor, or `None` for an empty building.
    pub fn top_floor(&self) -> Option<usize> {
        self.num_floors.checked_sub(1)
    }

    /// Returns whether `index` addresses an existing elevator.
    pub fn is_valid_elevator(&self, index: usize) -> bool {
        index < self.elevators.len()
    }
}
