//! ## Remote control port for the elevator fleet
//!
//! This module defines the operation contract the control center depends on to
//! read and write remote elevator state. The endpoint behind the contract is an
//! external collaborator (a building simulator or a real controller reachable
//! over a network call boundary); the core only ever talks to the
//! [`ElevatorPort`] trait.
//!
//! ## Overview
//! - [`Direction`]: The direction an elevator is committed to.
//! - [`DoorStatus`]: The state of an elevator's doors.
//! - [`PortError`]: Connectivity failure raised by any port operation.
//! - [`ElevatorPort`]: The full read/write contract towards the endpoint.
//! - [`sim`]: An in-process simulated endpoint for demos and tests.

pub mod sim;

#[cfg(test)]
pub mod mock;

use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Represents the direction an elevator is currently committed to.
///
/// This doubles as the state variable of the automatic sweep state machine:
/// the dispatch engine re-reads it from the remote endpoint every cycle and
/// decides the next command from it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)] // Wire encoding used by the remote endpoint.
pub enum Direction {
    /// Committed to servicing floors upwards.
    Up = 0,

    /// Committed to servicing floors downwards.
    Down = 1,

    /// Not committed to either direction.
    Uncommitted = 2,
}

impl From<u8> for Direction {
    /// Converts a wire value into a `Direction`.
    ///
    /// Unknown values fall back to `Uncommitted`, the endpoint's neutral state.
    fn from(value: u8) -> Self {
        match value {
            0 => Direction::Up,
            1 => Direction::Down,
            _ => Direction::Uncommitted,
        }
    }
}

/// Represents the state of an elevator's doors.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)] // Wire encoding used by the remote endpoint.
pub enum DoorStatus {
    /// Doors are fully open.
    Open = 1,

    /// Doors are fully closed.
    Closed = 2,

    /// Doors are opening.
    Opening = 3,

    /// Doors are closing.
    Closing = 4,
}

impl From<u8> for DoorStatus {
    /// Converts a wire value into a `DoorStatus`.
    ///
    /// Unknown values fall back to `Closed`, the only state in which no
    /// dispatch decision is ever taken.
    fn from(value: u8) -> Self {
        match value {
            1 => DoorStatus::Open,
            2 => DoorStatus::Closed,
            3 => DoorStatus::Opening,
            4 => DoorStatus::Closing,
            _ => DoorStatus::Closed,
        }
    }
}

/// Connectivity failure raised by a port operation.
///
/// Every failure kind is recoverable: the cycle supervisor reacts to all of
/// them identically by dropping to its disconnected state and retrying on the
/// next tick.
#[derive(Error, Debug)]
pub enum PortError {
    /// The endpoint could not be reached, or a call failed mid-transport.
    #[error("remote endpoint unreachable: {0}")]
    Unreachable(String),
}

/// Result alias for port operations.
pub type PortResult<T> = Result<T, PortError>;

/// The operation contract the control center requires from the remote
/// elevator endpoint. All elevator and floor parameters are 0-based indices.
///
/// The static building facts (`get_floor_num`, `get_elevator_num`,
/// `get_floor_height`) are queried once per connection; everything else is
/// queried every cycle. Any call may fail with a [`PortError`].
pub trait ElevatorPort {
    /// Opens the connection to the endpoint.
    ///
    /// Called by the cycle supervisor at every (re)initialization attempt.
    /// Must be safe to call again after a failure.
    fn connect(&mut self) -> PortResult<()>;

    /// Returns the number of floors in the building.
    fn get_floor_num(&mut self) -> PortResult<usize>;

    /// Returns the number of elevators in the building.
    fn get_elevator_num(&mut self) -> PortResult<usize>;

    /// Returns the height of one floor, in meters.
    fn get_floor_height(&mut self) -> PortResult<f64>;

    /// Returns whether the up call button on `floor` is pressed.
    fn get_floor_button_up(&mut self, floor: usize) -> PortResult<bool>;

    /// Returns whether the down call button on `floor` is pressed.
    fn get_floor_button_down(&mut self, floor: usize) -> PortResult<bool>;

    /// Returns the direction `elevator` is committed to.
    fn get_committed_direction(&mut self, elevator: usize) -> PortResult<Direction>;

    /// Returns the floor `elevator` is currently targeting.
    fn get_target(&mut self, elevator: usize) -> PortResult<usize>;

    /// Returns the current acceleration of `elevator`, in m/s².
    fn get_elevator_accel(&mut self, elevator: usize) -> PortResult<f64>;

    /// Returns the door state of `elevator`.
    fn get_elevator_door_status(&mut self, elevator: usize) -> PortResult<DoorStatus>;

    /// Returns the floor `elevator` is currently at (or closest to).
    fn get_elevator_floor(&mut self, elevator: usize) -> PortResult<usize>;

    /// Returns the height of `elevator` over ground, in meters.
    fn get_elevator_position(&mut self, elevator: usize) -> PortResult<f64>;

    /// Returns the current speed of `elevator`, in m/s.
    fn get_elevator_speed(&mut self, elevator: usize) -> PortResult<f64>;

    /// Returns the current passenger weight inside `elevator`, in kg.
    fn get_elevator_weight(&mut self, elevator: usize) -> PortResult<f64>;

    /// Returns the passenger capacity of `elevator`.
    fn get_elevator_capacity(&mut self, elevator: usize) -> PortResult<usize>;

    /// Returns whether the cab button for `floor` is pressed inside `elevator`.
    fn get_elevator_button(&mut self, elevator: usize, floor: usize) -> PortResult<bool>;

    /// Commits `elevator` to `direction`.
    fn set_committed_direction(&mut self, elevator: usize, direction: Direction) -> PortResult<()>;

    /// Sends `elevator` towards `floor`.
    ///
    /// The endpoint expects the committed direction to be set before the
    /// target when both change.
    fn set_target(&mut self, elevator: usize, floor: usize) -> PortResult<()>;
}
