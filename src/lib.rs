#![warn(missing_docs)]
//! # This projects library
//!
//! This library implements a supervisory control center for a small fleet of
//! elevators reachable through a remote control interface. It polls the remote
//! endpoint at a fixed cadence, reconciles an in-memory building model with the
//! remote state, and issues movement and direction commands either under the
//! automatic sweep policy or on behalf of a human operator.
//!
//! ## Overview
//! - **Config**: Handles configuration settings.
//! - **Print**: Print functions with color coding.
//! - **Elevio**: Remote control port contract, plus a simulator for demos.
//! - **Building**: The building model and its per-cycle synchronization.
//! - **Controller**: Dispatch logic and the cycle supervisor.

/// Global variables
pub mod config;

/// Print functions with color coding
pub mod print;

/// Interface towards the remote elevator control endpoint.
pub mod elevio;

/// The building model and its synchronization with the remote endpoint.
pub mod building;

/// Elevator dispatch logic and the cycle supervisor.
pub mod controller;
