//! # config.rs – Centralized Parameter Store
//!
//! This module holds all static program parameters used throughout the system.
//! Keeping configuration in one place makes tuning, experimentation, and testing easier.

use std::sync::Mutex;
use std::time::Duration;
use once_cell::sync::Lazy;

//
// ──────────────────────────────────────────────────────────────
//   1. CONTROL LOOP PARAMETERS
// ──────────────────────────────────────────────────────────────
//

/// Duration between update cycles against the remote endpoint
pub const UPDATE_PERIOD: Duration = Duration::from_millis(100);

/// Duration between status table prints in the binary
pub const STATUS_PRINT_PERIOD: Duration = Duration::from_millis(500);

//
// ──────────────────────────────────────────────────────────────
//   2. SIMULATOR DEFAULTS
// ──────────────────────────────────────────────────────────────
//

/// Number of floors in the demo simulator
pub const SIM_NUM_FLOORS: usize = 5;

/// Number of elevators in the demo simulator
pub const SIM_NUM_ELEVATORS: usize = 2;

/// Floor height reported by the demo simulator, in meters
pub const SIM_FLOOR_HEIGHT: f64 = 2.75;

/// Passenger capacity reported by the demo simulator
pub const SIM_CAPACITY: usize = 8;

/// Cab speed while travelling between floors in the demo simulator, in m/s
pub const SIM_TRAVEL_SPEED: f64 = 1.5;

//
// ──────────────────────────────────────────────────────────────
//   3. LOGGING CONFIGURATION
// ──────────────────────────────────────────────────────────────
//

/// Enable/disable printing of the building status table
pub static PRINT_BUILDING_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enable/disable printing of errors
pub static PRINT_ERR_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enable/disable printing of warnings
pub static PRINT_WARN_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enable/disable printing of success messages
pub static PRINT_OK_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enable/disable printing of general info
pub static PRINT_INFO_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));

/// Enable/disable miscellaneous debug prints
pub static PRINT_ELSE_ON: Lazy<Mutex<bool>> = Lazy::new(|| Mutex::new(true));
