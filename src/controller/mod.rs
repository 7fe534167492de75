//! ## The cycle supervisor
//!
//! This module owns the building model and the remote control port, and
//! orchestrates one full cycle: connect if needed, synchronize every dynamic
//! field, run the dispatch decision for every elevator, and publish the
//! updated snapshot on a watch channel for presentation layers to drain.
//!
//! Connectivity failures are never propagated outward. Every failed remote
//! call drops the supervisor back to [`ConnectionState::Disconnected`], and
//! the next tick (or the same `update` call) attempts to repair the
//! connection by re-running initialization.

pub mod dispatch;

use tokio::sync::watch;

use crate::building::{sync, Building, Elevator};
use crate::elevio::{Direction, ElevatorPort, PortResult};
use crate::print;

/// Connection status towards the remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection; the next tick retries initialization.
    Disconnected,

    /// Initialization in progress.
    Connecting,

    /// Connected; cycles run against the endpoint.
    Connected,
}

/// The supervisory controller for the elevator fleet.
///
/// Owns the port and the building model exclusively. A scheduling
/// collaborator invokes [`update`](ControlCenter::update) at a fixed cadence;
/// cycles are strictly serialized, and the manual entry points must be
/// invoked from the same single-threaded context since they mutate the same
/// model and issue commands on the same port.
pub struct ControlCenter<P: ElevatorPort> {
    port: P,
    building: Building,
    connection: ConnectionState,
    snapshot_tx: watch::Sender<Building>,
}

impl<P: ElevatorPort> ControlCenter<P> {
    /// Creates a control center around `port`, together with the receiving
    /// end of the snapshot channel presentation layers subscribe to.
    ///
    /// The center starts disconnected; call
    /// [`initialize`](ControlCenter::initialize) or let the first
    /// [`update`](ControlCenter::update) do so.
    pub fn new(port: P) -> (Self, watch::Receiver<Building>) {
        let (snapshot_tx, snapshot_rx) = watch::channel(Building::default());
        (
            Self {
                port,
                building: Building::default(),
                connection: ConnectionState::Disconnected,
                snapshot_tx,
            },
            snapshot_rx,
        )
    }

    /// Returns the current connection status.
    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    /// Returns the current building model.
    pub fn building(&self) -> &Building {
        &self.building
    }

    /// Returns the port, e.g. to let a demo step a simulated endpoint.
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Attempts to connect and initialize the building model.
    ///
    /// On success: the three static building facts are fetched once, a fresh
    /// elevator sequence is allocated, elevator 0 is selected if any exist,
    /// one full cycle runs, and the snapshot is published. On any failure the
    /// state is left `Disconnected` and nothing propagates; an unreachable
    /// endpoint is an expected condition that the next scheduled tick
    /// retries.
    pub fn initialize(&mut self) {
        self.connection = ConnectionState::Connecting;
        match self.try_initialize() {
            Ok(()) => {
                self.connection = ConnectionState::Connected;
                print::ok(format!(
                    "Connected: {} floors, {} elevators",
                    self.building.num_floors,
                    self.building.num_elevators()
                ));
                self.publish();
            }
            Err(e) => {
                self.connection = ConnectionState::Disconnected;
                print::warn(format!("Remote endpoint not available: {}", e));
            }
        }
    }

    fn try_initialize(&mut self) -> PortResult<()> {
        self.port.connect()?;

        let num_floors = self.port.get_floor_num()?;
        let num_elevators = self.port.get_elevator_num()?;
        let floor_height = self.port.get_floor_height()?;

        // Operator-facing state survives a transient drop as long as the
        // fleet shape is unchanged; a different elevator count makes the old
        // indices meaningless and resets to defaults.
        let same_fleet = self.building.num_elevators() == num_elevators;
        let previous_modes: Vec<bool> = self
            .building
            .elevators
            .iter()
            .map(|elevator| elevator.automatic)
            .collect();
        let previous_selection = self.building.selected_elevator;

        self.building = Building {
            num_floors,
            floor_height,
            elevators: vec![Elevator::default(); num_elevators],
            ..Building::default()
        };

        if same_fleet {
            for (elevator, automatic) in self.building.elevators.iter_mut().zip(previous_modes) {
                elevator.automatic = automatic;
            }
            self.building.selected_elevator = previous_selection;
        }
        if num_elevators > 0 && self.building.selected_elevator.is_none() {
            self.building.selected_elevator = Some(0);
        }

        self.run_cycle()
    }

    /// Runs one update tick.
    ///
    /// Disconnected: re-run initialization and return. Connected: run one
    /// full cycle and publish the snapshot; on failure drop to disconnected
    /// and immediately retry initialization within the same call, so a
    /// transient endpoint restart heals without skipping a tick.
    pub fn update(&mut self) {
        if self.connection != ConnectionState::Connected {
            self.initialize();
            return;
        }

        match self.run_cycle() {
            Ok(()) => self.publish(),
            Err(e) => {
                print::warn(format!("Lost connection to remote endpoint: {}", e));
                self.connection = ConnectionState::Disconnected;
                self.initialize();
            }
        }
    }

    /// One full synchronize-then-dispatch pass over the whole building.
    fn run_cycle(&mut self) -> PortResult<()> {
        sync::refresh_call_buttons(&mut self.port, &mut self.building)?;
        for index in 0..self.building.num_elevators() {
            sync::refresh_elevator(&mut self.port, &mut self.building, index)?;
        }

        for (index, elevator) in self.building.elevators.iter().enumerate() {
            dispatch::operate(&mut self.port, index, elevator, self.building.num_floors)?;
        }

        Ok(())
    }

    /// Selects the elevator whose state the presentation layer details.
    ///
    /// Out-of-range indices are ignored.
    pub fn select_elevator(&mut self, index: usize) {
        if !self.building.is_valid_elevator(index) {
            print::warn(format!("select_elevator: no elevator {}", index));
            return;
        }
        self.building.selected_elevator = Some(index);
        self.publish();
    }

    /// Switches an elevator between manual and automatic operation.
    ///
    /// Takes effect on the next cycle; switching into automatic does not
    /// immediately re-run the sweep. Out-of-range indices are ignored.
    pub fn set_automatic_mode(&mut self, index: usize, enabled: bool) {
        let Some(elevator) = self.building.elevators.get_mut(index) else {
            print::warn(format!("set_automatic_mode: no elevator {}", index));
            return;
        };
        elevator.automatic = enabled;
        self.publish();
    }

    /// Sends a manually operated elevator to `target_floor`.
    ///
    /// Ignored when the elevator is in automatic mode or the index or floor
    /// is out of range. The committed direction is always issued before the
    /// target, matching the endpoint's expected command ordering; nothing is
    /// issued when the elevator already is at the target floor. A failing
    /// command drops the connection exactly like a cycle failure.
    pub fn set_manual_target(&mut self, index: usize, target_floor: usize) {
        let Some(elevator) = self.building.elevators.get(index) else {
            print::warn(format!("set_manual_target: no elevator {}", index));
            return;
        };
        if elevator.automatic {
            print::warn(format!(
                "set_manual_target: elevator {} is in automatic mode",
                index
            ));
            return;
        }
        if target_floor >= self.building.num_floors {
            print::warn(format!("set_manual_target: no floor {}", target_floor));
            return;
        }

        let current_floor = elevator.current_floor;
        let result = if target_floor < current_floor {
            self.port
                .set_committed_direction(index, Direction::Down)
                .and_then(|()| self.port.set_target(index, target_floor))
        } else if target_floor > current_floor {
            self.port
                .set_committed_direction(index, Direction::Up)
                .and_then(|()| self.port.set_target(index, target_floor))
        } else {
            // Already there.
            Ok(())
        };

        if let Err(e) = result {
            print::warn(format!("Lost connection to remote endpoint: {}", e));
            self.connection = ConnectionState::Disconnected;
        }
    }

    /// Publishes the current building model as an owned snapshot.
    fn publish(&self) {
        let _ = self.snapshot_tx.send(self.building.clone());
    }
}
