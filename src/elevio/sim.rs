//! An in-process simulated elevator endpoint.
//!
//! [`SimPort`] implements the full [`ElevatorPort`](super::ElevatorPort)
//! contract with a deterministic one-transition-per-tick kinematic model, so
//! the binary runs without a real building simulator and integration-style
//! tests can drive whole connect-synchronize-dispatch cycles. The demo loop
//! advances the simulation by calling [`SimPort::step`] between update ticks.

use crate::config;

use super::{Direction, DoorStatus, ElevatorPort, PortError, PortResult};

/// Endpoint-side state of one simulated elevator.
#[derive(Debug, Clone)]
struct SimElevator {
    floor: usize,
    target: usize,
    committed_direction: Direction,
    door_status: DoorStatus,
    speed: f64,
}

impl SimElevator {
    fn new() -> Self {
        Self {
            floor: 0,
            target: 0,
            committed_direction: Direction::Uncommitted,
            door_status: DoorStatus::Open,
            speed: 0.0,
        }
    }
}

/// A deterministic in-memory elevator endpoint.
pub struct SimPort {
    num_floors: usize,
    floor_height: f64,
    elevators: Vec<SimElevator>,
    buttons_up: Vec<bool>,
    buttons_down: Vec<bool>,
    cab_buttons: Vec<Vec<bool>>,
    available: bool,
}

impl SimPort {
    /// Creates a simulator with every elevator parked at floor 0, doors open.
    pub fn new(num_floors: usize, num_elevators: usize) -> Self {
        Self {
            num_floors,
            floor_height: config::SIM_FLOOR_HEIGHT,
            elevators: vec![SimElevator::new(); num_elevators],
            buttons_up: vec![false; num_floors],
            buttons_down: vec![false; num_floors],
            cab_buttons: vec![vec![false; num_floors]; num_elevators],
            available: true,
        }
    }

    /// Makes the endpoint reachable or unreachable. While unavailable, every
    /// port operation fails, which is how demos and tests exercise the
    /// supervisor's reconnect path.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Presses a call button outside the elevators. `Uncommitted` is ignored.
    pub fn press_floor_button(&mut self, floor: usize, direction: Direction) {
        if floor >= self.num_floors {
            return;
        }
        match direction {
            Direction::Up => self.buttons_up[floor] = true,
            Direction::Down => self.buttons_down[floor] = true,
            Direction::Uncommitted => {}
        }
    }

    /// Presses the cab button for `floor` inside `elevator`.
    pub fn press_cab_button(&mut self, elevator: usize, floor: usize) {
        if let Some(buttons) = self.cab_buttons.get_mut(elevator) {
            if floor < self.num_floors {
                buttons[floor] = true;
            }
        }
    }

    /// Advances the simulation by one tick: each elevator performs at most
    /// one transition (close doors, move one floor, open doors). Buttons for
    /// a floor are cleared when an elevator opens its doors there.
    pub fn step(&mut self) {
        for index in 0..self.elevators.len() {
            let elevator = &mut self.elevators[index];
            match elevator.door_status {
                DoorStatus::Open => {
                    if elevator.floor != elevator.target {
                        elevator.door_status = DoorStatus::Closing;
                    }
                }
                DoorStatus::Closing => {
                    elevator.door_status = DoorStatus::Closed;
                }
                DoorStatus::Closed => {
                    if elevator.floor < elevator.target {
                        elevator.floor += 1;
                        elevator.speed = config::SIM_TRAVEL_SPEED;
                    } else if elevator.floor > elevator.target {
                        elevator.floor -= 1;
                        elevator.speed = config::SIM_TRAVEL_SPEED;
                    } else {
                        elevator.speed = 0.0;
                        elevator.door_status = DoorStatus::Opening;
                    }
                }
                DoorStatus::Opening => {
                    elevator.door_status = DoorStatus::Open;
                    let floor = elevator.floor;
                    self.buttons_up[floor] = false;
                    self.buttons_down[floor] = false;
                    self.cab_buttons[index][floor] = false;
                }
            }
        }
    }

    fn check_available(&self) -> PortResult<()> {
        if self.available {
            Ok(())
        } else {
            Err(PortError::Unreachable("simulator unavailable".to_string()))
        }
    }

    fn elevator(&self, index: usize) -> PortResult<&SimElevator> {
        self.elevators
            .get(index)
            .ok_or_else(|| PortError::Unreachable(format!("no elevator {}", index)))
    }

    fn elevator_mut(&mut self, index: usize) -> PortResult<&mut SimElevator> {
        self.elevators
            .get_mut(index)
            .ok_or_else(|| PortError::Unreachable(format!("no elevator {}", index)))
    }
}

impl ElevatorPort for SimPort {
    fn connect(&mut self) -> PortResult<()> {
        self.check_available()
    }

    fn get_floor_num(&mut self) -> PortResult<usize> {
        self.check_available()?;
        Ok(self.num_floors)
    }

    fn get_elevator_num(&mut self) -> PortResult<usize> {
        self.check_available()?;
        Ok(self.elevators.len())
    }

    fn get_floor_height(&mut self) -> PortResult<f64> {
        self.check_available()?;
        Ok(self.floor_height)
    }

    fn get_floor_button_up(&mut self, floor: usize) -> PortResult<bool> {
        self.check_available()?;
        Ok(self.buttons_up.get(floor).copied().unwrap_or(false))
    }

    fn get_floor_button_down(&mut self, floor: usize) -> PortResult<bool> {
        self.check_available()?;
        Ok(self.buttons_down.get(floor).copied().unwrap_or(false))
    }

    fn get_committed_direction(&mut self, elevator: usize) -> PortResult<Direction> {
        self.check_available()?;
        Ok(self.elevator(elevator)?.committed_direction)
    }

    fn get_target(&mut self, elevator: usize) -> PortResult<usize> {
        self.check_available()?;
        Ok(self.elevator(elevator)?.target)
    }

    fn get_elevator_accel(&mut self, elevator: usize) -> PortResult<f64> {
        self.check_available()?;
        self.elevator(elevator)?;
        Ok(0.0)
    }

    fn get_elevator_door_status(&mut self, elevator: usize) -> PortResult<DoorStatus> {
        self.check_available()?;
        Ok(self.elevator(elevator)?.door_status)
    }

    fn get_elevator_floor(&mut self, elevator: usize) -> PortResult<usize> {
        self.check_available()?;
        Ok(self.elevator(elevator)?.floor)
    }

    fn get_elevator_position(&mut self, elevator: usize) -> PortResult<f64> {
        self.check_available()?;
        let floor = self.elevator(elevator)?.floor;
        Ok(floor as f64 * self.floor_height)
    }

    fn get_elevator_speed(&mut self, elevator: usize) -> PortResult<f64> {
        self.check_available()?;
        Ok(self.elevator(elevator)?.speed)
    }

    fn get_elevator_weight(&mut self, elevator: usize) -> PortResult<f64> {
        self.check_available()?;
        self.elevator(elevator)?;
        Ok(0.0)
    }

    fn get_elevator_capacity(&mut self, elevator: usize) -> PortResult<usize> {
        self.check_available()?;
        self.elevator(elevator)?;
        Ok(config::SIM_CAPACITY)
    }

    fn get_elevator_button(&mut self, elevator: usize, floor: usize) -> PortResult<bool> {
        self.check_available()?;
        let buttons = self
            .cab_buttons
            .get(elevator)
            .ok_or_else(|| PortError::Unreachable(format!("no elevator {}", elevator)))?;
        Ok(buttons.get(floor).copied().unwrap_or(false))
    }

    fn set_committed_direction(&mut self, elevator: usize, direction: Direction) -> PortResult<()> {
        self.check_available()?;
        self.elevator_mut(elevator)?.committed_direction = direction;
        Ok(())
    }

    fn set_target(&mut self, elevator: usize, floor: usize) -> PortResult<()> {
        self.check_available()?;
        if floor >= self.num_floors {
            return Err(PortError::Unreachable(format!("no floor {}", floor)));
        }
        self.elevator_mut(elevator)?.target = floor;
        Ok(())
    }
}
