//! Scripted in-memory port used by unit tests.
//!
//! The mock plays back whatever state a test loads into its public fields and
//! records every mutating command in order, so tests can assert both command
//! content and command ordering. Setting `offline` makes every operation fail
//! with [`PortError::Unreachable`], which is how tests drive the supervisor's
//! reconnect path.

use super::{Direction, DoorStatus, ElevatorPort, PortError, PortResult};

/// A mutating command recorded by the mock, in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `set_committed_direction(elevator, direction)`
    CommitDirection(usize, Direction),
    /// `set_target(elevator, floor)`
    Target(usize, usize),
}

/// Remote-side state of one mock elevator.
#[derive(Debug, Clone)]
pub struct MockElevator {
    pub committed_direction: Direction,
    pub target: usize,
    pub accel: f64,
    pub door_status: DoorStatus,
    pub floor: usize,
    pub position: f64,
    pub speed: f64,
    pub weight: f64,
    pub capacity: usize,
    /// Floors whose cab button is pressed.
    pub cab_buttons: Vec<usize>,
}

impl Default for MockElevator {
    fn default() -> Self {
        Self {
            committed_direction: Direction::Uncommitted,
            target: 0,
            accel: 0.0,
            door_status: DoorStatus::Open,
            floor: 0,
            position: 0.0,
            speed: 0.0,
            weight: 0.0,
            capacity: 8,
            cab_buttons: Vec::new(),
        }
    }
}

/// Scripted port implementation recording all commands.
pub struct MockPort {
    pub num_floors: usize,
    pub floor_height: f64,
    pub elevators: Vec<MockElevator>,
    /// Floors whose up call button is pressed.
    pub buttons_up: Vec<usize>,
    /// Floors whose down call button is pressed.
    pub buttons_down: Vec<usize>,
    /// Every mutating command issued through the port, in order.
    pub commands: Vec<Command>,
    /// When true, every operation (including `connect`) fails.
    pub offline: bool,
}

impl MockPort {
    /// Creates a reachable mock with `num_elevators` default elevators.
    pub fn new(num_floors: usize, num_elevators: usize) -> Self {
        Self {
            num_floors,
            floor_height: 3.0,
            elevators: vec![MockElevator::default(); num_elevators],
            buttons_up: Vec::new(),
            buttons_down: Vec::new(),
            commands: Vec::new(),
            offline: false,
        }
    }

    fn check_online(&self) -> PortResult<()> {
        if self.offline {
            Err(PortError::Unreachable("mock offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl ElevatorPort for MockPort {
    fn connect(&mut self) -> PortResult<()> {
        self.check_online()
    }

    fn get_floor_num(&mut self) -> PortResult<usize> {
        self.check_online()?;
        Ok(self.num_floors)
    }

    fn get_elevator_num(&mut self) -> PortResult<usize> {
        self.check_online()?;
        Ok(self.elevators.len())
    }

    fn get_floor_height(&mut self) -> PortResult<f64> {
        self.check_online()?;
        Ok(self.floor_height)
    }

    fn get_floor_button_up(&mut self, floor: usize) -> PortResult<bool> {
        self.check_online()?;
        Ok(self.buttons_up.contains(&floor))
    }

    fn get_floor_button_down(&mut self, floor: usize) -> PortResult<bool> {
        self.check_online()?;
        Ok(self.buttons_down.contains(&floor))
    }

    fn get_committed_direction(&mut self, elevator: usize) -> PortResult<Direction> {
        self.check_online()?;
        Ok(self.elevators[elevator].committed_direction)
    }

    fn get_target(&mut self, elevator: usize) -> PortResult<usize> {
        self.check_online()?;
        Ok(self.elevators[elevator].target)
    }

    fn get_elevator_accel(&mut self, elevator: usize) -> PortResult<f64> {
        self.check_online()?;
        Ok(self.elevators[elevator].accel)
    }

    fn get_elevator_door_status(&mut self, elevator: usize) -> PortResult<DoorStatus> {
        self.check_online()?;
        Ok(self.elevators[elevator].door_status)
    }

    fn get_elevator_floor(&mut self, elevator: usize) -> PortResult<usize> {
        self.check_online()?;
        Ok(self.elevators[elevator].floor)
    }

    fn get_elevator_position(&mut self, elevator: usize) -> PortResult<f64> {
        self.check_online()?;
        Ok(self.elevators[elevator].position)
    }

    fn get_elevator_speed(&mut self, elevator: usize) -> PortResult<f64> {
        self.check_online()?;
        Ok(self.elevators[elevator].speed)
    }

    fn get_elevator_weight(&mut self, elevator: usize) -> PortResult<f64> {
        self.check_online()?;
        Ok(self.elevators[elevator].weight)
    }

    fn get_elevator_capacity(&mut self, elevator: usize) -> PortResult<usize> {
        self.check_online()?;
        Ok(self.elevators[elevator].capacity)
    }

    fn get_elevator_button(&mut self, elevator: usize, floor: usize) -> PortResult<bool> {
        self.check_online()?;
        Ok(self.elevators[elevator].cab_buttons.contains(&floor))
    }

    // Commands are recorded, never applied: the remote-side state stays
    // exactly as the test scripted it.
    fn set_committed_direction(&mut self, elevator: usize, direction: Direction) -> PortResult<()> {
        self.check_online()?;
        self.commands.push(Command::CommitDirection(elevator, direction));
        Ok(())
    }

    fn set_target(&mut self, elevator: usize, floor: usize) -> PortResult<()> {
        self.check_online()?;
        self.commands.push(Command::Target(elevator, floor));
        Ok(())
    }
}
