//! Per-elevator dispatch decisions
//!
//! Runs once per elevator per cycle, after synchronization. An automatic
//! elevator is driven by the sweep state machine; a manual elevator only gets
//! the assist transition that releases it once it has parked. All commands go
//! through the remote control port, and a failing command aborts the
//! remaining dispatch for the cycle.

use crate::building::Elevator;
use crate::elevio::{Direction, ElevatorPort, PortResult};

/// Runs the dispatch decision for one elevator, branching on its mode.
pub fn operate<P: ElevatorPort + ?Sized>(
    port: &mut P,
    index: usize,
    elevator: &Elevator,
    num_floors: usize,
) -> PortResult<()> {
    if elevator.automatic {
        sweep(port, index, elevator, num_floors)
    } else {
        release_when_parked(port, index, elevator)
    }
}

/// The automatic sweep state machine.
///
/// The state variable is the committed direction as reported by the endpoint
/// this cycle. While committed, commands are only issued at a floor with zero
/// speed and doors open, which limits the engine to one target change per
/// stop and keeps it from flooding a moving elevator with commands. The
/// `Uncommitted` state re-commits without the at-rest guard: it is a pure
/// decision state with no motion attached.
fn sweep<P: ElevatorPort + ?Sized>(
    port: &mut P,
    index: usize,
    elevator: &Elevator,
    num_floors: usize,
) -> PortResult<()> {
    let Some(top_floor) = num_floors.checked_sub(1) else {
        // A building without floors has nothing to sweep.
        return Ok(());
    };

    match elevator.committed_direction {
        Direction::Up => {
            if elevator.is_at_rest() {
                if elevator.current_floor < top_floor {
                    port.set_target(index, elevator.current_floor + 1)?;
                } else {
                    port.set_committed_direction(index, Direction::Uncommitted)?;
                }
            }
        }
        Direction::Down => {
            if elevator.is_at_rest() {
                if elevator.current_floor > 0 {
                    port.set_target(index, elevator.current_floor - 1)?;
                } else {
                    port.set_committed_direction(index, Direction::Uncommitted)?;
                }
            }
        }
        Direction::Uncommitted => {
            if elevator.current_floor < top_floor {
                port.set_committed_direction(index, Direction::Up)?;
            } else {
                port.set_committed_direction(index, Direction::Down)?;
            }
        }
    }

    Ok(())
}

/// The manual-assist transition.
///
/// Once a manually operated elevator has parked at its target, its last
/// committed direction is released so a subsequent manual target can freely
/// choose either direction. No action in any other state.
fn release_when_parked<P: ElevatorPort + ?Sized>(
    port: &mut P,
    index: usize,
    elevator: &Elevator,
) -> PortResult<()> {
    if elevator.is_parked() {
        port.set_committed_direction(index, Direction::Uncommitted)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elevio::mock::{Command, MockPort};
    use crate::elevio::DoorStatus;
    use pretty_assertions::assert_eq;

    fn resting_elevator(floor: usize, direction: Direction) -> Elevator {
        Elevator {
            current_floor: floor,
            current_target: floor,
            committed_direction: direction,
            door_status: DoorStatus::Open,
            automatic: true,
            ..Elevator::default()
        }
    }

    #[test]
    fn sweep_up_targets_the_next_floor() {
        let mut port = MockPort::new(5, 1);
        let elevator = resting_elevator(2, Direction::Up);

        operate(&mut port, 0, &elevator, 5).unwrap();

        assert_eq!(port.commands, vec![Command::Target(0, 3)]);
    }

    #[test]
    fn sweep_up_releases_at_the_top_floor() {
        let mut port = MockPort::new(5, 1);
        let elevator = resting_elevator(4, Direction::Up);

        operate(&mut port, 0, &elevator, 5).unwrap();

        assert_eq!(
            port.commands,
            vec![Command::CommitDirection(0, Direction::Uncommitted)]
        );
    }

    #[test]
    fn sweep_down_targets_the_floor_below() {
        let mut port = MockPort::new(5, 1);
        let elevator = resting_elevator(3, Direction::Down);

        operate(&mut port, 0, &elevator, 5).unwrap();

        assert_eq!(port.commands, vec![Command::Target(0, 2)]);
    }

    #[test]
    fn sweep_down_releases_at_the_bottom_floor() {
        let mut port = MockPort::new(5, 1);
        let elevator = resting_elevator(0, Direction::Down);

        operate(&mut port, 0, &elevator, 5).unwrap();

        assert_eq!(
            port.commands,
            vec![Command::CommitDirection(0, Direction::Uncommitted)]
        );
    }

    #[test]
    fn uncommitted_below_top_commits_up_exactly_once() {
        let mut port = MockPort::new(5, 1);
        let elevator = resting_elevator(1, Direction::Uncommitted);

        operate(&mut port, 0, &elevator, 5).unwrap();

        // One direction command, never a target.
        assert_eq!(
            port.commands,
            vec![Command::CommitDirection(0, Direction::Up)]
        );
    }

    #[test]
    fn uncommitted_at_top_commits_down() {
        let mut port = MockPort::new(5, 1);
        let elevator = resting_elevator(4, Direction::Uncommitted);

        operate(&mut port, 0, &elevator, 5).unwrap();

        assert_eq!(
            port.commands,
            vec![Command::CommitDirection(0, Direction::Down)]
        );
    }

    #[test]
    fn no_command_while_moving_or_doors_not_open() {
        let mut port = MockPort::new(5, 1);

        let mut moving = resting_elevator(2, Direction::Up);
        moving.current_speed = 1.4;
        operate(&mut port, 0, &moving, 5).unwrap();

        let mut doors_closed = resting_elevator(2, Direction::Down);
        doors_closed.door_status = DoorStatus::Closed;
        operate(&mut port, 0, &doors_closed, 5).unwrap();

        assert_eq!(port.commands, vec![]);
    }

    #[test]
    fn manual_elevator_is_released_once_parked() {
        let mut port = MockPort::new(5, 1);
        let mut elevator = resting_elevator(2, Direction::Up);
        elevator.automatic = false;

        operate(&mut port, 0, &elevator, 5).unwrap();

        assert_eq!(
            port.commands,
            vec![Command::CommitDirection(0, Direction::Uncommitted)]
        );
    }

    #[test]
    fn manual_elevator_underway_is_left_alone() {
        let mut port = MockPort::new(5, 1);
        let mut elevator = resting_elevator(2, Direction::Up);
        elevator.automatic = false;
        elevator.current_target = 4; // not yet arrived

        operate(&mut port, 0, &elevator, 5).unwrap();

        assert_eq!(port.commands, vec![]);
    }

    #[test]
    fn command_failure_propagates() {
        let mut port = MockPort::new(5, 1);
        port.offline = true;
        let elevator = resting_elevator(2, Direction::Up);

        assert!(operate(&mut port, 0, &elevator, 5).is_err());
    }
}
