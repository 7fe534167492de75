//! Help functions to refresh the building model from the remote endpoint
//!
//! Both functions perform a full per-cycle refresh: the endpoint is the sole
//! source of truth, so sets are rebuilt wholesale rather than diffed
//! incrementally. Any port failure aborts the refresh and propagates to the
//! cycle supervisor; previously synchronized state is left untouched in that
//! case, never half replaced.

use crate::building::Building;
use crate::elevio::{ElevatorPort, PortResult};

/// Rebuilds the call button sets for every floor of the building.
///
/// Probes the up and down flag for each floor in `[0, num_floors)` and
/// replaces `floor_buttons_up` / `floor_buttons_down` with the floors whose
/// flag is set. The new sets are built locally and assigned only after every
/// probe succeeded, so an aborted refresh never mixes fresh and stale floors
/// within one field.
pub fn refresh_call_buttons<P: ElevatorPort + ?Sized>(
    port: &mut P,
    building: &mut Building,
) -> PortResult<()> {
    let mut up_pressed = Vec::new();
    let mut down_pressed = Vec::new();

    for floor in 0..building.num_floors {
        if port.get_floor_button_up(floor)? {
            up_pressed.push(floor);
        }
        if port.get_floor_button_down(floor)? {
            down_pressed.push(floor);
        }
    }

    building.floor_buttons_up = up_pressed;
    building.floor_buttons_down = down_pressed;
    Ok(())
}

/// Refreshes all dynamic fields of the elevator at `index` in place.
///
/// Overwrites the entity's fields with the values reported by the endpoint
/// (the entity itself is never replaced), then rebuilds its
/// `active_floor_buttons` by probing the cab button for every floor.
/// Indices outside the elevator sequence are ignored.
pub fn refresh_elevator<P: ElevatorPort + ?Sized>(
    port: &mut P,
    building: &mut Building,
    index: usize,
) -> PortResult<()> {
    let num_floors = building.num_floors;
    let Some(elevator) = building.elevators.get_mut(index) else {
        return Ok(());
    };

    elevator.committed_direction = port.get_committed_direction(index)?;
    elevator.current_target = port.get_target(index)?;
    elevator.current_acceleration = port.get_elevator_accel(index)?;
    elevator.door_status = port.get_elevator_door_status(index)?;
    elevator.current_floor = port.get_elevator_floor(index)?;
    elevator.current_height_over_ground = port.get_elevator_position(index)?;
    elevator.current_speed = port.get_elevator_speed(index)?;
    elevator.current_passenger_weight = port.get_elevator_weight(index)?;
    elevator.max_passenger_number = port.get_elevator_capacity(index)?;

    let mut cab_buttons = Vec::new();
    for floor in 0..num_floors {
        if port.get_elevator_button(index, floor)? {
            cab_buttons.push(floor);
        }
    }
    elevator.active_floor_buttons = cab_buttons;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::building::Elevator;
    use crate::elevio::mock::MockPort;
    use crate::elevio::{Direction, DoorStatus};
    use pretty_assertions::assert_eq;

    fn building_with(num_floors: usize, num_elevators: usize) -> Building {
        Building {
            num_floors,
            floor_height: 3.0,
            elevators: vec![Elevator::default(); num_elevators],
            ..Building::default()
        }
    }

    #[test]
    fn call_buttons_mirror_the_port_exactly() {
        let mut port = MockPort::new(5, 1);
        port.buttons_up = vec![0, 3];
        port.buttons_down = vec![4];

        let mut building = building_with(5, 1);
        building.floor_buttons_up = vec![1]; // stale from a previous cycle

        refresh_call_buttons(&mut port, &mut building).unwrap();

        assert_eq!(building.floor_buttons_up, vec![0, 3]);
        assert_eq!(building.floor_buttons_down, vec![4]);

        for floor in 0..5 {
            assert_eq!(
                building.floor_buttons_up.contains(&floor),
                port.buttons_up.contains(&floor)
            );
            assert_eq!(
                building.floor_buttons_down.contains(&floor),
                port.buttons_down.contains(&floor)
            );
        }
    }

    #[test]
    fn call_button_failure_aborts_and_keeps_previous_sets() {
        let mut port = MockPort::new(5, 1);
        port.offline = true;

        let mut building = building_with(5, 1);
        building.floor_buttons_up = vec![2];
        building.floor_buttons_down = vec![1];

        assert!(refresh_call_buttons(&mut port, &mut building).is_err());
        assert_eq!(building.floor_buttons_up, vec![2]);
        assert_eq!(building.floor_buttons_down, vec![1]);
    }

    #[test]
    fn elevator_refresh_overwrites_in_place_and_keeps_mode() {
        let mut port = MockPort::new(5, 2);
        port.elevators[1].committed_direction = Direction::Down;
        port.elevators[1].target = 2;
        port.elevators[1].floor = 3;
        port.elevators[1].door_status = DoorStatus::Closing;
        port.elevators[1].speed = 1.2;
        port.elevators[1].position = 8.7;
        port.elevators[1].weight = 140.0;
        port.elevators[1].capacity = 13;
        port.elevators[1].cab_buttons = vec![0, 2];

        let mut building = building_with(5, 2);
        building.elevators[1].automatic = true; // locally owned, must survive

        refresh_elevator(&mut port, &mut building, 1).unwrap();

        let elevator = &building.elevators[1];
        assert_eq!(elevator.committed_direction, Direction::Down);
        assert_eq!(elevator.current_target, 2);
        assert_eq!(elevator.current_floor, 3);
        assert_eq!(elevator.door_status, DoorStatus::Closing);
        assert_eq!(elevator.current_speed, 1.2);
        assert_eq!(elevator.current_height_over_ground, 8.7);
        assert_eq!(elevator.current_passenger_weight, 140.0);
        assert_eq!(elevator.max_passenger_number, 13);
        assert_eq!(elevator.active_floor_buttons, vec![0, 2]);
        assert!(elevator.automatic);
    }

    #[test]
    fn elevator_refresh_out_of_range_is_a_no_op() {
        let mut port = MockPort::new(5, 1);
        let mut building = building_with(5, 1);

        refresh_elevator(&mut port, &mut building, 7).unwrap();
        assert_eq!(building.elevators.len(), 1);
    }

    #[test]
    fn elevator_refresh_failure_propagates() {
        let mut port = MockPort::new(5, 1);
        port.offline = true;

        let mut building = building_with(5, 1);
        assert!(refresh_elevator(&mut port, &mut building, 0).is_err());
    }
}
