//! ## Printing Module
//!
//! This module is only here to make logging in the terminal easier to read.
//! It allows to print in appropriate colors depending on the situation.
//! It also provides a nice print-format for the building status.

use crate::building::Building;
use crate::config;
use crate::elevio::{Direction, DoorStatus};

use ansi_term::Colour::{self, Cyan, Green, Purple, Red, White, Yellow};
use unicode_width::UnicodeWidthStr;

/// Prints a message in a specified color to the terminal.
///
/// If `PRINT_ELSE_ON` is `false`, the message will not be printed.
///
/// ## Parameters
/// - `msg`: The message to print.
/// - `color`: The color to use for the text output.
pub fn color(msg: String, color: Colour) {
    let print_stat = *config::PRINT_ELSE_ON.lock().unwrap();

    if print_stat {
        println!("{}{}\n", color.paint("[CUSTOM]:  "), color.paint(msg));
    }
}

/// Prints an error message in red to the terminal.
///
/// If `PRINT_ERR_ON` is `false`, the message will not be printed.
///
/// ## Terminal output
/// - "\[ERROR\]:   {}", msg
pub fn err(msg: String) {
    let print_stat = *config::PRINT_ERR_ON.lock().unwrap();

    if print_stat {
        println!("{}{}\n", Red.paint("[ERROR]:   "), Red.paint(msg));
    }
}

/// Prints a warning message in yellow to the terminal.
///
/// If `PRINT_WARN_ON` is `false`, the message will not be printed.
///
/// ## Terminal output
/// - "\[WARNING\]: {}", msg
pub fn warn(msg: String) {
    let print_stat = *config::PRINT_WARN_ON.lock().unwrap();

    if print_stat {
        println!("{}{}\n", Yellow.paint("[WARNING]: "), Yellow.paint(msg));
    }
}

/// Prints a success message in green to the terminal.
///
/// If `PRINT_OK_ON` is `false`, the message will not be printed.
///
/// ## Terminal output
/// - "\[OK\]:      {}", msg
pub fn ok(msg: String) {
    let print_stat = *config::PRINT_OK_ON.lock().unwrap();

    if print_stat {
        println!("{}{}\n", Green.paint("[OK]:      "), Green.paint(msg));
    }
}

/// Prints an informational message in light blue to the terminal.
///
/// If `PRINT_INFO_ON` is `false`, the message will not be printed.
///
/// ## Terminal output
/// - "\[INFO\]:    {}", msg
pub fn info(msg: String) {
    let print_stat = *config::PRINT_INFO_ON.lock().unwrap();

    let light_blue = Colour::RGB(102, 178, 255);
    if print_stat {
        println!("{}{}\n", light_blue.paint("[INFO]:    "), light_blue.paint(msg));
    }
}

/// Pads the input text to a fixed display width using spaces.
///
/// Accounts for characters that may take more than one column width,
/// ensuring aligned text in terminal-based tables.
fn pad_text(text: &str, width: usize) -> String {
    let visible_width = UnicodeWidthStr::width(text);
    let padding = width.saturating_sub(visible_width);
    format!("{}{}", text, " ".repeat(padding))
}

/// Returns a colored marker for a pressed/released button, padded to `width`.
///
/// The raw text is padded before painting so the ANSI escape codes do not
/// throw off the column alignment.
fn button_marker(pressed: bool, width: usize) -> String {
    if pressed {
        Green.paint(pad_text("●", width)).to_string()
    } else {
        White.dimmed().paint(pad_text("·", width)).to_string()
    }
}

fn direction_label(direction: Direction, width: usize) -> String {
    match direction {
        Direction::Up => Yellow.paint(pad_text("↑ up", width)).to_string(),
        Direction::Down => Yellow.paint(pad_text("↓ down", width)).to_string(),
        Direction::Uncommitted => White.dimmed().paint(pad_text("—", width)).to_string(),
    }
}

fn door_label(door: DoorStatus, width: usize) -> String {
    match door {
        DoorStatus::Open => Purple.paint(pad_text("open", width)).to_string(),
        DoorStatus::Closed => Green.paint(pad_text("closed", width)).to_string(),
        DoorStatus::Opening => Yellow.paint(pad_text("opening", width)).to_string(),
        DoorStatus::Closing => Yellow.paint(pad_text("closing", width)).to_string(),
    }
}

/// Logs the current [`Building`] snapshot to the terminal in a structured and
/// colorized table format.
///
/// Visually presents the status of the controlled fleet:
/// - Call buttons across all floors (up/down requests)
/// - Per-elevator state (mode, floor, target, direction, doors, speed, cab calls)
/// - The operator-selected elevator, marked with `*`
///
/// # Behavior
/// - If configured printing is disabled (`config::PRINT_BUILDING_ON` is false),
///   the function exits early.
/// - Printing frequency should be limited (e.g. once per 500 ms).
pub fn building(snapshot: &Building) {
    let print_stat = *config::PRINT_BUILDING_ON.lock().unwrap();
    if !print_stat {
        return;
    }

    println!("{}", Cyan.bold().paint("┌────────────────────────────────┐"));
    println!("{}", Cyan.bold().paint("│     BUILDING CALL BUTTONS      │"));
    println!("{}", Cyan.bold().paint("└────────────────────────────────┘"));

    if snapshot.num_elevators() == 0 {
        println!("{}\n", White.dimmed().paint("  (not connected)"));
        return;
    }

    println!("┌─────────────┬──────┬──────┐");
    println!("{}", White.bold().paint("│ Floor       │ Up   │ Down │"));
    println!("├─────────────┼──────┼──────┤");
    for floor in (0..snapshot.num_floors).rev() {
        println!(
            "│ {} │ {} │ {} │",
            pad_text(&floor.to_string(), 11),
            button_marker(snapshot.floor_buttons_up.contains(&floor), 4),
            button_marker(snapshot.floor_buttons_down.contains(&floor), 4)
        );
    }
    println!("└─────────────┴──────┴──────┘");

    println!("{}", Purple.bold().paint("┌────────────────────────────────┐"));
    println!("{}", Purple.bold().paint("│        ELEVATOR STATUS         │"));
    println!("{}", Purple.bold().paint("└────────────────────────────────┘"));

    println!("┌──────┬───────────┬───────┬────────┬────────────┬──────────┬─────────┬──────────────────┐");
    println!(
        "{}",
        White
            .bold()
            .paint("│ ID   │ Mode      │ Floor │ Target │ Direction  │ Doors    │ Speed   │ Cab calls        │")
    );
    println!("├──────┼───────────┼───────┼────────┼────────────┼──────────┼─────────┼──────────────────┤");

    for (index, elevator) in snapshot.elevators.iter().enumerate() {
        let id_text = if snapshot.selected_elevator == Some(index) {
            format!("{} *", index)
        } else {
            index.to_string()
        };
        let mode_text = if elevator.automatic {
            Green.paint(pad_text("automatic", 9)).to_string()
        } else {
            Yellow.paint(pad_text("manual", 9)).to_string()
        };
        let cab_calls = elevator
            .active_floor_buttons
            .iter()
            .map(|floor| floor.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        println!(
            "│ {} │ {} │ {} │ {} │ {} │ {} │ {} │ {} │",
            pad_text(&id_text, 4),
            mode_text,
            pad_text(&elevator.current_floor.to_string(), 5),
            pad_text(&elevator.current_target.to_string(), 6),
            direction_label(elevator.committed_direction, 10),
            door_label(elevator.door_status, 8),
            pad_text(&format!("{:.1}", elevator.current_speed), 7),
            pad_text(&cab_calls, 16)
        );
    }

    println!("└──────┴───────────┴───────┴────────┴────────────┴──────────┴─────────┴──────────────────┘\n");
}
