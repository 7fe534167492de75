use anyhow::Result;

use elevatorcc::controller::ControlCenter;
use elevatorcc::elevio::sim::SimPort;
use elevatorcc::elevio::Direction;
use elevatorcc::{config, print};

/// Options read from the command line.
#[derive(Clone, Copy)]
struct Options {
    /// Dump snapshots as JSON instead of the status table.
    snapshot_json: bool,
}

/// ### Reads arguments from `cargo run`
///
/// Used to modify what is printed during runtime. Available options:
///
/// `print_building::(true/false)` &rarr; Prints the building status table twice per second
/// `print_err::(true/false)` &rarr; Prints error messages
/// `print_warn::(true/false)` &rarr; Prints warning messages
/// `print_ok::(true/false)` &rarr; Prints OK messages
/// `print_info::(true/false)` &rarr; Prints informational messages
/// `print_else::(true/false)` &rarr; Prints other messages
/// `debug::` &rarr; Disables all prints except error messages
/// `snapshot` &rarr; Dumps the building snapshot as JSON instead of the status table
/// `help` &rarr; Displays all possible arguments without starting the program
///
/// If no arguments are provided, all prints are enabled by default.
fn parse_args() -> Options {
    let args: Vec<String> = std::env::args().collect();
    let mut options = Options {
        snapshot_json: false,
    };

    for arg in &args[1..] {
        let parts: Vec<&str> = arg.split("::").collect();
        if parts.len() == 2 {
            let key = parts[0].to_lowercase();
            let value = parts[1].to_lowercase();
            let is_true = value == "true";

            match key.as_str() {
                "print_building" => *config::PRINT_BUILDING_ON.lock().unwrap() = is_true,
                "print_err" => *config::PRINT_ERR_ON.lock().unwrap() = is_true,
                "print_warn" => *config::PRINT_WARN_ON.lock().unwrap() = is_true,
                "print_ok" => *config::PRINT_OK_ON.lock().unwrap() = is_true,
                "print_info" => *config::PRINT_INFO_ON.lock().unwrap() = is_true,
                "print_else" => *config::PRINT_ELSE_ON.lock().unwrap() = is_true,
                "debug" => {
                    // Debug mode: error messages only
                    *config::PRINT_BUILDING_ON.lock().unwrap() = false;
                    *config::PRINT_WARN_ON.lock().unwrap() = false;
                    *config::PRINT_OK_ON.lock().unwrap() = false;
                    *config::PRINT_INFO_ON.lock().unwrap() = false;
                    *config::PRINT_ELSE_ON.lock().unwrap() = false;
                }
                _ => {}
            }
        } else if arg.to_lowercase() == "help" {
            println!("Available arguments:");
            println!("  print_building::true/false");
            println!("  print_err::true/false");
            println!("  print_warn::true/false");
            println!("  print_ok::true/false");
            println!("  print_info::true/false");
            println!("  print_else::true/false");
            println!("  debug (error messages only)");
            println!("  snapshot (dump snapshots as JSON)");
            std::process::exit(0);
        } else if arg.to_lowercase() == "snapshot" {
            options.snapshot_json = true;
        }
    }

    options
}

#[tokio::main]
async fn main() -> Result<()> {
    let options = parse_args();

    print::info("Starting elevator control center...".to_string());

    // Demo endpoint: an in-process simulator with some initial demand so the
    // status table has something to show.
    let mut sim = SimPort::new(config::SIM_NUM_FLOORS, config::SIM_NUM_ELEVATORS);
    sim.press_floor_button(2, Direction::Up);
    sim.press_cab_button(1, 3);

    let (mut center, snapshot_rx) = ControlCenter::new(sim);
    center.initialize();
    center.set_automatic_mode(0, true);

    // Task printing the latest published snapshot at a slower cadence
    {
        let mut snapshot_rx = snapshot_rx.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(config::STATUS_PRINT_PERIOD);
            loop {
                ticker.tick().await;
                let snapshot = snapshot_rx.borrow_and_update().clone();
                if options.snapshot_json {
                    match serde_json::to_string_pretty(&snapshot) {
                        Ok(json) => println!("{}", json),
                        Err(e) => print::err(format!("Failed to serialize snapshot: {}", e)),
                    }
                } else {
                    print::building(&snapshot);
                }
            }
        });
    }

    // The fixed external cadence driving the polling-reconciliation-dispatch
    // loop. Cycles are strictly serialized: step, update, wait for the next
    // tick.
    let mut ticker = tokio::time::interval(config::UPDATE_PERIOD);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                center.port_mut().step();
                center.update();
            }
            _ = &mut ctrl_c => {
                print::info("Shutting down".to_string());
                break;
            }
        }
    }

    Ok(())
}
