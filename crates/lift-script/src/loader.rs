//! CSV script loader.
//!
//! # CSV format
//!
//! One row per event.  Rows need not be sorted; events on the same tick are
//! applied in file order.
//!
//! ```csv
//! tick,action,floor,direction,car
//! 0,hall,5,up,
//! 2,car,8,,0
//! 3,cancel,5,up,
//! 4,out_of_service,,,1
//! 9,restore,,,1
//! ```
//!
//! | `action`         | Required columns       |
//! |------------------|------------------------|
//! | `hall`           | `floor`, `direction`   |
//! | `car`            | `car`, `floor`         |
//! | `cancel`         | `floor`, `direction`   |
//! | `out_of_service` | `car`                  |
//! | `restore`        | `car`                  |

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use lift_core::{CarId, Floor, HallDirection, Tick};

use crate::{Event, EventQueue, ScriptError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ScriptRecord {
    tick:      u64,
    action:    String,
    floor:     Option<Floor>,
    direction: Option<String>,
    car:       Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an event script from a CSV file.
pub fn load_script_csv(path: &Path) -> Result<EventQueue, ScriptError> {
    let file = std::fs::File::open(path)
        .map_err(ScriptError::Io)?;
    load_script_reader(file)
}

/// Like [`load_script_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a script in a
/// binary.
pub fn load_script_reader<R: Read>(reader: R) -> Result<EventQueue, ScriptError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut queue = EventQueue::new();

    for (i, result) in csv_reader.deserialize::<ScriptRecord>().enumerate() {
        // Row 1 is the header.
        let line = i + 2;
        let row = result.map_err(|e| ScriptError::Parse(format!("row {line}: {e}")))?;
        let event = parse_event(&row).map_err(|msg| ScriptError::Parse(format!("row {line}: {msg}")))?;
        queue.push(Tick(row.tick), event);
    }

    debug!(events = queue.len(), last_tick = ?queue.last_tick(), "loaded event script");
    Ok(queue)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_event(row: &ScriptRecord) -> Result<Event, String> {
    match row.action.to_ascii_lowercase().as_str() {
        "hall" => Ok(Event::HallCall {
            floor:     require(row.floor, "floor")?,
            direction: direction(row)?,
        }),
        "car" => Ok(Event::CarCall {
            car:   CarId(require(row.car, "car")?),
            floor: require(row.floor, "floor")?,
        }),
        "cancel" => Ok(Event::CancelHall {
            floor:     require(row.floor, "floor")?,
            direction: direction(row)?,
        }),
        "out_of_service" => Ok(Event::OutOfService(CarId(require(row.car, "car")?))),
        "restore"        => Ok(Event::Restore(CarId(require(row.car, "car")?))),
        other => Err(format!(
            "unknown action {other:?}: expected hall, car, cancel, out_of_service, or restore"
        )),
    }
}

fn require<T>(value: Option<T>, column: &str) -> Result<T, String> {
    value.ok_or_else(|| format!("action requires a {column:?} value"))
}

fn direction(row: &ScriptRecord) -> Result<HallDirection, String> {
    row.direction
        .as_deref()
        .ok_or_else(|| "action requires a \"direction\" value".to_string())?
        .parse()
}
