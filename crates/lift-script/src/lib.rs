//! `lift-script` — the event-source side of the simulator.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`event`]   | `Event` — hall call, car call, cancel, maintenance toggles   |
//! | [`queue`]   | `EventQueue` (`BTreeMap<Tick, Vec<Event>>`)                  |
//! | [`loader`]  | `load_script_csv`, `load_script_reader`                      |
//! | [`traffic`] | `TrafficGenerator` — seeded synthetic passenger traffic       |
//! | [`error`]   | `ScriptError`, `ScriptResult<T>`                             |
//!
//! Events are plain data.  Nothing here validates floors or car ids against
//! a building; the dispatcher does that when an event is applied, so a bad
//! script row is rejected at its tick rather than at load time.

pub mod error;
pub mod event;
pub mod loader;
pub mod queue;
pub mod traffic;


pub use error::{ScriptError, ScriptResult};
pub use event::Event;
pub use loader::{load_script_csv, load_script_reader};
pub use queue::EventQueue;
pub use traffic::TrafficGenerator;
