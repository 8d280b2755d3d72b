//! `lift-sim` — the dispatcher and its tick driver.
//!
//! # Tick
//!
//! ```text
//! Dispatcher::tick():
//!   ① Retry:     unassigned hall calls go back through the policy
//!                (cars may have been restored since the last tick).
//!   ② Advance:   every car moves at most one floor, ascending CarId
//!                (parallel with the `parallel` feature; join before ③).
//!   ③ Reconcile: each arrival resolves the arriving car's calls at that
//!                floor and removes them from the ledger.
//! ```
//!
//! Submissions (`submit_hall_call`, `submit_car_call`, `cancel_hall_call`,
//! maintenance toggles) happen between ticks.  They validate every argument
//! before touching any state, so a rejected call leaves nothing behind.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the advance phase on Rayon's thread pool.         |
//! | `fx-hash`  | FxHash for the hall-call ownership index.              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{BuildingConfig, HallDirection};
//! use lift_policy::NearestEligible;
//! use lift_sim::Dispatcher;
//!
//! let mut dispatcher = Dispatcher::new(BuildingConfig::new(10, 3), NearestEligible)?;
//! dispatcher.submit_hall_call(5, HallDirection::Up)?;
//! let report = dispatcher.tick();
//! println!("{}", dispatcher.status());
//! ```

pub mod builder;
pub mod dispatcher;
pub mod error;
pub mod ledger;
pub mod observer;
pub mod report;
pub mod shared;
pub mod sim;
pub mod status;


pub use builder::DispatcherBuilder;
pub use dispatcher::Dispatcher;
pub use error::{SimError, SimResult};
pub use ledger::CallLedger;
pub use observer::{NoopObserver, SimObserver};
pub use report::{Resolution, Submission, TickReport};
pub use shared::SharedDispatcher;
pub use sim::Sim;
pub use status::{CarStatus, FleetStatus};
