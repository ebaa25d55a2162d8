//! Cooperative scheduling of grid searches.
//!
//! A [`Simulation`] owns the [`Grid`](pathviz_core::Grid), the strategy
//! selection and every run in flight. Drivers feed it [`Command`]s and call
//! [`Simulation::tick`] to advance runs one suspension point at a time;
//! accepted cells arrive at a [`VisitSink`] as [`Visit`] events.
//!
//! ```
//! use pathviz_core::CellId;
//! use pathviz_sim::{NoPacing, SimConfig, Simulation, Visit};
//!
//! let mut sim = Simulation::new(&SimConfig::default(), NoPacing).unwrap();
//! let run = sim.start_run(CellId(0)).unwrap();
//! let mut visits: Vec<Visit> = Vec::new();
//! sim.run_until_idle(&mut visits);
//! assert_eq!(visits.last().map(|v| v.cell), Some(CellId(110)));
//! assert!(sim.report(run).is_some());
//! ```

mod command;
mod config;
mod controller;
mod pacing;
mod simulation;
mod sink;

pub use command::Command;
pub use config::{ConfigError, SimConfig};
pub use controller::RunController;
pub use pacing::{FramePacer, NoPacing, Pacer};
pub use simulation::{RunReport, Simulation};
pub use sink::{Discard, FnSink, Visit, VisitSink};
