//! `evac-sim` — the tick loop of the evacuation cellular automaton.
//!
//! # Tick loop
//!
//! ```text
//! step():
//!   ① Clear    — reset the `next` occupancy buffer.
//!   ② Shuffle  — Fisher–Yates over the active pedestrians (SimRng).
//!   ③ Decide   — for each pedestrian in shuffled order:
//!                  on an exit        → stamp exit tick, move to evacuated
//!                  model → Some(c)   → claim c in `next`, or stay on conflict
//!                  model → None      → stay
//!   ④ Swap     — `next` becomes `current`; the clock advances.
//! ```
//!
//! Decisions read the `current` buffer only, so the order in which agents
//! are processed affects conflicts but never what a pedestrian sees.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use evac_behavior::FloorFieldModel;
//! use evac_core::GridScenario;
//! use evac_sim::{AutomatonBuilder, AutomatonConfig, NoopObserver};
//!
//! let scenario: GridScenario = "#####\n#...E\n#####".parse()?;
//! let mut automaton = AutomatonBuilder::new(AutomatonConfig::default(), scenario, FloorFieldModel)
//!     .build()?;
//! automaton.add_pedestrian(1, 1, Default::default())?;
//! automaton.run(&mut NoopObserver)?;
//! println!("{}", automaton.statistics());
//! ```

pub mod automaton;
pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod occupancy;
pub mod report;


pub use automaton::Automaton;
pub use builder::AutomatonBuilder;
pub use config::AutomatonConfig;
pub use error::{SimError, SimResult};
pub use observer::{AutomatonObserver, NoopObserver};
pub use occupancy::{Claims, Occupancy};
pub use report::TickReport;
