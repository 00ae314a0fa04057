//! switchgear-controller — the epoch decision loop.
//!
//! The `SchedulingController` ties the subsystem together: at each
//! epoch boundary it aggregates the simulator's utilization counters,
//! consults the installed switching policy against the profile store,
//! and applies the resulting algorithm switch; once the epoch
//! completes, the observed `(quality, runtime)` outcome is folded back
//! into the store.
//!
//! # Architecture
//!
//! ```text
//! SchedulingController
//!   ├── Box<dyn SwitchingPolicy>   (installed at construction)
//!   ├── ProfileStore               (shared running statistics)
//!   ├── active algorithm           (None before the first decision)
//!   └── SwitchCallback             (reconfigures the simulator)
//! ```

pub mod controller;
pub mod error;

pub use controller::{
    EpochDecision, SchedulingController, SimulatorEvent, SwitchCallback,
};
pub use error::{ControllerError, ControllerResult};
