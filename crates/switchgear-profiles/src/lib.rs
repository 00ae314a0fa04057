//! switchgear-profiles — running performance history per algorithm.
//!
//! Every candidate algorithm gets a [`SchedulerProfile`]: the running
//! average of observed solution quality and runtime plus an invocation
//! count. The [`ProfileStore`] holds one profile per algorithm for the
//! lifetime of a run; handles are cheap to clone and safe to share
//! between the decision loop and asynchronous observation reporting.

pub mod profile;
pub mod store;

pub use profile::SchedulerProfile;
pub use store::{ProfileSet, ProfileStore};
