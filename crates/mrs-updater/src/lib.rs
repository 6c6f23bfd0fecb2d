//! Hot-update coordination for Measure Report Studio.
//!
//! An external update-delivery subsystem stages a replacement of the running
//! application and tells us about it through lifecycle signals. This crate
//! tracks that replacement and applies it once the user agrees.
//!
//! # Overview
//!
//! ```text
//!   Idle ──ReplacementWaiting──▶ UpdateAvailable ──confirm──▶ Updating ──Activated──▶ reload
//! ```
//!
//! - `ReplacementWaiting` carries a [`ReplacementWorker`] handle. The
//!   coordinator acquires it as a [`PendingReplacement`].
//! - Confirming sends exactly one [`WorkerMessage::SkipWaiting`] to that
//!   handle and waits for its `Activated` state.
//! - `Activated` releases the handle and asks the host for one full reload.
//!   There is no way back to `Idle`: the reload restarts the process.
//! - Hiding the prompt never changes the state machine.
//!
//! If `Activated` never arrives the coordinator stays in `Updating`. There is
//! no timeout.
//!
//! # Example
//!
//! ```ignore
//! use mrs_updater::{UpdateCoordinator, UpdateCommand, UpdateSignal, WorkerState};
//!
//! let mut updates = UpdateCoordinator::new();
//! updates.handle_signal(UpdateSignal::ReplacementWaiting(Box::new(worker)));
//! if let Some(UpdateCommand::PostSkipWaiting) = updates.confirm() {
//!     updates.send_skip_waiting()?;
//! }
//! ```

#![warn(clippy::all)]

pub mod coordinator;
pub mod error;
pub mod worker;

pub use coordinator::{UpdateCommand, UpdateCoordinator, UpdateSignal, UpdateState};
pub use error::{Result, UpdateError};
pub use worker::{PendingReplacement, ReplacementWorker, WorkerId, WorkerMessage, WorkerState};
