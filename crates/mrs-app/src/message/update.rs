//! Update messages.

use mrs_updater::UpdateSignal;

/// Messages for the update notification.
#[derive(Debug)]
pub enum UpdateMessage {
    /// Lifecycle signal from the update-delivery subsystem
    Signal(UpdateSignal),

    /// The user asked to apply the update
    Confirm,

    /// The user closed the notification
    Dismiss,
}
