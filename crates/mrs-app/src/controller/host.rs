//! Host window integration.

/// Operations the controller asks of the window it runs in.
pub trait AppHost: Send {
    /// Restart the application so the activated version takes over.
    fn reload(&mut self);

    /// Enter or leave fullscreen.
    fn set_fullscreen(&mut self, fullscreen: bool);
}
