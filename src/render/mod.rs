pub mod events;

#[cfg(feature = "cli")]
pub mod term_renderer;

pub use events::{Command, WheelEvent};

use crate::wheel::WheelView;

/// Core trait for presenting the wheel and collecting user input
pub trait Renderer {
    type Error;

    /// Initialize the renderer with the static category ring
    fn initialize(&mut self, category_names: &[String]) -> Result<(), Self::Error>;

    /// Handle an app event during the session
    fn handle_event(&mut self, event: &WheelEvent) -> Result<(), Self::Error>;

    /// Present the current view model
    fn update(&mut self, view: &WheelView) -> Result<(), Self::Error> {
        let _ = view;
        Ok(())
    }

    /// Collect the next user command (for interactive renderers)
    fn poll_command(&mut self) -> Option<Command> {
        None
    }

    /// Check if the user wants to quit (for interactive renderers)
    fn should_quit(&mut self) -> bool {
        false
    }

    /// Finalize rendering with the last view (e.g. print a summary)
    fn finalize(&mut self, view: &WheelView) -> Result<(), Self::Error>;
}
