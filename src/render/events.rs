/// Events emitted by the app loop that renderers can handle
#[derive(Debug, Clone)]
pub enum WheelEvent {
    /// A spin was armed and the delay started
    SpinStarted,

    /// The spin settled on a category
    SpinSettled,

    /// A tile was drawn
    TileDrawn,

    /// The six-tile limit was reached and the wheel unlocked
    LimitReached,
}

/// User input commands of the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Spin,
    Draw,
    Quit,
}
