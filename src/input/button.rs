//! Input sources that carry their own tool configuration.

use std::fmt;

/// One of the six override contexts that hold a private tool snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonSlot {
    /// The eraser end of a stylus.
    Eraser,
    Stylus1,
    Stylus2,
    MouseMiddle,
    MouseRight,
    /// Finger input on a touch screen.
    Touch,
}

impl ButtonSlot {
    pub const COUNT: usize = 6;

    pub const ALL: [ButtonSlot; Self::COUNT] = [
        ButtonSlot::Eraser,
        ButtonSlot::Stylus1,
        ButtonSlot::Stylus2,
        ButtonSlot::MouseMiddle,
        ButtonSlot::MouseRight,
        ButtonSlot::Touch,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            ButtonSlot::Eraser => "eraserButton",
            ButtonSlot::Stylus1 => "stylusButton1",
            ButtonSlot::Stylus2 => "stylusButton2",
            ButtonSlot::MouseMiddle => "mouseMiddleButton",
            ButtonSlot::MouseRight => "mouseRightButton",
            ButtonSlot::Touch => "touchDrawing",
        }
    }
}

impl fmt::Display for ButtonSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
