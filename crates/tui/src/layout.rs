//! Centralized layout measurements for the TUI.

use ratatui::layout::Rect;

/// Rows and columns reserved around the viewport.
pub const MARGIN: u16 = 4;

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of each task card in rows: two border rows, title and assignees.
pub const TASK_CARD_HEIGHT: u16 = 4;

/// The drawable part of the terminal: its size minus [`MARGIN`].
///
/// Screens keep the viewport they were last told about and recompute it on
/// every resize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    /// Usable width in columns.
    pub width: u16,
    /// Usable height in rows.
    pub height: u16,
}

impl Viewport {
    /// Computes the viewport for a terminal of the given size.
    ///
    /// # Examples
    ///
    /// ```
    /// use projboard_tui::layout::Viewport;
    ///
    /// let viewport = Viewport::from_terminal(80, 24);
    /// assert_eq!((viewport.width, viewport.height), (76, 20));
    /// ```
    #[must_use]
    pub const fn from_terminal(width: u16, height: u16) -> Self {
        Self {
            width: width.saturating_sub(MARGIN),
            height: height.saturating_sub(MARGIN),
        }
    }

    /// Returns whether nothing can be drawn.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Centers the viewport inside `area`, clipped to it.
    #[must_use]
    pub fn area_within(&self, area: Rect) -> Rect {
        let width = self.width.min(area.width);
        let height = self.height.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}
