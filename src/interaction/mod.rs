use serde::{Deserialize, Serialize};

use crate::core::{NamedRange, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    Idle,
    /// A click-drag zoom rectangle is being drawn.
    Selecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanDirection {
    Back,
    Forward,
}

/// In-progress drag rectangle in data space (unix milliseconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSelection {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl DragSelection {
    #[must_use]
    pub fn is_zero_width(self) -> bool {
        self.start_ms == self.end_ms
    }

    /// `(min, max)` regardless of drag direction.
    #[must_use]
    pub fn ordered(self) -> (i64, i64) {
        (
            self.start_ms.min(self.end_ms),
            self.start_ms.max(self.end_ms),
        )
    }
}

/// The single undo slot restored by a zoom reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomSnapshot {
    pub viewport: Viewport,
    pub named_range: Option<NamedRange>,
}

/// Transient gesture state. Lives only between pointer down and up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    drag: Option<DragSelection>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        if self.drag.is_some() {
            InteractionMode::Selecting
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn drag_selection(self) -> Option<DragSelection> {
        self.drag
    }

    pub fn on_drag_start(&mut self, time_ms: i64) {
        self.drag = Some(DragSelection {
            start_ms: time_ms,
            end_ms: time_ms,
        });
    }

    /// Moves the free end of the drag. Returns `false` when no drag is active.
    pub fn on_drag_move(&mut self, time_ms: i64) -> bool {
        match self.drag.as_mut() {
            Some(drag) => {
                drag.end_ms = time_ms;
                true
            }
            None => false,
        }
    }

    /// Ends the gesture and hands back the final rectangle.
    pub fn take_drag(&mut self) -> Option<DragSelection> {
        self.drag.take()
    }

    pub fn clear_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }
}
