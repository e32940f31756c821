use skwircle_engine::coords::Vec2;

/// Input events routed through the widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer position for this frame (fired every frame).
    Hover { pos: Vec2 },
    /// Primary button pressed and released at `pos`.
    Click { pos: Vec2 },
}

impl UiEvent {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        match *self {
            UiEvent::Hover { pos } | UiEvent::Click { pos } => pos,
        }
    }
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing to siblings / parents.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
