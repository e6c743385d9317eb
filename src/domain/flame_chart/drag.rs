use super::value_objects::CssPixels;

/// Pointer drag state of the panel.
///
/// The anchor is the pointer position of the most recent move event (or of
/// the pointer-down that started the session), so deltas are always taken
/// from the previous event rather than from the drag start.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging { anchor_x: CssPixels, anchor_y: CssPixels },
}

impl DragSession {
    pub fn start(x: CssPixels, y: CssPixels) -> Self {
        DragSession::Dragging { anchor_x: x, anchor_y: y }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    pub fn anchor(&self) -> Option<(CssPixels, CssPixels)> {
        match *self {
            DragSession::Dragging { anchor_x, anchor_y } => Some((anchor_x, anchor_y)),
            DragSession::Idle => None,
        }
    }

    /// Move the anchor to `(x, y)` and return the delta from the previous
    /// anchor. Idle sessions ignore moves.
    pub fn advance(&mut self, x: CssPixels, y: CssPixels) -> Option<(CssPixels, CssPixels)> {
        let (anchor_x, anchor_y) = self.anchor()?;
        *self = DragSession::start(x, y);
        Some((x - anchor_x, y - anchor_y))
    }
}
