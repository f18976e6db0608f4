//! The seam between the widget logic and the page it runs in.
use strum_macros::{AsRefStr, Display};

use crate::geometry::{Rect, Size, Viewport};
use crate::placement::Placement;
use crate::PopboxResult;

#[derive(AsRefStr, Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Target {
    Anchor,
    Floating,
}

#[derive(AsRefStr, Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum EventKind {
    MouseEnter,
    MouseLeave,
    Click,
    TransitionEnd,
}

/// Lifecycle notifications dispatched on the anchor.
#[derive(AsRefStr, Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum PopboxEvent {
    #[strum(serialize = "show")]
    Show,
    #[strum(serialize = "hide")]
    Hide,
    #[strum(serialize = "popbox-click")]
    Click,
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TimerId(pub u64);

/// Everything the host feeds back into the controller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Input {
    AnchorEnter,
    AnchorLeave,
    AnchorClick,
    FloatingEnter,
    FloatingLeave,
    FloatingClick,
    HideTimerElapsed(TimerId),
    TransitionEnd,
}

impl Input {
    /// Maps a bound listener to the input it produces. `None` for
    /// combinations the controller never binds.
    pub fn from_event(target: Target, kind: EventKind) -> Option<Self> {
        match (target, kind) {
            (Target::Anchor, EventKind::MouseEnter) => Some(Self::AnchorEnter),
            (Target::Anchor, EventKind::MouseLeave) => Some(Self::AnchorLeave),
            (Target::Anchor, EventKind::Click) => Some(Self::AnchorClick),
            (Target::Floating, EventKind::MouseEnter) => Some(Self::FloatingEnter),
            (Target::Floating, EventKind::MouseLeave) => Some(Self::FloatingLeave),
            (Target::Floating, EventKind::Click) => Some(Self::FloatingClick),
            (Target::Floating, EventKind::TransitionEnd) => Some(Self::TransitionEnd),
            (Target::Anchor, EventKind::TransitionEnd) => None,
        }
    }
}

/// Whether the DOM event that produced an input should keep bubbling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Propagation {
    Continue,
    Stop,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FloatingContent {
    /// Markup copied from the element matching this selector.
    Template(String),
    Text { title: Option<String>, text: String },
}

/// DOM operations used by [`crate::Controller`]. One adapter serves one
/// anchor and at most one floating element.
///
/// Listeners and timers are disposal handles: dropping a `Listener` unbinds
/// it and dropping a `Timer` cancels it.
pub trait DomAdapter {
    type Listener;
    type Timer;

    /// Anchor box in document coordinates.
    fn anchor_rect(&self) -> Rect;
    fn viewport(&self) -> Viewport;

    fn insert_floating(&mut self, container_class: &str, content: &FloatingContent) -> PopboxResult<()>;
    fn remove_floating(&mut self);
    fn floating_size(&self) -> Size;
    /// Clears previous direction classes, then applies `placement`.
    fn apply_placement(&mut self, placement: &Placement);
    fn set_open(&mut self, open: bool);
    fn set_text(&mut self, text: &str);

    fn listen(&mut self, target: Target, kind: EventKind) -> PopboxResult<Self::Listener>;
    /// Delivers [`Input::HideTimerElapsed`] with `id` after `delay_ms`.
    fn start_timer(&mut self, id: TimerId, delay_ms: u32) -> Self::Timer;
    fn emit(&mut self, event: PopboxEvent);
}

/// Keeps the candidates no existing widget is attached to, in order, so a
/// repeated bootstrap binds each anchor once.
pub fn unbound_anchors<A, B, F>(candidates: impl IntoIterator<Item = A>, bound: &[B], is_same: F) -> Vec<A>
where
    F: Fn(&A, &B) -> bool,
{
    candidates
        .into_iter()
        .filter(|candidate| !bound.iter().any(|existing| is_same(candidate, existing)))
        .collect()
}
