//! Computes where the floating element goes relative to its anchor.
//!
//! A fixed direction is computed once. `smart` walks [`SMART_CANDIDATES`]
//! and keeps the first candidate that is fully visible, falling back to the
//! last candidate (`down`). The result is then pinned to the left or right
//! viewport edge if it spills over horizontally.
use std::fmt;

use crate::direction::{Direction, DirectionPreference, EdgeTag, SMART_CANDIDATES};
use crate::geometry::{Rect, Size, Viewport};

/// A CSS length for `left`/`right`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    Px(f64),
    Auto,
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(value) => write!(f, "{value}px"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Gap between anchor and floating element. Both values always apply.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offsets {
    pub direction: f64,
    pub anim: f64,
}

impl Offsets {
    pub fn gap(&self) -> f64 {
        self.direction + self.anim
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub left: Offset,
    pub top: f64,
    pub right: Offset,
    pub direction: Direction,
    pub edge: Option<EdgeTag>,
}

impl Placement {
    /// Direction class followed by the edge tag, if any.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes: Vec<&'static str> = vec![self.direction.into()];
        if let Some(edge) = self.edge {
            classes.push(edge.into());
        }
        classes
    }
}

/// Returns the (left, top) of the floating element for one direction.
fn geometry(direction: Direction, anchor: &Rect, floating: &Size, gap: f64) -> (f64, f64) {
    let center_x = anchor.left + anchor.width / 2.0 - floating.width / 2.0;
    let center_y = anchor.top + anchor.height / 2.0 - floating.height / 2.0;
    let above = anchor.top - floating.height - gap;

    match direction {
        Direction::Down => (center_x, anchor.top + anchor.height + gap),
        Direction::Up => (center_x, above),
        Direction::Left => (anchor.left - floating.width - gap, center_y),
        Direction::Right => (anchor.left + anchor.width + gap, center_y),
        Direction::LeftUp => (anchor.left - floating.width / 2.0, above),
        Direction::RightUp => (anchor.left + anchor.width - floating.width / 2.0, above),
    }
}

fn smart_geometry(
    anchor: &Rect,
    floating: &Size,
    viewport: &Viewport,
    gap: f64,
) -> (Direction, f64, f64) {
    let mut last = (Direction::Down, 0.0, 0.0);
    for candidate in SMART_CANDIDATES {
        let (left, top) = geometry(candidate, anchor, floating, gap);
        last = (candidate, left, top);

        let rect = Rect::new(left, top, floating.width, floating.height);
        if viewport.contains(&rect) {
            break;
        }
    }

    last
}

pub fn compute_position(
    anchor: &Rect,
    floating: &Size,
    preference: DirectionPreference,
    viewport: &Viewport,
    offsets: &Offsets,
) -> Placement {
    let gap = offsets.gap();
    let (direction, left, top) = match preference {
        DirectionPreference::Fixed(direction) => {
            let (left, top) = geometry(direction, anchor, floating, gap);
            (direction, left, top)
        }
        DirectionPreference::Smart => smart_geometry(anchor, floating, viewport, gap),
    };

    if viewport.width - (left + floating.width) < 0.0 {
        Placement {
            left: Offset::Auto,
            top,
            right: Offset::Px(0.0),
            direction,
            edge: Some(EdgeTag::RightEdge),
        }
    } else if left < 0.0 {
        Placement {
            left: Offset::Px(0.0),
            top,
            right: Offset::Auto,
            direction,
            edge: Some(EdgeTag::LeftEdge),
        }
    } else {
        Placement {
            left: Offset::Px(left),
            top,
            right: Offset::Auto,
            direction,
            edge: None,
        }
    }
}
