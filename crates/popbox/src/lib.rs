use thiserror::Error;

pub mod config;
pub mod controller;
pub mod direction;
pub mod dom;
pub mod geometry;
pub mod placement;


pub use config::{AnchorAttributes, PopboxConfig};
pub use controller::{Controller, InteractionMode, Trigger, VisibilityState};
pub use direction::{Direction, DirectionPreference, EdgeTag};
pub use dom::{unbound_anchors, DomAdapter, EventKind, FloatingContent, Input, PopboxEvent, Propagation, Target, TimerId};
pub use geometry::{Rect, Size, Viewport};
pub use placement::{compute_position, Offset, Offsets, Placement};

#[derive(Error, Debug)]
pub enum PopboxError {
    #[error("Unknown direction: {0}")]
    UnknownDirection(String),
    #[error("Unable to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Template not found: {0}")]
    TemplateNotFound(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub type PopboxResult<T> = Result<T, PopboxError>;
