//! Item kinds, anchors and note drafts

pub mod anchor;
pub mod draft;
pub mod kind;

pub use anchor::{AnchorId, Clock, FixedClock, SystemClock};
pub use draft::{format_title, sanitize_title, NoteDraft, UNTITLED};
pub use kind::ItemKind;
