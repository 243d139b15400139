//! Picture record layered on [`TlvBox`](crate::TlvBox).
//!
//! Interprets the tags of [`tags`] as scalar fields, a rectangle list and a
//! list of nested face recognition records.

mod builder;
mod dump;
mod rect;
mod view;

pub mod tags;

pub use builder::RecordBuilder;
pub use rect::Rect;
pub use view::RecordView;
