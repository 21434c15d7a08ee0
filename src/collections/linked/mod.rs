//! Linked collection types. Primarily revolves around [`List`] and its query operations.

pub mod list;

#[doc(inline)]
pub use list::List;
