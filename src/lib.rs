//! A generic singly-linked list carrying a LINQ-style query surface.
//!
//! # Purpose
//! This crate grew out of a personal core library that I reuse across unrelated projects. The
//! original carried a dynamically-typed list that exposed its whole query algebra through a table
//! of function pointers; this rewrite keeps the operation surface but moves the polymorphism to
//! compile time: [`List<T>`](collections::linked::List) is generic over its element type and every
//! predicate, comparer and selector is an ordinary closure supplied at the call site.
//!
//! # Elements and ownership
//! The list owns its nodes and nothing else. If you want the original's "list of references over
//! caller-owned data" discipline, instantiate `List<&E>` or `List<Rc<E>>` — cloning a reference or
//! an `Rc` never copies the underlying data, so query results are new lists over the same
//! elements. Plain value types work too and behave the way any Rust collection would.
//!
//! # Error Handling
//! Fallible index and range operations come in pairs: a short panicking form (`get`, `insert`,
//! `remove_at`, ...) for the common case where an out-of-range index is a bug, and a
//! `try_`-prefixed form returning a strongly-typed [`Result`] for callers that want to handle it.
//! The error types are plain structs implementing [`Error`](std::error::Error), aggregated into an
//! enum for convenience. Reductions over an empty list (`aggregate`, `sum`, `min`, ...) have no
//! identity element to fall back on and panic instead; searches that can legitimately come up
//! empty return a typed not-found error or an `Option<usize>` index.
//!
//! # Complexity
//! The representation is deliberately minimal: a head link, no tail pointer, no cached length.
//! That keeps every invariant local to one `Option` but makes `add`, `count` and anything
//! tail-relative O(n). The per-method complexity table lives on
//! [`List`](collections::linked::List); if appends dominate your workload, collect through
//! [`FromIterator`] or [`Extend`], which walk a tail cursor instead of re-seeking for every
//! element.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
