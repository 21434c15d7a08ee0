//! Collection types. Currently revolves around the linked [`List`](linked::List) and its query
//! surface.

pub mod linked;
