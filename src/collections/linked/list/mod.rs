mod iter;
mod linked_list;
mod node;
mod query;


pub use iter::*;
pub use linked_list::*;
pub(crate) use node::*;
