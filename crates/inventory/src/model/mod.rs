//! Pure data types: the persisted [`Product`] record and the labels derived from or filtered on it.

pub mod category;
pub mod product;

pub use category::*;
pub use product::*;
