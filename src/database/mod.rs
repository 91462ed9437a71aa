pub mod entities;
pub mod filter;
pub mod seed_data;
pub mod store;

pub use filter::{Filter, Scalar};
pub use store::{Collection, ListEdit, Store};
