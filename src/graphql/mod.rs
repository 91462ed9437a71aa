pub mod context;
pub mod dispatcher;
pub mod mutations;
pub mod nullable;
pub mod queries;
pub mod schema;
pub mod types;

pub use context::*;
pub use dispatcher::*;
pub use schema::*;
