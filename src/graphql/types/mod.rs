pub mod member_type;
pub mod post;
pub mod profile;
pub mod user;

pub use member_type::*;
pub use post::*;
pub use profile::*;
pub use user::*;
