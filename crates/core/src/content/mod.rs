pub mod defaults;
pub mod model;
pub mod slug;
pub mod validate;
