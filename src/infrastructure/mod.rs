pub mod layout;
pub mod selection_store;
pub mod services;

pub use layout::*;
pub use selection_store::*;
pub use services::*;
