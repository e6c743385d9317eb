//! Flame chart viewport aggregate: the controller core, its value objects and
//! the host-facing traits it is wired through.

pub mod drag;
pub mod entities;
pub mod repositories;
pub mod value_objects;

pub use drag::*;
pub use entities::*;
pub use repositories::*;
pub use value_objects::*;
