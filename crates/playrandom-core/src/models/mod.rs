//! playrandom data models.
//!
//! One mutable collection, two immutable configuration values.

pub mod collection;
pub mod extensions;
pub mod player;

pub use collection::PathCollection;
pub use extensions::ExtensionSet;
pub use player::PlayerSpec;
