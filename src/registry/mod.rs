pub mod named_registry;

pub use named_registry::NamedRegistry;
