pub use simvar_catalog as catalog;
pub use simvar_node as node;
pub use simvar_space as space;
pub use simvar_types as types;
