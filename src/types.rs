//! Serializer implementations for the wire types.

pub mod arrays;
pub mod matrices;
pub mod primitives;
pub mod strings;
