//! Plugin tests over the serialized request/response envelope.

pub mod tests_wire;
