//! Public library API for inspecting .NET remoting binary serialization streams.

/// Record stream decoding, class metadata, array descriptors, and call/return payloads.
pub mod nrbf;
