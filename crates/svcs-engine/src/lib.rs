//! svcs Engine - Orchestration layer
//!
//! Provides the operations of the snapshot engine, coordinating the
//! fingerprint engine in `svcs-core` with the durable state in
//! `svcs-store`.

pub mod commands;
