//! Core projection primitives

pub mod projection;
