//! Core types and definitions for the lander enemy simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! configuration records, commands, state snapshots, events, constants,
//! and the capability traits the host engine provides.
//! It has no dependency on any rendering or runtime framework.

pub mod capabilities;
pub mod commands;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
