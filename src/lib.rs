//! ethpanel - a terminal panel for an Ethereum wallet provider.
//!
//! This library provides:
//! - The panel view state and its two actions (connect, transfer)
//! - The wallet provider boundary and its JSON-RPC implementation
//! - Network presets and native-currency unit handling

pub mod config;
pub mod domain;
pub mod infra;
