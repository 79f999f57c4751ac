//! Integration tests for the assistant session.
//!
//! Every test drives the real intent table and dispatcher through scripted
//! adapters, so no microphone, speech engine or network is needed.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod config_roundtrip;
mod dispatcher_scenarios;
mod helpers;
mod knowledge_lookups;
