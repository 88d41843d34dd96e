//! `canbridge` library: a bounded-memory, bounded-latency frame pipeline
//! bridging a CAN bus to a host-visible serial stream in a `no_std`
//! environment. The crate exposes the infrastructure primitives (slot pool,
//! bounded handle queue, deadline helper) and the pipeline tasks (receiver,
//! consumer, activity notifier, heartbeat, liveness blinker) behind
//! hardware-abstraction traits.
#![no_std]

// Host-side unit tests run on std (tokio drives the async paths).
#[cfg(test)]
extern crate std;
//==================================================================================
/// Pipeline tasks, hardware traits, frame and record types, timing constants.
pub mod bridge;
/// Fatal error definitions (pool ownership violations).
pub mod error;
/// Allocation-free building blocks: slot pool, bounded queue, bounded waits.
pub mod infra;
//==================================================================================
