//! Allocation-free infrastructure shared by the pipeline tasks: the slot
//! pool, the bounded handle queue, and the bounded-wait helper. Nothing in
//! this module touches hardware.
pub mod deadline;
pub mod pool;
pub mod queue;
