//! Hardware abstraction seams. The pipeline only ever talks to the board
//! through these traits; firmware provides the peripheral-backed
//! implementations, tests provide in-memory doubles.
pub mod can_bus;
pub mod indicator;
pub mod serial;
pub mod timer;
