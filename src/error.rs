//! Error definitions shared across library modules.
//! Resource exhaustion (pool empty, queue full) is deliberately *not* an
//! error here: those paths are modelled with `Option` and handle-returning
//! results because overload is normal behavior. The types below cover the
//! failures that indicate corrupted ownership tracking and must stop the
//! affected task.
use thiserror_no_std::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Ownership violations detected by the slot pool. Any of these means the
/// pool's tracking no longer matches reality; continuing would risk two
/// components sharing one slot, so callers treat them as fatal.
pub enum PoolError {
    /// The released handle refers to a slot the pool does not consider
    /// allocated. Either the handle came from another pool or the free-list
    /// has been corrupted.
    #[error("Slot {index} is not owned by this pool")]
    NotOwned { index: usize },
}
