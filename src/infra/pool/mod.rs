//! Fixed-capacity slot pool for received frames. All storage is reserved at
//! construction; `acquire` never blocks and never allocates, so the
//! interrupt-adjacent receive path cannot stall on memory.
//!
//! Ownership of a slot is carried by a [`SlotHandle`], a move-only token
//! minted exclusively by [`FramePool::acquire`]. Reading a slot requires a
//! reference to the handle and releasing consumes it, so a slot cannot be
//! inspected after it has been handed off and cannot be freed twice.
use core::cell::RefCell;

use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

use crate::bridge::frame::CanFrame;
use crate::error::PoolError;

//==================================================================================SLOT_HANDLE
/// Exclusive-ownership token for one pool slot.
///
/// Deliberately neither `Clone` nor `Copy`: the token *is* the ownership.
#[derive(Debug)]
pub struct SlotHandle {
    index: usize,
}

impl SlotHandle {
    /// Position of the slot inside the pool, for diagnostics.
    pub fn index(&self) -> usize {
        self.index
    }
}

//==================================================================================FRAME_POOL
struct PoolState<const N: usize> {
    /// Slot storage. Contents are *not* zeroed on release; the producer
    /// overwrites the whole slot before publishing it.
    slots: [CanFrame; N],
    /// Stack of free slot indices.
    free_list: [usize; N],
    free_top: usize,
    /// Tracks which slots are currently out, to reject foreign handles.
    allocated: [bool; N],
}

/// Pool of `N` reusable frame slots behind a blocking mutex, shared between
/// the receiver and the consumer. Invariant: allocated + free == `N` at
/// every instant.
pub struct FramePool<const N: usize> {
    state: Mutex<CriticalSectionRawMutex, RefCell<PoolState<N>>>,
}

impl<const N: usize> FramePool<N> {
    pub fn new() -> Self {
        let state = PoolState {
            slots: core::array::from_fn(|_| CanFrame::zeroed()),
            free_list: core::array::from_fn(|i| i),
            free_top: N,
            allocated: [false; N],
        };
        Self {
            state: Mutex::new(RefCell::new(state)),
        }
    }

    /// Take a free slot, or `None` when the pool is exhausted. Never waits.
    pub fn acquire(&self) -> Option<SlotHandle> {
        self.state.lock(|cell| {
            let mut state = cell.borrow_mut();
            if state.free_top == 0 {
                return None;
            }
            state.free_top -= 1;
            let index = state.free_list[state.free_top];
            state.allocated[index] = true;
            Some(SlotHandle { index })
        })
    }

    /// Return a slot to the free set, consuming its handle.
    ///
    /// `PoolError::NotOwned` means the handle does not match this pool's
    /// tracking; continuing after that would risk two owners for one slot,
    /// so callers must treat it as fatal.
    pub fn release(&self, handle: SlotHandle) -> Result<(), PoolError> {
        let index = handle.index;
        self.state.lock(|cell| {
            let mut state = cell.borrow_mut();
            if index >= N || !state.allocated[index] {
                return Err(PoolError::NotOwned { index });
            }
            state.allocated[index] = false;
            let top = state.free_top;
            state.free_list[top] = index;
            state.free_top += 1;
            Ok(())
        })
    }

    /// Overwrite the slot behind `handle` with `frame`.
    pub fn fill(&self, handle: &SlotHandle, frame: &CanFrame) {
        self.state.lock(|cell| {
            cell.borrow_mut().slots[handle.index] = frame.clone();
        });
    }

    /// Copy the frame currently stored in the slot behind `handle`.
    pub fn frame(&self, handle: &SlotHandle) -> CanFrame {
        self.state.lock(|cell| cell.borrow().slots[handle.index].clone())
    }

    /// Number of slots currently free.
    pub fn free(&self) -> usize {
        self.state.lock(|cell| cell.borrow().free_top)
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for FramePool<N> {
    fn default() -> Self {
        Self::new()
    }
}
