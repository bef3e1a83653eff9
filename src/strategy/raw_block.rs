#![allow(unsafe_code)]
//! Manually allocated block of `i64`.
//!
//! # Safety
//!
//! [`RawBlock`] owns a single allocation obtained from the global allocator.
//! The following invariants are maintained:
//! - `ptr` is either dangling (zero-sized layout) or was returned by `alloc`
//!   with exactly `layout`
//! - `layout` describes `len` elements of `i64`
//! - the allocation is released in `Drop`, and only there
//! - [`RawSequence`] is only produced after every slot has been written

use std::alloc::{Layout, alloc, dealloc};
use std::mem::MaybeUninit;
use std::ops::Deref;
use std::ptr::NonNull;
use std::slice;

use super::{ConstructionStrategy, STRIDE};
use crate::error::TrialError;

/// An uninitialized block of `len` `i64` slots from the global allocator.
///
/// The block is freed when dropped, on every exit path.
#[derive(Debug)]
pub struct RawBlock {
    ptr: NonNull<i64>,
    layout: Layout,
    len: usize,
}

impl RawBlock {
    /// Allocates room for `len` elements.
    ///
    /// # Errors
    ///
    /// Returns [`TrialError::Layout`] if `len * 8` bytes overflows the maximum
    /// layout size, and [`TrialError::Allocation`] if the allocator returns null.
    pub fn allocate(len: usize) -> Result<Self, TrialError> {
        let layout = Layout::array::<i64>(len).map_err(|_| TrialError::Layout { len })?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                layout,
                len,
            });
        }

        // SAFETY: layout has a non-zero size (checked above).
        let ptr = unsafe { alloc(layout) }.cast::<i64>();
        let ptr = NonNull::new(ptr).ok_or(TrialError::Allocation {
            bytes: layout.size(),
        })?;

        Ok(Self { ptr, layout, len })
    }

    /// Returns the number of slots.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the block has no slots.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the slots for writing.
    #[inline]
    pub fn slots_mut(&mut self) -> &mut [MaybeUninit<i64>] {
        // SAFETY: ptr is valid for len elements (or dangling with len == 0),
        // MaybeUninit<i64> has the layout of i64, and &mut self guarantees
        // exclusive access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr().cast(), self.len) }
    }

    /// Converts the block into an initialized sequence.
    ///
    /// # Safety
    ///
    /// Every slot returned by [`slots_mut`](Self::slots_mut) must have been
    /// written.
    #[inline]
    #[must_use]
    pub const unsafe fn assume_init(self) -> RawSequence {
        RawSequence { block: self }
    }
}

impl Drop for RawBlock {
    fn drop(&mut self) {
        if self.layout.size() != 0 {
            // SAFETY: ptr was returned by alloc with this exact layout and has
            // not been freed.
            unsafe { dealloc(self.ptr.as_ptr().cast(), self.layout) };
        }
    }
}

/// A fully written [`RawBlock`], readable as `&[i64]`.
#[derive(Debug)]
pub struct RawSequence {
    block: RawBlock,
}

impl Deref for RawSequence {
    type Target = [i64];

    #[inline]
    fn deref(&self) -> &[i64] {
        // SAFETY: RawSequence is only built through assume_init, whose caller
        // guarantees every slot was written.
        unsafe { slice::from_raw_parts(self.block.ptr.as_ptr(), self.block.len) }
    }
}

// =============================================================================
// RawBlockUnrolled
// =============================================================================

/// Allocates a raw block per repetition and writes `trial + (i % 8)` with an
/// unrolled stride-8 loop.
///
/// This is the floor of the comparison: no abstraction between the loop and
/// the memory.
///
/// # Examples
///
/// ```rust
/// use columnar_bench::strategy::{ConstructionStrategy, RawBlockUnrolled};
///
/// let sequence = RawBlockUnrolled.construct(10, 100).unwrap();
/// assert_eq!(&sequence[..], &[100, 101, 102, 103, 104, 105, 106, 107, 100, 101]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RawBlockUnrolled;

impl ConstructionStrategy for RawBlockUnrolled {
    const NAME: &'static str = "raw_block_unrolled";

    type Output = RawSequence;

    #[allow(clippy::cast_possible_wrap)]
    fn construct(&mut self, size: usize, trial: u64) -> Result<RawSequence, TrialError> {
        let mut block = RawBlock::allocate(size)?;
        let base = trial as i64;

        let mut chunks = block.slots_mut().chunks_exact_mut(STRIDE);
        for chunk in &mut chunks {
            chunk[0] = MaybeUninit::new(base);
            chunk[1] = MaybeUninit::new(base.wrapping_add(1));
            chunk[2] = MaybeUninit::new(base.wrapping_add(2));
            chunk[3] = MaybeUninit::new(base.wrapping_add(3));
            chunk[4] = MaybeUninit::new(base.wrapping_add(4));
            chunk[5] = MaybeUninit::new(base.wrapping_add(5));
            chunk[6] = MaybeUninit::new(base.wrapping_add(6));
            chunk[7] = MaybeUninit::new(base.wrapping_add(7));
        }
        for (offset, slot) in chunks.into_remainder().iter_mut().enumerate() {
            *slot = MaybeUninit::new(base.wrapping_add(offset as i64));
        }

        // SAFETY: the chunk loop and the remainder loop together cover every slot.
        Ok(unsafe { block.assume_init() })
    }
}
