//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use columnar_bench::builder::ColumnarBuilder;
use columnar_bench::error::FinishError;
use columnar_bench::profiler::SamplingProfiler;
use std::cell::RefCell;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// RecordingProfiler
// =============================================================================

/// A profiler event, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionEvent {
    Begin(&'static str),
    End,
}

/// Profiler that records every begin/end call.
#[derive(Debug, Default)]
pub struct RecordingProfiler {
    events: RefCell<Vec<RegionEvent>>,
}

impl RecordingProfiler {
    pub fn events(&self) -> Vec<RegionEvent> {
        self.events.borrow().clone()
    }

    /// Returns `true` if every begin is matched by a later end, innermost first.
    pub fn is_balanced(&self) -> bool {
        let mut depth: usize = 0;
        for event in self.events.borrow().iter() {
            match event {
                RegionEvent::Begin(_) => depth += 1,
                RegionEvent::End => match depth.checked_sub(1) {
                    Some(next) => depth = next,
                    None => return false,
                },
            }
        }
        depth == 0
    }
}

impl SamplingProfiler for RecordingProfiler {
    fn begin_region(&self, name: &'static str) {
        self.events.borrow_mut().push(RegionEvent::Begin(name));
    }

    fn end_region(&self) {
        self.events.borrow_mut().push(RegionEvent::End);
    }
}

// =============================================================================
// TrackedBuilder
// =============================================================================

static NEXT_BUILDER_ID: AtomicU64 = AtomicU64::new(0);

/// Finished output of a [`TrackedBuilder`]: its values and the builder that made them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedArray {
    pub builder_id: u64,
    pub values: Vec<i64>,
}

/// Vec-backed builder whose every instance carries a unique id.
#[derive(Debug)]
pub struct TrackedBuilder {
    id: u64,
    values: Vec<i64>,
}

impl Default for TrackedBuilder {
    fn default() -> Self {
        Self {
            id: NEXT_BUILDER_ID.fetch_add(1, Ordering::Relaxed),
            values: Vec::new(),
        }
    }
}

impl TrackedBuilder {
    pub const fn id(&self) -> u64 {
        self.id
    }
}

impl ColumnarBuilder for TrackedBuilder {
    type Array = TrackedArray;

    fn resize(&mut self, capacity: usize) {
        self.values.reserve(capacity.saturating_sub(self.values.len()));
    }

    fn append_bulk(&mut self, values: &[i64]) {
        self.values.extend_from_slice(values);
    }

    fn append_empty(&mut self, count: usize) {
        self.values.resize(self.values.len() + count, 0);
    }

    fn values_mut(&mut self) -> &mut [i64] {
        &mut self.values
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn finish(&mut self) -> Result<TrackedArray, FinishError> {
        Ok(TrackedArray {
            builder_id: self.id,
            values: std::mem::take(&mut self.values),
        })
    }
}

// =============================================================================
// FailingBuilder
// =============================================================================

/// Builder whose finish always reports null slots.
#[derive(Debug, Default)]
pub struct FailingBuilder {
    values: Vec<i64>,
}

impl ColumnarBuilder for FailingBuilder {
    type Array = Vec<i64>;

    fn resize(&mut self, capacity: usize) {
        self.values.reserve(capacity);
    }

    fn append_bulk(&mut self, values: &[i64]) {
        self.values.extend_from_slice(values);
    }

    fn append_empty(&mut self, count: usize) {
        self.values.resize(self.values.len() + count, 0);
    }

    fn values_mut(&mut self) -> &mut [i64] {
        &mut self.values
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn finish(&mut self) -> Result<Vec<i64>, FinishError> {
        let len = self.values.len();
        self.values.clear();
        Err(FinishError::UnexpectedNulls { nulls: len, len })
    }
}
