//! Heap headroom gauge

use embedded_alloc::LlffHeap;
use wristlink_core::traits::MemoryProbe;

/// Reports free space on the global linked-list heap
///
/// The first-fit allocator merges neighbouring free blocks on every
/// deallocation, so there is nothing to compact before sampling.
#[derive(Clone, Copy)]
pub struct HeapGauge<'a> {
    heap: &'a LlffHeap,
}

impl<'a> HeapGauge<'a> {
    /// Watch `heap`, normally the `#[global_allocator]` static
    pub fn new(heap: &'a LlffHeap) -> Self {
        Self { heap }
    }

    /// Bytes currently allocated
    pub fn used_bytes(&self) -> u32 {
        saturate(self.heap.used())
    }
}

impl MemoryProbe for HeapGauge<'_> {
    fn free_bytes(&mut self) -> u32 {
        saturate(self.heap.free())
    }
}

fn saturate(bytes: usize) -> u32 {
    u32::try_from(bytes).unwrap_or(u32::MAX)
}
