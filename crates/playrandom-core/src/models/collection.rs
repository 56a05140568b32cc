//! PathCollection — the one ordered list of playable paths.
//!
//! Filled by the scanner, permuted by the shuffler, read by the driver.
//! Growth is explicit: when full, capacity doubles (checked) before the
//! push, so N appends cost O(N) copies in total.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::AllocationFailure;

/// Capacity of a fresh collection.
pub const INITIAL_CAPACITY: usize = 16;

/// Growable, index-addressable sequence of owned paths.
#[derive(Debug)]
pub struct PathCollection {
    items: Vec<PathBuf>,
    capacity: usize,
}

impl PathCollection {
    /// Empty collection with [`INITIAL_CAPACITY`] reserved slots.
    pub fn new() -> Result<Self, AllocationFailure> {
        let mut items = Vec::new();
        items
            .try_reserve_exact(INITIAL_CAPACITY)
            .map_err(|_| AllocationFailure::OutOfMemory {
                requested: INITIAL_CAPACITY,
            })?;
        Ok(Self {
            items,
            capacity: INITIAL_CAPACITY,
        })
    }

    /// Copy `path` into the next free slot, doubling capacity first if full.
    pub fn append(&mut self, path: &Path) -> Result<(), AllocationFailure> {
        if self.items.len() == self.capacity {
            self.grow()?;
        }
        let mut copy = reserve_copy(path.as_os_str().len())?;
        copy.push(path.as_os_str());
        self.items.push(PathBuf::from(copy));
        Ok(())
    }

    fn grow(&mut self) -> Result<(), AllocationFailure> {
        let new_capacity = self
            .capacity
            .checked_mul(2)
            .ok_or(AllocationFailure::CapacityOverflow {
                capacity: self.capacity,
            })?;
        self.items
            .try_reserve_exact(new_capacity - self.items.len())
            .map_err(|_| AllocationFailure::OutOfMemory {
                requested: new_capacity,
            })?;
        log::debug!("playrandom: collection grew {} -> {}", self.capacity, new_capacity);
        self.capacity = new_capacity;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity; always `>= len()`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> &Path {
        &self.items[index]
    }

    /// Panics if either index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.items.iter().map(PathBuf::as_path)
    }

    /// Drop every path and the backing store. Returns how many were held.
    pub fn release(self) -> usize {
        let count = self.items.len();
        log::debug!("playrandom: releasing {} paths", count);
        count
    }
}

/// Empty string with room for `bytes`, or `PathCopy` if that can't be had.
fn reserve_copy(bytes: usize) -> Result<OsString, AllocationFailure> {
    let mut copy = OsString::new();
    copy.try_reserve_exact(bytes)
        .map_err(|_| AllocationFailure::PathCopy { bytes })?;
    Ok(copy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_collection_is_empty_with_initial_capacity() {
        let c = PathCollection::new().unwrap();
        assert_eq!(c.len(), 0);
        assert!(c.is_empty());
        assert_eq!(c.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn appends_keep_length_and_capacity_invariant() {
        let mut c = PathCollection::new().unwrap();
        for n in 0..1000 {
            c.append(Path::new(&format!("/media/{n}.mkv"))).unwrap();
            assert_eq!(c.len(), n + 1);
            assert!(c.capacity() >= c.len());
        }
    }

    #[test]
    fn capacity_doubles_when_full() {
        let mut c = PathCollection::new().unwrap();
        for n in 0..INITIAL_CAPACITY {
            c.append(Path::new(&format!("{n}.mp4"))).unwrap();
        }
        assert_eq!(c.capacity(), INITIAL_CAPACITY);

        c.append(Path::new("one-more.mp4")).unwrap();
        assert_eq!(c.capacity(), INITIAL_CAPACITY * 2);
    }

    #[test]
    fn earlier_entries_survive_growth() {
        let mut c = PathCollection::new().unwrap();
        let mut source = String::from("first.mp4");
        c.append(Path::new(&source)).unwrap();
        source.clear();
        source.push_str("mutated");

        for n in 0..100 {
            c.append(Path::new(&format!("{n}.avi"))).unwrap();
        }
        assert_eq!(c.get(0), Path::new("first.mp4"));
        assert_eq!(c.get(50), Path::new("49.avi"));
    }

    #[test]
    fn swap_exchanges_entries() {
        let mut c = PathCollection::new().unwrap();
        c.append(Path::new("a.mp4")).unwrap();
        c.append(Path::new("b.mp4")).unwrap();
        c.swap(0, 1);
        let order: Vec<_> = c.iter().collect();
        assert_eq!(order, vec![Path::new("b.mp4"), Path::new("a.mp4")]);
    }

    #[test]
    #[should_panic]
    fn get_out_of_range_panics() {
        let c = PathCollection::new().unwrap();
        let _ = c.get(0);
    }

    #[test]
    fn grow_at_usize_max_reports_overflow() {
        let mut c = PathCollection::new().unwrap();
        c.capacity = usize::MAX / 2 + 1;
        assert_eq!(
            c.grow(),
            Err(AllocationFailure::CapacityOverflow {
                capacity: usize::MAX / 2 + 1
            })
        );
    }

    #[test]
    fn unreservable_path_copy_is_an_allocation_failure() {
        assert_eq!(
            reserve_copy(usize::MAX),
            Err(AllocationFailure::PathCopy { bytes: usize::MAX })
        );
        assert!(reserve_copy(64).unwrap().capacity() >= 64);
    }

    #[test]
    fn release_counts_entries_and_handles_empty() {
        let empty = PathCollection::new().unwrap();
        assert_eq!(empty.release(), 0);

        let mut c = PathCollection::new().unwrap();
        c.append(Path::new("x.mkv")).unwrap();
        c.append(Path::new("y.mkv")).unwrap();
        assert_eq!(c.release(), 2);
    }
}
