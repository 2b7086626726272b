use std::cmp;
use std::fmt::{self, Debug, Formatter};

use derive_more::IsVariant;

use super::{Buffer, Deque, INIT_MAP_SIZE, Position, buffer_size};
use crate::collections::contiguous::{Array, Vector};
use crate::util::error::{CapacityOverflow, ReserveError};
use crate::util::option::OptionExtension;

/// The control table of a [`Deque`]: a fixed number of slots, each either empty or owning one
/// [`Buffer`]. Slots are addressed by index, which is what a [`Position`]'s `node` refers to.
///
/// A map with no slots is the "null map" of a Deque that has never allocated, or that has been
/// moved out of.
pub(crate) struct BufferMap<T> {
    pub(crate) slots: Array<Option<Buffer<T>>>,
}

/// Which end of a [`Deque`] a capacity request applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum End {
    Front,
    Back,
}

impl<T> BufferMap<T> {
    pub(crate) const fn null() -> BufferMap<T> {
        BufferMap {
            slots: Array::new(),
        }
    }

    /// Creates a map with `size` empty slots.
    pub(crate) fn try_create(size: usize) -> Result<BufferMap<T>, ReserveError> {
        Ok(BufferMap {
            slots: Array::try_repeat_with(|| None, size)?,
        })
    }

    pub(crate) const fn size(&self) -> usize {
        self.slots.size()
    }

    pub(crate) const fn is_null(&self) -> bool {
        self.slots.size() == 0
    }

    /// Returns the number of slots currently holding a buffer.
    pub(crate) fn buffer_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Allocates a buffer for every empty slot in `start..finish`. Slots that already hold a
    /// buffer are kept as they are.
    ///
    /// All of the new buffers are allocated before any slot is filled, so on an [`Err`] the map is
    /// unchanged.
    pub(crate) fn try_create_buffers(
        &mut self,
        start: usize,
        finish: usize,
    ) -> Result<(), ReserveError> {
        let slots = &mut self.slots[start..finish];
        let missing = slots.iter().filter(|slot| slot.is_none()).count();
        if missing == 0 { return Ok(()); }

        let mut fresh = Self::try_stage_buffers(missing)?;
        for slot in slots.iter_mut().filter(|slot| slot.is_none()) {
            *slot = fresh.pop();
        }

        Ok(())
    }

    /// Allocates `count` buffers without attaching them to any slot. If any allocation fails,
    /// the buffers allocated so far are freed.
    fn try_stage_buffers(count: usize) -> Result<Vector<Buffer<T>>, ReserveError> {
        let mut fresh = Vector::try_with_cap(count)?;
        for _ in 0..count {
            fresh.try_push(Array::<T>::try_new_uninit(buffer_size::<T>())?)?;
        }
        Ok(fresh)
    }

    /// Frees the buffers of every slot in `start..=finish`. Any elements still stored in them are
    /// leaked, so they need to have been moved out or dropped beforehand.
    pub(crate) fn destroy_buffers(&mut self, start: usize, finish: usize) {
        for slot in &mut self.slots[start..=finish] {
            *slot = None;
        }
    }

    /// Frees every buffer outside of `start..=finish`.
    pub(crate) fn destroy_buffers_outside(&mut self, start: usize, finish: usize) {
        for (node, slot) in self.slots.iter_mut().enumerate() {
            if node < start || node > finish {
                *slot = None;
            }
        }
    }

    /// Returns a pointer to the start of the buffer held by `node`.
    ///
    /// # Safety
    /// `node` has to hold a buffer, which is always the case within a Deque's active range.
    pub(crate) unsafe fn buffer_ptr(&self, node: usize) -> *mut T {
        // SAFETY: The caller guarantees that the slot holds a buffer.
        let buffer = unsafe { self.slots[node].as_ref().unreachable() };
        buffer.ptr.as_ptr().cast()
    }

    /// Returns a pointer to the element storage at `pos`.
    ///
    /// # Safety
    /// `pos.node` has to hold a buffer.
    pub(crate) unsafe fn slot_ptr(&self, pos: Position<T>) -> *mut T {
        // SAFETY: The caller guarantees that the slot holds a buffer, and pos.cur is always less
        // than the buffer size.
        unsafe { self.buffer_ptr(pos.node).add(pos.cur) }
    }
}

impl<T> Debug for BufferMap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.slots.iter().map(|slot| slot.is_some()))
            .finish()
    }
}

impl<T> Deque<T> {
    /// Allocates a map and the buffers needed to hold `len` elements, with the active range
    /// centered in the map. Both positions are left at the start of the first buffer, the caller
    /// is responsible for constructing elements and moving `end`.
    ///
    /// self is only modified once every allocation has succeeded.
    pub(crate) fn try_map_init(&mut self, len: usize) -> Result<(), ReserveError> {
        let node_count = len / buffer_size::<T>() + 1;
        let map_size = cmp::max(
            INIT_MAP_SIZE,
            node_count.checked_add(2).ok_or(CapacityOverflow)?,
        );

        let mut map = BufferMap::try_create(map_size)?;
        let start = (map_size - node_count) / 2;
        map.try_create_buffers(start, start + node_count)?;

        self.map = map;
        self.begin = Position::new(start, 0);
        self.end = self.begin;
        Ok(())
    }

    /// Ensures that `n` more elements can be added at the given end without allocating. Buffers
    /// are created next to the active range, unless the map is out of slots on that side, in
    /// which case it is reallocated first.
    ///
    /// On an [`Err`], the Deque is unchanged.
    pub(crate) fn try_require_capacity(&mut self, n: usize, end: End) -> Result<(), ReserveError> {
        if self.map.is_null() {
            self.try_map_init(0)?;
        }

        let buf = buffer_size::<T>();

        match end {
            End::Front => {
                let room = self.begin.cur;
                if n <= room { return Ok(()); }

                let need = (n - room).div_ceil(buf);
                if need > self.begin.node {
                    self.try_reallocate_map(need, End::Front)
                } else {
                    self.map.try_create_buffers(self.begin.node - need, self.begin.node)
                }
            },
            End::Back => {
                // end.cur always refers to an unused element, so the last slot can't be filled
                // without the next buffer existing.
                let room = buf - self.end.cur - 1;
                if n <= room { return Ok(()); }

                let need = (n - room).div_ceil(buf);
                if need > self.map.size() - self.end.node - 1 {
                    self.try_reallocate_map(need, End::Back)
                } else {
                    self.map.try_create_buffers(self.end.node + 1, self.end.node + need + 1)
                }
            },
        }
    }

    /// Replaces the map with a larger one, moving the active buffers into its center and creating
    /// `need` new buffers on the given side. Spare buffers outside the active range are released.
    ///
    /// If the current map is more than twice the size that is required, the active buffers are
    /// recentered within it instead, so a Deque used as a queue doesn't grow its map forever.
    ///
    /// The new map and buffers are fully allocated before the Deque is touched.
    fn try_reallocate_map(&mut self, need: usize, end: End) -> Result<(), ReserveError> {
        let old_size = self.map.size();
        let active = self.end.node - self.begin.node + 1;
        let required = active.checked_add(need).ok_or(CapacityOverflow)?;

        if required.checked_mul(2).is_some_and(|double| double < old_size) {
            return self.try_recenter_map(active, need, end);
        }

        let new_size = cmp::max(
            old_size.checked_mul(2).ok_or(CapacityOverflow)?,
            old_size
                .checked_add(need)
                .and_then(|size| size.checked_add(INIT_MAP_SIZE))
                .ok_or(CapacityOverflow)?,
        );

        let mut map = BufferMap::try_create(new_size)?;
        let slack = (new_size - active - need) / 2;

        let new_begin = match end {
            End::Front => {
                map.try_create_buffers(slack, slack + need)?;
                slack + need
            },
            End::Back => {
                map.try_create_buffers(slack + active, slack + active + need)?;
                slack
            },
        };

        for offset in 0..active {
            map.slots[new_begin + offset] = self.map.slots[self.begin.node + offset].take();
        }

        self.map = map;
        self.begin.node = new_begin;
        self.end.node = new_begin + active - 1;
        Ok(())
    }

    /// Moves the active buffers into the center of the existing map, leaving room for `need` new
    /// buffers on the given side, which are created as well.
    fn try_recenter_map(&mut self, active: usize, need: usize, end: End) -> Result<(), ReserveError> {
        let mut fresh = BufferMap::<T>::try_stage_buffers(need)?;
        let slack = (self.map.size() - active - need) / 2;
        let old_begin = self.begin.node;
        let old_end = self.end.node;

        let new_begin = match end {
            End::Front => slack + need,
            End::Back => slack,
        };

        self.map.destroy_buffers_outside(old_begin, old_end);
        // Every slot outside of the active range is now empty, so rotating moves the active
        // buffers into place and the empty slots out of the way.
        if new_begin < old_begin {
            self.map.slots[new_begin..=old_end].rotate_left(old_begin - new_begin);
        } else if new_begin > old_begin {
            self.map.slots[old_begin..new_begin + active].rotate_right(new_begin - old_begin);
        }

        let new_buffers = match end {
            End::Front => slack..slack + need,
            End::Back => slack + active..slack + active + need,
        };
        for node in new_buffers {
            self.map.slots[node] = fresh.pop();
        }

        self.begin.node = new_begin;
        self.end.node = new_begin + active - 1;
        Ok(())
    }

    /// Releases the buffers which held elements between two positions that are no longer part of
    /// the active range, after the front has moved from `old_begin` to `self.begin`.
    pub(crate) fn release_front(&mut self, old_begin: Position<T>) {
        if old_begin.node < self.begin.node {
            self.map.destroy_buffers(old_begin.node, self.begin.node - 1);
        }
    }

    /// Releases the buffers which are no longer part of the active range, after the back has moved
    /// from `old_end` to `self.end`.
    pub(crate) fn release_back(&mut self, old_end: Position<T>) {
        if old_end.node > self.end.node {
            self.map.destroy_buffers(self.end.node + 1, old_end.node);
        }
    }
}
