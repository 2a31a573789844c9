use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

/// Handle-addressed container the world keeps its bodies in
pub trait Storage<T, H> {
    fn new() -> Self;

    /// Stores `item` under a fresh handle
    fn add(&mut self, item: T) -> H;

    fn get(&self, handle: H) -> Option<&T>;

    fn get_mut(&mut self, handle: H) -> Option<&mut T>;

    /// Takes the item out; its handle never resolves again
    fn remove(&mut self, handle: H) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool;

    fn clear(&mut self);

    /// Live handles, oldest first
    fn handles(&self) -> Vec<H>;

    /// Live items, oldest first
    fn iter<'a>(&'a self) -> impl Iterator<Item = (H, &'a T)> + 'a where T: 'a;

    /// Live items, oldest first, mutably
    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = (H, &'a mut T)> + 'a where T: 'a;
}

/// Slot storage for bodies
///
/// A handle is the index of its slot. Removed slots stay empty and are never
/// reused, so a stale handle can only ever miss. Iteration follows insertion
/// order, which keeps a run deterministic.
#[derive(Debug, Clone)]
pub struct BodyStorage<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T> Storage<T, BodyHandle> for BodyStorage<T> {
    fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    fn add(&mut self, item: T) -> BodyHandle {
        let handle = BodyHandle(self.slots.len() as u32);
        self.slots.push(Some(item));
        self.len += 1;
        handle
    }

    fn get(&self, handle: BodyHandle) -> Option<&T> {
        self.slots.get(handle.index()).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        self.slots.get_mut(handle.index()).and_then(Option::as_mut)
    }

    fn remove(&mut self, handle: BodyHandle) -> Option<T> {
        let removed = self.slots.get_mut(handle.index()).and_then(Option::take);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.len = 0;
    }

    fn handles(&self) -> Vec<BodyHandle> {
        self.iter().map(|(handle, _)| handle).collect()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (BodyHandle, &'a T)> + 'a where T: 'a {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|item| (BodyHandle(index as u32), item)))
    }

    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = (BodyHandle, &'a mut T)> + 'a where T: 'a {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_mut().map(|item| (BodyHandle(index as u32), item)))
    }
}

impl<T> Default for BodyStorage<T> {
    fn default() -> Self {
        <Self as Storage<T, BodyHandle>>::new()
    }
}

impl<T> BodyStorage<T> {
    /// Like [`Storage::get`], with a missing handle reported as an error
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle).ok_or_else(|| missing(handle))
    }

    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle).ok_or_else(|| missing(handle))
    }

    /// Borrows two distinct bodies mutably at the same time
    pub fn get_pair_mut(&mut self, a: BodyHandle, b: BodyHandle) -> Result<(&mut T, &mut T)> {
        if a == b {
            return Err(PhysicsError::InvalidParameter(format!(
                "cannot borrow body {:?} twice",
                a
            )));
        }
        // Fail with the missing handle before splitting
        self.get_body(a)?;
        self.get_body(b)?;

        let (low, high) = if a.index() < b.index() { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(high.index());
        let (low_body, high_body) = match (head[low.index()].as_mut(), tail[0].as_mut()) {
            (Some(low_body), Some(high_body)) => (low_body, high_body),
            _ => {
                return Err(PhysicsError::ResourceNotFound(format!(
                    "Body pair {:?}/{:?} not found",
                    a, b
                )))
            }
        };

        if a == low {
            Ok((low_body, high_body))
        } else {
            Ok((high_body, low_body))
        }
    }
}

fn missing(handle: BodyHandle) -> PhysicsError {
    PhysicsError::ResourceNotFound(format!("no body at {}", handle))
}
