/*
** This file is a part of Iksnode (XML stanza trees for Jabber/XMPP)
** Copyright (C) 2000-2025 Gurer Ozen
**
** Iksnode is free software: you can redistribute it and/or modify it
** under the terms of the GNU Lesser General Public License as
** published by the Free Software Foundation, either version 3 of
** the License, or (at your option) any later version.
*/

mod error;

use std::cmp;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

pub use error::NoMemory;

const MIN_SLOTS: usize = 8;

static NEXT_TAG: AtomicU64 = AtomicU64::new(1);

/// Handle of an item stored in an [`Arena`].
///
/// A handle carries the tag of the arena which returned it, so it is
/// never resolved by another arena. Handles stay valid for the
/// lifetime of their arena since items are never freed individually.
/// A cloned arena keeps the tag, and the handles resolve to the
/// copied items.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    tag: u64,
    index: usize,
}


/// Translation of handles after [`Arena::absorb`].
#[derive(Clone, Copy, Debug)]
pub struct Rebase {
    from: u64,
    to: u64,
    offset: usize,
}

impl Rebase {
    /// Returns the new handle of a moved item.
    ///
    /// Handles which did not come from the absorbed arena are
    /// returned unchanged.
    pub fn id(self, id: NodeId) -> NodeId {
        if id.tag != self.from {
            return id;
        }
        NodeId {
            tag: self.to,
            index: id.index + self.offset,
        }
    }
}

/// Memory usage statistics of an [`Arena`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ArenaStats {
    /// Number of items stored.
    pub nr_items: usize,
    /// Number of item slots reserved, used or not.
    pub nr_slots: usize,
}

/// An append-only store for the nodes of a single tree.
///
/// Items are addressed by [`NodeId`] instead of pointers, so the tree
/// structure built on top of it can be checked and rewired without
/// any aliasing. Growth goes through the fallible reservation API and
/// reports [`NoMemory`] instead of aborting.
#[derive(Clone, Debug)]
pub struct Arena<T> {
    tag: u64,
    items: Vec<T>,
}

impl<T> Arena<T> {
    pub fn new() -> Arena<T> {
        Arena {
            tag: NEXT_TAG.fetch_add(1, Ordering::Relaxed),
            items: Vec::new(),
        }
    }

    fn handle(&self, index: usize) -> NodeId {
        NodeId {
            tag: self.tag,
            index,
        }
    }

    /// True if the handle was issued by this arena or by the arena
    /// it was cloned from.
    pub fn owns(&self, id: NodeId) -> bool {
        id.tag == self.tag
    }

    pub fn alloc(&mut self, item: T) -> Result<NodeId, NoMemory> {
        if self.items.len() == self.items.capacity() {
            let additional = cmp::max(MIN_SLOTS, self.items.len());
            self.items.try_reserve(additional)?;
        }
        let id = self.handle(self.items.len());
        self.items.push(item);

        Ok(id)
    }

    /// Moves all items of `other` to the end of this arena.
    ///
    /// Handles of `other` are invalidated. The `rebase` callback gets
    /// each moved item so the handles stored inside can be rewritten,
    /// and the returned [`Rebase`] translates any other old handle.
    pub fn absorb<F>(&mut self, other: Arena<T>, mut rebase: F) -> Result<Rebase, NoMemory>
    where
        F: FnMut(&mut T, Rebase),
    {
        self.items.try_reserve(other.items.len())?;
        let moved = Rebase {
            from: other.tag,
            to: self.tag,
            offset: self.items.len(),
        };
        for mut item in other.items {
            rebase(&mut item, moved);
            self.items.push(item);
        }

        Ok(moved)
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        if id.tag != self.tag {
            return None;
        }
        self.items.get(id.index)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        if id.tag != self.tag {
            return None;
        }
        self.items.get_mut(id.index)
    }

    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            nr_items: self.items.len(),
            nr_slots: self.items.capacity(),
        }
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
