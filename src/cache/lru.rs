//! LRU Map Module
//!
//! Access-ordered map backing the cache: a HashMap from identity to a slot in
//! an arena of nodes, threaded into a doubly-linked list by index.

use std::collections::HashMap;

use crate::cache::{CacheEntry, EntryId};

/// Null link in the arena list.
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node {
    entry: Option<CacheEntry>,
    prev: usize,
    next: usize,
}

// == LRU Map ==
/// Entries ordered by recency of access.
///
/// List layout:
/// - Head = least recently used (next to be evicted)
/// - Tail = most recently used
///
/// Every touch (insert, replace, hit) moves the entry to the tail, so the
/// order is strict and the head is always the unique LRU entry. All
/// operations are O(1); freed slots are recycled through a free list.
#[derive(Debug)]
pub struct LruMap {
    /// Identity -> arena slot
    index: HashMap<EntryId, usize>,
    /// Node arena
    nodes: Vec<Node>,
    /// Recycled arena slots
    free: Vec<usize>,
    head: usize,
    tail: usize,
}

impl Default for LruMap {
    fn default() -> Self {
        Self::new()
    }
}

impl LruMap {
    // == Constructor ==
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
        }
    }

    // == Insert ==
    /// Inserts or replaces the entry under its identity and marks it most
    /// recently used. Returns the replaced entry, if any.
    pub fn insert(&mut self, entry: CacheEntry) -> Option<CacheEntry> {
        if let Some(&idx) = self.index.get(&entry.id) {
            self.move_to_back(idx);
            return self.nodes[idx].entry.replace(entry);
        }

        let id = entry.id;
        let idx = self.alloc(entry);
        self.push_back(idx);
        self.index.insert(id, idx);
        None
    }

    // == Get ==
    /// Returns the entry and marks it most recently used.
    pub fn get(&mut self, id: EntryId) -> Option<&CacheEntry> {
        let idx = *self.index.get(&id)?;
        self.move_to_back(idx);
        self.nodes[idx].entry.as_ref()
    }

    /// Returns the entry without touching its recency.
    pub fn peek(&self, id: EntryId) -> Option<&CacheEntry> {
        let idx = *self.index.get(&id)?;
        self.nodes[idx].entry.as_ref()
    }

    // == Remove ==
    /// Removes the entry, if present.
    pub fn remove(&mut self, id: EntryId) -> Option<CacheEntry> {
        let idx = self.index.remove(&id)?;
        self.release(idx)
    }

    // == Pop LRU ==
    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<CacheEntry> {
        if self.head == NIL {
            return None;
        }
        let idx = self.head;
        let id = self.nodes[idx].entry.as_ref()?.id;
        self.index.remove(&id);
        self.release(idx)
    }

    /// Returns the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<&CacheEntry> {
        if self.head == NIL {
            return None;
        }
        self.nodes[self.head].entry.as_ref()
    }

    // == Clear ==
    /// Drops every entry and releases the arena.
    pub fn clear(&mut self) {
        self.index.clear();
        self.nodes.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.index.contains_key(&id)
    }

    // == Iter ==
    /// Iterates entries from least to most recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    // == List Plumbing ==
    fn alloc(&mut self, entry: CacheEntry) -> usize {
        let node = Node {
            entry: Some(entry),
            prev: NIL,
            next: NIL,
        };
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Option<CacheEntry> {
        self.detach(idx);
        self.free.push(idx);
        self.nodes[idx].entry.take()
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);

        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }
        if next != NIL {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    fn push_back(&mut self, idx: usize) {
        self.nodes[idx].prev = self.tail;
        self.nodes[idx].next = NIL;
        if self.tail != NIL {
            self.nodes[self.tail].next = idx;
        } else {
            self.head = idx;
        }
        self.tail = idx;
    }

    fn move_to_back(&mut self, idx: usize) {
        if self.tail == idx {
            return;
        }
        self.detach(idx);
        self.push_back(idx);
    }
}

/// Iterator over entries, least recently used first.
pub struct Iter<'a> {
    nodes: &'a [Node],
    cursor: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CacheEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NIL {
            return None;
        }
        let node = &self.nodes[self.cursor];
        self.cursor = node.next;
        node.entry.as_ref()
    }
}
