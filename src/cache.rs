//! Bounded least-recently-used cache.
//!
//! Entries live in a `Vec` arena linked into a doubly-linked recency list, and a `HashMap`
//! maps keys to arena slots. Slots of evicted entries are reused.

use core::hash::Hash;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Cache that keeps at most `max_size` entries and evicts the least recently used one first.
#[derive(Debug, Clone)]
pub struct LruCache<K, V> {
    max_size: usize,
    nodes: Vec<Node<K, V>>,
    map: HashMap<K, usize>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Vec<usize>,
}

impl<K: Eq + Hash + Clone, V: Clone> LruCache<K, V> {
    /// Returns an empty cache holding at most `max_size` entries.
    /// A cache of size 0 stores nothing.
    pub fn new(max_size: usize) -> Self {
        LruCache {
            max_size,
            nodes: Vec::new(),
            map: HashMap::new(),
            head: None,
            tail: None,
            free: Vec::new(),
        }
    }

    /// Returns the value stored for `key` and marks it as the most recently used.
    pub fn get(&mut self, key: &K) -> Option<V> {
        let idx = *self.map.get(key)?;
        self.move_to_front(idx);
        Some(self.nodes[idx].value.clone())
    }

    /// Stores `value` for `key`, evicting the least recently used entry when full.
    pub fn set(&mut self, key: K, value: V) {
        if self.max_size == 0 {
            return;
        }

        if let Some(&idx) = self.map.get(&key) {
            self.nodes[idx].value = value;
            self.move_to_front(idx);
            return;
        }

        if self.map.len() >= self.max_size {
            self.evict();
        }

        let node = Node {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        };

        let idx = if let Some(idx) = self.free.pop() {
            self.nodes[idx] = node;
            idx
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        };

        self.map.insert(key, idx);
        self.push_front(idx);
    }

    /// Returns the number of stored entries.
    pub fn size(&self) -> usize {
        self.map.len()
    }

    /// Returns the maximum number of entries.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Changes the maximum number of entries, evicting entries until the cache fits.
    pub fn set_max_size(&mut self, max_size: usize) {
        self.max_size = max_size;
        while self.map.len() > max_size {
            self.evict();
        }
        if max_size == 0 {
            self.clear();
        }
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.map.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }

    /// Removes the least recently used entry and returns its key.
    fn evict(&mut self) -> Option<K> {
        let idx = self.tail?;
        self.unlink(idx);
        let key = self.nodes[idx].key.clone();
        self.map.remove(&key);
        self.free.push(idx);
        Some(key)
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.unlink(idx);
        self.push_front(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let prev = self.nodes[idx].prev;
        let next = self.nodes[idx].next;

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }

        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = None;
        self.nodes[idx].next = self.head;

        match self.head {
            Some(h) => self.nodes[h].prev = Some(idx),
            None => self.tail = Some(idx),
        }

        self.head = Some(idx);
    }

    /// Keys from the most to the least recently used.
    #[cfg(test)]
    fn keys(&self) -> Vec<K> {
        let mut ret = Vec::with_capacity(self.map.len());
        let mut cur = self.head;
        while let Some(idx) = cur {
            ret.push(self.nodes[idx].key.clone());
            cur = self.nodes[idx].next;
        }
        ret
    }
}
