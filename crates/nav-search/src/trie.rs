//! Trie over normalised place names.
//!
//! # Layout
//!
//! Each node owns a `BTreeMap<char, TrieNode>` child table, so the alphabet
//! is whatever [`clean_name`] emits and traversal runs in symbol order
//! (`' '` before `'a'`…`'z'`).  A terminal node carries the display name of
//! the first record inserted under its key and the indices of every record
//! sharing that key.

use std::collections::BTreeMap;

use nav_core::{GeoPoint, VertexId};

use crate::clean_name;

/// A place returned by [`PrefixIndex::exact_lookup`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceMatch {
    pub id:   VertexId,
    pub lon:  f64,
    pub lat:  f64,
    /// Original (un-normalised) name of this record.
    pub name: String,
}

impl PlaceMatch {
    pub fn new(id: VertexId, pos: GeoPoint, name: impl Into<String>) -> Self {
        Self { id, lon: pos.lon, lat: pos.lat, name: name.into() }
    }
}

#[derive(Default, Debug)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    /// Display name; `Some` exactly on terminal nodes.
    display:  Option<String>,
    /// Indices into `PrefixIndex::places`.
    records:  Vec<u32>,
}

impl TrieNode {
    fn is_terminal(&self) -> bool {
        self.display.is_some()
    }

    fn descend(&self, key: &str) -> Option<&TrieNode> {
        key.chars().try_fold(self, |node, c| node.children.get(&c))
    }
}

// ── PrefixIndexBuilder ────────────────────────────────────────────────────────

/// Insert places, then call [`build`](Self::build) for a read-only index.
pub struct PrefixIndexBuilder {
    root:       TrieNode,
    places:     Vec<PlaceMatch>,
    node_count: usize,
    names:      usize,
}

impl PrefixIndexBuilder {
    pub fn new() -> Self {
        Self { root: TrieNode::default(), places: Vec::new(), node_count: 1, names: 0 }
    }

    /// Index `place` under `name`.
    ///
    /// Several places may share one normalised key; all of them are returned
    /// by `exact_lookup`.  Names that normalise to the empty string cannot be
    /// searched for and are not indexed.
    pub fn insert(&mut self, name: &str, place: PlaceMatch) {
        let key = clean_name(name);
        if key.is_empty() {
            log::debug!("not indexing {name:?} for {}: no searchable characters", place.id);
            return;
        }

        let mut node = &mut self.root;
        for c in key.chars() {
            node = node.children.entry(c).or_insert_with(|| {
                self.node_count += 1;
                TrieNode::default()
            });
        }
        if node.display.is_none() {
            node.display = Some(name.to_owned());
            self.names += 1;
        }
        node.records.push(self.places.len() as u32);
        self.places.push(place);
    }

    pub fn build(self) -> PrefixIndex {
        log::info!(
            "built prefix index: {} places under {} names, {} trie nodes",
            self.places.len(),
            self.names,
            self.node_count,
        );
        PrefixIndex {
            root:       self.root,
            places:     self.places,
            node_count: self.node_count,
            names:      self.names,
        }
    }
}

impl Default for PrefixIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── PrefixIndex ───────────────────────────────────────────────────────────────

/// Immutable name index.  Safe to share across threads.
#[derive(Debug)]
pub struct PrefixIndex {
    root:       TrieNode,
    places:     Vec<PlaceMatch>,
    node_count: usize,
    names:      usize,
}

impl PrefixIndex {
    /// Number of distinct normalised names.
    pub fn len(&self) -> usize {
        self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names == 0
    }

    /// Number of places indexed (may exceed [`len`](Self::len)).
    pub fn place_count(&self) -> usize {
        self.places.len()
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Display names of every indexed name starting with `prefix` once both
    /// are normalised, in symbol order.  Empty if nothing matches.
    pub fn prefix_search(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.root.descend(&clean_name(prefix)) else {
            return Vec::new();
        };

        // Pre-order walk; children pushed in reverse so the smallest symbol
        // is visited first.
        let mut found = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if let Some(display) = &node.display {
                found.push(display.clone());
            }
            stack.extend(node.children.values().rev());
        }
        found
    }

    /// Every place whose normalised name equals the normalised `name`.
    /// Prefixes of longer names do not match.
    pub fn exact_lookup(&self, name: &str) -> Vec<PlaceMatch> {
        self.root
            .descend(&clean_name(name))
            .filter(|node| node.is_terminal())
            .map(|node| {
                node.records
                    .iter()
                    .map(|&i| self.places[i as usize].clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}
