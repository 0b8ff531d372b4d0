//! Prefix dictionary for the compressor.
//!
//! A ternary search trie keyed by byte strings. Each node holds one character
//! and three links: `left`/`right` to siblings that sort before/after it, and
//! `mid` to the next character of keys that pass through it. A node carrying a
//! code terminates a registered key.
//!
//! The encoder asks one question per step: "what is the longest registered key
//! that starts at this offset?". A single walk down the trie answers it in time
//! proportional to the match length, which a plain hash map cannot do without
//! probing every shorter candidate.

use crate::error::{LzwError, Result};

#[derive(Debug, Clone)]
struct Node {
    ch: u8,
    left: Option<u32>,
    mid: Option<u32>,
    right: Option<u32>,
    code: Option<u16>,
}

impl Node {
    fn new(ch: u8) -> Self {
        Self {
            ch,
            left: None,
            mid: None,
            right: None,
            code: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Link {
    Left,
    Mid,
    Right,
}

/// String-to-code dictionary supporting longest-prefix queries.
///
/// Nodes live in an arena; links are indices into it.
#[derive(Debug, Clone, Default)]
pub struct PrefixDictionary {
    nodes: Vec<Node>,
    root: Option<u32>,
    len: usize,
}

impl PrefixDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty dictionary with room for `nodes` trie nodes.
    ///
    /// Every key the encoder adds extends an existing key by one character,
    /// so it costs exactly one node: a table of L codes never needs more than
    /// L nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            root: None,
            len: 0,
        }
    }

    /// Create a dictionary holding the single characters `0..radix`, each
    /// bound to its own value.
    pub fn with_alphabet(radix: u16) -> Self {
        let mut dict = Self::with_capacity(radix as usize);
        dict.seed_alphabet(radix);
        dict
    }

    /// Register the single characters `0..radix` with codes equal to their
    /// value.
    ///
    /// Characters are inserted median-first so the root level of the trie is
    /// a balanced tree rather than a 128-long chain.
    pub fn seed_alphabet(&mut self, radix: u16) {
        fn seed(dict: &mut PrefixDictionary, lo: u16, hi: u16) {
            if lo >= hi {
                return;
            }
            let mid = lo + (hi - lo) / 2;
            dict.insert_unchecked(&[mid as u8], mid);
            seed(dict, lo, mid);
            seed(dict, mid + 1, hi);
        }
        seed(self, 0, radix.min(256));
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether no key is registered.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    fn alloc(&mut self, ch: u8) -> u32 {
        self.nodes.push(Node::new(ch));
        (self.nodes.len() - 1) as u32
    }

    /// Follow `link` from `node`, creating a node for `ch` if it is missing.
    fn child_or_insert(&mut self, node: u32, link: Link, ch: u8) -> u32 {
        let existing = {
            let n = &self.nodes[node as usize];
            match link {
                Link::Left => n.left,
                Link::Mid => n.mid,
                Link::Right => n.right,
            }
        };
        if let Some(child) = existing {
            return child;
        }

        let child = self.alloc(ch);
        let n = &mut self.nodes[node as usize];
        match link {
            Link::Left => n.left = Some(child),
            Link::Mid => n.mid = Some(child),
            Link::Right => n.right = Some(child),
        }
        child
    }

    /// Register `key` with `code`.
    ///
    /// The encoder only ever inserts a matched prefix extended by one
    /// character, so the key is always new. Inserting an existing key rebinds
    /// it.
    pub fn insert(&mut self, key: &[u8], code: u16) -> Result<()> {
        if key.is_empty() {
            return Err(LzwError::EmptyKey);
        }
        self.insert_unchecked(key, code);
        Ok(())
    }

    fn insert_unchecked(&mut self, key: &[u8], code: u16) {
        let mut node = match self.root {
            Some(root) => root,
            None => {
                let root = self.alloc(key[0]);
                self.root = Some(root);
                root
            }
        };

        let mut i = 0;
        loop {
            let c = key[i];
            let ch = self.nodes[node as usize].ch;
            if c < ch {
                node = self.child_or_insert(node, Link::Left, c);
            } else if c > ch {
                node = self.child_or_insert(node, Link::Right, c);
            } else if i + 1 < key.len() {
                i += 1;
                node = self.child_or_insert(node, Link::Mid, key[i]);
            } else {
                if self.nodes[node as usize].code.replace(code).is_none() {
                    self.len += 1;
                }
                return;
            }
        }
    }

    /// Find the node terminating `key`, registered or not.
    fn find(&self, key: &[u8]) -> Option<&Node> {
        if key.is_empty() {
            return None;
        }

        let mut node = self.root;
        let mut i = 0;
        while let Some(index) = node {
            let n = &self.nodes[index as usize];
            let c = key[i];
            if c < n.ch {
                node = n.left;
            } else if c > n.ch {
                node = n.right;
            } else if i + 1 < key.len() {
                i += 1;
                node = n.mid;
            } else {
                return Some(n);
            }
        }
        None
    }

    /// Check whether `key` is registered.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.find(key).is_some_and(|n| n.code.is_some())
    }

    /// Return the code bound to `key`.
    pub fn lookup_code(&self, key: &[u8]) -> Result<u16> {
        self.find(key)
            .and_then(|n| n.code)
            .ok_or(LzwError::UnknownKey { len: key.len() })
    }

    /// Return the longest registered key that `text[start..]` begins with.
    ///
    /// The returned slice borrows from `text`. It is empty when `start` is at
    /// or past the end of `text`, or when not even the first character is
    /// registered.
    pub fn longest_prefix_match<'t>(&self, text: &'t [u8], start: usize) -> &'t [u8] {
        if start >= text.len() {
            return &[];
        }

        let mut node = self.root;
        let mut i = start;
        let mut end = start;
        while let Some(index) = node {
            if i >= text.len() {
                break;
            }
            let n = &self.nodes[index as usize];
            let c = text[i];
            if c < n.ch {
                node = n.left;
            } else if c > n.ch {
                node = n.right;
            } else {
                i += 1;
                if n.code.is_some() {
                    end = i;
                }
                node = n.mid;
            }
        }

        &text[start..end]
    }
}
