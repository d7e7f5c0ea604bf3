use corpus_analysis::Stem;
use corpus_types::WordId;
use thiserror::Error;

use crate::registry::WordRegistry;

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum TraverseError {
    #[error("no child node for character {0:?}")]
    NotFound(char),
    #[error("cursor is already at the root")]
    AtRoot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Node {
    ch: Option<char>,
    parent: Option<usize>,
    /// Child edges, unique per character. Stems are inserted in sorted
    /// order, so edges end up sorted too without an extra pass.
    children: Vec<(char, usize)>,
    word: Option<WordId>,
}

impl Node {
    fn root() -> Self {
        Self {
            ch: None,
            parent: None,
            children: Vec::new(),
            word: None,
        }
    }
}

/// Character trie over the stems of a [`WordRegistry`] snapshot.
///
/// Built exactly once after ingestion; a word registered afterwards is
/// invisible to lookup until the tree is rebuilt. Nodes live in a flat
/// arena and parent links are indices, so upward traversal never owns
/// anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordTree {
    nodes: Vec<Node>,
}

impl WordTree {
    /// Build the tree from every stem currently in the registry.
    ///
    /// Stems are inserted in lexicographic order, which makes the node
    /// layout (and therefore children ordering) deterministic for a given
    /// registry state.
    pub fn build(registry: &WordRegistry) -> Self {
        let mut stems: Vec<(&str, WordId)> = registry
            .iter()
            .map(|(id, word)| (word.stem(), id))
            .collect();
        stems.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut tree = Self {
            nodes: vec![Node::root()],
        };
        for (stem, id) in stems {
            let mut node = 0;
            for ch in stem.chars() {
                node = match tree.child(node, ch) {
                    Some(next) => next,
                    None => {
                        let next = tree.nodes.len();
                        tree.nodes.push(Node {
                            ch: Some(ch),
                            parent: Some(node),
                            children: Vec::new(),
                            word: None,
                        });
                        tree.nodes[node].children.push((ch, next));
                        next
                    }
                };
            }
            tree.nodes[node].word = Some(id);
        }
        tree
    }

    /// Exact-word lookup: stem the surface form, then walk the tree.
    ///
    /// `None` covers both a missing edge and a walk that ends on a node
    /// with no word (a bare prefix). Misses are part of the normal return
    /// contract, not errors.
    pub fn lookup<S: Stem + ?Sized>(&self, surface: &str, stemmer: &S) -> Option<WordId> {
        self.lookup_stem(&stemmer.stem(surface))
    }

    /// Walk an already-stemmed key.
    pub fn lookup_stem(&self, stem: &str) -> Option<WordId> {
        let mut node = 0;
        for ch in stem.chars() {
            node = self.child(node, ch)?;
        }
        self.nodes[node].word
    }

    /// Cursor positioned at the root.
    pub fn cursor(&self) -> TreeCursor<'_> {
        TreeCursor { tree: self, node: 0 }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn child(&self, node: usize, ch: char) -> Option<usize> {
        self.nodes[node]
            .children
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, next)| *next)
    }
}

/// Stateful cursor for interactive trie traversal.
///
/// Holds nothing beyond the current node; transitions are pure and report
/// failure (`NotFound`, `AtRoot`) through the return value without moving
/// the cursor.
#[derive(Clone, Copy, Debug)]
pub struct TreeCursor<'a> {
    tree: &'a WordTree,
    node: usize,
}

impl<'a> TreeCursor<'a> {
    /// Move to the child labeled `ch`.
    pub fn descend(&mut self, ch: char) -> Result<(), TraverseError> {
        match self.tree.child(self.node, ch) {
            Some(next) => {
                self.node = next;
                Ok(())
            }
            None => Err(TraverseError::NotFound(ch)),
        }
    }

    /// Move back to the parent node.
    pub fn ascend(&mut self) -> Result<(), TraverseError> {
        match self.tree.nodes[self.node].parent {
            Some(parent) => {
                self.node = parent;
                Ok(())
            }
            None => Err(TraverseError::AtRoot),
        }
    }

    pub fn at_root(&self) -> bool {
        self.tree.nodes[self.node].parent.is_none()
    }

    /// Characters of the current node's children, in deterministic order.
    pub fn children(&self) -> impl Iterator<Item = char> + 'a {
        self.tree.nodes[self.node].children.iter().map(|(c, _)| *c)
    }

    /// Word terminating at the current node, if any.
    pub fn word(&self) -> Option<WordId> {
        self.tree.nodes[self.node].word
    }

    /// Stem prefix spelled by the path from the root to the cursor.
    pub fn path(&self) -> String {
        let mut chars = Vec::new();
        let mut node = self.node;
        while let Some(parent) = self.tree.nodes[node].parent {
            if let Some(ch) = self.tree.nodes[node].ch {
                chars.push(ch);
            }
            node = parent;
        }
        chars.iter().rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use corpus_types::SentenceId;

    use super::*;

    /// Identity stemmer: unit tests key the tree by literal stems.
    struct Verbatim;

    impl Stem for Verbatim {
        fn stem(&self, token: &str) -> String {
            token.to_string()
        }
    }

    fn registry(stems: &[&str]) -> WordRegistry {
        let mut registry = WordRegistry::new();
        for (i, stem) in stems.iter().enumerate() {
            registry.get_or_insert(stem, stem, SentenceId(i as u32));
        }
        registry
    }

    #[test]
    fn round_trips_every_stem() {
        let registry = registry(&["кот", "кошк", "окн", "сид"]);
        let tree = WordTree::build(&registry);
        for (id, word) in registry.iter() {
            assert_eq!(tree.lookup_stem(word.stem()), Some(id));
        }
    }

    #[test]
    fn misses_prefixes_and_unknown_words() {
        let registry = registry(&["кот", "кошк"]);
        let tree = WordTree::build(&registry);
        // "ко" is a prefix of both stems but terminates no word.
        assert_eq!(tree.lookup_stem("ко"), None);
        assert_eq!(tree.lookup_stem("собак"), None);
        assert_eq!(tree.lookup_stem("котик"), None);
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let registry = registry(&["кот", "кошк"]);
        let tree = WordTree::build(&registry);
        // root + к,о shared + т + ш,к
        assert_eq!(tree.node_count(), 6);
    }

    #[test]
    fn lookup_goes_through_the_stemmer() {
        let registry = registry(&["кот"]);
        let tree = WordTree::build(&registry);
        assert!(tree.lookup("кот", &Verbatim).is_some());
        assert!(tree.lookup("кота", &Verbatim).is_none());
    }

    #[test]
    fn build_is_deterministic() {
        let registry = registry(&["сид", "окн", "кот", "кошк"]);
        let first = WordTree::build(&registry);
        let second = WordTree::build(&registry);
        assert_eq!(first, second);
    }

    #[test]
    fn cursor_descends_ascends_and_reports_errors() {
        let registry = registry(&["кот", "кошк"]);
        let tree = WordTree::build(&registry);
        let mut cursor = tree.cursor();
        assert!(cursor.at_root());
        assert_eq!(cursor.children().collect::<Vec<_>>(), vec!['к']);

        cursor.descend('к').unwrap();
        cursor.descend('о').unwrap();
        assert_eq!(cursor.children().collect::<Vec<_>>(), vec!['т', 'ш']);
        assert_eq!(cursor.path(), "ко");
        assert_eq!(cursor.word(), None);

        cursor.descend('т').unwrap();
        assert!(cursor.word().is_some());
        assert_eq!(cursor.descend('х'), Err(TraverseError::NotFound('х')));
        // A failed descend leaves the cursor in place.
        assert_eq!(cursor.path(), "кот");

        cursor.ascend().unwrap();
        cursor.ascend().unwrap();
        cursor.ascend().unwrap();
        assert!(cursor.at_root());
        assert_eq!(cursor.ascend(), Err(TraverseError::AtRoot));
    }
}
