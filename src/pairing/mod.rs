use crate::foundation::core::Pair;

/// Pair indices `0..len` outside-in: `(0, len-1)`, `(1, len-2)`, ... and, for odd `len`,
/// a final self-pair for the center item.
#[tracing::instrument(level = "debug")]
pub fn generate_pairs(len: usize) -> Vec<Pair> {
    let mut pairs = Vec::with_capacity(len.div_ceil(2));
    if len == 0 {
        return pairs;
    }

    let mut start = 0usize;
    let mut end = len - 1;
    while start < end {
        pairs.push(Pair::new(start, end));
        start += 1;
        end -= 1;
    }
    if start == end {
        pairs.push(Pair::new(start, start));
    }
    pairs
}

/// Item index -> position of the pair that contains it.
///
/// Built once per layout. When an item appears in more than one pair (a malformed
/// list) the first pair wins; items in no pair map to `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PairIndex {
    by_item: Vec<Option<usize>>,
}

impl PairIndex {
    /// Index `pairs` over `len` items.
    pub fn new(pairs: &[Pair], len: usize) -> Self {
        let mut by_item = vec![None; len];
        for (k, pair) in pairs.iter().enumerate() {
            for i in [pair.a, pair.b] {
                if let Some(slot) = by_item.get_mut(i) {
                    slot.get_or_insert(k);
                }
            }
        }
        Self { by_item }
    }

    /// Position of the pair containing `item`.
    pub fn pair_of(&self, item: usize) -> Option<usize> {
        self.by_item.get(item).copied().flatten()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pairing/engine.rs"]
mod tests;
