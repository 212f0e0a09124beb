use std::{fmt, str::FromStr};

use crate::foundation::error::{ChiasmError, ChiasmResult};

pub use kurbo::{BezPath, Point, Vec2};

/// One renderable unit of text: a verse, or a line of free text.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    /// 1-based position within the source.
    pub id: u32,
    /// Source text.
    pub text: String,
    /// Aligned translation (empty when none is available).
    #[serde(default)]
    pub translation: String,
}

impl Item {
    /// Build an item.
    pub fn new(id: u32, text: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            translation: translation.into(),
        }
    }
}

/// Two zero-based item indices linked by the outside-in rule.
///
/// `a <= b` always holds; `a == b` marks the unpaired center item.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Pair {
    /// Outer (left) index.
    pub a: usize,
    /// Inner (right) index.
    pub b: usize,
}

impl Pair {
    /// Build a pair, ordering the endpoints so that `a <= b`.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            a: a.min(b),
            b: a.max(b),
        }
    }

    /// `true` for the self-pair of an odd-length sequence.
    pub fn is_center(self) -> bool {
        self.a == self.b
    }

    /// `true` if `index` is one of the endpoints.
    pub fn contains(self, index: usize) -> bool {
        self.a == index || self.b == index
    }

    /// The other endpoint, or `None` if `index` is not in this pair.
    ///
    /// The center self-pair is its own partner.
    pub fn partner(self, index: usize) -> Option<usize> {
        if self.a == index {
            Some(self.b)
        } else if self.b == index {
            Some(self.a)
        } else {
            None
        }
    }
}

/// A selectable collection (surah) from a verse source.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Collection {
    /// Numeric collection id.
    pub id: u32,
    /// Display name (may be empty when the listing was unavailable).
    pub name: String,
}

impl Collection {
    /// A collection known only by id.
    pub fn unnamed(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
        }
    }

    /// `"{id}: {name}"`, or just the id when the name is unknown.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            self.id.to_string()
        } else {
            format!("{}: {}", self.id, self.name)
        }
    }
}

/// Title + ordered items + pairs: the sole input of every layout transform.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dataset {
    /// Human-readable title (also drives the export filename).
    pub title: String,
    /// Items in source order.
    pub items: Vec<Item>,
    /// Pairs in outside-in order.
    pub pairs: Vec<Pair>,
}

impl Dataset {
    /// Build a dataset and pair its items outside-in.
    pub fn from_items(title: impl Into<String>, items: Vec<Item>) -> Self {
        let pairs = crate::pairing::generate_pairs(items.len());
        Self {
            title: title.into(),
            items,
            pairs,
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check that the pairs partition the item indices exactly once each.
    pub fn validate(&self) -> ChiasmResult<()> {
        let mut seen = vec![false; self.items.len()];
        for (k, pair) in self.pairs.iter().enumerate() {
            if pair.a > pair.b {
                return Err(ChiasmError::validation(format!(
                    "pair {k} is not ordered: ({}, {})",
                    pair.a, pair.b
                )));
            }
            let endpoints: &[usize] = if pair.is_center() {
                &[pair.a]
            } else {
                &[pair.a, pair.b]
            };
            for &i in endpoints {
                let Some(slot) = seen.get_mut(i) else {
                    return Err(ChiasmError::validation(format!(
                        "pair {k} references item {i} but dataset has {} items",
                        self.items.len()
                    )));
                };
                if *slot {
                    return Err(ChiasmError::validation(format!(
                        "item {i} appears in more than one pair"
                    )));
                }
                *slot = true;
            }
        }
        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(ChiasmError::validation(format!(
                "item {missing} is not covered by any pair"
            )));
        }
        Ok(())
    }
}

/// Which layout transform to apply.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Items on a circle, pairs as curves bowing to the center.
    #[default]
    Ring,
    /// Pairs as nested brackets drawn as a horizontal tree.
    Tree,
    /// Items on a line, pairs as semicircular arcs above it.
    Timeline,
}

impl ViewMode {
    /// All modes, in menu order.
    pub const ALL: [ViewMode; 3] = [ViewMode::Ring, ViewMode::Tree, ViewMode::Timeline];

    /// Stable lower-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Ring => "ring",
            ViewMode::Tree => "tree",
            ViewMode::Timeline => "timeline",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ChiasmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewMode::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChiasmError::validation(format!("unknown view mode \"{s}\"")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
