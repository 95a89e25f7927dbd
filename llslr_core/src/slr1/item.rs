use std::fmt;

use crate::{Grammar, Symbol};

/// LR(0) item
///
/// A production (by index into the augmented grammar) with a dot marking how much of
/// its body has been recognized. The body of an epsilon production is empty, so its
/// only item is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    pub rule_idx: usize,
    pub pos: usize,
}

impl Item {
    pub fn new(rule_idx: usize) -> Self {
        Self { rule_idx, pos: 0 }
    }

    pub fn next_symbol<'g>(&self, grammar: &'g Grammar) -> Option<&'g Symbol> {
        grammar.production(self.rule_idx).body().get(self.pos)
    }

    pub fn is_pos_at_end(&self, grammar: &Grammar) -> bool {
        self.pos == grammar.production(self.rule_idx).body().len()
    }

    /// The same item with the dot moved one symbol to the right
    pub fn advanced(&self) -> Self {
        Self {
            rule_idx: self.rule_idx,
            pos: self.pos + 1,
        }
    }

    pub fn display<'g>(&self, grammar: &'g Grammar) -> ItemDisplay<'g> {
        ItemDisplay {
            item: *self,
            grammar,
        }
    }
}

/// Renders an item as `A → α • β`
pub struct ItemDisplay<'g> {
    item: Item,
    grammar: &'g Grammar,
}

impl<'g> fmt::Display for ItemDisplay<'g> {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let production = self.grammar.production(self.item.rule_idx);
        let body = production.body();
        write!(f, "{} →", production.lhs)?;
        for p in 0..=body.len() {
            if p == self.item.pos {
                write!(f, " •")?;
            }
            if p < body.len() {
                write!(f, " {}", body[p])?;
            }
        }
        Ok(())
    }
}
