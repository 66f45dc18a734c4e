use log::debug;

use super::{
    grammar::{Production, EPSILON_INDEX},
    Grammar,
};

/// Every subset of `len` positions as a drop mask, empty subset first.
///
/// Counts in binary with position 0 as the low bit, so a production with
/// `len` nullable symbols yields `2^len` masks.
pub struct Subsets {
    mask: Option<Vec<bool>>,
}

impl Subsets {
    pub fn new(len: usize) -> Self {
        Self {
            mask: Some(vec![false; len]),
        }
    }
}

impl Iterator for Subsets {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Vec<bool>> {
        let current = self.mask.take()?;
        let mut next = current.clone();
        let mut carry = true;
        for bit in next.iter_mut() {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                carry = false;
                break;
            }
        }
        if !carry {
            self.mask = Some(next);
        }
        Some(current)
    }
}

impl Grammar {
    /// Nullability of every symbol, indexed like `symbols`.
    pub fn calculate_nullable(&self) -> Vec<bool> {
        let mut nullable = vec![false; self.symbols.len()];
        nullable[EPSILON_INDEX] = true;

        let mut changed = true;
        while changed {
            changed = false;
            for production in &self.productions {
                if nullable[production.left] {
                    continue;
                }
                if production.right.iter().all(|&s| nullable[s]) {
                    nullable[production.left] = true;
                    changed = true;
                }
            }
        }
        nullable
    }

    /// Drops epsilon productions and adds, for every production, the
    /// variants with any subset of its nullable symbols removed.
    ///
    /// A rule that only derived the empty string is left without
    /// productions, but references to it are kept.
    pub fn eliminate_epsilon(&mut self) {
        let before = self.productions.len();
        let nullable = self.calculate_nullable();

        let mut new_productions: Vec<Production> = Vec::new();
        for production in std::mem::take(&mut self.productions) {
            if production.is_epsilon() {
                continue;
            }

            let positions: Vec<usize> = production
                .right
                .iter()
                .enumerate()
                .filter(|&(_, &s)| nullable[s])
                .map(|(i, _)| i)
                .collect();

            for dropped in Subsets::new(positions.len()) {
                let right: Vec<usize> = production
                    .right
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| match positions.binary_search(i) {
                        Ok(k) => !dropped[k],
                        Err(_) => true,
                    })
                    .map(|(_, &s)| s)
                    .collect();

                if right.is_empty()
                    || new_productions
                        .iter()
                        .any(|p| p.left == production.left && p.right == right)
                {
                    continue;
                }
                new_productions.push(Production::new(production.left, right));
            }
        }

        self.productions = new_productions;
        debug!(
            "eliminate epsilon: {} -> {} productions, {} nullable",
            before,
            self.productions.len(),
            nullable[1..].iter().filter(|&&n| n).count()
        );
    }
}
