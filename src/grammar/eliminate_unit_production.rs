use log::debug;

use super::{grammar::Production, Grammar};

impl Grammar {
    /// `Some(B)` when the production is `A -> B` with `B` a nonterminal.
    pub fn unit_target(&self, production: &Production) -> Option<usize> {
        match production.right[..] {
            [idx] if self.is_non_terminal(idx) => Some(idx),
            _ => None,
        }
    }

    /// For every symbol, the nonterminals reachable through unit
    /// productions, excluding itself, in breadth-first order.
    pub fn calculate_unit_closure(&self) -> Vec<Vec<usize>> {
        let mut closure: Vec<Vec<usize>> = vec![Vec::new(); self.symbols.len()];
        for production in &self.productions {
            if let Some(target) = self.unit_target(production) {
                let reach = &mut closure[production.left];
                if target != production.left && !reach.contains(&target) {
                    reach.push(target);
                }
            }
        }

        for a in 0..closure.len() {
            let mut k = 0;
            while k < closure[a].len() {
                let b = closure[a][k];
                for m in 0..closure[b].len() {
                    let c = closure[b][m];
                    if c != a && !closure[a].contains(&c) {
                        closure[a].push(c);
                    }
                }
                k += 1;
            }
        }
        closure
    }

    /// Copies the non-unit productions of every unit-reachable nonterminal
    /// under the reaching one. The unit productions themselves are kept
    /// unless `strip` is set.
    pub fn eliminate_unit_productions(&mut self, strip: bool) {
        let before = self.productions.len();
        let closure = self.calculate_unit_closure();
        let old_productions = std::mem::take(&mut self.productions);

        let mut new_productions: Vec<Production> = old_productions
            .iter()
            .filter(|p| !strip || self.unit_target(p).is_none())
            .cloned()
            .collect();

        for (a, reach) in closure.iter().enumerate() {
            for &b in reach {
                for production in old_productions
                    .iter()
                    .filter(|p| p.left == b && self.unit_target(p).is_none())
                {
                    if !new_productions
                        .iter()
                        .any(|p| p.left == a && p.right == production.right)
                    {
                        new_productions.push(Production::new(a, production.right.clone()));
                    }
                }
            }
        }

        self.productions = new_productions;
        debug!(
            "eliminate unit productions: {} -> {} productions{}",
            before,
            self.productions.len(),
            if strip { ", units stripped" } else { "" }
        );
    }
}
