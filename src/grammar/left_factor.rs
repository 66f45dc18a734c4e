use log::{debug, trace};

use super::{
    grammar::{concat, Production},
    Grammar,
};

impl Grammar {
    /// Factors alternatives sharing a first symbol until none do.
    ///
    /// `A -> a b | a c` becomes `A -> a A_0` and `A_0 -> b | c`. Longer
    /// common prefixes are peeled one symbol per pass. Epsilon alternatives
    /// have no first symbol and are never grouped.
    pub fn left_factor(&mut self) {
        let before = self.productions.len();
        let mut passes = 1;
        while self.left_factor_pass() {
            passes += 1;
        }
        debug!(
            "left factor: {} -> {} productions in {} passes",
            before,
            self.productions.len(),
            passes
        );
    }

    /// One pass over the nonterminals known when it starts. Returns whether
    /// anything was factored.
    fn left_factor_pass(&mut self) -> bool {
        let mut changed = false;
        let non_terminals = self.defined_non_terminals();
        let old_productions = std::mem::take(&mut self.productions);
        let mut new_productions: Vec<Production> = Vec::with_capacity(old_productions.len());

        for nt in non_terminals {
            let mut groups: Vec<(Option<usize>, Vec<&[usize]>)> = Vec::new();
            for production in old_productions.iter().filter(|p| p.left == nt) {
                let key = production.first();
                let group = key.and_then(|k| groups.iter().position(|(g, _)| *g == Some(k)));
                match group {
                    Some(i) => groups[i].1.push(production.right.as_slice()),
                    None => groups.push((key, vec![production.right.as_slice()])),
                }
            }

            for (key, members) in groups {
                match key {
                    Some(first) if members.len() > 1 => {
                        changed = true;
                        let name = self.get_symbol_numbered_name(self.get_symbol_name(nt));
                        let new_nt = self.add_non_terminal(&name);
                        trace!(
                            "factored {} alternatives of {} on `{}` into {}",
                            members.len(),
                            self.get_symbol_name(nt),
                            self.get_symbol_name(first),
                            name
                        );
                        new_productions.push(Production::new(nt, vec![first, new_nt]));
                        for right in members {
                            new_productions.push(Production::new(new_nt, concat(&right[1..], &[])));
                        }
                    }
                    _ => new_productions.extend(
                        members
                            .into_iter()
                            .map(|right| Production::new(nt, right.to_vec())),
                    ),
                }
            }
        }

        self.productions = new_productions;
        changed
    }
}
