use std::collections::HashMap;

use log::{debug, trace};

use super::{
    grammar::{concat, Production, EPSILON_INDEX},
    Grammar,
};

impl Grammar {
    /// Removes direct and indirect left recursion.
    ///
    /// Nonterminals are ordered A_0, A_1, ... by first appearance. For each
    /// A_i, every production A_i -> A_j b with j < i is expanded with the
    /// already rewritten A_j alternatives (j increasing), then direct
    /// recursion is moved into a fresh primed nonterminal:
    ///
    /// ```text
    /// A -> A a | b      becomes     A  -> b A'
    ///                               A' -> a A' | ε
    /// ```
    pub fn eliminate_left_recursion(&mut self) {
        let before = self.productions.len();
        let non_terminals = self.defined_non_terminals();
        let map: HashMap<usize, usize> = non_terminals
            .iter()
            .enumerate()
            .map(|(i, &nt)| (nt, i))
            .collect();

        let mut pending: Vec<Vec<Vec<usize>>> = vec![Vec::new(); non_terminals.len()];
        for production in std::mem::take(&mut self.productions) {
            pending[map[&production.left]].push(production.right);
        }

        let mut replace: Vec<Vec<Vec<usize>>> = Vec::with_capacity(non_terminals.len());
        let mut new_productions: Vec<Production> = Vec::new();
        let mut introduced = 0;

        for (i, &nt) in non_terminals.iter().enumerate() {
            let mut rights = std::mem::take(&mut pending[i]);
            for (j, &head) in non_terminals[..i].iter().enumerate() {
                if !rights.iter().any(|right| right[0] == head) {
                    continue;
                }
                rights = rights
                    .into_iter()
                    .flat_map(|right| {
                        if right[0] == head {
                            replace[j]
                                .iter()
                                .map(|gamma| concat(gamma, &right[1..]))
                                .collect::<Vec<_>>()
                        } else {
                            vec![right]
                        }
                    })
                    .collect();
            }

            let (recursive, base): (Vec<Vec<usize>>, Vec<Vec<usize>>) =
                rights.into_iter().partition(|right| right[0] == nt);

            if recursive.is_empty() {
                new_productions.extend(base.iter().map(|right| Production::new(nt, right.clone())));
                replace.push(base);
                continue;
            }

            let name = self.get_symbol_prime_name(self.get_symbol_name(nt).to_string());
            let nt_prime = self.add_non_terminal(&name);
            introduced += 1;
            trace!("{} is left recursive, introduced {}", self.get_symbol_name(nt), name);

            let base: Vec<Vec<usize>> = base.iter().map(|beta| concat(beta, &[nt_prime])).collect();
            new_productions.extend(base.iter().map(|right| Production::new(nt, right.clone())));

            // `A -> A` contributes nothing but the trailing epsilon.
            for alpha in recursive.iter().filter(|right| right.len() > 1) {
                new_productions.push(Production::new(nt_prime, concat(&alpha[1..], &[nt_prime])));
            }
            new_productions.push(Production::new(nt_prime, vec![EPSILON_INDEX]));

            replace.push(base);
        }

        self.productions = new_productions;
        debug!(
            "eliminate left recursion: {} -> {} productions, {} new nonterminals",
            before,
            self.productions.len(),
            introduced
        );
    }
}
