use std::collections::HashMap;

use super::{EPSILON, EPSILON_ALIAS};

/// Index of the epsilon marker in `Grammar::symbols`.
pub const EPSILON_INDEX: usize = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    Epsilon,
    NonTerminal(String),
    Terminal(String),
}

impl Symbol {
    pub fn is_non_terminal(&self) -> bool {
        matches!(self, Symbol::NonTerminal(_))
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }
}

/// `left -> right`, both as indices into `Grammar::symbols`.
///
/// `right` is never empty; the empty string is spelled `[EPSILON_INDEX]`
/// and the marker never appears in a longer right side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    pub left: usize,
    pub right: Vec<usize>,
}

impl Production {
    pub fn new(left: usize, right: Vec<usize>) -> Self {
        Self { left, right }
    }

    pub fn is_epsilon(&self) -> bool {
        self.right == [EPSILON_INDEX]
    }

    /// First symbol of the right side, `None` for an epsilon production.
    pub fn first(&self) -> Option<usize> {
        first_symbol(&self.right)
    }
}

pub fn first_symbol(right: &[usize]) -> Option<usize> {
    match right.first() {
        Some(&EPSILON_INDEX) | None => None,
        Some(&idx) => Some(idx),
    }
}

/// Concatenates two right sides, treating epsilon as the identity.
pub fn concat(prefix: &[usize], suffix: &[usize]) -> Vec<usize> {
    let right: Vec<usize> = prefix
        .iter()
        .chain(suffix.iter())
        .copied()
        .filter(|&idx| idx != EPSILON_INDEX)
        .collect();
    if right.is_empty() {
        vec![EPSILON_INDEX]
    } else {
        right
    }
}

#[derive(Debug, Clone)]
pub struct Grammar {
    pub symbols: Vec<Symbol>,
    pub symbol_table: HashMap<String, usize>,
    pub productions: Vec<Production>,
    pub start_symbol: Option<usize>,
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

impl Grammar {
    pub fn new() -> Self {
        let mut g = Self {
            symbols: vec![Symbol::Epsilon],
            symbol_table: HashMap::new(),
            productions: Vec::new(),
            start_symbol: None,
        };
        g.symbol_table.insert(EPSILON.to_string(), EPSILON_INDEX);
        g.symbol_table.insert(EPSILON_ALIAS.to_string(), EPSILON_INDEX);
        g
    }

    pub fn terminal_iter(&self) -> impl Iterator<Item = &String> {
        self.symbols.iter().filter_map(|s| {
            if let Symbol::Terminal(name) = s {
                Some(name)
            } else {
                None
            }
        })
    }

    /// Nonterminals with their indices, in first-seen order.
    pub fn non_terminal_iter(&self) -> impl Iterator<Item = (usize, &String)> {
        self.symbols.iter().enumerate().filter_map(|(idx, s)| {
            if let Symbol::NonTerminal(name) = s {
                Some((idx, name))
            } else {
                None
            }
        })
    }

    /// Nonterminals that head at least one production, in first-seen order.
    pub fn defined_non_terminals(&self) -> Vec<usize> {
        let mut defined = vec![false; self.symbols.len()];
        for production in &self.productions {
            defined[production.left] = true;
        }
        (0..self.symbols.len()).filter(|&idx| defined[idx]).collect()
    }

    pub fn is_non_terminal(&self, index: usize) -> bool {
        self.symbols[index].is_non_terminal()
    }

    pub fn get_symbol_index(&self, name: &str) -> Option<usize> {
        self.symbol_table.get(name).cloned()
    }

    pub fn add_non_terminal(&mut self, name: &str) -> usize {
        let idx = self.symbols.len();
        self.symbols.push(Symbol::NonTerminal(name.to_string()));
        self.symbol_table.insert(name.to_string(), idx);
        idx
    }

    pub fn add_terminal(&mut self, name: String) -> usize {
        let idx = self.symbols.len();
        self.symbols.push(Symbol::Terminal(name.clone()));
        self.symbol_table.insert(name, idx);
        idx
    }

    pub fn add_production(&mut self, left: usize, right: Vec<usize>) {
        debug_assert!(self.is_non_terminal(left));
        debug_assert!(!right.is_empty());
        self.productions.push(Production::new(left, right));
    }

    pub fn productions_of(&self, left: usize) -> impl Iterator<Item = &Production> {
        self.productions.iter().filter(move |p| p.left == left)
    }

    pub fn get_symbol_name(&self, index: usize) -> &str {
        match &self.symbols[index] {
            Symbol::Epsilon => EPSILON,
            Symbol::NonTerminal(e) => e.as_str(),
            Symbol::Terminal(e) => e.as_str(),
        }
    }

    pub fn production_to_vec_str(&self, right: &[usize]) -> Vec<&str> {
        right.iter().map(|idx| self.get_symbol_name(*idx)).collect()
    }

    pub fn get_symbol_prime_name(&self, mut name: String) -> String {
        while self.symbol_table.contains_key(&name) {
            name.push('\'');
        }
        name
    }

    /// `name_0`, `name_1`, ...: the first one not taken yet.
    pub fn get_symbol_numbered_name(&self, name: &str) -> String {
        let mut n = 0;
        loop {
            let candidate = format!("{}_{}", name, n);
            if !self.symbol_table.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}
