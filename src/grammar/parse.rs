use log::{debug, warn};

use super::grammar::{concat, EPSILON_INDEX};
use crate::{error::GrammarError, Grammar};

/// Operator tokens that are terminals whatever else the naming rule says.
const OPERATOR_TERMINALS: [&str; 18] = [
    ":", ";", ",", "[", "]", "(", ")", "+", "-", "*", "/", "%", "=", "!=", ">", "<", ">=", "<=",
];

fn is_non_terminal_name(name: &str) -> bool {
    if OPERATOR_TERMINALS.contains(&name) {
        return false;
    }
    name.chars().next().map_or(false, |c| c.is_uppercase())
}

impl Grammar {
    pub fn parse(grammar: &str) -> Result<Self, GrammarError> {
        Self::parse_with(grammar, false)
    }

    /// With `lenient` set, lines without `->` are skipped instead of
    /// rejected. That includes `|` continuation lines, which are only
    /// merged into the previous rule in strict mode.
    pub fn parse_with(grammar: &str, lenient: bool) -> Result<Self, GrammarError> {
        let mut g = Self::new();

        let mut raw_productions: Vec<(usize, &str)> = Vec::new();

        let mut previous_left: Option<usize> = None;
        for (i, line) in grammar.lines().enumerate() {
            let line_no = i + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let (left, rights): (usize, &str) = if let Some((left_str, rights)) =
                line.split_once("->")
            {
                let left_str = left_str.trim();
                if left_str.is_empty() {
                    return Err(GrammarError::EmptyLeftSide { line: line_no });
                } else if left_str.split_whitespace().count() != 1
                    || g.get_symbol_index(left_str) == Some(EPSILON_INDEX)
                {
                    return Err(GrammarError::InvalidLeftSide {
                        line: line_no,
                        left: left_str.to_string(),
                    });
                }
                let left = match g.get_symbol_index(left_str) {
                    Some(idx) => idx,
                    None => g.add_non_terminal(left_str),
                };
                (left, rights)
            } else if let Some(rights) = line.strip_prefix('|').filter(|_| !lenient) {
                match previous_left {
                    Some(idx) => (idx, rights),
                    None => return Err(GrammarError::MissingPreviousLeft { line: line_no }),
                }
            } else if lenient {
                warn!("line {}: no \"->\" in `{}`, skipped", line_no, line);
                continue;
            } else {
                return Err(GrammarError::MissingArrow {
                    line: line_no,
                    text: line.to_string(),
                });
            };

            previous_left = Some(left);

            raw_productions.push((left, rights));
        }

        for (left, rights) in raw_productions {
            for right in rights.split('|') {
                let symbols: Vec<usize> = right
                    .split_whitespace()
                    .map(|s| {
                        if let Some(idx) = g.get_symbol_index(s) {
                            idx
                        } else if is_non_terminal_name(s) {
                            g.add_non_terminal(s)
                        } else {
                            g.add_terminal(s.to_string())
                        }
                    })
                    .collect();
                if symbols.is_empty() {
                    continue;
                }
                g.add_production(left, concat(&symbols, &[]));
            }
        }

        let start = g.non_terminal_iter().next().map(|(idx, _)| idx);
        g.start_symbol = start;

        debug!(
            "parsed {} productions, {} nonterminals, {} terminals",
            g.productions.len(),
            g.non_terminal_iter().count(),
            g.terminal_iter().count()
        );

        Ok(g)
    }
}
