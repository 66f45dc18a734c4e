use std::borrow::Cow;

use crowbook_text_processing::escape;
use serde::Serialize;

use super::{Grammar, EPSILON};

#[derive(Debug, Clone, Serialize)]
pub struct ProductionOutput<'a> {
    pub left: &'a str,
    pub rights: Vec<Vec<&'a str>>,
}

impl ProductionOutput<'_> {
    pub fn to_plaintext(&self) -> String {
        let rights = self
            .rights
            .iter()
            .map(|right| right.join(" "))
            .collect::<Vec<_>>()
            .join(" | ");
        format!("{} -> {}", self.left, rights)
    }

    /// One `array` row: left side, arrow, then the alternatives separated
    /// by `\mid`.
    pub fn to_latex(&self) -> String {
        let mut row = format!("{} &\\rightarrow& ", escape::tex(self.left));
        for (i, right) in self.rights.iter().enumerate() {
            if i > 0 {
                row.push_str(" \\mid ");
            }
            let symbols: Vec<Cow<str>> = right.iter().map(|s| latex_symbol(s)).collect();
            row.push_str(&symbols.join("\\;"));
        }
        row
    }
}

fn latex_symbol(name: &str) -> Cow<str> {
    if name == EPSILON {
        Cow::Borrowed("\\epsilon")
    } else {
        escape::tex(name)
    }
}

#[derive(Debug, Serialize)]
pub struct ProductionOutputVec<'a> {
    productions: Vec<ProductionOutput<'a>>,
}

impl ProductionOutputVec<'_> {
    /// One `LHS -> alt | alt` line per left side.
    pub fn to_plaintext(&self) -> String {
        self.productions
            .iter()
            .map(|s| s.to_plaintext())
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn to_latex(&self) -> String {
        let rows = self
            .productions
            .iter()
            .map(|s| s.to_latex())
            .collect::<Vec<String>>()
            .join("\\\\\n");
        format!("\\[\\begin{{array}}{{cll}}\n{}\n\\end{{array}}\\]", rows)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Grammar {
    /// Productions grouped by left side, left sides sorted, alternatives in
    /// production order.
    pub fn to_production_output_vec(&self) -> ProductionOutputVec {
        let mut productions: Vec<ProductionOutput> = self
            .defined_non_terminals()
            .into_iter()
            .map(|left| ProductionOutput {
                left: self.get_symbol_name(left),
                rights: self
                    .productions_of(left)
                    .map(|p| self.production_to_vec_str(&p.right))
                    .collect(),
            })
            .collect();
        productions.sort_by(|a, b| a.left.cmp(b.left));
        ProductionOutputVec { productions }
    }
}
