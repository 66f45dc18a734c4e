extern crate wasm_bindgen;

use wasm_bindgen::prelude::*;

pub mod error;
pub mod grammar;
pub mod pipeline;
pub use error::{GrammarError, Result};
pub use grammar::Grammar;
pub use pipeline::{optimize, optimize_with, Options, OutputFormat, Stage};

#[wasm_bindgen]
pub fn optimize_to_json(grammar: &str) -> String {
    let options = Options {
        format: OutputFormat::Json,
        ..Options::default()
    };
    match optimize_with(grammar, &options) {
        Ok(json) => json,
        Err(e) => serde_json::json!({ "error": e.to_string() }).to_string(),
    }
}


#[cfg(test)]
mod parse_tests {
    use crate::grammar::{grammar::EPSILON_INDEX, Production, Symbol};
    use crate::GrammarError;

    #[test]
    fn simple_parse() {
        let g = crate::Grammar::parse("S -> a").unwrap();

        let s = g.symbol_table.get("S").unwrap().clone();
        let a = g.symbol_table.get("a").unwrap().clone();

        assert_eq!(g.get_symbol_name(s), "S");
        assert_eq!(g.get_symbol_name(a), "a");
        assert!(g.symbols[s].is_non_terminal());
        assert!(g.symbols[a].is_terminal());
        assert_eq!(g.start_symbol, Some(s));

        assert_eq!(g.productions, vec![Production::new(s, vec![a])]);
    }

    #[test]
    fn simple_parse_with_space_and_continuation() {
        let g = crate::Grammar::parse("  S -> a \n | b c").unwrap();

        let s = g.get_symbol_index("S").unwrap();
        let a = g.get_symbol_index("a").unwrap();
        let b = g.get_symbol_index("b").unwrap();
        let c = g.get_symbol_index("c").unwrap();

        assert_eq!(g.productions[0], Production::new(s, vec![a]));
        assert_eq!(g.productions[1], Production::new(s, vec![b, c]));
    }

    #[test]
    fn classification() {
        let g = crate::Grammar::parse("S -> Foo bar + ( ) >= Baz\nlower -> x").unwrap();

        for name in ["S", "Foo", "Baz", "lower"] {
            let idx = g.get_symbol_index(name).unwrap();
            assert!(g.symbols[idx].is_non_terminal(), "{} should be a nonterminal", name);
        }
        for name in ["bar", "+", "(", ")", ">=", "x"] {
            let idx = g.get_symbol_index(name).unwrap();
            assert!(g.symbols[idx].is_terminal(), "{} should be a terminal", name);
        }
    }

    #[test]
    fn lowercase_left_side_is_non_terminal_in_rights() {
        let g = crate::Grammar::parse("S -> expr\nexpr -> id").unwrap();

        let expr = g.get_symbol_index("expr").unwrap();
        assert_eq!(g.symbols[expr], Symbol::NonTerminal("expr".to_string()));
        assert_eq!(g.terminal_iter().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn epsilon_parse() {
        let g = crate::Grammar::parse("S -> a ε b | ε ε | ϵ").unwrap();

        let a = g.get_symbol_index("a").unwrap();
        let b = g.get_symbol_index("b").unwrap();

        let rights: Vec<&Vec<usize>> = g.productions.iter().map(|p| &p.right).collect();
        assert_eq!(rights, vec![&vec![a, b], &vec![EPSILON_INDEX], &vec![EPSILON_INDEX]]);
        assert_eq!(g.non_terminal_iter().count(), 1);
        assert_eq!(g.terminal_iter().count(), 2);
    }

    #[test]
    fn empty_alternatives_are_skipped() {
        let g = crate::Grammar::parse("S -> a | | b |\n|").unwrap();
        assert_eq!(g.productions.len(), 2);
    }

    #[test]
    fn duplicate_alternatives_are_kept() {
        let g = crate::Grammar::parse("S -> a | a").unwrap();
        assert_eq!(g.productions.len(), 2);
    }

    #[test]
    fn split_at_first_arrow() {
        let g = crate::Grammar::parse("S -> a -> b").unwrap();
        let arrow = g.get_symbol_index("->").unwrap();
        assert!(g.symbols[arrow].is_terminal());
        assert_eq!(g.productions[0].right.len(), 3);
    }

    #[test]
    fn empty_parse() {
        let g = crate::Grammar::parse("  \n  ").unwrap();
        assert!(g.productions.is_empty());
        assert_eq!(g.start_symbol, None);
    }

    #[test]
    fn start_symbol_is_first_left_side() {
        let g = crate::Grammar::parse("B -> b\nA -> B").unwrap();
        assert_eq!(g.start_symbol, g.get_symbol_index("B"));
    }

    #[test]
    fn missing_arrow_parse() {
        let e = crate::Grammar::parse("S -> a\nS a").unwrap_err();
        assert!(matches!(e, GrammarError::MissingArrow { line: 2, .. }));
    }

    #[test]
    fn missing_arrow_lenient_parse() {
        let g = crate::Grammar::parse_with("S -> a\nnot a rule\nS -> b", true).unwrap();
        assert_eq!(g.productions.len(), 2);
    }

    #[test]
    fn continuation_skipped_when_lenient() {
        let input = "S -> a\n  | b\n| c";
        let strict = crate::Grammar::parse(input).unwrap();
        assert_eq!(strict.productions.len(), 3);

        let lenient = crate::Grammar::parse_with(input, true).unwrap();
        assert_eq!(lenient.productions.len(), 1);
        assert_eq!(lenient.get_symbol_index("b"), None);

        let g = crate::Grammar::parse_with("| a b\nS -> a", true).unwrap();
        assert_eq!(g.productions.len(), 1);
    }

    #[test]
    fn no_left_parse() {
        let e = crate::Grammar::parse("-> a").unwrap_err();
        assert!(matches!(e, GrammarError::EmptyLeftSide { line: 1 }));
    }

    #[test]
    #[should_panic]
    fn no_previous_left_parse() {
        let _g = crate::Grammar::parse("| a b\n S -> a").unwrap();
    }

    #[test]
    fn left_contain_space() {
        let e = crate::Grammar::parse("S a S -> x").unwrap_err();
        assert!(matches!(e, GrammarError::InvalidLeftSide { line: 1, .. }));
    }

    #[test]
    fn epsilon_left_side() {
        let e = crate::Grammar::parse("S -> a\nε -> b").unwrap_err();
        assert!(matches!(e, GrammarError::InvalidLeftSide { line: 2, .. }));
    }

    #[test]
    fn error_message_names_line() {
        let e = crate::Grammar::parse("\n\nbroken").unwrap_err();
        assert_eq!(e.to_string(), "Line 3: expected \"->\" in `broken`");
    }
}
