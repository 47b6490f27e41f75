//! End-to-end pipeline tests
//!
//! Exercises expression text through both execution paths and the UI
//! support layers together.

use proptest::prelude::*;
use reckon_foundation::format_precise;
use reckon_language::{Calculator, Compiler, Scanner, Vm, annotate, suggest};

// =============================================================================
// Dual-Path Agreement
// =============================================================================

/// For variable-free expressions both execution paths must agree bit for
/// bit.
fn assert_paths_agree(input: &str) {
    let mut calculator = Calculator::new();
    let direct = calculator.evaluate(input);
    assert!(calculator.is_valid(), "direct path rejected {input:?}");

    let mut compiler = Compiler::new();
    let instructions = compiler.compile(input);
    assert!(compiler.is_valid(), "compiler rejected {input:?}");
    let executed = Vm::new().execute(&instructions).expect("execution failed");

    assert_eq!(direct.to_bits(), executed.to_bits(), "for {input:?}");
}

#[test]
fn paths_agree_on_representative_expressions() {
    for input in [
        "42",
        "1 + 2 * 3",
        "((1+2) * (3+4)) / 7",
        "2^3*2 - 10%3",
        "-0x0F + 0xFF",
        "sqrt(pow(3, 4))",
        "atan2(0, -1)",
        "clamp(15, 0, 10) + sign(-9)",
        "PI * 2 - TAU",
        "1+1; 2+2; 3+3",
    ] {
        assert_paths_agree(input);
    }
}

proptest! {
    #[test]
    fn paths_agree_on_random_arithmetic(
        a in -1000i32..1000,
        b in -1000i32..1000,
        c in 1i32..100,
        op in prop::sample::select(vec!["+", "-", "*"]),
    ) {
        assert_paths_agree(&format!("{a} {op} {b} * {c}"));
        assert_paths_agree(&format!("({a} {op} {b}) / {c}"));
    }

    #[test]
    fn formatted_results_parse_back(a in -1e6f64..1e6, b in 1e-3f64..1e3) {
        let mut calculator = Calculator::new();
        let value = calculator.evaluate(&format!("{a} / {b}"));
        prop_assert!(calculator.is_valid());
        let text = format_precise(value);
        prop_assert_eq!(text.parse::<f64>().unwrap().to_bits(), value.to_bits());
    }
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn session_accumulation_across_lines() {
    let mut compiler = Compiler::new();
    let mut vm = Vm::new();

    for (line, expected) in [
        ("x = x + 1", 1.0),
        ("x = x + 1", 2.0),
        ("y = pow(2, x)", 4.0),
        ("y - x", 2.0),
    ] {
        let instructions = compiler.compile(line);
        assert!(compiler.is_valid(), "compiler rejected {line:?}");
        let value = vm.execute(&instructions).expect("execution failed");
        assert_eq!(value, expected, "for {line:?}");
    }
}

#[test]
fn statement_separator_behaves_like_separate_lines() {
    let mut compiler = Compiler::new();
    let mut vm = Vm::new();
    let instructions = compiler.compile("x = 2; x + 4");
    assert_eq!(vm.execute(&instructions).unwrap(), 6.0);

    let mut other = Vm::new();
    let first = compiler.compile("x = 2");
    other.execute(&first).unwrap();
    let second = compiler.compile("x + 4");
    assert_eq!(other.execute(&second).unwrap(), 6.0);
}

// =============================================================================
// UI Support
// =============================================================================

#[test]
fn hint_pairs_match_across_the_sequence() {
    let mut tokens = Scanner::scan("max((1+2), (3))");
    annotate(&mut tokens);

    let mut pairs: Vec<(usize, u32)> = tokens
        .iter()
        .enumerate()
        .filter_map(|(i, t)| t.pair.map(|p| (i, p)))
        .collect();
    pairs.sort_by_key(|&(_, p)| p);

    // Three pairs, each id appearing on exactly two tokens.
    assert_eq!(pairs.len(), 6);
    for chunk in pairs.chunks(2) {
        assert_eq!(chunk[0].1, chunk[1].1);
    }
}

#[test]
fn suggestions_cover_functions_and_constants() {
    let results = suggest("s");
    assert!(results.contains(&"sin".to_string()));
    assert!(results.contains(&"sqrt".to_string()));

    let results = suggest("t");
    assert!(results.contains(&"tan".to_string()));
    assert!(results.contains(&"TAU".to_string()));
}

#[test]
fn suggestions_shortest_first() {
    let results = suggest("c");
    let lengths: Vec<usize> = results.iter().map(String::len).collect();
    let mut sorted = lengths.clone();
    sorted.sort_unstable();
    assert_eq!(lengths, sorted);
}

#[test]
fn retained_tokens_describe_the_last_input() {
    let mut calculator = Calculator::new();
    calculator.evaluate("(1 + 2)");
    let tokens = calculator.last_tokens();
    assert_eq!(tokens.first().map(|t| t.text.as_str()), Some("("));
    assert_eq!(tokens.last().map(|t| t.text.as_str()), Some(")"));
    assert_eq!(tokens.first().and_then(|t| t.pair), tokens.last().and_then(|t| t.pair));
}
