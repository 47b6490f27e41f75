//! Builtin function registry.
//!
//! A process-wide, read-only mapping from lowercase name to a fixed-arity
//! pure numeric callable. Built once at first use; no mutation API.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// A builtin function: fixed arity plus a pure numeric callable.
///
/// The callable receives exactly `arity` arguments; arity checking
/// happens in the evaluator and compiler before invocation.
#[derive(Clone, Copy)]
pub struct FunctionDef {
    /// The number of arguments the function requires.
    pub arity: usize,
    /// The callable itself.
    pub eval: fn(&[f64]) -> f64,
}

fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

static FUNCTIONS: LazyLock<BTreeMap<&'static str, FunctionDef>> = LazyLock::new(|| {
    let mut table: BTreeMap<&'static str, FunctionDef> = BTreeMap::new();
    let mut def = |name, arity, eval| {
        table.insert(name, FunctionDef { arity, eval });
    };

    def("abs", 1, |a| a[0].abs());
    def("acos", 1, |a| a[0].acos());
    def("asin", 1, |a| a[0].asin());
    def("atan", 1, |a| a[0].atan());
    def("atan2", 2, |a| a[0].atan2(a[1]));
    def("cbrt", 1, |a| a[0].cbrt());
    def("ceil", 1, |a| a[0].ceil());
    def("clamp", 3, |a| a[0].max(a[1]).min(a[2]));
    def("cos", 1, |a| a[0].cos());
    def("cosh", 1, |a| a[0].cosh());
    def("exp", 1, |a| a[0].exp());
    def("floor", 1, |a| a[0].floor());
    def("log", 1, |a| a[0].ln());
    def("log10", 1, |a| a[0].log10());
    def("log2", 1, |a| a[0].log2());
    def("max", 2, |a| a[0].max(a[1]));
    def("min", 2, |a| a[0].min(a[1]));
    def("pow", 2, |a| a[0].powf(a[1]));
    def("round", 1, |a| a[0].round());
    def("sign", 1, |a| sign(a[0]));
    def("sin", 1, |a| a[0].sin());
    def("sinh", 1, |a| a[0].sinh());
    def("sqrt", 1, |a| a[0].sqrt());
    def("tan", 1, |a| a[0].tan());
    def("tanh", 1, |a| a[0].tanh());
    def("trunc", 1, |a| a[0].trunc());

    table
});

/// Returns true if a function with the given name is registered.
///
/// Lookup is case-sensitive; builtin names are all lowercase.
#[must_use]
pub fn exists(name: &str) -> bool {
    FUNCTIONS.contains_key(name)
}

/// Looks up a function definition by name.
#[must_use]
pub fn get(name: &str) -> Option<FunctionDef> {
    FUNCTIONS.get(name).copied()
}

/// Returns all registered function names in sorted order.
pub fn names() -> impl Iterator<Item = &'static str> {
    FUNCTIONS.keys().copied()
}
