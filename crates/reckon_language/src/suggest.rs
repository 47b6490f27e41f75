//! Prefix search over the builtin registries for autocompletion.

use crate::{constants, functions};

/// Returns completion candidates for the given prefix.
///
/// Function names match case-sensitively; constant names match
/// case-insensitively (upper-cased). Functions come first, then
/// constants, and the combined list is stably sorted by ascending
/// length so shorter completions lead.
#[must_use]
pub fn suggest(prefix: &str) -> Vec<String> {
    let upper = prefix.to_uppercase();

    let mut candidates: Vec<String> = functions::names()
        .filter(|name| name.starts_with(prefix))
        .map(str::to_string)
        .collect();
    candidates.extend(
        constants::names()
            .filter(|name| name.starts_with(&upper))
            .map(str::to_string),
    );

    candidates.sort_by_key(String::len);
    candidates
}
