//! Bracket-pair and depth annotation for UI highlighting.
//!
//! A UI-only pass over a scanned token list: every token learns the
//! nesting level of its enclosing parentheses, and each open/close pair
//! shares one id unique across the whole sequence, assigned in
//! left-to-right, depth-ascending order. The pipeline itself never reads
//! these annotations.

use crate::token::{Token, TokenKind};

/// Annotates `depth` and `pair` on every token in place.
pub fn annotate(tokens: &mut [Token]) {
    let mut depth = 0i64;
    let mut max_depth = 0i64;

    for token in tokens.iter_mut() {
        match token.kind {
            TokenKind::OpenParen => {
                depth += 1;
                max_depth = max_depth.max(depth);
                token.depth = clamp(depth);
            }
            TokenKind::CloseParen => {
                token.depth = clamp(depth);
                depth -= 1;
            }
            _ => token.depth = clamp(depth),
        }
    }

    let mut next_pair = 0u32;
    for level in 1..=max_depth {
        let level = clamp(level);
        let mut open: Option<usize> = None;
        for index in 0..tokens.len() {
            let token = &tokens[index];
            if token.depth != level {
                continue;
            }
            match token.kind {
                TokenKind::OpenParen => open = Some(index),
                TokenKind::CloseParen => {
                    if let Some(open_index) = open.take() {
                        tokens[open_index].pair = Some(next_pair);
                        tokens[index].pair = Some(next_pair);
                        next_pair += 1;
                    }
                }
                _ => {}
            }
        }
    }
}

/// Mismatched input can drive the running depth negative; the annotation
/// floor is zero.
fn clamp(depth: i64) -> u32 {
    u32::try_from(depth).unwrap_or(0)
}
