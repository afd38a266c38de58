//! Input adapter: human-typed rune levels and stone vector strings.
//!
//! Runes are given as whitespace- or comma-separated level caps and are
//! auto-labelled `R1..Rn`. Stones are given as sequences of
//! `(dx, dy, boost)` triples, one stone per top-level comma (commas
//! inside parentheses separate triple components), auto-labelled
//! `K1..Kn`.

use crate::board::{Rune, Stone, StoneVector};

/// Parses rune level caps from a string like `"10 6 6"`.
///
/// Tokens that are not plain positive integers are skipped.
pub fn parse_runes(input: &str) -> Vec<Rune> {
    input
        .replace(',', " ")
        .split_whitespace()
        .filter_map(|token| token.parse::<u32>().ok())
        .enumerate()
        .map(|(i, max_level)| Rune::new(format!("R{}", i + 1), max_level))
        .collect()
}

/// Splits on commas that sit outside parentheses.
fn split_stone_chunks(input: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;

    for ch in input.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth -= 1;
                current.push(ch);
            }
            ',' if depth == 0 => {
                chunks.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Parses one `(dx, dy, boost)` group body.
fn parse_vector(body: &str) -> Result<StoneVector, String> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected (dx, dy, boost), got ({body})"));
    }
    let dx: i32 = parts[0]
        .parse()
        .map_err(|_| format!("invalid dx in ({body})"))?;
    let dy: i32 = parts[1]
        .parse()
        .map_err(|_| format!("invalid dy in ({body})"))?;
    let boost: u32 = parts[2]
        .parse()
        .map_err(|_| format!("invalid boost in ({body}), must be a non-negative integer"))?;
    Ok(StoneVector::new(dx, dy, boost))
}

/// Parses stone definitions from a string like
/// `"(1, 0, 2) (0, 1, 3), (2, 2, 1)"` (two stones).
///
/// Chunks containing no vectors are skipped; a malformed triple is an
/// error.
pub fn parse_stones(input: &str) -> Result<Vec<Stone>, String> {
    let mut stones = Vec::new();

    for chunk in split_stone_chunks(input) {
        let mut vectors = Vec::new();
        let mut rest = chunk.as_str();

        while let Some(open) = rest.find('(') {
            let after = &rest[open + 1..];
            let close = after
                .find(')')
                .ok_or_else(|| format!("unclosed parenthesis in \"{}\"", chunk.trim()))?;
            vectors.push(parse_vector(&after[..close])?);
            rest = &after[close + 1..];
        }

        if !vectors.is_empty() {
            stones.push(Stone::new(format!("K{}", stones.len() + 1), vectors));
        }
    }

    Ok(stones)
}

/// Parses both collections at once.
pub fn parse_input(
    rune_input: &str,
    stone_input: &str,
) -> Result<(Vec<Rune>, Vec<Stone>), String> {
    let runes = parse_runes(rune_input);
    let stones = parse_stones(stone_input)?;
    Ok((runes, stones))
}
