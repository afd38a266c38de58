//! Integer offset rotation.

/// Rotates the offset `(dx, dy)` clockwise by `steps` quarter turns.
///
/// A single quarter turn maps `(dx, dy)` to `(dy, -dx)`; `steps` is taken
/// modulo 4, so `rotate_cw(dx, dy, 4) == (dx, dy)`.
pub fn rotate_cw(dx: i32, dy: i32, steps: u8) -> (i32, i32) {
    let (mut dx, mut dy) = (dx, dy);
    for _ in 0..steps % 4 {
        (dx, dy) = (dy, -dx);
    }
    (dx, dy)
}
