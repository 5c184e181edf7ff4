//! Pixel-font digit rendering.
//!
//! Each decimal digit is a fixed set of line segments on a 12x20 grid,
//! stroked instead of relying on whatever font the host terminal picked.
//! The tables are data; [`draw_number`] is the only entry point drawers use.

use crate::surface::{Ink, Segment, StripSurface};

/// Horizontal distance between the origins of adjacent digits.
pub const GLYPH_ADVANCE: i32 = 8;

const fn seg(x1: i32, y1: i32, x2: i32, y2: i32) -> Segment {
    Segment { x1, y1, x2, y2 }
}

// Strokes wind clockwise from the top bar, one segment per straight run.
//
//  # # #
//  #   #
//  #   #
//  #   #
//  # # #
const ZERO: [Segment; 4] = [
    seg(3, 6, 9, 6),
    seg(8, 7, 8, 13),
    seg(9, 14, 3, 14),
    seg(4, 13, 4, 7),
];

//    #
//  # #
//    #
//    #
//  # # #
const ONE: [Segment; 3] = [seg(3, 8, 5, 8), seg(6, 5, 6, 13), seg(3, 14, 9, 14)];

//  # # #
//      #
//  # # #
//  #
//  # # #
const TWO: [Segment; 5] = [
    seg(3, 6, 9, 6),
    seg(8, 7, 8, 9),
    seg(9, 10, 3, 10),
    seg(4, 11, 4, 13),
    seg(3, 14, 9, 14),
];

//  # # #
//      #
//  # # #
//      #
//  # # #
const THREE: [Segment; 4] = [
    seg(3, 6, 9, 6),
    seg(8, 7, 8, 13),
    seg(3, 10, 7, 10),
    seg(3, 14, 9, 14),
];

//  #   #
//  #   #
//  # # #
//      #
//      #
const FOUR: [Segment; 3] = [seg(4, 5, 4, 11), seg(5, 10, 7, 10), seg(8, 5, 8, 15)];

//  # # #
//  #
//  # # #
//      #
//  # # #
const FIVE: [Segment; 5] = [
    seg(3, 6, 9, 6),
    seg(4, 7, 4, 9),
    seg(9, 10, 3, 10),
    seg(8, 11, 8, 13),
    seg(3, 14, 9, 14),
];

//  # # #
//  #
//  # # #
//  #   #
//  # # #
const SIX: [Segment; 5] = [
    seg(3, 6, 9, 6),
    seg(4, 7, 4, 15),
    seg(5, 10, 7, 10),
    seg(5, 14, 7, 14),
    seg(8, 9, 8, 15),
];

//  # # #
//      #
//      #
//      #
//      #
const SEVEN: [Segment; 2] = [seg(3, 6, 9, 6), seg(8, 7, 8, 15)];

//  # # #
//  #   #
//  # # #
//  #   #
//  # # #
const EIGHT: [Segment; 5] = [
    seg(3, 6, 9, 6),
    seg(8, 7, 8, 13),
    seg(9, 14, 3, 14),
    seg(4, 13, 4, 7),
    seg(5, 10, 7, 10),
];

//  # # #
//  #   #
//  # # #
//      #
//  # # #
const NINE: [Segment; 5] = [
    seg(3, 6, 9, 6),
    seg(8, 7, 8, 15),
    seg(4, 7, 4, 11),
    seg(5, 10, 7, 10),
    seg(3, 14, 7, 14),
];

/// Segment table for a decimal digit character, `None` for anything else.
pub fn digit_segments(digit: char) -> Option<&'static [Segment]> {
    match digit {
        '0' => Some(&ZERO),
        '1' => Some(&ONE),
        '2' => Some(&TWO),
        '3' => Some(&THREE),
        '4' => Some(&FOUR),
        '5' => Some(&FIVE),
        '6' => Some(&SIX),
        '7' => Some(&SEVEN),
        '8' => Some(&EIGHT),
        '9' => Some(&NINE),
        _ => None,
    }
}

/// Stroke one digit with its grid origin at `(dx, dy)`.
///
/// A non-digit character is a programming error: upstream zero-padding only
/// ever produces `'0'..='9'`. Debug builds assert; release builds skip it.
pub fn draw_digit(surface: &mut StripSurface, digit: char, dx: i32, dy: i32, ink: Ink) {
    let Some(segments) = digit_segments(digit) else {
        debug_assert!(false, "glyph table has no entry for {digit:?}");
        return;
    };
    let shifted = segments.iter().map(|s| s.offset(dx, dy)).collect();
    surface.stroke_segments(shifted, ink);
}

/// Stroke a run of digits left to right starting at `(x, y)`.
pub fn draw_number(surface: &mut StripSurface, text: &str, x: i32, y: i32, ink: Ink) {
    for (i, digit) in text.chars().enumerate() {
        draw_digit(surface, digit, x + i as i32 * GLYPH_ADVANCE, y, ink);
    }
}
