//! Text art for the two game modes.

use crate::game::MAX_MISTAKES;

const ARROW: &str = "--->";

/// Gallows with one more body part per mistake.
pub(in crate::ui) fn gallows_lines(mistakes: u32) -> Vec<String> {
    let part = |n: u32, c: char| if mistakes >= n { c } else { ' ' };

    vec![
        "  +---+".to_string(),
        "  |   |".to_string(),
        format!("  {}   |", part(1, 'O')),
        format!(" {}{}{}  |", part(3, '/'), part(2, '|'), part(4, '\\')),
        format!(" {} {}  |", part(5, '/'), part(6, '\\')),
        "      |".to_string(),
        "=========".to_string(),
    ]
}

/// A figure on the right and an arrow that moves towards it per mistake.
pub(in crate::ui) fn arrow_lines(mistakes: u32) -> Vec<String> {
    let mistakes = mistakes.min(MAX_MISTAKES) as usize;
    let track = MAX_MISTAKES as usize * 3 + ARROW.len() + 1;
    let head = if mistakes >= MAX_MISTAKES as usize { 'X' } else { 'O' };

    let arrow = format!("{}{}", " ".repeat(mistakes * 3), ARROW);

    vec![
        format!("{} {}", " ".repeat(track), head),
        format!("{:<track$}/|\\", arrow),
        format!("{} |", " ".repeat(track)),
        format!("{}/ \\", " ".repeat(track)),
    ]
}
