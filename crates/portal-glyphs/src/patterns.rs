//! 5×7 block glyph patterns (7 lines tall, 5 chars wide).

/// Glyph height in base pixels.
pub const GLYPH_ROWS: usize = 7;
/// Glyph width in base pixels.
pub const GLYPH_COLS: usize = 5;

/// Digits 0-9.
pub const DIGITS: [[&str; 7]; 10] = [
    // 0
    [
        " ███ ",
        "█   █",
        "█  ██",
        "█ █ █",
        "██  █",
        "█   █",
        " ███ ",
    ],
    // 1
    [
        "  █  ",
        " ██  ",
        "  █  ",
        "  █  ",
        "  █  ",
        "  █  ",
        " ███ ",
    ],
    // 2
    [
        " ███ ",
        "█   █",
        "    █",
        "   █ ",
        "  █  ",
        " █   ",
        "█████",
    ],
    // 3
    [
        " ███ ",
        "█   █",
        "    █",
        "  ██ ",
        "    █",
        "█   █",
        " ███ ",
    ],
    // 4
    [
        "   █ ",
        "  ██ ",
        " █ █ ",
        "█  █ ",
        "█████",
        "   █ ",
        "   █ ",
    ],
    // 5
    [
        "█████",
        "█    ",
        "████ ",
        "    █",
        "    █",
        "█   █",
        " ███ ",
    ],
    // 6
    [
        " ███ ",
        "█    ",
        "████ ",
        "█   █",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // 7
    [
        "█████",
        "    █",
        "   █ ",
        "  █  ",
        " █   ",
        " █   ",
        " █   ",
    ],
    // 8
    [
        " ███ ",
        "█   █",
        "█   █",
        " ███ ",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // 9
    [
        " ███ ",
        "█   █",
        "█   █",
        " ████",
        "    █",
        "    █",
        " ███ ",
    ],
];

/// Letters A-Z.
pub const LETTERS: [[&str; 7]; 26] = [
    // A
    [
        " ███ ",
        "█   █",
        "█   █",
        "█████",
        "█   █",
        "█   █",
        "█   █",
    ],
    // B
    [
        "████ ",
        "█   █",
        "█   █",
        "████ ",
        "█   █",
        "█   █",
        "████ ",
    ],
    // C
    [
        " ███ ",
        "█   █",
        "█    ",
        "█    ",
        "█    ",
        "█   █",
        " ███ ",
    ],
    // D
    [
        "████ ",
        "█   █",
        "█   █",
        "█   █",
        "█   █",
        "█   █",
        "████ ",
    ],
    // E
    [
        "█████",
        "█    ",
        "█    ",
        "████ ",
        "█    ",
        "█    ",
        "█████",
    ],
    // F
    [
        "█████",
        "█    ",
        "█    ",
        "████ ",
        "█    ",
        "█    ",
        "█    ",
    ],
    // G
    [
        " ███ ",
        "█   █",
        "█    ",
        "█ ███",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // H
    [
        "█   █",
        "█   █",
        "█   █",
        "█████",
        "█   █",
        "█   █",
        "█   █",
    ],
    // I
    [
        " ███ ",
        "  █  ",
        "  █  ",
        "  █  ",
        "  █  ",
        "  █  ",
        " ███ ",
    ],
    // J
    [
        "  ███",
        "   █ ",
        "   █ ",
        "   █ ",
        "   █ ",
        "█  █ ",
        " ██  ",
    ],
    // K
    [
        "█   █",
        "█  █ ",
        "█ █  ",
        "██   ",
        "█ █  ",
        "█  █ ",
        "█   █",
    ],
    // L
    [
        "█    ",
        "█    ",
        "█    ",
        "█    ",
        "█    ",
        "█    ",
        "█████",
    ],
    // M
    [
        "█   █",
        "██ ██",
        "█ █ █",
        "█ █ █",
        "█   █",
        "█   █",
        "█   █",
    ],
    // N
    [
        "█   █",
        "██  █",
        "█ █ █",
        "█  ██",
        "█   █",
        "█   █",
        "█   █",
    ],
    // O
    [
        " ███ ",
        "█   █",
        "█   █",
        "█   █",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // P
    [
        "████ ",
        "█   █",
        "█   █",
        "████ ",
        "█    ",
        "█    ",
        "█    ",
    ],
    // Q
    [
        " ███ ",
        "█   █",
        "█   █",
        "█   █",
        "█ █ █",
        "█  █ ",
        " ██ █",
    ],
    // R
    [
        "████ ",
        "█   █",
        "█   █",
        "████ ",
        "█ █  ",
        "█  █ ",
        "█   █",
    ],
    // S
    [
        " ████",
        "█    ",
        "█    ",
        " ███ ",
        "    █",
        "    █",
        "████ ",
    ],
    // T
    [
        "█████",
        "  █  ",
        "  █  ",
        "  █  ",
        "  █  ",
        "  █  ",
        "  █  ",
    ],
    // U
    [
        "█   █",
        "█   █",
        "█   █",
        "█   █",
        "█   █",
        "█   █",
        " ███ ",
    ],
    // V
    [
        "█   █",
        "█   █",
        "█   █",
        "█   █",
        "█   █",
        " █ █ ",
        "  █  ",
    ],
    // W
    [
        "█   █",
        "█   █",
        "█   █",
        "█ █ █",
        "█ █ █",
        "██ ██",
        "█   █",
    ],
    // X
    [
        "█   █",
        "█   █",
        " █ █ ",
        "  █  ",
        " █ █ ",
        "█   █",
        "█   █",
    ],
    // Y
    [
        "█   █",
        "█   █",
        " █ █ ",
        "  █  ",
        "  █  ",
        "  █  ",
        "  █  ",
    ],
    // Z
    [
        "█████",
        "    █",
        "   █ ",
        "  █  ",
        " █   ",
        "█    ",
        "█████",
    ],
];

pub const SPACE: [&str; 7] = ["     ", "     ", "     ", "     ", "     ", "     ", "     "];

pub const BANG: [&str; 7] = [
    "  █  ",
    "  █  ",
    "  █  ",
    "  █  ",
    "  █  ",
    "     ",
    "  █  ",
];

pub const COLON: [&str; 7] = [
    "     ",
    "  █  ",
    "     ",
    "     ",
    "     ",
    "  █  ",
    "     ",
];

pub const PERIOD: [&str; 7] = [
    "     ",
    "     ",
    "     ",
    "     ",
    "     ",
    "  █  ",
    "  █  ",
];

pub const DASH: [&str; 7] = [
    "     ",
    "     ",
    "     ",
    "█████",
    "     ",
    "     ",
    "     ",
];

pub const PLUS: [&str; 7] = [
    "     ",
    "  █  ",
    "  █  ",
    "█████",
    "  █  ",
    "  █  ",
    "     ",
];

pub const STAR: [&str; 7] = [
    "     ",
    "█ █ █",
    " ███ ",
    "█████",
    " ███ ",
    "█ █ █",
    "     ",
];

pub const EQUALS: [&str; 7] = [
    "     ",
    "     ",
    "█████",
    "     ",
    "█████",
    "     ",
    "     ",
];

pub const LESS: [&str; 7] = [
    "   █ ",
    "  █  ",
    " █   ",
    "█    ",
    " █   ",
    "  █  ",
    "   █ ",
];

pub const GREATER: [&str; 7] = [
    " █   ",
    "  █  ",
    "   █ ",
    "    █",
    "   █ ",
    "  █  ",
    " █   ",
];

pub const SLASH: [&str; 7] = [
    "    █",
    "    █",
    "   █ ",
    "  █  ",
    " █   ",
    "█    ",
    "█    ",
];

pub const PIPE: [&str; 7] = [
    "  █  ",
    "  █  ",
    "  █  ",
    "  █  ",
    "  █  ",
    "  █  ",
    "  █  ",
];

pub const QUESTION: [&str; 7] = [
    " ███ ",
    "█   █",
    "    █",
    "   █ ",
    "  █  ",
    "     ",
    "  █  ",
];

pub const DIAMOND: [&str; 7] = [
    "  █  ",
    " ███ ",
    "█████",
    "█████",
    "█████",
    " ███ ",
    "  █  ",
];

/// Drawn for any character without a pattern of its own.
pub const FALLBACK: [&str; 7] = [
    "█████",
    "█   █",
    "█   █",
    "█   █",
    "█   █",
    "█   █",
    "█████",
];

/// Look up the pattern for a character. ASCII letters are folded to
/// uppercase; unknown characters get `None` (callers substitute
/// [`FALLBACK`]).
pub fn pattern(ch: char) -> Option<&'static [&'static str; 7]> {
    let ch = ch.to_ascii_uppercase();
    match ch {
        '0'..='9' => Some(&DIGITS[ch as usize - '0' as usize]),
        'A'..='Z' => Some(&LETTERS[ch as usize - 'A' as usize]),
        ' ' => Some(&SPACE),
        '!' => Some(&BANG),
        ':' => Some(&COLON),
        '.' => Some(&PERIOD),
        '-' => Some(&DASH),
        '+' => Some(&PLUS),
        '*' => Some(&STAR),
        '=' => Some(&EQUALS),
        '<' => Some(&LESS),
        '>' => Some(&GREATER),
        '/' => Some(&SLASH),
        '|' => Some(&PIPE),
        '?' => Some(&QUESTION),
        '◆' => Some(&DIAMOND),
        _ => None,
    }
}

/// Every character the cache rasterizes at init time.
pub const SUPPORTED: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 !:.-+*=<>/|?◆";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_supported_chars_have_patterns() {
        for ch in SUPPORTED.chars() {
            assert!(pattern(ch).is_some(), "no pattern for {ch:?}");
        }
    }

    #[test]
    fn test_patterns_are_well_formed() {
        for ch in SUPPORTED.chars() {
            let rows = pattern(ch).unwrap();
            for row in rows.iter() {
                assert_eq!(row.chars().count(), GLYPH_COLS, "bad row width for {ch:?}");
            }
        }
    }

    #[test]
    fn test_lowercase_folds_to_uppercase() {
        assert_eq!(pattern('x'), pattern('X'));
        assert!(pattern('λ').is_none());
    }
}
