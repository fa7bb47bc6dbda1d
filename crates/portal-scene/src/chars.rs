//! Character and message constants for the effect entities.

use portal_core::{CYAN, MAGENTA, Rgb, YELLOW};

/// Alert messages scattered across the grid planes.
pub const ALERT_MESSAGES: &[&str] = &[
    "CRITICAL ERROR",
    "ACCESS DENIED",
    "SYSTEM FAILURE",
    "DATA CORRUPT",
    "CONNECTION LOST",
    "BREACH DETECTED",
    "WARNING",
    "ALERT",
    "FIREWALL DOWN",
    "UNAUTHORIZED",
    "TIMEOUT",
    "FATAL ERROR",
    "!",
    "!!",
    "ERROR CODE: 0X8F4A",
    "BUFFER OVERFLOW",
    "STACK TRACE",
    "SEGFAULT",
    "CORE DUMPED",
];

/// Characters used by the falling glyph streams.
pub const STREAM_CHARS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'R', 'S', 'T', 'V',
    'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '*', '+', '-', '=',
    '<', '>', '/', '|', '?',
];

/// Fixed label palette for plane messages.
pub const LABEL_COLORS: &[Rgb] = &[CYAN, MAGENTA, YELLOW];
