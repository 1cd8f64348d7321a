//! Rule configuration for a game session.

use hotseat_core::Color;
use serde::{Deserialize, Serialize};

/// Knobs that change how a session plays.
///
/// Deserializes from a `[rules]` table; missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Color that makes the first move. Defaults to White.
    pub first_to_move: Color,
    /// Reject ordinary moves that leave the mover's own king attacked.
    ///
    /// Off by default: only castling looks at check, and a game ends when a
    /// king is actually captured.
    pub forbid_self_check: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        RuleConfig {
            first_to_move: Color::White,
            forbid_self_check: false,
        }
    }
}

impl RuleConfig {
    /// Returns a copy with a different first mover.
    pub fn with_first_to_move(mut self, color: Color) -> Self {
        self.first_to_move = color;
        self
    }

    /// Returns a copy with self-check enforcement switched on or off.
    pub fn with_forbid_self_check(mut self, forbid: bool) -> Self {
        self.forbid_self_check = forbid;
        self
    }
}
