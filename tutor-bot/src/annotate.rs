//! Reply annotation: prepends a banner when the backend marks an answer as right or wrong.

use crate::texts::{CORRECT_BANNER, INCORRECT_BANNER};

/// Marker the backend puts in replies to a correct quiz or challenge answer.
pub const CORRECT_MARKER: &str = "✅";
/// Marker the backend puts in replies to a wrong answer.
pub const INCORRECT_MARKER: &str = "❌";

/// Returns `reply` with the matching banner in front, or unchanged when no marker is present.
/// The correct marker is checked first.
pub fn annotate_reply(reply: &str) -> String {
    if reply.contains(CORRECT_MARKER) {
        format!("{}{}", CORRECT_BANNER, reply)
    } else if reply.contains(INCORRECT_MARKER) {
        format!("{}{}", INCORRECT_BANNER, reply)
    } else {
        reply.to_string()
    }
}
