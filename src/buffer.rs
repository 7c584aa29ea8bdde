//! Shared message-buffer plumbing: bounded formatting with ellipsis recovery.

/// Marker written into the tail of a truncated line.
pub const ELLIPSIS: &str = "...";

/// Line terminator every layout guarantees.
pub const LINE_TERM: char = '\n';

/// Truncates `s` so that it is exactly `cap` bytes, ending with `...\n`.
///
/// No-op when `s` already fits (but the terminator is still guaranteed).
/// `cap` values too small to hold the marker degrade to the marker alone,
/// clipped from the left. Truncation always lands on a char boundary.
pub fn ellipsize(s: &mut String, cap: usize) {
    if s.ends_with(LINE_TERM) {
        if s.len() <= cap {
            return;
        }
    } else if s.len() < cap {
        s.push(LINE_TERM);
        return;
    }

    let tail = ELLIPSIS.len() + 1;
    if cap <= tail {
        s.clear();
        s.push_str(&ELLIPSIS[ELLIPSIS.len() + 1 - cap.max(1)..]);
        s.push(LINE_TERM);
        s.truncate(cap);
        return;
    }

    let mut keep = cap - tail;
    while !s.is_char_boundary(keep) {
        keep -= 1;
    }
    s.truncate(keep);
    s.push_str(ELLIPSIS);
    // Pad back up if the char boundary cost us bytes, so the result is
    // exactly `cap` with the terminator last.
    while s.len() + 1 < cap {
        s.push('.');
    }
    s.push(LINE_TERM);
}

/// Truncates a raw (not yet line-terminated) message to `cap` bytes, ending
/// with the ellipsis marker. Used when a fixed message buffer size is
/// configured and call-site formatting overflows it.
pub fn clip_message(s: &mut String, cap: usize) {
    if s.len() <= cap {
        return;
    }
    if cap <= ELLIPSIS.len() {
        s.clear();
        s.push_str(&ELLIPSIS[..cap]);
        return;
    }
    let mut keep = cap - ELLIPSIS.len();
    while !s.is_char_boundary(keep) {
        keep -= 1;
    }
    s.truncate(keep);
    s.push_str(ELLIPSIS);
    while s.len() < cap {
        s.push('.');
    }
}
