//! No-immediate-repeat rejection sampling.

use tracing::warn;

/// Default cap on redraws before a repeat is accepted.
pub const DEFAULT_MAX_RETRIES: u32 = 64;

/// Draw from `generate` until the result differs from `previous`.
///
/// After `max_retries` redraws the last candidate is accepted even if it
/// repeats, so a degenerate generator can't hang the session.
pub fn pick_distinct<T, F>(previous: Option<&T>, max_retries: u32, mut generate: F) -> T
where
    T: PartialEq,
    F: FnMut() -> T,
{
    let mut candidate = generate();
    let Some(previous) = previous else {
        return candidate;
    };

    let mut retries = 0;
    while candidate == *previous {
        if retries >= max_retries {
            warn!(retries, "accepting a repeated prompt after exhausting retries");
            break;
        }
        candidate = generate();
        retries += 1;
    }
    candidate
}
