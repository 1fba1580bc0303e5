//! Stack growth for the recursive parser and evaluator.
//!
//! Nested parentheses, deeply chained `ELSE IF`s and recursive modules all
//! recurse on the native stack. Call sites wrap the recursive step in
//! [`ensure_sufficient_stack`], which grows the stack on demand instead of
//! letting the process abort. On wasm the call is a passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment.
const GROW_BY: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROW_BY, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nest(depth: u32) -> u32 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    #[test]
    fn passes_through_result() {
        let r: Result<u8, String> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(r, Ok(7));
    }

    #[test]
    fn survives_deep_nesting() {
        assert_eq!(nest(200_000), 200_000);
    }
}
