//! Bounded context windows around entity offsets

/// Truncation marker added when the window does not reach a text boundary.
const ELLIPSIS: &str = "...";

/// Extract a bounded substring around a span of `length` characters at
/// `offset`, including up to `window_radius` characters on each side.
///
/// Offsets are character positions, matching the vendor's span offsets.
/// The window is clamped to the text boundaries and trimmed of surrounding
/// whitespace; `...` is prepended or appended where the window was cut
/// short of a boundary. Out-of-range offsets are clamped, never an error.
///
/// # Examples
///
/// ```
/// use clinex_extractor::extract_context;
///
/// assert_eq!(extract_context("hello world", 0, 5, 100), "hello world");
/// assert_eq!(extract_context("0123456789abcdefghij", 10, 1, 3), "...789abcd...");
/// assert_eq!(extract_context("", 5, 3, 10), "");
/// ```
pub fn extract_context(text: &str, offset: usize, length: usize, window_radius: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();

    let start = offset.saturating_sub(window_radius).min(total);
    let end = offset
        .saturating_add(length)
        .saturating_add(window_radius)
        .min(total);

    let window: String = chars[start..end].iter().collect();
    let mut context = window.trim().to_string();

    if start > 0 {
        context.insert_str(0, ELLIPSIS);
    }
    if end < total {
        context.push_str(ELLIPSIS);
    }

    context
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: never panics and output is bounded by input plus markers
        #[test]
        fn test_never_panics_on_arbitrary_bounds(
            text in ".{0,200}",
            offset in 0usize..500,
            length in 0usize..500,
            radius in 0usize..500,
        ) {
            let context = extract_context(&text, offset, length, radius);
            prop_assert!(context.chars().count() <= text.chars().count() + 2 * ELLIPSIS.len());
        }

        /// Property: a window with maximal radius is the trimmed full text
        #[test]
        fn test_full_radius_covers_text(text in ".{0,200}", offset in 0usize..200) {
            let context = extract_context(&text, offset, 0, usize::MAX);
            prop_assert_eq!(context, text.trim().to_string());
        }

        /// Property: deterministic for identical inputs
        #[test]
        fn test_deterministic(text in ".{0,100}", offset in 0usize..100, length in 0usize..50) {
            let a = extract_context(&text, offset, length, 10);
            let b = extract_context(&text, offset, length, 10);
            prop_assert_eq!(a, b);
        }
    }
}
