//! Fitting card text into a bounded box.
//!
//! Width is measured through a caller-supplied function, so the GUI can pass
//! font metrics and tests can count characters.

/// Horizontal space kept free inside a card box.
pub const BOX_MARGIN: f32 = 20.0;
/// One arrow-key or wheel notch.
pub const SCROLL_STEP: f32 = 10.0;

/// Packs whitespace-separated words into lines no wider than `max_width - BOX_MARGIN`.
///
/// A single word wider than the box still gets a line of its own.
pub fn wrap_lines(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let limit = max_width - BOX_MARGIN;
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if measure(&candidate) <= limit || current.is_empty() {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Vertical offset that centres `content_height` in `box_height`, or pins the
/// text to the top and applies `scroll` when it overflows.
pub fn text_start_offset(content_height: f32, box_height: f32, scroll: f32) -> f32 {
    if content_height < box_height {
        (box_height - content_height) / 2.0 - scroll
    } else {
        -scroll
    }
}

pub fn max_scroll(content_height: f32, viewport_height: f32) -> f32 {
    (content_height - viewport_height).max(0.0)
}

/// Moves `offset` by `delta`, staying within `0..=max`.
pub fn clamp_scroll(offset: f32, delta: f32, max: f32) -> f32 {
    (offset + delta).clamp(0.0, max.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn test_wrap_lines_respects_margin() {
        // 30 wide minus the 20 margin leaves 10 characters per line
        let lines = wrap_lines("the quick brown fox jumps", 30.0, chars);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
        assert!(lines.iter().all(|l| chars(l) <= 10.0));
    }

    #[test]
    fn test_wrap_lines_long_word_and_blank() {
        assert_eq!(
            wrap_lines("supercalifragilistic ok", 25.0, chars),
            vec!["supercalifragilistic", "ok"]
        );
        assert!(wrap_lines("   ", 100.0, chars).is_empty());
    }

    #[test]
    fn test_text_start_offset() {
        assert_eq!(text_start_offset(40.0, 200.0, 0.0), 80.0);
        assert_eq!(text_start_offset(300.0, 200.0, 30.0), -30.0);
    }

    #[test]
    fn test_clamp_scroll() {
        let max = max_scroll(500.0, 350.0);
        assert_eq!(max, 150.0);
        assert_eq!(clamp_scroll(0.0, -SCROLL_STEP, max), 0.0);
        assert_eq!(clamp_scroll(145.0, SCROLL_STEP, max), 150.0);
        assert_eq!(clamp_scroll(20.0, SCROLL_STEP, max), 30.0);
        assert_eq!(clamp_scroll(20.0, SCROLL_STEP, max_scroll(10.0, 50.0)), 0.0);
    }
}
