mod controls;
mod gallery;
mod status_bar;

pub use controls::ControlsWidget;
pub use gallery::GalleryWidget;
pub use status_bar::StatusBarWidget;

use unicode_width::UnicodeWidthChar;

/// Truncate `text` to at most `width` display columns, ending in `…` when cut
pub(crate) fn fit_width(text: &str, width: usize) -> String {
    if unicode_width::UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_width() {
        assert_eq!(fit_width("hello", 10), "hello");
        assert_eq!(fit_width("hello world", 6), "hello…");
        assert_eq!(fit_width("abc", 0), "");
        // Wide characters count double
        assert_eq!(fit_width("日本語テキスト", 7), "日本語…");
    }
}
