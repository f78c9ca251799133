//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// `1234567` → `"1,234,567"`. Negative amounts keep their sign.
pub fn thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut out = String::new();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    if n < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

/// Currency display used for sales and unit price figures.
pub fn yen(n: i64) -> String {
    format!("￥{}", thousands(n))
}

pub fn hours1(h: f64) -> String {
    format!("{:.1}", h)
}

pub fn hours2(h: f64) -> String {
    format!("{:.2}", h)
}

pub fn pct2(p: f64) -> String {
    format!("{:.2}", p)
}

/// Left-pad / right-pad by display width, not char count, so CJK status
/// labels line up with ASCII headers.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let fill = width.saturating_sub(w);
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    let fill = width.saturating_sub(w);
    format!("{}{}", " ".repeat(fill), s)
}
