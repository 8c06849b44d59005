//! Text formatting for figures on screen

/// `+0.7`, `-2.5`, `+5`. The plus sign appears iff `change >= 0`.
pub fn signed_change(change: f64) -> String {
    let change = if change == 0.0 { 0.0 } else { change };
    if change >= 0.0 {
        format!("+{change}")
    } else {
        format!("{change}")
    }
}

pub fn change_line(change: f64) -> String {
    format!("{}% vs. Last Week", signed_change(change))
}

/// `1250000` → `1,250,000`
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn currency(value: u64) -> String {
    format!("${}", thousands(value))
}

/// Truncate to `width` chars, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Greedy word wrap to `width` columns. A word longer than a line is split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let mut current = String::new();
    let mut current_len = 0;
    for word in text.split_whitespace() {
        let mut rest: Vec<char> = word.chars().collect();
        while rest.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            lines.push(rest.drain(..width).collect());
        }
        if rest.is_empty() {
            continue;
        }
        if current_len > 0 && current_len + 1 + rest.len() > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += rest.len();
        current.extend(rest);
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_change() {
        assert_eq!(signed_change(0.7), "+0.7");
        assert_eq!(signed_change(-2.5), "-2.5");
        assert_eq!(signed_change(5.0), "+5");
        assert_eq!(signed_change(0.0), "+0");
        assert_eq!(signed_change(-0.0), "+0");
    }

    #[test]
    fn test_sign_prefix_iff_non_negative() {
        for change in [-100.0, -3.2, -0.01, 0.0, 0.01, 2.0, 99.5] {
            let text = signed_change(change);
            assert_eq!(text.starts_with('+'), change >= 0.0, "{change}");
        }
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(1_250_000), "1,250,000");
        assert_eq!(currency(60_000_000), "$60,000,000");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Fresh Kale", 20), "Fresh Kale");
        assert_eq!(truncate("Free-Range Eggs", 6), "Free-…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("Sales data is current", 10), vec!["Sales data", "is current"]);
        assert_eq!(wrap("abcdefghij kl", 4), vec!["abcd", "efgh", "ij", "kl"]);
        assert_eq!(wrap("  spaced   out  ", 20), vec!["spaced out"]);
        assert!(wrap("anything", 0).is_empty());
        assert!(wrap("", 10).is_empty());
    }
}
