/// Greedy word wrap; widths are counted in chars, not bytes.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

/// Shortens `s` to at most `max_len` chars, marking the cut with `…`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    match max_len {
        0 => String::new(),
        n => {
            let mut out: String = s.chars().take(n - 1).collect();
            out.push('…');
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_short_messages_on_one_line() {
        assert_eq!(wrap("feature #3: column 'dip_1' is null", 60).len(), 1);
    }

    #[test]
    fn wrap_breaks_between_words() {
        let result = wrap("unrecognized magnitude-frequency distribution type", 20);
        assert_eq!(
            result,
            vec!["unrecognized", "magnitude-frequency", "distribution type"]
        );
    }

    #[test]
    fn wrap_counts_chars_not_bytes() {
        assert_eq!(wrap("0.0 – 20.0 km", 13), vec!["0.0 – 20.0 km"]);
    }

    #[test]
    fn wrap_empty_gives_one_blank_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_leaves_fitting_ids_alone() {
        assert_eq!(truncate("AS_ITAS001", 10), "AS_ITAS001");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("Active Shallow Crust", 8), "Active …");
        assert_eq!(truncate("Zürich Zone", 3), "Zü…");
        assert_eq!(truncate("abc", 0), "");
    }
}
