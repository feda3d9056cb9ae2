/// Truncates to `width` characters, ending with an ellipsis when cut.
pub fn truncate_ellipsis(s: &str, width: usize) -> String {
    match width {
        0 => String::new(),
        _ if s.chars().count() <= width => s.to_string(),
        1 => "…".to_string(),
        _ => {
            let mut out: String = s.chars().take(width - 1).collect();
            out.push('…');
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_ellipsis;

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_ellipsis("Jupiter", 10), "Jupiter");
        assert_eq!(truncate_ellipsis("Jupiter", 4), "Jup…");
        assert_eq!(truncate_ellipsis("Jupiter", 1), "…");
        assert_eq!(truncate_ellipsis("Jupiter", 0), "");
        assert_eq!(truncate_ellipsis("Vénus éloignée", 6), "Vénus…");
    }
}
