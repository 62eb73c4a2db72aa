/// Helpers for searchable lists (match highlighting, option lists)
use leptos::prelude::*;

/// Split `text` into (segment, is_match) parts for a case-insensitive `query`.
/// Text whose lower-case form changes byte length is returned unsplit.
pub fn split_matches(text: &str, query: &str) -> Vec<(String, bool)> {
    if query.is_empty() {
        return vec![(text.to_string(), false)];
    }
    let text_lower = text.to_lowercase();
    let query_lower = query.to_lowercase();
    if text_lower.len() != text.len() || !text_lower.contains(&query_lower) {
        return vec![(text.to_string(), false)];
    }

    let mut parts = Vec::new();
    let mut last = 0;
    while let Some(pos) = text_lower[last..].find(&query_lower) {
        let start = last + pos;
        let end = start + query_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return vec![(text.to_string(), false)];
        }
        if start > last {
            parts.push((text[last..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last = end;
    }
    if last < text.len() {
        parts.push((text[last..].to_string(), false));
    }
    parts
}

/// Highlight query matches in text
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    split_matches(text, query)
        .into_iter()
        .map(|(segment, hit)| {
            if hit {
                view! { <mark class="search-hit">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_matches_case_insensitive() {
        assert_eq!(
            split_matches("Majuli Village Well", "village"),
            vec![
                ("Majuli ".to_string(), false),
                ("Village".to_string(), true),
                (" Well".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_split_matches_repeated() {
        let parts = split_matches("aXa", "a");
        assert_eq!(parts.len(), 3);
        assert!(parts[0].1 && !parts[1].1 && parts[2].1);
    }

    #[test]
    fn test_split_without_match() {
        assert_eq!(split_matches("Jorhat", "xyz"), vec![("Jorhat".to_string(), false)]);
        assert_eq!(split_matches("Jorhat", ""), vec![("Jorhat".to_string(), false)]);
    }
}
