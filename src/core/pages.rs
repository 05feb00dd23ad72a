use std::collections::BTreeSet;

/// Parses a page-selection expression ("1-5, 8, 12") into an ascending,
/// deduplicated list of page numbers within `[1, max_pages]`.
///
/// This function is total: it drives live price previews while the
/// customer is still typing, so malformed or out-of-range tokens are
/// silently skipped rather than reported. "Nothing selected" and
/// "invalid input" are indistinguishable by design.
pub fn parse_page_numbers(expression: &str, max_pages: u32) -> Vec<u32> {
    let mut pages = BTreeSet::new();

    if expression.trim().is_empty() {
        return Vec::new();
    }

    for part in expression.split(',').map(str::trim) {
        // "0" is the form-default sentinel for "nothing selected here".
        if part == "0" {
            continue;
        }

        if part.contains('-') {
            let mut bounds = part.splitn(2, '-');
            let start = bounds.next().map(str::trim).and_then(parse_page);
            let end = bounds.next().map(str::trim).and_then(parse_page);
            if let (Some(start), Some(end)) = (start, end) {
                if start >= 1 && start <= end {
                    for page in start..=end.min(max_pages) {
                        pages.insert(page);
                    }
                }
            }
        } else if let Some(page) = parse_page(part) {
            if page >= 1 && page <= max_pages {
                pages.insert(page);
            }
        }
    }

    pages.into_iter().collect()
}

fn parse_page(token: &str) -> Option<u32> {
    token.parse::<u32>().ok()
}
