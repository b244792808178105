/// List helpers shared by client-side tables: search, sort, pagination
use std::cmp::Ordering;

/// Types that can be matched against a search query
pub trait Searchable {
    /// `query` is already lowercased
    fn matches_filter(&self, query: &str) -> bool;
}

/// Types that can be ordered by a named field
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Stable sort by a named field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Keeps the items whose searchable text contains `query`, case-insensitively.
/// An empty query keeps everything.
pub fn filter_list<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| query.is_empty() || item.matches_filter(&query))
        .collect()
}

/// Number of pages needed for `total_count` items; zero items means zero pages
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Items of the 1-based `page`. Pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
