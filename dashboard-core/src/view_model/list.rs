use std::collections::BTreeMap;

/// Facet value that lets everything through.
pub const ALL: &str = "all";

/// Something a list page can search and filter.
pub trait Listable {
    /// Text fields matched by free-text search.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a categorical field, compared exactly against a selected
    /// facet. `None` never matches a specific selection.
    fn facet(&self, name: &str) -> Option<String>;
}

/// Case-insensitive substring match over any search field. A blank query
/// matches everything.
pub fn matches_search<T: Listable>(item: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// `ceil(len / page_size)`, with a zero page size treated as one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// The 1-based `page` of `items`. Out of range pages are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(page_size))
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Search, facet selections and page position for one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub facets: BTreeMap<String, String>,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

impl ListQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            facets: BTreeMap::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Selected value for a facet, `"all"` when unset.
    pub fn facet(&self, name: &str) -> &str {
        self.facets.get(name).map(String::as_str).unwrap_or(ALL)
    }

    pub fn has_filters(&self) -> bool {
        !self.search.trim().is_empty()
            || self.facets.values().any(|value| value != ALL)
    }

    pub fn matches<T: Listable>(&self, item: &T) -> bool {
        matches_search(item, &self.search)
            && self.facets.iter().all(|(name, selected)| {
                selected == ALL
                    || item.facet(name).as_deref() == Some(selected.as_str())
            })
    }

    /// Apply a user action. Changing what is listed always returns to the
    /// first page; moving between pages stays within `[1, total_pages]`.
    pub fn apply(&self, action: ListAction) -> Self {
        let mut next = self.clone();
        match action {
            ListAction::SetSearch(search) => {
                if search != self.search {
                    next.search = search;
                    next.page = 1;
                }
            }
            ListAction::SetFacet { name, value } => {
                if self.facet(&name) != value {
                    if value == ALL {
                        next.facets.remove(&name);
                    } else {
                        next.facets.insert(name, value);
                    }
                    next.page = 1;
                }
            }
            ListAction::ClearFilters => {
                next.search.clear();
                next.facets.clear();
                next.page = 1;
            }
            ListAction::SetPageSize(page_size) => {
                next.page_size = page_size.max(1);
                next.page = 1;
            }
            ListAction::NextPage { total_pages } => {
                next.page = (self.page + 1).min(total_pages.max(1));
            }
            ListAction::PreviousPage => {
                next.page = self.page.saturating_sub(1).max(1);
            }
            ListAction::GoToPage { page, total_pages } => {
                next.page = page.clamp(1, total_pages.max(1));
            }
        }
        next
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    SetSearch(String),
    SetFacet { name: String, value: String },
    ClearFilters,
    SetPageSize(usize),
    NextPage { total_pages: usize },
    PreviousPage,
    GoToPage { page: usize, total_pages: usize },
}

/// Items matching `query`, in their original order. The input is left
/// untouched.
pub fn filter_items<T: Listable + Clone>(items: &[T], query: &ListQuery) -> Vec<T> {
    items
        .iter()
        .filter(|item| query.matches(*item))
        .cloned()
        .collect()
}

/// Everything a paginated list page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    /// Items on the current page.
    pub items: Vec<T>,
    /// Count of items matching the filters across all pages.
    pub filtered_len: usize,
    pub total_pages: usize,
    /// Current page, clamped into range.
    pub page: usize,
}

impl<T: Listable + Clone> ListView<T> {
    pub fn build(items: &[T], query: &ListQuery) -> Self {
        let filtered = filter_items(items, query);
        let total_pages = total_pages(filtered.len(), query.page_size);
        let page = query.page.clamp(1, total_pages.max(1));
        let items = paginate(&filtered, page, query.page_size).to_vec();
        Self {
            items,
            filtered_len: filtered.len(),
            total_pages,
            page,
        }
    }
}

impl<T> ListView<T> {
    /// 1-based inclusive range of items shown, `None` when empty.
    pub fn range(&self, page_size: usize) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = (self.page - 1) * page_size.max(1) + 1;
        Some((start, start + self.items.len() - 1))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: &'static str,
        city: &'static str,
        status: &'static str,
    }

    impl Listable for Item {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.city]
        }

        fn facet(&self, name: &str) -> Option<String> {
            match name {
                "status" => Some(self.status.to_string()),
                _ => None,
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "Alpha Clinic", city: "Pune", status: "pending" },
            Item { name: "Beta Hospital", city: "Delhi", status: "approved" },
            Item { name: "Gamma Labs", city: "pune", status: "approved" },
        ]
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let query = ListQuery::new(10).apply(ListAction::SetSearch("PUNE".into()));
        let names: Vec<_> = filter_items(&items(), &query)
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Alpha Clinic", "Gamma Labs"]);
    }

    #[test]
    fn all_facet_passes_everything() {
        let query = ListQuery::new(10).apply(ListAction::SetFacet {
            name: "status".into(),
            value: ALL.into(),
        });
        assert_eq!(filter_items(&items(), &query).len(), 3);
    }

    #[test]
    fn facet_and_search_combine() {
        let query = ListQuery::new(10)
            .apply(ListAction::SetFacet {
                name: "status".into(),
                value: "approved".into(),
            })
            .apply(ListAction::SetSearch("labs".into()));
        let filtered = filter_items(&items(), &query);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Gamma Labs");
    }

    #[test]
    fn unknown_facet_matches_nothing_specific() {
        let query = ListQuery::new(10).apply(ListAction::SetFacet {
            name: "region".into(),
            value: "north".into(),
        });
        assert!(filter_items(&items(), &query).is_empty());
    }

    #[test]
    fn filtering_leaves_the_source_alone() {
        let source = items();
        let before = source.clone();
        let query = ListQuery::new(10).apply(ListAction::SetSearch("beta".into()));
        let filtered = filter_items(&source, &query);
        assert_eq!(source, before);
        assert_ne!(filtered.len(), source.len());
    }

    #[test]
    fn twenty_three_items_make_three_pages() {
        let items: Vec<u32> = (0..23).collect();
        assert_eq!(total_pages(items.len(), 10), 3);
        assert_eq!(paginate(&items, 3, 10), &[20, 21, 22]);
        assert!(paginate(&items, 4, 10).is_empty());
        assert!(paginate(&items, 0, 10).is_empty());
        assert!(paginate(&items, usize::MAX, 10).is_empty());
        assert!(paginate(&items, 2, usize::MAX).is_empty());
        assert_eq!(paginate(&items, 1, usize::MAX).len(), 23);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn any_filter_change_resets_page() {
        let query = ListQuery {
            page: 3,
            ..ListQuery::new(10)
        };
        let searched = query.apply(ListAction::SetSearch("x".into()));
        assert_eq!(searched.page, 1);

        let faceted = query.apply(ListAction::SetFacet {
            name: "status".into(),
            value: "pending".into(),
        });
        assert_eq!(faceted.page, 1);

        let resized = query.apply(ListAction::SetPageSize(25));
        assert_eq!(resized.page, 1);

        let cleared = query.apply(ListAction::ClearFilters);
        assert_eq!(cleared.page, 1);
    }

    #[test]
    fn unchanged_search_keeps_page() {
        let query = ListQuery {
            page: 2,
            search: "pune".into(),
            ..ListQuery::new(10)
        };
        assert_eq!(query.apply(ListAction::SetSearch("pune".into())).page, 2);
    }

    #[test]
    fn navigation_is_clamped() {
        let query = ListQuery::new(10);
        let next = query.apply(ListAction::NextPage { total_pages: 2 });
        assert_eq!(next.page, 2);
        assert_eq!(next.apply(ListAction::NextPage { total_pages: 2 }).page, 2);
        assert_eq!(query.apply(ListAction::PreviousPage).page, 1);
        assert_eq!(
            query
                .apply(ListAction::GoToPage { page: 9, total_pages: 3 })
                .page,
            3
        );
    }

    #[test]
    fn view_clamps_page_past_the_end() {
        let query = ListQuery {
            page: 5,
            ..ListQuery::new(2)
        };
        let view = ListView::build(&items(), &query);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.page, 2);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.range(2), Some((3, 3)));
        assert!(view.has_previous());
        assert!(!view.has_next());
    }

    #[test]
    fn empty_view_has_no_range() {
        let query = ListQuery::new(10).apply(ListAction::SetSearch("zzz".into()));
        let view = ListView::build(&items(), &query);
        assert_eq!(view.filtered_len, 0);
        assert_eq!(view.range(10), None);
        assert_eq!(view.page, 1);
    }
}
