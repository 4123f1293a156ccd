//! Pokedex search and pagination

use pokedex_resource::NamedResource;

/// Pagination settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    pub per_page: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self { per_page: 24 }
    }
}

/// Entries whose name contains `term`, ignoring case
///
/// A blank term matches everything.
pub fn search_by_name(entries: &[NamedResource], term: &str) -> Vec<NamedResource> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return entries.to_vec();
    }

    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Searchable, paginated view over the full Pokedex listing
#[derive(Debug, Clone)]
pub struct PokedexView {
    all: Vec<NamedResource>,
    filtered: Vec<NamedResource>,
    search_term: String,
    /// 1-based
    current_page: usize,
    config: PageConfig,
}

impl PokedexView {
    pub fn new(entries: Vec<NamedResource>, config: PageConfig) -> Self {
        Self {
            filtered: entries.clone(),
            all: entries,
            search_term: String::new(),
            current_page: 1,
            config,
        }
    }

    /// Apply a new search term and return to the first page
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.filtered = search_by_name(&self.all, &self.search_term);
        self.current_page = 1;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Number of entries matching the current search
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.per_page())
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Entries on the current page
    pub fn current_items(&self) -> &[NamedResource] {
        let start = (self.current_page - 1) * self.per_page();
        if start >= self.filtered.len() {
            return &[];
        }
        let end = (start + self.per_page()).min(self.filtered.len());
        &self.filtered[start..end]
    }

    /// Advance one page; returns false on the last page
    pub fn next_page(&mut self) -> bool {
        if self.current_page < self.total_pages() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; returns false on the first page
    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a page; out-of-range pages are ignored
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    fn per_page(&self) -> usize {
        self.config.per_page.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<NamedResource> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                NamedResource::new(*name, format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1))
            })
            .collect()
    }

    fn numbered(count: usize) -> Vec<NamedResource> {
        (1..=count)
            .map(|i| NamedResource::new(format!("mon-{i}"), ""))
            .collect()
    }

    #[test]
    fn test_search_by_name() {
        let list = entries(&["pikachu", "raichu", "Pichu", "bulbasaur"]);

        let found: Vec<_> = search_by_name(&list, "CHU")
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(found, vec!["pikachu", "raichu", "Pichu"]);
    }

    #[test]
    fn test_search_blank_term() {
        let list = entries(&["pikachu", "raichu"]);
        assert_eq!(search_by_name(&list, "   "), list);
        assert!(search_by_name(&list, "mew").is_empty());
    }

    #[test]
    fn test_pagination() {
        let mut view = PokedexView::new(numbered(50), PageConfig::default());

        assert_eq!(view.total_pages(), 3);
        assert_eq!(view.current_items().len(), 24);
        assert_eq!(view.current_items()[0].name, "mon-1");

        assert!(view.next_page());
        assert!(view.next_page());
        assert!(!view.next_page());
        assert_eq!(view.current_page(), 3);
        assert_eq!(view.current_items().len(), 2);
        assert_eq!(view.current_items()[1].name, "mon-50");

        assert!(view.prev_page());
        assert_eq!(view.current_page(), 2);
        assert!(view.go_to_page(1));
        assert!(!view.prev_page());
        assert!(!view.go_to_page(4));
        assert!(!view.go_to_page(0));
    }

    #[test]
    fn test_search_resets_page() {
        let mut view = PokedexView::new(numbered(50), PageConfig { per_page: 10 });
        view.go_to_page(4);

        view.set_search("mon-4");
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.search_term(), "mon-4");
        // mon-4 and mon-40..=mon-49
        assert_eq!(view.filtered_len(), 11);
        assert_eq!(view.total_pages(), 2);

        view.set_search("");
        assert_eq!(view.filtered_len(), 50);
    }

    #[test]
    fn test_empty_view() {
        let mut view = PokedexView::new(Vec::new(), PageConfig::default());
        assert_eq!(view.total_pages(), 0);
        assert_eq!(view.current_page(), 1);
        assert!(view.current_items().is_empty());
        assert!(!view.next_page());
    }
}
