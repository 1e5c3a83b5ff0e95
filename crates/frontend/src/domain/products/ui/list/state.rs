use leptos::prelude::*;

use crate::shared::url_query::CatalogQuery;

/// Размер страницы товаров. Фиксированный, в URL не попадает.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    // Фильтры
    pub category: Option<String>,
    pub search: Option<String>,

    // Серверная пагинация
    pub skip: usize,
    pub limit: usize,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            category: None,
            search: None,
            skip: 0,
            limit: PAGE_SIZE,
        }
    }
}

impl CatalogFilter {
    /// Seed the filter from the URL query at mount.
    pub fn from_query(query: &CatalogQuery) -> Self {
        Self {
            category: query.category.clone(),
            search: query.search.clone(),
            ..Self::default()
        }
    }

    /// The URL-visible part of the filter (`skip`/`limit` stay local).
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery {
            category: self.category.clone(),
            search: self.search.clone(),
        }
    }

    /// Выбор категории. `"all"` снимает фильтр; пагинация сбрасывается.
    pub fn select_category(&mut self, slug: &str) {
        self.category = if slug == "all" {
            None
        } else {
            Some(slug.to_string())
        };
        self.skip = 0;
    }

    /// Явная отправка поиска (не на каждое нажатие). Поисковый запрос
    /// перекрывает категорию, поэтому категория снимается; пагинация
    /// сбрасывается. Пустой текст снимает поиск.
    pub fn submit_search(&mut self, text: &str) {
        let text = text.trim();
        self.search = if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        };
        self.category = None;
        self.skip = 0;
    }

    /// Следующая страница. Возвращает `false` (и ничего не меняет), когда
    /// загружено уже всё, что сервер насчитал по текущему фильтру.
    pub fn load_more(&mut self, loaded: usize, total: usize) -> bool {
        if loaded >= total {
            return false;
        }
        self.skip += self.limit;
        true
    }
}

pub fn create_state(initial: CatalogFilter) -> RwSignal<CatalogFilter> {
    RwSignal::new(initial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_category_resets_skip() {
        let mut filter = CatalogFilter {
            skip: 30,
            ..CatalogFilter::default()
        };
        filter.select_category("smartphones");
        assert_eq!(filter.category.as_deref(), Some("smartphones"));
        assert_eq!(filter.skip, 0);
    }

    #[test]
    fn test_select_all_clears_category() {
        let mut filter = CatalogFilter::default();
        filter.select_category("laptops");
        filter.select_category("all");
        assert_eq!(filter.category, None);
    }

    #[test]
    fn test_select_category_keeps_search() {
        let mut filter = CatalogFilter::default();
        filter.submit_search("phone");
        filter.select_category("smartphones");
        assert_eq!(filter.search.as_deref(), Some("phone"));
    }

    #[test]
    fn test_submit_search_resets_skip_and_category() {
        let mut filter = CatalogFilter {
            category: Some("laptops".to_string()),
            skip: 20,
            ..CatalogFilter::default()
        };
        filter.submit_search("phone");
        assert_eq!(filter.search.as_deref(), Some("phone"));
        assert_eq!(filter.category, None);
        assert_eq!(filter.skip, 0);
    }

    #[test]
    fn test_submit_empty_search_clears_it() {
        let mut filter = CatalogFilter::default();
        filter.submit_search("phone");
        filter.submit_search("   ");
        assert_eq!(filter.search, None);
    }

    #[test]
    fn test_load_more_advances_by_page() {
        let mut filter = CatalogFilter::default();
        assert!(filter.load_more(10, 194));
        assert_eq!(filter.skip, PAGE_SIZE);
        assert!(filter.load_more(20, 194));
        assert_eq!(filter.skip, 2 * PAGE_SIZE);
    }

    #[test]
    fn test_load_more_is_noop_when_exhausted() {
        let mut filter = CatalogFilter::default();
        assert!(!filter.load_more(194, 194));
        assert_eq!(filter.skip, 0);
        assert!(!filter.load_more(5, 5));
        assert!(!filter.load_more(0, 0));
    }

    #[test]
    fn test_from_query_seeds_filters_only() {
        let query = CatalogQuery {
            category: Some("beauty".to_string()),
            search: None,
        };
        let filter = CatalogFilter::from_query(&query);
        assert_eq!(filter.category.as_deref(), Some("beauty"));
        assert_eq!(filter.skip, 0);
        assert_eq!(filter.limit, PAGE_SIZE);
    }

    #[test]
    fn test_query_round_trip() {
        let mut filter = CatalogFilter::default();
        filter.select_category("beauty");
        filter.load_more(10, 30);
        let query = filter.query();
        assert_eq!(query.category.as_deref(), Some("beauty"));
        assert_eq!(query.search, None);
    }
}
