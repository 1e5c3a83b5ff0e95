use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Товар каталога, как его отдаёт dummyjson.com.
///
/// Снимок неизменяем после загрузки: каждый успешный запрос полностью
/// заменяет список, слияния/патчей нет.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub thumbnail: String,
}

// ============================================================================
// Wire DTO
// ============================================================================

/// Страница товаров из `GET /products{,/category/{slug},/search}`.
///
/// `total` — серверное количество по текущему фильтру, не длина `products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: i64,
    #[serde(default)]
    pub skip: i64,
    #[serde(default)]
    pub limit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_product_page() {
        // Реальный фрагмент ответа dummyjson: лишние поля игнорируются
        let payload = r#"{
            "products": [
                {
                    "id": 1,
                    "title": "Essence Mascara Lash Princess",
                    "description": "A popular mascara known for its volumizing effects.",
                    "category": "beauty",
                    "price": 9.99,
                    "rating": 4.94,
                    "stock": 5,
                    "thumbnail": "https://cdn.dummyjson.com/products/images/beauty/1/thumbnail.png"
                }
            ],
            "total": 194,
            "skip": 0,
            "limit": 10
        }"#;

        let page: ProductPage = serde_json::from_str(payload).unwrap();
        assert_eq!(page.total, 194);
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.products[0].id, 1);
        assert_eq!(page.products[0].category, "beauty");
        assert_eq!(page.products[0].price, 9.99);
    }

    #[test]
    fn test_decode_page_without_skip_limit() {
        let payload = r#"{"products": [], "total": 0}"#;
        let page: ProductPage = serde_json::from_str(payload).unwrap();
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 0);
        assert!(page.products.is_empty());
    }
}
