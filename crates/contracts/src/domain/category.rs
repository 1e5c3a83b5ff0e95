use serde::{Deserialize, Serialize};

use crate::shared::slug::slugify;

// ============================================================================
// Aggregate
// ============================================================================

/// Категория каталога.
///
/// `id` уникален в рамках одной загрузки (порядковый номер в ответе),
/// `slug` — URL-безопасный идентификатор для фильтрации и query-строки.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub slug: String,
    pub name: String,
}

// ============================================================================
// Wire DTO
// ============================================================================

/// Элемент ответа `GET /products/categories`.
///
/// Исторически endpoint отдавал массив строк-имён; сейчас — массив объектов
/// `{slug, name, url}`. Принимаем обе формы.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryWire {
    Entry { slug: String, name: String },
    Name(String),
}

impl Category {
    /// Собрать категорию из wire-формы. Для строковой формы slug
    /// выводится нормализацией имени.
    pub fn from_wire(index: usize, wire: CategoryWire) -> Self {
        match wire {
            CategoryWire::Entry { slug, name } => Self {
                id: index.to_string(),
                slug,
                name,
            },
            CategoryWire::Name(name) => Self {
                id: index.to_string(),
                slug: slugify(&name),
                name,
            },
        }
    }
}
