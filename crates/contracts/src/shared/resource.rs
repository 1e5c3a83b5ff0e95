//! Request-lifecycle state for a fetched collection.
//!
//! One `ResourceState` per resource kind (products, categories). All writes
//! go through the three operations below; everything else reads snapshots.
//! The operations are total functions over the current state and never panic.

use serde::{Deserialize, Serialize};

/// Четыре фазы жизненного цикла загрузки ресурса.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Снимок загруженного ресурса плюс статус текущего запроса.
///
/// `total` — серверное количество элементов по текущему фильтру (только для
/// товаров; для категорий всегда `None`).
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub status: FetchStatus,
    pub error: Option<String>,
    pub total: Option<usize>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: FetchStatus::Idle,
            error: None,
            total: None,
        }
    }
}

impl<T> ResourceState<T> {
    /// Запрос ушёл в сеть: только флаг статуса, элементы не трогаем.
    pub fn begin(&mut self) {
        self.status = FetchStatus::Loading;
    }

    /// Успешное завершение: элементы (и total) заменяются целиком.
    pub fn succeed(&mut self, items: Vec<T>, total: Option<usize>) {
        self.status = FetchStatus::Succeeded;
        self.error = None;
        self.items = items;
        self.total = total;
    }

    /// Ошибка транспорта или декодирования: элементы остаются как были.
    pub fn fail(&mut self, message: String) {
        self.status = FetchStatus::Failed;
        self.error = Some(message);
    }
}

/// Монотонный счётчик исходящих запросов для одного вида ресурса.
///
/// Каждый запрос получает номер в момент отправки; применять результат
/// можно только если его номер всё ещё последний выданный. Так порядок
/// применения определяется порядком отправки, а не порядком завершения.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Выдать номер следующему исходящему запросу.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Остаётся ли запрос с этим номером последним выданным.
    pub fn is_current(&self, token: u64) -> bool {
        self.latest == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_then_succeed() {
        let mut state = ResourceState::<&str>::default();
        state.begin();
        assert_eq!(state.status, FetchStatus::Loading);

        state.succeed(vec!["a", "b", "c"], Some(30));
        assert_eq!(state.status, FetchStatus::Succeeded);
        assert_eq!(state.error, None);
        assert_eq!(state.items, vec!["a", "b", "c"]);
        assert_eq!(state.total, Some(30));
    }

    #[test]
    fn test_begin_keeps_previous_items() {
        let mut state = ResourceState::default();
        state.succeed(vec![1, 2], Some(2));
        state.begin();
        assert_eq!(state.status, FetchStatus::Loading);
        assert_eq!(state.items, vec![1, 2]);
    }

    #[test]
    fn test_fail_leaves_items_untouched() {
        let mut state = ResourceState::default();
        state.succeed(vec![1, 2, 3], Some(3));
        let before = state.items.clone();

        state.begin();
        state.fail("network unreachable".to_string());

        assert_eq!(state.status, FetchStatus::Failed);
        assert_eq!(state.error.as_deref(), Some("network unreachable"));
        assert_eq!(state.items, before);
        assert_eq!(state.total, Some(3));
    }

    #[test]
    fn test_succeed_clears_previous_error() {
        let mut state = ResourceState::<i32>::default();
        state.begin();
        state.fail("boom".to_string());

        state.begin();
        state.succeed(vec![7], Some(1));
        assert_eq!(state.error, None);
        assert_eq!(state.status, FetchStatus::Succeeded);
    }

    #[test]
    fn test_succeed_is_idempotent() {
        let mut a = ResourceState::default();
        a.succeed(vec![1, 2], Some(5));
        let mut b = a.clone();
        b.succeed(vec![1, 2], Some(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sequence_latest_wins() {
        let mut seq = RequestSequence::default();
        let first = seq.issue();
        let second = seq.issue();

        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_sequence_single_request_is_current() {
        let mut seq = RequestSequence::default();
        let token = seq.issue();
        assert!(seq.is_current(token));
    }
}
