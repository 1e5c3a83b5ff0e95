//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Анимация определена в `styles.css` (`@keyframes card-appear`).
//! `delay_ms` сдвигает старт анимации, чтобы сетка карточек появлялась
//! каскадом: 0, 80, 160, ...

use leptos::prelude::*;
use thaw::Card;

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card attr:style=style>
            {children()}
        </Card>
    }
}
