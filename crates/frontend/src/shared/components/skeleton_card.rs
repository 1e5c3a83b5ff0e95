use leptos::prelude::*;

/// SkeletonCard - placeholder card shown while products load
///
/// Mirrors the product card layout: image block, title line, two text
/// lines, footer stub. Shimmer is driven by `skeleton-pulse` in
/// `styles.css`.
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="skeleton-card">
            <div class="skeleton skeleton-card__thumb"></div>
            <div class="skeleton-card__body">
                <div class="skeleton skeleton-card__title"></div>
                <div class="skeleton skeleton-card__line"></div>
                <div class="skeleton skeleton-card__line skeleton-card__line--short"></div>
            </div>
            <div class="skeleton-card__footer">
                <div class="skeleton skeleton-card__button"></div>
            </div>
        </div>
    }
}
