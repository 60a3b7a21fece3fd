use yew::prelude::*;

/// Skeleton placeholder shown while a page fetch is outstanding.
#[function_component(LoadingSkeleton)]
pub fn loading_skeleton() -> Html {
    html! {
        <div class="skeleton-page" aria-busy="true">
            <div class="skeleton-line wide"></div>
            <div class="skeleton-line"></div>
            <div class="skeleton-block"></div>
            <div class="skeleton-line"></div>
            <style>
                {r#"
                @keyframes skeleton-pulse {
                    0% { opacity: 0.4; }
                    50% { opacity: 0.9; }
                    100% { opacity: 0.4; }
                }
                .skeleton-page { max-width: 680px; margin: 6rem auto; padding: 0 2rem; display: flex; flex-direction: column; gap: 1rem; }
                .skeleton-line, .skeleton-block {
                    border-radius: 6px;
                    background: rgba(128, 128, 128, 0.25);
                    animation: skeleton-pulse 1.5s ease-in-out infinite;
                }
                .skeleton-line { height: 1.25rem; width: 60%; }
                .skeleton-line.wide { height: 2.5rem; width: 80%; }
                .skeleton-block { height: 16rem; width: 100%; }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub title: AttrValue,
    pub message: AttrValue,
}

/// Generic empty/error state. No retry affordance by design.
#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="empty-state">
            <h2>{ props.title.clone() }</h2>
            <p>{ props.message.clone() }</p>
            <style>
                {r#"
                .empty-state { text-align: center; margin: 8rem auto; max-width: 480px; padding: 0 2rem; }
                .empty-state p { color: #999; }
                "#}
            </style>
        </div>
    }
}
