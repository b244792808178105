use crate::shared::icons::icon;
use leptos::prelude::*;

/// Previous / next page buttons with a "{page} of {total}" label.
///
/// Pages are 1-based. The buttons are never disabled; the page state decides
/// whether a move is possible.
#[component]
pub fn PaginationControls(
    /// Text between the buttons, e.g. "2 of 3"
    #[prop(into)]
    label: Signal<String>,

    on_previous: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_previous.run(())
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <span class="pagination-info">
                {move || label.get()}
            </span>
        </div>
    }
}
