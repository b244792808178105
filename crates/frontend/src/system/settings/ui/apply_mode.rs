use contracts::system::settings::ConfigApplyMode;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Apply-mode glyph; the explanation is shown as a hover tooltip.
#[component]
pub fn ApplyModeIcon(#[prop(into)] mode: Signal<ConfigApplyMode>) -> impl IntoView {
    let tooltip = Signal::derive(move || mode.get().tooltip().to_string());

    view! {
        <Tooltip content=tooltip>
            <span
                class="apply-mode-icon"
                style="cursor: help; display: inline-flex; align-items: center;"
                aria-label=move || tooltip.get()
            >
                {move || icon(mode.get().icon_name())}
            </span>
        </Tooltip>
    }
}
