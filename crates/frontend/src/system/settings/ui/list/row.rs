use contracts::system::settings::{ConfigApplyMode, DynamicSetting};
use leptos::prelude::*;
use thaw::*;

use super::dispatch;
use super::state::{SettingsEvent, SettingsListState};
use crate::shared::icons::icon;
use crate::system::settings::ui::apply_mode::ApplyModeIcon;

/// One settings row with its inline value editor
#[component]
pub fn SettingRow(state: RwSignal<SettingsListState>, id: i64) -> impl IntoView {
    let setting = Memo::new(move |_| state.with(|s| s.setting(id).cloned()));
    let is_editing = Memo::new(move |_| state.with(|s| s.row_state(id).is_editing()));
    let is_saving = Memo::new(move |_| state.with(|s| s.row_state(id).is_saving()));
    let buffer = Memo::new(move |_| {
        state.with(|s| s.row_state(id).buffer().unwrap_or_default().to_string())
    });

    let field = move |f: fn(&DynamicSetting) -> String| {
        move || setting.with(|s| s.as_ref().map(f).unwrap_or_default())
    };
    let apply_mode = Signal::derive(move || {
        setting.with(|s| {
            s.as_ref()
                .map(DynamicSetting::apply_mode)
                .unwrap_or(ConfigApplyMode::Unrecognized(0))
        })
    });

    let value_cell = move || {
        if is_editing.get() {
            view! {
                <div style="display: flex; align-items: center; gap: 4px;">
                    <input
                        type="text"
                        class="setting-value-input"
                        style="width: 100%; padding: 4px 8px; border: 1px solid #ddd; border-radius: 4px;"
                        prop:value=move || buffer.get()
                        prop:disabled=move || is_saving.get()
                        on:input=move |ev| {
                            dispatch(state, SettingsEvent::EditBufferChanged {
                                id,
                                value: event_target_value(&ev),
                            });
                        }
                    />
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| dispatch(state, SettingsEvent::SaveRequested(id))
                        disabled=Signal::derive(move || is_saving.get())
                    >
                        {icon("save")}
                    </Button>
                </div>
            }
            .into_any()
        } else {
            view! {
                <div style="display: flex; align-items: center; gap: 4px;">
                    <span title=field(|s| s.config_value_type.display_name().to_string())>
                        {field(DynamicSetting::display_value)}
                    </span>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| dispatch(state, SettingsEvent::EditStarted(id))
                    >
                        {icon("edit")}
                    </Button>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>
                    <span style="font-weight: 500;">{field(|s| s.config_name.clone())}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>{value_cell}</TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    {field(DynamicSetting::display_default_value)}
                </TableCellLayout>
            </TableCell>
            <TableCell>{field(DynamicSetting::display_description)}</TableCell>
            <TableCell>
                <ApplyModeIcon mode=apply_mode />
            </TableCell>
        </TableRow>
    }
}
