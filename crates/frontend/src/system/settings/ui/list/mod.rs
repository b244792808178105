mod row;
mod state;

use std::cmp::Ordering;

use contracts::system::settings::DynamicSetting;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::notification_host::NotificationHost;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{Searchable, Sortable};
use crate::system::settings::api;
use row::SettingRow;
use state::{create_state, SettingsCommand, SettingsEvent, SettingsListState, SortDirection};

const TABLE_ID: &str = "sys-settings-table";

impl Searchable for DynamicSetting {
    fn matches_filter(&self, query: &str) -> bool {
        self.config_name.to_lowercase().contains(query)
    }
}

impl Sortable for DynamicSetting {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "config_name" => self.config_name.cmp(&other.config_name),
            _ => Ordering::Equal,
        }
    }
}

/// Apply an event to the page state and run whatever command it asks for.
fn dispatch(state: RwSignal<SettingsListState>, event: SettingsEvent) {
    // `None` once the page has been unmounted
    let command = state.try_update(|s| s.handle(event)).flatten();
    if let Some(command) = command {
        run_command(state, command);
    }
}

fn run_command(state: RwSignal<SettingsListState>, command: SettingsCommand) {
    match command {
        SettingsCommand::FetchAll { generation } => {
            log::debug!("loading settings (#{})", generation);
            spawn_local(async move {
                let event = match api::fetch_settings().await {
                    Ok(settings) => {
                        log::debug!("loaded {} settings", settings.len());
                        SettingsEvent::FetchSucceeded {
                            generation,
                            settings,
                        }
                    }
                    Err(e) => {
                        log::error!("failed to load settings: {}", e);
                        SettingsEvent::FetchFailed {
                            generation,
                            message: format!("Failed to load settings: {}", e),
                        }
                    }
                };
                dispatch(state, event);
            });
        }
        SettingsCommand::Save { setting } => {
            let id = setting.id;
            log::info!("saving setting {}", setting.config_name);
            spawn_local(async move {
                let event = match api::update_setting(&setting).await {
                    Ok(acknowledged) => SettingsEvent::SaveSucceeded { id, acknowledged },
                    Err(e) => {
                        log::error!("failed to save setting {}: {}", setting.config_name, e);
                        SettingsEvent::SaveFailed {
                            id,
                            message: format!("Failed to save {}: {}", setting.config_name, e),
                        }
                    }
                };
                dispatch(state, event);
            });
        }
    }
}

fn sort_button_style(active: bool) -> &'static str {
    if active {
        "background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; color: green;"
    } else {
        "background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; color: gray;"
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! { <SettingsList /> }
}

#[component]
fn SettingsList() -> impl IntoView {
    let state = create_state();

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded || s.is_loading) {
            dispatch(state, SettingsEvent::RefreshRequested);
        }
    });

    let loading = Signal::derive(move || state.with(|s| s.is_loading));
    let sort_direction = Signal::derive(move || state.with(|s| s.sort_direction));

    view! {
        <div class="page" id="sys_settings--list">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Settings List"</h1>
                    <Badge>
                        {move || state.with(|s| s.filtered_count()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| dispatch(state, SettingsEvent::RefreshRequested)
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            <PaginationControls
                                label=Signal::derive(move || state.with(|s| s.page_label()))
                                on_previous=Callback::new(move |_| dispatch(state, SettingsEvent::PreviousPage))
                                on_next=Callback::new(move |_| dispatch(state, SettingsEvent::NextPage))
                            />
                            <button
                                style=move || sort_button_style(sort_direction.get() == SortDirection::Ascending)
                                aria-label="sort up"
                                title="Sort by name, ascending"
                                on:click=move |_| dispatch(state, SettingsEvent::SortDirectionSelected(SortDirection::Ascending))
                            >
                                {icon("arrow-up")}
                            </button>
                            <button
                                style=move || sort_button_style(sort_direction.get() == SortDirection::Descending)
                                aria-label="sort down"
                                title="Sort by name, descending"
                                on:click=move |_| dispatch(state, SettingsEvent::SortDirectionSelected(SortDirection::Descending))
                            >
                                {icon("arrow-down")}
                            </button>
                        </div>
                        <div class="filter-panel-header__right">
                            <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                {icon("search")}
                                <input
                                    type="text"
                                    placeholder="Search by config name"
                                    style="width: 250px; padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px;"
                                    prop:value=move || state.with(|s| s.search_query.clone())
                                    on:input=move |ev| {
                                        dispatch(state, SettingsEvent::SearchChanged(event_target_value(&ev)));
                                    }
                                />
                            </Flex>
                        </div>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:id=TABLE_ID attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell attr:style="width: 35%;">"Configuration Name"</TableHeaderCell>
                                <TableHeaderCell attr:style="width: 10%;">"Current Value"</TableHeaderCell>
                                <TableHeaderCell attr:style="width: 10%;">"Default Value"</TableHeaderCell>
                                <TableHeaderCell attr:style="width: 35%;">"Description"</TableHeaderCell>
                                <TableHeaderCell attr:style="width: 10%;">"Apply Mode"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.visible_ids())
                                key=|id| *id
                                children=move |id| view! { <SettingRow state=state id=id /> }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            <NotificationHost
                notifications=Signal::derive(move || state.with(|s| s.notifications.clone()))
                on_dismiss=Callback::new(move |id| dispatch(state, SettingsEvent::NotificationDismissed(id)))
            />
        </div>
    }
}
