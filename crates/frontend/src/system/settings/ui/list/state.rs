//! Settings list state and its transitions.
//!
//! All UI state of the settings page lives in [`SettingsListState`]. Events are
//! applied by [`SettingsListState::handle`], which may ask the view to run a
//! network [`SettingsCommand`]; completions come back as events.

use std::collections::HashMap;

use contracts::system::settings::DynamicSetting;
use leptos::prelude::*;

use crate::shared::components::notification_host::{Notification, NotificationKind};
use crate::shared::list_utils::{filter_list, page_slice, sort_list, total_pages};

pub const ROWS_PER_PAGE: usize = 7;
pub const SORT_FIELD: &str = "config_name";
/// Older notifications are dropped once this many are pending.
pub const MAX_NOTIFICATIONS: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Inline editor state of one row. Rows without an entry are displayed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RowEditState {
    #[default]
    Display,
    Editing { buffer: Option<String> },
    Saving { buffer: Option<String> },
}

impl RowEditState {
    pub fn is_editing(&self) -> bool {
        !matches!(self, RowEditState::Display)
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, RowEditState::Saving { .. })
    }

    pub fn buffer(&self) -> Option<&str> {
        match self {
            RowEditState::Display => None,
            RowEditState::Editing { buffer } | RowEditState::Saving { buffer } => buffer.as_deref(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum SettingsEvent {
    RefreshRequested,
    FetchSucceeded { generation: u64, settings: Vec<DynamicSetting> },
    FetchFailed { generation: u64, message: String },
    SearchChanged(String),
    SortDirectionSelected(SortDirection),
    PreviousPage,
    NextPage,
    EditStarted(i64),
    EditBufferChanged { id: i64, value: String },
    SaveRequested(i64),
    SaveSucceeded { id: i64, acknowledged: DynamicSetting },
    SaveFailed { id: i64, message: String },
    NotificationDismissed(u64),
}

/// Side effect requested by a transition
#[derive(Clone, Debug, PartialEq)]
pub enum SettingsCommand {
    FetchAll { generation: u64 },
    Save { setting: DynamicSetting },
}

#[derive(Clone, Debug)]
pub struct SettingsListState {
    pub settings: Vec<DynamicSetting>,
    /// 1-based; may exceed `total_pages()` after the filter narrows the list
    pub current_page: usize,
    pub search_query: String,
    pub sort_direction: SortDirection,
    pub row_edits: HashMap<i64, RowEditState>,
    pub notifications: Vec<Notification>,
    pub is_loading: bool,
    pub is_loaded: bool,
    fetch_generation: u64,
    /// Fetch generation current when each row's save was acknowledged
    acked_at: HashMap<i64, u64>,
    next_notification_id: u64,
}

impl Default for SettingsListState {
    fn default() -> Self {
        Self {
            settings: Vec::new(),
            current_page: 1,
            search_query: String::new(),
            sort_direction: SortDirection::Ascending,
            row_edits: HashMap::new(),
            notifications: Vec::new(),
            is_loading: false,
            is_loaded: false,
            fetch_generation: 0,
            acked_at: HashMap::new(),
            next_notification_id: 1,
        }
    }
}

impl SettingsListState {
    pub fn handle(&mut self, event: SettingsEvent) -> Option<SettingsCommand> {
        match event {
            SettingsEvent::RefreshRequested => {
                self.fetch_generation += 1;
                self.is_loading = true;
                Some(SettingsCommand::FetchAll {
                    generation: self.fetch_generation,
                })
            }
            SettingsEvent::FetchSucceeded {
                generation,
                settings,
            } => {
                if generation != self.fetch_generation {
                    log::debug!("dropping stale settings response #{}", generation);
                    return None;
                }
                self.row_edits
                    .retain(|id, _| settings.iter().any(|s| s.id == *id));
                // a save acknowledged after this fetch went out is newer than its rows
                let acked_at = std::mem::take(&mut self.acked_at);
                let previous = std::mem::take(&mut self.settings);
                self.settings = settings
                    .into_iter()
                    .map(|fetched| match acked_at.get(&fetched.id) {
                        Some(&acked) if acked >= generation => previous
                            .iter()
                            .find(|s| s.id == fetched.id)
                            .cloned()
                            .unwrap_or(fetched),
                        _ => fetched,
                    })
                    .collect();
                self.is_loading = false;
                self.is_loaded = true;
                None
            }
            SettingsEvent::FetchFailed {
                generation,
                message,
            } => {
                if generation == self.fetch_generation {
                    self.is_loading = false;
                    self.notify(NotificationKind::Error, message);
                }
                None
            }
            SettingsEvent::SearchChanged(query) => {
                self.search_query = query;
                None
            }
            SettingsEvent::SortDirectionSelected(direction) => {
                self.sort_direction = direction;
                None
            }
            SettingsEvent::PreviousPage => {
                if self.current_page > 1 {
                    self.current_page -= 1;
                }
                None
            }
            SettingsEvent::NextPage => {
                if self.current_page < self.total_pages() {
                    self.current_page += 1;
                }
                None
            }
            SettingsEvent::EditStarted(id) => {
                if let Some(setting) = self.setting(id) {
                    if !self.row_state(id).is_editing() {
                        let buffer = setting.config_value.clone();
                        self.row_edits.insert(id, RowEditState::Editing { buffer });
                    }
                }
                None
            }
            SettingsEvent::EditBufferChanged { id, value } => {
                if let Some(RowEditState::Editing { buffer }) = self.row_edits.get_mut(&id) {
                    *buffer = Some(value);
                }
                None
            }
            SettingsEvent::SaveRequested(id) => self.request_save(id),
            SettingsEvent::SaveSucceeded { id, acknowledged } => {
                self.row_edits.remove(&id);
                let message = format!("Saved {}", acknowledged.config_name);
                if let Some(slot) = self.settings.iter_mut().find(|s| s.id == id) {
                    *slot = acknowledged;
                    self.acked_at.insert(id, self.fetch_generation);
                }
                self.notify(NotificationKind::Info, message);
                None
            }
            SettingsEvent::SaveFailed { id, message } => {
                if let Some(RowEditState::Saving { buffer }) = self.row_edits.remove(&id) {
                    self.row_edits.insert(id, RowEditState::Editing { buffer });
                }
                self.notify(NotificationKind::Error, message);
                None
            }
            SettingsEvent::NotificationDismissed(id) => {
                self.notifications.retain(|n| n.id != id);
                None
            }
        }
    }

    fn request_save(&mut self, id: i64) -> Option<SettingsCommand> {
        let setting = self.setting(id)?.clone();
        let buffer = match self.row_edits.get(&id) {
            Some(RowEditState::Editing { buffer }) => buffer.clone(),
            _ => return None,
        };

        if let Err(err) = setting.validate_candidate(buffer.as_deref()) {
            self.notify(NotificationKind::Error, err.to_string());
            self.row_edits.remove(&id);
            return None;
        }
        if buffer == setting.config_value {
            self.row_edits.remove(&id);
            return None;
        }

        self.row_edits.insert(
            id,
            RowEditState::Saving {
                buffer: buffer.clone(),
            },
        );
        Some(SettingsCommand::Save {
            setting: setting.with_value(buffer),
        })
    }

    fn notify(&mut self, kind: NotificationKind, message: String) {
        let id = self.next_notification_id;
        self.next_notification_id += 1;
        self.notifications.push(Notification { id, kind, message });
        if self.notifications.len() > MAX_NOTIFICATIONS {
            let overflow = self.notifications.len() - MAX_NOTIFICATIONS;
            self.notifications.drain(..overflow);
        }
    }

    pub fn setting(&self, id: i64) -> Option<&DynamicSetting> {
        self.settings.iter().find(|s| s.id == id)
    }

    pub fn row_state(&self, id: i64) -> RowEditState {
        self.row_edits.get(&id).cloned().unwrap_or_default()
    }

    /// Settings matching the search query, in display order
    pub fn filtered(&self) -> Vec<DynamicSetting> {
        let mut rows: Vec<DynamicSetting> = filter_list(&self.settings, &self.search_query)
            .into_iter()
            .cloned()
            .collect();
        sort_list(
            &mut rows,
            SORT_FIELD,
            self.sort_direction == SortDirection::Ascending,
        );
        rows
    }

    pub fn filtered_count(&self) -> usize {
        filter_list(&self.settings, &self.search_query).len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), ROWS_PER_PAGE)
    }

    pub fn visible_rows(&self) -> Vec<DynamicSetting> {
        page_slice(&self.filtered(), self.current_page, ROWS_PER_PAGE).to_vec()
    }

    pub fn visible_ids(&self) -> Vec<i64> {
        self.visible_rows().iter().map(|s| s.id).collect()
    }

    pub fn page_label(&self) -> String {
        format!("{} of {}", self.current_page, self.total_pages())
    }
}

pub fn create_state() -> RwSignal<SettingsListState> {
    RwSignal::new(SettingsListState::default())
}
