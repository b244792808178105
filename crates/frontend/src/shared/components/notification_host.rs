//! Transient notifications ("toasts").
//!
//! Pending notifications are owned by the page state. The host hands each one
//! to the thaw toaster, which shows it for [`NOTIFICATION_TIMEOUT_MS`] or until
//! clicked away, and reports it back as delivered.

use std::time::Duration;

use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// How long a notification stays on screen
pub const NOTIFICATION_TIMEOUT_MS: u64 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Error,
}

impl NotificationKind {
    fn intent(self) -> ToastIntent {
        match self {
            NotificationKind::Info => ToastIntent::Info,
            NotificationKind::Error => ToastIntent::Error,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Monotonic per page
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Must be rendered inside a `ToasterProvider`.
#[component]
pub fn NotificationHost(
    #[prop(into)]
    notifications: Signal<Vec<Notification>>,
    /// Called with the id of each notification once it is on screen
    on_dismiss: Callback<u64>,
) -> impl IntoView {
    let toaster = ToasterInjection::expect_context();

    Effect::new(move |_| {
        let pending = notifications.get();
        for n in pending {
            let toast_id = uuid::Uuid::new_v4();
            let message = n.message;
            toaster.dispatch_toast(
                move || {
                    view! {
                        <Toast>
                            <ToastTitle>
                                {message}
                                <ToastTitleAction slot>
                                    <Button
                                        appearance=ButtonAppearance::Transparent
                                        size=ButtonSize::Small
                                        on_click=move |_| toaster.dismiss_toast(toast_id)
                                        attr:title="Dismiss"
                                    >
                                        {icon("x")}
                                    </Button>
                                </ToastTitleAction>
                            </ToastTitle>
                        </Toast>
                    }
                },
                ToastOptions::default()
                    .with_id(toast_id)
                    .with_intent(n.kind.intent())
                    .with_timeout(Duration::from_millis(NOTIFICATION_TIMEOUT_MS)),
            );
            on_dismiss.run(n.id);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_toast_intents() {
        assert!(matches!(NotificationKind::Info.intent(), ToastIntent::Info));
        assert!(matches!(NotificationKind::Error.intent(), ToastIntent::Error));
    }
}
