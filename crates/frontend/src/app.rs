use crate::system::settings::ui::list::SettingsPage;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ToasterProvider position=ToastPosition::TopEnd>
                <SettingsPage />
            </ToasterProvider>
        </ConfigProvider>
    }
}
