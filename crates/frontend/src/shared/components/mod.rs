pub mod notification_host;
pub mod pagination_controls;
