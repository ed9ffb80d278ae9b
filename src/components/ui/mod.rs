mod alert;
mod badge;
mod button;
mod field;
mod page_header;
mod spinner;
mod stat_card;
mod tabs;
mod toasts;

pub(crate) use alert::{Alert, AlertKind, ErrorBanner};
pub(crate) use badge::StatusBadge;
pub(crate) use button::{Button, ButtonKind};
pub(crate) use field::{SelectField, SelectOption, TextAreaField, TextField};
pub(crate) use page_header::{EmptyState, PageHeader};
pub(crate) use spinner::{Loading, Spinner};
pub(crate) use stat_card::StatCard;
pub(crate) use tabs::FilterTabs;
pub(crate) use toasts::{Pending, ToastProvider, Toasts, use_toasts};
