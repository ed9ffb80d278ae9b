//! Shared UI components exported for routes and features.

mod hall_schedule;
pub(crate) mod layout;
mod timetable_table;
pub(crate) mod ui;

pub(crate) use hall_schedule::HallSchedule;
pub(crate) use layout::AppShell;
pub(crate) use timetable_table::TimetableTable;
pub(crate) use ui::{
    Alert, AlertKind, Button, ButtonKind, EmptyState, ErrorBanner, FilterTabs, Loading,
    PageHeader, Pending, SelectField, SelectOption, Spinner, StatCard, StatusBadge,
    TextAreaField, TextField, ToastProvider, Toasts, use_toasts,
};
