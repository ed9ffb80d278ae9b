//! Shared Tailwind class constants to keep forms, cards and badges consistent
//! across role pages.

pub struct Theme;

impl Theme {
    /// Standard card container.
    pub const CARD: &'static str = "p-6 bg-white dark:bg-gray-800 rounded-xl border border-gray-200 dark:border-gray-700 shadow-sm";

    /// Text inputs, selects and textareas.
    pub const INPUT: &'static str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 disabled:opacity-60 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white dark:focus:ring-blue-500 dark:focus:border-blue-500";

    /// Form labels.
    pub const LABEL: &'static str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

    /// Page heading.
    pub const TITLE: &'static str = "text-2xl font-semibold text-gray-900 dark:text-white";

    /// Secondary text under headings.
    pub const SUBTITLE: &'static str = "text-sm text-gray-500 dark:text-gray-400";

    /// Outlined secondary button.
    pub const BUTTON_SECONDARY: &'static str = "inline-flex items-center justify-center gap-2 px-4 py-2 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 hover:text-blue-700 disabled:opacity-60 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:text-white dark:hover:bg-gray-700 transition-colors";

    /// Destructive button.
    pub const BUTTON_DANGER: &'static str = "inline-flex items-center justify-center gap-2 px-4 py-2 text-sm font-medium text-white bg-red-600 rounded-lg hover:bg-red-700 disabled:opacity-60 transition-colors";

    /// Approve-style button.
    pub const BUTTON_SUCCESS: &'static str = "inline-flex items-center justify-center gap-2 px-4 py-2 text-sm font-medium text-white bg-emerald-600 rounded-lg hover:bg-emerald-700 disabled:opacity-60 transition-colors";

    /// Segmented filter tab, active and idle states.
    pub const TAB_ACTIVE: &'static str = "px-4 py-2 rounded-lg text-sm font-medium bg-blue-600 text-white";
    pub const TAB_IDLE: &'static str = "px-4 py-2 rounded-lg text-sm font-medium bg-gray-200 text-gray-700 hover:bg-gray-300 dark:bg-gray-700 dark:text-gray-200";

    /// Table header cell.
    pub const TH: &'static str = "px-6 py-3 text-left text-xs font-medium text-gray-500 dark:text-gray-400 uppercase tracking-wider";

    /// Table body cell.
    pub const TD: &'static str = "px-6 py-4 whitespace-nowrap text-sm text-gray-700 dark:text-gray-300";

    /// Small icon style.
    pub const ICON_SMALL: &'static str = "material-symbols-outlined text-base";

    /// Flat list item variant without drop shadow.
    pub const LIST_ITEM_FLAT: &'static str = "flex items-center justify-between bg-gray-50 dark:bg-gray-900/50 p-3 rounded-lg border border-gray-200 dark:border-gray-700 transition-colors";
}

/// Badge color families used for statuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Red,
    Gray,
    Blue,
}

impl Tone {
    pub fn badge_class(self) -> &'static str {
        match self {
            Tone::Green => "px-2 py-1 rounded text-xs font-medium bg-green-100 text-green-800",
            Tone::Yellow => "px-2 py-1 rounded text-xs font-medium bg-yellow-100 text-yellow-800",
            Tone::Red => "px-2 py-1 rounded text-xs font-medium bg-red-100 text-red-800",
            Tone::Gray => "px-2 py-1 rounded text-xs font-medium bg-gray-200 text-gray-800",
            Tone::Blue => "px-2 py-1 rounded text-xs font-medium bg-blue-100 text-blue-800",
        }
    }

    /// Solid background for stat card icons.
    pub fn solid_class(self) -> &'static str {
        match self {
            Tone::Green => "bg-green-500",
            Tone::Yellow => "bg-yellow-500",
            Tone::Red => "bg-red-500",
            Tone::Gray => "bg-gray-500",
            Tone::Blue => "bg-blue-500",
        }
    }
}

/// Element id for a control repeated once per list row, so each `<label for>`
/// points at its own row.
pub fn scoped_id(prefix: &str, row: impl std::fmt::Display) -> String {
    format!("{prefix}-{row}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_ids_differ_per_row() {
        let first = scoped_id("response-message", "65a1f0");
        let second = scoped_id("response-message", "65a1f1");
        assert_eq!(first, "response-message-65a1f0");
        assert_ne!(first, second);
        assert_eq!(scoped_id("entry-hall", 2), "entry-hall-2");
    }
}
