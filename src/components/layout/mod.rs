//! Layout components shared across routes.

mod app_shell;
mod navbar;
mod sidebar;

pub(crate) use app_shell::AppShell;
use navbar::Navbar;
use sidebar::Sidebar;
