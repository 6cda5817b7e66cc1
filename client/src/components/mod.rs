pub mod navbar;
pub mod password_modal;
pub mod plan_badge;
pub mod session_provider;
pub mod settings_sidebar;
