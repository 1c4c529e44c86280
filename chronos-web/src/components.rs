pub mod banner;
pub mod header;
pub mod sidebar;
pub mod toast;
