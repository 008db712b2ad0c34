pub mod code_copy;
pub mod lazy_load;
pub mod mobile_menu;
pub mod mode_toggle;
pub mod page_loader;
pub mod scroll_to_top;
pub mod search;
pub mod smooth_scroll;
