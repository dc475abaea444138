pub mod browser;
pub mod dock;
pub mod info_panel;
pub mod resume_sheet;
pub mod search_sheet;
pub mod splash;
pub mod top_bar;
pub mod topic_map;
