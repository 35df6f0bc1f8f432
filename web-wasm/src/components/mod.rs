pub mod header;
pub mod upload_area;
pub mod loading_spinner;
pub mod summary_panel;
pub mod pdf_viewer;
pub mod toast_list;
pub mod settings_panel;
