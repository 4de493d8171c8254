pub mod header;
pub mod upload_area;
pub mod detection_result;
pub mod search_form;
pub mod history_table;
pub mod pagination_controls;
pub mod upload_screen;
pub mod history_screen;
