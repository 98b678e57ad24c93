//! UIコンポーネント

pub mod header;
pub mod file_row;
pub mod upload_form;
pub mod loading_indicator;
pub mod download_link;
