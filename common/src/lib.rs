//! Tag Upload Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod tag;
pub mod row;
pub mod payload;
pub mod disposition;
pub mod status;
pub mod error;

pub use tag::{Tag, FileKind, ACCEPTED_EXTENSIONS, accept_attribute};
pub use row::{RowId, RowList};
pub use payload::{FileUpload, UploadEntry, UploadPayload, FieldValue, FIELD_FILES, FIELD_TAGS, UPLOAD_PATH};
pub use disposition::{filename_from_content_disposition, DEFAULT_FILENAME};
pub use status::{SubmitView, DownloadLink, ResponseArtifact};
pub use error::{Error, Result};
