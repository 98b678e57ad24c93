//! アップロードペイロード
//!
//! multipartの`files`/`tags`フィールドを行順に並べる

use crate::tag::{FileKind, Tag};

/// アップロード先パス
pub const UPLOAD_PATH: &str = "/upload";

/// ファイルのフィールド名
pub const FIELD_FILES: &str = "files";

/// タグのフィールド名
pub const FIELD_TAGS: &str = "tags";

/// アップロードするファイル（内容はメモリ上に保持）
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// 拡張子からMIMEタイプを決めて生成
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_type_for(&file_name).to_string();
        Self { file_name, mime_type, bytes }
    }
}

/// 1行分（ファイル + タグ）
#[derive(Debug, Clone, PartialEq)]
pub struct UploadEntry {
    pub file: FileUpload,
    pub tag: Tag,
}

/// multipartの1フィールドの値
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    File(&'a FileUpload),
    Text(&'a str),
}

/// 送信時点の全行のスナップショット
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadPayload {
    entries: Vec<UploadEntry>,
}

impl UploadPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file: FileUpload, tag: Tag) {
        self.entries.push(UploadEntry { file, tag });
    }

    pub fn entries(&self) -> &[UploadEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// フォームと同じ順序のフィールド列
    ///
    /// 各行につき `files` → `tags` の順
    pub fn fields(&self) -> Vec<(&'static str, FieldValue<'_>)> {
        self.entries
            .iter()
            .flat_map(|entry| {
                [
                    (FIELD_FILES, FieldValue::File(&entry.file)),
                    (FIELD_TAGS, FieldValue::Text(entry.tag.as_str())),
                ]
            })
            .collect()
    }
}

impl FromIterator<(FileUpload, Tag)> for UploadPayload {
    fn from_iter<I: IntoIterator<Item = (FileUpload, Tag)>>(iter: I) -> Self {
        let mut payload = UploadPayload::new();
        for (file, tag) in iter {
            payload.push(file, tag);
        }
        payload
    }
}

/// 拡張子からMIMEタイプを推定
pub fn mime_type_for(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();
    match FileKind::from_file_name(&lower) {
        Some(FileKind::Excel) if lower.ends_with(".xls") => "application/vnd.ms-excel",
        Some(FileKind::Excel) => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some(FileKind::Pdf) => "application/pdf",
        None => "application/octet-stream",
    }
}
