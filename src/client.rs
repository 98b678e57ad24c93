//! アップロードクライアント
//!
//! Web版と同じmultipart本文を組み立てて `/upload` へ送る

use crate::error::{Result, TagUploadError};
use reqwest::header::{HeaderMap, CONTENT_DISPOSITION};
use reqwest::multipart::{Form, Part};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tag_upload_common::{
    filename_from_content_disposition, FieldValue, FileKind, FileUpload, ResponseArtifact, Tag,
    UploadPayload, DEFAULT_FILENAME, UPLOAD_PATH,
};

pub struct UploadClient {
    http: reqwest::Client,
    base_url: String,
}

impl UploadClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn upload_url(&self) -> String {
        format!("{}{}", self.base_url, UPLOAD_PATH)
    }

    /// 1回のPOSTで全行を送信
    ///
    /// 2xx以外は本文をテキストで読んで `RequestFailed` にする
    pub async fn upload(&self, payload: &UploadPayload) -> Result<ResponseArtifact> {
        let form = build_form(payload)?;
        let url = self.upload_url();
        tracing::debug!("POST {} ({}件)", url, payload.len());

        let response = self.http.post(&url).multipart(form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await?;
            return Err(tag_upload_common::Error::RequestFailed {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let filename = disposition_filename(response.headers());

        let data = response.bytes().await?.to_vec();
        tracing::debug!("受信: {} ({} bytes)", filename, data.len());

        Ok(ResponseArtifact { filename, data })
    }
}

/// Content-Dispositionからファイル名を決める
///
/// 非ASCIIのファイル名もUTF-8として読む
fn disposition_filename(headers: &HeaderMap) -> String {
    let content_disposition = headers
        .get(CONTENT_DISPOSITION)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
    filename_from_content_disposition(content_disposition.as_deref())
}

/// フィールド順を保ったままmultipartフォームに変換
fn build_form(payload: &UploadPayload) -> Result<Form> {
    let mut form = Form::new();
    for (name, value) in payload.fields() {
        form = match value {
            FieldValue::File(file) => {
                let part = Part::bytes(file.bytes.clone())
                    .file_name(file.file_name.clone())
                    .mime_str(&file.mime_type)?;
                form.part(name, part)
            }
            FieldValue::Text(text) => form.text(name, text.to_string()),
        };
    }
    Ok(form)
}

/// ファイルとタグを指定順に組にして読み込む
///
/// 拡張子が対象外でも送信はする（判断はサーバー側）
pub fn build_payload(files: &[PathBuf], tags: &[Tag]) -> Result<UploadPayload> {
    if files.len() != tags.len() {
        return Err(TagUploadError::TagCountMismatch {
            files: files.len(),
            tags: tags.len(),
        });
    }

    let mut payload = UploadPayload::new();
    for (path, tag) in files.iter().zip(tags) {
        if !path.is_file() {
            return Err(TagUploadError::FileNotFound(path.display().to_string()));
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        match FileKind::from_file_name(&file_name) {
            None => tracing::warn!("対象外の拡張子です: {}", file_name),
            Some(kind) if kind != tag.file_kind() => {
                tracing::warn!("{} に {} は想定外の組み合わせです", file_name, tag)
            }
            Some(_) => {}
        }

        let bytes = std::fs::read(path)?;
        payload.push(FileUpload::new(file_name, bytes), *tag);
    }

    Ok(payload)
}

/// 成果物を保存して保存先パスを返す
///
/// サーバー指定のファイル名からディレクトリ部分は取り除く
pub fn save_artifact(artifact: &ResponseArtifact, output_dir: &Path) -> Result<PathBuf> {
    let file_name = Path::new(&artifact.filename)
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_FILENAME.into());

    std::fs::create_dir_all(output_dir)?;
    let path = output_dir.join(file_name);
    std::fs::write(&path, &artifact.data)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_upload_url_joins_path() {
        let client = UploadClient::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.upload_url(), "http://localhost:8000/upload");
    }

    #[test]
    fn test_disposition_filename_non_ascii() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_DISPOSITION,
            reqwest::header::HeaderValue::from_bytes("attachment; filename=\"結果.xlsx\"".as_bytes())
                .unwrap(),
        );
        assert_eq!(disposition_filename(&headers), "結果.xlsx");
    }

    #[test]
    fn test_disposition_filename_missing_uses_default() {
        assert_eq!(disposition_filename(&HeaderMap::new()), DEFAULT_FILENAME);
    }

    #[test]
    fn test_build_payload_count_mismatch() {
        let files = vec![PathBuf::from("a.xlsx"), PathBuf::from("b.pdf")];
        let result = build_payload(&files, &[Tag::TypeA]);
        assert!(matches!(
            result,
            Err(TagUploadError::TagCountMismatch { files: 2, tags: 1 })
        ));
    }

    #[test]
    fn test_build_payload_missing_file() {
        let files = vec![PathBuf::from("/nonexistent/path/12345.xlsx")];
        let result = build_payload(&files, &[Tag::TypeA]);
        assert!(matches!(result, Err(TagUploadError::FileNotFound(_))));
    }

    #[test]
    fn test_build_payload_keeps_order() {
        let dir = tempdir().expect("Failed to create temp dir");
        let a = dir.path().join("a.xlsx");
        let b = dir.path().join("b.pdf");
        std::fs::write(&a, b"excel").unwrap();
        std::fs::write(&b, b"pdf").unwrap();

        let payload = build_payload(&[a, b], &[Tag::TypeB, Tag::TypeD]).unwrap();
        let entries = payload.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].file.file_name, "a.xlsx");
        assert_eq!(entries[0].tag, Tag::TypeB);
        assert_eq!(entries[1].file.file_name, "b.pdf");
        assert_eq!(entries[1].file.bytes, b"pdf");
        assert_eq!(entries[1].tag, Tag::TypeD);
    }

    #[test]
    fn test_save_artifact_strips_directories() {
        let dir = tempdir().expect("Failed to create temp dir");
        let artifact = ResponseArtifact {
            filename: "../../evil.xlsx".to_string(),
            data: vec![1, 2, 3],
        };

        let path = save_artifact(&artifact, dir.path()).unwrap();
        assert_eq!(path, dir.path().join("evil.xlsx"));
        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_save_artifact_creates_output_dir() {
        let dir = tempdir().expect("Failed to create temp dir");
        let out = dir.path().join("nested").join("out");
        let artifact = ResponseArtifact {
            filename: "result.xlsx".to_string(),
            data: b"xlsx".to_vec(),
        };

        let path = save_artifact(&artifact, &out).unwrap();
        assert!(path.exists());
        assert_eq!(path.file_name().unwrap(), "result.xlsx");
    }
}
