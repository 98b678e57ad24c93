//! Content-Dispositionヘッダーからのファイル名取得

use regex::Regex;

/// ヘッダーが無い・読めない場合のファイル名
pub const DEFAULT_FILENAME: &str = "downloaded_file.xlsx";

/// `filename="..."` を取り出す。取れなければ既定名
///
/// 最後の `"` までを貪欲に取る
pub fn filename_from_content_disposition(header: Option<&str>) -> String {
    lazy_static::lazy_static! {
        static ref FILENAME_RE: Regex = Regex::new(r#"filename="(.+)""#).unwrap();
    }

    header
        .and_then(|value| FILENAME_RE.captures(value))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}
