//! タグ定義
//!
//! 各ファイルに付与するタグ（TypeA〜TypeD）と、受け付けるファイル形式

use std::path::Path;

/// ファイル選択で受け付ける拡張子
pub const ACCEPTED_EXTENSIONS: [&str; 3] = [".xlsx", ".xls", ".pdf"];

/// `<input type="file" accept=...>` 用の文字列
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}

/// ファイル種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Excel,
    Pdf,
}

impl FileKind {
    /// 拡張子から種別を判定（大文字小文字は区別しない）
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())?
            .to_lowercase();

        match ext.as_str() {
            "xlsx" | "xls" => Some(FileKind::Excel),
            "pdf" => Some(FileKind::Pdf),
            _ => None,
        }
    }
}

/// ファイルに付与するタグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    TypeA,
    TypeB,
    TypeC,
    TypeD,
}

impl Tag {
    /// 選択肢の表示順
    pub const ALL: [Tag; 4] = [Tag::TypeA, Tag::TypeB, Tag::TypeC, Tag::TypeD];

    /// フォーム送信値
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::TypeA => "TypeA",
            Tag::TypeB => "TypeB",
            Tag::TypeC => "TypeC",
            Tag::TypeD => "TypeD",
        }
    }

    /// 選択肢の表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            Tag::TypeA => "Type A (Excel)",
            Tag::TypeB => "Type B (Excel)",
            Tag::TypeC => "Type C (PDF)",
            Tag::TypeD => "Type D (PDF)",
        }
    }

    /// タグが想定するファイル種別
    pub fn file_kind(&self) -> FileKind {
        match self {
            Tag::TypeA | Tag::TypeB => FileKind::Excel,
            Tag::TypeC | Tag::TypeD => FileKind::Pdf,
        }
    }
}

impl std::str::FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "TypeA" => Ok(Tag::TypeA),
            "TypeB" => Ok(Tag::TypeB),
            "TypeC" => Ok(Tag::TypeC),
            "TypeD" => Ok(Tag::TypeD),
            _ => Err(format!("Unknown tag: {}. Use TypeA, TypeB, TypeC, or TypeD", s)),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
