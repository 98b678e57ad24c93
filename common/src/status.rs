//! 送信状態（ローディング表示・ダウンロードリンク）

/// ダウンロードリンク
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    /// ブラウザではオブジェクトURL、CLIでは保存先パス
    pub href: String,
    pub filename: String,
}

/// レスポンスから得た成果物
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseArtifact {
    pub filename: String,
    pub data: Vec<u8>,
}

/// 送信ハンドラが書き換える画面状態
///
/// 同時送信は防がない。後から書いた方が残る
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitView {
    pub loading: bool,
    pub download: Option<DownloadLink>,
}

impl SubmitView {
    /// 送信開始: ローディング表示、前回のリンクを隠す
    ///
    /// 置き換えられたリンクを返す（解放は呼び出し側）
    pub fn begin(&mut self) -> Option<DownloadLink> {
        self.loading = true;
        self.download.take()
    }

    /// 成功: リンクを表示
    pub fn succeed(&mut self, link: DownloadLink) -> Option<DownloadLink> {
        self.download.replace(link)
    }

    /// 成否にかかわらず最後に呼ぶ
    pub fn finish(&mut self) {
        self.loading = false;
    }

    pub fn download_visible(&self) -> bool {
        self.download.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(name: &str) -> DownloadLink {
        DownloadLink {
            href: format!("blob:{}", name),
            filename: name.to_string(),
        }
    }

    #[test]
    fn test_initial_state_hidden() {
        let view = SubmitView::default();
        assert!(!view.loading);
        assert!(!view.download_visible());
    }

    #[test]
    fn test_success_path() {
        let mut view = SubmitView::default();
        view.begin();
        assert!(view.loading);

        view.succeed(link("result.xlsx"));
        view.finish();

        assert!(!view.loading);
        assert_eq!(view.download.as_ref().map(|l| l.filename.as_str()), Some("result.xlsx"));
    }

    #[test]
    fn test_failure_path_hides_previous_link() {
        let mut view = SubmitView::default();
        view.succeed(link("old.xlsx"));

        let previous = view.begin();
        assert_eq!(previous, Some(link("old.xlsx")));
        assert!(!view.download_visible());

        view.finish();
        assert!(!view.loading);
        assert!(!view.download_visible());
    }

    #[test]
    fn test_overlapping_submissions_last_write_wins() {
        let mut view = SubmitView::default();
        view.begin();
        view.begin();

        view.succeed(link("first.xlsx"));
        view.finish();
        // 2件目がまだ処理中でもローディングは消える
        assert!(!view.loading);

        let replaced = view.succeed(link("second.xlsx"));
        view.finish();
        assert_eq!(replaced, Some(link("first.xlsx")));
        assert_eq!(view.download, Some(link("second.xlsx")));
    }
}
