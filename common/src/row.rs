//! 入力行（ファイル選択 + タグ選択）の一覧

/// 行の識別子
///
/// 描画時のキーとしてのみ使う。行の意味は並び順だけ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(pub u32);

/// 入力行の一覧
///
/// 初期状態で1行。追加のみで削除はない
#[derive(Debug, Clone, PartialEq)]
pub struct RowList {
    rows: Vec<RowId>,
    next_id: u32,
}

impl RowList {
    pub fn new() -> Self {
        Self {
            rows: vec![RowId(0)],
            next_id: 1,
        }
    }

    /// 末尾に1行追加して、その識別子を返す
    pub fn append(&mut self) -> RowId {
        let id = RowId(self.next_id);
        self.next_id += 1;
        self.rows.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ids(&self) -> Vec<RowId> {
        self.rows.clone()
    }
}

impl Default for RowList {
    fn default() -> Self {
        Self::new()
    }
}
