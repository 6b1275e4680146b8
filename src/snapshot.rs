//! Snapshot Module
//!
//! シート1枚分の抽出結果（スナップショット）を定義するモジュール。
//! 列ラベル、行レコード、フラットテキスト列、Markdownテーブルを
//! ひとまとめにした値として返します。

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::ExtractError;
use crate::grid::Grid;
use crate::types::CellScalar;

/// 1行分のレコード
///
/// 列ラベル（A, B, …）からセル値への順序付きマッピングです。
/// 空セルも明示的な`CellScalar::Empty`として保持され、JSONでは
/// `null`として出力されます。
#[derive(Debug, Clone, PartialEq)]
pub struct RowRecord {
    entries: Vec<(String, CellScalar)>,
}

impl RowRecord {
    /// ラベルと値のペアからレコードを生成（内部用）
    pub(crate) fn new(entries: Vec<(String, CellScalar)>) -> Self {
        Self { entries }
    }

    /// 列ラベルでセル値を取得
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use sheetsnap::{CellScalar, Grid, SheetSnapshot};
    ///
    /// let grid = Grid::from_rows(vec![vec![CellScalar::Number(10.0)]]);
    /// let snapshot = SheetSnapshot::from_grid("Sheet1", &grid);
    /// assert_eq!(snapshot.rows[0].get("A"), Some(&CellScalar::Number(10.0)));
    /// assert_eq!(snapshot.rows[0].get("Z"), None);
    /// ```
    pub fn get(&self, label: &str) -> Option<&CellScalar> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    /// (ラベル, 値)のペアを列順に走査するイテレーターを取得
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellScalar)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), v))
    }

    /// 列数を取得
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// レコードが空かどうかを判定
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RowRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // 列順を保ったマップとして出力
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

/// シート1枚分の抽出結果
///
/// `Extractor::extract()`が返す値です。すべてのフィールドは抽出時に
/// 一度だけ計算され、呼び出しをまたいで共有・キャッシュされることは
/// ありません。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetSnapshot {
    /// 抽出対象のシート名（入力をそのまま反映）
    pub sheet_name: String,

    /// 列ラベルのリスト（A, B, …, Z, AA, …）
    pub columns: Vec<String>,

    /// 行レコードのリスト（行順を保持）
    pub rows: Vec<RowRecord>,

    /// フラットテキスト列
    ///
    /// グリッドを行優先で走査し、空でないセル文字列をトリムして
    /// 初出順に集めたリストです。完全一致による重複は除去されます。
    pub flat_text: Vec<String>,

    /// Markdownテーブル文字列
    pub markdown: String,
}

impl SheetSnapshot {
    /// グリッドからスナップショットを構築する
    ///
    /// 行レコードとフラットテキスト列を1回の走査で構築し、Markdown
    /// テーブルはグリッドから独立にレンダリングします。
    ///
    /// # 引数
    ///
    /// * `sheet_name` - スナップショットに記録するシート名
    /// * `grid` - 抽出済みのグリッド
    pub fn from_grid(sheet_name: &str, grid: &Grid) -> Self {
        let columns = grid.column_labels();

        let mut rows = Vec::with_capacity(grid.rows());
        let mut flat_text = Vec::new();
        let mut seen = HashSet::new();

        for row_idx in 0..grid.rows() {
            let row = grid.row(row_idx);
            let mut entries = Vec::with_capacity(columns.len());

            for (col_idx, label) in columns.iter().enumerate() {
                let scalar = row[col_idx].clone();

                // フラットテキスト: トリム後に空でなく、未出現のもののみ
                let trimmed = scalar.display_string().trim().to_string();
                if !trimmed.is_empty() && seen.insert(trimmed.clone()) {
                    flat_text.push(trimmed);
                }

                entries.push((label.clone(), scalar));
            }

            rows.push(RowRecord::new(entries));
        }

        Self {
            sheet_name: sheet_name.to_string(),
            columns,
            rows,
            flat_text,
            markdown: grid.to_markdown(),
        }
    }

    /// スナップショットをJSON文字列にシリアライズする
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 整形済みJSON文字列
    /// * `Err(ExtractError::Json)` - シリアライズに失敗した場合
    pub fn to_json(&self) -> Result<String, ExtractError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Markdownテーブルをファイルに書き出す
    ///
    /// 出力先の親ディレクトリが存在しない場合は作成します。出力パスは
    /// 常に明示的な引数として受け取り、プロセス全体の出力先状態には
    /// 依存しません。
    ///
    /// # 引数
    ///
    /// * `path` - 出力先のファイルパス（例: `output/sheet.md`）
    pub fn write_markdown<P: AsRef<Path>>(&self, path: P) -> Result<(), ExtractError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = fs::File::create(path)?;
        writeln!(file, "{}", self.markdown)?;

        Ok(())
    }
}
