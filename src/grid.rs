//! Grid Module
//!
//! シートの生のセル配置を表す稠密なグリッド構造と、
//! 固定幅Markdownテーブルへの純粋なレンダリングを提供するモジュール。

use calamine::{Data, Range};

use crate::formatter::{escape_markdown, CellFormatter};
use crate::types::{column_label, CellScalar};

/// 列の揃え方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alignment {
    Left,
    Right,
}

/// シート1枚分の稠密なグリッド構造
///
/// A1を原点とする行×列の`CellScalar`行列です。ヘッダー行の仮定はなく、
/// 行0もデータとして扱われます。ファイル先頭の空行・空列も、シートに
/// 保存されている形のまま保持されます。
///
/// 抽出呼び出しごとに新しく構築され、不変でキャッシュされません。
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// グリッドデータ（行 × 列）
    cells: Vec<Vec<CellScalar>>,

    /// 行数
    rows: usize,

    /// 列数
    cols: usize,
}

impl Grid {
    /// 行データからグリッドを構築する
    ///
    /// 行の長さが不揃いの場合は、最長の行に合わせて`Empty`で埋めて
    /// 矩形にします。ファイルI/Oなしでテストやレンダリングに使用できます。
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use sheetsnap::{CellScalar, Grid};
    ///
    /// let grid = Grid::from_rows(vec![
    ///     vec![CellScalar::Text("a".to_string())],
    ///     vec![CellScalar::Number(1.0), CellScalar::Number(2.0)],
    /// ]);
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.cols(), 2);
    /// ```
    pub fn from_rows(mut rows: Vec<Vec<CellScalar>>) -> Self {
        let cols = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(cols, CellScalar::Empty);
        }
        let row_count = rows.len();

        Self {
            cells: rows,
            rows: row_count,
            cols,
        }
    }

    /// calamineのセル範囲からグリッドを構築する（内部用）
    ///
    /// 範囲の終端座標からグリッドサイズを決定し、A1からの絶対座標で
    /// セルを配置します。範囲開始前の先頭の空行・空列も保持されます。
    pub(crate) fn from_range(range: &Range<Data>, formatter: &CellFormatter) -> Self {
        // 1. グリッドサイズの決定（A1起点、終端セルまで）
        let (rows, cols) = match range.end() {
            Some((end_row, end_col)) => ((end_row + 1) as usize, (end_col + 1) as usize),
            None => (0, 0),
        };

        // 2. 各セルをCellScalarへ変換して配置
        let mut cells = Vec::with_capacity(rows);
        for row_idx in 0..rows {
            let mut row = Vec::with_capacity(cols);
            for col_idx in 0..cols {
                let scalar = match range.get_value((row_idx as u32, col_idx as u32)) {
                    Some(data) => formatter.scalar(data),
                    None => CellScalar::Empty,
                };
                row.push(scalar);
            }
            cells.push(row);
        }

        Self { cells, rows, cols }
    }

    /// 行数を取得
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 列数を取得
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// 指定された行を取得（範囲外の場合は空スライス）
    pub fn row(&self, row_idx: usize) -> &[CellScalar] {
        if row_idx < self.rows {
            &self.cells[row_idx]
        } else {
            &[]
        }
    }

    /// 各列の列ラベル（A, B, …, Z, AA, …）を取得
    pub fn column_labels(&self) -> Vec<String> {
        (0..self.cols).map(column_label).collect()
    }

    /// グリッドをMarkdownテーブル文字列にレンダリングする
    ///
    /// 空のヘッダー行、揃え区切り行、データ行の順で構成される
    /// 固定幅のMarkdownテーブルを生成します。行数Rのグリッドに対して
    /// ちょうど`1 + 1 + R`行になります。グリッドが空（行または列が0）の
    /// 場合は空文字列を返します。
    ///
    /// # レンダリング規則
    ///
    /// - 列幅 = その列のセル文字列の最大文字数（最小3）
    /// - すべてのセルが数値または空の列は右揃え、それ以外は左揃え
    /// - セル内の改行は`<br>`、パイプ文字は`\|`として出力
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use sheetsnap::{CellScalar, Grid};
    ///
    /// let grid = Grid::from_rows(vec![
    ///     vec![CellScalar::Text("Hello".to_string()), CellScalar::Number(10.0)],
    ///     vec![CellScalar::Empty, CellScalar::Number(20.5)],
    /// ]);
    ///
    /// let expected = "\
    /// |       |      |
    /// |-------|-----:|
    /// | Hello |   10 |
    /// |       | 20.5 |";
    /// assert_eq!(grid.to_markdown(), expected);
    /// ```
    pub fn to_markdown(&self) -> String {
        if self.rows == 0 || self.cols == 0 {
            return String::new();
        }

        // 1. セル文字列の事前計算（エスケープ込み、幅計算と出力で共用）
        let rendered: Vec<Vec<String>> = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| escape_markdown(&cell.display_string()))
                    .collect()
            })
            .collect();

        // 2. 列幅と揃え方向の計算
        let widths = self.column_widths(&rendered);
        let alignments = self.column_alignments();

        // 3. 空のヘッダー行（偽のヘッダー名を導入しないため）
        let mut lines = Vec::with_capacity(self.rows + 2);
        let header: Vec<String> = widths.iter().map(|w| " ".repeat(w + 2)).collect();
        lines.push(format!("|{}|", header.join("|")));

        // 4. 揃え区切り行
        let separator: Vec<String> = widths
            .iter()
            .zip(alignments.iter())
            .map(|(w, align)| match align {
                Alignment::Right => format!("{}:", "-".repeat(w + 1)),
                Alignment::Left => "-".repeat(w + 2),
            })
            .collect();
        lines.push(format!("|{}|", separator.join("|")));

        // 5. データ行
        for row in &rendered {
            let cells: Vec<String> = row
                .iter()
                .zip(widths.iter())
                .zip(alignments.iter())
                .map(|((cell, w), align)| {
                    let pad = w.saturating_sub(cell.chars().count());
                    match align {
                        Alignment::Right => format!(" {}{} ", " ".repeat(pad), cell),
                        Alignment::Left => format!(" {}{} ", cell, " ".repeat(pad)),
                    }
                })
                .collect();
            lines.push(format!("|{}|", cells.join("|")));
        }

        lines.join("\n")
    }

    /// 列幅を計算（内部ヘルパー）
    ///
    /// 各列のセル文字列（エスケープ後）の最大文字数を求めます。
    /// 区切り行が最低`---`を持てるよう、最小幅は3文字です。
    fn column_widths(&self, rendered: &[Vec<String>]) -> Vec<usize> {
        let mut widths = vec![3; self.cols];

        for row in rendered {
            for (col_idx, cell) in row.iter().enumerate() {
                widths[col_idx] = widths[col_idx].max(cell.chars().count());
            }
        }

        widths
    }

    /// 列の揃え方向を計算（内部ヘルパー）
    ///
    /// 文字列セルを1つも含まない列（数値と空のみ）は右揃え、
    /// それ以外は左揃えになります。
    fn column_alignments(&self) -> Vec<Alignment> {
        (0..self.cols)
            .map(|col_idx| {
                let has_text = self
                    .cells
                    .iter()
                    .any(|row| matches!(row[col_idx], CellScalar::Text(_)));
                if has_text {
                    Alignment::Left
                } else {
                    Alignment::Right
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> CellScalar {
        CellScalar::Text(s.to_string())
    }

    #[test]
    fn test_from_rows_rectangular() {
        let grid = Grid::from_rows(vec![
            vec![text("a"), text("b")],
            vec![text("c"), text("d")],
        ]);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
    }

    #[test]
    fn test_from_rows_ragged_rows_padded() {
        let grid = Grid::from_rows(vec![
            vec![text("a")],
            vec![text("b"), CellScalar::Number(1.0), text("c")],
        ]);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.row(0)[1], CellScalar::Empty);
        assert_eq!(grid.row(0)[2], CellScalar::Empty);
    }

    #[test]
    fn test_from_rows_empty() {
        let grid = Grid::from_rows(vec![]);
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.cols(), 0);
        assert_eq!(grid.to_markdown(), "");
    }

    #[test]
    fn test_column_labels() {
        let grid = Grid::from_rows(vec![vec![
            CellScalar::Empty,
            CellScalar::Empty,
            CellScalar::Empty,
        ]]);
        assert_eq!(grid.column_labels(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_to_markdown_exact_output() {
        let grid = Grid::from_rows(vec![
            vec![text("Hello"), CellScalar::Number(10.0)],
            vec![CellScalar::Empty, CellScalar::Number(20.5)],
        ]);

        let expected = "\
|       |      |
|-------|-----:|
| Hello |   10 |
|       | 20.5 |";
        assert_eq!(grid.to_markdown(), expected);
    }

    #[test]
    fn test_to_markdown_line_and_pipe_counts() {
        let grid = Grid::from_rows(vec![
            vec![text("a"), text("b"), CellScalar::Number(1.0)],
            vec![text("c"), CellScalar::Empty, CellScalar::Number(2.0)],
            vec![text("d"), text("e"), CellScalar::Empty],
        ]);

        let markdown = grid.to_markdown();
        let lines: Vec<&str> = markdown.lines().collect();

        // ヘッダー + 区切り + データ3行
        assert_eq!(lines.len(), 5);
        for line in &lines {
            assert!(line.starts_with('|'));
            assert!(line.ends_with('|'));
            // 列数 + 1 本のパイプ
            assert_eq!(line.matches('|').count(), 4);
        }
    }

    #[test]
    fn test_to_markdown_minimum_width() {
        // 1文字のセルでも区切り行は最低"---"を持つ
        let grid = Grid::from_rows(vec![vec![text("x")]]);
        let expected = "\
|     |
|-----|
| x   |";
        assert_eq!(grid.to_markdown(), expected);
    }

    #[test]
    fn test_to_markdown_numeric_column_right_aligned() {
        let grid = Grid::from_rows(vec![
            vec![CellScalar::Number(1.0)],
            vec![CellScalar::Number(100.0)],
        ]);
        let markdown = grid.to_markdown();
        let lines: Vec<&str> = markdown.lines().collect();
        assert_eq!(lines[1], "|----:|");
        assert_eq!(lines[2], "|   1 |");
        assert_eq!(lines[3], "| 100 |");
    }

    #[test]
    fn test_to_markdown_text_column_left_aligned() {
        // 数値が混ざっていても文字列を含む列は左揃え
        let grid = Grid::from_rows(vec![
            vec![text("label")],
            vec![CellScalar::Number(7.0)],
        ]);
        let markdown = grid.to_markdown();
        let lines: Vec<&str> = markdown.lines().collect();
        assert_eq!(lines[1], "|-------|");
        assert_eq!(lines[2], "| label |");
        assert_eq!(lines[3], "| 7     |");
    }

    #[test]
    fn test_to_markdown_all_empty_column_right_aligned() {
        // 完全に空の列は数値列と同様に右揃え
        let grid = Grid::from_rows(vec![
            vec![text("a"), CellScalar::Empty],
            vec![text("b"), CellScalar::Empty],
        ]);
        let markdown = grid.to_markdown();
        let lines: Vec<&str> = markdown.lines().collect();
        assert_eq!(lines[1], "|-----|----:|");
    }

    #[test]
    fn test_to_markdown_escapes_pipes() {
        let grid = Grid::from_rows(vec![vec![text("a|b")]]);
        let markdown = grid.to_markdown();
        assert!(markdown.contains("a\\|b"));
        // エスケープ後の4文字が幅計算に使われる
        let lines: Vec<&str> = markdown.lines().collect();
        assert_eq!(lines[2], "| a\\|b |");
    }

    #[test]
    fn test_to_markdown_renders_newlines_as_br() {
        let grid = Grid::from_rows(vec![vec![text("line1\nline2")]]);
        let markdown = grid.to_markdown();
        assert!(markdown.contains("line1<br>line2"));
        // <br>マーカーにより行数は増えない
        assert_eq!(markdown.lines().count(), 3);
    }

    #[test]
    fn test_to_markdown_integer_valued_float() {
        let grid = Grid::from_rows(vec![vec![CellScalar::Number(4.0)]]);
        let lines_owned = grid.to_markdown();
        let lines: Vec<&str> = lines_owned.lines().collect();
        assert_eq!(lines[2], "|   4 |");
    }

    #[test]
    fn test_to_markdown_non_finite_renders_empty() {
        let grid = Grid::from_rows(vec![vec![CellScalar::Number(f64::NAN)]]);
        let lines_owned = grid.to_markdown();
        let lines: Vec<&str> = lines_owned.lines().collect();
        assert_eq!(lines[2], "|     |");
        // 数値のみの列なので右揃えのまま
        assert_eq!(lines[1], "|----:|");
    }
}
