//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use std::path::Path;

/// 入力ファイル形式
///
/// ワークブックを開く際に使用するパーサーバックエンドを指定します。
/// デフォルトの`Auto`では拡張子からバックエンドを推定します。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FileFormat {
    /// 拡張子からバックエンドを推定（デフォルト）
    ///
    /// - `.xlsx` / `.xlsm` → XLSXバックエンド
    /// - `.xls` → レガシーXLSバックエンド
    /// - それ以外 → calamineの自動判定
    Auto,

    /// XLSX / XLSM（OOXMLコンテナ）バックエンド
    Xlsx,

    /// レガシーバイナリXLSバックエンド
    Xls,
}

impl FileFormat {
    /// ファイルパスの拡張子から形式を推定する
    ///
    /// 拡張子の大文字小文字は区別しません。既知の拡張子に一致しない
    /// 場合は`Auto`を返し、バックエンドの自動判定に委ねます。
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use std::path::Path;
    /// use sheetsnap::FileFormat;
    ///
    /// assert_eq!(FileFormat::from_path(Path::new("data.xlsx")), FileFormat::Xlsx);
    /// assert_eq!(FileFormat::from_path(Path::new("DATA.XLSM")), FileFormat::Xlsx);
    /// assert_eq!(FileFormat::from_path(Path::new("old.xls")), FileFormat::Xls);
    /// assert_eq!(FileFormat::from_path(Path::new("table.ods")), FileFormat::Auto);
    /// ```
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("xlsx") | Some("xlsm") => FileFormat::Xlsx,
            Some("xls") => FileFormat::Xls,
            _ => FileFormat::Auto,
        }
    }
}

/// 日付の出力形式
///
/// 日付・時刻セルを文字列化する際の出力形式を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateFormat {
    /// ISO 8601形式（デフォルト）
    ///
    /// 時刻成分が00:00:00の場合は`YYYY-MM-DD`、それ以外は
    /// `YYYY-MM-DD HH:MM:SS`として出力します。
    Iso8601,

    /// カスタム形式（chrono互換フォーマット文字列）
    ///
    /// # フォーマット指定子（主要なもの）
    ///
    /// - `%Y`: 4桁の年（例: 2025）
    /// - `%m`: 2桁の月（01-12）
    /// - `%d`: 2桁の日（01-31）
    /// - `%H`: 24時間形式の時（00-23）
    /// - `%M`: 分（00-59）
    /// - `%S`: 秒（00-59）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use sheetsnap::{DateFormat, ExtractorBuilder};
    ///
    /// # fn main() -> Result<(), sheetsnap::ExtractError> {
    /// let extractor = ExtractorBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%Y年%m月%d日".to_string()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    Custom(String),
}
