//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// sheetsnapクレート全体で使用するエラー型
///
/// スプレッドシートの読み込み、解析、スナップショット生成中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（ファイル読み込み失敗など）
/// - `Parse`: ワークブックの解析中に発生したエラー（calamine由来）
/// - `SheetNotFound`: 指定されたシートがワークブックに存在しないエラー
/// - `Config`: 設定の検証に失敗したエラー（無効な日付形式など）
/// - `Json`: スナップショットのJSONシリアライズに失敗したエラー
/// - `SecurityViolation`: 入力ファイルサイズ制限に違反したエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use sheetsnap::{ExtractError, ExtractorBuilder};
///
/// fn read_sheet(path: &str) -> Result<(), ExtractError> {
///     let extractor = ExtractorBuilder::new().build()?;
///     let snapshot = extractor.extract(path, "Sheet1")?;
///     println!("{}", snapshot.markdown);
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum ExtractError {
    /// I/O操作中に発生したエラー
    ///
    /// ファイルの読み込み失敗、書き込み失敗など、標準ライブラリの
    /// `std::io::Error`が発生した場合に使用されます。
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ワークブックの解析中に発生したエラー
    ///
    /// calamineクレートがスプレッドシートを解析する際に発生したエラーです。
    /// ファイル形式が不正、破損したファイル、サポートされていない形式などが
    /// 原因となります。
    ///
    /// `#[from]`属性により、`calamine::Error`から自動的に変換されます。
    #[error("Failed to parse workbook: {0}")]
    Parse(#[from] calamine::Error),

    /// 指定されたシートがワークブックに存在しないエラー
    ///
    /// `extract()`に渡されたシート名がワークブックのシート一覧に
    /// 見つからない場合に発生します。部分的な結果は返されません。
    #[error("Sheet '{sheet}' not found in workbook")]
    SheetNotFound {
        /// 見つからなかったシート名
        sheet: String,
    },

    /// 設定の検証に失敗したエラー
    ///
    /// `ExtractorBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します。例えば、カスタム日付形式が不正な場合などです。
    #[error("Configuration error: {0}")]
    Config(String),

    /// スナップショットのJSONシリアライズに失敗したエラー
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルサイズが上限を超えた場合に発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}
