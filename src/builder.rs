//! Builder Module
//!
//! Fluent Builder APIを提供し、`Extractor`インスタンスを段階的に構築する。

use chrono::NaiveDate;
use std::fmt::Write as _;
use std::path::Path;

use crate::api::{DateFormat, FileFormat};
use crate::error::ExtractError;
use crate::formatter::CellFormatter;
use crate::grid::Grid;
use crate::parser::Workbook;
use crate::snapshot::SheetSnapshot;

/// 抽出処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ExtractConfig {
    /// 入力ファイル形式（バックエンド選択）
    pub file_format: FileFormat,

    /// 日付形式
    pub date_format: DateFormat,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            file_format: FileFormat::Auto,
            date_format: DateFormat::Iso8601,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Extractor`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use sheetsnap::{ExtractorBuilder, FileFormat};
///
/// # fn main() -> Result<(), sheetsnap::ExtractError> {
/// let extractor = ExtractorBuilder::new()
///     .with_file_format(FileFormat::Xls)
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ExtractorBuilder {
    /// 内部設定（構築中）
    config: ExtractConfig,
}

impl ExtractorBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - ファイル形式: 拡張子からの自動推定
    /// - 日付形式: ISO 8601 (YYYY-MM-DD)
    pub fn new() -> Self {
        Self {
            config: ExtractConfig::default(),
        }
    }

    /// 入力ファイル形式を指定する
    ///
    /// デフォルトの`FileFormat::Auto`では、`.xlsx`/`.xlsm`はXLSX
    /// バックエンド、`.xls`はレガシーXLSバックエンド、それ以外は
    /// calamineの自動判定で読み込みます。明示的に指定した場合は
    /// 拡張子に関係なくそのバックエンドを使用します。
    ///
    /// # 引数
    ///
    /// * `format: FileFormat`: 入力ファイル形式
    pub fn with_file_format(mut self, format: FileFormat) -> Self {
        self.config.file_format = format;
        self
    }

    /// 日付の出力形式を指定する
    ///
    /// # 引数
    ///
    /// * `format: DateFormat`: 日付形式
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use sheetsnap::{DateFormat, ExtractorBuilder};
    ///
    /// # fn main() -> Result<(), sheetsnap::ExtractError> {
    /// // カスタム形式
    /// let extractor = ExtractorBuilder::new()
    ///     .with_date_format(DateFormat::Custom("%Y年%m月%d日".to_string()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_date_format(mut self, format: DateFormat) -> Self {
        self.config.date_format = format;
        self
    }

    /// 設定を検証し、`Extractor`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Extractor)`: 設定が有効な場合、Extractorインスタンス
    /// * `Err(ExtractError::Config)`: 設定が無効な場合
    ///   （カスタム日付形式が不正な書式文字列など）
    pub fn build(self) -> Result<Extractor, ExtractError> {
        // カスタム日付形式の検証: テスト用の日時でフォーマット試行
        if let DateFormat::Custom(ref format_str) = self.config.date_format {
            let probe = NaiveDate::from_ymd_opt(2025, 1, 1)
                .and_then(|d| d.and_hms_opt(12, 34, 56))
                .ok_or_else(|| ExtractError::Config("Failed to create probe date".to_string()))?;

            let mut formatted = String::new();
            let result = write!(&mut formatted, "{}", probe.format(format_str));
            if result.is_err() || formatted.is_empty() {
                return Err(ExtractError::Config(format!(
                    "Invalid date format string: '{}'",
                    format_str
                )));
            }
        }

        Ok(Extractor::new(self.config))
    }
}

/// 抽出処理のファサード
///
/// スプレッドシートのシート1枚を構造化スナップショットへ変換する
/// メインエントリーポイントです。`ExtractorBuilder`で構築された設定に
/// 基づいて抽出処理を実行します。
///
/// 抽出は読み込み専用かつ決定的で、同じファイルとシート名に対しては
/// 常にバイト単位で同一のスナップショットを返します。
///
/// # 使用例
///
/// ```rust,no_run
/// use sheetsnap::ExtractorBuilder;
///
/// # fn main() -> Result<(), sheetsnap::ExtractError> {
/// let extractor = ExtractorBuilder::new().build()?;
/// let snapshot = extractor.extract("example.xlsx", "Sheet1")?;
/// println!("{}", snapshot.markdown);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Extractor {
    /// 抽出設定
    config: ExtractConfig,

    /// セルフォーマッター
    formatter: CellFormatter,
}

impl Extractor {
    pub(crate) fn new(config: ExtractConfig) -> Self {
        Self {
            formatter: CellFormatter::new(config.date_format.clone()),
            config,
        }
    }

    /// シート1枚を抽出してスナップショットを生成する
    ///
    /// # 引数
    ///
    /// * `path` - スプレッドシートファイルのパス
    /// * `sheet_name` - 抽出対象のシート名
    ///
    /// # 戻り値
    ///
    /// * `Ok(SheetSnapshot)` - 抽出に成功した場合
    /// * `Err(ExtractError::Io)` - ファイルが存在しない・読めない場合
    /// * `Err(ExtractError::Parse)` - ワークブックとして解析できない場合
    /// * `Err(ExtractError::SheetNotFound)` - シートが存在しない場合
    ///
    /// # 処理フロー
    ///
    /// 1. バックエンドの解決（設定またはファイル拡張子から）
    /// 2. ワークブックのオープン
    /// 3. シート存在確認
    /// 4. シート範囲の読み出しとグリッド構築
    /// 5. スナップショットの組み立て
    pub fn extract<P: AsRef<Path>>(
        &self,
        path: P,
        sheet_name: &str,
    ) -> Result<SheetSnapshot, ExtractError> {
        let path = path.as_ref();

        // 1. バックエンドの解決
        let format = self.resolve_format(path);

        // 2. ワークブックのオープン
        let mut workbook = Workbook::open(path, format)?;

        // 3. シート存在確認（部分的な結果を返さないため先に検証）
        if !workbook.sheet_names().iter().any(|n| n == sheet_name) {
            return Err(ExtractError::SheetNotFound {
                sheet: sheet_name.to_string(),
            });
        }

        // 4. シート範囲の読み出しとグリッド構築
        let range = workbook.worksheet_range(sheet_name)?;
        let grid = Grid::from_range(&range, &self.formatter);

        // 5. スナップショットの組み立て
        Ok(SheetSnapshot::from_grid(sheet_name, &grid))
    }

    /// ワークブックに含まれるシート名の一覧を取得する
    ///
    /// 抽出対象のシートを選択する前の列挙用ヘルパーです。
    ///
    /// # 引数
    ///
    /// * `path` - スプレッドシートファイルのパス
    pub fn sheet_names<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>, ExtractError> {
        let path = path.as_ref();
        let workbook = Workbook::open(path, self.resolve_format(path))?;
        Ok(workbook.sheet_names())
    }

    /// 設定とパスからバックエンドを解決（内部ヘルパー）
    fn resolve_format(&self, path: &Path) -> FileFormat {
        match self.config.file_format {
            FileFormat::Auto => FileFormat::from_path(path),
            other => other,
        }
    }
}
