//! Workbook Parser
//!
//! calamineのラッパーとして、ワークブックレベルの操作を提供するモジュール。
//! `FileFormat`に応じてXLSX / レガシーXLS / 自動判定のバックエンドを
//! 使い分けます。

use calamine::{open_workbook, open_workbook_auto, Data, Range, Reader, Sheets, Xls, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::api::FileFormat;
use crate::error::ExtractError;
use crate::security::SecurityConfig;

/// ワークブックパーサー
///
/// 選択されたバックエンドでワークブックを開き、シート一覧の取得と
/// シート範囲の読み出しを提供します。読み込み専用で、ファイルへの
/// 書き込みは一切行いません。
pub(crate) enum Workbook {
    /// XLSX / XLSMバックエンド
    Xlsx(Box<Xlsx<BufReader<File>>>),

    /// レガシーバイナリXLSバックエンド
    Xls(Box<Xls<BufReader<File>>>),

    /// calamineの自動判定バックエンド
    Auto(Box<Sheets<BufReader<File>>>),
}

impl Workbook {
    /// 指定された形式でワークブックを開く
    ///
    /// # 引数
    ///
    /// * `path` - スプレッドシートファイルのパス
    /// * `format` - 使用するバックエンド（`Auto`は拡張子から解決済みの
    ///   場合もそのままcalamineの自動判定に委ねる）
    ///
    /// # 戻り値
    ///
    /// * `Ok(Workbook)` - ワークブックの読み込みに成功した場合
    /// * `Err(ExtractError::Io)` - ファイルが存在しない・読めない場合
    /// * `Err(ExtractError::Parse)` - ワークブックとして解析できない場合
    /// * `Err(ExtractError::SecurityViolation)` - サイズ上限を超えた場合
    pub fn open(path: &Path, format: FileFormat) -> Result<Self, ExtractError> {
        // 1. セキュリティチェック: 入力ファイルサイズの上限
        let security_config = SecurityConfig::default();
        let file_size = std::fs::metadata(path)?.len();
        if file_size > security_config.max_input_file_size {
            return Err(ExtractError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                file_size, security_config.max_input_file_size
            )));
        }

        // 2. バックエンドの選択とオープン
        match format {
            FileFormat::Xlsx => {
                let workbook: Xlsx<_> = open_workbook(path).map_err(calamine::Error::from)?;
                Ok(Workbook::Xlsx(Box::new(workbook)))
            }
            FileFormat::Xls => {
                let workbook: Xls<_> = open_workbook(path).map_err(calamine::Error::from)?;
                Ok(Workbook::Xls(Box::new(workbook)))
            }
            FileFormat::Auto => {
                let workbook = open_workbook_auto(path)?;
                Ok(Workbook::Auto(Box::new(workbook)))
            }
        }
    }

    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        match self {
            Workbook::Xlsx(workbook) => workbook.sheet_names().to_vec(),
            Workbook::Xls(workbook) => workbook.sheet_names().to_vec(),
            Workbook::Auto(workbook) => workbook.sheet_names().to_vec(),
        }
    }

    /// 指定されたシートのセル範囲を取得
    ///
    /// シート名は呼び出し元で存在確認済みであることを想定しますが、
    /// バックエンド由来のエラーはそのまま`Parse`として伝播します。
    pub fn worksheet_range(&mut self, sheet_name: &str) -> Result<Range<Data>, ExtractError> {
        match self {
            Workbook::Xlsx(workbook) => workbook
                .worksheet_range(sheet_name)
                .map_err(|e| ExtractError::Parse(e.into())),
            Workbook::Xls(workbook) => workbook
                .worksheet_range(sheet_name)
                .map_err(|e| ExtractError::Parse(e.into())),
            Workbook::Auto(workbook) => workbook
                .worksheet_range(sheet_name)
                .map_err(ExtractError::Parse),
        }
    }
}
