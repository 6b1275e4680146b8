//! Formatter Module
//!
//! セル値の正規化とフォーマット処理を提供するモジュール。
//! calamineの動的なセル値を`CellScalar`に写像する境界と、
//! Markdownテーブル用のエスケープ処理を実装します。

use calamine::Data;
use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::api::DateFormat;
use crate::types::CellScalar;

/// セルフォーマッター
///
/// リーダーが返すセル値を`CellScalar`へ変換するファサードです。
/// 日付・時刻セルはこの境界で設定に従って文字列化されます。
#[derive(Debug, Clone)]
pub(crate) struct CellFormatter {
    /// 日付形式
    date_format: DateFormat,
}

impl CellFormatter {
    /// 新しいCellFormatterインスタンスを生成
    pub fn new(date_format: DateFormat) -> Self {
        Self { date_format }
    }

    /// リーダーのセル値を`CellScalar`に変換する
    ///
    /// # 引数
    ///
    /// * `data` - calamineのセル値
    ///
    /// # 変換規則
    ///
    /// - 文字列 → `Text`（そのまま）
    /// - 整数・浮動小数点数 → `Number`
    /// - 論理値 → `Text("TRUE")` / `Text("FALSE")`
    /// - エラー値（例: `#DIV/0!`）→ エラーコードの`Text`
    /// - 日付・時刻 → 設定された形式で文字列化した`Text`
    /// - 空セル → `Empty`
    pub fn scalar(&self, data: &Data) -> CellScalar {
        match data {
            Data::Empty => CellScalar::Empty,
            Data::String(s) => CellScalar::Text(s.clone()),
            Data::Float(f) => CellScalar::Number(*f),
            Data::Int(i) => CellScalar::Number(*i as f64),
            Data::Bool(b) => CellScalar::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
            Data::Error(e) => CellScalar::Text(e.to_string()),
            Data::DateTime(dt) => {
                if dt.is_duration() {
                    match dt.as_duration() {
                        Some(d) => CellScalar::Text(format_duration(&d)),
                        None => CellScalar::Number(dt.as_f64()),
                    }
                } else {
                    match dt.as_datetime() {
                        Some(ndt) => CellScalar::Text(self.format_datetime(&ndt)),
                        // 変換不能なシリアル値は生の数値として扱う
                        None => CellScalar::Number(dt.as_f64()),
                    }
                }
            }
            Data::DateTimeIso(s) => CellScalar::Text(s.clone()),
            Data::DurationIso(s) => CellScalar::Text(s.clone()),
        }
    }

    /// 日時を設定された形式で文字列化する
    ///
    /// `Iso8601`では時刻成分が00:00:00の場合に日付のみ（`%Y-%m-%d`）、
    /// それ以外は`%Y-%m-%d %H:%M:%S`として出力します。
    fn format_datetime(&self, ndt: &NaiveDateTime) -> String {
        match &self.date_format {
            DateFormat::Iso8601 => {
                if ndt.time() == NaiveTime::MIN {
                    ndt.date().format("%Y-%m-%d").to_string()
                } else {
                    ndt.format("%Y-%m-%d %H:%M:%S").to_string()
                }
            }
            DateFormat::Custom(format_str) => ndt.format(format_str).to_string(),
        }
    }
}

/// 時間間隔を`H:MM:SS`形式で文字列化する
fn format_duration(duration: &Duration) -> String {
    let total_seconds = duration.num_seconds();
    let sign = if total_seconds < 0 { "-" } else { "" };
    let total_seconds = total_seconds.abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total_seconds / 3600,
        (total_seconds / 60) % 60,
        total_seconds % 60
    )
}

/// Markdownテーブル用にセル文字列をエスケープする
///
/// 改行は`<br>`マーカーに置換し（`\r\n` / `\r`は先に`\n`へ正規化）、
/// 列区切りを壊すパイプ文字は`\|`にエスケープします。
pub(crate) fn escape_markdown(s: &str) -> String {
    s.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "<br>")
        .replace('|', "\\|")
}
