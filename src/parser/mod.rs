//! Parser Module
//!
//! calamineを使用したワークブック読み込みの基礎実装。
//! ファイル形式ごとのバックエンド選択を吸収します。

mod workbook;

pub(crate) use workbook::Workbook;
