//! Types Module
//!
//! クレート全体で使用する共通データ型を定義するモジュール。

use serde::Serialize;

/// セルの値を表す列挙型
///
/// 抽出器の境界でスプレッドシートリーダーの動的なセル値を受け止める
/// タグ付きバリアントです。文字列化のルールは`display_string()`の
/// 網羅的なmatchに集約されています。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellScalar {
    /// 文字列
    Text(String),

    /// 数値（f64）
    Number(f64),

    /// 空セル（JSONではnullとして出力）
    Empty,
}

impl CellScalar {
    /// 値が空かどうかを判定
    pub fn is_empty(&self) -> bool {
        matches!(self, CellScalar::Empty)
    }

    /// 値が数値かどうかを判定
    pub fn is_number(&self) -> bool {
        matches!(self, CellScalar::Number(_))
    }

    /// 値を表示用文字列に変換する
    ///
    /// スプレッドシートの整数表示を模倣し、数学的に整数である数値は
    /// 小数部なしで出力します（`4.0` → `"4"`）。それ以外の有限数は
    /// デフォルトの10進表現、非有限数（NaN / 無限大）は空文字列に
    /// なります。文字列はそのまま返します。
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use sheetsnap::CellScalar;
    ///
    /// assert_eq!(CellScalar::Number(4.0).display_string(), "4");
    /// assert_eq!(CellScalar::Number(4.5).display_string(), "4.5");
    /// assert_eq!(CellScalar::Text("Hello".to_string()).display_string(), "Hello");
    /// assert_eq!(CellScalar::Empty.display_string(), "");
    /// ```
    pub fn display_string(&self) -> String {
        match self {
            CellScalar::Text(s) => s.clone(),
            CellScalar::Number(n) => {
                if !n.is_finite() {
                    String::new()
                } else if n.fract() == 0.0 {
                    // -0.0も"0"として扱う
                    if *n == 0.0 {
                        "0".to_string()
                    } else {
                        format!("{:.0}", n)
                    }
                } else {
                    n.to_string()
                }
            }
            CellScalar::Empty => String::new(),
        }
    }
}

/// 列インデックスをExcel列ラベルに変換（0 → "A", 25 → "Z", 26 → "AA"）
///
/// 全単射26進法（bijective base-26）による純粋な変換関数です。
/// "ゼロ"を表す文字が存在しないため、繰り上がり時に1を引く補正を
/// 行います。セルの内容には一切依存しません。
///
/// # 使用例
///
/// ```rust
/// use sheetsnap::column_label;
///
/// assert_eq!(column_label(0), "A");
/// assert_eq!(column_label(25), "Z");
/// assert_eq!(column_label(26), "AA");
/// assert_eq!(column_label(701), "ZZ");
/// assert_eq!(column_label(702), "AAA");
/// ```
pub fn column_label(mut index: usize) -> String {
    let mut label = String::new();
    loop {
        label.insert(0, (b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    // CellScalar のテスト
    #[test]
    fn test_cell_scalar_is_empty() {
        assert!(CellScalar::Empty.is_empty());
        assert!(!CellScalar::Number(42.0).is_empty());
        assert!(!CellScalar::Text("test".to_string()).is_empty());
    }

    #[test]
    fn test_cell_scalar_is_number() {
        assert!(CellScalar::Number(42.0).is_number());
        assert!(!CellScalar::Text("42".to_string()).is_number());
        assert!(!CellScalar::Empty.is_number());
    }

    #[test]
    fn test_display_string_integer_valued_float() {
        // 整数値の浮動小数点数は小数部なしで表示
        assert_eq!(CellScalar::Number(4.0).display_string(), "4");
        assert_eq!(CellScalar::Number(10.0).display_string(), "10");
        assert_eq!(CellScalar::Number(-3.0).display_string(), "-3");
        assert_eq!(CellScalar::Number(0.0).display_string(), "0");
        assert_eq!(CellScalar::Number(-0.0).display_string(), "0");
    }

    #[test]
    fn test_display_string_fractional_float() {
        assert_eq!(CellScalar::Number(4.5).display_string(), "4.5");
        assert_eq!(CellScalar::Number(-0.25).display_string(), "-0.25");
        assert_eq!(CellScalar::Number(20.5).display_string(), "20.5");
    }

    #[test]
    fn test_display_string_large_integer_valued_float() {
        // i64の範囲を超える整数値でも桁落ちなく表示
        assert_eq!(
            CellScalar::Number(1e20).display_string(),
            "100000000000000000000"
        );
    }

    #[test]
    fn test_display_string_non_finite() {
        // 非有限数は空文字列として扱う
        assert_eq!(CellScalar::Number(f64::NAN).display_string(), "");
        assert_eq!(CellScalar::Number(f64::INFINITY).display_string(), "");
        assert_eq!(CellScalar::Number(f64::NEG_INFINITY).display_string(), "");
    }

    #[test]
    fn test_display_string_text_and_empty() {
        assert_eq!(
            CellScalar::Text("  spaced  ".to_string()).display_string(),
            "  spaced  "
        );
        assert_eq!(CellScalar::Empty.display_string(), "");
    }

    // column_label のテスト
    #[test]
    fn test_column_label_single_letters() {
        assert_eq!(column_label(0), "A");
        assert_eq!(column_label(1), "B");
        assert_eq!(column_label(25), "Z");
    }

    #[test]
    fn test_column_label_double_letters() {
        assert_eq!(column_label(26), "AA");
        assert_eq!(column_label(27), "AB");
        assert_eq!(column_label(51), "AZ");
        assert_eq!(column_label(52), "BA");
        assert_eq!(column_label(701), "ZZ");
    }

    #[test]
    fn test_column_label_triple_letters() {
        assert_eq!(column_label(702), "AAA");
        assert_eq!(column_label(703), "AAB");
    }

    #[test]
    fn test_column_label_length_increases_at_base_boundaries() {
        // 26の累乗境界で桁数が増えること
        assert_eq!(column_label(25).len(), 1);
        assert_eq!(column_label(26).len(), 2);
        assert_eq!(column_label(701).len(), 2);
        assert_eq!(column_label(702).len(), 3);
    }

    // serdeシリアライズのテスト
    #[test]
    fn test_cell_scalar_serialize() {
        assert_eq!(
            serde_json::to_string(&CellScalar::Text("Hello".to_string())).unwrap(),
            "\"Hello\""
        );
        assert_eq!(
            serde_json::to_string(&CellScalar::Number(10.0)).unwrap(),
            "10.0"
        );
        assert_eq!(serde_json::to_string(&CellScalar::Empty).unwrap(), "null");
    }

    // プロパティベーステスト
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        /// ラベル文字列を列インデックスに逆変換（テスト用の逆関数）
        fn label_to_index(label: &str) -> usize {
            label
                .bytes()
                .fold(0usize, |acc, b| acc * 26 + (b - b'A' + 1) as usize)
                - 1
        }

        proptest! {
            /// Column Label Round-Trip
            ///
            /// ランダムな列インデックスをラベルに変換し、逆変換で元の
            /// インデックスに戻ることを検証します。あわせてラベルが
            /// 大文字アルファベットのみで構成されることを確認します。
            #[test]
            fn test_column_label_round_trip(index in 0usize..1_000_000) {
                let label = column_label(index);

                prop_assert!(!label.is_empty());
                prop_assert!(label.bytes().all(|b| b.is_ascii_uppercase()));
                prop_assert_eq!(label_to_index(&label), index);
            }
        }

        proptest! {
            /// ラベル長はインデックスに対して単調非減少
            #[test]
            fn test_column_label_length_monotonic(index in 0usize..100_000) {
                let len_here = column_label(index).len();
                let len_next = column_label(index + 1).len();
                prop_assert!(len_next >= len_here);
            }
        }
    }
}
