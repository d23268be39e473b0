//! 保存フォーマットのエンコード・デコード
//!
//! 構造化保存（.esh: テキスト＋書式のJSON）とプレーンテキスト保存の2方式。
//! どちらで扱うかは呼び出し箇所で一度だけ `SaveFormat::for_path` で決める

use crate::document::{Document, TextFormatting};
use crate::error::{EshError, FormatError, Result};
use crate::persist::path::has_extension;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 構造化保存を示す拡張子
pub const STRUCTURED_EXTENSION: &str = "esh";

/// 保存フォーマット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    /// JSONによるテキスト＋書式の保存（.esh）
    Structured,
    /// テキスト内容のみの保存（書式は失われる）
    Plain,
}

impl SaveFormat {
    /// 拡張子からフォーマットを決定
    pub fn for_path(path: &Path) -> Self {
        if has_extension(path, &[STRUCTURED_EXTENSION]) {
            SaveFormat::Structured
        } else {
            SaveFormat::Plain
        }
    }
}

/// .eshファイルのレコード
///
/// キー順はこの宣言順で安定（text, font, size, bold, italic, underline）
#[derive(Debug, Serialize, Deserialize)]
struct StructuredRecord {
    text: String,
    font: String,
    size: u32,
    bold: bool,
    italic: bool,
    underline: bool,
}

impl StructuredRecord {
    fn from_document(document: &Document) -> Self {
        let formatting = document.formatting();
        Self {
            text: document.content().to_string(),
            font: formatting.font_family.clone(),
            size: formatting.point_size,
            bold: formatting.bold,
            italic: formatting.italic,
            underline: formatting.underline,
        }
    }

    fn into_parts(self) -> (String, TextFormatting) {
        let formatting = TextFormatting {
            font_family: self.font,
            // 0は拒否せず下限に丸める
            point_size: TextFormatting::clamp_point_size(self.size),
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
        };
        (self.text, formatting)
    }
}

/// ドキュメントを保存フォーマットへエンコード
pub fn encode(document: &Document, format: SaveFormat) -> Result<String> {
    match format {
        SaveFormat::Structured => {
            let record = StructuredRecord::from_document(document);

            // 4スペースインデントのpretty出力
            let mut buf = Vec::new();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
            record.serialize(&mut serializer)?;

            Ok(String::from_utf8(buf)?)
        }
        SaveFormat::Plain => Ok(document.content().to_string()),
    }
}

/// 保存フォーマットから内容と書式をデコード
///
/// プレーンテキストでは書式情報が存在しないためデフォルト書式になる
pub fn decode(raw: &str, format: SaveFormat) -> Result<(String, TextFormatting)> {
    match format {
        SaveFormat::Structured => {
            let value: serde_json::Value = serde_json::from_str(raw)?;

            // `text` キー欠落は他のJSONエラーと区別して報告する
            let missing_text = value
                .as_object()
                .map(|obj| !obj.contains_key("text"))
                .unwrap_or(false);
            if missing_text {
                return Err(EshError::Format(FormatError::MissingKey {
                    key: "text".to_string(),
                }));
            }

            let record: StructuredRecord = serde_json::from_value(value)?;
            Ok(record.into_parts())
        }
        SaveFormat::Plain => Ok((raw.to_string(), TextFormatting::default())),
    }
}
