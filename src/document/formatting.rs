//! テキスト書式属性
//!
//! フォントファミリー、ポイントサイズ、太字・斜体・下線フラグの管理

/// ポイントサイズの下限（これ未満には決して下がらない）
pub const MIN_POINT_SIZE: u32 = 1;

/// デフォルトのフォントファミリー
pub const DEFAULT_FONT_FAMILY: &str = "Segoe UI";

/// デフォルトのポイントサイズ
pub const DEFAULT_POINT_SIZE: u32 = 10;

/// ドキュメント全体に適用される書式属性
///
/// プレーンテキスト保存では失われ、構造化保存（.esh）でのみ永続化される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormatting {
    /// フォントファミリー名
    pub font_family: String,
    /// ポイントサイズ（常に `MIN_POINT_SIZE` 以上）
    pub point_size: u32,
    /// 太字
    pub bold: bool,
    /// 斜体
    pub italic: bool,
    /// 下線
    pub underline: bool,
}

impl Default for TextFormatting {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            point_size: DEFAULT_POINT_SIZE,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

impl TextFormatting {
    /// フォントファミリーを設定
    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    /// 太字を反転
    pub fn toggle_bold(&mut self) {
        self.bold = !self.bold;
    }

    /// 斜体を反転
    pub fn toggle_italic(&mut self) {
        self.italic = !self.italic;
    }

    /// 下線を反転
    pub fn toggle_underline(&mut self) {
        self.underline = !self.underline;
    }

    /// ポイントサイズを1増やす
    pub fn increase_point_size(&mut self) {
        self.point_size = self.point_size.saturating_add(1);
    }

    /// ポイントサイズを1減らす
    ///
    /// 下限 `MIN_POINT_SIZE` では何もしない。適用されたかどうかを返す
    pub fn decrease_point_size(&mut self) -> bool {
        if self.point_size > MIN_POINT_SIZE {
            self.point_size -= 1;
            true
        } else {
            false
        }
    }

    /// 範囲外の値を下限に丸める（ファイル読み込み時用）
    pub fn clamp_point_size(size: u32) -> u32 {
        size.max(MIN_POINT_SIZE)
    }
}
