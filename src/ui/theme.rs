//! テーマシステム
//!
//! ライト・ダークの2テーマとカラーパレットの管理。
//! 描画自体はUIツールキット側の責務のため、ここは純粋なデータのみ

/// テーマの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Light,
    Dark,
}

impl ThemeKind {
    /// もう一方のテーマ
    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }
}

/// RGBカラー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// スタイルシート用の16進表記（#RRGGBB）
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// コンポーネント別のカラーパレット
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// ウィンドウ背景
    pub window_background: Color,
    /// エディタ背景
    pub editor_background: Color,
    /// エディタ文字色
    pub editor_foreground: Color,
    /// ツールバー背景
    pub toolbar_background: Color,
    /// サイドパネル背景
    pub panel_background: Color,
    /// サイドパネル文字色
    pub panel_foreground: Color,
    /// ボタン背景
    pub button_background: Color,
    /// ボタン文字色
    pub button_foreground: Color,
}

impl Palette {
    /// ライトテーマのパレット
    pub fn light() -> Self {
        Self {
            window_background: Color::rgb(0xF8, 0xF9, 0xFA),
            editor_background: Color::rgb(0xFF, 0xFF, 0xFF),
            editor_foreground: Color::rgb(0x00, 0x00, 0x00),
            toolbar_background: Color::rgb(0x33, 0x33, 0x33),
            panel_background: Color::rgb(0xEE, 0xEE, 0xEE),
            panel_foreground: Color::rgb(0x00, 0x00, 0x00),
            button_background: Color::rgb(0x44, 0x44, 0x44),
            button_foreground: Color::rgb(0xFF, 0xFF, 0xFF),
        }
    }

    /// ダークテーマのパレット
    pub fn dark() -> Self {
        Self {
            window_background: Color::rgb(0x2C, 0x2C, 0x2C),
            editor_background: Color::rgb(0x3C, 0x3C, 0x3C),
            editor_foreground: Color::rgb(0xE0, 0xE0, 0xE0),
            toolbar_background: Color::rgb(0x44, 0x44, 0x44),
            panel_background: Color::rgb(0x33, 0x33, 0x33),
            panel_foreground: Color::rgb(0xE0, 0xE0, 0xE0),
            button_background: Color::rgb(0x55, 0x55, 0x55),
            button_foreground: Color::rgb(0xE0, 0xE0, 0xE0),
        }
    }

    /// 種類に応じたパレット
    pub fn for_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Light => Self::light(),
            ThemeKind::Dark => Self::dark(),
        }
    }
}

/// 現在のテーマ状態
#[derive(Debug, Clone)]
pub struct Theme {
    kind: ThemeKind,
    palette: Palette,
}

impl Theme {
    /// 指定の種類で作成
    pub fn new(kind: ThemeKind) -> Self {
        Self {
            kind,
            palette: Palette::for_kind(kind),
        }
    }

    /// テーマの種類
    pub fn kind(&self) -> ThemeKind {
        self.kind
    }

    /// ダークモードかどうか
    pub fn is_dark(&self) -> bool {
        self.kind == ThemeKind::Dark
    }

    /// カラーパレット
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// ライト・ダークを切り替え
    pub fn toggle(&mut self) {
        self.kind = self.kind.toggled();
        self.palette = Palette::for_kind(self.kind);
    }
}

impl Default for Theme {
    fn default() -> Self {
        // 起動時はライトモード
        Self::new(ThemeKind::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_light() {
        let theme = Theme::default();
        assert_eq!(theme.kind(), ThemeKind::Light);
        assert!(!theme.is_dark());
    }

    #[test]
    fn test_toggle_switches_palette() {
        let mut theme = Theme::default();

        theme.toggle();
        assert!(theme.is_dark());
        assert_eq!(theme.palette(), &Palette::dark());

        theme.toggle();
        assert!(!theme.is_dark());
        assert_eq!(theme.palette(), &Palette::light());
    }

    #[test]
    fn test_dark_palette_colors() {
        let palette = Palette::dark();
        assert_eq!(palette.window_background.to_hex(), "#2C2C2C");
        assert_eq!(palette.editor_background.to_hex(), "#3C3C3C");
        assert_eq!(palette.editor_foreground.to_hex(), "#E0E0E0");
    }

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Color::rgb(0xF8, 0xF9, 0xFA).to_hex(), "#F8F9FA");
        assert_eq!(Color::rgb(0, 0, 0).to_hex(), "#000000");
    }
}
