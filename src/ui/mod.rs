//! 表示層の共有データ
//!
//! ウィジェット描画はUIツールキット側の責務。ここにはテーマ等、
//! フロントエンドに依存しない表示状態のみを置く

pub mod theme;

pub use theme::{Color, Palette, Theme, ThemeKind};
