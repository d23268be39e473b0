//! ドキュメントモデル
//!
//! 開いている1つの編集単位（テキスト内容＋書式属性＋保存先）の表現

pub mod formatting;

pub use formatting::{TextFormatting, DEFAULT_FONT_FAMILY, DEFAULT_POINT_SIZE, MIN_POINT_SIZE};

use std::path::{Path, PathBuf};

/// ドキュメントの保存先
///
/// 「Untitled」という表示文字列を番兵値として使うのではなく、
/// 未保存状態を明示的なバリアントで表現する
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentLocation {
    /// 一度も保存されていない（保存前に保存先の入力が必要）
    Untitled,
    /// 保存先が確定している
    Path(PathBuf),
}

impl DocumentLocation {
    /// 未保存かどうか
    pub fn is_untitled(&self) -> bool {
        matches!(self, DocumentLocation::Untitled)
    }

    /// 保存先パス（未保存なら None）
    pub fn path(&self) -> Option<&Path> {
        match self {
            DocumentLocation::Untitled => None,
            DocumentLocation::Path(path) => Some(path),
        }
    }

    /// タブ見出し等に使う表示名
    pub fn display_name(&self) -> String {
        match self {
            DocumentLocation::Untitled => "Untitled".to_string(),
            DocumentLocation::Path(path) => path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        }
    }
}

/// 内容変更追跡
///
/// 最後に保存（または読み込み）した時点のハッシュと比較する
#[derive(Debug, Clone)]
struct ChangeTracker {
    saved_hash: u64,
}

impl ChangeTracker {
    fn new(content: &str) -> Self {
        Self {
            saved_hash: Self::calculate_hash(content),
        }
    }

    fn is_modified(&self, current_content: &str) -> bool {
        Self::calculate_hash(current_content) != self.saved_hash
    }

    fn mark_saved(&mut self, content: &str) {
        self.saved_hash = Self::calculate_hash(content);
    }

    fn calculate_hash(content: &str) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        content.hash(&mut hasher);
        hasher.finish()
    }
}

/// 開いている1つの編集単位
///
/// タブが1つのDocumentを所有し、タブを閉じると破棄される。
/// 編集・書式操作は同期的で常に成功する（サイズ下限の減少のみno-op）
#[derive(Debug, Clone)]
pub struct Document {
    content: String,
    formatting: TextFormatting,
    location: DocumentLocation,
    change_tracker: ChangeTracker,
}

impl Document {
    /// 空のUntitledドキュメントを作成
    pub fn new() -> Self {
        Self {
            content: String::new(),
            formatting: TextFormatting::default(),
            location: DocumentLocation::Untitled,
            change_tracker: ChangeTracker::new(""),
        }
    }

    /// 読み込み済みの内容からドキュメントを作成（保存済み状態で開始）
    pub fn from_parts(content: String, formatting: TextFormatting, path: PathBuf) -> Self {
        let change_tracker = ChangeTracker::new(&content);
        Self {
            content,
            formatting,
            location: DocumentLocation::Path(path),
            change_tracker,
        }
    }

    /// テキスト内容
    pub fn content(&self) -> &str {
        &self.content
    }

    /// テキスト内容を置き換え
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// 書式属性
    pub fn formatting(&self) -> &TextFormatting {
        &self.formatting
    }

    /// 保存先
    pub fn location(&self) -> &DocumentLocation {
        &self.location
    }

    /// タブ見出し等に使う表示名
    pub fn display_name(&self) -> String {
        self.location.display_name()
    }

    /// 保存先を確定する
    ///
    /// Untitled へ戻る遷移は存在しない（以後は常に Path）
    pub fn assign_location(&mut self, path: PathBuf) {
        self.location = DocumentLocation::Path(path);
    }

    /// 最後の保存以降に内容が変更されたか
    pub fn is_modified(&self) -> bool {
        self.change_tracker.is_modified(&self.content)
    }

    /// 保存済み状態としてマーク
    pub fn mark_saved(&mut self) {
        self.change_tracker.mark_saved(&self.content);
    }

    // 書式操作（現在のドキュメント全体に適用）

    /// 太字を反転
    pub fn toggle_bold(&mut self) {
        self.formatting.toggle_bold();
    }

    /// 斜体を反転
    pub fn toggle_italic(&mut self) {
        self.formatting.toggle_italic();
    }

    /// 下線を反転
    pub fn toggle_underline(&mut self) {
        self.formatting.toggle_underline();
    }

    /// フォントファミリーを設定
    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.formatting.set_font_family(family);
    }

    /// ポイントサイズを1増やす
    pub fn increase_point_size(&mut self) {
        self.formatting.increase_point_size();
    }

    /// ポイントサイズを1減らす（下限1でno-op）
    pub fn decrease_point_size(&mut self) -> bool {
        self.formatting.decrease_point_size()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
