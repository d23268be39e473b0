//! ワークスペース（アプリケーション状態）
//!
//! タブコンテナとしてN個のDocumentを直接所有し、UIイベント
//! （開く・保存・タイマーtick・トグル類）を各コンポーネントへ配線する。
//! 元実装でウィジェットプロパティに散っていた可変状態
//! （現在タブ・オートセーブ有効・ダークモード）を明示的なフィールドにした

use crate::autosave::{Autosave, AutosaveOutcome, AutosaveTimer};
use crate::document::Document;
use crate::error::Result;
use crate::export::{self, PdfRenderer};
use crate::persist::PersistenceManager;
use crate::ui::Theme;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// ステータス表示の重要度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// ステータスバー向けの一時メッセージ
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// 表示テキスト
    pub text: String,
    /// 重要度
    pub level: StatusLevel,
    /// 表示開始時刻
    shown_at: Instant,
    /// 表示持続時間
    duration: Duration,
}

impl StatusMessage {
    fn new(text: String, level: StatusLevel, duration: Duration) -> Self {
        Self {
            text,
            level,
            shown_at: Instant::now(),
            duration,
        }
    }

    /// 表示期限が切れたか
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }
}

/// 保存要求の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// 既存の保存先へ保存した
    Saved(PathBuf),
    /// 保存先未確定。呼び出し元がダイアログ等で保存先を確定し、
    /// `save_current_as` を呼ぶこと
    NeedsLocation,
}

/// 通常保存・読み込みのステータス表示時間
const STATUS_DURATION: Duration = Duration::from_secs(3);
/// オートセーブのステータス表示時間（短め）
const AUTOSAVE_STATUS_DURATION: Duration = Duration::from_secs(2);

/// タブコンテナとアプリケーション状態
pub struct Workspace {
    documents: Vec<Document>,
    current: usize,
    persistence: PersistenceManager,
    autosave: Autosave,
    autosave_timer: AutosaveTimer,
    theme: Theme,
    status: Option<StatusMessage>,
}

impl Workspace {
    /// 空のUntitledタブ1つ、オートセーブ有効、ライトテーマで開始
    pub fn new() -> Self {
        Self {
            documents: vec![Document::new()],
            current: 0,
            persistence: PersistenceManager::new(),
            autosave: Autosave::new(),
            autosave_timer: AutosaveTimer::default(),
            theme: Theme::default(),
            status: None,
        }
    }

    // タブ管理

    /// 開いているタブ数
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// 現在のタブ番号
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// タブを切り替え。範囲外ならfalse
    pub fn select_tab(&mut self, index: usize) -> bool {
        if index < self.documents.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// 新しいUntitledタブを開いて選択
    pub fn new_document(&mut self) {
        self.documents.push(Document::new());
        self.current = self.documents.len() - 1;
    }

    /// ファイルを新しいタブへ読み込む
    ///
    /// 読み込みに失敗した場合は新しいタブを作らない
    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        match self.persistence.load(path) {
            Ok(document) => {
                let name = document.display_name();
                self.documents.push(document);
                self.current = self.documents.len() - 1;
                self.set_status(format!("File loaded: {}", name), StatusLevel::Info);
                Ok(())
            }
            Err(e) => {
                self.set_status(format!("Failed to load file: {}", e), StatusLevel::Error);
                Err(e)
            }
        }
    }

    /// タブを閉じる
    ///
    /// 最後のタブを閉じた場合は空のUntitledタブを開き直し、
    /// 常に1つ以上のタブが存在する状態を保つ
    pub fn close_tab(&mut self, index: usize) -> bool {
        if index >= self.documents.len() {
            return false;
        }

        self.documents.remove(index);
        if self.documents.is_empty() {
            self.documents.push(Document::new());
            self.current = 0;
        } else if self.current >= self.documents.len() {
            self.current = self.documents.len() - 1;
        }
        true
    }

    /// 現在のタブのドキュメント
    pub fn current_document(&self) -> &Document {
        &self.documents[self.current]
    }

    /// 現在のタブのドキュメント（可変）
    pub fn current_document_mut(&mut self) -> &mut Document {
        &mut self.documents[self.current]
    }

    // 保存

    /// 現在のドキュメントを保存
    ///
    /// 保存先が未確定の場合はI/Oを行わず `NeedsLocation` を返す
    pub fn save_current(&mut self) -> Result<SaveOutcome> {
        if self.current_document().location().is_untitled() {
            return Ok(SaveOutcome::NeedsLocation);
        }

        let document = &mut self.documents[self.current];
        match self.persistence.save_in_place(document) {
            Ok(()) => {
                let path = document
                    .location()
                    .path()
                    .expect("saved document has a location")
                    .to_path_buf();
                self.set_status(
                    format!("File saved: {}", path.display()),
                    StatusLevel::Info,
                );
                Ok(SaveOutcome::Saved(path))
            }
            Err(e) => {
                self.set_status(format!("Failed to save file: {}", e), StatusLevel::Error);
                Err(e)
            }
        }
    }

    /// 現在のドキュメントを指定パスへ保存し、保存先を確定する
    pub fn save_current_as(&mut self, path: PathBuf) -> Result<PathBuf> {
        let document = &mut self.documents[self.current];
        match self.persistence.save_as(document, path) {
            Ok(()) => {
                let path = document
                    .location()
                    .path()
                    .expect("saved document has a location")
                    .to_path_buf();
                self.set_status(
                    format!("File saved: {}", path.display()),
                    StatusLevel::Info,
                );
                Ok(path)
            }
            Err(e) => {
                self.set_status(format!("Failed to save file: {}", e), StatusLevel::Error);
                Err(e)
            }
        }
    }

    // オートセーブ

    /// 周期タイマーを駆動し、期限が来ていればオートセーブを実行
    ///
    /// ホストのイベントループから現在時刻とともに呼ぶ
    pub fn poll_autosave(&mut self, now: Instant) -> Option<AutosaveOutcome> {
        if self.autosave_timer.poll(now) {
            Some(self.autosave_tick())
        } else {
            None
        }
    }

    /// 現在のドキュメントへオートセーブを1回適用
    ///
    /// 失敗は一時的なステータス通知に降格し、決してエラーを返さない
    pub fn autosave_tick(&mut self) -> AutosaveOutcome {
        let document = &mut self.documents[self.current];
        let outcome = self.autosave.tick(document);

        match &outcome {
            AutosaveOutcome::Saved(path) => {
                let text = format!("Autosaved: {}", path.display());
                self.status = Some(StatusMessage::new(
                    text,
                    StatusLevel::Info,
                    AUTOSAVE_STATUS_DURATION,
                ));
            }
            AutosaveOutcome::Failed { message, .. } => {
                let text = format!("Autosave failed: {}", message);
                self.status = Some(StatusMessage::new(
                    text,
                    StatusLevel::Error,
                    AUTOSAVE_STATUS_DURATION,
                ));
            }
            // Disabled / Untitled / Clean は通知しない
            _ => {}
        }

        outcome
    }

    /// オートセーブ有効フラグ
    pub fn autosave_enabled(&self) -> bool {
        self.autosave.is_enabled()
    }

    /// オートセーブの有効・無効を設定（チェックボックス相当）
    pub fn set_autosave_enabled(&mut self, enabled: bool) {
        self.autosave.set_enabled(enabled);
    }

    /// オートセーブの有効・無効を反転
    pub fn toggle_autosave(&mut self) -> bool {
        self.autosave.toggle()
    }

    // テーマ

    /// 現在のテーマ
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// ライト・ダークを切り替え
    pub fn toggle_dark_mode(&mut self) {
        self.theme.toggle();
    }

    // エクスポート

    /// 現在のドキュメントをMarkdownへエクスポート
    pub fn export_current_markdown(&mut self, path: &Path) -> Result<()> {
        match export::export_markdown(self.current_document(), path) {
            Ok(()) => {
                self.set_status(
                    format!("Exported to Markdown: {}", path.display()),
                    StatusLevel::Info,
                );
                Ok(())
            }
            Err(e) => {
                self.set_status(format!("Failed to export Markdown: {}", e), StatusLevel::Error);
                Err(e)
            }
        }
    }

    /// 現在のドキュメントをPDFへエクスポート
    pub fn export_current_pdf<R: PdfRenderer>(
        &mut self,
        renderer: &R,
        path: &Path,
    ) -> Result<PathBuf> {
        match export::export_pdf(self.current_document(), renderer, path) {
            Ok(output) => {
                self.set_status(
                    format!("Exported to PDF: {}", output.display()),
                    StatusLevel::Info,
                );
                Ok(output)
            }
            Err(e) => {
                self.set_status(format!("Failed to export PDF: {}", e), StatusLevel::Error);
                Err(e)
            }
        }
    }

    // ステータス

    /// 現在のステータスメッセージ（期限切れならNone）
    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref().filter(|s| !s.is_expired())
    }

    fn set_status(&mut self, text: String, level: StatusLevel) {
        self.status = Some(StatusMessage::new(text, level, STATUS_DURATION));
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_starts_with_untitled_tab() {
        let workspace = Workspace::new();
        assert_eq!(workspace.document_count(), 1);
        assert!(workspace.current_document().location().is_untitled());
        assert!(workspace.autosave_enabled());
        assert!(!workspace.theme().is_dark());
    }

    #[test]
    fn test_new_document_selects_new_tab() {
        let mut workspace = Workspace::new();
        workspace.new_document();

        assert_eq!(workspace.document_count(), 2);
        assert_eq!(workspace.current_index(), 1);
    }

    #[test]
    fn test_closing_last_tab_reopens_untitled() {
        let mut workspace = Workspace::new();
        workspace.current_document_mut().set_content("something");

        assert!(workspace.close_tab(0));
        assert_eq!(workspace.document_count(), 1);
        assert_eq!(workspace.current_document().content(), "");
        assert!(workspace.current_document().location().is_untitled());
    }

    #[test]
    fn test_close_tab_clamps_current_index() {
        let mut workspace = Workspace::new();
        workspace.new_document();
        workspace.new_document();
        assert_eq!(workspace.current_index(), 2);

        workspace.close_tab(2);
        assert_eq!(workspace.current_index(), 1);
    }

    #[test]
    fn test_save_untitled_requests_location() {
        let mut workspace = Workspace::new();
        workspace.current_document_mut().set_content("draft");

        let outcome = workspace.save_current().unwrap();
        assert_eq!(outcome, SaveOutcome::NeedsLocation);
        // I/Oは行われず、変更状態もそのまま
        assert!(workspace.current_document().is_modified());
    }

    #[test]
    fn test_select_tab_bounds() {
        let mut workspace = Workspace::new();
        assert!(workspace.select_tab(0));
        assert!(!workspace.select_tab(1));
    }

    #[test]
    fn test_toggle_dark_mode() {
        let mut workspace = Workspace::new();
        workspace.toggle_dark_mode();
        assert!(workspace.theme().is_dark());
        workspace.toggle_dark_mode();
        assert!(!workspace.theme().is_dark());
    }
}
