//! オートセーブ
//!
//! 固定周期（60秒）で未保存の変更を書き出すポリシー。
//! 周期の駆動は外部（ホストのイベントループ）が行い、本モジュールは
//! 「いつ実行すべきか」と「tickで何をするか」だけを持つ

use crate::document::Document;
use crate::persist::PersistenceManager;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// オートセーブの周期
pub const AUTOSAVE_INTERVAL: Duration = Duration::from_secs(60);

/// オートセーブ1回分の結果
///
/// 失敗してもエラーとしては伝播しない。編集セッションを中断しないため、
/// 呼び出し元はこの結果をステータス表示に変換するだけでよい
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutosaveOutcome {
    /// オートセーブが無効
    Disabled,
    /// 保存先未確定のため何もしない（勝手にファイルを作らない）
    Untitled,
    /// 前回保存から変更がない
    Clean,
    /// 保存成功
    Saved(PathBuf),
    /// 保存失敗（非致命、ステータス通知のみ）
    Failed { path: PathBuf, message: String },
}

/// オートセーブポリシー
#[derive(Debug)]
pub struct Autosave {
    enabled: bool,
    persistence: PersistenceManager,
}

impl Autosave {
    /// デフォルトで有効な状態で作成
    pub fn new() -> Self {
        Self {
            enabled: true,
            persistence: PersistenceManager::new(),
        }
    }

    /// 有効かどうか
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// 有効・無効を設定
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// 有効・無効を反転
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// オートセーブ1回分を実行
    ///
    /// 通常保存と同じ書き込みロジックを使うが、I/Oエラーは握りつぶして
    /// `AutosaveOutcome::Failed` に変換する。リトライはしない
    pub fn tick(&self, document: &mut Document) -> AutosaveOutcome {
        if !self.enabled {
            return AutosaveOutcome::Disabled;
        }

        let path = match document.location().path() {
            Some(path) => path.to_path_buf(),
            None => return AutosaveOutcome::Untitled,
        };

        if !document.is_modified() {
            return AutosaveOutcome::Clean;
        }

        match self.persistence.save_in_place(document) {
            Ok(()) => AutosaveOutcome::Saved(path),
            Err(e) => {
                log::warn!("autosave failed for {}: {}", path.display(), e);
                AutosaveOutcome::Failed {
                    path,
                    message: e.to_string(),
                }
            }
        }
    }
}

impl Default for Autosave {
    fn default() -> Self {
        Self::new()
    }
}

/// オートセーブ用の周期タイマー
///
/// 単一スレッド協調モデルのため、バックグラウンドスレッドではなく
/// ホストループが `poll` で駆動する
#[derive(Debug)]
pub struct AutosaveTimer {
    interval: Duration,
    last_tick: Instant,
}

impl AutosaveTimer {
    /// 指定周期のタイマーを作成
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: Instant::now(),
        }
    }

    /// 周期が経過していればtrueを返し、次の周期を開始する
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    /// 次にtickすべき時刻
    pub fn next_deadline(&self) -> Instant {
        self.last_tick + self.interval
    }
}

impl Default for AutosaveTimer {
    fn default() -> Self {
        Self::new(AUTOSAVE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_untitled_document_is_never_autosaved() {
        let autosave = Autosave::new();
        let mut document = Document::new();
        document.set_content("unsaved work");

        let outcome = autosave.tick(&mut document);

        assert_eq!(outcome, AutosaveOutcome::Untitled);
        // 変更状態もそのまま（I/Oが行われていない）
        assert!(document.is_modified());
    }

    #[test]
    fn test_disabled_autosave_is_noop() {
        let mut autosave = Autosave::new();
        autosave.set_enabled(false);

        let mut document = Document::new();
        document.assign_location(PathBuf::from("/nonexistent/note.txt"));
        document.set_content("changed");

        assert_eq!(autosave.tick(&mut document), AutosaveOutcome::Disabled);
    }

    #[test]
    fn test_clean_document_is_skipped() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("note.txt");

        let autosave = Autosave::new();
        let mut document = Document::new();
        PersistenceManager::new()
            .save_as(&mut document, file_path)
            .unwrap();

        assert_eq!(autosave.tick(&mut document), AutosaveOutcome::Clean);
    }

    #[test]
    fn test_modified_document_is_saved() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("note.txt");

        let autosave = Autosave::new();
        let mut document = Document::new();
        PersistenceManager::new()
            .save_as(&mut document, file_path.clone())
            .unwrap();

        document.set_content("autosaved body");
        let outcome = autosave.tick(&mut document);

        assert_eq!(outcome, AutosaveOutcome::Saved(file_path.clone()));
        assert_eq!(std::fs::read_to_string(&file_path).unwrap(), "autosaved body");
        assert!(!document.is_modified());
    }

    #[test]
    fn test_failed_autosave_does_not_propagate() {
        let autosave = Autosave::new();
        let mut document = Document::new();
        document.assign_location(PathBuf::from("/proc/eshword/denied.txt"));
        document.set_content("changed");

        let outcome = autosave.tick(&mut document);

        match outcome {
            AutosaveOutcome::Failed { path, .. } => {
                assert_eq!(path, PathBuf::from("/proc/eshword/denied.txt"));
            }
            other => panic!("Expected Failed, got {:?}", other),
        }
        // 失敗してもドキュメント状態は壊れない
        assert_eq!(document.content(), "changed");
        assert!(document.is_modified());
    }

    #[test]
    fn test_toggle() {
        let mut autosave = Autosave::new();
        assert!(autosave.is_enabled());
        assert!(!autosave.toggle());
        assert!(autosave.toggle());
    }

    #[test]
    fn test_timer_polling() {
        let mut timer = AutosaveTimer::new(Duration::from_secs(60));
        let start = Instant::now();

        assert!(!timer.poll(start + Duration::from_secs(30)));
        assert!(timer.poll(start + Duration::from_secs(61)));
        // tick直後は再び周期待ち
        assert!(!timer.poll(start + Duration::from_secs(62)));
        assert!(timer.poll(start + Duration::from_secs(121)));
    }
}
