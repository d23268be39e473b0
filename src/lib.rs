//! eshword - タブ型ワードプロセッサのコア
//!
//! ドキュメントモデル・永続化・オートセーブの実装。
//! ウィジェット・ダイアログ等のGUIは外部コラボレータとして扱う

// コアモジュール
pub mod error;

// データ層
pub mod document;
pub mod persist;

// ポリシー層
pub mod autosave;
pub mod export;

// アプリケーション状態
pub mod app;

// 表示層
pub mod ui;

// 公開API
pub use app::{SaveOutcome, StatusLevel, StatusMessage, Workspace};
pub use autosave::{Autosave, AutosaveOutcome, AutosaveTimer, AUTOSAVE_INTERVAL};
pub use document::{Document, DocumentLocation, TextFormatting};
pub use error::{EshError, FileError, FormatError, Result};
pub use export::{DocumentView, PdfRenderer};
pub use persist::{PersistenceManager, SaveFormat, STRUCTURED_EXTENSION};
pub use ui::{Theme, ThemeKind};
