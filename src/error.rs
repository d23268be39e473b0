//! エラーハンドリングシステム
//!
//! eshword 全体で使用される統一されたエラー型を定義
//! ユーザー起点の失敗は同期的に呼び出し元へ返し、オートセーブの失敗のみ
//! ステータス通知へ降格する（error.rs は分類のみを担当）

use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone)]
pub enum EshError {
    /// ファイル操作エラー
    #[error("File operation failed")]
    File(#[from] FileError),

    /// 保存フォーマットエラー
    #[error("Document format error")]
    Format(#[from] FormatError),

    /// パスエラー
    #[error("Path error: {0}")]
    Path(String),

    /// アプリケーション論理エラー
    #[error("Application error: {0}")]
    Application(String),
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

/// 構造化保存ファイル（.esh）固有のエラー
#[derive(Error, Debug, Clone)]
pub enum FormatError {
    /// 必須キー欠落（`text` が無いファイルは読み込み失敗）
    #[error("Missing required key: {key}")]
    MissingKey { key: String },

    /// JSONとして解釈できない、または値の型が不正
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    /// UTF-8として解釈できない
    #[error("Encoding error: {message}")]
    Encoding { message: String },
}

// std::io::Error から EshError への変換
//
// パス情報を持つ NotFound / PermissionDenied は persist::io 側で
// 明示的に構築するため、ここでは汎用 Io に落とす
impl From<std::io::Error> for EshError {
    fn from(error: std::io::Error) -> Self {
        EshError::File(FileError::Io {
            message: error.to_string(),
        })
    }
}

// serde_json のエラーはフォーマットエラーとして扱う
impl From<serde_json::Error> for EshError {
    fn from(error: serde_json::Error) -> Self {
        EshError::Format(FormatError::InvalidJson {
            message: error.to_string(),
        })
    }
}

// UTF-8デコードエラーの変換
impl From<std::string::FromUtf8Error> for EshError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        EshError::Format(FormatError::Encoding {
            message: error.to_string(),
        })
    }
}

impl EshError {
    /// フォーマットエラーかどうか
    pub fn is_format_error(&self) -> bool {
        matches!(self, EshError::Format(_))
    }

    /// ファイルI/Oエラーかどうか
    pub fn is_file_error(&self) -> bool {
        matches!(self, EshError::File(_))
    }
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, EshError>;
