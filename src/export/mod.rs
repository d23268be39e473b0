//! エクスポート機能
//!
//! 現在の内容・書式を別形式の外部ファイルへ一方向変換する。
//! どのエクスポートもDocumentの状態を変更しない

pub mod markdown;
pub mod pdf;

pub use markdown::{document_to_markdown, export_markdown};
pub use pdf::{export_pdf, DocumentView, PdfRenderer};
