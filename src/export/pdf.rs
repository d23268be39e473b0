//! PDFエクスポート
//!
//! 実際のPDFレンダリングは外部コラボレータ（印刷・描画系）の責務。
//! ここでは描画用ビューの組み立てと出力パスの確定のみを行う

use crate::document::{Document, TextFormatting};
use crate::error::Result;
use crate::persist::path::ensure_extension;
use std::path::{Path, PathBuf};

/// レンダラへ渡す読み取り専用ビュー
///
/// 元ドキュメントを借用するだけで、エクスポートが内容を変更することはない
#[derive(Debug)]
pub struct DocumentView<'a> {
    /// テキスト内容
    pub text: &'a str,
    /// 書式属性
    pub formatting: &'a TextFormatting,
    /// タブ見出しに相当するタイトル
    pub title: String,
}

impl<'a> DocumentView<'a> {
    fn from_document(document: &'a Document) -> Self {
        Self {
            text: document.content(),
            formatting: document.formatting(),
            title: document.display_name(),
        }
    }
}

/// PDFレンダリングコラボレータ
pub trait PdfRenderer {
    /// ビューを指定パスへレンダリングする
    fn render(&self, view: &DocumentView<'_>, output: &Path) -> Result<()>;
}

/// ドキュメントをPDFへエクスポート
///
/// 拡張子が無ければ `.pdf` を付与する（元実装の挙動）。
/// 実際に書き出されたパスを返す
pub fn export_pdf<R: PdfRenderer>(
    document: &Document,
    renderer: &R,
    path: &Path,
) -> Result<PathBuf> {
    let output = ensure_extension(path, "pdf");
    let view = DocumentView::from_document(document);

    renderer.render(&view, &output)?;

    log::info!("exported pdf: {}", output.display());
    Ok(output)
}
