//! Markdownエクスポート
//!
//! 内容＋書式からMarkdownテキストへの一方向（非可逆）変換。
//! ドキュメント全体に適用された書式フラグを強調記法に落とす

use crate::document::Document;
use crate::error::Result;
use crate::persist::io;
use std::path::Path;

/// ドキュメントをMarkdownテキストへ変換
///
/// 太字・斜体は強調記法、下線はMarkdownに対応が無いためインラインHTML。
/// フォントファミリーとサイズは失われる
pub fn document_to_markdown(document: &Document) -> String {
    let formatting = document.formatting();

    let mut lines = Vec::new();
    for line in document.content().lines() {
        if line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut rendered = line.to_string();
        if formatting.italic {
            rendered = format!("*{}*", rendered);
        }
        if formatting.bold {
            rendered = format!("**{}**", rendered);
        }
        if formatting.underline {
            rendered = format!("<u>{}</u>", rendered);
        }
        lines.push(rendered);
    }

    let mut markdown = lines.join("\n");
    if document.content().ends_with('\n') {
        markdown.push('\n');
    }
    markdown
}

/// ドキュメントをMarkdownファイルへ書き出し
///
/// ドキュメント自体は変更しない
pub fn export_markdown(document: &Document, path: &Path) -> Result<()> {
    let markdown = document_to_markdown(document);
    io::write_file(path, &markdown)?;

    log::info!("exported markdown: {}", path.display());
    Ok(())
}
