//! パス処理ユーティリティ
//!
//! 保存先・読み込み元パスの展開と拡張子判定

use crate::error::{EshError, Result};
use std::path::{Path, PathBuf};

/// ホームディレクトリを展開（~ → /home/user）
pub fn expand_home<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if path_str.starts_with('~') {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| EshError::Path("ホームディレクトリが取得できません".to_string()))?;

        let expanded = if path_str == "~" {
            home_dir
        } else if let Some(rest) = path_str.strip_prefix("~/") {
            home_dir.join(rest)
        } else {
            // ~user形式は未サポート
            return Err(EshError::Path(
                "~user形式のパス展開は未サポートです".to_string(),
            ));
        };

        Ok(expanded)
    } else {
        Ok(path.to_path_buf())
    }
}

/// 環境変数を展開（$VAR → 値）
pub fn expand_env<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path_str = path.as_ref().to_string_lossy().to_string();

    match shellexpand::env(&path_str) {
        Ok(expanded) => Ok(PathBuf::from(expanded.as_ref())),
        Err(e) => Err(EshError::Path(format!("環境変数展開エラー: {}", e))),
    }
}

/// パス展開の便利関数
///
/// ファイルダイアログ経由ではなくユーザー入力由来のパスにも対応できるよう、
/// ホームディレクトリと環境変数の両方を展開する
pub fn expand_path<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let expanded = expand_home(path)?;
    expand_env(expanded)
}

/// ファイル拡張子の判定（大文字小文字は区別しない）
pub fn has_extension<P: AsRef<Path>>(path: P, extensions: &[&str]) -> bool {
    if let Some(ext) = path.as_ref().extension() {
        let ext_str = ext.to_string_lossy().to_lowercase();
        extensions.iter().any(|&e| e.to_lowercase() == ext_str)
    } else {
        false
    }
}

/// 拡張子が無ければ付与する（PDFエクスポート等）
pub fn ensure_extension(path: &Path, extension: &str) -> PathBuf {
    if has_extension(path, &[extension]) {
        path.to_path_buf()
    } else {
        let mut result = path.as_os_str().to_os_string();
        result.push(".");
        result.push(extension);
        PathBuf::from(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        let home = dirs::home_dir().unwrap();

        let expanded = expand_home("~/documents/file.txt").unwrap();
        assert_eq!(expanded, home.join("documents/file.txt"));

        // ~で始まらないパスはそのまま
        let plain = expand_home("/tmp/file.txt").unwrap();
        assert_eq!(plain, PathBuf::from("/tmp/file.txt"));
    }

    #[test]
    fn test_expand_env() {
        std::env::set_var("ESHWORD_TEST_DIR", "/workspace/docs");

        let expanded = expand_env("$ESHWORD_TEST_DIR/note.esh").unwrap();
        assert_eq!(expanded, PathBuf::from("/workspace/docs/note.esh"));
    }

    #[test]
    fn test_has_extension() {
        assert!(has_extension("note.esh", &["esh"]));
        assert!(has_extension("note.ESH", &["esh"]));
        assert!(!has_extension("note.txt", &["esh"]));
        assert!(!has_extension("note", &["esh"]));
    }

    #[test]
    fn test_ensure_extension() {
        assert_eq!(
            ensure_extension(Path::new("report"), "pdf"),
            PathBuf::from("report.pdf")
        );
        assert_eq!(
            ensure_extension(Path::new("report.pdf"), "pdf"),
            PathBuf::from("report.pdf")
        );
        // 別の拡張子が付いていても追加する（元実装の挙動）
        assert_eq!(
            ensure_extension(Path::new("report.txt"), "pdf"),
            PathBuf::from("report.txt.pdf")
        );
    }
}
