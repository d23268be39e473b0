//! ファイルI/O操作
//!
//! UTF-8テキストファイルの読み込みとアトミック書き込み

use crate::error::{EshError, FileError, FormatError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// ファイルからUTF-8テキストを読み込み
///
/// 存在しない・ディレクトリ・権限なしはそれぞれ対応する `FileError` に、
/// UTF-8として解釈できない内容は `FormatError::Encoding` になる
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(EshError::File(FileError::NotFound {
            path: path.display().to_string(),
        }));
    }

    if path.is_dir() {
        return Err(EshError::File(FileError::InvalidPath {
            path: path.display().to_string(),
        }));
    }

    let raw = fs::read(path).map_err(|e| map_io_error(e, path))?;

    // UTF-8検証はI/Oエラーではなくデコード失敗として扱う
    String::from_utf8(raw).map_err(|e| {
        EshError::Format(FormatError::Encoding {
            message: format!("{}: {}", path.display(), e),
        })
    })
}

/// テキストをファイルへアトミックに書き込み
///
/// 同一ディレクトリの一時ファイルへ書いてからリネームする。
/// 書き込み途中のクラッシュで保存先が壊れることはない
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    // 親ディレクトリが存在しない場合は作成
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| map_io_error(e, parent))?;
        }
    }

    let temp_path = temp_path_for(path)?;
    log::debug!("atomic write: {} via {}", path.display(), temp_path.display());

    fs::write(&temp_path, content.as_bytes()).map_err(|e| map_io_error(e, &temp_path))?;

    fs::rename(&temp_path, path).map_err(|e| {
        // リネーム失敗時は一時ファイルを残さない
        let _ = fs::remove_file(&temp_path);
        map_io_error(e, path)
    })?;

    Ok(())
}

/// ファイルが存在するかチェック
pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

/// 一時ファイルパスを生成（同一ディレクトリ、プロセスID付き）
fn temp_path_for(original: &Path) -> Result<PathBuf> {
    let parent = original.parent().ok_or_else(|| {
        EshError::File(FileError::InvalidPath {
            path: original.display().to_string(),
        })
    })?;

    let filename = original.file_name().ok_or_else(|| {
        EshError::File(FileError::InvalidPath {
            path: original.display().to_string(),
        })
    })?;

    let temp_name = format!(".{}_{}", filename.to_string_lossy(), std::process::id());
    Ok(parent.join(temp_name))
}

/// std::io::Error をパス付きのFileErrorへ変換
fn map_io_error(error: std::io::Error, path: &Path) -> EshError {
    let path_display = path.display().to_string();
    match error.kind() {
        ErrorKind::NotFound => EshError::File(FileError::NotFound { path: path_display }),
        ErrorKind::PermissionDenied => {
            EshError::File(FileError::PermissionDenied { path: path_display })
        }
        _ => EshError::File(FileError::Io {
            message: format!("{}: {}", path_display, error),
        }),
    }
}
