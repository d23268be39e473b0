//! ドキュメント永続化
//!
//! 保存・読み込みポリシーの実装。拡張子で構造化保存（.esh）と
//! プレーンテキスト保存を切り替え、書き込みは常にアトミックに行う

pub mod codec;
pub mod io;
pub mod path;

pub use codec::{SaveFormat, STRUCTURED_EXTENSION};

use crate::document::Document;
use crate::error::{EshError, Result};
use std::path::{Path, PathBuf};

/// 保存・読み込みポリシーの実装
///
/// UIイベント（開く・保存・オートセーブのtick）から Document 参照とともに
/// 呼び出され、結果を呼び出し元へ返す。他のコンポーネントには依存しない
#[derive(Debug, Default)]
pub struct PersistenceManager;

impl PersistenceManager {
    pub fn new() -> Self {
        Self
    }

    /// ファイルからドキュメントを読み込み
    ///
    /// 読み込みに失敗した場合、新しい Document は生成されない
    pub fn load(&self, path: &Path) -> Result<Document> {
        let path = path::expand_path(path)?;
        let format = SaveFormat::for_path(&path);

        let raw = io::read_file(&path)?;
        let (content, formatting) = codec::decode(&raw, format)?;

        log::info!("loaded {} ({:?})", path.display(), format);
        Ok(Document::from_parts(content, formatting, path))
    }

    /// ドキュメントを指定パスへ保存
    ///
    /// 保存先（location）は変更しない。成功時のみ保存済みマークを付ける
    pub fn save(&self, document: &mut Document, path: &Path, format: SaveFormat) -> Result<()> {
        let encoded = codec::encode(document, format)?;
        io::write_file(path, &encoded)?;

        document.mark_saved();
        log::info!("saved {} ({:?})", path.display(), format);
        Ok(())
    }

    /// 別名で保存し、保存先を確定する
    ///
    /// 書き込みが失敗した場合は location は元のまま
    pub fn save_as(&self, document: &mut Document, path: PathBuf) -> Result<()> {
        let path = path::expand_path(&path)?;
        let format = SaveFormat::for_path(&path);

        self.save(document, &path, format)?;
        document.assign_location(path);
        Ok(())
    }

    /// 既存の保存先へ上書き保存
    ///
    /// 保存先が未確定（Untitled）の場合はエラー。呼び出し元が保存先を
    /// 確定（ダイアログ等）してから `save_as` を使うこと
    pub fn save_in_place(&self, document: &mut Document) -> Result<()> {
        let path = document
            .location()
            .path()
            .ok_or_else(|| {
                EshError::Application("cannot save an untitled document in place".to_string())
            })?
            .to_path_buf();

        let format = SaveFormat::for_path(&path);
        self.save(document, &path, format)
    }
}
