//! JSON file Record Repository 実装
//!
//! ドメイン層が定義する RecordRepository trait の具体的な実装。
//! ストアファイル全体を読み込み、変更のたびにファイル全体を書き戻します。
//!
//! ```text
//! JSON ファイル → serde_json::Value → Record::from_fields → IndexMap<id, Record>
//! ```
//!
//! ファイル欠損・JSON 破損は空のマッピングとして扱います。型の合わない
//! レコードを含むファイルはエラーとし、書き戻しで有効なレコードを失わないようにします。
//!
//! ファイルロックは行いません。複数プロセスから同時に書き込むと更新が失われます。

use std::{
    fs,
    io::{self, Write},
    marker::PhantomData,
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};
use tempfile::NamedTempFile;

use crate::domain::{Record, RecordRepository, RepositoryError};

/// Indentation used when writing store files
const INDENT: &[u8] = b"    ";

/// JSON ファイルをストレージとして使用する Repository 実装
pub struct JsonFileRepository<R> {
    /// ストアファイルのパス
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> JsonFileRepository<R> {
    /// 新しい JsonFileRepository を作成
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルを厳密に読み込む（欠損・破損はエラーとして返す）
    fn read_records(&self) -> Result<IndexMap<String, R>, RepositoryError> {
        let content = fs::read_to_string(&self.path).map_err(|source| RepositoryError::Read {
            path: self.path.clone(),
            source,
        })?;

        let value: Value =
            serde_json::from_str(&content).map_err(|source| RepositoryError::MalformedJson {
                path: self.path.clone(),
                source,
            })?;

        let Value::Object(entries) = value else {
            return Err(RepositoryError::NotAnObject {
                path: self.path.clone(),
            });
        };

        entries
            .into_iter()
            .map(|(id, fields)| {
                R::from_value(&fields)
                    .map(|record| (id.clone(), record))
                    .map_err(|source| RepositoryError::InvalidRecord {
                        path: self.path.clone(),
                        id,
                        source,
                    })
            })
            .collect()
    }
}

impl<R: Record> RecordRepository<R> for JsonFileRepository<R> {
    fn load(&self) -> Result<IndexMap<String, R>, RepositoryError> {
        match self.read_records() {
            Ok(records) => {
                tracing::debug!(
                    "Loaded {} {} record(s) from {}",
                    records.len(),
                    R::KIND,
                    self.path.display()
                );
                Ok(records)
            }
            Err(RepositoryError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("File not found: {}", self.path.display());
                Ok(IndexMap::new())
            }
            Err(
                e @ (RepositoryError::MalformedJson { .. } | RepositoryError::NotAnObject { .. }),
            ) => {
                tracing::warn!("{}. Data may be corrupted.", e);
                Ok(IndexMap::new())
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, records: &IndexMap<String, R>) -> Result<(), RepositoryError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        records.serialize(&mut serializer)?;
        buf.push(b'\n');

        let write_error = |source: io::Error| RepositoryError::Write {
            path: self.path.clone(),
            source,
        };

        // 同じディレクトリの一時ファイルに書き込んでから rename する
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
        tmp.write_all(&buf).map_err(write_error)?;
        tmp.persist(&self.path).map_err(|e| write_error(e.error))?;

        tracing::debug!(
            "Saved {} {} record(s) to {}",
            records.len(),
            R::KIND,
            self.path.display()
        );
        Ok(())
    }
}
