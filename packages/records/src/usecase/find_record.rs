//! UseCase: レコード表示処理

use std::sync::Arc;

use crate::domain::{Record, RecordRepository};

use super::error::RecordUseCaseError;

/// ID でレコードを取得するユースケース
pub struct FindRecordUseCase<R: Record> {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RecordRepository<R>>,
}

impl<R: Record> FindRecordUseCase<R> {
    /// 新しい FindRecordUseCase を作成
    pub fn new(repository: Arc<dyn RecordRepository<R>>) -> Self {
        Self { repository }
    }

    /// ID でレコードを取得
    pub fn execute(&self, id: &str) -> Result<R, RecordUseCaseError> {
        let mut records = self.repository.load()?;
        records
            .swap_remove(id)
            .ok_or_else(|| RecordUseCaseError::NotFound {
                kind: R::KIND,
                id: id.to_string(),
            })
    }
}
