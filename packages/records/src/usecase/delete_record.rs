//! UseCase: レコード削除処理
//!
//! ホテル・顧客の削除と、予約のキャンセルの両方に使用します。

use std::sync::Arc;

use crate::domain::{Record, RecordRepository};

use super::error::RecordUseCaseError;

/// レコード削除のユースケース
pub struct DeleteRecordUseCase<R: Record> {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RecordRepository<R>>,
}

impl<R: Record> DeleteRecordUseCase<R> {
    /// 新しい DeleteRecordUseCase を作成
    pub fn new(repository: Arc<dyn RecordRepository<R>>) -> Self {
        Self { repository }
    }

    /// レコード削除を実行
    ///
    /// # Returns
    ///
    /// * `Ok(R)` - 削除されたレコード
    /// * `Err(RecordUseCaseError::NotFound)` - ID が存在しない（ストアは変更しない）
    pub fn execute(&self, id: &str) -> Result<R, RecordUseCaseError> {
        let mut records = self.repository.load()?;

        // shift_remove keeps the remaining records in file order
        let removed = records
            .shift_remove(id)
            .ok_or_else(|| RecordUseCaseError::NotFound {
                kind: R::KIND,
                id: id.to_string(),
            })?;
        self.repository.save(&records)?;

        tracing::info!("{} {} deleted", R::KIND, id);
        Ok(removed)
    }
}
