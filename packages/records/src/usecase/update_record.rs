//! UseCase: レコード更新処理
//!
//! 指定されたフィールドだけをマージし、それ以外のフィールドはそのまま残します。

use std::sync::Arc;

use crate::domain::{Record, RecordRepository};

use super::error::RecordUseCaseError;

/// レコード部分更新のユースケース
pub struct UpdateRecordUseCase<R: Record> {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RecordRepository<R>>,
}

impl<R: Record> UpdateRecordUseCase<R> {
    /// 新しい UpdateRecordUseCase を作成
    pub fn new(repository: Arc<dyn RecordRepository<R>>) -> Self {
        Self { repository }
    }

    /// レコード更新を実行
    ///
    /// # Returns
    ///
    /// * `Ok(R)` - 更新後のレコード
    /// * `Err(RecordUseCaseError::NotFound)` - ID が存在しない（ストアは変更しない）
    pub fn execute(&self, id: &str, patch: R::Patch) -> Result<R, RecordUseCaseError> {
        let mut records = self.repository.load()?;

        let record = records
            .get_mut(id)
            .ok_or_else(|| RecordUseCaseError::NotFound {
                kind: R::KIND,
                id: id.to_string(),
            })?;
        tracing::debug!("Applying {:?} to {} {}", patch, R::KIND, id);
        record.apply(patch);
        let updated = record.clone();

        self.repository.save(&records)?;

        tracing::info!("{} {} updated", R::KIND, id);
        Ok(updated)
    }
}
