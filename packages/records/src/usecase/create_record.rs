//! UseCase: レコード作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateRecordUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - ID の一意性を保証する唯一の場所であるため
//! - 重複時にストアファイルが書き換えられないことを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新規 ID のレコード作成
//! - 異常系：既存 ID での作成試行
//! - 異常系：不正なレコードを含むストアへの作成試行

use std::sync::Arc;

use crate::domain::{Record, RecordRepository};

use super::error::RecordUseCaseError;

/// レコード作成のユースケース
pub struct CreateRecordUseCase<R: Record> {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RecordRepository<R>>,
}

impl<R: Record> CreateRecordUseCase<R> {
    /// 新しい CreateRecordUseCase を作成
    pub fn new(repository: Arc<dyn RecordRepository<R>>) -> Self {
        Self { repository }
    }

    /// レコード作成を実行
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 作成成功（ストアファイルを書き換え済み）
    /// * `Err(RecordUseCaseError::AlreadyExists)` - 同じ ID が既に存在する
    pub fn execute(&self, record: R) -> Result<(), RecordUseCaseError> {
        let mut records = self.repository.load()?;

        let id = record.id().to_string();
        if records.contains_key(&id) {
            return Err(RecordUseCaseError::AlreadyExists { kind: R::KIND, id });
        }

        records.insert(id.clone(), record);
        self.repository.save(&records)?;

        tracing::info!("{} {} created", R::KIND, id);
        Ok(())
    }
}
