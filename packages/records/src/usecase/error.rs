//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RecordKind, RepositoryError};

/// レコード操作（作成・削除・表示・更新）のエラー
#[derive(Debug, Error)]
pub enum RecordUseCaseError {
    /// 同じ ID のレコードが既に存在する
    #[error("{kind} with ID {id} already exists.")]
    AlreadyExists { kind: RecordKind, id: String },

    /// 指定した ID のレコードが存在しない
    #[error("{kind} with ID {id} does not exist.")]
    NotFound { kind: RecordKind, id: String },

    /// ストアファイルの読み書きに失敗した
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// 部屋の予約・キャンセル確認のエラー
#[derive(Debug, Error)]
pub enum RoomBookingError {
    /// ホテルが存在しない
    #[error("Hotel with ID {0} does not exist.")]
    HotelNotFound(String),

    /// 部屋がホテルに存在しない
    #[error("Room number {room_number} does not exist in hotel {hotel_id}.")]
    RoomNotFound {
        hotel_id: String,
        room_number: String,
    },

    /// ストアファイルの読み込みに失敗した
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
