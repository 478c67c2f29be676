//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。
//! 作成・削除・表示・更新はレコード種別に依存しないため、`Record` に対してジェネリックです。

pub mod book_room;
pub mod create_record;
pub mod delete_record;
pub mod error;
pub mod find_record;
pub mod update_record;

pub use book_room::RoomBookingUseCase;
pub use create_record::CreateRecordUseCase;
pub use delete_record::DeleteRecordUseCase;
pub use error::{RecordUseCaseError, RoomBookingError};
pub use find_record::FindRecordUseCase;
pub use update_record::UpdateRecordUseCase;
