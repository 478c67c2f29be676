//! UseCase: 部屋の予約・キャンセル確認
//!
//! ホテルと部屋番号の存在だけを確認します。ストアファイルは変更しません。
//! 予約レコード自体の作成・キャンセルは CreateRecordUseCase / DeleteRecordUseCase が担当します。

use std::sync::Arc;

use crate::domain::{Hotel, RecordRepository, RoomNumber};

use super::error::RoomBookingError;

/// 部屋予約確認のユースケース
pub struct RoomBookingUseCase {
    /// ホテルの Repository
    hotels: Arc<dyn RecordRepository<Hotel>>,
}

impl RoomBookingUseCase {
    /// 新しい RoomBookingUseCase を作成
    pub fn new(hotels: Arc<dyn RecordRepository<Hotel>>) -> Self {
        Self { hotels }
    }

    /// 部屋を予約できるか確認する
    pub fn reserve_room(
        &self,
        hotel_id: &str,
        room_number: &RoomNumber,
    ) -> Result<Hotel, RoomBookingError> {
        let hotel = self.find_room(hotel_id, room_number)?;
        tracing::info!("Room {} reserved in hotel {}", room_number, hotel_id);
        Ok(hotel)
    }

    /// 部屋の予約をキャンセルできるか確認する
    pub fn cancel_room_reservation(
        &self,
        hotel_id: &str,
        room_number: &RoomNumber,
    ) -> Result<Hotel, RoomBookingError> {
        let hotel = self.find_room(hotel_id, room_number)?;
        tracing::info!(
            "Reservation for room {} in hotel {} cancelled",
            room_number,
            hotel_id
        );
        Ok(hotel)
    }

    fn find_room(
        &self,
        hotel_id: &str,
        room_number: &RoomNumber,
    ) -> Result<Hotel, RoomBookingError> {
        let mut hotels = self.hotels.load()?;
        let hotel = hotels
            .swap_remove(hotel_id)
            .ok_or_else(|| RoomBookingError::HotelNotFound(hotel_id.to_string()))?;

        if !hotel.has_room(room_number) {
            return Err(RoomBookingError::RoomNotFound {
                hotel_id: hotel_id.to_string(),
                room_number: room_number.to_string(),
            });
        }
        Ok(hotel)
    }
}
