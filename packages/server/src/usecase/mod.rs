//! UseCase layer
//!
//! クライアントからのイベント 1 種類につき 1 つのユースケースを定義します。
//! 各ユースケースは RoomRegistry をロックし、状態を変更して、ロックを保持したまま
//! 結果を MessagePusher で送信します。

mod dispatch;
mod round_timer;
#[cfg(test)]
mod test_support;

pub mod connect;
pub mod disconnect;
pub mod error;
pub mod get_room_detail;
pub mod get_rooms;
pub mod join_room;
pub mod restart_game;
pub mod start_game;
pub mod submit_description;
pub mod submit_vote;

pub use connect::ConnectUseCase;
pub use disconnect::DisconnectUseCase;
pub use error::GetRoomDetailError;
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use restart_game::RestartGameUseCase;
pub use start_game::StartGameUseCase;
pub use submit_description::SubmitDescriptionUseCase;
pub use submit_vote::SubmitVoteUseCase;
