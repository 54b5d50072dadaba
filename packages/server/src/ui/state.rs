//! Shared application state.

use std::sync::Arc;

use crate::{
    domain::{Dealer, MessagePusher},
    infrastructure::repository::InMemorySessionStore,
    usecase::{
        ConnectUseCase, DisconnectUseCase, GetRoomDetailUseCase, GetRoomsUseCase,
        JoinRoomUseCase, RestartGameUseCase, StartGameUseCase, SubmitDescriptionUseCase,
        SubmitVoteUseCase,
    },
};

/// Use cases shared by every handler
pub struct AppState {
    pub connect_usecase: ConnectUseCase,
    pub join_room_usecase: JoinRoomUseCase,
    pub start_game_usecase: StartGameUseCase,
    pub submit_description_usecase: SubmitDescriptionUseCase,
    pub submit_vote_usecase: SubmitVoteUseCase,
    pub restart_game_usecase: RestartGameUseCase,
    pub disconnect_usecase: DisconnectUseCase,
    pub get_rooms_usecase: GetRoomsUseCase,
    pub get_room_detail_usecase: GetRoomDetailUseCase,
}

impl AppState {
    /// Wire every use case to the same store, pusher and dealer
    pub fn new(
        store: InMemorySessionStore,
        message_pusher: Arc<dyn MessagePusher>,
        dealer: Arc<dyn Dealer>,
    ) -> Self {
        Self {
            connect_usecase: ConnectUseCase::new(message_pusher.clone()),
            join_room_usecase: JoinRoomUseCase::new(store.clone(), message_pusher.clone()),
            start_game_usecase: StartGameUseCase::new(
                store.clone(),
                message_pusher.clone(),
                dealer,
            ),
            submit_description_usecase: SubmitDescriptionUseCase::new(
                store.clone(),
                message_pusher.clone(),
            ),
            submit_vote_usecase: SubmitVoteUseCase::new(store.clone(), message_pusher.clone()),
            restart_game_usecase: RestartGameUseCase::new(store.clone(), message_pusher.clone()),
            disconnect_usecase: DisconnectUseCase::new(store.clone(), message_pusher),
            get_rooms_usecase: GetRoomsUseCase::new(store.clone()),
            get_room_detail_usecase: GetRoomDetailUseCase::new(store),
        }
    }
}
