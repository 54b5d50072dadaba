//! RoomRegistry: 全ての Room と「接続 → Room」の索引を保持する集約
//!
//! 各操作は 1 回の呼び出しで状態を変更し、送信すべき `Delivery` の一覧を返します。
//! 呼び出し側（UseCase 層）はこの集約を排他的にロックしたまま操作と送信を行うため、
//! 操作同士（タイマーの tick を含む）は直列化されます。

use std::{collections::HashMap, time::Duration};

use super::{
    ConnectionId, Dealer, Delivery, Description, MIN_PLAYERS_TO_START, Player, PlayerName, Room,
    RoomCode, RoomError, RoomEvent, RoundTimer, TickResult, TimerId, Timestamp,
};

/// ラウンドの制限時間（秒）の既定値
pub const DEFAULT_ROUND_SECONDS: u32 = 300;

/// Round settings shared by every room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    /// ラウンドの制限時間（秒）
    pub round_seconds: u32,
    /// タイマーの tick 間隔
    pub tick_interval: Duration,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            round_seconds: DEFAULT_ROUND_SECONDS,
            tick_interval: Duration::from_secs(1),
        }
    }
}

/// Outcome of a timer tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub deliveries: Vec<Delivery>,
    /// false ならタイマータスクは終了する
    pub keep_running: bool,
}

impl TickOutcome {
    fn stopped() -> Self {
        Self {
            deliveries: Vec::new(),
            keep_running: false,
        }
    }
}

/// RoomRegistry
pub struct RoomRegistry {
    rooms: HashMap<RoomCode, Room>,
    connections: HashMap<ConnectionId, RoomCode>,
    settings: GameSettings,
    next_timer_id: u64,
}

impl RoomRegistry {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            rooms: HashMap::new(),
            connections: HashMap::new(),
            settings,
            next_timer_id: 0,
        }
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn room(&self, code: &RoomCode) -> Option<&Room> {
        self.rooms.get(code)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// 接続が参加している Room の code
    pub fn room_of(&self, connection_id: &ConnectionId) -> Option<&RoomCode> {
        self.connections.get(connection_id)
    }

    /// Join: 必要なら Room を作成してプレイヤーを追加する
    ///
    /// 満員の場合は `RoomError::RoomFull` を返し、状態は変更しない。
    pub fn join(
        &mut self,
        connection_id: ConnectionId,
        code: RoomCode,
        name: PlayerName,
        joined_at: Timestamp,
    ) -> Result<Vec<Delivery>, RoomError> {
        if self.connections.contains_key(&connection_id) {
            return Err(RoomError::AlreadyInRoom(connection_id.into_string()));
        }
        if self.rooms.get(&code).is_some_and(Room::is_full) {
            return Err(RoomError::RoomFull(code.to_string()));
        }

        let round_seconds = self.settings.round_seconds;
        let room = self
            .rooms
            .entry(code.clone())
            .or_insert_with(|| Room::new(code.clone(), joined_at, round_seconds));
        room.add_player(Player::new(connection_id.clone(), name, joined_at))?;
        self.connections.insert(connection_id, code);

        Ok(vec![Delivery::broadcast(
            room.player_ids(),
            RoomEvent::RoomUpdate {
                players: room.players().to_vec(),
                phase: room.phase(),
            },
        )])
    }

    /// StartGame: 単語とインポスターを選び、ラウンドを開始する
    ///
    /// `spawn_timer` は前提条件を満たしたときにだけ呼ばれ、新しいタイマーを起動して
    /// そのハンドルを返す。返り値は各プレイヤー宛ての個別の `game-started`。
    pub fn start_game(
        &mut self,
        requester: &ConnectionId,
        code: &RoomCode,
        dealer: &dyn Dealer,
        spawn_timer: impl FnOnce(TimerId) -> RoundTimer,
    ) -> Result<Vec<Delivery>, RoomError> {
        let room = self.rooms.get_mut(code).ok_or_else(|| not_found(code))?;
        if !room.has_player(requester) {
            return Err(RoomError::NotInRoom(requester.to_string()));
        }
        if room.players().len() < MIN_PLAYERS_TO_START {
            return Err(RoomError::NotEnoughPlayers {
                required: MIN_PLAYERS_TO_START,
                actual: room.players().len(),
            });
        }

        self.next_timer_id += 1;
        let timer = spawn_timer(TimerId::new(self.next_timer_id));
        let words = dealer.word_pair();
        let impostor_index = dealer.impostor_index(room.players().len());
        room.start_round(words, impostor_index, timer)?;

        let players = room.players().to_vec();
        let deliveries = players
            .iter()
            .map(|player| {
                let is_impostor = room.impostor() == Some(&player.id);
                Delivery::to(
                    player.id.clone(),
                    RoomEvent::GameStarted {
                        players: players.clone(),
                        is_impostor,
                        current_word: if is_impostor {
                            None
                        } else {
                            room.current_word().map(str::to_string)
                        },
                        phase: room.phase(),
                        current_player: room.current_player(),
                    },
                )
            })
            .collect();
        Ok(deliveries)
    }

    /// SubmitDescription
    pub fn submit_description(
        &mut self,
        requester: &ConnectionId,
        code: &RoomCode,
        description: Description,
    ) -> Result<Vec<Delivery>, RoomError> {
        let room = self.rooms.get_mut(code).ok_or_else(|| not_found(code))?;
        room.record_description(requester, description)?;

        Ok(vec![Delivery::broadcast(
            room.player_ids(),
            RoomEvent::DescriptionSubmitted {
                descriptions: room.descriptions().clone(),
                current_player: room.current_player(),
                phase: room.phase(),
            },
        )])
    }

    /// SubmitVote: 全員の投票が揃ったら結果を送り、Room を lobby に戻す
    pub fn submit_vote(
        &mut self,
        requester: &ConnectionId,
        code: &RoomCode,
        target: ConnectionId,
    ) -> Result<Vec<Delivery>, RoomError> {
        let room = self.rooms.get_mut(code).ok_or_else(|| not_found(code))?;
        let event = match room.record_vote(requester, target)? {
            Some(result) => RoomEvent::GameEnded(result),
            None => RoomEvent::VoteSubmitted {
                votes: room.votes().to_vec(),
            },
        };

        Ok(vec![Delivery::broadcast(room.player_ids(), event)])
    }

    /// RestartGame: どの状態からでも lobby に戻す
    pub fn restart(
        &mut self,
        requester: &ConnectionId,
        code: &RoomCode,
    ) -> Result<Vec<Delivery>, RoomError> {
        let room = self.rooms.get_mut(code).ok_or_else(|| not_found(code))?;
        if !room.has_player(requester) {
            return Err(RoomError::NotInRoom(requester.to_string()));
        }
        room.restart();

        Ok(vec![Delivery::broadcast(
            room.player_ids(),
            RoomEvent::GameRestarted,
        )])
    }

    /// Disconnect: プレイヤーを削除し、空になった Room は削除する
    pub fn disconnect(
        &mut self,
        connection_id: &ConnectionId,
    ) -> Result<Vec<Delivery>, RoomError> {
        let code = self
            .connections
            .remove(connection_id)
            .ok_or_else(|| RoomError::NotInRoom(connection_id.to_string()))?;
        let Some(room) = self.rooms.get_mut(&code) else {
            return Ok(Vec::new());
        };

        let abandoned = room.remove_player(connection_id).unwrap_or(false);
        if room.is_empty() {
            room.cancel_timer();
            self.rooms.remove(&code);
            tracing::info!("Room '{}' is empty and has been removed", code);
            return Ok(Vec::new());
        }

        let recipients = room.player_ids();
        let mut deliveries = vec![Delivery::broadcast(
            recipients.clone(),
            RoomEvent::PlayerDisconnected {
                players: room.players().to_vec(),
            },
        )];
        if abandoned {
            deliveries.push(Delivery::broadcast(recipients, RoomEvent::GameRestarted));
        }
        Ok(deliveries)
    }

    /// タイマーの tick を 1 回処理する
    pub fn tick(&mut self, code: &RoomCode, timer_id: TimerId) -> TickOutcome {
        let Some(room) = self.rooms.get_mut(code) else {
            return TickOutcome::stopped();
        };

        match room.tick(timer_id) {
            TickResult::Stale => TickOutcome::stopped(),
            TickResult::Ticked { time_left } => TickOutcome {
                deliveries: vec![Delivery::broadcast(
                    room.player_ids(),
                    RoomEvent::TimerUpdate { time_left },
                )],
                keep_running: true,
            },
            TickResult::Expired => TickOutcome {
                deliveries: vec![
                    Delivery::broadcast(room.player_ids(), RoomEvent::TimerUpdate { time_left: 0 }),
                    Delivery::broadcast(
                        room.player_ids(),
                        RoomEvent::GameStateChange {
                            phase: room.phase(),
                            descriptions: room.descriptions().clone(),
                        },
                    ),
                ],
                keep_running: false,
            },
        }
    }
}

fn not_found(code: &RoomCode) -> RoomError {
    RoomError::RoomNotFound(code.to_string())
}
