//! Entities: Player, Room
//!
//! Room は 1 つのゲームセッションの状態機械です。
//!
//! ```text
//! lobby --start(>=2 players)--> describing --(all described | time up)--> voting --(all voted)--> lobby
//! ```
//!
//! どの状態からでも restart で lobby に戻ります。
//! ここでのメソッドは状態を変更するだけで、通知は行いません（通知内容の組み立ては `RoomRegistry`）。

use std::{collections::HashMap, fmt};

use super::{
    ConnectionId, Description, PlayerName, RoomCode, RoomError, RoundTimer, TimerId, Timestamp,
    WordPair,
};

/// 1 部屋あたりの最大プレイヤー数
pub const ROOM_CAPACITY: usize = 2;
/// ゲーム開始に必要なプレイヤー数
pub const MIN_PLAYERS_TO_START: usize = 2;

/// Player entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// 接続 ID（プレイヤー ID を兼ねる）
    pub id: ConnectionId,
    pub name: PlayerName,
    pub joined_at: Timestamp,
}

impl Player {
    pub fn new(id: ConnectionId, name: PlayerName, joined_at: Timestamp) -> Self {
        Self {
            id,
            name,
            joined_at,
        }
    }
}

/// Game phase of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Lobby,
    Describing,
    Voting,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Lobby => "lobby",
            GamePhase::Describing => "describing",
            GamePhase::Voting => "voting",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ballot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vote {
    pub voter: ConnectionId,
    pub target: ConnectionId,
}

/// The secret of the round in progress
///
/// 単語とインポスターは必ず同時に設定・消去される。
#[derive(Debug, Clone, PartialEq, Eq)]
struct Round {
    words: WordPair,
    impostor: ConnectionId,
}

/// Outcome of a completed vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub impostor: Player,
    pub votes: Vec<Vote>,
    pub impostor_caught: bool,
    pub descriptions: HashMap<ConnectionId, Description>,
    pub words: WordPair,
}

/// Outcome of one timer tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickResult {
    /// tick の対象外（別のタイマー、または describing 以外）。タイマーは停止すべき
    Stale,
    /// 残り時間を 1 秒減らした
    Ticked { time_left: u32 },
    /// 残り時間が 0 になり voting に遷移した
    Expired,
}

/// Read-only view of a room for the HTTP API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub code: RoomCode,
    pub players: Vec<Player>,
    pub phase: GamePhase,
    pub time_left: u32,
    pub created_at: Timestamp,
}

/// Room entity
#[derive(Debug)]
pub struct Room {
    pub code: RoomCode,
    /// 参加順
    players: Vec<Player>,
    phase: GamePhase,
    round: Option<Round>,
    current_player: usize,
    time_left: u32,
    round_seconds: u32,
    descriptions: HashMap<ConnectionId, Description>,
    /// 最初に投票した順（再投票しても位置は変わらない）
    votes: Vec<Vote>,
    timer: Option<RoundTimer>,
    pub created_at: Timestamp,
}

impl Room {
    /// lobby 状態の空の Room を作成
    pub fn new(code: RoomCode, created_at: Timestamp, round_seconds: u32) -> Self {
        Self {
            code,
            players: Vec::with_capacity(ROOM_CAPACITY),
            phase: GamePhase::Lobby,
            round: None,
            current_player: 0,
            time_left: round_seconds,
            round_seconds,
            descriptions: HashMap::new(),
            votes: Vec::new(),
            timer: None,
            created_at,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_ids(&self) -> Vec<ConnectionId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn current_word(&self) -> Option<&str> {
        self.round.as_ref().map(|r| r.words.word.as_str())
    }

    pub fn impostor(&self) -> Option<&ConnectionId> {
        self.round.as_ref().map(|r| &r.impostor)
    }

    pub fn descriptions(&self) -> &HashMap<ConnectionId, Description> {
        &self.descriptions
    }

    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    pub fn timer_id(&self) -> Option<TimerId> {
        self.timer.as_ref().map(RoundTimer::id)
    }

    pub fn has_player(&self, id: &ConnectionId) -> bool {
        self.players.iter().any(|p| &p.id == id)
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= ROOM_CAPACITY
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_round_active(&self) -> bool {
        self.round.is_some()
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            code: self.code.clone(),
            players: self.players.clone(),
            phase: self.phase,
            time_left: self.time_left,
            created_at: self.created_at,
        }
    }

    /// プレイヤーを追加
    pub fn add_player(&mut self, player: Player) -> Result<(), RoomError> {
        if self.is_full() {
            return Err(RoomError::RoomFull(self.code.to_string()));
        }
        self.players.push(player);
        Ok(())
    }

    /// プレイヤーを削除
    ///
    /// ラウンド中に抜けた場合はラウンドを破棄して lobby に戻る
    /// （インポスターが常にプレイヤーの一人であるため）。
    /// 戻り値は削除できたかどうかと、ラウンドを破棄したかどうか。
    pub fn remove_player(&mut self, id: &ConnectionId) -> Option<bool> {
        let index = self.players.iter().position(|p| &p.id == id)?;
        self.players.remove(index);
        self.descriptions.remove(id);
        self.votes.retain(|v| &v.voter != id);

        let abandoned = self.is_round_active();
        if abandoned {
            self.reset_to_lobby();
            self.current_player = 0;
        } else if self.current_player >= self.players.len() {
            self.current_player = 0;
        }
        Some(abandoned)
    }

    /// 新しいラウンドを開始し describing に遷移
    ///
    /// 既存のタイマーは `timer` に置き換えられ、古いタイマーは停止する。
    pub fn start_round(
        &mut self,
        words: WordPair,
        impostor_index: usize,
        timer: RoundTimer,
    ) -> Result<(), RoomError> {
        if self.players.len() < MIN_PLAYERS_TO_START {
            return Err(RoomError::NotEnoughPlayers {
                required: MIN_PLAYERS_TO_START,
                actual: self.players.len(),
            });
        }

        let impostor = self.players[impostor_index % self.players.len()].id.clone();
        self.round = Some(Round { words, impostor });
        self.phase = GamePhase::Describing;
        self.current_player = 0;
        self.descriptions.clear();
        self.votes.clear();
        self.time_left = self.round_seconds;
        self.replace_timer(Some(timer));
        Ok(())
    }

    /// 説明文を記録し、手番を次のプレイヤーに進める
    ///
    /// 全員の説明文が揃ったら voting に遷移し、タイマーを停止する。
    pub fn record_description(
        &mut self,
        player_id: &ConnectionId,
        description: Description,
    ) -> Result<(), RoomError> {
        self.ensure_player(player_id)?;
        self.ensure_phase(GamePhase::Describing)?;

        self.descriptions.insert(player_id.clone(), description);
        self.current_player = (self.current_player + 1) % self.players.len();

        if self.everyone(|id| self.descriptions.contains_key(id)) {
            self.phase = GamePhase::Voting;
            self.replace_timer(None);
        }
        Ok(())
    }

    /// 投票を記録
    ///
    /// 全員が投票したら集計結果を返し、Room を lobby に戻す。
    pub fn record_vote(
        &mut self,
        voter: &ConnectionId,
        target: ConnectionId,
    ) -> Result<Option<RoundResult>, RoomError> {
        self.ensure_player(voter)?;
        self.ensure_phase(GamePhase::Voting)?;
        if !self.has_player(&target) {
            return Err(RoomError::UnknownPlayer(target.into_string()));
        }

        match self.votes.iter_mut().find(|v| &v.voter == voter) {
            Some(vote) => vote.target = target,
            None => self.votes.push(Vote {
                voter: voter.clone(),
                target,
            }),
        }

        if !self.everyone(|id| self.votes.iter().any(|v| &v.voter == id)) {
            return Ok(None);
        }

        let round = self.round.take();
        let impostor = round
            .as_ref()
            .and_then(|r| self.players.iter().find(|p| p.id == r.impostor).cloned());
        let (Some(round), Some(impostor)) = (round, impostor) else {
            // voting 中は必ずラウンドがあり、インポスターは部屋にいる
            self.reset_to_lobby();
            return Ok(None);
        };
        let accused = tally(&self.votes);
        let result = RoundResult {
            impostor_caught: accused.as_ref() == Some(&impostor.id),
            impostor,
            votes: std::mem::take(&mut self.votes),
            descriptions: std::mem::take(&mut self.descriptions),
            words: round.words,
        };

        self.reset_to_lobby();
        Ok(Some(result))
    }

    /// lobby に戻す（単語・インポスター・説明文・投票を消去し、タイマーを停止）
    pub fn reset_to_lobby(&mut self) {
        self.phase = GamePhase::Lobby;
        self.round = None;
        self.descriptions.clear();
        self.votes.clear();
        self.replace_timer(None);
    }

    /// restart: lobby に戻し、手番もリセットする
    pub fn restart(&mut self) {
        self.reset_to_lobby();
        self.current_player = 0;
    }

    /// タイマーの tick を 1 回処理する
    ///
    /// 別のタイマーからの tick や describing 以外での tick は何もしない。
    pub fn tick(&mut self, timer_id: TimerId) -> TickResult {
        if self.timer_id() != Some(timer_id) || self.phase != GamePhase::Describing {
            return TickResult::Stale;
        }

        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left > 0 {
            return TickResult::Ticked {
                time_left: self.time_left,
            };
        }

        self.phase = GamePhase::Voting;
        // 満了を処理しているのはタイマータスク自身なので abort しない
        if let Some(timer) = self.timer.take() {
            timer.release();
        }
        TickResult::Expired
    }

    /// Room を削除する前にタイマーを停止する
    pub fn cancel_timer(&mut self) {
        self.replace_timer(None);
    }

    fn replace_timer(&mut self, timer: Option<RoundTimer>) {
        if let Some(previous) = std::mem::replace(&mut self.timer, timer) {
            previous.cancel();
        }
    }

    fn ensure_player(&self, id: &ConnectionId) -> Result<(), RoomError> {
        if self.has_player(id) {
            Ok(())
        } else {
            Err(RoomError::NotInRoom(id.to_string()))
        }
    }

    fn ensure_phase(&self, expected: GamePhase) -> Result<(), RoomError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RoomError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn everyone(&self, predicate: impl Fn(&ConnectionId) -> bool) -> bool {
        !self.players.is_empty() && self.players.iter().all(|p| predicate(&p.id))
    }
}

/// 投票を集計し、最多得票のプレイヤーを返す
///
/// 同数の場合は、投票順で先にその最多得票数に達した投票先が選ばれる。
pub fn tally(votes: &[Vote]) -> Option<ConnectionId> {
    let mut counts: HashMap<&ConnectionId, usize> = HashMap::new();
    let mut leader: Option<(&ConnectionId, usize)> = None;

    for vote in votes {
        let count = counts.entry(&vote.target).or_insert(0);
        *count += 1;
        if leader.is_none_or(|(_, best)| *count > best) {
            leader = Some((&vote.target, *count));
        }
    }

    leader.map(|(id, _)| id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> ConnectionId {
        ConnectionId::new(value.to_string()).unwrap()
    }

    fn player(value: &str) -> Player {
        Player::new(
            id(value),
            PlayerName::new(value.to_string()).unwrap(),
            Timestamp::new(1000),
        )
    }

    fn description(value: &str) -> Description {
        Description::new(value.to_string()).unwrap()
    }

    fn vote(voter: &str, target: &str) -> Vote {
        Vote {
            voter: id(voter),
            target: id(target),
        }
    }

    fn create_room_with_players(names: &[&str]) -> Room {
        let mut room = Room::new(
            RoomCode::new("1234".to_string()).unwrap(),
            Timestamp::new(1000),
            300,
        );
        for name in names {
            room.add_player(player(name)).unwrap();
        }
        room
    }

    fn start(room: &mut Room, impostor_index: usize) {
        room.start_round(
            WordPair::new("ocean", "lake"),
            impostor_index,
            RoundTimer::detached(TimerId::new(1)),
        )
        .unwrap();
    }

    #[test]
    fn test_new_room_is_lobby() {
        // テスト項目: 作成直後の Room は lobby 状態で空
        // given (前提条件):

        // when (操作):
        let room = create_room_with_players(&[]);

        // then (期待する結果):
        assert_eq!(room.phase(), GamePhase::Lobby);
        assert!(room.is_empty());
        assert_eq!(room.time_left(), 300);
        assert_eq!(room.current_word(), None);
        assert_eq!(room.impostor(), None);
    }

    #[test]
    fn test_add_player_rejects_third_player() {
        // テスト項目: 3 人目のプレイヤーは追加できず、プレイヤーリストは変わらない
        // given (前提条件):
        let mut room = create_room_with_players(&["alice", "bob"]);

        // when (操作):
        let result = room.add_player(player("charlie"));

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::RoomFull("1234".to_string())));
        assert_eq!(room.players().len(), 2);
        assert!(!room.has_player(&id("charlie")));
    }

    #[test]
    fn test_start_round_requires_two_players() {
        // テスト項目: プレイヤーが 1 人のときはラウンドを開始できない
        // given (前提条件):
        let mut room = create_room_with_players(&["alice"]);

        // when (操作):
        let result = room.start_round(
            WordPair::new("sun", "star"),
            0,
            RoundTimer::detached(TimerId::new(1)),
        );

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RoomError::NotEnoughPlayers {
                required: 2,
                actual: 1
            })
        );
        assert_eq!(room.phase(), GamePhase::Lobby);
        assert_eq!(room.timer_id(), None);
    }

    #[test]
    fn test_start_round_sets_word_and_impostor_together() {
        // テスト項目: ラウンド開始で単語とインポスターが同時に設定される
        // given (前提条件):
        let mut room = create_room_with_players(&["alice", "bob"]);

        // when (操作):
        start(&mut room, 1);

        // then (期待する結果):
        assert_eq!(room.phase(), GamePhase::Describing);
        assert_eq!(room.current_word(), Some("ocean"));
        assert_eq!(room.impostor(), Some(&id("bob")));
        assert_eq!(room.current_player(), 0);
        assert_eq!(room.time_left(), 300);
    }

    #[test]
    fn test_descriptions_transition_to_voting_once() {
        // テスト項目: 2 人が説明文を出すと describing から voting に 1 度だけ遷移する
        // given (前提条件):
        let mut room = create_room_with_players(&["alice", "bob"]);
        start(&mut room, 0);

        // when (操作): bob から先に提出
        room.record_description(&id("bob"), description("deep blue"))
            .unwrap();
        let phase_after_first = room.phase();
        room.record_description(&id("alice"), description("salty water"))
            .unwrap();

        // then (期待する結果):
        assert_eq!(phase_after_first, GamePhase::Describing);
        assert_eq!(room.phase(), GamePhase::Voting);
        assert_eq!(room.descriptions().len(), 2);
        assert_eq!(room.timer_id(), None);
        // voting になった後の説明文は受け付けない
        assert!(matches!(
            room.record_description(&id("alice"), description("again")),
            Err(RoomError::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_resubmitted_description_overwrites() {
        // テスト項目: 同じプレイヤーの再提出は上書きされ、全員分が揃うまで voting にならない
        // given (前提条件):
        let mut room = create_room_with_players(&["alice", "bob"]);
        start(&mut room, 0);

        // when (操作):
        room.record_description(&id("alice"), description("first"))
            .unwrap();
        room.record_description(&id("alice"), description("second"))
            .unwrap();

        // then (期待する結果):
        assert_eq!(room.phase(), GamePhase::Describing);
        assert_eq!(room.descriptions().len(), 1);
        assert_eq!(room.descriptions()[&id("alice")].as_str(), "second");
        // 手番は提出のたびに進む
        assert_eq!(room.current_player(), 0);
    }

    #[test]
    fn test_description_from_outsider_is_rejected() {
        // テスト項目: 部屋にいない接続からの説明文は拒否される
        // given (前提条件):
        let mut room = create_room_with_players(&["alice", "bob"]);
        start(&mut room, 0);

        // when (操作):
        let result = room.record_description(&id("mallory"), description("hi"));

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::NotInRoom("mallory".to_string())));
        assert!(room.descriptions().is_empty());
    }

    #[test]
    fn test_votes_complete_round_and_reset_to_lobby() {
        // テスト項目: 全員が投票すると結果が返り、Room は lobby にリセットされる
        // given (前提条件):
        let mut room = create_room_with_players(&["alice", "bob"]);
        start(&mut room, 1);
        room.record_description(&id("alice"), description("wet"))
            .unwrap();
        room.record_description(&id("bob"), description("big"))
            .unwrap();

        // when (操作):
        let partial = room.record_vote(&id("alice"), id("bob")).unwrap();
        let result = room.record_vote(&id("bob"), id("bob")).unwrap();

        // then (期待する結果):
        assert_eq!(partial, None);
        let result = result.expect("round should be complete");
        assert_eq!(result.impostor.id, id("bob"));
        assert!(result.impostor_caught);
        assert_eq!(result.votes.len(), 2);
        assert_eq!(result.descriptions.len(), 2);
        assert_eq!(result.words, WordPair::new("ocean", "lake"));

        assert_eq!(room.phase(), GamePhase::Lobby);
        assert_eq!(room.current_word(), None);
        assert_eq!(room.impostor(), None);
        assert!(room.descriptions().is_empty());
        assert!(room.votes().is_empty());
        assert_eq!(room.timer_id(), None);
    }

    #[test]
    fn test_vote_for_unknown_player_is_rejected() {
        // テスト項目: 部屋にいないプレイヤーへの投票は拒否される
        // given (前提条件):
        let mut room = create_room_with_players(&["alice", "bob"]);
        start(&mut room, 0);
        room.record_description(&id("alice"), description("a"))
            .unwrap();
        room.record_description(&id("bob"), description("b"))
            .unwrap();

        // when (操作):
        let result = room.record_vote(&id("alice"), id("nobody"));

        // then (期待する結果):
        assert_eq!(result, Err(RoomError::UnknownPlayer("nobody".to_string())));
        assert!(room.votes().is_empty());
    }

    #[test]
    fn test_vote_outside_voting_is_rejected() {
        // テスト項目: voting 以外のフェーズでの投票は拒否される
        // given (前提条件):
        let mut room = create_room_with_players(&["alice", "bob"]);

        // when (操作):
        let result = room.record_vote(&id("alice"), id("bob"));

        // then (期待する結果):
        assert_eq!(
            result,
            Err(RoomError::WrongPhase {
                expected: GamePhase::Voting,
                actual: GamePhase::Lobby
            })
        );
    }

    #[test]
    fn test_tally_majority() {
        // テスト項目: 2 票とも B に入った場合、B が選ばれる
        // given (前提条件):
        let votes = vec![vote("a", "b"), vote("b", "b")];

        // when (操作):
        let winner = tally(&votes);

        // then (期待する結果):
        assert_eq!(winner, Some(id("b")));
    }

    #[test]
    fn test_tally_tie_prefers_first_target() {
        // テスト項目: 同数の場合は投票順で最初の投票先が選ばれる
        // given (前提条件):
        let votes = vec![vote("a", "b"), vote("b", "a")];

        // when (操作):
        let winner = tally(&votes);

        // then (期待する結果):
        assert_eq!(winner, Some(id("b")));
    }

    #[test]
    fn test_tally_later_majority_overtakes() {
        // テスト項目: 後から最多得票になった投票先が選ばれる
        // given (前提条件):
        let votes = vec![vote("a", "x"), vote("b", "y"), vote("c", "y")];

        // when (操作):
        let winner = tally(&votes);

        // then (期待する結果):
        assert_eq!(winner, Some(id("y")));
    }

    #[test]
    fn test_tally_empty() {
        // テスト項目: 投票がない場合は誰も選ばれない
        // given (前提条件):

        // when (操作):
        let winner = tally(&[]);

        // then (期待する結果):
        assert_eq!(winner, None);
    }

    #[test]
    fn test_revote_keeps_original_position() {
        // テスト項目: 再投票しても投票順の位置は変わらない
        // given (前提条件):
        let mut room = create_room_with_players(&["alice", "bob"]);
        start(&mut room, 0);
        room.record_description(&id("alice"), description("a"))
            .unwrap();
        room.record_description(&id("bob"), description("b"))
            .unwrap();
        room.record_vote(&id("alice"), id("alice")).unwrap();

        // when (操作):
        room.record_vote(&id("alice"), id("bob")).unwrap();

        // then (期待する結果):
        assert_eq!(room.votes(), &[vote("alice", "bob")]);
    }

    #[test]
    fn test_tick_counts_down_and_expires() {
        // テスト項目: tick で残り時間が減り、0 になると voting に遷移する
        // given (前提条件):
        let mut room = Room::new(
            RoomCode::new("1234".to_string()).unwrap(),
            Timestamp::new(1000),
            2,
        );
        room.add_player(player("alice")).unwrap();
        room.add_player(player("bob")).unwrap();
        start(&mut room, 0);

        // when (操作):
        let first = room.tick(TimerId::new(1));
        let second = room.tick(TimerId::new(1));
        let third = room.tick(TimerId::new(1));

        // then (期待する結果):
        assert_eq!(first, TickResult::Ticked { time_left: 1 });
        assert_eq!(second, TickResult::Expired);
        assert_eq!(third, TickResult::Stale);
        assert_eq!(room.phase(), GamePhase::Voting);
        assert_eq!(room.timer_id(), None);
    }

    #[test]
    fn test_tick_from_replaced_timer_is_stale() {
        // テスト項目: 置き換えられた古いタイマーの tick は無視される
        // given (前提条件):
        let mut room = create_room_with_players(&["alice", "bob"]);
        start(&mut room, 0);
        room.start_round(
            WordPair::new("sun", "star"),
            0,
            RoundTimer::detached(TimerId::new(2)),
        )
        .unwrap();

        // when (操作):
        let result = room.tick(TimerId::new(1));

        // then (期待する結果):
        assert_eq!(result, TickResult::Stale);
        assert_eq!(room.time_left(), 300);
    }

    #[test]
    fn test_remove_player_prunes_entries_and_abandons_round() {
        // テスト項目: ラウンド中にプレイヤーが抜けると、その記録が消えラウンドは破棄される
        // given (前提条件):
        let mut room = create_room_with_players(&["alice", "bob"]);
        start(&mut room, 0);
        room.record_description(&id("bob"), description("b"))
            .unwrap();

        // when (操作):
        let abandoned = room.remove_player(&id("bob"));

        // then (期待する結果):
        assert_eq!(abandoned, Some(true));
        assert_eq!(room.players().len(), 1);
        assert!(room.descriptions().is_empty());
        assert_eq!(room.phase(), GamePhase::Lobby);
        assert_eq!(room.impostor(), None);
        assert_eq!(room.timer_id(), None);
    }

    #[test]
    fn test_remove_player_in_lobby() {
        // テスト項目: lobby で抜けた場合はラウンド破棄にならない
        // given (前提条件):
        let mut room = create_room_with_players(&["alice", "bob"]);

        // when (操作):
        let removed = room.remove_player(&id("alice"));
        let missing = room.remove_player(&id("alice"));

        // then (期待する結果):
        assert_eq!(removed, Some(false));
        assert_eq!(missing, None);
        assert_eq!(room.players()[0].id, id("bob"));
    }

    #[test]
    fn test_restart_resets_current_player() {
        // テスト項目: restart で lobby に戻り、手番も 0 に戻る
        // given (前提条件):
        let mut room = create_room_with_players(&["alice", "bob"]);
        start(&mut room, 0);
        room.record_description(&id("alice"), description("a"))
            .unwrap();
        assert_eq!(room.current_player(), 1);

        // when (操作):
        room.restart();

        // then (期待する結果):
        assert_eq!(room.phase(), GamePhase::Lobby);
        assert_eq!(room.current_player(), 0);
        assert_eq!(room.current_word(), None);
        assert!(room.descriptions().is_empty());
        assert_eq!(room.timer_id(), None);
    }
}
