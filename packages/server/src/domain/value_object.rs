//! Value objects
//!
//! クライアントから受け取った文字列は、ここで検証・正規化してから
//! ドメイン層に渡されます。検証は前後の空白のトリムと長さ制限のみです。

use std::fmt;

use uuid::Uuid;

use super::error::ValueObjectError;

/// Room code の最大文字数
pub const ROOM_CODE_MAX_LEN: usize = 8;
/// プレイヤー名の最大文字数
pub const PLAYER_NAME_MAX_LEN: usize = 32;
/// 説明文の最大文字数（クライアントの入力制限と同じ）
pub const DESCRIPTION_MAX_LEN: usize = 200;

fn trimmed(
    value: String,
    field: &'static str,
    max: usize,
) -> Result<String, ValueObjectError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValueObjectError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValueObjectError::TooLong { field, max });
    }
    Ok(value.to_string())
}

/// Connection identifier
///
/// WebSocket 接続ごとにサーバーが採番する ID。プレイヤーの ID も兼ねる。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(String);

impl ConnectionId {
    /// 新しい ConnectionId を UUID v4 で採番
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// 既存の文字列から ConnectionId を作成（投票先の指定などで使用）
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ValueObjectError::Empty {
                field: "connection id",
            });
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ConnectionId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Room code
///
/// 人が入力する短いコード（例: "1234"）。空白を含むことはできない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomCode(String);

impl RoomCode {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        let value = trimmed(value, "room code", ROOM_CODE_MAX_LEN)?;
        if value.chars().any(char::is_whitespace) {
            return Err(ValueObjectError::RoomCodeWhitespace);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomCode {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name chosen by the client (not unique)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        trimmed(value, "player name", PLAYER_NAME_MAX_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Description text submitted during the describing phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        trimmed(value, "description", DESCRIPTION_MAX_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Description {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Unix timestamp (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}
