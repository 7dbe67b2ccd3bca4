//! Participant results of a single challenge, as delivered by the highscores feed.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Country sentinel used when the feed does not say where a player is from.
pub const UNKNOWN_COUNTRY: &str = "ZZ";

pub const UNKNOWN_PLAYER: &str = "Unknown Player";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub nickname: String,
    pub country_code: String,
    pub total_points: u32,
}

impl Participant {
    pub fn new(nickname: impl Into<String>, country_code: impl Into<String>, total_points: u32) -> Self {
        Self {
            nickname: nickname.into(),
            country_code: country_code.into(),
            total_points,
        }
    }
}

/// Participants of one event, best first. Feed order is kept as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventResult {
    pub participants: Vec<Participant>,
}

impl EventResult {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    /// Parses a highscores payload. Entries with missing fields get defaults
    /// instead of failing the whole event.
    pub fn from_highscores_json(payload: &str) -> Result<Self, serde_json::Error> {
        let highscores: HighscoresDto = serde_json::from_str(payload)?;
        Ok(highscores.into())
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
struct HighscoresDto {
    #[serde(default)]
    items: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct HighscoreItemDto {
    #[serde(default, deserialize_with = "lenient")]
    game: Option<GameDto>,
}

#[derive(Debug, Default, Deserialize)]
struct GameDto {
    #[serde(default, deserialize_with = "lenient")]
    player: Option<PlayerDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerDto {
    #[serde(default, deserialize_with = "lenient")]
    nick: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    country_code: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    total_score: Option<TotalScoreDto>,
}

#[derive(Debug, Default, Deserialize)]
struct TotalScoreDto {
    #[serde(default, deserialize_with = "lenient_amount")]
    amount: u32,
}

/// Reads any JSON value and keeps it only if it has the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

/// The feed sends amounts either as numbers or as numeric strings.
fn lenient_amount<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Value::deserialize(deserializer)? {
        Value::Number(n) => match n.as_u64() {
            Some(n) => u32::try_from(n).unwrap_or(u32::MAX),
            None => n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map_or(0, |f| f as u32),
        },
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    };

    Ok(amount)
}

impl From<PlayerDto> for Participant {
    fn from(player: PlayerDto) -> Self {
        Participant::new(
            player
                .nick
                .filter(|nick| !nick.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_PLAYER.to_string()),
            player
                .country_code
                .filter(|code| !code.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_COUNTRY.to_string()),
            player.total_score.map_or(0, |score| score.amount),
        )
    }
}

impl From<HighscoresDto> for EventResult {
    fn from(dto: HighscoresDto) -> Self {
        let participants = dto
            .items
            .into_iter()
            .map(|item| {
                // An entry of the wrong shape still takes its place with defaults.
                let item = HighscoreItemDto::deserialize(item).unwrap_or_default();
                Participant::from(item.game.and_then(|game| game.player).unwrap_or_default())
            })
            .collect();

        EventResult::new(participants)
    }
}
