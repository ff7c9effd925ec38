use crate::catalog;

use {
    anyhow::Context,
    derive_more::{Display, From},
    enum_primitive_derive::Primitive,
    serde::{Deserialize, Serialize},
    std::{fs, net::SocketAddr, path::Path, time::Duration},
};

pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_CHALLENGE_LOOP_LIMIT: usize = 5;
pub const DEFAULT_MAX_PACKET_SIZE: usize = 4096;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringAddr {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, From)]
pub enum Host {
    A(SocketAddr),
    S(StringAddr),
}

impl<S> From<(S, u16)> for Host
where
    S: ToString,
{
    fn from((host, port): (S, u16)) -> Self {
        Host::S(StringAddr {
            host: host.to_string(),
            port,
        })
    }
}

/// Tunables for a single query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// How long to wait for each reply datagram.
    pub timeout_ms: u64,
    /// Number of challenge replies answered before giving up.
    pub challenge_loop_limit: usize,
    /// Largest datagram accepted from the server.
    pub max_packet_size: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            challenge_loop_limit: DEFAULT_CHALLENGE_LOOP_LIMIT,
            max_packet_size: DEFAULT_MAX_PACKET_SIZE,
        }
    }
}

impl QueryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum ServerType {
    #[display(fmt = "Dedicated")]
    Dedicated,
    #[display(fmt = "Non-dedicated")]
    NonDedicated,
    #[display(fmt = "SourceTV")]
    SourceTv,
    #[display(fmt = "Unknown ({:#04x})", _0)]
    Unknown(u8),
}

impl From<u8> for ServerType {
    fn from(code: u8) -> Self {
        match code {
            b'd' => ServerType::Dedicated,
            b'l' => ServerType::NonDedicated,
            b'p' => ServerType::SourceTv,
            other => ServerType::Unknown(other),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Environment {
    #[display(fmt = "Linux")]
    Linux,
    #[display(fmt = "Windows")]
    Windows,
    #[display(fmt = "Mac (deprecated)")]
    MacDeprecated,
    #[display(fmt = "Mac")]
    Mac,
    #[display(fmt = "Unknown ({:#04x})", _0)]
    Unknown(u8),
}

impl From<u8> for Environment {
    fn from(code: u8) -> Self {
        match code {
            b'l' => Environment::Linux,
            b'w' => Environment::Windows,
            b'm' => Environment::MacDeprecated,
            b'o' => Environment::Mac,
            other => Environment::Unknown(other),
        }
    }
}

/// Game mode reported by The Ship servers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Primitive, Display, Serialize, Deserialize)]
pub enum ShipGameMode {
    #[display(fmt = "Hunt")]
    Hunt = 0,
    #[display(fmt = "Elimination")]
    Elimination = 1,
    #[display(fmt = "Duel")]
    Duel = 2,
    #[display(fmt = "Deathmatch")]
    Deathmatch = 3,
    #[display(fmt = "VIP Team")]
    VipTeam = 4,
    #[display(fmt = "Team Elimination")]
    TeamElimination = 5,
    #[display(fmt = "Unknown")]
    Unknown = 255,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipExtension {
    pub game_mode: ShipGameMode,
    pub map_code: u8,
    /// Round duration in seconds, sent as a single byte.
    pub duration: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceTv {
    pub port: u16,
    pub name: String,
}

/// Optional trailer following the version string. Each field is gated by one
/// bit of the extra data flag byte.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_steam_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_tv: Option<SourceTv>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id_64: Option<u64>,
}

impl ExtraData {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub server_name: String,
    pub map_name: String,
    pub folder_name: String,
    pub game_name: String,
    /// 16-bit game id from the fixed block. See [`ServerInfo::game_id`].
    pub game_id: i16,
    pub current_players: u8,
    pub max_players: u8,
    pub bot_count: u8,
    pub server_type: ServerType,
    pub environment: Environment,
    pub is_private: bool,
    pub vac_secured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_extension: Option<ShipExtension>,
    pub version_string: String,
    #[serde(default)]
    pub extra: ExtraData,
}

impl ServerInfo {
    /// Authoritative game id: the 64-bit trailer value when the server sent
    /// one, otherwise the 16-bit field read as unsigned.
    pub fn game_id(&self) -> u64 {
        match self.extra.game_id_64 {
            Some(id) => id,
            None => u64::from(self.game_id as u16),
        }
    }

    pub fn game_title(&self) -> Option<&'static str> {
        catalog::game_name(self.game_id())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Slot ordinal. Not a stable identity and not necessarily unique.
    pub index: i8,
    pub name: String,
    pub score: i32,
    /// Seconds the player has been connected.
    pub connected_duration: f32,
}

impl PlayerRecord {
    pub fn connected_time(&self) -> chrono::Duration {
        let millis = f64::from(self.connected_duration.max(0.0)) * 1000.0;
        chrono::Duration::milliseconds(millis.round() as i64)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerList {
    pub players: Vec<PlayerRecord>,
}

impl PlayerList {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlayerRecord> {
        self.players.iter()
    }
}
