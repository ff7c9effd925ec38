use super::{A2SResponse, QueryKind};
use crate::{
    errors::Result,
    models::{
        Environment, ExtraData, ServerInfo, ServerType, ShipExtension, ShipGameMode, SourceTv,
    },
    util::FieldCursor,
};

use {num_traits::FromPrimitive, std::ops::RangeInclusive};

pub const EDF_PORT: u8 = 0x80;
pub const EDF_STEAM_ID: u8 = 0x10;
pub const EDF_SOURCE_TV: u8 = 0x40;
pub const EDF_KEYWORDS: u8 = 0x20;
pub const EDF_GAME_ID: u8 = 0x01;

/// Game ids of The Ship, whose info replies carry an extra block.
pub const THE_SHIP_GAME_IDS: RangeInclusive<i16> = 2400..=2405;

pub fn server_game_is_the_ship(game_id: i16) -> bool {
    THE_SHIP_GAME_IDS.contains(&game_id)
}

/// Mode, map and duration. All three are single bytes on the wire.
pub fn decode_ship_extension(cur: &mut FieldCursor<'_>) -> Result<ShipExtension> {
    let game_mode = ShipGameMode::from_u8(cur.read_u8()?).unwrap_or(ShipGameMode::Unknown);
    let map_code = cur.read_u8()?;
    let duration = cur.read_u8()?;

    Ok(ShipExtension {
        game_mode,
        map_code,
        duration,
    })
}

/// Decodes the flag-gated trailer. Each present field shifts the position of
/// the ones after it, so the order of the checks below is the wire order.
/// Servers predating the trailer end right after the version string.
pub fn decode_extra_data(cur: &mut FieldCursor<'_>) -> Result<ExtraData> {
    let mut extra = ExtraData::default();
    if cur.remaining() == 0 {
        return Ok(extra);
    }

    let flags = cur.read_u8()?;

    if flags & EDF_PORT != 0 {
        extra.port = Some(cur.read_u16()?);
    }
    if flags & EDF_STEAM_ID != 0 {
        extra.server_steam_id = Some(cur.read_u64()?);
    }
    if flags & EDF_SOURCE_TV != 0 {
        let port = cur.read_u16()?;
        let name = cur.read_cstring()?;
        extra.source_tv = Some(SourceTv { port, name });
    }
    if flags & EDF_KEYWORDS != 0 {
        extra.keywords = Some(cur.read_cstring()?);
    }
    if flags & EDF_GAME_ID != 0 {
        extra.game_id_64 = Some(cur.read_u64()?);
    }

    Ok(extra)
}

/// Decodes an A2S_INFO reply starting right after its header byte.
pub fn decode_server_info(cur: &mut FieldCursor<'_>) -> Result<ServerInfo> {
    let server_name = cur.read_cstring()?;
    let map_name = cur.read_cstring()?;
    let folder_name = cur.read_cstring()?;
    let game_name = cur.read_cstring()?;

    let game_id = cur.read_i16()?;
    let current_players = cur.read_u8()?;
    let max_players = cur.read_u8()?;
    let bot_count = cur.read_u8()?;
    let server_type = ServerType::from(cur.read_u8()?);
    let environment = Environment::from(cur.read_u8()?);
    let is_private = cur.read_u8()? != 0;
    let vac_secured = cur.read_u8()? == 1;

    let ship_extension = if server_game_is_the_ship(game_id) {
        Some(decode_ship_extension(cur)?)
    } else {
        None
    };

    let version_string = cur.read_cstring()?;
    let extra = decode_extra_data(cur)?;

    Ok(ServerInfo {
        server_name,
        map_name,
        folder_name,
        game_name,
        game_id,
        current_players,
        max_players,
        bot_count,
        server_type,
        environment,
        is_private,
        vac_secured,
        ship_extension,
        version_string,
        extra,
    })
}

impl A2SResponse for ServerInfo {
    const KIND: QueryKind = QueryKind::Info;

    fn decode(cur: &mut FieldCursor<'_>) -> Result<Self> {
        decode_server_info(cur)
    }
}
