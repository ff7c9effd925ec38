use super::{A2SResponse, QueryKind};
use crate::{
    errors::{ProtocolError, Result},
    models::{PlayerList, PlayerRecord},
    util::FieldCursor,
};

fn decode_player_record(cur: &mut FieldCursor<'_>) -> Result<PlayerRecord> {
    let index = cur.read_i8()?;
    let name = cur.read_cstring()?;
    let score = cur.read_i32()?;
    let connected_duration = cur.read_f32()?;

    Ok(PlayerRecord {
        index,
        name,
        score,
        connected_duration,
    })
}

/// Decodes an A2S_PLAYER reply starting right after its header byte.
///
/// Records keep the order the server sent them in. A reply whose record count
/// differs from the declared one is rejected as a whole.
pub fn decode_player_list(cur: &mut FieldCursor<'_>) -> Result<PlayerList> {
    let count = cur.read_i16()?;
    if count < 0 {
        return Err(ProtocolError::InvalidPlayerCount { count });
    }

    let declared = count as usize;
    let mut players = Vec::with_capacity(declared);
    for _ in 0..declared {
        let decoded = players.len();
        let record = decode_player_record(cur).map_err(|e| match e {
            ProtocolError::BufferUnderrun { offset, .. }
            | ProtocolError::UnterminatedString { offset } => ProtocolError::TruncatedPlayerList {
                declared,
                decoded,
                offset,
            },
            other => other,
        })?;
        players.push(record);
    }

    if cur.remaining() > 0 {
        let offset = cur.position();
        let mut rest = cur.clone();
        let mut decoded = declared;
        while rest.remaining() > 0 && decode_player_record(&mut rest).is_ok() {
            decoded += 1;
        }

        return Err(ProtocolError::PlayerCountMismatch {
            declared,
            decoded,
            offset,
        });
    }

    Ok(PlayerList { players })
}

impl A2SResponse for PlayerList {
    const KIND: QueryKind = QueryKind::Players;

    fn decode(cur: &mut FieldCursor<'_>) -> Result<Self> {
        decode_player_list(cur)
    }
}
