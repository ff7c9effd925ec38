//! Steam app ids known to appear in server info replies.

/// Human-readable title for a game id, if it is a known one.
pub fn game_name(id: u64) -> Option<&'static str> {
    Some(match id {
        200 => "Base Source Shared",
        201 => "Source Engine 64bit (for x86_64/AMD64 CPU/OS, deprecated)",
        202 => "Source Init (VAC)",
        203 => "Source Shared Securom",
        206 => "Base Source Shared Materials",
        207 => "Base Source Shared Models",
        208 => "Base Source Shared Sounds",
        209 => "Source Low Violence",
        212 => "Base Source Engine 2",
        213 => "Half-Life 2: Episode One Shared",
        216 => "Source 2007 Binaries",
        217 => "Multiplayer OB Binaries",
        220 => "Half-Life 2",
        221 => "Half-Life 2 Base Content",
        223 => "Half-Life 2 French",
        224 => "Half-Life 2 Italian",
        225 => "Half-Life 2 German",
        226 => "Half-Life 2 Spanish",
        227 => "Half-Life 2 Simplified Chinese",
        228 => "Half-Life 2 Korean (Teen)",
        229 => "Half-Life 2 Korean (Adult)",
        230 => "Half-Life 2 Traditional Chinese",
        231 => "Half-Life 2 Japanese",
        232 => "Half-Life 2 Russian",
        233 => "Half-Life 2 Thai",
        234 => "Half-Life 2 Portuguese",
        236 => "Half-Life 2 Game Dialog",
        240 => "Counter-Strike: Source",
        241 => "Counter-Strike: Source Base Content",
        242 => "Counter-Strike: Source Shared Content",
        243 => "Counter-Strike: Source French",
        244 => "Counter-Strike: Source Italian",
        245 => "Counter-Strike: Source German",
        246 => "Counter-Strike: Source Spanish",
        247 => "Counter-Strike: Source Simplified Chinese",
        248 => "Counter-Strike: Source Korean (Teen)",
        249 => "Counter-Strike: Source Korean (Adult)",
        250 => "Counter-Strike: Source Traditional Chinese",
        251 => "Counter-Strike: Source Japanese",
        252 => "Counter-Strike: Source Russian",
        253 => "Counter-Strike: Source Thai",
        260 => "Counter-Strike: Source Beta",
        280 => "Half-Life: Source",
        281 => "Half-Life: Source Base Content",
        283 => "Half-Life: Source French",
        284 => "Half-Life: Source Italian",
        285 => "Half-Life: Source German",
        286 => "Half-Life: Source Spanish",
        287 => "Half-Life: Source Simplified Chinese",
        288 => "Half-Life: Source Korean (Teen)",
        289 => "Half-Life: Source Korean (Adult)",
        290 => "Half-Life: Source Traditional Chinese",
        291 => "Half-Life: Source Japanese",
        292 => "Half-Life: Source Russian",
        293 => "Half-Life: Source Thai",
        300 => "Day of Defeat: Source",
        301 => "Day of Defeat: Source Base Content",
        305 => "Source 2007 Shared Materials",
        306 => "Source 2007 Shared Models",
        307 => "Source 2007 Shared Sounds",
        308 => "Episodic 2007 Shared",
        312 => "|all_source_engine_paths|hl2",
        320 => "Half-Life 2: Deathmatch",
        321 => "Half-Life 2: Deathmatch",
        340 => "Half-Life 2: Lost Coast",
        341 => "Half-Life 2: Lost Coast Content",
        342 => "Half-Life 2: Lost Coast French",
        343 => "Half-Life 2: Lost Coast German",
        344 => "Half-Life 2: Lost Coast Italian",
        345 => "Half-Life 2: Lost Coast Korean (Teen)",
        346 => "Half-Life 2: Lost Coast Korean (Adult)",
        347 => "Half-Life 2: Lost Coast Russian",
        348 => "Half-Life 2: Lost Coast Simplified Chinese",
        349 => "Half-Life 2: Lost Coast Spanish",
        350 => "Half-Life 2: Lost Coast Traditional Chinese",
        360 => "Half-Life Deathmatch: Source",
        363 => "Half-Life Deathmatch: Source Client",
        380 => "Half-Life 2: Episode One",
        381 => "Half-Life 2: Episode One Content",
        400 => "Portal",
        401 => "Portal Content",
        405 => "Portal English",
        420 => "Half-Life 2: Episode Two",
        421 => "Half-Life 2: Episode Two Content",
        422 => "Half-Life 2: Episode Two Materials",
        423 => "Half-Life 2: Episode Two Maps",
        428 => "Half-Life 2: Episode Two English",
        440 => "Team Fortress 2",
        441 => "Team Fortress 2 Content",
        442 => "Team Fortress 2 Materials",
        443 => "Team Fortress 2 Client Content",
        500 => "Left 4 Dead",
        501 => "Left 4 Dead binaries",
        502 => "Left 4 Dead base",
        503 => "Left 4 Dead client binary",
        504 => "Left 4 Dead sound",
        550 => "Left 4 Dead 2",
        570 => "Dota 2 Beta",
        571 => "Dota 2 Beta content",
        572 => "Dota 2 Beta client",
        573 => "Dota 2 Beta Win32 content",
        590 => "Left 4 Dead 2 Demo",
        620 => "Portal 2",
        630 => "Alien Swarm",
        640 => "Alien Swarm SDK Launcher",
        730 => "Counter-Strike: Global Offensive",
        731 => "Counter Strike Global Offensive Beta Common Content",
        732 => "Counter Strike Global Offensive Beta Win32 Content",
        870 => "Left 4 Dead 2 Downloadable content",
        1300 => "SiN Episodes",
        1301 => "SiN Episodes Materials",
        1302 => "SiN Episodes Models",
        1303 => "SiN Episodes Sounds",
        1304 => "SiN Episodes Core",
        1305 => "SiN Episodes: Emergence Content",
        1306 => "SiN Episodes: Emergence German",
        1307 => "SiN Episodes: Emergence German Preload",
        1308 => "SiN Episodes Arena",
        1315 => "SiN Episodes: Emergence Russian",
        1316 => "SiN Episodes Unabridged",
        1800 => "Counter-Strike: Global Offensive",
        2100 => "Dark Messiah of Might and Magic",
        2130 => "Dark Messiah Might and Magic Multi-Player",
        2400 => "The Ship: Murder Party",
        2401 => "The Ship",
        2402 => "The Ship Common",
        2405 => "The Ship Single Player Content",
        2406 => "The Ship Tutorial Content",
        2412 => "The Ship Shared",
        2430 => "The Ship Tutorial",
        2450 => "Bloody Good Time",
        2600 => "Vampire The Masquerade - Bloodlines",
        4000 => "Garry's Mod",
        4001 => "Garry's Mod Content",
        4020 => "Garry's Mod Dedicated Server",
        17500 => "Zombie Panic! Source",
        17510 => "Age of Chivalry",
        17520 => "Synergy",
        17530 => "D.I.P.R.I.P.",
        17550 => "Eternal Silence",
        17570 => "Pirates, Vikings, & Knights II",
        17580 => "Dystopia",
        17700 => "Insurgency",
        17710 => "Nuclear Dawn",
        17730 => "Smashball",
        222880 => "Insurgency",
        224260 => "No More Room in Hell",
        238430 => "Contagion",
        _ => return None,
    })
}
