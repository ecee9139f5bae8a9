//! League-code constants and the code-to-region mapping used when building
//! Cargo filters against the Tournaments table.

/// A major league and the Region string its tournaments carry upstream.
#[derive(Debug, Clone, Copy)]
pub struct League {
    pub code: &'static str,
    pub name: &'static str,
    pub region: &'static str,
}

/// The six major leagues shown in the frontend dropdown, with names per the
/// wiki's Leagues table.
pub const MAJOR_LEAGUES: [League; 6] = [
    League {
        code: "LCS",
        name: "League of Legends Championship Series",
        region: "North America",
    },
    League {
        code: "LTA",
        name: "League of Legends Championship of The Americas",
        region: "Americas",
    },
    League {
        code: "LEC",
        name: "LoL EMEA Championship",
        region: "Europe",
    },
    League {
        code: "LCK",
        name: "LoL Champions Korea",
        region: "Korea",
    },
    League {
        code: "LPL",
        name: "Tencent LoL Pro League",
        region: "China",
    },
    League {
        code: "LCP",
        name: "League of Legends Championship Pacific",
        region: "Asia Pacific",
    },
];

/// Maps a league code to the region name the Tournaments table uses.
/// Unknown codes pass through verbatim.
pub fn region_name(code: &str) -> &str {
    MAJOR_LEAGUES
        .iter()
        .find(|league| league.code == code)
        .map(|league| league.region)
        .unwrap_or(code)
}

/// Cargo filter fragment matching tournaments for a league code.
///
/// LEC data is tagged "Europe" in older seasons and "EMEA" in newer ones,
/// so that code matches either spelling.
pub fn region_filter(code: &str) -> String {
    if code == "LEC" {
        "(Region = 'Europe' OR Region = 'EMEA')".to_string()
    } else {
        format!("Region = '{}'", region_name(code))
    }
}
