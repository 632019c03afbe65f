//! Game configuration: defaults, an optional JSON file, then command line
//! overrides, in that order of precedence.

use crate::error::{CliError, Result};
use pocket_civ_core::{GameSettings, Year};
use std::path::Path;
use tracing::debug;

/// Settings given directly on the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub players: Option<u8>,
    pub humans: Option<u8>,
    pub end_year: Option<Year>,
}

impl Overrides {
    /// Apply every override that was given.
    pub fn apply(&self, settings: &mut GameSettings) {
        if let Some(players) = self.players {
            settings.player_count = players;
        }
        if let Some(humans) = self.humans {
            settings.human_players = humans;
        }
        if let Some(end) = self.end_year {
            settings.end_year = end;
        }
    }
}

/// Load settings from a JSON file. Missing fields keep their defaults.
pub fn load_settings(path: &Path) -> Result<GameSettings> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = serde_json::from_str(&text).map_err(|source| CliError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Resolve the final settings from an optional file and overrides.
pub fn resolve_settings(path: Option<&Path>, overrides: &Overrides) -> Result<GameSettings> {
    let mut settings = match path {
        Some(path) => load_settings(path)?,
        None => GameSettings::default(),
    };
    overrides.apply(&mut settings);
    Ok(settings)
}

/// Parse a year such as `2050`, `2050AD`, `500 BC` or `-500`.
pub fn parse_year(text: &str) -> std::result::Result<Year, String> {
    let upper = text.trim().to_ascii_uppercase();
    let (digits, bc) = if let Some(rest) = upper.strip_suffix("BC") {
        (rest.trim(), true)
    } else if let Some(rest) = upper.strip_suffix("AD") {
        (rest.trim(), false)
    } else {
        (upper.as_str(), false)
    };
    let value: i32 = digits
        .parse()
        .map_err(|_| format!("'{}' is not a year (try 2050, 2050AD or 500BC)", text))?;
    match (bc, value) {
        (true, v) if v > 0 => Ok(Year::bc(v)),
        (true, _) => Err(format!("'{}' is not a valid BC year", text)),
        (false, v) => Ok(Year::ad(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2050"), Ok(Year::ad(2050)));
        assert_eq!(parse_year("1500ad"), Ok(Year::ad(1500)));
        assert_eq!(parse_year("500 BC"), Ok(Year::bc(500)));
        assert_eq!(parse_year("-500"), Ok(Year::bc(500)));
        assert!(parse_year("0BC").is_err());
        assert!(parse_year("soon").is_err());
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = resolve_settings(None, &Overrides::default()).unwrap();
        assert_eq!(settings, GameSettings::default());
    }

    #[test]
    fn test_file_then_overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "player_count": 6, "map_width": 30, "research_chance": 50 }}"#).unwrap();

        let overrides = Overrides {
            players: Some(3),
            humans: Some(0),
            end_year: Some(Year::bc(1000)),
        };
        let settings = resolve_settings(Some(file.path()), &overrides).unwrap();
        assert_eq!(settings.player_count, 3);
        assert_eq!(settings.human_players, 0);
        assert_eq!(settings.map_width, 30);
        assert_eq!(settings.map_height, 15);
        assert_eq!(settings.research_chance, 50);
        assert_eq!(settings.end_year, Year::bc(1000));
    }

    #[test]
    fn test_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            load_settings(file.path()),
            Err(CliError::ConfigParse { .. })
        ));
        assert!(matches!(
            load_settings(Path::new("/nonexistent/pocket-civ.json")),
            Err(CliError::ConfigRead { .. })
        ));
    }
}
