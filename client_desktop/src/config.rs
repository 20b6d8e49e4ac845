use game_core::Config;
use tracing::warn;

/// Environment variable holding a fixed RNG seed
pub const SEED_VAR: &str = "PONG_SEED";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub seed: u64,
    pub game: Config,
}

impl AppConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            title: "Pong".to_string(),
            seed,
            game: Config::new(),
        }
    }

    /// Seed from `PONG_SEED`, or a random one
    pub fn from_env() -> Self {
        let seed = parse_seed(std::env::var(SEED_VAR).ok().as_deref())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }
}

/// A malformed seed is logged and ignored
fn parse_seed(raw: Option<&str>) -> Option<u64> {
    let raw = raw?.trim();
    match raw.parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(err) => {
            warn!(value = raw, error = %err, "invalid_seed_ignored");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(Some("42")), Some(42));
        assert_eq!(parse_seed(Some(" 7 ")), Some(7), "Whitespace is tolerated");
        assert_eq!(parse_seed(Some("abc")), None, "Garbage falls back to random");
        assert_eq!(parse_seed(Some("-1")), None);
        assert_eq!(parse_seed(None), None);
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::new(9);
        assert_eq!(config.title, "Pong");
        assert_eq!(config.seed, 9);
        assert_eq!(config.game.tick_rate, 30);
    }
}
