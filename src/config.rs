use std::env::VarError;
use std::time::Duration;

use anyhow::anyhow;

pub const VARIABLES: &[&str] = &[
    "LISTEN_PORT",
    "MAP_SERVICE_URL",
    "SCORER_COMMAND",
    "REQUEST_TIMEOUT_SECS",
    "SCORER_TIMEOUT_SECS",
];

const DEFAULT_LISTEN_PORT: u16 = 8080;
const DEFAULT_MAP_SERVICE_URL: &str = "https://www.openstreetmap.org/api/0.6/map";
const DEFAULT_SCORER_COMMAND: &str = "python main.py";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SCORER_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_port: u16,
    pub map_service_url: String,
    /// Program followed by its leading arguments. The two images are appended.
    pub scorer_command: Vec<String>,
    pub request_timeout: Duration,
    pub scorer_timeout: Duration,
}

impl Config {
    pub fn env() -> anyhow::Result<Self> {
        Self::from_lookup(|name: &str| std::env::var(name))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Result<String, VarError>) -> anyhow::Result<Self> {
        let var = |name: &str| -> anyhow::Result<Option<String>> {
            match lookup(name) {
                Ok(value) => Ok(Some(value)),
                Err(VarError::NotPresent) => Ok(None),
                Err(VarError::NotUnicode(_)) => Err(anyhow!("{name} value is not valid unicode")),
            }
        };

        let listen_port = match var("LISTEN_PORT")? {
            Some(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow!("LISTEN_PORT={v} is not a valid port: {e}"))?,
            None => DEFAULT_LISTEN_PORT,
        };

        let map_service_url =
            var("MAP_SERVICE_URL")?.unwrap_or_else(|| DEFAULT_MAP_SERVICE_URL.to_string());

        let scorer_command: Vec<String> = var("SCORER_COMMAND")?
            .unwrap_or_else(|| DEFAULT_SCORER_COMMAND.to_string())
            .split_whitespace()
            .map(str::to_string)
            .collect();

        if scorer_command.is_empty() {
            return Err(anyhow!("SCORER_COMMAND is empty"));
        }

        let request_timeout = seconds(var("REQUEST_TIMEOUT_SECS")?, "REQUEST_TIMEOUT_SECS")?
            .unwrap_or(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));

        let scorer_timeout = seconds(var("SCORER_TIMEOUT_SECS")?, "SCORER_TIMEOUT_SECS")?
            .unwrap_or(Duration::from_secs(DEFAULT_SCORER_TIMEOUT_SECS));

        Ok(Self {
            listen_port,
            map_service_url,
            scorer_command,
            request_timeout,
            scorer_timeout,
        })
    }

    pub fn log(&self) {
        log::info!("listen port: {}", self.listen_port);
        log::info!("map service: {}", self.map_service_url);
        log::info!("scorer command: {}", self.scorer_command.join(" "));
        log::info!(
            "timeouts: requests {}s, scorer {}s",
            self.request_timeout.as_secs(),
            self.scorer_timeout.as_secs()
        );
    }
}

fn seconds(value: Option<String>, name: &str) -> anyhow::Result<Option<Duration>> {
    value
        .map(|v| {
            v.parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| anyhow!("{name}={v} is not a number of seconds: {e}"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |name: &str| vars.get(name).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.listen_port, 8080);
        assert_eq!(config.map_service_url, DEFAULT_MAP_SERVICE_URL);
        assert_eq!(config.scorer_command, vec!["python", "main.py"]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.scorer_timeout, Duration::from_secs(60));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("LISTEN_PORT", "9000"),
            ("MAP_SERVICE_URL", "http://localhost:1234/map"),
            ("SCORER_COMMAND", "  python3   compare.py --fast "),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("SCORER_TIMEOUT_SECS", "7"),
        ]))
        .unwrap();

        assert_eq!(config.listen_port, 9000);
        assert_eq!(config.map_service_url, "http://localhost:1234/map");
        assert_eq!(config.scorer_command, vec!["python3", "compare.py", "--fast"]);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.scorer_timeout, Duration::from_secs(7));
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Config::from_lookup(lookup(&[("LISTEN_PORT", "eighty")])).is_err());
        assert!(Config::from_lookup(lookup(&[("LISTEN_PORT", "70000")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SCORER_COMMAND", "   ")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SCORER_TIMEOUT_SECS", "-1")])).is_err());
    }
}
