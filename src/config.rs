use crate::store::UpdateFrequency;

const DEFAULT_ENDPOINT_URL: &str = "http://192.168.12.88:3000/api/workout";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub endpoint_url: String,
    pub device_timezone: Option<String>,
    pub background_frequency: UpdateFrequency,
    pub health_data_available: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        let endpoint_url = lookup("WORKOUT_ENDPOINT_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string());

        let device_timezone = lookup("DEVICE_TIMEZONE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let background_frequency = lookup("BACKGROUND_DELIVERY_FREQUENCY")
            .and_then(|s| UpdateFrequency::parse(&s))
            .unwrap_or(UpdateFrequency::Immediate);

        let health_data_available = lookup("HEALTH_DATA_AVAILABLE")
            .and_then(|s| parse_bool(&s))
            .unwrap_or(true);

        Self {
            port,
            endpoint_url,
            device_timezone,
            background_frequency,
            health_data_available,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
