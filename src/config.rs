use std::env;

/// Deployment tunables. Algorithm constants (scoring weights, rate bases)
/// live next to the code that uses them; only values an operator would
/// reasonably override end up here.
#[derive(Debug, Clone)]
pub struct Config {
    /// Distance assumed when the destination region is not in the table.
    pub default_distance_miles: f64,
    /// Location stamped on the seed tracking event of a new shipment.
    pub origin_location: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Config {
            default_distance_miles: env::var("DEFAULT_DISTANCE_MILES")
                .unwrap_or_else(|_| "800".to_string())
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid DEFAULT_DISTANCE_MILES value: {}", e))?,

            origin_location: env::var("ORIGIN_LOCATION")
                .unwrap_or_else(|_| "Fulfillment Center".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_distance_miles: 800.0,
            origin_location: "Fulfillment Center".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_env_fallbacks() {
        let config = Config::default();
        assert_eq!(config.default_distance_miles, 800.0);
        assert_eq!(config.origin_location, "Fulfillment Center");
    }
}
