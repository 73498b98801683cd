use votacao::config::ApiConfig;
use votacao::pautas::Api;

/// Create the API client from the build-time configuration.
pub fn create() -> Api {
    Api::from_config(&ApiConfig::from_env())
}
