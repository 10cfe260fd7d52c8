//! Build-time client configuration.
//!
//! Identity pool identifiers and the API base URL are baked in at compile
//! time from the build environment (`COGNITO_USER_POOL_ID`,
//! `COGNITO_CLIENT_ID`, `API_URL`). Missing identity values are not fatal
//! here; the Cognito adapter reports them when an operation is attempted.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub user_pool_id: String,
    pub client_id: String,
    /// API origin without trailing slash; empty means same origin.
    pub api_url: String,
}

impl ClientConfig {
    /// Read configuration captured from the build environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("COGNITO_USER_POOL_ID"),
            option_env!("COGNITO_CLIENT_ID"),
            option_env!("API_URL"),
        )
    }

    fn from_parts(user_pool_id: Option<&str>, client_id: Option<&str>, api_url: Option<&str>) -> Self {
        Self {
            user_pool_id: user_pool_id.unwrap_or_default().trim().to_owned(),
            client_id: client_id.unwrap_or_default().trim().to_owned(),
            api_url: api_url
                .unwrap_or_default()
                .trim()
                .trim_end_matches('/')
                .to_owned(),
        }
    }

    /// AWS region encoded in the user pool id (`us-east-1_AbC` → `us-east-1`).
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.user_pool_id
            .split_once('_')
            .map(|(region, _)| region)
            .filter(|region| !region.is_empty())
    }
}
