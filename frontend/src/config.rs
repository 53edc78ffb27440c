/// Default API prefix. During development Trunk proxies it to the backend.
const DEFAULT_API_BASE: &str = "/api";

const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://i.ytimg.com/vi/8locgr34Pls/hq720.jpg?sqp=-oaymwEhCK4FEIIDSFryq4qpAxMIARUAAAAAGAElAADIQj0AgKJD&rs=AOn4CLBPGjlvyXDFW8c2B7hkE3pBpeVTow";

/// Local storage key holding the signed-in client.
pub const USER_STORAGE_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    pub api_base: String,
    pub placeholder_image: String,
}

impl FrontendConfig {
    /// Reads overrides baked in at compile time
    /// (`BARBERSHOP_API_BASE`, `BARBERSHOP_PLACEHOLDER_IMAGE`).
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("BARBERSHOP_API_BASE"),
            option_env!("BARBERSHOP_PLACEHOLDER_IMAGE"),
        )
    }

    fn from_parts(api_base: Option<&str>, placeholder_image: Option<&str>) -> Self {
        let api_base = api_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base,
            placeholder_image: placeholder_image
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(DEFAULT_PLACEHOLDER_IMAGE)
                .to_string(),
        }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_parts(None, None)
    }
}
