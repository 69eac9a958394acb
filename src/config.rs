use log::Level;

/// Web3Forms relay that forwards contact submissions by email.
pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

const PLACEHOLDER_ACCESS_KEY: &str = "YOUR_WEB3FORMS_ACCESS_KEY";

/// Access key baked in at build time (`WEB3FORMS_ACCESS_KEY=... trunk build`).
pub fn access_key() -> &'static str {
    option_env!("WEB3FORMS_ACCESS_KEY").unwrap_or(PLACEHOLDER_ACCESS_KEY)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose scroll/observer tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
