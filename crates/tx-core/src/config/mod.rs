//! Deep-link configuration domain model

use serde::{Deserialize, Serialize};

/// Configuration shared by the invite link codec and the share flow.
///
/// The app scheme and every registered web host serve the identical invite
/// path grammar, so a link survives the app being installed or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Custom URL scheme registered by the installed app, without `://`.
    pub app_scheme: String,

    /// Public web hosts recognized as invite origins.
    pub web_hosts: Vec<String>,

    /// Origin used when building shareable links.
    pub share_origin: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            app_scheme: "tandaxn".to_string(),
            web_hosts: vec![
                "tandaxn.com".to_string(),
                "www.tandaxn.com".to_string(),
                "app.tandaxn.com".to_string(),
            ],
            share_origin: "https://tandaxn.com".to_string(),
        }
    }
}
