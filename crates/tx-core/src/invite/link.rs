//! Invite link encode/decode.
//!
//! The app scheme and the public web hosts share one path grammar:
//!
//! ```text
//! <origin>/invite/circle/<id>?name=&emoji=&inviter=&inviterName=[&contribution=][&frequency=][&members=]
//! <origin>/invite/community/<id>?name=&icon=&inviter=&inviterName=[&members=]
//! ```
//!
//! Decoding is deliberately forgiving: anything that is not an invite path
//! on a recognized origin is `None` (the router carries on), and a numeric
//! parameter that fails to parse decodes as an absent field, never a fault.

use std::collections::HashMap;

use url::Url;

use super::{CircleInvite, CommunityInvite, InviteData};
use crate::config::LinkConfig;
use crate::ids::{CircleId, CommunityId, UserId};

/// Encodes invites into shareable links and decodes incoming deep links.
#[derive(Debug, Clone, Default)]
pub struct InviteLinkCodec {
    config: LinkConfig,
}

impl InviteLinkCodec {
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }

    /// Build a shareable web link for the invite.
    ///
    /// Absent optional fields are omitted from the query string entirely,
    /// never emitted as empty values.
    pub fn encode(&self, invite: &InviteData) -> String {
        let origin = self.config.share_origin.trim_end_matches('/');
        match invite {
            InviteData::Circle(c) => {
                let mut query = url::form_urlencoded::Serializer::new(String::new());
                query
                    .append_pair("name", &c.name)
                    .append_pair("emoji", &c.emoji)
                    .append_pair("inviter", c.invited_by.as_str())
                    .append_pair("inviterName", &c.inviter_name);
                if let Some(amount) = c.contribution_amount {
                    query.append_pair("contribution", &fmt_amount(amount));
                }
                if let Some(frequency) = &c.frequency {
                    query.append_pair("frequency", frequency);
                }
                if let Some(members) = c.member_count {
                    query.append_pair("members", &members.to_string());
                }
                format!("{}/invite/circle/{}?{}", origin, c.id, query.finish())
            }
            InviteData::Community(c) => {
                let mut query = url::form_urlencoded::Serializer::new(String::new());
                query
                    .append_pair("name", &c.name)
                    .append_pair("icon", &c.icon)
                    .append_pair("inviter", c.invited_by.as_str())
                    .append_pair("inviterName", &c.inviter_name);
                if let Some(members) = c.member_count {
                    query.append_pair("members", &members.to_string());
                }
                format!("{}/invite/community/{}?{}", origin, c.id, query.finish())
            }
        }
    }

    /// Decode a URL handed to the app by the OS or the web router.
    ///
    /// Returns `None` for anything that is not an invite link; callers
    /// treat that as "not for me" and continue normal routing.
    pub fn decode(&self, raw: &str) -> Option<InviteData> {
        let url = Url::parse(raw).ok()?;
        let segments = self.invite_segments(&url)?;
        if segments.len() != 3 || segments[0] != "invite" || segments[2].is_empty() {
            return None;
        }

        let id = segments[2].as_str();
        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();

        match segments[1].as_str() {
            "circle" => Some(InviteData::Circle(CircleInvite {
                id: CircleId::new(id),
                name: text_param(&params, "name"),
                emoji: text_param(&params, "emoji"),
                invited_by: UserId::new(text_param(&params, "inviter")),
                inviter_name: text_param(&params, "inviterName"),
                contribution_amount: numeric_param(&params, "contribution"),
                frequency: optional_param(&params, "frequency"),
                member_count: numeric_param(&params, "members"),
            })),
            "community" => Some(InviteData::Community(CommunityInvite {
                id: CommunityId::new(id),
                name: text_param(&params, "name"),
                icon: text_param(&params, "icon"),
                invited_by: UserId::new(text_param(&params, "inviter")),
                inviter_name: text_param(&params, "inviterName"),
                member_count: numeric_param(&params, "members"),
            })),
            _ => None,
        }
    }

    /// Path segments of `url` when it is rooted at a recognized invite
    /// origin, `None` otherwise.
    ///
    /// For the custom scheme (`tandaxn://invite/circle/x`) the URL parser
    /// reads the first segment as the authority, so it is spliced back in
    /// front of the path.
    fn invite_segments(&self, url: &Url) -> Option<Vec<String>> {
        if url.scheme() == self.config.app_scheme {
            let mut segments = vec![url.host_str()?.to_string()];
            segments.extend(
                url.path_segments()?
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            );
            Some(segments)
        } else if matches!(url.scheme(), "http" | "https") {
            let host = url.host_str()?;
            if !self
                .config
                .web_hosts
                .iter()
                .any(|h| h.eq_ignore_ascii_case(host))
            {
                return None;
            }
            Some(
                url.path_segments()?
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect(),
            )
        } else {
            None
        }
    }
}

/// Required string parameter; decodes as empty when missing rather than
/// failing the whole link.
fn text_param(params: &HashMap<String, String>, key: &str) -> String {
    params.get(key).cloned().unwrap_or_default()
}

/// Optional string parameter; empty values decode as absent.
fn optional_param(params: &HashMap<String, String>, key: &str) -> Option<String> {
    params.get(key).filter(|v| !v.is_empty()).cloned()
}

/// Optional numeric parameter; a missing, empty or non-numeric value decodes
/// as absent.
fn numeric_param<T: std::str::FromStr>(params: &HashMap<String, String>, key: &str) -> Option<T> {
    params
        .get(key)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
}

/// Whole amounts print without a trailing `.0` so encoded links match what
/// the backend and the web client emit.
fn fmt_amount(amount: f64) -> String {
    format!("{}", amount)
}
