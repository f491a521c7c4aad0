//! Guild interactions behind a trait seam.
//!
//! Member lookups and the results-channel visibility sync are the only two
//! things the game needs from Discord, so they live behind [`GuildGateway`]
//! and tests run against an in-memory double.

use std::sync::Arc;

use async_trait::async_trait;
use serenity::all::{
    ChannelId, EditChannel, GuildId, PermissionOverwrite, PermissionOverwriteType, Permissions,
    RoleId, UserId,
};
use serenity::http::Http;

use crate::config::Config;
use crate::error::AppError;

/// Guild member data the game surfaces in rankings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildMemberView {
    pub member_id: String,
    pub display_name: String,
    pub avatar_url: String,
}

#[async_trait]
pub trait GuildGateway: Send + Sync {
    /// Resolves a member of the community guild. `None` when the member has
    /// left or the id is unknown, so callers can skip them.
    async fn member(&self, member_id: &str) -> Result<Option<GuildMemberView>, AppError>;

    /// Rebuilds the results channel permission overwrites so only members
    /// whose attempt is terminal can see today's spoilers.
    async fn sync_results_channel(&self, finished_member_ids: &[String]) -> Result<(), AppError>;
}

/// [`GuildGateway`] backed by the Discord HTTP API.
pub struct DiscordGateway {
    http: Arc<Http>,
    guild_id: GuildId,
    results_channel_id: ChannelId,
    everyone_role_id: RoleId,
    admin_role_id: RoleId,
}

impl DiscordGateway {
    pub fn new(http: Arc<Http>, config: &Config) -> Self {
        Self {
            http,
            guild_id: GuildId::new(config.discord_guild_id),
            results_channel_id: ChannelId::new(config.results_channel_id),
            everyone_role_id: RoleId::new(config.everyone_role_id),
            admin_role_id: RoleId::new(config.admin_role_id),
        }
    }
}

#[async_trait]
impl GuildGateway for DiscordGateway {
    async fn member(&self, member_id: &str) -> Result<Option<GuildMemberView>, AppError> {
        let Ok(user_id) = member_id.parse::<u64>() else {
            return Ok(None);
        };

        match self
            .http
            .get_member(self.guild_id, UserId::new(user_id))
            .await
        {
            Ok(member) => Ok(Some(GuildMemberView {
                member_id: member_id.to_string(),
                display_name: member.display_name().to_string(),
                avatar_url: member.face(),
            })),
            Err(err) => {
                tracing::warn!("Failed to fetch member {} from guild: {}", member_id, err);
                Ok(None)
            }
        }
    }

    async fn sync_results_channel(&self, finished_member_ids: &[String]) -> Result<(), AppError> {
        let mut permissions = vec![
            PermissionOverwrite {
                allow: Permissions::empty(),
                deny: Permissions::VIEW_CHANNEL,
                kind: PermissionOverwriteType::Role(self.everyone_role_id),
            },
            PermissionOverwrite {
                allow: Permissions::empty(),
                deny: Permissions::VIEW_CHANNEL,
                kind: PermissionOverwriteType::Role(self.admin_role_id),
            },
        ];

        for member_id in finished_member_ids {
            let Ok(user_id) = member_id.parse::<u64>() else {
                continue;
            };
            permissions.push(PermissionOverwrite {
                allow: Permissions::VIEW_CHANNEL,
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Member(UserId::new(user_id)),
            });
        }

        self.results_channel_id
            .edit(&*self.http, EditChannel::new().permissions(permissions))
            .await?;
        Ok(())
    }
}
