use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::service::assets::AssetPaths;
use crate::service::discord::{GuildGateway, GuildMemberView};
use crate::service::game::GameService;

mod game;

pub(crate) const BANNED_MEMBER: &str = "banned_member";
pub(crate) const SITE_URL: &str = "https://example.test";

/// Gateway double that knows no members and accepts every sync.
pub(crate) struct NullGateway;

#[async_trait]
impl GuildGateway for NullGateway {
    async fn member(&self, _member_id: &str) -> Result<Option<GuildMemberView>, AppError> {
        Ok(None)
    }

    async fn sync_results_channel(&self, _finished: &[String]) -> Result<(), AppError> {
        Ok(())
    }
}

/// Gateway double resolving every id to a member named after it, except the
/// ids listed as missing.
pub(crate) struct EchoGateway {
    pub missing: Vec<String>,
}

impl EchoGateway {
    pub fn new() -> Self {
        Self { missing: Vec::new() }
    }
}

#[async_trait]
impl GuildGateway for EchoGateway {
    async fn member(&self, member_id: &str) -> Result<Option<GuildMemberView>, AppError> {
        if self.missing.iter().any(|missing| missing == member_id) {
            return Ok(None);
        }
        Ok(Some(GuildMemberView {
            member_id: member_id.to_string(),
            display_name: format!("Member {member_id}"),
            avatar_url: format!("https://cdn.example.test/avatars/{member_id}.png"),
        }))
    }

    async fn sync_results_channel(&self, _finished: &[String]) -> Result<(), AppError> {
        Ok(())
    }
}

pub(crate) fn game_service(db: &DatabaseConnection) -> GameService<'_> {
    GameService::new(
        db,
        AssetPaths::new("/tmp/rankedle-tests"),
        Arc::new(NullGateway),
        reqwest::Client::new(),
        vec![BANNED_MEMBER.to_string()],
        SITE_URL.to_string(),
    )
}
