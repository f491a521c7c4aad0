//! Business logic services for the Rankedle game.
//!
//! Services are explicit objects constructed with their dependencies (the
//! database connection, the media toolchain, the guild gateway) so tests can
//! substitute doubles at every external seam.

pub mod assets;
pub mod audio;
pub mod cover;
pub mod discord;
pub mod game;
pub mod pipeline;
pub mod scoring;
pub mod waveform;

#[cfg(test)]
mod test;

pub use assets::AssetPaths;
pub use audio::{AudioToolchain, FfmpegToolchain};
pub use discord::{DiscordGateway, GuildGateway, GuildMemberView};
pub use game::GameService;
pub use pipeline::GenerationService;
pub use scoring::StatService;
