use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use storage::{
    ScoutCart,
    cart::CartEntry,
    models::DataSnapshot,
    services::metrics::rank_players,
};

use crate::error::{ReporterError, Result};
use crate::tags::{TagArg, group_tags};

/// Fills a fresh cart with the given players in command-line order.
///
/// Every tag must belong to one of the listed players.
pub fn build_cart(
    snapshot: &DataSnapshot,
    player_ids: &[i64],
    tags: &[TagArg],
    name: Option<&str>,
) -> Result<ScoutCart> {
    let ranked = rank_players(&snapshot.players, &snapshot.scores);
    let mut tags_by_player = group_tags(tags);

    if let Some(orphan) = tags_by_player.keys().find(|&&id| !player_ids.contains(&id)) {
        return Err(ReporterError::InvalidArgument(format!(
            "tag given for player {} who is not exported",
            orphan
        )));
    }

    let mut cart = ScoutCart::new();
    if let Some(name) = name {
        cart.rename(name);
    }

    for &player_id in player_ids {
        let player = ranked
            .iter()
            .find(|p| p.id() == player_id)
            .ok_or(ReporterError::PlayerNotFound(player_id))?;

        let archetypes = tags_by_player.remove(&player_id).unwrap_or_default();
        if !cart.add_player(CartEntry::from_ranked(player, archetypes)) {
            tracing::warn!(player_id, "Player listed twice, keeping the first entry");
        }
    }

    Ok(cart)
}

/// Writes the delimited export under `dir` and returns the file path.
pub async fn write_export(cart: &ScoutCart, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let filename = cart.export_filename(date).replace(['/', '\\'], "-");
    let path = dir.join(filename);

    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(&path, cart.export_delimited()?).await?;

    tracing::info!(path = %path.display(), players = cart.len(), "Exported cart");
    Ok(path)
}
