use std::collections::HashMap;
use std::str::FromStr;

use crate::error::ReporterError;

/// One `<player id>=<archetype>` pair from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagArg {
    pub player_id: i64,
    pub tag: String,
}

impl FromStr for TagArg {
    type Err = ReporterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, tag) = s.split_once('=').ok_or_else(|| {
            ReporterError::InvalidArgument(format!("tag '{}' must look like <id>=<tag>", s))
        })?;

        let player_id = id.trim().parse().map_err(|_| {
            ReporterError::InvalidArgument(format!("'{}' is not a player id", id.trim()))
        })?;

        let tag = tag.trim();
        if tag.is_empty() {
            return Err(ReporterError::InvalidArgument(format!(
                "empty archetype for player {}",
                player_id
            )));
        }

        Ok(Self {
            player_id,
            tag: tag.to_string(),
        })
    }
}

/// Groups tags by player, keeping command-line order and dropping repeats.
pub fn group_tags(tags: &[TagArg]) -> HashMap<i64, Vec<String>> {
    let mut grouped: HashMap<i64, Vec<String>> = HashMap::new();
    for arg in tags {
        let player_tags = grouped.entry(arg.player_id).or_default();
        if !player_tags.contains(&arg.tag) {
            player_tags.push(arg.tag.clone());
        }
    }
    grouped
}
