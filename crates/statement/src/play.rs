use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use playbill_core::{BillingError, BillingResult, Entity, PlayId};

/// A play the agency can perform.
///
/// The genre is kept as the catalog's raw tag: an unrecognized tag is only an
/// error once something tries to price a performance of the play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Play {
    id: PlayId,
    name: String,
    genre: String,
}

impl Play {
    pub fn new(id: impl Into<PlayId>, name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            genre: genre.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }
}

impl Entity for Play {
    type Id = PlayId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Catalog entry as it appears in a `plays` document: `{"name": .., "type": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub genre: String,
}

/// Play catalog keyed by `PlayId`. Keys are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<PlayId, PlayDefinition>",
    into = "BTreeMap<PlayId, PlayDefinition>"
)]
pub struct PlayCatalog {
    plays: BTreeMap<PlayId, Play>,
}

impl PlayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog, rejecting duplicate identifiers.
    pub fn from_plays(plays: impl IntoIterator<Item = Play>) -> BillingResult<Self> {
        let mut catalog = Self::new();
        for play in plays {
            catalog.insert(play)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, play: Play) -> BillingResult<()> {
        if self.plays.contains_key(play.id()) {
            return Err(BillingError::validation(format!(
                "duplicate play id: {}",
                play.id()
            )));
        }
        self.plays.insert(play.id().clone(), play);
        Ok(())
    }

    pub fn get(&self, id: &PlayId) -> Option<&Play> {
        self.plays.get(id)
    }

    /// Look up a play, failing with `UnresolvedPlay` when it is missing.
    pub fn resolve(&self, id: &PlayId) -> BillingResult<&Play> {
        self.get(id)
            .ok_or_else(|| BillingError::unresolved_play(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Play> {
        self.plays.values()
    }
}

impl TryFrom<BTreeMap<PlayId, PlayDefinition>> for PlayCatalog {
    type Error = BillingError;

    fn try_from(value: BTreeMap<PlayId, PlayDefinition>) -> Result<Self, Self::Error> {
        Self::from_plays(
            value
                .into_iter()
                .map(|(id, def)| Play::new(id, def.name, def.genre)),
        )
    }
}

impl From<PlayCatalog> for BTreeMap<PlayId, PlayDefinition> {
    fn from(value: PlayCatalog) -> Self {
        value
            .plays
            .into_iter()
            .map(|(id, play)| {
                (
                    id,
                    PlayDefinition {
                        name: play.name,
                        genre: play.genre,
                    },
                )
            })
            .collect()
    }
}
