use super::errors::MementoResult;
use super::snapshot::{Memento, MementoConvertible};
use serde::{Deserialize, Serialize};

const CHAPTER_KEY: &str = "game.chapter";
const WEAPON_KEY: &str = "game.weapon";

/// Save-game originator: where the player is and what they carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub chapter: String,
    pub weapon: String,
}

impl GameState {
    pub fn new(chapter: impl Into<String>, weapon: impl Into<String>) -> Self {
        Self {
            chapter: chapter.into(),
            weapon: weapon.into(),
        }
    }
}

impl MementoConvertible for GameState {
    fn to_memento(&self) -> Memento {
        [(CHAPTER_KEY, &self.chapter), (WEAPON_KEY, &self.weapon)]
            .into_iter()
            .map(|(k, v)| (k, v.clone()))
            .collect()
    }

    fn from_memento(memento: &Memento) -> MementoResult<Self> {
        Ok(Self {
            chapter: memento.require(CHAPTER_KEY)?.to_string(),
            weapon: memento.require(WEAPON_KEY)?.to_string(),
        })
    }
}
