//! Game records held by the catalog and persisted to `games.json`.
//!
//! Every field defaults to its zero value so a partial body decodes into a
//! record with the missing fields reset.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A video game entry in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Game {
    /// Display title.
    pub title: String,
    /// Credited director.
    pub director: Director,
    /// Studio that built the game.
    pub developer: Developer,
    /// Company that published the game.
    pub publisher: Publisher,
}

/// Person credited as the game director.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct Director {
    /// First and last name, serialized as `fullName`.
    pub full_name: String,
    /// Nationality as free text.
    pub nationality: String,
    /// Age in years.
    pub age: i64,
}

/// Studio that built the game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Developer {
    /// Studio name.
    pub name: String,
    /// Country the studio is based in.
    pub country: String,
    /// Year the studio was founded.
    #[serde(rename = "creation")]
    pub creation_year: i64,
}

/// Company that published the game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct Publisher {
    /// Publisher name.
    pub name: String,
    /// Country the publisher is based in.
    pub country: String,
}
