use serde::Deserialize;
use utoipa::ToSchema;

use crate::state::game::{Developer, Director, Game, Publisher};

/// Partial game used by `PATCH /games/{id}`.
///
/// Only the fields present in the body are written; nested objects are merged
/// field by field and `null` leaves the existing value alone.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GamePatch {
    /// New title, if any.
    pub title: Option<String>,
    /// Director fields to overwrite.
    pub director: Option<DirectorPatch>,
    /// Developer fields to overwrite.
    pub developer: Option<DeveloperPatch>,
    /// Publisher fields to overwrite.
    pub publisher: Option<PublisherPatch>,
}

/// Partial [`Director`].
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DirectorPatch {
    /// New full name.
    pub full_name: Option<String>,
    /// New nationality.
    pub nationality: Option<String>,
    /// New age in years.
    pub age: Option<i64>,
}

/// Partial [`Developer`].
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DeveloperPatch {
    /// New studio name.
    pub name: Option<String>,
    /// New studio country.
    pub country: Option<String>,
    /// New founding year, serialized as `creation`.
    #[serde(rename = "creation")]
    pub creation_year: Option<i64>,
}

/// Partial [`Publisher`].
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PublisherPatch {
    /// New publisher name.
    pub name: Option<String>,
    /// New publisher country.
    pub country: Option<String>,
}

impl GamePatch {
    /// Overlay the present fields onto `game`.
    pub fn apply_to(self, game: &mut Game) {
        overwrite(&mut game.title, self.title);
        if let Some(director) = self.director {
            director.apply_to(&mut game.director);
        }
        if let Some(developer) = self.developer {
            developer.apply_to(&mut game.developer);
        }
        if let Some(publisher) = self.publisher {
            publisher.apply_to(&mut game.publisher);
        }
    }
}

impl DirectorPatch {
    fn apply_to(self, director: &mut Director) {
        overwrite(&mut director.full_name, self.full_name);
        overwrite(&mut director.nationality, self.nationality);
        overwrite(&mut director.age, self.age);
    }
}

impl DeveloperPatch {
    fn apply_to(self, developer: &mut Developer) {
        overwrite(&mut developer.name, self.name);
        overwrite(&mut developer.country, self.country);
        overwrite(&mut developer.creation_year, self.creation_year);
    }
}

impl PublisherPatch {
    fn apply_to(self, publisher: &mut Publisher) {
        overwrite(&mut publisher.name, self.name);
        overwrite(&mut publisher.country, self.country);
    }
}

fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn existing() -> Game {
        Game {
            title: "C".into(),
            director: Director {
                full_name: "Shigeru Miyamoto".into(),
                nationality: "Japanese".into(),
                age: 72,
            },
            developer: Developer {
                name: "Nintendo EAD".into(),
                country: "Japan".into(),
                creation_year: 1983,
            },
            publisher: Publisher {
                name: "Nintendo".into(),
                country: "Japan".into(),
            },
        }
    }

    fn patched(body: serde_json::Value) -> Game {
        let patch: GamePatch = serde_json::from_value(body).unwrap();
        let mut game = existing();
        patch.apply_to(&mut game);
        game
    }

    #[test]
    fn title_only_patch_keeps_everything_else() {
        let game = patched(json!({ "title": "D" }));

        assert_eq!(game.title, "D");
        assert_eq!(game.director, existing().director);
        assert_eq!(game.developer, existing().developer);
        assert_eq!(game.publisher, existing().publisher);
    }

    #[test]
    fn nested_patch_merges_field_by_field() {
        let game = patched(json!({ "director": { "age": 73 }, "developer": { "creation": 1989 } }));

        assert_eq!(game.director.age, 73);
        assert_eq!(game.director.full_name, "Shigeru Miyamoto");
        assert_eq!(game.developer.creation_year, 1989);
        assert_eq!(game.developer.name, "Nintendo EAD");
    }

    #[test]
    fn null_and_unknown_fields_change_nothing() {
        let game = patched(json!({ "title": null, "publisher": null, "rating": 10 }));
        assert_eq!(game, existing());
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        assert_eq!(patched(json!({})), existing());
    }
}
