use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A catalog entry as stored in the `Movie` collection. The store itself
/// accepts partial documents verbatim; this is the full documented shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub genre: Genre,
    /// Free-form display string, e.g. "1h 42m".
    pub duration: String,
}

impl Movie {
    pub const COLLECTION: &'static str = "Movie";
}

/// The fixed set of genres the admin UI offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Genre {
    Comedy,
    Drama,
    Action,
    Documentary,
    Horror,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Romance,
    Thriller,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_movie_serializes_with_camel_case_fields() {
        let movie = Movie {
            id: None,
            title: "Night Shift".to_string(),
            description: "A projectionist's last reel".to_string(),
            video_url: "https://cdn.example.com/night-shift.mp4".to_string(),
            thumbnail_url: "https://cdn.example.com/night-shift.jpg".to_string(),
            genre: Genre::Drama,
            duration: "1h 42m".to_string(),
        };

        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["videoUrl"], "https://cdn.example.com/night-shift.mp4");
        assert_eq!(value["thumbnailUrl"], "https://cdn.example.com/night-shift.jpg");
        assert_eq!(value["genre"], "Drama");
        assert!(value.get("_id").is_none());
    }

    #[test]
    fn test_sci_fi_genre_round_trips_with_hyphen() {
        assert_eq!(serde_json::to_value(Genre::SciFi).unwrap(), json!("Sci-Fi"));
        let parsed: Genre = serde_json::from_value(json!("Sci-Fi")).unwrap();
        assert_eq!(parsed, Genre::SciFi);
    }

    #[test]
    fn test_unknown_genre_is_rejected() {
        assert!(serde_json::from_value::<Genre>(json!("Western")).is_err());
    }

    #[test]
    fn test_movie_deserializes_stored_document() {
        let value = json!({
            "_id": {"$oid": "66f0a1b2c3d4e5f6a7b8c9d0"},
            "title": "Night Shift",
            "description": "A projectionist's last reel",
            "videoUrl": "https://cdn.example.com/night-shift.mp4",
            "thumbnailUrl": "https://cdn.example.com/night-shift.jpg",
            "genre": "Sci-Fi",
            "duration": "2h"
        });

        let movie: Movie = serde_json::from_value(value).unwrap();
        assert_eq!(movie.genre, Genre::SciFi);
        assert!(movie.id.is_some());
    }
}
