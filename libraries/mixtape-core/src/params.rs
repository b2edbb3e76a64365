//! Permitted request parameters
//!
//! Each params struct names the only fields a client may set on an entity.
//! Deserializing into it drops everything else, so unknown keys never reach
//! the store. Converting into a create/update payload runs validation and
//! reports every failing field at once.

use crate::types::{CreatePlaylist, CreateSong, UpdatePlaylist};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Longest accepted playlist name, song title or artist, in characters
pub const MAX_TEXT_LEN: usize = 255;

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for one field
    pub fn field(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str(", ")?;
                }
                write!(f, "{} {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn check_required(errors: &mut ValidationErrors, field: &str, value: Option<&str>) {
    match value {
        None => errors.add(field, "is required"),
        Some(v) if v.trim().is_empty() => errors.add(field, "can't be blank"),
        Some(v) => check_length(errors, field, v),
    }
}

fn check_length(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.chars().count() > MAX_TEXT_LEN {
        errors.add(
            field,
            format!("is too long (maximum is {} characters)", MAX_TEXT_LEN),
        );
    }
}

/// Fields a client may set on a playlist
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlaylistParams {
    #[serde(default)]
    pub name: Option<String>,
}

impl PlaylistParams {
    fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        check_required(&mut errors, "name", self.name.as_deref());
        errors
    }

    /// Validate and build the payload for a new playlist
    pub fn into_create(self) -> Result<CreatePlaylist, ValidationErrors> {
        let errors = self.validate();
        errors.into_result(CreatePlaylist {
            name: self.name.unwrap_or_default(),
        })
    }

    /// Validate and build the payload for renaming a playlist
    pub fn into_update(self) -> Result<UpdatePlaylist, ValidationErrors> {
        let errors = self.validate();
        errors.into_result(UpdatePlaylist {
            name: self.name.unwrap_or_default(),
        })
    }
}

/// Fields a client may set on a song
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SongParams {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub artist: Option<String>,
}

impl SongParams {
    /// Validate and build the payload for a new song
    ///
    /// A blank artist is stored as no artist.
    pub fn into_create(self) -> Result<CreateSong, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_required(&mut errors, "title", self.title.as_deref());
        if let Some(artist) = self.artist.as_deref() {
            check_length(&mut errors, "artist", artist);
        }

        errors.into_result(CreateSong {
            title: self.title.unwrap_or_default(),
            artist: self.artist.filter(|a| !a.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_playlist_fields_are_dropped() {
        let params: PlaylistParams =
            serde_json::from_str(r#"{"name": "Road Trip", "id": 99, "created_at": "x"}"#)
                .unwrap();
        assert_eq!(params.name.as_deref(), Some("Road Trip"));
    }

    #[test]
    fn missing_name_is_required() {
        let errors = PlaylistParams::default().into_create().unwrap_err();
        assert_eq!(errors.field("name"), ["is required"]);
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = PlaylistParams {
            name: Some("   ".to_string()),
        }
        .into_update()
        .unwrap_err();
        assert_eq!(errors.field("name"), ["can't be blank"]);
        assert_eq!(errors.to_string(), "name can't be blank");
    }

    #[test]
    fn name_length_is_counted_in_characters() {
        let exact = "é".repeat(MAX_TEXT_LEN);
        assert!(PlaylistParams { name: Some(exact) }.into_create().is_ok());

        let over = "é".repeat(MAX_TEXT_LEN + 1);
        let errors = PlaylistParams { name: Some(over) }.into_create().unwrap_err();
        assert_eq!(errors.field("name").len(), 1);
    }

    #[test]
    fn name_is_kept_verbatim() {
        let create = PlaylistParams {
            name: Some("  Summer Mix ".to_string()),
        }
        .into_create()
        .unwrap();
        assert_eq!(create.name, "  Summer Mix ");
    }

    #[test]
    fn song_blank_artist_becomes_none() {
        let create = SongParams {
            title: Some("Holiday".to_string()),
            artist: Some(" ".to_string()),
        }
        .into_create()
        .unwrap();
        assert_eq!(create.artist, None);
    }

    #[test]
    fn song_reports_every_failing_field() {
        let errors = SongParams {
            title: None,
            artist: Some("x".repeat(MAX_TEXT_LEN + 1)),
        }
        .into_create()
        .unwrap_err();
        let fields: Vec<_> = errors.fields().map(|(f, _)| f).collect();
        assert_eq!(fields, ["artist", "title"]);
    }
}
