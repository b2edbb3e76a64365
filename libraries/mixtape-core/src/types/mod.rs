mod ids;
mod playlist;
mod song;

pub use ids::{PlaylistId, SongId};
pub use playlist::{CreatePlaylist, Playlist, UpdatePlaylist};
pub use song::{CreateSong, Song};
