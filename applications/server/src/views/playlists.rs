//! Playlist pages and the fragments returned to remote forms

use super::{html, js_string, layout};
use mixtape_core::{Playlist, Song};

/// Element id of the playlist list on the index page
pub const LIST_ID: &str = "playlists";

/// Path of a playlist's show page
pub fn playlist_path(playlist: &Playlist) -> String {
    format!("/playlists/{}", playlist.id)
}

/// Where a song is shown: its item on the playlist page
pub fn song_path(playlist: &Playlist, song: &Song) -> String {
    format!("{}#song-{}", playlist_path(playlist), song.id)
}

fn songs_list_id(playlist: &Playlist) -> String {
    format!("playlist-{}-songs", playlist.id)
}

fn list_item(playlist: &Playlist) -> String {
    format!(
        r#"<li id="playlist-{id}"><a href="{path}" data-playlist-name="{id}">{name}</a></li>"#,
        id = playlist.id,
        path = playlist_path(playlist),
        name = html(&playlist.name),
    )
}

fn song_item(song: &Song) -> String {
    match &song.artist {
        Some(artist) => format!(
            r#"<li id="song-{id}">{title} <span class="artist">{artist}</span></li>"#,
            id = song.id,
            title = html(&song.title),
            artist = html(artist),
        ),
        None => format!(
            r#"<li id="song-{id}">{title}</li>"#,
            id = song.id,
            title = html(&song.title),
        ),
    }
}

/// Index page: every playlist plus the form for a new one
pub fn index(playlists: &[Playlist]) -> String {
    let items: String = playlists.iter().map(list_item).collect();

    let content = format!(
        r#"<h1>Playlists</h1>
<ul id="{list_id}">{items}</ul>
<form id="new-playlist" action="/playlists" method="post" data-remote>
<input type="text" name="playlist[name]" placeholder="Playlist name" required>
<button type="submit">Create playlist</button>
</form>"#,
        list_id = LIST_ID,
        items = items,
    );

    layout("Playlists", &content)
}

/// Show page: one playlist, its songs, and the rename/add/delete forms
pub fn show(playlist: &Playlist) -> String {
    let songs: String = playlist
        .songs
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(song_item)
        .collect();
    let path = playlist_path(playlist);

    let content = format!(
        r#"<h1 data-playlist-name="{id}">{name}</h1>
<ol id="{songs_id}">{songs}</ol>
<form id="new-song" action="{path}/songs" method="post" data-remote>
<input type="text" name="song[title]" placeholder="Title" required>
<input type="text" name="song[artist]" placeholder="Artist">
<button type="submit">Add song</button>
</form>
<form id="edit-playlist" action="{path}" method="post" data-method="patch" data-remote>
<input type="text" name="playlist[name]" value="{name}" required>
<button type="submit">Rename</button>
</form>
<form id="delete-playlist" action="{path}" method="post" data-method="delete" data-remote>
<button type="submit">Delete playlist</button>
</form>"#,
        id = playlist.id,
        name = html(&playlist.name),
        songs_id = songs_list_id(playlist),
        songs = songs,
        path = path,
    );

    layout(&playlist.name, &content)
}

/// Fragment: append a new playlist to the index list and clear the form
pub fn created(playlist: &Playlist) -> String {
    format!(
        r#"(function () {{
  var list = document.getElementById({list_id});
  if (list) {{ list.insertAdjacentHTML("beforeend", {item}); }}
  var form = document.getElementById("new-playlist");
  if (form) {{ form.reset(); }}
}})();
"#,
        list_id = js_string(LIST_ID),
        item = js_string(&list_item(playlist)),
    )
}

/// Fragment: show the new name wherever the playlist is named on the page
pub fn updated(playlist: &Playlist) -> String {
    format!(
        r#"(function () {{
  var nodes = document.querySelectorAll({selector});
  for (var i = 0; i < nodes.length; i++) {{ nodes[i].textContent = {name}; }}
  document.title = {title};
}})();
"#,
        selector = js_string(&format!(r#"[data-playlist-name="{}"]"#, playlist.id)),
        name = js_string(&playlist.name),
        title = js_string(&format!("{} | Mixtape", playlist.name)),
    )
}

/// Fragment: append a new song to its playlist's song list
pub fn song_created(playlist: &Playlist, song: &Song) -> String {
    format!(
        r#"(function () {{
  var list = document.getElementById({list_id});
  if (list) {{ list.insertAdjacentHTML("beforeend", {item}); }}
  var form = document.getElementById("new-song");
  if (form) {{ form.reset(); }}
}})();
"#,
        list_id = js_string(&songs_list_id(playlist)),
        item = js_string(&song_item(song)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixtape_core::{PlaylistId, SongId};

    fn playlist(id: i64, name: &str) -> Playlist {
        Playlist {
            id: PlaylistId::new(id),
            name: name.to_string(),
            created_at: "2025-01-05 00:00:00".to_string(),
            updated_at: "2025-01-05 00:00:00".to_string(),
            songs: None,
        }
    }

    #[test]
    fn index_lists_every_playlist() {
        let page = index(&[playlist(1, "Road Trip"), playlist(2, "Summer Mix")]);
        assert!(page.contains(r#"href="/playlists/1""#));
        assert!(page.contains("Summer Mix"));
    }

    #[test]
    fn index_escapes_names() {
        let page = index(&[playlist(1, "<img src=x onerror=alert(1)>")]);
        assert!(!page.contains("<img"));
    }

    #[test]
    fn show_renders_songs_in_order() {
        let mut p = playlist(4, "Road Trip");
        p.songs = Some(vec![
            Song {
                id: SongId::new(1),
                playlist_id: p.id,
                title: "Highway Star".to_string(),
                artist: Some("Deep Purple".to_string()),
                position: 1,
                created_at: String::new(),
            },
            Song {
                id: SongId::new(2),
                playlist_id: p.id,
                title: "Radar Love".to_string(),
                artist: None,
                position: 2,
                created_at: String::new(),
            },
        ]);

        let page = show(&p);
        let first = page.find("Highway Star").unwrap();
        let second = page.find("Radar Love").unwrap();
        assert!(first < second);
        assert!(page.contains(r#"id="playlist-4-songs""#));
        assert!(page.contains("Deep Purple"));
    }

    #[test]
    fn created_fragment_targets_the_list() {
        let script = created(&playlist(7, "Road Trip"));
        assert!(script.contains(r#"getElementById("playlists")"#));
        assert!(script.contains("/playlists/7"));
    }

    #[test]
    fn updated_fragment_quotes_the_name() {
        let script = updated(&playlist(7, r#"Tom's "Mix""#));
        assert!(script.contains(r#""Tom's \"Mix\"""#));
        assert!(script.contains(r#"[data-playlist-name=\"7\"]"#));
    }
}
