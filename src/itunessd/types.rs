//! iTunesSD record schemas and constants

use super::record::{Field, Schema};

/// Database header (`shdb`)
pub const DATABASE: Schema = Schema {
    name: "shdb",
    fields: &[
        Field::tag("header_id", b"shdb"),
        Field::u32("unknown1", 0x0201_0001),
        Field::u32("total_length", 64),
        Field::u32("total_number_of_tracks", 0),
        Field::u32("total_number_of_playlists", 0),
        Field::u64("unknown2", 0),
        Field::u8("max_volume", 0),
        Field::u8("voiceover_enabled", 1),
        Field::u16("unknown3", 0),
        Field::u32("total_tracks_without_podcasts", 0),
        Field::u32("track_header_offset", 64),
        Field::u32("playlist_header_offset", 0),
        Field::bytes("unknown4", 20),
    ],
};

/// Track section header (`shth`)
pub const TRACK_HEADER: Schema = Schema {
    name: "shth",
    fields: &[
        Field::tag("header_id", b"shth"),
        Field::u32("total_length", 0),
        Field::u32("number_of_tracks", 0),
        Field::u64("unknown1", 0),
    ],
};

/// Track record (`shtr`)
pub const TRACK: Schema = Schema {
    name: "shtr",
    fields: &[
        Field::tag("header_id", b"shtr"),
        Field::u32("header_length", 0x174),
        Field::u32("start_at_pos_ms", 0),
        Field::u32("stop_at_pos_ms", 0),
        Field::u32("volume_gain", 0),
        Field::u32("filetype", FileType::Generic as u32),
        Field::bytes("filename", FILENAME_LEN),
        Field::u32("bookmark", 0),
        Field::u8("dontskip", 1),
        Field::u8("remember", 0),
        Field::u8("unintalbum", 0),
        Field::u8("unknown", 0),
        Field::u32("pregap", 0x240),
        Field::u32("postgap", 0xc9c),
        Field::u32("numsamples", 0),
        Field::u32("unknown2", 0),
        Field::u32("gapless", 0),
        Field::u32("unknown3", 0),
        Field::u32("albumid", 0),
        Field::u16("track", 1),
        Field::u16("disc", 0),
        Field::u64("unknown4", 0),
        Field::bytes("dbid", 8),
        Field::u32("artistid", 0),
        Field::bytes("unknown5", 32),
    ],
};

/// Playlist section header (`shph`)
pub const PLAYLIST_HEADER: Schema = Schema {
    name: "shph",
    fields: &[
        Field::tag("header_id", b"shph"),
        Field::u32("total_length", 0),
        Field::u32("number_of_playlists", 0),
        Field::u16("number_of_non_podcast_lists", 0xFFFF),
        Field::u16("number_of_master_lists", 1),
        Field::u16("number_of_non_audiobook_lists", 0xFFFF),
        Field::u16("unknown2", 0),
    ],
};

/// Playlist record (`shpl`), followed on disk by one u32 track index per song
pub const PLAYLIST: Schema = Schema {
    name: "shpl",
    fields: &[
        Field::tag("header_id", b"shpl"),
        Field::u32("total_length", 0),
        Field::u32("number_of_songs", 0),
        Field::u32("number_of_nonaudio", 0),
        Field::bytes("dbid", 8),
        Field::u32("listtype", ListType::Normal as u32),
        Field::bytes("unknown1", 16),
    ],
};

/// Size of the path slot inside a track record
pub const FILENAME_LEN: usize = 256;

pub const DATABASE_LEN: usize = DATABASE.encoded_len();
pub const TRACK_HEADER_LEN: usize = TRACK_HEADER.encoded_len();
pub const TRACK_LEN: usize = TRACK.encoded_len();
pub const PLAYLIST_HEADER_LEN: usize = PLAYLIST_HEADER.encoded_len();
pub const PLAYLIST_LEN: usize = PLAYLIST.encoded_len();

const _: () = assert!(DATABASE_LEN == 64);
const _: () = assert!(TRACK_HEADER_LEN == 20);
const _: () = assert!(TRACK_LEN == 0x174);
const _: () = assert!(PLAYLIST_HEADER_LEN == 20);
const _: () = assert!(PLAYLIST_LEN == 44);

/// Track file type codes
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Generic = 1,
    /// MPEG-4 container family (AAC, audiobooks)
    Container = 2,
}

impl FileType {
    /// Detect file type from extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "m4a" | "m4b" | "m4p" | "aa" => FileType::Container,
            _ => FileType::Generic,
        }
    }
}

/// Playlist list types
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListType {
    Master = 1,
    Normal = 2,
}
