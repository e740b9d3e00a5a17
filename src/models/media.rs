use bytes::Bytes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

/// A recording picked by the user, ready to be uploaded.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub file_name: String,
    /// Declared media type, e.g. `audio/wav` or `video/mp4`.
    pub content_type: String,
    pub data: Bytes,
}

impl MediaFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    pub fn media_kind(&self) -> MediaKind {
        if self.content_type.starts_with("audio/") {
            MediaKind::Audio
        } else {
            MediaKind::Video
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_derived_from_content_type() {
        let audio = MediaFile::new("call.wav", "audio/wav", Bytes::from_static(b"riff"));
        assert_eq!(audio.media_kind(), MediaKind::Audio);

        let video = MediaFile::new("call.mp4", "video/mp4", Bytes::from_static(b"mp4"));
        assert_eq!(video.media_kind(), MediaKind::Video);

        // Unknown declared types count as video, same as the picker does.
        let other = MediaFile::new("call.bin", "application/octet-stream", Bytes::new());
        assert_eq!(other.media_kind(), MediaKind::Video);
    }
}
