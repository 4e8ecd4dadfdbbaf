//! Markdown note value object

use std::fmt;

use crate::domain::video::VideoId;

/// Frontmatter `type` value for notes written by this tool
pub const NOTE_TYPE: &str = "youtube-summary";

/// Characters that cannot appear in a vault file name
const ILLEGAL_FILENAME_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// A summary note ready to print or store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    video_id: VideoId,
    title: String,
    summary: String,
}

impl Note {
    pub fn new(video_id: VideoId, title: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            video_id,
            title: title.into(),
            summary: summary.into(),
        }
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Link back to the source video
    pub fn source_url(&self) -> String {
        self.video_id.watch_url()
    }

    /// File name (without extension) derived from the title
    pub fn file_name(&self) -> String {
        let sanitized = sanitize_file_name(&self.title);
        if sanitized.is_empty() {
            self.video_id.to_string()
        } else {
            sanitized
        }
    }

    /// Render the note as markdown with YAML frontmatter
    pub fn render(&self) -> String {
        format!(
            "---\nsource: {}\ntitle: \"{}\"\ntype: {}\n---\n\n{}\n",
            self.source_url(),
            escape_yaml(&self.title),
            NOTE_TYPE,
            self.summary.trim_end()
        )
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Location of a note inside the vault: `<folder>/<file name>.md`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePath {
    folder: String,
    file_name: String,
}

impl NotePath {
    /// Path for `note` under `folder`
    pub fn new(folder: &str, note: &Note) -> Self {
        Self {
            folder: folder.trim().trim_matches('/').to_string(),
            file_name: format!("{}.md", note.file_name()),
        }
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Percent-encode every segment, keeping `/` separators
    pub fn url_encoded(&self) -> String {
        self.segments()
            .map(|s| urlencoding::encode(s).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.folder
            .split('/')
            .filter(|s| !s.is_empty())
            .chain(std::iter::once(self.file_name.as_str()))
    }
}

impl fmt::Display for NotePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.folder.is_empty() {
            f.write_str(&self.file_name)
        } else {
            write!(f, "{}/{}", self.folder, self.file_name)
        }
    }
}

/// Replace characters that are illegal in file names with `-` and trim
pub fn sanitize_file_name(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if ILLEGAL_FILENAME_CHARS.contains(&c) || c.is_control() {
                '-'
            } else {
                c
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

fn escape_yaml(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_id() -> VideoId {
        "dQw4w9WgXcQ".parse().unwrap()
    }

    fn note(title: &str) -> Note {
        Note::new(video_id(), title, "TLDR: it is a song.")
    }

    #[test]
    fn render_has_frontmatter_and_body() {
        let rendered = note("Never Gonna Give You Up").render();

        assert!(rendered.starts_with("---\n"));
        assert!(rendered.contains("source: https://www.youtube.com/watch?v=dQw4w9WgXcQ\n"));
        assert!(rendered.contains("title: \"Never Gonna Give You Up\"\n"));
        assert!(rendered.contains("type: youtube-summary\n"));
        assert!(rendered.ends_with("---\n\nTLDR: it is a song.\n"));
    }

    #[test]
    fn render_escapes_quotes_in_title() {
        let rendered = note("The \"best\" video").render();
        assert!(rendered.contains(r#"title: "The \"best\" video""#));
    }

    #[test]
    fn sanitizes_path_separator() {
        assert_eq!(sanitize_file_name("Part 1/2"), "Part 1-2");
        assert!(!note("Part 1/2").file_name().contains('/'));
    }

    #[test]
    fn sanitizes_all_illegal_chars() {
        assert_eq!(sanitize_file_name(r#"a\b/c:d*e?f"g<h>i|j"#), "a-b-c-d-e-f-g-h-i-j");
    }

    #[test]
    fn sanitizes_control_chars_and_trims() {
        assert_eq!(sanitize_file_name("  tab\there  "), "tab-here");
    }

    #[test]
    fn empty_title_falls_back_to_video_id() {
        assert_eq!(note("   ").file_name(), "dQw4w9WgXcQ");
    }

    #[test]
    fn note_path_joins_folder_and_file() {
        let path = NotePath::new("transcripts/videos", &note("My Video"));
        assert_eq!(path.to_string(), "transcripts/videos/My Video.md");
    }

    #[test]
    fn note_path_trims_folder_slashes() {
        let path = NotePath::new("/transcripts/videos/", &note("A"));
        assert_eq!(path.folder(), "transcripts/videos");
        assert_eq!(path.to_string(), "transcripts/videos/A.md");
    }

    #[test]
    fn note_path_without_folder() {
        let path = NotePath::new("", &note("A"));
        assert_eq!(path.to_string(), "A.md");
        assert_eq!(path.url_encoded(), "A.md");
    }

    #[test]
    fn url_encoding_keeps_separators() {
        let path = NotePath::new("my notes/videos", &note("Rust & You?"));
        assert_eq!(path.url_encoded(), "my%20notes/videos/Rust%20%26%20You-.md");
    }
}
