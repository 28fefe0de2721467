//! Playback queue with stop-and-clear semantics.
//!
//! At most one clip plays at a time. An interrupt discards the current clip
//! and everything queued behind it instead of interleaving; discarded and
//! finished clips yield the filenames that still need server-side cleanup.

use std::collections::VecDeque;

/// Queue of synthesized audio clips identified by URL.
#[derive(Debug, Default)]
pub struct PlaybackQueue {
    current: Option<String>,
    queued: VecDeque<String>,
}

impl PlaybackQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a clip is currently playing.
    pub fn is_playing(&self) -> bool {
        self.current.is_some()
    }

    /// Add a clip. Returns the URL to start playing if nothing was active.
    pub fn enqueue(&mut self, url: impl Into<String>) -> Option<&str> {
        let url = url.into();
        if self.current.is_some() {
            self.queued.push_back(url);
            None
        } else {
            self.current = Some(url);
            self.current.as_deref()
        }
    }

    /// Mark the active clip as finished.
    ///
    /// Returns the finished clip's cleanup filename and the next clip to
    /// start, if any.
    pub fn finished(&mut self) -> (Option<String>, Option<&str>) {
        let cleanup = self.current.take().map(|url| filename_of(&url));
        self.current = self.queued.pop_front();
        (cleanup, self.current.as_deref())
    }

    /// Discard the active clip and everything queued.
    ///
    /// Returns the cleanup filenames of every discarded clip.
    pub fn interrupt(&mut self) -> Vec<String> {
        self.current
            .take()
            .into_iter()
            .chain(self.queued.drain(..))
            .map(|url| filename_of(&url))
            .collect()
    }
}

/// Server-side cleanup key: the last path segment of the clip URL.
fn filename_of(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_clip_starts_immediately() {
        let mut queue = PlaybackQueue::new();
        assert_eq!(queue.enqueue("/audio/a.mp3"), Some("/audio/a.mp3"));
        assert!(queue.is_playing());
    }

    #[test]
    fn later_clips_wait_their_turn() {
        let mut queue = PlaybackQueue::new();
        queue.enqueue("/audio/a.mp3");
        assert_eq!(queue.enqueue("/audio/b.mp3"), None);

        let (cleanup, next) = queue.finished();
        assert_eq!(cleanup.as_deref(), Some("a.mp3"));
        assert_eq!(next, Some("/audio/b.mp3"));
    }

    #[test]
    fn finishing_the_last_clip_empties_the_queue() {
        let mut queue = PlaybackQueue::new();
        queue.enqueue("/audio/a.mp3");
        let (cleanup, next) = queue.finished();
        assert_eq!(cleanup.as_deref(), Some("a.mp3"));
        assert_eq!(next, None);
        assert!(!queue.is_playing());
    }

    #[test]
    fn interrupt_discards_everything_and_yields_cleanups() {
        let mut queue = PlaybackQueue::new();
        queue.enqueue("/audio/a.mp3");
        queue.enqueue("/audio/b.mp3");
        queue.enqueue("/audio/c.mp3");

        let cleanups = queue.interrupt();
        assert_eq!(cleanups, vec!["a.mp3", "b.mp3", "c.mp3"]);
        assert!(!queue.is_playing());
        assert_eq!(queue.enqueue("/audio/d.mp3"), Some("/audio/d.mp3"));
    }

    #[test]
    fn interrupt_on_idle_queue_is_empty() {
        let mut queue = PlaybackQueue::new();
        assert!(queue.interrupt().is_empty());
    }
}
