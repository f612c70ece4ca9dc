//! Soundboard playback state.
//!
//! Commands go to the external audio engine; its events are folded back into
//! [`PlaybackState`]. Volume changes apply immediately but are persisted only
//! after the debounce window has passed without another change.

use serde::Serialize;

use crate::infrastructure::persistence::FieldStore;
use crate::ports::outbound::{storage_keys, AudioEvent, AudioPlayer, StorageProvider};

pub const DEFAULT_VOLUME_DEBOUNCE_MS: u64 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaybackStatus {
    Playing,
    Paused,
    #[default]
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub track_id: Option<String>,
    pub status: PlaybackStatus,
    pub position_secs: f64,
    pub duration_secs: Option<f64>,
    pub volume: f32,
    pub looping: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            track_id: None,
            status: PlaybackStatus::Stopped,
            position_secs: 0.0,
            duration_secs: None,
            volume: 1.0,
            looping: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingVolumeWrite {
    volume: f32,
    due_at_ms: u64,
}

pub struct Soundboard<P: AudioPlayer, S: StorageProvider> {
    player: P,
    fields: FieldStore<S>,
    volume_key: String,
    debounce_ms: u64,
    state: PlaybackState,
    pending_write: Option<PendingVolumeWrite>,
}

impl<P: AudioPlayer, S: StorageProvider> Soundboard<P, S> {
    /// Create the soundboard and restore the persisted volume.
    pub fn new(player: P, storage: S, key_prefix: &str, debounce_ms: u64) -> Self {
        let mut soundboard = Self {
            player,
            fields: FieldStore::new(storage),
            volume_key: storage_keys::soundboard_volume(key_prefix),
            debounce_ms,
            state: PlaybackState::default(),
            pending_write: None,
        };
        soundboard.hydrate_volume();
        soundboard
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Load the persisted volume, if any, and hand it to the player.
    pub fn hydrate_volume(&mut self) -> bool {
        let stored = self
            .fields
            .read_validated(&self.volume_key, None, |v: &Option<f32>| {
                v.is_some_and(|v| (0.0..=1.0).contains(&v))
            });
        let Some(volume) = stored else {
            return false;
        };
        self.state.volume = volume;
        self.player.set_volume(volume);
        true
    }

    // =========================================================================
    // Commands
    // =========================================================================

    pub fn play(&mut self, track_id: &str) {
        self.player.play(track_id);
        self.state.track_id = Some(track_id.to_string());
        self.state.status = PlaybackStatus::Playing;
        self.state.position_secs = 0.0;
        self.state.duration_secs = None;
    }

    pub fn pause(&mut self) -> bool {
        if self.state.status != PlaybackStatus::Playing {
            return false;
        }
        self.player.pause();
        self.state.status = PlaybackStatus::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.state.status != PlaybackStatus::Paused {
            return false;
        }
        self.player.resume();
        self.state.status = PlaybackStatus::Playing;
        true
    }

    pub fn stop(&mut self) {
        self.player.stop();
        self.state.status = PlaybackStatus::Stopped;
        self.state.position_secs = 0.0;
    }

    pub fn set_loop(&mut self, looping: bool) {
        self.player.set_loop(looping);
        self.state.looping = looping;
    }

    /// Seek within the current track; the position is clamped to its length.
    pub fn seek(&mut self, position_secs: f64) {
        let mut position = position_secs.max(0.0);
        if let Some(duration) = self.state.duration_secs {
            position = position.min(duration);
        }
        self.player.seek(position);
        self.state.position_secs = position;
    }

    /// Apply a volume now and schedule its persistence.
    pub fn set_volume(&mut self, volume: f32, now_ms: u64) {
        if volume.is_nan() {
            return;
        }
        let volume = volume.clamp(0.0, 1.0);
        self.player.set_volume(volume);
        self.state.volume = volume;
        self.pending_write = Some(PendingVolumeWrite {
            volume,
            due_at_ms: now_ms.saturating_add(self.debounce_ms),
        });
    }

    /// Persist a scheduled volume whose debounce window has passed.
    pub fn flush_due(&mut self, now_ms: u64) -> bool {
        match self.pending_write {
            Some(pending) if pending.due_at_ms <= now_ms => {
                self.pending_write = None;
                self.fields.write(&self.volume_key, &pending.volume);
                tracing::debug!(volume = pending.volume, "Persisted soundboard volume");
                true
            }
            _ => false,
        }
    }

    /// Persist any scheduled volume immediately.
    pub fn flush(&mut self) -> bool {
        match self.pending_write.take() {
            Some(pending) => {
                self.fields.write(&self.volume_key, &pending.volume);
                true
            }
            None => false,
        }
    }

    pub fn has_pending_write(&self) -> bool {
        self.pending_write.is_some()
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn handle_event(&mut self, event: AudioEvent) {
        match event {
            AudioEvent::Play { track_id } => {
                self.state.track_id = Some(track_id);
                self.state.status = PlaybackStatus::Playing;
            }
            AudioEvent::Pause => self.state.status = PlaybackStatus::Paused,
            AudioEvent::Stop => {
                self.state.status = PlaybackStatus::Stopped;
                self.state.position_secs = 0.0;
            }
            AudioEvent::Ended => {
                self.state.position_secs = 0.0;
                if !self.state.looping {
                    self.state.status = PlaybackStatus::Stopped;
                }
            }
            AudioEvent::TimeUpdate {
                position_secs,
                duration_secs,
            } => {
                self.state.position_secs = position_secs;
                if duration_secs.is_some() {
                    self.state.duration_secs = duration_secs;
                }
            }
        }
    }
}
