//! Audio playback port for the soundboard.
//!
//! The playback engine itself is external. It receives commands through
//! [`AudioPlayer`] and reports back through [`AudioEvent`]s.

use serde::{Deserialize, Serialize};

/// Commands accepted by the playback engine.
#[cfg_attr(test, mockall::automock)]
pub trait AudioPlayer {
    fn play(&mut self, track_id: &str);

    fn pause(&mut self);

    fn resume(&mut self);

    fn stop(&mut self);

    /// Volume in `[0.0, 1.0]`.
    fn set_volume(&mut self, volume: f32);

    fn set_loop(&mut self, looping: bool);

    fn seek(&mut self, position_secs: f64);
}

/// Events emitted by the playback engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AudioEvent {
    Play {
        #[serde(rename = "trackId")]
        track_id: String,
    },
    Pause,
    Stop,
    Ended,
    #[serde(rename_all = "camelCase")]
    TimeUpdate {
        position_secs: f64,
        duration_secs: Option<f64>,
    },
}
