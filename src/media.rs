//! Audio Player State
//!
//! Mirror of an `<audio>` element's playback state. While the progress bar
//! is being dragged, `timeupdate` from the element is ignored so the handle
//! follows the pointer.

/// Selectable playback rates
pub const PLAYBACK_SPEEDS: [f64; 7] = [0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0];

/// Seconds moved by the skip buttons and arrow keys
pub const SKIP_SECONDS: f64 = 10.0;

/// Volume change per arrow key press
pub const VOLUME_STEP: f64 = 0.1;

/// `m:ss`; non-finite or negative input shows `0:00`
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}

pub fn speed_label(rate: f64) -> String {
    format!("{rate}x")
}

/// Target of a relative skip, clamped to `[0, duration]`
pub fn skip_target(current: f64, delta: f64, duration: f64) -> f64 {
    let upper = if duration.is_finite() && duration > 0.0 { duration } else { 0.0 };
    (current + delta).clamp(0.0, upper)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub muted: bool,
    pub playing: bool,
    pub dragging: bool,
    pub playback_rate: f64,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: 0.0,
            volume: 1.0,
            muted: false,
            playing: false,
            dragging: false,
            playback_rate: 1.0,
        }
    }
}

impl PlayerState {
    pub fn on_time_update(&mut self, time: f64) {
        if !self.dragging {
            self.current_time = time;
        }
    }

    /// Element fired `play`
    pub fn on_play(&mut self) {
        self.playing = true;
    }

    /// Element fired `pause` or `ended`, or a play request was rejected
    pub fn on_pause(&mut self) {
        self.playing = false;
    }

    pub fn on_loaded_metadata(&mut self, duration: f64) {
        self.duration = if duration.is_finite() && duration > 0.0 { duration } else { 0.0 };
    }

    /// Move to a fraction of the track; returns the time to apply
    pub fn seek_fraction(&mut self, fraction: f64) -> f64 {
        let time = fraction.clamp(0.0, 1.0) * self.duration;
        self.current_time = time;
        time
    }

    /// Skip relative to `current`; returns the time to apply
    pub fn skip(&mut self, current: f64, delta: f64) -> f64 {
        let time = skip_target(current, delta, self.duration);
        self.current_time = time;
        time
    }

    /// Set the volume, clamped to `[0, 1]`; zero counts as muted
    pub fn set_volume(&mut self, volume: f64) -> f64 {
        let volume = if volume.is_finite() { volume.clamp(0.0, 1.0) } else { 0.0 };
        self.volume = volume;
        self.muted = volume == 0.0;
        volume
    }

    pub fn adjust_volume(&mut self, delta: f64) -> f64 {
        // Round to avoid drift like 0.30000000000000004
        let next = ((self.volume + delta) * 100.0).round() / 100.0;
        self.set_volume(next)
    }

    /// Flip mute; returns the volume the element should now use
    pub fn toggle_mute(&mut self) -> f64 {
        self.muted = !self.muted;
        self.effective_volume()
    }

    pub fn effective_volume(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    pub fn progress_percent(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    pub fn elapsed_label(&self) -> String {
        format_time(self.current_time)
    }

    pub fn remaining_label(&self) -> String {
        format!("-{}", format_time(self.duration - self.current_time))
    }

    pub fn set_playback_rate(&mut self, rate: f64) -> f64 {
        self.playback_rate = if PLAYBACK_SPEEDS.contains(&rate) { rate } else { 1.0 };
        self.playback_rate
    }

    /// Modal closed: stop playback, keep volume and speed
    pub fn stop(&mut self) {
        self.playing = false;
        self.dragging = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.7), "1:05");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn test_playing_follows_element_events() {
        let mut player = PlayerState::default();
        assert!(!player.playing);
        player.on_play();
        assert!(player.playing);
        // A rejected play() request is reported like a pause
        player.on_pause();
        assert!(!player.playing);
    }

    #[test]
    fn test_speed_labels() {
        assert_eq!(speed_label(1.0), "1x");
        assert_eq!(speed_label(0.75), "0.75x");
    }

    #[test]
    fn test_time_update_ignored_while_dragging() {
        let mut player = PlayerState::default();
        player.on_loaded_metadata(100.0);
        player.on_time_update(10.0);
        player.dragging = true;
        player.seek_fraction(0.5);
        player.on_time_update(11.0);
        assert_eq!(player.current_time, 50.0);
        player.dragging = false;
        player.on_time_update(50.2);
        assert_eq!(player.current_time, 50.2);
    }

    #[test]
    fn test_skip_clamped_to_track() {
        let mut player = PlayerState::default();
        player.on_loaded_metadata(30.0);
        assert_eq!(player.skip(25.0, SKIP_SECONDS), 30.0);
        assert_eq!(player.skip(4.0, -SKIP_SECONDS), 0.0);
        assert_eq!(player.skip(12.0, SKIP_SECONDS), 22.0);
        player.on_loaded_metadata(f64::NAN);
        assert_eq!(player.skip(5.0, SKIP_SECONDS), 0.0);
    }

    #[test]
    fn test_volume_clamped() {
        let mut player = PlayerState::default();
        assert_eq!(player.adjust_volume(VOLUME_STEP), 1.0);
        for _ in 0..12 {
            player.adjust_volume(-VOLUME_STEP);
        }
        assert_eq!(player.volume, 0.0);
        assert!(player.muted);
        assert_eq!(player.adjust_volume(VOLUME_STEP), 0.1);
        assert!(!player.muted);
    }

    #[test]
    fn test_mute_keeps_volume() {
        let mut player = PlayerState::default();
        player.set_volume(0.6);
        assert_eq!(player.toggle_mute(), 0.0);
        assert_eq!(player.volume, 0.6);
        assert_eq!(player.toggle_mute(), 0.6);
    }

    #[test]
    fn test_labels_and_progress() {
        let mut player = PlayerState::default();
        player.on_loaded_metadata(120.0);
        player.on_time_update(30.0);
        assert_eq!(player.elapsed_label(), "0:30");
        assert_eq!(player.remaining_label(), "-1:30");
        assert_eq!(player.progress_percent(), 25.0);
    }

    #[test]
    fn test_playback_rate_limited_to_menu() {
        let mut player = PlayerState::default();
        assert_eq!(player.set_playback_rate(1.5), 1.5);
        assert_eq!(player.set_playback_rate(3.0), 1.0);
    }
}
