//! Sound cue dispatch
//!
//! The simulation only reports [`GameEvent`]s. This module turns them into
//! fire-and-forget cues for whatever playback backend the shell provides.
//! Running without a backend is normal (headless, no device) and silent.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Coin collected
    CoinPickup,
    /// First hit from a hazard
    DamageTaken,
}

impl SoundEffect {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::CoinCollected { .. } => Some(SoundEffect::CoinPickup),
            GameEvent::Damaged { audible: true, .. } => Some(SoundEffect::DamageTaken),
            GameEvent::Damaged { audible: false, .. } | GameEvent::Finished(_) => None,
        }
    }
}

/// Something that can play a cue. Must not block or fail the caller.
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AudioManager {
    pub fn new(backend: Option<Box<dyn AudioBackend>>) -> Self {
        if backend.is_none() {
            log::warn!("No audio backend - audio disabled");
        }
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };
        backend.play(effect, vol);
    }

    /// Play the cues for one tick's events
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}
