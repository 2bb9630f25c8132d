/// Sound effects are someone else's job; the game only announces events.

use std::io::Write;

use crate::entities::GameEvent;

pub trait SoundSink {
    fn play(&mut self, event: &GameEvent);
}

/// Silence.
#[derive(Debug, Default)]
pub struct NullSound;

impl SoundSink for NullSound {
    fn play(&mut self, _event: &GameEvent) {}
}

/// Rings the terminal bell on shots and kills.
pub struct BellSound<W: Write> {
    out: W,
}

impl<W: Write> BellSound<W> {
    pub fn new(out: W) -> Self {
        BellSound { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundSink for BellSound<W> {
    fn play(&mut self, event: &GameEvent) {
        if matches!(event, GameEvent::Fired { .. } | GameEvent::EnemyKilled { .. }) {
            // A missing bell is not worth interrupting the frame for.
            let _ = self.out.write_all(b"\x07");
            let _ = self.out.flush();
        }
    }
}
