//! Seams to the collaborators that live outside the simulation
//!
//! The core never draws, polls devices or owns a timer. A host plugs in a
//! [`Renderer`], an [`InputSource`] and a [`Clock`] and hands them to
//! [`GameLoop::run`](crate::GameLoop::run).

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, TryRecvError};
use glam::Vec2;

use crate::error::RenderError;
use crate::input::InputEvent;
use crate::map::Rect;

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball_center: Vec2,
    pub ball_radius: f32,
    pub left_score: u64,
    pub right_score: u64,
}

/// Display sink, called once per tick after the simulation step
pub trait Renderer {
    fn present(&mut self, frame: &RenderSnapshot) -> Result<(), RenderError>;
}

/// Device event source, drained once at the start of every tick
pub trait InputSource {
    /// All events that arrived since the previous call, oldest first
    fn drain(&mut self) -> Vec<InputEvent>;
}

/// Frame pacing
pub trait Clock {
    /// Block until the next frame is due
    fn tick(&mut self, target_fps: u32);
}

/// Input fed from another thread through a channel
pub struct ChannelInput {
    rx: Receiver<InputEvent>,
    closed: bool,
}

impl ChannelInput {
    pub fn new(rx: Receiver<InputEvent>) -> Self {
        Self { rx, closed: false }
    }
}

impl InputSource for ChannelInput {
    fn drain(&mut self) -> Vec<InputEvent> {
        let mut batch = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => batch.push(event),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    // Report a vanished device once
                    if !self.closed {
                        self.closed = true;
                        batch.push(InputEvent::Quit);
                    }
                    break;
                }
            }
        }
        batch
    }
}

/// Sleeps away whatever is left of the current frame
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, target_fps: u32) {
        let frame = Duration::from_secs(1) / target_fps.max(1);
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < frame {
                std::thread::sleep(frame - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Control;

    #[test]
    fn test_channel_input_drains_batch() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut input = ChannelInput::new(rx);

        tx.send(InputEvent::press(Control::P1Up)).unwrap();
        tx.send(InputEvent::release(Control::P1Up)).unwrap();

        assert_eq!(
            input.drain(),
            vec![
                InputEvent::press(Control::P1Up),
                InputEvent::release(Control::P1Up)
            ]
        );
        assert!(input.drain().is_empty(), "Queue is empty after a drain");
    }

    #[test]
    fn test_channel_input_quits_once_on_disconnect() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let mut input = ChannelInput::new(rx);

        tx.send(InputEvent::press(Control::P2Down)).unwrap();
        drop(tx);

        assert_eq!(
            input.drain(),
            vec![InputEvent::press(Control::P2Down), InputEvent::Quit]
        );
        assert!(input.drain().is_empty());
    }

    #[test]
    fn test_frame_clock_paces_frames() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick(100);
        clock.tick(100);
        clock.tick(100);
        assert!(
            start.elapsed() >= Duration::from_millis(18),
            "Two full frames at 100 fps should take about 20ms"
        );
    }
}
