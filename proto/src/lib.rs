//! Wire protocol between the game core and out-of-process peripherals
//!
//! Uses postcard for efficient binary serialization. Frames go out to a
//! renderer, key events come back from an input device.

use std::io::{self, Read, Write};

use game_core::{
    Control, GameConfig, InputEvent, KeyEvent, Palette, RenderError, RenderSnapshot, Renderer,
    Side,
};
use postcard::{from_bytes, to_allocvec};

// ============================================================================
// C2S Messages (input device to core)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum C2S {
    /// Logical control pressed or released
    Key { control: Control, pressed: bool },

    /// End the session (window closed)
    Quit,
}

impl From<C2S> for InputEvent {
    fn from(msg: C2S) -> Self {
        match msg {
            C2S::Key { control, pressed } => InputEvent::Key(KeyEvent { control, pressed }),
            C2S::Quit => InputEvent::Quit,
        }
    }
}

// ============================================================================
// S2C Messages (core to renderer)
// ============================================================================

/// Flat copy of a [`RenderSnapshot`]
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_radius: f32,
    pub paddle_left_x: f32,
    pub paddle_left_y: f32,
    pub paddle_right_x: f32,
    pub paddle_right_y: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub score_left: u64,
    pub score_right: u64,
}

impl From<&RenderSnapshot> for FrameSnapshot {
    fn from(s: &RenderSnapshot) -> Self {
        Self {
            tick: s.tick,
            ball_x: s.ball_center.x,
            ball_y: s.ball_center.y,
            ball_radius: s.ball_radius,
            paddle_left_x: s.left_paddle.x,
            paddle_left_y: s.left_paddle.y,
            paddle_right_x: s.right_paddle.x,
            paddle_right_y: s.right_paddle.y,
            paddle_width: s.left_paddle.w,
            paddle_height: s.left_paddle.h,
            score_left: s.left_score,
            score_right: s.right_score,
        }
    }
}

/// Everything a renderer needs before the first frame: arena, colors and HUD
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionSetup {
    pub arena_width: f32,
    pub arena_height: f32,
    pub fps: u32,
    pub palette: Palette,
    pub player_names: [String; 2],
    /// Center of each player's score text, left then right
    pub score_anchors: [(f32, f32); 2],
}

impl From<&GameConfig> for SessionSetup {
    fn from(config: &GameConfig) -> Self {
        let anchor = |side| {
            let at = config.score_anchor(side);
            (at.x, at.y)
        };
        Self {
            arena_width: config.arena_width,
            arena_height: config.arena_height,
            fps: config.fps,
            palette: config.palette,
            player_names: config.player_names.clone(),
            score_anchors: [anchor(Side::Left), anchor(Side::Right)],
        }
    }
}

impl SessionSetup {
    /// HUD text for one player, e.g. `Geek_1 : 3`
    pub fn score_label(&self, side: Side, score: u64) -> String {
        format!("{} : {}", self.player_names[side.index()], score)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum S2C {
    /// Sent once, before the first frame
    Setup(SessionSetup),

    /// One rendered tick
    Frame(FrameSnapshot),

    /// Session over, final score
    Stopped { score_left: u64, score_right: u64 },
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl C2S {
    /// Serialize C2S message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize C2S message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

impl S2C {
    /// Serialize S2C message to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize S2C message from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

// ============================================================================
// Stream framing: u32 little-endian length, then the postcard payload
// ============================================================================

fn write_framed<W: Write>(writer: &mut W, payload: &[u8]) -> io::Result<()> {
    if payload.len() > MAX_MESSAGE_LEN {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "message too large"));
    }
    let len = payload.len() as u32;
    writer.write_all(&len.to_le_bytes())?;
    writer.write_all(payload)?;
    writer.flush()
}

/// Largest payload accepted from a peer
pub const MAX_MESSAGE_LEN: usize = 64 * 1024;

fn read_framed<R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut len = [0u8; 4];
    reader.read_exact(&mut len)?;
    let len = u32::from_le_bytes(len) as usize;
    if len > MAX_MESSAGE_LEN {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("message of {len} bytes exceeds {MAX_MESSAGE_LEN}"),
        ));
    }
    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload)?;
    Ok(payload)
}

fn invalid_data(e: postcard::Error) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e.to_string())
}

/// Read one length-prefixed S2C message
pub fn read_message<R: Read>(reader: &mut R) -> io::Result<S2C> {
    let payload = read_framed(reader)?;
    S2C::from_bytes(&payload).map_err(invalid_data)
}

/// Read one length-prefixed C2S message
pub fn read_input<R: Read>(reader: &mut R) -> io::Result<C2S> {
    let payload = read_framed(reader)?;
    C2S::from_bytes(&payload).map_err(invalid_data)
}

/// Write one length-prefixed C2S message
pub fn write_input<W: Write>(writer: &mut W, msg: &C2S) -> io::Result<()> {
    let bytes = msg.to_bytes().map_err(invalid_data)?;
    write_framed(writer, &bytes)
}

/// Renderer that streams every frame to a byte sink
pub struct FrameWriter<W: Write> {
    writer: W,
    frames: u64,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, frames: 0 }
    }

    pub fn write_message(&mut self, msg: &S2C) -> Result<(), RenderError> {
        let bytes = msg
            .to_bytes()
            .map_err(|e| RenderError::Encode(e.to_string()))?;
        write_framed(&mut self.writer, &bytes)?;
        Ok(())
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for FrameWriter<W> {
    fn present(&mut self, frame: &RenderSnapshot) -> Result<(), RenderError> {
        self.write_message(&S2C::Frame(FrameSnapshot::from(frame)))?;
        self.frames += 1;
        if self.frames == 1 {
            log::debug!("first frame written");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::Rect;

    fn snapshot(tick: u64) -> RenderSnapshot {
        let mut ball = GameConfig::new().spawn_ball();
        ball.pos.x += tick as f32;
        RenderSnapshot {
            tick,
            left_paddle: Rect::new(20.0, 40.0, 10.0, 100.0),
            right_paddle: Rect::new(870.0, 0.0, 10.0, 100.0),
            ball_center: ball.pos,
            ball_radius: ball.radius,
            left_score: 2,
            right_score: 5,
        }
    }

    #[test]
    fn test_c2s_serialization() {
        let msg = C2S::Key {
            control: Control::P2Down,
            pressed: true,
        };
        let bytes = msg.to_bytes().expect("Serialization should succeed");
        let decoded = C2S::from_bytes(&bytes).expect("Deserialization should succeed");
        assert_eq!(decoded, msg);
        assert_eq!(InputEvent::from(decoded), InputEvent::press(Control::P2Down));
        assert_eq!(InputEvent::from(C2S::Quit), InputEvent::Quit);
    }

    #[test]
    fn test_frame_from_snapshot() {
        let frame = FrameSnapshot::from(&snapshot(3));
        assert_eq!(frame.tick, 3);
        assert_eq!(frame.ball_x, 453.0);
        assert_eq!(frame.ball_y, 300.0);
        assert_eq!(frame.paddle_left_y, 40.0);
        assert_eq!(frame.paddle_right_x, 870.0);
        assert_eq!((frame.score_left, frame.score_right), (2, 5));
    }

    #[test]
    fn test_frame_writer_streams_frames() {
        let mut writer = FrameWriter::new(Vec::new());
        writer.present(&snapshot(1)).expect("Write should succeed");
        writer.present(&snapshot(2)).expect("Write should succeed");
        writer
            .write_message(&S2C::Stopped {
                score_left: 2,
                score_right: 5,
            })
            .expect("Write should succeed");
        assert_eq!(writer.frames(), 2);

        let bytes = writer.into_inner();
        let mut reader = bytes.as_slice();
        match read_message(&mut reader).expect("First frame") {
            S2C::Frame(frame) => assert_eq!(frame.tick, 1),
            other => panic!("Unexpected message {other:?}"),
        }
        match read_message(&mut reader).expect("Second frame") {
            S2C::Frame(frame) => assert_eq!(frame.ball_x, 452.0),
            other => panic!("Unexpected message {other:?}"),
        }
        assert_eq!(
            read_message(&mut reader).expect("Final message"),
            S2C::Stopped {
                score_left: 2,
                score_right: 5
            }
        );
        assert!(read_message(&mut reader).is_err(), "Stream exhausted");
    }

    #[test]
    fn test_setup_carries_hud_and_palette() {
        let config = GameConfig::new();
        let mut writer = FrameWriter::new(Vec::new());
        writer
            .write_message(&S2C::Setup(SessionSetup::from(&config)))
            .expect("Write should succeed");
        assert_eq!(writer.frames(), 0, "Setup is not a frame");

        let bytes = writer.into_inner();
        let setup = match read_message(&mut bytes.as_slice()).expect("Setup message") {
            S2C::Setup(setup) => setup,
            other => panic!("Unexpected message {other:?}"),
        };
        assert_eq!((setup.arena_width, setup.arena_height), (900.0, 600.0));
        assert_eq!(setup.fps, 30);
        assert_eq!(setup.palette, config.palette);
        assert_eq!(setup.palette.background, [221, 190, 169]);
        assert_eq!(setup.score_anchors, [(100.0, 20.0), (800.0, 20.0)]);
        assert_eq!(setup.score_label(Side::Left, 3), "Geek_1 : 3");
        assert_eq!(setup.score_label(Side::Right, 0), "Geek_2 : 0");
    }

    #[test]
    fn test_input_stream() {
        let mut buf = Vec::new();
        let release = C2S::Key {
            control: Control::P1Up,
            pressed: false,
        };
        write_input(&mut buf, &release).unwrap();
        write_input(&mut buf, &C2S::Quit).unwrap();

        let mut reader = buf.as_slice();
        assert_eq!(read_input(&mut reader).unwrap(), release);
        assert_eq!(read_input(&mut reader).unwrap(), C2S::Quit);
    }

    #[test]
    fn test_truncated_payload_is_rejected() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&10u32.to_le_bytes());
        buf.extend_from_slice(&[0, 1]);
        let err = read_message(&mut buf.as_slice()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_oversized_length_prefix_is_rejected() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&u32::MAX.to_le_bytes());
        let err = read_message(&mut buf.as_slice()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
