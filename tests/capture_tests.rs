// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::collections::VecDeque;
use std::io::Write;
use tempfile::NamedTempFile;
use yuanbook::capture::{
    AUDIO_MIME, CaptureError, FileMicrophone, Microphone, Recorder, Staging,
};
use yuanbook::models::MultimodalPart;

struct FakeMic {
    deny: bool,
    chunks: VecDeque<Vec<u8>>,
    held: bool,
}

impl FakeMic {
    fn with(chunks: &[&[u8]]) -> Self {
        FakeMic {
            deny: false,
            chunks: chunks.iter().map(|c| c.to_vec()).collect(),
            held: false,
        }
    }

    fn denied() -> Self {
        FakeMic {
            deny: true,
            chunks: VecDeque::new(),
            held: false,
        }
    }
}

impl Microphone for FakeMic {
    fn acquire(&mut self) -> Result<(), CaptureError> {
        if self.deny {
            return Err(CaptureError::MicrophoneUnavailable("permission denied".into()));
        }
        self.held = true;
        Ok(())
    }

    fn next_chunk(&mut self) -> Option<Vec<u8>> {
        self.chunks.pop_front()
    }

    fn release(&mut self) {
        self.held = false;
    }
}

#[test]
fn empty_or_blank_staging_is_rejected() {
    let mut s = Staging::new();
    assert!(matches!(s.take_parts(), Err(CaptureError::NothingStaged)));
    s.set_text("   \n ");
    assert!(s.is_empty());
    assert!(matches!(s.take_parts(), Err(CaptureError::NothingStaged)));
}

#[test]
fn parts_are_trimmed_and_ordered_text_image_audio() {
    let mut s = Staging::new();
    s.set_text("  milk tea 15  ");
    s.stage_image(b"\x89PNG", "image/png");
    let mut rec = Recorder::new();
    let clip = rec.record_from(&mut FakeMic::with(&[b"ab", b"cd"])).unwrap();
    s.stage_audio(clip);

    let parts = s.take_parts().unwrap();
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], MultimodalPart::text("milk tea 15"));
    assert_eq!(parts[1], MultimodalPart::inline("image/png", BASE64.encode(b"\x89PNG")));
    assert_eq!(parts[2].mime_type(), Some(AUDIO_MIME));
}

#[test]
fn new_image_replaces_old_and_can_be_cleared() {
    let mut s = Staging::new();
    s.stage_image(b"one", "image/jpeg");
    s.stage_image(b"two", "image/png");
    let img = s.image().unwrap();
    assert_eq!(img.mime_type, "image/png");
    assert_eq!(img.data, BASE64.encode(b"two"));
    s.clear_image();
    assert!(s.is_empty());
}

#[test]
fn image_file_mime_comes_from_extension() {
    let mut f = tempfile::Builder::new().suffix(".JPG").tempfile().unwrap();
    f.write_all(b"jpegbytes").unwrap();
    let mut s = Staging::new();
    s.stage_image_file(f.path()).unwrap();
    assert_eq!(s.image().unwrap().mime_type, "image/jpeg");

    let other = NamedTempFile::new().unwrap();
    assert!(matches!(
        s.stage_image_file(other.path()),
        Err(CaptureError::UnsupportedImage(_))
    ));
    // the earlier image is still staged
    assert!(s.image().is_some());
}

#[test]
fn recorder_concatenates_chunks_and_returns_to_idle() {
    let mut mic = FakeMic::with(&[b"hel", b"lo ", b"world"]);
    let mut rec = Recorder::new();
    rec.start(&mut mic).unwrap();
    assert!(rec.is_recording());
    assert!(matches!(rec.start(&mut mic), Err(CaptureError::AlreadyRecording)));
    while let Some(c) = mic.next_chunk() {
        rec.push_chunk(&c).unwrap();
    }
    let clip = rec.stop(&mut mic).unwrap();
    assert!(!rec.is_recording());
    assert!(!mic.held);
    assert_eq!(clip.mime_type, "audio/webm");
    assert_eq!(BASE64.decode(clip.data).unwrap(), b"hello world");
    assert!(matches!(rec.stop(&mut mic), Err(CaptureError::NotRecording)));
    assert!(matches!(rec.push_chunk(b"x"), Err(CaptureError::NotRecording)));
}

#[test]
fn microphone_denial_leaves_nothing_staged() {
    let mut rec = Recorder::new();
    let mut s = Staging::new();
    let err = rec.record_from(&mut FakeMic::denied()).unwrap_err();
    assert!(matches!(err, CaptureError::MicrophoneUnavailable(_)));
    assert!(!rec.is_recording());
    assert!(s.audio().is_none());
    s.set_text("x");
    assert_eq!(s.parts().len(), 1);
}

#[test]
fn file_microphone_replays_file_contents() {
    let mut f = NamedTempFile::new().unwrap();
    let payload = vec![7u8; 40_000];
    f.write_all(&payload).unwrap();
    f.flush().unwrap();

    let mut rec = Recorder::new();
    let clip = rec.record_from(&mut FileMicrophone::new(f.path())).unwrap();
    assert_eq!(BASE64.decode(clip.data).unwrap(), payload);

    let mut missing = FileMicrophone::new(f.path().with_extension("missing"));
    assert!(matches!(
        rec.record_from(&mut missing),
        Err(CaptureError::MicrophoneUnavailable(_))
    ));
}
