// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Multimodal capture: the staging buffer for one pending AI request and the
//! press-and-hold voice recorder.

use crate::models::MultimodalPart;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Container format of every staged clip, whatever the device codec.
pub const AUDIO_MIME: &str = "audio/webm";

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("nothing staged: enter text, attach a photo or record a voice memo")]
    NothingStaged,
    #[error("microphone unavailable: {0}")]
    MicrophoneUnavailable(String),
    #[error("already recording")]
    AlreadyRecording,
    #[error("not recording")]
    NotRecording,
    #[error("unsupported image type for '{0}'")]
    UnsupportedImage(String),
    #[error("could not read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedImage {
    pub mime_type: String,
    pub data: String, // base64
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub mime_type: String,
    pub data: String, // base64
}

#[derive(Debug, Default)]
pub struct Staging {
    text: String,
    image: Option<StagedImage>,
    audio: Option<AudioClip>,
}

pub fn image_mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "heic" => "image/heic",
        "heif" => "image/heif",
        _ => return None,
    };
    Some(mime)
}

impl Staging {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// Stage an image, replacing any previously staged one.
    pub fn stage_image(&mut self, bytes: &[u8], mime_type: &str) {
        self.image = Some(StagedImage {
            mime_type: mime_type.to_string(),
            data: BASE64.encode(bytes),
        });
    }

    pub fn stage_image_file(&mut self, path: &Path) -> Result<(), CaptureError> {
        let mime = image_mime_for(path)
            .ok_or_else(|| CaptureError::UnsupportedImage(path.display().to_string()))?;
        let bytes = std::fs::read(path).map_err(|source| CaptureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.stage_image(&bytes, mime);
        Ok(())
    }

    pub fn image(&self) -> Option<&StagedImage> {
        self.image.as_ref()
    }

    pub fn clear_image(&mut self) {
        self.image = None;
    }

    /// Stage a finished clip, replacing any previously staged one.
    pub fn stage_audio(&mut self, clip: AudioClip) {
        self.audio = Some(clip);
    }

    pub fn audio(&self) -> Option<&AudioClip> {
        self.audio.as_ref()
    }

    pub fn discard_audio(&mut self) {
        self.audio = None;
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty() && self.image.is_none() && self.audio.is_none()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.image = None;
        self.audio = None;
    }

    /// Staged content in request order: text, image, audio.
    pub fn parts(&self) -> Vec<MultimodalPart> {
        let mut parts = Vec::with_capacity(3);
        let text = self.text();
        if !text.is_empty() {
            parts.push(MultimodalPart::text(text));
        }
        if let Some(img) = &self.image {
            parts.push(MultimodalPart::inline(&img.mime_type, &img.data));
        }
        if let Some(clip) = &self.audio {
            parts.push(MultimodalPart::inline(&clip.mime_type, &clip.data));
        }
        parts
    }

    pub fn take_parts(&self) -> Result<Vec<MultimodalPart>, CaptureError> {
        let parts = self.parts();
        if parts.is_empty() {
            return Err(CaptureError::NothingStaged);
        }
        Ok(parts)
    }
}

/// Audio input device driven by the recorder.
pub trait Microphone {
    fn acquire(&mut self) -> Result<(), CaptureError>;
    /// Next captured chunk, `None` once the input is drained.
    fn next_chunk(&mut self) -> Option<Vec<u8>>;
    fn release(&mut self);
}

#[derive(Debug, Default)]
pub enum RecorderState {
    #[default]
    Idle,
    Recording {
        chunks: Vec<Vec<u8>>,
    },
}

#[derive(Debug, Default)]
pub struct Recorder {
    state: RecorderState,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecorderState::Recording { .. })
    }

    /// Press: acquire the microphone and start collecting chunks.
    pub fn start(&mut self, mic: &mut dyn Microphone) -> Result<(), CaptureError> {
        if self.is_recording() {
            return Err(CaptureError::AlreadyRecording);
        }
        mic.acquire()?;
        self.state = RecorderState::Recording { chunks: Vec::new() };
        Ok(())
    }

    pub fn push_chunk(&mut self, chunk: &[u8]) -> Result<(), CaptureError> {
        match &mut self.state {
            RecorderState::Recording { chunks } => {
                chunks.push(chunk.to_vec());
                Ok(())
            }
            RecorderState::Idle => Err(CaptureError::NotRecording),
        }
    }

    /// Release: stop, free the microphone and produce one encoded clip.
    pub fn stop(&mut self, mic: &mut dyn Microphone) -> Result<AudioClip, CaptureError> {
        let chunks = match std::mem::take(&mut self.state) {
            RecorderState::Recording { chunks } => chunks,
            RecorderState::Idle => return Err(CaptureError::NotRecording),
        };
        mic.release();
        Ok(AudioClip {
            mime_type: AUDIO_MIME.to_string(),
            data: BASE64.encode(chunks.concat()),
        })
    }

    /// Full press-and-release cycle: record until the microphone is drained.
    pub fn record_from(&mut self, mic: &mut dyn Microphone) -> Result<AudioClip, CaptureError> {
        self.start(mic)?;
        while let Some(chunk) = mic.next_chunk() {
            self.push_chunk(&chunk)?;
        }
        self.stop(mic)
    }
}

/// Replays a recorded audio file as microphone input.
pub struct FileMicrophone {
    path: PathBuf,
    chunk_size: usize,
    file: Option<File>,
}

impl FileMicrophone {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileMicrophone {
            path: path.into(),
            chunk_size: 16 * 1024,
            file: None,
        }
    }
}

impl Microphone for FileMicrophone {
    fn acquire(&mut self) -> Result<(), CaptureError> {
        let f = File::open(&self.path).map_err(|e| {
            CaptureError::MicrophoneUnavailable(format!("{}: {}", self.path.display(), e))
        })?;
        self.file = Some(f);
        Ok(())
    }

    fn next_chunk(&mut self) -> Option<Vec<u8>> {
        let f = self.file.as_mut()?;
        let mut buf = vec![0u8; self.chunk_size];
        match f.read(&mut buf) {
            Ok(0) => None,
            Ok(n) => {
                buf.truncate(n);
                Some(buf)
            }
            Err(e) => {
                log::warn!("audio read from {} stopped: {}", self.path.display(), e);
                None
            }
        }
    }

    fn release(&mut self) {
        self.file = None;
    }
}
