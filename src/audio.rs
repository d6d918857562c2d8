//! Sound through the default output device. Every clip is decoded once at
//! startup. A missing file or a machine without speakers only costs the
//! affected sounds: a warning is logged and the game plays on in silence.

use std::fs::File;
use std::io::BufReader;

use log::{debug, warn};
use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::services::{Audio, Sound, Track};

type Clip = Buffered<Decoder<BufReader<File>>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Music {
    Stopped,
    Playing(Track),
    Paused(Track),
}

struct Output {
    // Dropping the stream silences every sink
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Output {
    fn open() -> Option<Self> {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Some(Output { _stream: stream, handle }),
            Err(e) => {
                warn!("No audio output available, playing without sound: {}", e);
                None
            }
        }
    }
}

pub struct TermAudio {
    output: Option<Output>,
    background: Option<Clip>,
    ding: Option<Clip>,
    collision: Option<Clip>,
    music_sink: Option<Sink>,
    music: Music,
}

impl TermAudio {
    pub fn new() -> Self {
        Self::with_output(Output::open())
    }

    fn with_output(output: Option<Output>) -> Self {
        TermAudio {
            output,
            background: load(Track::Background.resource()),
            ding: load(Sound::Ding.resource()),
            collision: load(Sound::Collision.resource()),
            music_sink: None,
            music: Music::Stopped,
        }
    }

    fn track_clip(&self, track: Track) -> Option<&Clip> {
        match track {
            Track::Background => self.background.as_ref(),
        }
    }

    fn sound_clip(&self, sound: Sound) -> Option<&Clip> {
        match sound {
            Sound::Ding => self.ding.as_ref(),
            Sound::Collision => self.collision.as_ref(),
        }
    }

    fn new_sink(&self) -> Option<Sink> {
        let output = self.output.as_ref()?;
        match Sink::try_new(&output.handle) {
            Ok(sink) => Some(sink),
            Err(e) => {
                warn!("Could not open an audio sink: {}", e);
                None
            }
        }
    }
}

impl Audio for TermAudio {
    fn play_music_loop(&mut self, track: Track) {
        debug!("Looping {}", track.resource());
        self.music = Music::Playing(track);

        if let Some(old) = self.music_sink.take() {
            old.stop();
        }
        let clip = match self.track_clip(track) {
            Some(clip) => clip.clone(),
            None => return,
        };
        if let Some(sink) = self.new_sink() {
            sink.append(clip.repeat_infinite());
            self.music_sink = Some(sink);
        }
    }

    fn pause_music(&mut self) {
        if let Music::Playing(track) = self.music {
            debug!("Music paused");
            self.music = Music::Paused(track);
            if let Some(sink) = &self.music_sink {
                sink.pause();
            }
        }
    }

    fn resume_music(&mut self) {
        if let Music::Paused(track) = self.music {
            debug!("Music resumed");
            self.music = Music::Playing(track);
            if let Some(sink) = &self.music_sink {
                sink.play();
            }
        }
    }

    fn play_one_shot(&mut self, sound: Sound) {
        debug!("Playing {}", sound.resource());
        let clip = match self.sound_clip(sound) {
            Some(clip) => clip.clone(),
            None => return,
        };
        // Each effect gets its own sink so overlapping sounds mix
        if let Some(sink) = self.new_sink() {
            sink.append(clip);
            sink.detach();
        }
    }
}

fn load(path: &str) -> Option<Clip> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            warn!("Sound file {} is unavailable, carrying on without it: {}", path, e);
            return None;
        }
    };

    match Decoder::new(BufReader::new(file)) {
        Ok(decoder) => Some(decoder.buffered()),
        Err(e) => {
            warn!("Could not decode {}, carrying on without it: {}", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn music_only_resumes_after_a_pause() {
        let mut audio = TermAudio::with_output(None);
        audio.resume_music();
        assert_eq!(audio.music, Music::Stopped);

        audio.play_music_loop(Track::Background);
        audio.pause_music();
        assert_eq!(audio.music, Music::Paused(Track::Background));
        audio.pause_music();
        assert_eq!(audio.music, Music::Paused(Track::Background));

        audio.resume_music();
        assert_eq!(audio.music, Music::Playing(Track::Background));
    }

    #[test]
    fn missing_files_and_device_stay_silent() {
        assert!(load("resources/no-such-sound.wav").is_none());

        let mut audio = TermAudio::with_output(None);
        audio.play_music_loop(Track::Background);
        audio.play_one_shot(Sound::Ding);
        audio.play_one_shot(Sound::Collision);
        assert!(audio.music_sink.is_none());
        assert_eq!(audio.music, Music::Playing(Track::Background));
    }
}
