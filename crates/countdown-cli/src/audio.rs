use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use countdown_engine::{Alert, Error, Result};
use rodio::{Decoder, OutputStream, Sink};
use tracing::debug;

/// Plays a bell sound file on the default output device.
pub struct BellAlert {
    path: PathBuf,
}

impl BellAlert {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Alert for BellAlert {
    /// Decode the file and block until the sink has drained.
    fn play(&mut self) -> Result<()> {
        let file = File::open(&self.path).map_err(|e| {
            Error::alert(format!("cannot open {}: {}", self.path.display(), e))
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| {
            Error::alert(format!("cannot decode {}: {}", self.path.display(), e))
        })?;

        let (_stream, stream_handle) = OutputStream::try_default().map_err(Error::alert)?;
        let sink = Sink::try_new(&stream_handle).map_err(Error::alert)?;

        debug!(path = %self.path.display(), "playing alert");
        sink.append(source);
        sink.sleep_until_end();
        Ok(())
    }
}
