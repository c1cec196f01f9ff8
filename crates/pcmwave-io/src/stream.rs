//! Input/output endpoints: a named file or a standard stream.

use crate::{Error, Result};
use pcmwave_config::Settings;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, StdinLock, StdoutLock, Write};
use std::path::{Path, PathBuf};

/// Where input comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

/// Where output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// Standard output.
    Stdout,
    /// A file on disk.
    File(PathBuf),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("stdin"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sink::Stdout => f.write_str("stdout"),
            Sink::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// An open, readable endpoint.
pub enum Input {
    /// Locked standard input.
    Stdin(StdinLock<'static>),
    /// Buffered file.
    File(BufReader<File>),
}

/// An open, writable endpoint. Call [`Output::finish`] to flush.
pub enum Output {
    /// Locked standard output.
    Stdout(StdoutLock<'static>),
    /// Buffered file.
    File(BufWriter<File>),
}

impl Source {
    /// Open the endpoint for reading.
    pub fn open(&self) -> Result<Input> {
        match self {
            Source::Stdin => Ok(Input::Stdin(io::stdin().lock())),
            Source::File(path) => {
                let file = File::open(path).map_err(|source| Error::Open {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "opened input");
                Ok(Input::File(BufReader::new(file)))
            }
        }
    }

    /// File path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Source::Stdin => None,
            Source::File(path) => Some(path),
        }
    }
}

impl Sink {
    /// Create (or truncate) the endpoint for writing.
    pub fn create(&self) -> Result<Output> {
        match self {
            Sink::Stdout => Ok(Output::Stdout(io::stdout().lock())),
            Sink::File(path) => {
                let file = File::create(path).map_err(|source| Error::Create {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "created output");
                Ok(Output::File(BufWriter::new(file)))
            }
        }
    }

    /// File path, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Sink::Stdout => None,
            Sink::File(path) => Some(path),
        }
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Input::Stdin(s) => s.read(buf),
            Input::File(f) => f.read(buf),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(s) => s.write(buf),
            Output::File(f) => f.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(s) => s.flush(),
            Output::File(f) => f.flush(),
        }
    }
}

impl Output {
    /// Flush buffered bytes, surfacing any error that a drop would swallow.
    pub fn finish(mut self) -> Result<()> {
        self.flush()?;
        if let Output::File(f) = self {
            f.into_inner()
                .map_err(|e| Error::Io(e.into_error()))?
                .sync_all()?;
        }
        Ok(())
    }
}

/// Resolve optional input/output paths to concrete endpoints.
///
/// - input: the given path, else standard input when
///   `settings.streams.stdin_fallback` is set.
/// - output: the given path, else a name derived from the input file by
///   `settings.naming.policy` with `extension`, else standard output when
///   reading standard input and `settings.streams.stdout_fallback` is set.
pub fn resolve(
    input: Option<&Path>,
    output: Option<&Path>,
    extension: &str,
    settings: &Settings,
) -> Result<(Source, Sink)> {
    let source = match input {
        Some(path) => Source::File(path.to_path_buf()),
        None if settings.streams.stdin_fallback => Source::Stdin,
        None => return Err(Error::MissingPath("input")),
    };

    let sink = match (output, &source) {
        (Some(path), _) => Sink::File(path.to_path_buf()),
        (None, Source::File(path)) => {
            Sink::File(settings.naming.policy.output_path(path, extension))
        }
        (None, Source::Stdin) if settings.streams.stdout_fallback => Sink::Stdout,
        (None, Source::Stdin) => return Err(Error::MissingPath("output")),
    };

    tracing::debug!(%source, %sink, "resolved endpoints");
    Ok((source, sink))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcmwave_config::NamingPolicy;
    use tempfile::TempDir;

    #[test]
    fn explicit_paths_win() {
        let (src, sink) = resolve(
            Some(Path::new("a.wav")),
            Some(Path::new("b.txt")),
            "txt",
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(src, Source::File("a.wav".into()));
        assert_eq!(sink, Sink::File("b.txt".into()));
    }

    #[test]
    fn output_derived_from_input() {
        let settings = Settings::default();
        let (_, sink) = resolve(Some(Path::new("take1.wav")), None, "txt", &settings).unwrap();
        assert_eq!(sink, Sink::File("take1.wav.txt".into()));

        let settings = settings.with_naming(NamingPolicy::Replace);
        let (_, sink) = resolve(Some(Path::new("take1.wav")), None, "txt", &settings).unwrap();
        assert_eq!(sink, Sink::File("take1.txt".into()));
    }

    #[test]
    fn stdin_falls_back_to_stdout() {
        let (src, sink) = resolve(None, None, "wav", &Settings::default()).unwrap();
        assert_eq!(src, Source::Stdin);
        assert_eq!(sink, Sink::Stdout);
        assert_eq!(src.to_string(), "stdin");
        assert_eq!(sink.to_string(), "stdout");
    }

    #[test]
    fn fallbacks_can_be_disabled() {
        let no_stdin = Settings::default().with_stream_fallback(false, true);
        assert!(matches!(
            resolve(None, None, "wav", &no_stdin),
            Err(Error::MissingPath("input"))
        ));

        let no_stdout = Settings::default().with_stream_fallback(true, false);
        assert!(matches!(
            resolve(None, None, "wav", &no_stdout),
            Err(Error::MissingPath("output"))
        ));

        // a file sink is still allowed for stdin input
        let (_, sink) = resolve(None, Some(Path::new("x.wav")), "wav", &no_stdout).unwrap();
        assert_eq!(sink, Sink::File("x.wav".into()));
    }

    #[test]
    fn open_missing_file_names_path() {
        let err = Source::File("/nonexistent/in.wav".into()).open().err().unwrap();
        assert!(matches!(err, Error::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/in.wav"));
    }

    #[test]
    fn file_endpoints_round_trip_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bytes.bin");

        let sink = Sink::File(path.clone());
        let mut out = sink.create().unwrap();
        out.write_all(b"hello").unwrap();
        out.finish().unwrap();

        let mut input = Source::File(path).open().unwrap();
        let mut buf = String::new();
        input.read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "hello");
    }
}
