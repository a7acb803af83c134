use std::{
    path::PathBuf,
    process::{Child, Command, Stdio},
};

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::{MediaElement, PlaybackError};

/// Connection to mpv's JSON IPC socket. The stream is kept between
/// commands. Only the first connect waits for mpv to create the socket;
/// once a connection was lost, commands fail after a single attempt.
struct IpcChannel {
    socket: PathBuf,
    #[cfg(unix)]
    stream: Option<std::os::unix::net::UnixStream>,
    connected_once: bool,
}

impl IpcChannel {
    fn new(socket: PathBuf) -> Self {
        Self {
            socket,
            #[cfg(unix)]
            stream: None,
            connected_once: false,
        }
    }

    #[cfg(unix)]
    fn send(&mut self, args: Value) -> Result<(), PlaybackError> {
        use std::io::Write;

        let line = format!("{}\n", json!({ "command": args }));
        debug!(command = %line.trim_end(), "mpv");
        let stream = self.connect()?;
        if let Err(e) = stream.write_all(line.as_bytes()) {
            self.stream = None;
            return Err(e.into());
        }
        self.drain_replies();
        Ok(())
    }

    #[cfg(not(unix))]
    fn send(&mut self, _args: Value) -> Result<(), PlaybackError> {
        Err(PlaybackError::Backend(
            "mpv IPC needs a Unix domain socket".into(),
        ))
    }

    #[cfg(unix)]
    fn connect(&mut self) -> Result<&mut std::os::unix::net::UnixStream, PlaybackError> {
        use std::{os::unix::net::UnixStream, thread, time::Duration};

        if self.stream.is_none() {
            // mpv creates the socket shortly after start-up.
            let attempts = if self.connected_once { 1 } else { 20 };
            for attempt in 0..attempts {
                if attempt > 0 {
                    thread::sleep(Duration::from_millis(50));
                }
                if let Ok(s) = UnixStream::connect(&self.socket) {
                    s.set_nonblocking(true)?;
                    self.stream = Some(s);
                    self.connected_once = true;
                    break;
                }
            }
        }
        self.stream
            .as_mut()
            .ok_or_else(|| PlaybackError::Backend("mpv IPC socket not available".into()))
    }

    // mpv answers every command and pushes events; unread replies would
    // eventually fill the socket buffer.
    #[cfg(unix)]
    fn drain_replies(&mut self) {
        use std::io::{ErrorKind, Read};

        let Some(stream) = self.stream.as_mut() else {
            return;
        };
        let mut buf = [0u8; 4096];
        loop {
            match stream.read(&mut buf) {
                Ok(0) => {
                    self.stream = None;
                    break;
                }
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::WouldBlock => break,
                Err(_) => {
                    self.stream = None;
                    break;
                }
            }
        }
    }
}

/// An idle `mpv` process driven over its JSON IPC socket.
pub struct MpvElement {
    child: Child,
    ipc: IpcChannel,
    source: Option<String>,
    playing: bool,
}

impl MpvElement {
    pub fn spawn(program: &str, socket: PathBuf) -> Result<Self, PlaybackError> {
        let child = Command::new(program)
            .arg("--idle=yes")
            .arg("--no-video")
            .arg("--no-terminal")
            .arg("--pause")
            .arg(format!("--input-ipc-server={}", socket.display()))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        info!(pid = child.id(), socket = %socket.display(), "started mpv");
        Ok(Self {
            child,
            ipc: IpcChannel::new(socket),
            source: None,
            playing: false,
        })
    }
}

impl MediaElement for MpvElement {
    fn set_source(&mut self, url: &str) -> Result<(), PlaybackError> {
        self.ipc.send(json!(["set_property", "pause", true]))?;
        self.ipc.send(json!(["loadfile", url, "replace"]))?;
        self.source = Some(url.to_string());
        self.playing = false;
        Ok(())
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        if self.source.is_none() {
            return Err(PlaybackError::NoSource);
        }
        self.ipc.send(json!(["set_property", "pause", false]))?;
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlaybackError> {
        self.ipc.send(json!(["set_property", "pause", true]))?;
        self.playing = false;
        Ok(())
    }

    fn seek_to_start(&mut self) -> Result<(), PlaybackError> {
        self.ipc.send(json!(["seek", 0, "absolute"]))
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Drop for MpvElement {
    fn drop(&mut self) {
        if let Err(e) = self.ipc.send(json!(["quit"])) {
            warn!(error = %e, "mpv quit command failed; killing process");
            let _ = self.child.kill();
        }
        let _ = self.child.wait();
        let _ = std::fs::remove_file(&self.ipc.socket);
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::{
        io::{BufRead, BufReader},
        os::unix::net::UnixListener,
        time::{Duration, Instant},
    };

    #[test]
    fn commands_reuse_one_connection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mpv.sock");
        let listener = UnixListener::bind(&path).unwrap();
        let mut ipc = IpcChannel::new(path);
        ipc.send(json!(["set_property", "pause", true])).unwrap();
        let (conn, _) = listener.accept().unwrap();
        ipc.send(json!(["seek", 0, "absolute"])).unwrap();

        let mut lines = BufReader::new(conn).lines();
        let first: Value = serde_json::from_str(&lines.next().unwrap().unwrap()).unwrap();
        let second: Value = serde_json::from_str(&lines.next().unwrap().unwrap()).unwrap();
        assert_eq!(first, json!({ "command": ["set_property", "pause", true] }));
        assert_eq!(second, json!({ "command": ["seek", 0, "absolute"] }));
        listener.set_nonblocking(true).unwrap();
        assert!(listener.accept().is_err());
    }

    #[test]
    fn lost_connection_fails_without_waiting() {
        let dir = tempfile::tempdir().unwrap();
        let mut ipc = IpcChannel::new(dir.path().join("gone.sock"));
        ipc.connected_once = true;
        let started = Instant::now();
        assert!(matches!(
            ipc.send(json!(["set_property", "pause", false])),
            Err(PlaybackError::Backend(_))
        ));
        assert!(started.elapsed() < Duration::from_millis(200));
    }
}
