use std::io::{self, Result, Write};

/// Controls where logs for a specific channel are routed to
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Policy {
    Stdout,
    Stderr,
    Silent,
}

pub struct Policies {
    /// Whether to print a section header like "----- LARGEST FILES -----".
    pub opheader: Policy,

    /// The actual answers: paths, sizes, counts.
    pub results: Policy,

    /// Side remarks, like which tree got loaded.
    pub notes: Policy,
}

impl Default for Policies {
    fn default() -> Self {
        Self {
            opheader: Policy::Stdout,
            results: Policy::Stdout,
            notes: Policy::Stderr,
        }
    }
}

/// Somewhere bytes end up. Either the real process streams, or memory.
pub enum Sink {
    Stdout(io::Stdout),
    Stderr(io::Stderr),
    Memory(Vec<u8>),
}

impl Sink {
    /// Everything written so far, if this sink records to memory.
    pub fn recorded(&self) -> Option<&str> {
        match self {
            Self::Memory(buf) => std::str::from_utf8(buf).ok(),
            _ => None,
        }
    }
}

impl Write for Sink {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        match self {
            Self::Stdout(w) => w.write(bytes),
            Self::Stderr(w) => w.write(bytes),
            Self::Memory(w) => w.write(bytes),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::Stderr(w) => w.flush(),
            Self::Memory(_) => Ok(()),
        }
    }
}

pub enum LogWriter<'a> {
    Stdout(&'a mut Sink),
    Stderr(&'a mut Sink),
    Silent,
}

impl Write for LogWriter<'_> {
    fn write(&mut self, bytes: &[u8]) -> Result<usize> {
        match self {
            Self::Stdout(w) => w.write(bytes),
            Self::Stderr(w) => w.write(bytes),
            Self::Silent => Ok(bytes.len()),
        }
    }

    fn flush(&mut self) -> Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::Stderr(w) => w.flush(),
            Self::Silent => Ok(()),
        }
    }
}

pub struct Logger {
    pub stdout: Sink,
    pub stderr: Sink,
    pub pol: Policies,
}

impl Logger {
    pub fn new(stdout: Sink, stderr: Sink) -> Self {
        Self {
            stdout,
            stderr,
            pol: Policies::default(),
        }
    }

    /// Log to the real process output streams.
    pub fn new_real() -> Self {
        Self::new(Sink::Stdout(io::stdout()), Sink::Stderr(io::stderr()))
    }

    /// Record everything in memory, for tests.
    pub fn new_vec() -> Self {
        Self::new(Sink::Memory(vec![]), Sink::Memory(vec![]))
    }

    /// What's been recorded to (stdout, stderr). Empty for real streams.
    pub fn recorded(&self) -> (&str, &str) {
        (
            self.stdout.recorded().unwrap_or(""),
            self.stderr.recorded().unwrap_or(""),
        )
    }

    fn lw_stdout(&mut self) -> LogWriter<'_> {
        LogWriter::Stdout(&mut self.stdout)
    }
    fn lw_stderr(&mut self) -> LogWriter<'_> {
        LogWriter::Stderr(&mut self.stderr)
    }
    fn lw_for(&mut self, pol: Policy) -> LogWriter<'_> {
        match pol {
            Policy::Stdout => self.lw_stdout(),
            Policy::Stderr => self.lw_stderr(),
            Policy::Silent => LogWriter::Silent,
        }
    }

    pub fn opheader(&mut self) -> LogWriter<'_> {
        self.lw_for(self.pol.opheader)
    }

    pub fn results(&mut self) -> LogWriter<'_> {
        self.lw_for(self.pol.results)
    }

    pub fn notes(&mut self) -> LogWriter<'_> {
        self.lw_for(self.pol.notes)
    }
}
