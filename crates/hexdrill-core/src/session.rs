//! The drill session: configuration, log opening, and the question loop.
//!
//! A session repeats generate, read, grade, report until its input runs dry.
//! End-of-input is the normal way out and is answered with `bye`.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::Rng;

use crate::error::DrillError;
use crate::grade::{grade, Verdict};
use crate::kind::Mode;
use crate::question::Question;
use crate::transcript::Transcript;

/// Settings for one drill run, fixed for the life of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrillConfig {
    /// Enabled question kinds.
    pub mode: Mode,
    /// Append the time taken to each verdict.
    pub report_time: bool,
    /// Where to mirror the transcript, if anywhere.
    pub log_path: Option<PathBuf>,
}

impl DrillConfig {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_timing(mut self, report_time: bool) -> Self {
        self.report_time = report_time;
        self
    }

    #[must_use]
    pub fn with_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Reject configurations that cannot produce a question.
    pub fn validate(&self) -> Result<(), DrillError> {
        if self.mode.is_empty() {
            return Err(DrillError::EmptyMode);
        }
        Ok(())
    }
}

/// Create the log file, refusing to touch one that already exists.
pub fn open_log(path: &Path) -> Result<File, DrillError> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            let path = path.to_path_buf();
            let err = match e.kind() {
                io::ErrorKind::PermissionDenied => DrillError::LogPermissionDenied { path },
                io::ErrorKind::AlreadyExists => DrillError::LogExists { path },
                _ => DrillError::LogOpen { path, source: e },
            };
            tracing::debug!(error = %err, "log open failed");
            err
        })
}

/// Tally of one session, reported through tracing when the session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Questions that received a reply.
    pub asked: u32,
    /// Replies graded right.
    pub right: u32,
}

impl SessionStats {
    fn record(&mut self, verdict: Verdict) {
        self.asked += 1;
        if verdict.is_right() {
            self.right += 1;
        }
    }
}

/// A running drill.
pub struct DrillSession<R: Rng> {
    mode: Mode,
    report_time: bool,
    rng: R,
    stats: SessionStats,
}

impl<R: Rng> DrillSession<R> {
    /// Create a session from a validated config and a random source.
    pub fn new(config: &DrillConfig, rng: R) -> Result<Self, DrillError> {
        config.validate()?;
        Ok(Self {
            mode: config.mode,
            report_time: config.report_time,
            rng,
            stats: SessionStats::default(),
        })
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Pose one question and grade the reply.
    ///
    /// Returns `None` once `input` is exhausted, after writing the farewell.
    pub fn ask<I, O, L>(
        &mut self,
        input: &mut I,
        transcript: &mut Transcript<O, L>,
    ) -> Result<Option<Verdict>, DrillError>
    where
        I: BufRead,
        O: Write,
        L: Write,
    {
        let question = Question::generate(self.mode, &mut self.rng);
        tracing::debug!(kind = %question.kind, answer = question.answer, "question");
        transcript.emit(&question.prompt())?;

        let start = Instant::now();
        let mut reply = Vec::new();
        if input.read_until(b'\n', &mut reply)? == 0 {
            transcript.emit("\nbye\n")?;
            return Ok(None);
        }
        transcript.echo(&reply)?;
        let verdict = grade(&question, &reply);
        let elapsed = start.elapsed();

        self.stats.record(verdict);
        tracing::debug!(%verdict, elapsed_ms = elapsed.as_millis() as u64, "graded");

        let line = if self.report_time {
            format!("{verdict} [{:.6} sec]\n", elapsed.as_secs_f64())
        } else {
            format!("{verdict}\n")
        };
        transcript.emit(&line)?;
        Ok(Some(verdict))
    }

    /// Drill until end-of-input.
    pub fn run<I, O, L>(
        &mut self,
        input: &mut I,
        transcript: &mut Transcript<O, L>,
    ) -> Result<SessionStats, DrillError>
    where
        I: BufRead,
        O: Write,
        L: Write,
    {
        tracing::info!(mode = %self.mode, timed = self.report_time, "drill started");
        while self.ask(input, transcript)?.is_some() {}
        tracing::info!(
            asked = self.stats.asked,
            right = self.stats.right,
            "drill finished"
        );
        Ok(self.stats)
    }
}
