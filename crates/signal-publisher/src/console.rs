//! Console Publisher
//!
//! Dry-run destination: prints the post and its character count instead of
//! submitting it.

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Result;
use crate::{PublishedPost, Publisher};

pub const DRY_RUN_ID: &str = "dry-run";

pub struct ConsolePublisher<W: Write + Send = Stdout> {
    out: Mutex<W>,
}

impl ConsolePublisher<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsolePublisher<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<W: Write + Send> Publisher for ConsolePublisher<W> {
    async fn publish(&self, text: &str) -> Result<PublishedPost> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| io::Error::other("console output lock poisoned"))?;
        writeln!(out, "{}", text)?;
        writeln!(out, "{}", text.chars().count())?;
        out.flush()?;

        tracing::info!("Dry run - post not submitted");
        Ok(PublishedPost {
            id: DRY_RUN_ID.into(),
            text: text.into(),
        })
    }

    fn name(&self) -> &str {
        "console"
    }
}
