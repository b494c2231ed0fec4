//! Snapshot command handler.

use std::io::Write;

use anyhow::{Context, Result};
use timestable_core::Coord;
use timestable_core::snapshot::{self, SnapshotOptions};

pub fn run(selection: Coord, borders: bool) -> Result<()> {
    tracing::debug!(%selection, borders, "rendering snapshot");
    let text = snapshot::render(selection, SnapshotOptions { borders });

    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .context("write snapshot to stdout")
}
