/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Create a subscriber for unit tests.
///
/// The returned guard installs the subscriber for the current thread only, so concurrently
/// running tests do not conflict. Set `RUST_LOG=densemat=debug` to see rejected operations.
pub(crate) fn init_test_subscriber() -> tracing::subscriber::DefaultGuard {
    let fmt_layer = fmt::layer().with_target(true).with_test_writer();

    let filter_layer = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .set_default()
}
