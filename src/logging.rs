//! ロギング初期化ユーティリティ

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG` and defaults to `info`. Calling this
/// more than once is harmless (subsequent calls are no-ops), which keeps
/// test setups simple.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_can_be_called_twice() {
        init();
        init();
    }
}
