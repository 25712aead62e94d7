//! # Observability & Tracing
//!
//! Library code only emits `tracing` events; installing a subscriber is the binary's job.
//!
//! ## What Gets Traced
//!
//! - `DEBUG Clone with patch prototype="SmartPhone" patch=SmartPhoneUpdate { .. }`
//! - `DEBUG Erased clone prototype="DeepStore"`
//! - `WARN Type mismatch expected=".." found=".."`
//!
//! ```bash
//! # Walkthrough only
//! RUST_LOG=info cargo run -p prototype-sample
//!
//! # Include every clone
//! RUST_LOG=debug cargo run -p prototype-sample
//! ```

/// Initializes structured logging, filtered through the `RUST_LOG` environment variable.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
