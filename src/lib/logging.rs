//! Browser logging. `tracing` events go to the devtools console and panics are
//! reported with a readable stack instead of `unreachable executed`.

use super::config::AppConfig;
use tracing_wasm::{WASMLayerConfigBuilder, set_as_global_default_with_config};

/// Installs the panic hook and the console subscriber. Call once, before mount.
pub fn init(config: &AppConfig) {
    console_error_panic_hook::set_once();

    let layer_config = WASMLayerConfigBuilder::new()
        .set_max_level(config.tracing_level())
        .set_report_logs_in_timings(false)
        .build();
    set_as_global_default_with_config(layer_config);
}
