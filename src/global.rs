//! Process-wide convenience generator
//!
//! Applications should normally build a [`SnowflakeGenerator`] at startup and
//! pass it down. For call sites that cannot be reached that way, a shared slot
//! holds one generator: the composition root can install its own instance, and
//! otherwise one is created on first use with datacenter 1 and worker 1.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::config::SnowflakeConfig;
use crate::error::Result;
use crate::extractor::SnowflakeParts;
use crate::generator::SnowflakeGenerator;

static GLOBAL: Lazy<RwLock<Option<Arc<SnowflakeGenerator>>>> = Lazy::new(|| RwLock::new(None));

/// Return the shared generator, creating a default one on first use
pub fn global_generator() -> Arc<SnowflakeGenerator> {
    if let Some(generator) = GLOBAL.read().as_ref() {
        return Arc::clone(generator);
    }

    let mut slot = GLOBAL.write();
    // Another thread may have filled the slot between the two locks
    if let Some(generator) = slot.as_ref() {
        return Arc::clone(generator);
    }
    let generator = Arc::new(SnowflakeGenerator::with_config(SnowflakeConfig::default()));
    debug!("global snowflake generator initialised");
    *slot = Some(Arc::clone(&generator));
    generator
}

/// Replace the shared generator with one owned by the caller
pub fn install_global_generator(generator: Arc<SnowflakeGenerator>) {
    debug!(
        datacenter_id = generator.datacenter_id(),
        worker_id = generator.worker_id(),
        "global snowflake generator installed"
    );
    *GLOBAL.write() = Some(generator);
}

/// Empty the shared slot; the next access creates a fresh generator
pub fn reset_global_generator() {
    debug!("global snowflake generator reset");
    GLOBAL.write().take();
}

/// Generate an ID from the shared generator
pub fn generate_snowflake_id() -> Result<u64> {
    global_generator().generate()
}

/// Generate a decimal string ID from the shared generator
pub fn generate_snowflake_id_str() -> Result<String> {
    global_generator().generate_as_string()
}

/// Decompose an ID using the shared generator's epoch
pub fn parse_snowflake_id(id: u64) -> SnowflakeParts {
    global_generator().parse(id)
}
