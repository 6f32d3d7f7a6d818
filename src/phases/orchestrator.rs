//! Orchestrator for a complete application build
//!
//! This module coordinates all phases to provide a clean API for the whole
//! build. The binary calls `execute`; tests can call `execute_with_manager`
//! to supply an artifact manager with a custom fetcher.

use super::{phase1, phase2, phase3, phase4, phase5};
use crate::application::Application;
use crate::config::BuilderConfig;
use crate::error::Result;
use crate::repository::ArtifactManager;

/// Execute the complete build (Phases 1-5)
///
/// 1. Create the artifact manager from the configuration
/// 2. Discover feature files
/// 3. Read and sort the features
/// 4. Assemble them into an application
/// 5. Apply launchpad defaults
/// 6. Write the application to the configured output
///
/// Returns the application that was written.
pub fn execute(config: &BuilderConfig) -> Result<Application> {
    let manager = ArtifactManager::new(&config.artifact_manager_config())?;
    execute_with_manager(config, &manager)
}

/// Execute the build with an already constructed artifact manager.
pub fn execute_with_manager(
    config: &BuilderConfig,
    manager: &ArtifactManager,
) -> Result<Application> {
    // Phase 1: Discovery
    let files = phase1::execute(&config.files, &config.dirs)?;

    // Phase 2: Reading
    let features = phase2::execute(&files, manager)?;

    // Phase 3: Assembly
    let app = phase3::execute(&features, manager)?;

    // Phase 4: Launchpad defaults
    let app = phase4::execute(app, config);

    // Phase 5: Write to disk
    phase5::execute(&app, &config.output)?;

    Ok(app)
}
