//! Implementation of the phases of an application build.
//!
//! ## Overview
//!
//! A build follows 5 phases:
//! 1. Discovery - Collect the feature files named on the command line
//! 2. Reading - Locate and parse every feature, then sort them
//! 3. Assembly - Merge the features into an application, resolving includes
//! 4. Launchpad - Add the launcher defaults (bundle, properties, framework)
//! 5. Writing - Serialize the application to the output file
//!
//! Each phase depends only on the previous phases and the foundation layers
//! (model, reader, builder, artifact manager). `orchestrator` runs them in
//! order.

pub mod assembly;
pub mod discovery;
pub mod launchpad;
pub mod orchestrator;
pub mod reading;
pub mod write;

// Numbered aliases mirroring the pipeline order
pub use assembly as phase3;
pub use discovery as phase1;
pub use launchpad as phase4;
pub use reading as phase2;
pub use write as phase5;
