//! Phase 4: Launchpad Defaults
//!
//! Adds what the launcher expects on top of the assembled features:
//!
//! - the launchpad API bundle, started first (`start-order` `1`), exactly
//!   once even if a feature already listed it;
//! - the boot delegation framework property, unless a properties file was
//!   given (reading that file is not supported, it is only acknowledged);
//! - the Felix framework, always overriding whatever assembly chose, pinned
//!   to the requested version when one was given.

use log::warn;

use crate::application::Application;
use crate::artifact::{Artifact, ArtifactId, KEY_START_ORDER};
use crate::config::BuilderConfig;
use crate::defaults::felix_framework_id;

/// Coordinate of the launchpad API bundle added to every application.
pub const LAUNCHPAD_API: &str = "org.apache.sling:org.apache.sling.launchpad.api:1.2.0";

/// Framework property set when no properties file is given.
pub const BOOT_DELEGATION_KEY: &str = "org.osgi.framework.bootdelegation";
pub const BOOT_DELEGATION_VALUE: &str = "sun.*,com.sun.*";

pub fn launchpad_api_id() -> ArtifactId {
    ArtifactId::new("org.apache.sling", "org.apache.sling.launchpad.api", "1.2.0")
}

/// Execute Phase 4: apply launcher defaults.
pub fn execute(mut app: Application, config: &BuilderConfig) -> Application {
    let mut launchpad = Artifact::new(launchpad_api_id());
    launchpad
        .metadata
        .insert(KEY_START_ORDER.to_string(), "1".to_string());
    app.bundles.remove_same(&launchpad.id);
    app.bundles.add(launchpad);

    match &config.properties_file {
        None => {
            app.framework_properties.insert(
                BOOT_DELEGATION_KEY.to_string(),
                BOOT_DELEGATION_VALUE.to_string(),
            );
        }
        Some(path) => {
            warn!(
                "Properties file {} is not supported yet and is ignored",
                path.display()
            );
        }
    }

    app.framework = Some(felix_framework_id(config.framework_version.as_deref()));
    app
}
