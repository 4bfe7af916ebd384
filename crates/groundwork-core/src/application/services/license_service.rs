//! License installation: catalog lookup, copy, placeholder fill.

use std::path::Path;

use chrono::Datelike;
use tracing::{debug, warn};

use crate::application::ports::Filesystem;
use crate::domain::{LicenseRequest, PlaceholderSet, license};
use crate::error::GroundworkResult;

/// Directory the rendered scaffolding places license templates in.
pub const LICENSE_CATALOG_DIR: &str = "data/licenses";
/// Fixed destination filename.
pub const LICENSE_DESTINATION: &str = "LICENSE";

/// Resolves a requested license against the catalog and installs it.
pub struct LicenseInstaller<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> LicenseInstaller<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    /// Copy the chosen license file to `LICENSE` and fill its placeholders.
    ///
    /// The skip sentinel is a no-op: no destination file is created. The
    /// `{year}` token is resolved here; `{author_name}` is rewritten to
    /// `{{author_name}}`, a marker the outer template engine resolves in its
    /// own later pass.
    pub fn install(&self, request: &LicenseRequest) -> GroundworkResult<()> {
        let LicenseRequest::Named(requested) = request else {
            debug!("no license set");
            return Ok(());
        };

        let catalog_dir = Path::new(LICENSE_CATALOG_DIR);
        let available = self.fs.list_dir(catalog_dir)?;
        let resolution = license::resolve(requested, &available)?;
        if resolution.corrected {
            warn!(license = %resolution.name, "corrected license name");
        }

        let destination = Path::new(LICENSE_DESTINATION);
        self.fs
            .copy_file(&catalog_dir.join(&resolution.name), destination)?;

        let placeholders = PlaceholderSet::new()
            .push("{year}", chrono::Local::now().year().to_string())
            .push("{author_name}", "{{author_name}}");
        let contents = self.fs.read_to_string(destination)?;
        self.fs.write(destination, &placeholders.apply(&contents))?;

        debug!(license = %resolution.name, "license installed");
        Ok(())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
