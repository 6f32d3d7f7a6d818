//! Phase 5: Writing the Application
//!
//! Serializes the application as pretty-printed JSON to the output path.
//! The parent directory must already exist. The file handle is flushed and
//! closed before returning; a failed write may leave a partial file behind.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;

use crate::application::Application;
use crate::error::{Error, Result};

/// Serialize `app` as pretty JSON into any writer.
pub fn write_application<W: Write>(mut writer: W, app: &Application) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, app)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Execute Phase 5: write the application to `output`.
pub fn execute(app: &Application, output: &Path) -> Result<()> {
    info!("Writing application: {}", output.display());

    let write_error = |message: String| Error::Write {
        path: output.to_path_buf(),
        message,
    };
    let file = File::create(output).map_err(|e| write_error(e.to_string()))?;
    write_application(BufWriter::new(file), app).map_err(|e| write_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ArtifactId;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_phase5_writes_pretty_json() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("application.json");
        let mut app = Application::new();
        app.framework = Some(ArtifactId::new("g", "framework", "1"));

        execute(&app, &output).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("\n  \"framework\": \"g:framework:1\""));
        let parsed: Application = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, app);
    }

    #[test]
    fn test_phase5_missing_parent_directory() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("missing").join("application.json");

        let err = execute(&Application::new(), &output).unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_write_application_to_buffer() {
        let mut buffer = Vec::new();
        write_application(&mut buffer, &Application::new()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("}\n"));
    }
}
