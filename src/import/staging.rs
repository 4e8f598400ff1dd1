use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

const KNOWN_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];
const FALLBACK_EXTENSION: &str = "xlsx";

/// An uploaded workbook written to the upload directory. The file is removed
/// when the guard is closed or dropped, whichever comes first.
pub struct StagedUpload {
    file: NamedTempFile,
}

impl StagedUpload {
    /// Write `data` to a fresh file under `dir`. The extension is taken from
    /// the client's file name when it is a workbook format the reader knows.
    pub fn write(dir: &Path, original_name: Option<&str>, data: &[u8]) -> std::io::Result<Self> {
        let suffix = format!(".{}", workbook_extension(original_name));
        let mut file = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(&suffix)
            .tempfile_in(dir)?;
        file.write_all(data)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Remove the staged file now, reporting any I/O error.
    pub fn close(self) -> std::io::Result<()> {
        self.file.close()
    }
}

pub fn workbook_extension(original_name: Option<&str>) -> &'static str {
    let ext = original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    ext.and_then(|ext| KNOWN_EXTENSIONS.iter().copied().find(|known| *known == ext))
        .unwrap_or(FALLBACK_EXTENSION)
}
