use std::path::PathBuf;

/// Where and how results are exported.
///
/// There is no configuration file; the defaults are the only values the
/// application uses. Tests build their own to redirect the output.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    /// Output workbook, relative to the working directory unless absolute
    pub path: PathBuf,
    /// Name of the single worksheet
    pub sheet_name: String,
    /// Column width in Excel character units
    pub column_width: f64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("results.xlsx"),
            sheet_name: "Results".to_string(),
            column_width: 22.0,
        }
    }
}

impl ExportSettings {
    /// File name shown to the user after a successful export.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ExportSettings::default();
        assert_eq!(settings.path, PathBuf::from("results.xlsx"));
        assert_eq!(settings.sheet_name, "Results");
        assert_eq!(settings.display_name(), "results.xlsx");
    }

    #[test]
    fn test_display_name_strips_directories() {
        let settings = ExportSettings {
            path: PathBuf::from("/tmp/out/results.xlsx"),
            ..ExportSettings::default()
        };
        assert_eq!(settings.display_name(), "results.xlsx");
    }
}
