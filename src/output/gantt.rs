use crate::error::OutputError;
use crate::gantt::Figure;
use crate::storage::svg;
use std::fs;
use std::path::Path;

/// Write the figure as SVG, creating missing parent directories
pub fn write_gantt(figure: &Figure, path: &Path) -> Result<(), OutputError> {
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if !is_svg {
        return Err(OutputError::UnsupportedFormat(path.to_path_buf()));
    }

    let content = svg::write(figure)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(OutputError::CreateDir)?;
    }
    fs::write(path, content).map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
