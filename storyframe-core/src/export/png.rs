use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};

use crate::config::model::StoryConfig;
use crate::foundation::error::{StoryError, StoryResult};
use crate::session::compose::compose;

/// Marker appended to the input's file stem to name the output.
pub const OUTPUT_SUFFIX: &str = "-story";

/// `<dir>/<stem>-story.png` next to `input`. Output is always PNG.
pub fn output_path_for(input: &Path) -> StoryResult<PathBuf> {
    let stem = input
        .file_stem()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            StoryError::invalid_image(format!("'{}' has no file name", input.display()))
        })?;
    let mut name = stem.to_os_string();
    name.push(OUTPUT_SUFFIX);
    name.push(".png");
    Ok(input.with_file_name(name))
}

/// Decode the image at `path` as RGB8.
pub fn load_source(path: &Path) -> StoryResult<RgbImage> {
    if !path.is_file() {
        return Err(StoryError::invalid_image(format!(
            "unable to find image file at '{}'",
            path.display()
        )));
    }
    let img = image::open(path)
        .map_err(|e| StoryError::invalid_image(format!("decode '{}': {e}", path.display())))?;
    Ok(img.to_rgb8())
}

/// Encode `canvas` as PNG at `path`. Failures are reported, never retried.
pub fn save_canvas(canvas: &RgbImage, path: &Path) -> StoryResult<()> {
    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| StoryError::export(format!("write png '{}': {e}", path.display())))
}

/// Load `input`, compose it per `config`, and write the canvas beside it.
///
/// Returns the path written.
#[tracing::instrument(skip(config))]
pub fn process_file(config: &StoryConfig, input: &Path) -> StoryResult<PathBuf> {
    let out = output_path_for(input)?;
    let source = load_source(input)?;
    tracing::info!(
        width = source.width(),
        height = source.height(),
        "loaded source"
    );

    let canvas = compose(config, &source)?;
    drop(source);

    save_canvas(&canvas, &out)?;
    tracing::info!(out = %out.display(), "wrote story canvas");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
