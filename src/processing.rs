use crate::codec::ImageCodec;
use crate::config::OptimizerConfig;
use crate::constants::OUTPUT_EXTENSION;
use crate::error::{CompressionError, Result};
use crate::report::FileOutcome;
use std::fs;
use std::path::{Path, PathBuf};

/// Sibling path with the extension swapped for `.webp`.
///
/// # Example
/// ```
/// use std::path::{Path, PathBuf};
/// use img_sweep::output_path_for;
///
/// assert_eq!(
///     output_path_for(Path::new("public/hero.JPG")),
///     PathBuf::from("public/hero.webp")
/// );
/// ```
pub fn output_path_for(source: &Path) -> PathBuf {
    source.with_extension(OUTPUT_EXTENSION)
}

/// Dimensions after capping the width at `max_width`, keeping the aspect
/// ratio. The new height is truncated, never rounded.
pub fn target_dimensions(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width <= max_width {
        return (width, height);
    }
    let new_height = u64::from(height) * u64::from(max_width) / u64::from(width);
    (max_width, new_height as u32)
}

/// Runs one candidate through decode -> resize -> encode -> write and folds
/// any error into a [`FileOutcome::Failed`].
pub fn optimize_file<C: ImageCodec>(
    codec: &C,
    source: &Path,
    original_size: u64,
    config: &OptimizerConfig,
) -> FileOutcome {
    match convert_to_webp(codec, source, config) {
        Ok((output, output_size, original_dimensions, output_dimensions)) => {
            FileOutcome::Converted {
                source: source.to_path_buf(),
                output,
                original_size,
                output_size,
                original_dimensions,
                output_dimensions,
            }
        }
        Err(error) => FileOutcome::Failed {
            source: source.to_path_buf(),
            error,
        },
    }
}

type Conversion = (PathBuf, u64, (u32, u32), (u32, u32));

fn convert_to_webp<C: ImageCodec>(
    codec: &C,
    source: &Path,
    config: &OptimizerConfig,
) -> Result<Conversion> {
    let output = output_path_for(source);
    if output == source {
        return Err(CompressionError::InvalidFileName(source.to_path_buf()));
    }

    let bytes = fs::read(source)?;
    let image = codec.decode(&bytes)?;
    drop(bytes);

    let (width, height) = codec.dimensions(&image);
    let (new_width, new_height) = target_dimensions(width, height, config.max_width);
    let image = if (new_width, new_height) != (width, height) {
        crate::verbose!(
            "Resizing {:?} from {}x{} to {}x{}",
            source,
            width,
            height,
            new_width,
            new_height
        );
        if new_height == 0 {
            return Err(CompressionError::InvalidDimensions(new_width, new_height));
        }
        codec.resize(image, new_width, new_height)?
    } else {
        image
    };

    let encoded = codec.encode(&image, config.quality)?;
    if output.exists() {
        crate::warn!("Overwriting existing {:?}", output);
    }
    fs::write(&output, &encoded)?;

    Ok((
        output,
        encoded.len() as u64,
        (width, height),
        codec.dimensions(&image),
    ))
}
