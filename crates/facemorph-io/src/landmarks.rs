use std::path::Path;

use facemorph_mesh::Point2;

use crate::error::IoError;

/// Reads a landmark file into an ordered point set.
///
/// The format is whitespace-separated integer coordinate pairs, one point
/// per `x y` pair, read until end of stream. The index of a point in the
/// returned vector is its identity: landmark files for two images to be
/// morphed must list corresponding points at the same position.
///
/// # Errors
///
/// A token that does not parse as an integer, or a trailing unpaired
/// coordinate, is reported as [`IoError::InvalidPointsFile`] rather than
/// silently dropped.
pub fn read_landmarks(file_path: impl AsRef<Path>) -> Result<Vec<Point2>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let content = std::fs::read_to_string(&file_path)?;

    let mut coords = Vec::new();
    for token in content.split_whitespace() {
        let value: i64 = token.parse().map_err(|_| {
            IoError::InvalidPointsFile(
                file_path.clone(),
                format!("not an integer coordinate: {token:?}"),
            )
        })?;
        coords.push(value as f32);
    }

    if coords.len() % 2 != 0 {
        return Err(IoError::InvalidPointsFile(
            file_path,
            format!("odd number of coordinates ({})", coords.len()),
        ));
    }

    Ok(coords
        .chunks_exact(2)
        .map(|pair| Point2::new(pair[0], pair[1]))
        .collect())
}
