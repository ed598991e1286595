use std::path::Path;

use facemorph_image::{Image, ImageSize};

use crate::error::IoError;

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image
/// crate and converts the pixels to 8-bit RGB.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the image data in RGB8 format.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path));
    }

    let img = image::ImageReader::open(&file_path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| IoError::ImageDecode(file_path.clone(), e))?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = Image::<u8, 3>::new(size, img.into_rgb8().into_raw())?;

    Ok(image)
}

/// Writes an RGB8 image to the given file path as PNG.
///
/// # Arguments
///
/// * `file_path` - The destination path of the PNG file.
/// * `image` - The image to encode.
pub fn write_image_png(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    let file_path = file_path.as_ref().to_owned();

    image::save_buffer_with_format(
        &file_path,
        image.as_slice(),
        image.width() as u32,
        image.height() as u32,
        image::ExtendedColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .map_err(|e| IoError::ImageEncode(file_path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{read_image_any, write_image_png};
    use crate::error::IoError;
    use facemorph_image::{Image, ImageSize};

    #[test]
    fn read_missing_file() {
        let result = read_image_any("/definitely/not/here.png");
        assert!(matches!(result, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn write_read_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.png");

        let size = ImageSize {
            width: 4,
            height: 2,
        };
        let data = (0..size.width * size.height * 3)
            .map(|i| (i * 7 % 256) as u8)
            .collect::<Vec<_>>();
        let image = Image::<u8, 3>::new(size, data)?;

        write_image_png(&file_path, &image)?;
        assert!(file_path.exists());

        let image_back = read_image_any(&file_path)?;
        assert_eq!(image_back.size(), image.size());
        assert_eq!(image_back.as_slice(), image.as_slice());

        Ok(())
    }
}
