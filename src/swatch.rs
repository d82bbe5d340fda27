use std::{fs::File, path::Path};

use jpeg_encoder::{ColorType, Encoder};

use crate::{color::Rgb, Error};

const JPEG_QUALITY: u8 = 90;

/// A rectangle of one color, packed RGB, 8bit depth. Built whole in
/// memory and then written out in one go.
pub struct Swatch {
	width: usize,
	height: usize,
	data: Vec<u8>,
}

impl Swatch {
	/// Fill a `height` rows by `width` columns buffer with `color`.
	/// Either dimension at 0 is an error. There's no upper bound; don't
	/// ask for a swatch you can't fit in memory.
	pub fn solid(color: Rgb, height: usize, width: usize) -> Result<Self, Error> {
		if height == 0 || width == 0 {
			return Err(Error::EmptyImage { height, width });
		}

		let mut data = Vec::with_capacity(width * height * 3);
		for _ in 0..width * height {
			data.extend_from_slice(&[color.r, color.g, color.b]);
		}

		Ok(Self {
			width,
			height,
			data,
		})
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn height(&self) -> usize {
		self.height
	}

	/// Write the swatch to `path`, picking the encoder from the file
	/// extension. `png` gets a PNG and everything else, extensionless
	/// included, gets a JPEG. Clobbers whatever was at `path` before.
	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
		let extension = path
			.as_ref()
			.extension()
			.map(|ext| ext.to_string_lossy().to_ascii_lowercase());

		match extension.as_deref() {
			Some("png") => self.png(path),
			_ => self.jpeg(path),
		}
	}

	/// Output the swatch as a PNG. Lossless, so every pixel in the file
	/// is exactly the fill color.
	fn png<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
		let file = File::create(path.as_ref())?;
		let mut enc = png::Encoder::new(file, self.width as u32, self.height as u32);
		enc.set_color(png::ColorType::Rgb);
		enc.set_depth(png::BitDepth::Eight);

		let mut writer = enc.write_header()?;
		writer.write_image_data(&self.data)?;

		Ok(())
	}

	/// Output the swatch as a JPEG. A solid color compresses losslessly
	/// in practice, but that's the encoder's business, not a promise.
	fn jpeg<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
		let enc = Encoder::new_file(path.as_ref(), JPEG_QUALITY)?;
		enc.encode(
			&self.data,
			self.width as u16,
			self.height as u16,
			ColorType::Rgb,
		)?;

		Ok(())
	}
}
