mod color;
mod hsv;
mod swatch;

pub use color::{ColorCode, Rgb};
pub use swatch::Swatch;

use hsv::Hsv;

/// Push a color's saturation all the way up, like the set dresser on an
/// Almodóvar film. Hue and brightness stay where they were; only the
/// saturation moves, and it moves to 1.
///
/// Takes anything that resolves to a color: a hex string, an [Rgb], or a
/// bare channel tuple.
pub fn almodovarize(color: impl Into<ColorCode>) -> Result<Rgb, Error> {
	let rgb = color.into().rgb()?;

	Ok(Hsv::from(rgb).saturate().into())
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("'{hex}' is not a six digit hex color")]
	MalformedHex { hex: String },
	#[error("a {height}x{width} image has no pixels; both dimensions need to be at least 1")]
	EmptyImage { height: usize, width: usize },
	#[error("{source}")]
	Io {
		#[from]
		source: std::io::Error,
	},
	#[error("{source}")]
	PngEncode {
		#[from]
		source: png::EncodingError,
	},
	#[error("{source}")]
	JpegEncode {
		#[from]
		source: jpeg_encoder::EncodingError,
	},
}
