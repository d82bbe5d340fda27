use crate::Error;

/// An 8-bit-per-channel RGB color. The only color representation that
/// leaves this crate; everything else is working state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Rgb {
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Parse a hex color. The leading `#` is optional, but after it's
	/// stripped there have to be exactly six hex digits, either case.
	pub fn from_hex(hex: &str) -> Result<Self, Error> {
		let digits = hex.strip_prefix('#').unwrap_or(hex).as_bytes();

		let malformed = || Error::MalformedHex {
			hex: hex.to_owned(),
		};

		if digits.len() != 6 {
			return Err(malformed());
		}

		let channel = |hi: u8, lo: u8| -> Option<u8> {
			Some(nibble(hi)? << 4 | nibble(lo)?)
		};

		match (
			channel(digits[0], digits[1]),
			channel(digits[2], digits[3]),
			channel(digits[4], digits[5]),
		) {
			(Some(r), Some(g), Some(b)) => Ok(Self { r, g, b }),
			_ => Err(malformed()),
		}
	}

	/// Lowercase hex with the `#`. Always seven bytes long.
	pub fn hex(&self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}

	/// Each channel scaled down into [0.0, 1.0]
	pub fn floats(self) -> (f32, f32, f32) {
		(
			self.r as f32 / 255.0,
			self.g as f32 / 255.0,
			self.b as f32 / 255.0,
		)
	}

	// Round-half-away-from-zero, which is what f32::round does. The clamp
	// catches float error pushing a channel a hair past 255.
	pub(crate) fn from_floats(r: f32, g: f32, b: f32) -> Self {
		let channel = |f: f32| (f * 255.0).round().clamp(0.0, 255.0) as u8;

		Self {
			r: channel(r),
			g: channel(g),
			b: channel(b),
		}
	}
}

fn nibble(c: u8) -> Option<u8> {
	match c {
		b'0'..=b'9' => Some(c - b'0'),
		b'a'..=b'f' => Some(c - b'a' + 10),
		b'A'..=b'F' => Some(c - b'A' + 10),
		_ => None,
	}
}

/// Either way a caller is allowed to hand us a color. The variants both
/// collapse to [Rgb] before anything touches them, hex failing if it's
/// malformed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorCode {
	Hex(String),
	Rgb(Rgb),
}

impl ColorCode {
	pub fn rgb(self) -> Result<Rgb, Error> {
		match self {
			ColorCode::Hex(hex) => Rgb::from_hex(&hex),
			ColorCode::Rgb(rgb) => Ok(rgb),
		}
	}
}

impl From<&str> for ColorCode {
	fn from(hex: &str) -> Self {
		ColorCode::Hex(hex.to_owned())
	}
}

impl From<String> for ColorCode {
	fn from(hex: String) -> Self {
		ColorCode::Hex(hex)
	}
}

impl From<Rgb> for ColorCode {
	fn from(rgb: Rgb) -> Self {
		ColorCode::Rgb(rgb)
	}
}

impl From<(u8, u8, u8)> for ColorCode {
	fn from((r, g, b): (u8, u8, u8)) -> Self {
		ColorCode::Rgb(Rgb { r, g, b })
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn parses_the_sample_color() {
		let expected = Rgb::new(173, 159, 192);

		// The # and digit case shouldn't matter
		assert_eq!(Rgb::from_hex("#ad9fc0").unwrap(), expected);
		assert_eq!(Rgb::from_hex("ad9fc0").unwrap(), expected);
		assert_eq!(Rgb::from_hex("#AD9FC0").unwrap(), expected);
	}

	#[test]
	fn round_trips() {
		let colors = [
			Rgb::new(0, 0, 0),
			Rgb::new(255, 255, 255),
			Rgb::new(255, 0, 0),
			Rgb::new(0, 255, 0),
			Rgb::new(0, 0, 255),
			Rgb::new(173, 159, 192),
			Rgb::new(1, 2, 3),
		];

		for color in colors {
			assert_eq!(Rgb::from_hex(&color.hex()).unwrap(), color);
		}
	}

	#[test]
	fn encodes_lowercase_with_hash() {
		assert_eq!(Rgb::new(173, 159, 192).hex(), "#ad9fc0");
		assert_eq!(Rgb::new(0, 0, 0).hex(), "#000000");
	}

	#[test]
	fn rejects_malformed_hex() {
		let bad = ["", "#", "#abc", "#zzzzzz", "#ad9fc0ff", "ad9fc", "αβγδεζ"];

		for hex in bad {
			assert!(
				matches!(Rgb::from_hex(hex), Err(Error::MalformedHex { .. })),
				"'{hex}' should have failed to parse"
			);
		}
	}

	// u8::from_str_radix takes a sign, which is why we don't use it
	#[test]
	fn rejects_signed_digits() {
		assert!(Rgb::from_hex("#+19fc0").is_err());
		assert!(Rgb::from_hex("-19fc0").is_err());
	}

	#[test]
	fn colorcode_collapses() {
		let rgb = Rgb::new(173, 159, 192);

		assert_eq!(ColorCode::from("#ad9fc0").rgb().unwrap(), rgb);
		assert_eq!(ColorCode::from((173, 159, 192)).rgb().unwrap(), rgb);
		assert_eq!(ColorCode::from(rgb).rgb().unwrap(), rgb);
		assert!(ColorCode::from("#nope00").rgb().is_err());
	}
}
