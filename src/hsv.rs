use crate::color::Rgb;

/// Hue/saturation/value working representation. Hue is degrees in
/// [0, 360), the other two sit in [0, 1]. Never leaves the crate; colors
/// only pass through here on their way to more saturation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Hsv {
	pub hue: f32,
	pub saturation: f32,
	pub value: f32,
}

impl Hsv {
	/// Pin saturation to the ceiling. Hue and value stay put.
	pub fn saturate(mut self) -> Self {
		self.saturation = 1.0;
		self
	}
}

impl From<Rgb> for Hsv {
	fn from(rgb: Rgb) -> Self {
		let (r, g, b) = rgb.floats();

		let value = r.max(g.max(b));
		let x_min = r.min(g.min(b));
		let chroma = value - x_min;

		let hue = if chroma == 0.0 {
			// Achromatic. Hue is meaningless so we park it at 0
			0.0
		} else if value == r {
			60.0 * ((g - b) / chroma)
		} else if value == g {
			60.0 * (2.0 + (b - r) / chroma)
		} else {
			60.0 * (4.0 + (r - g) / chroma)
		};

		let saturation = if value == 0.0 { 0.0 } else { chroma / value };

		Hsv {
			// The red sector can come out negative; spin it back around
			hue: (hue + 360.0) % 360.0,
			saturation,
			value,
		}
	}
}

impl From<Hsv> for Rgb {
	fn from(hsv: Hsv) -> Self {
		let Hsv {
			hue,
			saturation,
			value,
		} = hsv;

		let chroma = value * saturation;
		let hue_prime = hue / 60.0;
		let x = chroma * (1.0 - (hue_prime % 2.0 - 1.0).abs());
		let m = value - chroma;

		// hue_prime is in [0, 6) because hue came in [0, 360)
		let (r, g, b) = match hue_prime {
			h if h <= 1.0 => (chroma, x, 0.0),
			h if h <= 2.0 => (x, chroma, 0.0),
			h if h <= 3.0 => (0.0, chroma, x),
			h if h <= 4.0 => (0.0, x, chroma),
			h if h <= 5.0 => (x, 0.0, chroma),
			_ => (chroma, 0.0, x),
		};

		Rgb::from_floats(r + m, g + m, b + m)
	}
}
