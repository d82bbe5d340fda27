use almodovar::Swatch;

fn main() {
	// First arg, if there is one, is where the swatch goes
	let out_path = std::env::args()
		.nth(1)
		.unwrap_or_else(|| String::from("image_color.jpeg"));

	let color = match almodovar::almodovarize("#ad9fc0") {
		Ok(color) => color,
		Err(e) => {
			eprintln!("{e}");
			std::process::exit(1);
		}
	};

	println!("{}", color.hex());

	let saved = Swatch::solid(color, 200, 200).and_then(|swatch| swatch.save(&out_path));
	if let Err(e) = saved {
		eprintln!("failed to write {out_path}: {e}");
		std::process::exit(1);
	}
}
