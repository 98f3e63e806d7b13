use std::process::Command;

fn main() {
	println!("cargo:rustc-env=RUST_BACKTRACE=1");
	println!("cargo:rustc-env=CARGO_PROFILE_DEV_BUILD_OVERRIDE_DEBUG=true");

	// Optional overrides for the generation API, read with `option_env!`
	for var in ["GEMINI_ENDPOINT", "GEMINI_MODEL"] {
		println!("cargo:rerun-if-env-changed={var}");
		if let Ok(value) = std::env::var(var) {
			println!("cargo:rustc-env={var}={value}");
		}
	}

	println!("cargo:rerun-if-changed=./input.css");
	println!("cargo:rerun-if-changed=./tailwind.config.js");

	let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
	let mut args = vec!["--no", "tailwindcss", "-i", "./input.css", "-o", "./assets/tailwind.css"];
	if profile == "release" {
		args.push("--minify");
	}

	match Command::new("npx").args(&args).output() {
		Ok(output) if output.status.success() => {},
		Ok(output) => println!("cargo:warning=Tailwind CSS compilation failed: {}", String::from_utf8_lossy(&output.stderr)),
		Err(e) => println!("cargo:warning=Skipping Tailwind CSS compilation: {e}"),
	}
}
