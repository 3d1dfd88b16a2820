#[cfg(target_family = "wasm")]
fn main() {
	employee_directory::logging::init();
	yew::Renderer::<employee_directory::App>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	employee_directory::logging::init();
	log::error!(
		target: env!("CARGO_PKG_NAME"),
		"the directory runs in the browser, build it for wasm32 with `trunk build`"
	);
	std::process::exit(1);
}
