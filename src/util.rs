use wasm_bindgen::JsCast;

/// Runs `future` on the browser's event loop, logging under `target` if it fails.
pub fn spawn_local<F, E>(target: &'static str, future: F)
where
	F: futures_util::Future<Output = Result<(), E>> + 'static,
	E: std::fmt::Debug + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		if let Err(err) = future.await {
			log::error!(target: target, "{err:?}");
		}
	});
}

pub trait InputExt {
	fn input_value(&self) -> Option<String>;
}

impl InputExt for web_sys::Event {
	fn input_value(&self) -> Option<String> {
		let target = self.target()?;
		let input = target.dyn_into::<web_sys::HtmlInputElement>().ok()?;
		Some(input.value())
	}
}
