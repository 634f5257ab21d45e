#[cfg(target_arch = "wasm32")]
pub fn log_str(s : &str) {
    web_sys::console::log_1(&s.into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_str(s : &str) {
    eprintln!("{}", s);
}

#[macro_export]
macro_rules! log {
    ( $( $t:tt )* ) => {
        $crate::console_log::log_str(&format!( $( $t )* ))
    }
}

/// Routes Rust panics to the browser console.
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
