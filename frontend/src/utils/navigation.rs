pub trait Navigator {
    fn redirect(&self, path: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        redirect(path);
    }
}

/// Full-page navigation to `path`, skipped when the browser is already there.
#[cfg(target_arch = "wasm32")]
pub fn redirect(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    if let Ok(pathname) = location.pathname() {
        if pathname == path {
            return;
        }
    }
    if location.set_href(path).is_err() {
        log::warn!("navigation to {} failed", path);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect(path: &str) {
    log::debug!("navigation to {} skipped outside the browser", path);
}

#[cfg(test)]
pub use recording::RecordingNavigator;
