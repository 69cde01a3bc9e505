use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Current viewport size in CSS pixels, or `None` while the window is
/// unavailable or a dimension is reported as zero.
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web::window()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    (w > 0.0 && h > 0.0).then_some((w, h))
}
