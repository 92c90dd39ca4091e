use web_sys::{
    Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::error::{Result, SiteError};
use crate::motion::{SectionRect, Viewport};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

pub fn viewport(window: &Window) -> Result<Viewport> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport { width, height })
}

/// Device pixels per CSS pixel.
pub fn pixel_ratio(window: &Window) -> f64 {
    window.device_pixel_ratio()
}

pub fn scroll_y(window: &Window) -> Result<f64> {
    Ok(window.scroll_y()?)
}

pub fn section_rect(element: &Element) -> SectionRect {
    let rect = element.get_bounding_client_rect();
    SectionRect::new(rect.top(), rect.height())
}

/// Smoothly scrolls until the section's top edge meets the viewport top.
pub fn scroll_to_section(id: &str) -> Result<()> {
    let element = document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(id.to_string()))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}
