//! Browser bindings
//!
//! Window elements are found by their `data-window` attribute. Layout is read
//! from `offset*` (which ignores transforms), and every [`FrameState`] is
//! written straight into the element's inline style.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomRect, HtmlElement};

use crate::config::DesktopConfig;
use crate::control::WindowControl;
use crate::engine::{Desktop, LayoutProbe};
use crate::error::DesktopError;
use crate::math::{Rect, Size};
use crate::presenter::FrameState;
use crate::window::{Window, WindowData};

fn now() -> f64 {
    js_sys::Date::now()
}

fn to_js(err: DesktopError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_rect(rect: &DomRect) -> Rect {
    Rect::new(
        rect.x() as f32,
        rect.y() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

fn window_element(document: &Document, key: &str) -> Option<HtmlElement> {
    document
        .query_selector(&format!("[data-window=\"{}\"]", key))
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Layout probe reading the live DOM
struct DomProbe {
    document: Document,
}

impl LayoutProbe for DomProbe {
    fn layout_rect(&self, key: &str) -> Option<Rect> {
        let element = window_element(&self.document, key)?;
        let style = element.style();

        // Hidden elements have no layout; show them invisibly to measure
        let hidden = style.get_property_value("display").ok().as_deref() == Some("none");
        if hidden {
            style.set_property("visibility", "hidden").ok()?;
            style.set_property("display", "block").ok()?;
        }

        let rect = Rect::new(
            element.offset_left() as f32,
            element.offset_top() as f32,
            element.offset_width() as f32,
            element.offset_height() as f32,
        );

        if hidden {
            style.set_property("display", "none").ok()?;
            style.remove_property("visibility").ok()?;
        }

        Some(rect).filter(|r| !r.is_empty())
    }

    fn viewport(&self) -> Size {
        let Some(window) = web_sys::window() else {
            return Size::default();
        };
        let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        Size::new(width as f32, height as f32)
    }
}

fn apply_frame(element: &HtmlElement, frame: &FrameState) -> Result<(), JsValue> {
    let style = element.style();
    let t = frame.transform;

    style.set_property("display", if frame.visible { "block" } else { "none" })?;
    style.set_property(
        "pointer-events",
        if frame.interactive { "auto" } else { "none" },
    )?;
    style.set_property(
        "transform",
        &format!(
            "translate({}px, {}px) scale({}, {})",
            t.x, t.y, t.scale_x, t.scale_y
        ),
    )?;
    style.set_property("opacity", &frame.opacity.to_string())?;
    style.set_property("z-index", &frame.z_index.to_string())?;
    style.set_property("border-radius", &format!("{}px", frame.corner_radius))?;

    if frame.will_change {
        style.set_property("will-change", "transform, opacity")?;
    } else {
        style.remove_property("will-change")?;
    }

    match frame.bounds {
        Some(bounds) => {
            style.set_property("left", &format!("{}px", bounds.x))?;
            style.set_property("top", &format!("{}px", bounds.y))?;
            style.set_property("width", &format!("{}px", bounds.width))?;
            style.set_property("height", &format!("{}px", bounds.height))?;
        }
        None => {
            for property in ["left", "top", "width", "height"] {
                style.remove_property(property)?;
            }
        }
    }

    element.set_attribute("data-draggable", if frame.draggable { "true" } else { "false" })
}

/// Desktop bound to the page's window elements
#[wasm_bindgen]
pub struct WasmDesktop {
    desktop: Desktop,
    document: Document,
}

#[wasm_bindgen]
impl WasmDesktop {
    /// Create from a JSON configuration, or the portfolio layout if omitted
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<WasmDesktop, JsValue> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => DesktopConfig::from_json(&json).map_err(to_js)?,
            None => DesktopConfig::portfolio(),
        };
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let probe = DomProbe {
            document: document.clone(),
        };
        let desktop = Desktop::new(config, probe).map_err(to_js)?;

        Ok(Self { desktop, document })
    }

    /// Open a window; `origin` is the trigger's `getBoundingClientRect()`
    pub fn open(
        &mut self,
        key: &str,
        data_json: Option<String>,
        origin: Option<DomRect>,
    ) -> Result<bool, JsValue> {
        let data = data_json
            .map(|json| WindowData::from_json(&json))
            .transpose()
            .map_err(to_js)?;
        let origin = origin.as_ref().map(to_rect);
        Ok(self.desktop.open(key, data, origin, now()))
    }

    /// Close if showing the same payload, open otherwise
    pub fn toggle(
        &mut self,
        key: &str,
        data_json: Option<String>,
        origin: Option<DomRect>,
    ) -> Result<bool, JsValue> {
        let data = data_json
            .map(|json| WindowData::from_json(&json))
            .transpose()
            .map_err(to_js)?;
        let origin = origin.as_ref().map(to_rect);
        Ok(self.desktop.toggle(key, data, origin, now()))
    }

    pub fn close(&mut self, key: &str) -> bool {
        self.desktop.close(key, now())
    }

    pub fn focus(&mut self, key: &str) -> bool {
        self.desktop.focus(key, now())
    }

    pub fn minimize(&mut self, key: &str) -> bool {
        self.desktop.minimize(key, now())
    }

    pub fn maximize(&mut self, key: &str) -> bool {
        self.desktop.maximize(key, now())
    }

    /// Title bar button by name: `"close"`, `"minimize"` or `"maximize"`
    pub fn control(&mut self, key: &str, control: &str) -> Result<bool, JsValue> {
        let control = match control {
            "close" => WindowControl::Close,
            "minimize" => WindowControl::Minimize,
            "maximize" => WindowControl::Maximize,
            other => return Err(JsValue::from_str(&format!("unknown control: {}", other))),
        };
        Ok(self.desktop.control(key, control, now()))
    }

    /// Pointer down on a window
    pub fn press(&mut self, key: &str) -> bool {
        self.desktop.press_window(key, now())
    }

    /// Pointer motion while dragging
    pub fn drag(&mut self, key: &str, dx: f32, dy: f32) -> bool {
        self.desktop.drag_window(key, dx, dy)
    }

    /// Advance animations and paint; returns true while more frames are needed
    pub fn tick(&mut self) -> Result<bool, JsValue> {
        let now = now();
        self.desktop.tick(now);

        for (key, frame) in self.desktop.frames(now) {
            if let Some(element) = window_element(&self.document, key) {
                apply_frame(&element, &frame)?;
            }
        }
        Ok(self.desktop.is_animating())
    }

    /// Registry contents as JSON
    pub fn state_json(&self) -> Result<String, JsValue> {
        let windows: Vec<&Window> = self.desktop.registry().windows().collect();
        serde_json::to_string(&windows).map_err(|e| to_js(e.into()))
    }

    /// Current frame states as JSON, keyed by window
    pub fn frames_json(&self) -> Result<String, JsValue> {
        let frames: std::collections::BTreeMap<&str, FrameState> =
            self.desktop.frames(now()).into_iter().collect();
        serde_json::to_string(&frames).map_err(|e| to_js(e.into()))
    }
}
