use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::panels::{ColorPicker, ComposeBox, Panel, Presentation};
use crate::render::Renderer;

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Missing element: {id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Invalid element type: {id}")))
}

/// Shows and hides the game page panels by element id.
pub struct DomPresentation {
    document: Document,
}

impl DomPresentation {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn set_visible(&self, panel: Panel, visible: bool) {
        let element = match get_element::<HtmlElement>(&self.document, panel.element_id()) {
            Ok(element) => element,
            Err(error) => {
                log::warn!("cannot toggle {panel:?}: {error:?}");
                return;
            }
        };
        let style = element.style();
        // The word dialog is a modal; the side panels slide in and out.
        let result = match panel {
            Panel::WordDialog => {
                style.set_property("display", if visible { "block" } else { "none" })
            }
            Panel::Toolbox | Panel::PlayerList => style.set_property(
                "transform",
                if visible {
                    "translateX(0)"
                } else {
                    "translateX(-150%)"
                },
            ),
        };
        if let Err(error) = result {
            log::warn!("cannot style {panel:?}: {error:?}");
        }
    }
}

impl Presentation for DomPresentation {
    fn show(&self, panel: Panel) {
        self.set_visible(panel, true);
    }

    fn hide(&self, panel: Panel) {
        self.set_visible(panel, false);
    }
}

pub struct InputColorPicker {
    input: HtmlInputElement,
}

impl InputColorPicker {
    pub fn new(input: HtmlInputElement) -> Self {
        Self { input }
    }
}

impl ColorPicker for InputColorPicker {
    fn value(&self) -> Option<String> {
        let value = self.input.value();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    fn set_value(&self, color: &str) {
        self.input.set_value(color);
    }
}

pub struct InputComposeBox {
    input: HtmlInputElement,
}

impl InputComposeBox {
    pub fn new(input: HtmlInputElement) -> Self {
        Self { input }
    }
}

impl ComposeBox for InputComposeBox {
    fn value(&self) -> String {
        self.input.value()
    }

    fn clear(&self) {
        self.input.set_value("");
    }
}

/// Forwards drawing to a JS canvas object exposing `drawLine`, `fill` and
/// `clear`.
pub struct JsRenderer {
    target: JsValue,
}

impl JsRenderer {
    pub fn new(target: JsValue) -> Self {
        Self { target }
    }

    fn call(&self, method: &str, args: &Array) {
        let function = match Reflect::get(&self.target, &JsValue::from_str(method)) {
            Ok(value) => value.dyn_into::<Function>(),
            Err(error) => {
                log::error!("canvas lookup of {method} failed: {error:?}");
                return;
            }
        };
        let Ok(function) = function else {
            log::error!("canvas has no {method} function");
            return;
        };
        if let Err(error) = function.apply(&self.target, args) {
            log::error!("canvas {method} threw: {error:?}");
        }
    }
}

impl Renderer for JsRenderer {
    fn draw_line(&self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        let args = Array::new();
        for value in [x1, y1, x2, y2] {
            args.push(&JsValue::from_f64(value));
        }
        args.push(&JsValue::from_str(color));
        args.push(&JsValue::from_f64(width));
        self.call("drawLine", &args);
    }

    fn fill(&self, x: f64, y: f64, color: &str) {
        let args = Array::of3(
            &JsValue::from_f64(x),
            &JsValue::from_f64(y),
            &JsValue::from_str(color),
        );
        self.call("fill", &args);
    }

    fn clear(&self) {
        self.call("clear", &Array::new());
    }
}
