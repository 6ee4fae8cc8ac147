//! WASM exports for the overlay window manager
//!
//! This module provides wasm-bindgen exports wrapping [`WindowManager`], so
//! a JavaScript overlay host can drive windows directly. The host passes a
//! surface object (`drawRect`, `drawText`, `drawLine`, `clearGroup`,
//! `freezeGroup`, `continueGroup`, `setGroupZIndex`) and an optional cursor
//! function returning `{x, y}` or `null`.

use std::rc::Rc;

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::SurfaceError;
use crate::host::{Clock, Color, CursorSource, HostBindings, OverlaySurface, RectStyle};
use crate::manager::{ListenerId, ManagerConfig, WindowManager};
use crate::math::{Point, Rect};
use crate::window::{WindowConfig, WindowEvent};

/// `Date.now()` clock
struct DateClock;

impl Clock for DateClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

fn css(color: Color) -> JsValue {
    JsValue::from_str(&format!(
        "rgba({},{},{},{:.3})",
        color.r,
        color.g,
        color.b,
        f64::from(color.a) / 255.0
    ))
}

/// Surface backed by a JS object
struct JsSurface {
    target: JsValue,
}

impl JsSurface {
    fn invoke(&self, call: &'static str, group: &str, args: &[JsValue]) -> Result<(), SurfaceError> {
        let method = Reflect::get(&self.target, &JsValue::from_str(call)).map_err(|_| SurfaceError::Unavailable)?;
        let Some(function) = method.dyn_ref::<Function>() else {
            return Err(SurfaceError::Unavailable);
        };
        let args: Array = std::iter::once(JsValue::from_str(group)).chain(args.iter().cloned()).collect();
        function
            .apply(&self.target, &args)
            .map(|_| ())
            .map_err(|err| SurfaceError::DrawFailed {
                call,
                group: group.to_string(),
                reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
            })
    }
}

impl OverlaySurface for JsSurface {
    fn draw_rect(&self, group: &str, rect: Rect, color: Color, style: RectStyle) -> Result<(), SurfaceError> {
        let (filled, width) = match style {
            RectStyle::Filled => (true, 0),
            RectStyle::Outline { width } => (false, width),
        };
        self.invoke(
            "drawRect",
            group,
            &[
                rect.x.into(),
                rect.y.into(),
                rect.width.into(),
                rect.height.into(),
                css(color),
                filled.into(),
                width.into(),
            ],
        )
    }

    fn draw_text(&self, group: &str, text: &str, origin: Point, color: Color, size: u32) -> Result<(), SurfaceError> {
        self.invoke(
            "drawText",
            group,
            &[text.into(), origin.x.into(), origin.y.into(), css(color), size.into()],
        )
    }

    fn draw_line(&self, group: &str, from: Point, to: Point, color: Color, width: u32) -> Result<(), SurfaceError> {
        self.invoke(
            "drawLine",
            group,
            &[from.x.into(), from.y.into(), to.x.into(), to.y.into(), css(color), width.into()],
        )
    }

    fn clear_group(&self, group: &str) -> Result<(), SurfaceError> {
        self.invoke("clearGroup", group, &[])
    }

    fn freeze_group(&self, group: &str) -> Result<(), SurfaceError> {
        self.invoke("freezeGroup", group, &[])
    }

    fn continue_group(&self, group: &str) -> Result<(), SurfaceError> {
        self.invoke("continueGroup", group, &[])
    }

    fn set_group_z_index(&self, group: &str, z_index: u32) -> Result<(), SurfaceError> {
        self.invoke("setGroupZIndex", group, &[z_index.into()])
    }
}

/// Cursor backed by a JS function
struct JsCursor {
    function: Function,
}

impl CursorSource for JsCursor {
    fn poll(&self) -> Option<Point> {
        let sample = self.function.call0(&JsValue::NULL).ok()?;
        if sample.is_null() || sample.is_undefined() {
            return None;
        }
        let axis = |name: &str| Reflect::get(&sample, &JsValue::from_str(name)).ok()?.as_f64();
        Some(Point::new(axis("x")?.round() as i32, axis("y")?.round() as i32))
    }
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Overlay controller for WASM - wraps WindowManager with JS-friendly API
#[wasm_bindgen]
pub struct OverlayController {
    manager: WindowManager,
    subscriptions: Vec<Option<ListenerId>>,
}

#[wasm_bindgen]
impl OverlayController {
    /// Create a controller from a JSON config (may be `"{}"`), a surface
    /// object (or `null`) and a cursor function (or `undefined`)
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, surface: JsValue, cursor: Option<Function>) -> Result<OverlayController, JsValue> {
        let config = ManagerConfig::from_json(config_json).map_err(to_js_error)?;
        let mut host = HostBindings::detached().with_clock(Rc::new(DateClock));
        if !surface.is_null() && !surface.is_undefined() {
            host = host.with_surface(Rc::new(JsSurface { target: surface }));
        }
        if let Some(function) = cursor {
            host = host.with_cursor(JsCursor { function });
        }
        Ok(Self {
            manager: WindowManager::new(config, host),
            subscriptions: Vec::new(),
        })
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Create a window from a JSON config
    #[wasm_bindgen]
    pub fn create_window(&mut self, config_json: &str) -> Result<u64, JsValue> {
        let config: WindowConfig = serde_json::from_str(config_json).map_err(to_js_error)?;
        self.manager.create_window(config).map_err(to_js_error)
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) -> bool {
        self.manager.close_window(id)
    }

    #[wasm_bindgen]
    pub fn close_all_windows(&mut self) {
        self.manager.close_all_windows();
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: u64) -> bool {
        self.manager.focus_window(id)
    }

    #[wasm_bindgen]
    pub fn move_window(&mut self, id: u64, x: i32, y: i32) -> bool {
        self.manager.move_window(id, x, y)
    }

    #[wasm_bindgen]
    pub fn resize_window(&mut self, id: u64, width: i32, height: i32) -> bool {
        self.manager.resize_window(id, width, height)
    }

    #[wasm_bindgen]
    pub fn set_window_title(&mut self, id: u64, title: &str) -> bool {
        self.manager.set_window_title(id, title)
    }

    #[wasm_bindgen]
    pub fn show_window(&mut self, id: u64) -> bool {
        self.manager.show_window(id)
    }

    #[wasm_bindgen]
    pub fn hide_window(&mut self, id: u64) -> bool {
        self.manager.hide_window(id)
    }

    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: u64) -> bool {
        self.manager.minimize_window(id)
    }

    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: u64) -> bool {
        self.manager.maximize_window(id)
    }

    #[wasm_bindgen]
    pub fn restore_window(&mut self, id: u64) -> bool {
        self.manager.restore_window(id)
    }

    #[wasm_bindgen]
    pub fn get_focused_window(&self) -> Option<u64> {
        self.manager.focused_id()
    }

    // =========================================================================
    // Layout
    // =========================================================================

    #[wasm_bindgen]
    pub fn cascade_windows(&mut self) {
        self.manager.cascade_windows();
    }

    #[wasm_bindgen]
    pub fn tile_windows(&mut self) {
        self.manager.tile_windows();
    }

    #[wasm_bindgen]
    pub fn center_window(&mut self, id: u64) -> bool {
        self.manager.center_window(id)
    }

    #[wasm_bindgen]
    pub fn set_viewport(&mut self, width: i32, height: i32) {
        self.manager.set_viewport(width, height);
    }

    #[wasm_bindgen]
    pub fn render_all(&self) {
        self.manager.render_all();
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    #[wasm_bindgen]
    pub fn start_tracking(&mut self) -> bool {
        self.manager.start_tracking()
    }

    #[wasm_bindgen]
    pub fn stop_tracking(&mut self) {
        self.manager.stop_tracking();
    }

    #[wasm_bindgen]
    pub fn is_tracking(&self) -> bool {
        self.manager.is_tracking()
    }

    /// Call from the host timer; ticks when the poll interval has elapsed
    #[wasm_bindgen]
    pub fn poll(&mut self) -> u32 {
        self.manager.poll() as u32
    }

    #[wasm_bindgen]
    pub fn tick(&mut self) -> u32 {
        self.manager.tick() as u32
    }

    // =========================================================================
    // Events & state
    // =========================================================================

    /// Call `callback(eventJson)` for every window event. Returns a handle
    /// for `unsubscribe`.
    #[wasm_bindgen]
    pub fn subscribe(&mut self, callback: Function) -> u32 {
        let id = self.manager.subscribe(move |event: &WindowEvent| {
            let Ok(json) = serde_json::to_string(event) else { return };
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                log::warn!("window event listener threw: {err:?}");
            }
        });
        self.subscriptions.push(Some(id));
        (self.subscriptions.len() - 1) as u32
    }

    #[wasm_bindgen]
    pub fn unsubscribe(&mut self, handle: u32) -> bool {
        match self.subscriptions.get_mut(handle as usize).and_then(Option::take) {
            Some(id) => self.manager.unsubscribe(id),
            None => false,
        }
    }

    /// Window state as JSON, or `undefined` for unknown ids
    #[wasm_bindgen]
    pub fn get_window_json(&self, id: u64) -> Option<String> {
        let state = self.manager.window_state(id)?;
        serde_json::to_string(&state).ok()
    }

    /// All windows (back to front), focus and viewport as JSON
    #[wasm_bindgen]
    pub fn get_snapshot_json(&self) -> String {
        self.manager.snapshot_json()
    }
}
