use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::category::CategoryTable;
use crate::wheel::Wheel;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// JS-facing wrapper around the wheel state machine.
///
/// The host owns the spin animation and its delay: it calls `spin`, runs the
/// animation, then calls `finish_spin` when the animation settles.
#[wasm_bindgen]
pub struct WheelWidget {
    wheel: Wheel,
}

#[wasm_bindgen]
impl WheelWidget {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str, seed: Option<u64>) -> Result<WheelWidget, JsValue> {
        init_panic_hook();

        let table = CategoryTable::from_json(config_json)
            .map_err(|e| JsValue::from(e.to_string()))?;

        let seed = seed.unwrap_or_else(|| (js_sys::Math::random() * (u64::MAX as f64)) as u64);

        console::log_1(&format!("Using seed: {}", seed).into());

        Ok(WheelWidget {
            wheel: Wheel::new(table, seed),
        })
    }

    /// Arm a spin; returns false when the wheel is locked.
    pub fn spin(&mut self) -> bool {
        self.wheel.spin()
    }

    /// Settle the in-flight spin; returns the selected category name.
    pub fn finish_spin(&mut self) -> Option<String> {
        self.wheel.finish_spin().map(str::to_owned)
    }

    /// Draw one tile; returns the drawn word, or None when gated off.
    pub fn draw_tile(&mut self) -> Option<String> {
        self.wheel.draw_tile().map(str::to_owned)
    }

    pub fn can_spin(&self) -> bool {
        self.wheel.can_spin()
    }

    pub fn can_draw(&self) -> bool {
        self.wheel.can_draw()
    }

    pub fn pointer_angle(&self) -> f32 {
        self.wheel.displayed_angle()
    }

    /// Full view model as a JSON string.
    pub fn view(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.wheel.view()).map_err(|e| JsValue::from(e.to_string()))
    }
}
