//! JavaScript bindings for WASM builds.
//!
//! Only available with the `tsify` feature, which also emits TypeScript
//! declarations for [`IconProps`].
//!
//! ```javascript
//! import init, { renderIcon, renderIconTree } from 'bicon-renderer';
//!
//! await init();
//! const markup = renderIcon({ icon: 'check', rotate: 45, variant: 'success' });
//! ```

use wasm_bindgen::prelude::*;

use crate::props::IconProps;
use crate::renderer::IconRenderer;

/// Renders props to SVG markup using the global registry.
#[wasm_bindgen(js_name = "renderIcon")]
pub fn render_icon(props: JsValue) -> Result<String, JsError> {
    let props: IconProps = serde_wasm_bindgen::from_value(props)
        .map_err(|e| JsError::new(&format!("Invalid icon props: {}", e)))?;
    Ok(IconRenderer::global().render_props(&props).to_svg())
}

/// Renders props to an element tree object for a host runtime to mount.
#[wasm_bindgen(js_name = "renderIconTree")]
pub fn render_icon_tree(props: JsValue) -> Result<JsValue, JsError> {
    let props: IconProps = serde_wasm_bindgen::from_value(props)
        .map_err(|e| JsError::new(&format!("Invalid icon props: {}", e)))?;
    let tree = IconRenderer::global().render_props(&props);
    serde_wasm_bindgen::to_value(&tree)
        .map_err(|e| JsError::new(&format!("Failed to convert element tree: {}", e)))
}
