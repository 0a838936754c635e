//! Serializable icon properties as supplied by a host.
//!
//! [`IconProps`] mirrors the component properties a templating layer passes
//! in, with the same camelCase keys. Values are taken leniently: numbers may
//! arrive as strings, and anything unusable falls back to the identity value
//! when [`resolved`](IconProps::resolve).
//!
//! # Example
//!
//! ```
//! use bicon_renderer::IconProps;
//!
//! let props = IconProps::from_json(r#"{"icon": "check", "rotate": "45", "flipH": true}"#).unwrap();
//! let request = props.resolve();
//! assert_eq!(request.rotate, 45.0);
//! assert!(request.flip_h);
//!
//! let json = props.to_json().unwrap();
//! assert!(json.contains("\"flipH\":true"));
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::geometry::{parse_rotate, parse_scale, parse_shift, RawNumber};
use crate::request::{non_empty, IconRequest};

/// Raw icon properties.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "tsify", derive(tsify_next::Tsify))]
pub struct IconProps {
    /// Icon name in any supported case style.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "jsonschema", schemars(with = "Option<String>"))]
    pub icon: Option<String>,

    /// Color variant, emitted as `text-<variant>`.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "jsonschema", schemars(with = "Option<String>"))]
    pub variant: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<RawNumber>,

    /// Degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<RawNumber>,

    #[serde(default, deserialize_with = "lenient_bool", skip_serializing_if = "is_false")]
    #[cfg_attr(feature = "jsonschema", schemars(with = "bool"))]
    pub flip_h: bool,

    #[serde(default, deserialize_with = "lenient_bool", skip_serializing_if = "is_false")]
    #[cfg_attr(feature = "jsonschema", schemars(with = "bool"))]
    pub flip_v: bool,

    /// 1/16 em units, positive is right.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_h: Option<RawNumber>,

    /// 1/16 em units, positive is up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift_v: Option<RawNumber>,

    /// Relative font size, `1.25` renders at 125%.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_scale: Option<RawNumber>,

    /// CSS animation name, emitted as `b-icon-animation-<animation>`.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "jsonschema", schemars(with = "Option<String>"))]
    pub animation: Option<String>,

    #[serde(default, deserialize_with = "lenient_bool", skip_serializing_if = "is_false")]
    #[cfg_attr(feature = "jsonschema", schemars(with = "bool"))]
    pub stacked: bool,
}

impl IconProps {
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: Some(icon.into()),
            ..Self::default()
        }
    }

    /// Normalizes the raw values into a render request.
    pub fn resolve(&self) -> IconRequest {
        IconRequest {
            name: self.icon.clone().unwrap_or_default(),
            variant: self.variant.clone().and_then(non_empty),
            scale: parse_scale(self.scale.as_ref()),
            rotate: parse_rotate(self.rotate.as_ref()),
            flip_h: self.flip_h,
            flip_v: self.flip_v,
            shift_h: parse_shift(self.shift_h.as_ref()),
            shift_v: parse_shift(self.shift_v.as_ref()),
            font_scale: parse_scale(self.font_scale.as_ref()),
            animation: self.animation.clone().and_then(non_empty),
            stacked: self.stacked,
        }
    }

    /// Serializes the props to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the props to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes props from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<&IconRequest> for IconProps {
    fn from(req: &IconRequest) -> Self {
        let number = |value: f64, identity: f64| (value != identity).then_some(RawNumber::Number(value));
        Self {
            icon: non_empty(req.name.clone()),
            variant: req.variant.clone(),
            scale: number(req.scale, 1.0),
            rotate: number(req.rotate, 0.0),
            flip_h: req.flip_h,
            flip_v: req.flip_v,
            shift_h: number(req.shift_h, 0.0),
            shift_v: number(req.shift_v, 0.0),
            font_scale: number(req.font_scale, 1.0),
            animation: req.animation.clone(),
            stacked: req.stacked,
        }
    }
}

/// Booleans arrive as `true`, `"true"`, `""` (attribute present) or junk.
fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::String(s) => matches!(s.trim(), "" | "true"),
        _ => false,
    })
}

/// Strings that arrive as any other JSON type are dropped.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_props_resolve_to_identity() {
        let props = IconProps::from_json("{}").unwrap();
        assert_eq!(props.resolve(), IconRequest::default());
    }

    #[test]
    fn numeric_strings_and_numbers() {
        let props = IconProps::from_json(
            r#"{"icon": "x", "scale": "1.5", "rotate": 45, "shiftH": 8, "shiftV": "16", "fontScale": "1.25"}"#,
        )
        .unwrap();
        let req = props.resolve();
        assert_eq!(req.scale, 1.5);
        assert_eq!(req.rotate, 45.0);
        assert_eq!((req.shift_h, req.shift_v), (8.0, 16.0));
        assert_eq!(req.font_scale, 1.25);
    }

    #[test]
    fn malformed_values_fall_back() {
        let props = IconProps::from_json(
            r#"{"icon": null, "scale": "big", "rotate": {"deg": 4}, "shiftH": [1], "fontScale": -2, "flipH": 1, "flipV": "yes", "variant": ""}"#,
        )
        .unwrap();
        let req = props.resolve();
        assert_eq!(req.name, "");
        assert_eq!(req.scale, 1.0);
        assert_eq!(req.rotate, 0.0);
        assert_eq!(req.shift_h, 0.0);
        assert_eq!(req.font_scale, 1.0);
        assert!(!req.flip_h);
        assert!(!req.flip_v);
        assert!(req.variant.is_none());
    }

    #[test]
    fn mistyped_strings_are_dropped() {
        let props =
            IconProps::from_json(r#"{"icon": 42, "variant": 5, "animation": true, "rotate": 90}"#).unwrap();
        assert_eq!(props.icon, None);
        let req = props.resolve();
        assert_eq!(req.name, "");
        assert!(req.variant.is_none());
        assert!(req.animation.is_none());
        assert_eq!(req.rotate, 90.0);

        let props = IconProps::from_json(r#"{"icon": "check", "variant": ["danger"], "animation": {}}"#).unwrap();
        assert_eq!(props.resolve(), IconRequest::new("check"));
    }

    #[test]
    fn attribute_style_booleans() {
        let props = IconProps::from_json(r#"{"flipH": "", "flipV": "true", "stacked": true}"#).unwrap();
        assert!(props.flip_h);
        assert!(props.flip_v);
        assert!(props.stacked);
    }

    #[test]
    fn json_uses_camel_case_and_skips_defaults() {
        let mut props = IconProps::new("check");
        props.flip_h = true;
        props.font_scale = Some(RawNumber::Number(2.0));
        let json = props.to_json().unwrap();
        assert_eq!(json, r#"{"icon":"check","flipH":true,"fontScale":2.0}"#);
        assert!(props.to_json_pretty().unwrap().contains("\"fontScale\""));
    }

    #[test]
    fn request_round_trips_through_props() {
        let req = IconRequest::new("alert-circle-fill")
            .variant("danger")
            .rotate(90.0)
            .shift(1.0, 2.0)
            .flip_v(true)
            .animation("spin");
        let json = IconProps::from(&req).to_json().unwrap();
        assert_eq!(IconProps::from_json(&json).unwrap().resolve(), req);
    }
}
