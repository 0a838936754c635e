//! Transform composition.
//!
//! Rotation, scaling and mirroring share one center-pivoted transform on the
//! group that directly wraps the glyph. Shifting lives on a separate outer
//! group so the offset is applied in the unrotated, unscaled frame: a
//! shifted and rotated icon moves along the page axes, not along its own.

use crate::geometry::{format_number_with, shift_offset, signed_scale, PIVOT};
use crate::request::IconRequest;

/// The geometric modifiers that feed a [`TransformPlan`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modifiers {
    /// Rotation in degrees.
    pub rotate: f64,
    /// Horizontal scale, negative when mirrored.
    pub sx: f64,
    /// Vertical scale, negative when mirrored.
    pub sy: f64,
    /// Horizontal shift in shift units.
    pub shift_h: f64,
    /// Vertical shift in shift units, positive is up.
    pub shift_v: f64,
}

impl Default for Modifiers {
    fn default() -> Self {
        Self {
            rotate: 0.0,
            sx: 1.0,
            sy: 1.0,
            shift_h: 0.0,
            shift_v: 0.0,
        }
    }
}

impl From<&IconRequest> for Modifiers {
    fn from(req: &IconRequest) -> Self {
        let (sx, sy) = signed_scale(req.scale, req.flip_h, req.flip_v);
        Self {
            rotate: req.rotate,
            sx,
            sy,
            shift_h: req.shift_h,
            shift_v: req.shift_v,
        }
    }
}

/// The transforms to emit for one render, outermost first.
///
/// Each present transform becomes its own nested `<g>`. The two are never
/// merged into one string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformPlan {
    /// `translate(x y)` for the outer shift group.
    pub shift: Option<String>,
    /// `translate(10 10) [rotate(r)] [scale(sx sy)] translate(-10 -10)`
    /// for the group wrapping the glyph.
    pub pivot: Option<String>,
}

impl TransformPlan {
    pub fn compose(m: Modifiers) -> Self {
        let mut buf = ryu_js::Buffer::new();
        let has_rotate = m.rotate != 0.0;
        let has_scale = m.sx != 1.0 || m.sy != 1.0;

        let pivot = (has_rotate || has_scale).then(|| {
            let center = format_number_with(PIVOT, &mut buf).to_string();
            let mut parts = vec![format!("translate({center} {center})")];
            if has_rotate {
                parts.push(format!("rotate({})", format_number_with(m.rotate, &mut buf)));
            }
            if has_scale {
                let sx = format_number_with(m.sx, &mut buf).to_string();
                let sy = format_number_with(m.sy, &mut buf);
                parts.push(format!("scale({sx} {sy})"));
            }
            parts.push(format!("translate(-{center} -{center})"));
            parts.join(" ")
        });

        let shift = (m.shift_h != 0.0 || m.shift_v != 0.0).then(|| {
            let (dx, dy) = shift_offset(m.shift_h, m.shift_v);
            let dx = format_number_with(dx, &mut buf).to_string();
            let dy = format_number_with(dy, &mut buf);
            format!("translate({dx} {dy})")
        });

        let plan = Self { shift, pivot };
        tracing::trace!(shift = ?plan.shift, pivot = ?plan.pivot, "composed transform plan");
        plan
    }

    pub fn for_request(req: &IconRequest) -> Self {
        Self::compose(Modifiers::from(req))
    }

    /// Transform strings in nesting order, outermost first.
    pub fn transforms(&self) -> Vec<&str> {
        self.shift
            .iter()
            .chain(self.pivot.iter())
            .map(String::as_str)
            .collect()
    }

    pub fn is_identity(&self) -> bool {
        self.shift.is_none() && self.pivot.is_none()
    }
}
