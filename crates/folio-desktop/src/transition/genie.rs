//! Origin-relative geometry of the genie effect

use crate::math::{Rect, Transform};

/// Transform that collapses a window onto its trigger rectangle
///
/// `dest` is the window's on-screen rectangle while it sits at `resting`.
/// The result keeps `resting`'s translation plus the centre-to-centre delta
/// from `dest` to `origin`, and scales by the ratio of the two sizes, so the
/// window appears exactly on top of the trigger at the trigger's size.
///
/// Opening animates from this transform to `resting`; closing animates from
/// `resting` to this transform. Returns `None` for a degenerate `dest` or a
/// non-finite `origin`, in which case callers use the fade-and-rise fallback.
pub fn genie_transform(origin: Rect, dest: Rect, resting: Transform) -> Option<Transform> {
    let measurable = [origin.x, origin.y, origin.width, origin.height]
        .iter()
        .all(|v| v.is_finite());
    if dest.is_empty() || !measurable {
        return None;
    }
    let offset = origin.center() - dest.center();
    Some(Transform {
        x: resting.x + offset.x,
        y: resting.y + offset.y,
        scale_x: resting.scale_x * origin.width / dest.width,
        scale_y: resting.scale_y * origin.height / dest.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genie_from_dock_icon() {
        let origin = Rect::new(460.0, 1000.0, 64.0, 64.0);
        let dest = Rect::new(200.0, 100.0, 640.0, 480.0);
        let t = genie_transform(origin, dest, Transform::IDENTITY).unwrap();

        // Centre of dock icon is (492, 1032); centre of window is (520, 340)
        assert!((t.x - -28.0).abs() < 0.001);
        assert!((t.y - 692.0).abs() < 0.001);
        assert!((t.scale_x - 0.1).abs() < 0.001);
        assert!((t.scale_y - 64.0 / 480.0).abs() < 0.001);

        // Applying it to the window's layout box lands on the icon
        let visual = t.apply(dest);
        assert!((visual.x - origin.x).abs() < 0.01);
        assert!((visual.y - origin.y).abs() < 0.01);
        assert!((visual.width - origin.width).abs() < 0.01);
    }

    #[test]
    fn test_genie_keeps_resting_translation() {
        let layout = Rect::new(0.0, 0.0, 400.0, 300.0);
        let resting = Transform::at(120.0, 40.0);
        let dest = resting.apply(layout);
        let origin = Rect::new(0.0, 700.0, 40.0, 30.0);

        let t = genie_transform(origin, dest, resting).unwrap();
        let visual = t.apply(layout);
        assert!((visual.center().x - origin.center().x).abs() < 0.01);
        assert!((visual.center().y - origin.center().y).abs() < 0.01);
        assert!((visual.width - 40.0).abs() < 0.01);
    }

    #[test]
    fn test_genie_degenerate_destination() {
        let origin = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(genie_transform(origin, Rect::default(), Transform::IDENTITY).is_none());
    }

    #[test]
    fn test_genie_rejects_non_finite_origin() {
        let dest = Rect::new(200.0, 100.0, 640.0, 480.0);
        for origin in [
            Rect::new(f32::NAN, 1000.0, 64.0, 64.0),
            Rect::new(460.0, f32::INFINITY, 64.0, 64.0),
            Rect::new(460.0, 1000.0, f32::NAN, 64.0),
            Rect::new(460.0, 1000.0, 64.0, f32::NEG_INFINITY),
        ] {
            assert!(genie_transform(origin, dest, Transform::IDENTITY).is_none());
        }
    }
}
