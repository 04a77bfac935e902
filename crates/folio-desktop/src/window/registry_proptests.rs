use super::*;
use proptest::prelude::*;

const KEYS: [&str; 4] = ["finder", "safari", "photos", "nonexistent"];

#[derive(Clone, Debug)]
enum Op {
    Open(usize),
    Close(usize),
    Focus(usize),
    Minimize(usize),
    Maximize(usize),
}

fn op() -> impl Strategy<Value = Op> {
    let key = 0..KEYS.len();
    prop_oneof![
        key.clone().prop_map(Op::Open),
        key.clone().prop_map(Op::Close),
        key.clone().prop_map(Op::Focus),
        key.clone().prop_map(Op::Minimize),
        key.prop_map(Op::Maximize),
    ]
}

proptest! {
    /// Every focus-granting operation yields a value above all earlier grants
    #[test]
    fn stacking_is_strictly_monotonic(ops in proptest::collection::vec(op(), 1..64)) {
        let mut registry =
            WindowRegistry::new(&DesktopConfig::with_slots(["finder", "safari", "photos"]));
        let mut highest: ZIndex = 0;

        for op in ops {
            match op {
                Op::Open(k) | Op::Focus(k) | Op::Maximize(k) => {
                    let key = KEYS[k];
                    let result = match op {
                        Op::Open(_) => registry.open(key, None, None).map(|w| w.z_index),
                        Op::Focus(_) => registry.focus(key).map(|w| w.z_index),
                        _ => registry.maximize(key).map(|w| w.z_index),
                    };
                    if let Ok(z) = result {
                        prop_assert!(z > highest, "{} not above {}", z, highest);
                        highest = z;
                    }
                }
                Op::Close(k) | Op::Minimize(k) => {
                    let key = KEYS[k];
                    let result = match op {
                        Op::Close(_) => registry.close(key).map(|w| w.z_index),
                        _ => registry.minimize(key).map(|w| w.z_index),
                    };
                    if let Ok(z) = result {
                        prop_assert_eq!(z, registry.baseline_z_index());
                    }
                }
            }
            prop_assert!(registry.next_z_index() > highest);
        }
    }

    /// Operations on an unconfigured key never change the registry
    #[test]
    fn unknown_key_is_inert(ops in proptest::collection::vec(op(), 0..32), probe in 0usize..5) {
        let mut registry =
            WindowRegistry::new(&DesktopConfig::with_slots(["finder", "safari", "photos"]));
        for op in ops {
            let _ = match op {
                Op::Open(k) => registry.open(KEYS[k], None, None).map(|_| ()),
                Op::Close(k) => registry.close(KEYS[k]).map(|_| ()),
                Op::Focus(k) => registry.focus(KEYS[k]).map(|_| ()),
                Op::Minimize(k) => registry.minimize(KEYS[k]).map(|_| ()),
                Op::Maximize(k) => registry.maximize(KEYS[k]).map(|_| ()),
            };
        }

        let before: Vec<Window> = registry.windows().cloned().collect();
        let next = registry.next_z_index();
        let result = match probe {
            0 => registry.open("nonexistent", None, None).map(|_| ()),
            1 => registry.close("nonexistent").map(|_| ()),
            2 => registry.focus("nonexistent").map(|_| ()),
            3 => registry.minimize("nonexistent").map(|_| ()),
            _ => registry.maximize("nonexistent").map(|_| ()),
        };
        prop_assert!(result.is_err());
        prop_assert_eq!(registry.windows().cloned().collect::<Vec<_>>(), before);
        prop_assert_eq!(registry.next_z_index(), next);
    }
}
