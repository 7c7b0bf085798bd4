use proptest::num::f32::NORMAL;
use proptest::prelude::*;
use proptest::strategy::Strategy;
use talus_geom::Vec3;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn approx_abs_rel(a: f32, b: f32, atol: f32, rtol: f32) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= atol + rtol * scale
}

fn vapprox(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps) && approx(a.z, b.z, eps)
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    NORMAL.prop_filter("bounded", |v| v.is_finite() && v.abs() <= 1e6)
}

fn arb_vec3() -> impl Strategy<Value = Vec3> {
    (bounded_f32(), bounded_f32(), bounded_f32()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    // a + b == b + a
    #[test]
    fn add_commutative(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(vapprox(a + b, b + a, 1e-5));
    }

    // a + ZERO == a and a - a == ZERO
    #[test]
    fn zero_identity(a in arb_vec3()) {
        prop_assert!(vapprox(a + Vec3::ZERO, a, 1e-6));
        prop_assert!(vapprox(a - a, Vec3::ZERO, 1e-6));
    }

    // dot(a, b) == dot(b, a)
    #[test]
    fn dot_symmetric(a in arb_vec3(), b in arb_vec3()) {
        prop_assert!(approx_abs_rel(a.dot(b), b.dot(a), 1e-4, 1e-5));
    }

    // cross(a, b) is orthogonal to both inputs
    #[test]
    fn cross_orthogonal(a in arb_vec3(), b in arb_vec3()) {
        let c = a.cross(b);
        let scale = a.length() * b.length() * c.length();
        prop_assert!(c.dot(a).abs() <= 1e-3 + 1e-5 * scale);
        prop_assert!(c.dot(b).abs() <= 1e-3 + 1e-5 * scale);
    }

    // length scales linearly with scalar multiplication
    #[test]
    fn length_scales(a in arb_vec3(), k in -1e3f32..1e3) {
        prop_assert!(approx_abs_rel((a * k).length(), a.length() * k.abs(), 1e-3, 1e-4));
    }
}
