//! Operators applied to fields with known analytic derivatives.

use nabla_stencil::{curl, curl_planes, divergence, gradient, Plane};
use nabla_test_utils::{
    assert_all, assert_close, interior_offsets, line, radial, rotation_2d, sample, sample_scalar,
    shape,
};

#[test]
fn end_to_end_line() {
    let f = line(&[1.0f64, 3.0, 6.0, 10.0]);
    let g = gradient(&f).unwrap();
    assert_eq!(g.rank(), 1);
    assert_eq!(g.axis(0).unwrap().to_scalars(), vec![2.0, 2.5, 3.5, 4.0]);
}

#[test]
fn identity_has_unit_slope_everywhere() {
    let f = sample_scalar::<f64>(&[9], |x| x[0]);
    let g = gradient(&f).unwrap();
    assert!(g.axis(0).unwrap().scalars().all(|v| v == 1.0));
}

#[test]
fn square_has_slope_two_i_in_the_interior() {
    let n = 12;
    let f = sample_scalar::<f64>(&[n], |x| x[0] * x[0]);
    let d = gradient(&f).unwrap().into_axes().remove(0).to_scalars();
    for (i, v) in d.iter().enumerate().take(n - 1).skip(1) {
        assert_eq!(*v, 2.0 * i as f64, "index {i}");
    }
    // one-sided at the ends
    assert_eq!(d[0], 1.0);
    assert_eq!(d[n - 1], ((n - 1) * (n - 1) - (n - 2) * (n - 2)) as f64);
}

#[test]
fn single_precision_matches_double_on_small_integers() {
    let f32_field = line(&[1.0f32, 3.0, 6.0, 10.0]);
    let g = gradient(&f32_field).unwrap();
    assert_eq!(g.axis(0).unwrap().to_scalars(), vec![2.0f32, 2.5, 3.5, 4.0]);
}

#[test]
fn quadratic_surface_is_exact_in_the_interior() {
    // f = x^2 + 3xy - y^2: df/dx = 2x + 3y, df/dy = 3x - 2y
    let extents = [6, 7];
    let f = sample_scalar::<f64>(&extents, |x| x[0] * x[0] + 3.0 * x[0] * x[1] - x[1] * x[1]);
    let g = gradient(&f).unwrap();
    let dx = g.axis(0).unwrap().as_slice();
    let dy = g.axis(1).unwrap().as_slice();
    let s = shape(&extents);
    for at in interior_offsets(&s) {
        let c = s.coord(at).unwrap();
        let (x, y) = (c[0] as f64, c[1] as f64);
        assert_eq!(dx[at][0], 2.0 * x + 3.0 * y);
        assert_eq!(dy[at][0], 3.0 * x - 2.0 * y);
    }
}

#[test]
fn rotation_field() {
    let f = rotation_2d::<f64>(7);
    assert_all(&divergence(&f).unwrap(), 0.0, 1e-12);
    assert_all(&curl(&f).unwrap().into_scalar().unwrap(), -2.0, 1e-12);
}

#[test]
fn radial_fields_have_divergence_equal_to_rank() {
    assert_all(&divergence(&radial::<f64, 2>(&[4, 4])).unwrap(), 2.0, 0.0);
    assert_all(&divergence(&radial::<f64, 3>(&[3, 4, 5])).unwrap(), 3.0, 0.0);
    assert_all(&divergence(&radial::<f32, 4>(&[3, 2, 3, 4])).unwrap(), 4.0, 0.0);
}

#[test]
fn gradient_fields_are_curl_free() {
    // F = grad(x^2 y + y z^2) = (2xy, x^2 + z^2, 2yz)
    let f = sample::<f64, 3>(&[5, 5, 5], |x| {
        [
            2.0 * x[0] * x[1],
            x[0] * x[0] + x[2] * x[2],
            2.0 * x[1] * x[2],
        ]
    });
    let c = curl(&f).unwrap().into_vector().unwrap();
    let s = shape(&[5, 5, 5]);
    assert_eq!(c.extents(), s.extents());
    for at in interior_offsets(&s) {
        for k in 0..3 {
            assert!(c.as_slice()[at][k].abs() < 1e-12, "cell {at}: {:?}", c.as_slice()[at]);
        }
    }
}

#[test]
fn rigid_rotation_in_three_dimensions() {
    // F = w x r with w = (1, 2, 3): curl F = 2w
    let f = sample::<f64, 3>(&[4, 4, 4], |x| {
        let (a, b, c) = (1.0, 2.0, 3.0);
        [b * x[2] - c * x[1], c * x[0] - a * x[2], a * x[1] - b * x[0]]
    });
    let c = curl(&f).unwrap().into_vector().unwrap();
    let want = sample::<f64, 3>(&[4, 4, 4], |_| [2.0, 4.0, 6.0]);
    assert_close(&c, &want, 1e-12);
}

#[test]
fn four_dimensional_rotation_in_each_plane() {
    // F = (-y, x, -w, z) rotates in xy and zw only.
    let f = sample::<f64, 4>(&[3, 3, 3, 3], |x| [-x[1], x[0], -x[3], x[2]]);
    let b = curl(&f).unwrap().into_bivector().unwrap();
    for (plane, field) in b.iter() {
        let want = if plane == Plane::XY || plane == Plane::ZW {
            2.0
        } else {
            0.0
        };
        assert_all(field, want, 0.0);
    }
}

#[test]
fn rank_three_planes_agree_with_vector_curl() {
    let f = sample::<f64, 3>(&[4, 3, 5], |x| {
        [x[1] * x[2], x[0] * x[0] - x[2], x[0] * x[1] * x[1]]
    });
    let v = curl(&f).unwrap().into_vector().unwrap();
    let planes = curl_planes(&f).unwrap();
    let [cx, cy, cz] = v.components();
    assert_eq!(&cx, planes.get(Plane::YZ).unwrap());
    assert_eq!(cy, planes.oriented(2, 0).unwrap());
    assert_eq!(&cz, planes.get(Plane::XY).unwrap());
}

#[test]
fn planar_grid_keeps_the_out_of_plane_component() {
    // F = (0, 0, x) on a 4x4 grid is a shear in z: curl = (0, -1, 0).
    let f = sample::<f64, 3>(&[4, 4], |x| [0.0, 0.0, x[0]]);
    let v = curl(&f).unwrap().into_vector().unwrap();
    let [cx, cy, cz] = v.components();
    assert_all(&cx, 0.0, 0.0);
    assert_all(&cy, -1.0, 0.0);
    assert_all(&cz, 0.0, 0.0);

    let planes = curl_planes(&f).unwrap();
    assert_eq!(cy, planes.oriented(2, 0).unwrap());
}

#[test]
fn volume_grid_keeps_the_fourth_component() {
    // F = (0, 0, 0, x) on a 3x3x3 grid: only Ω_xw = ∂Fw/∂x = 1.
    let f = sample::<f64, 4>(&[3, 3, 3], |x| [0.0, 0.0, 0.0, x[0]]);
    let b = curl(&f).unwrap().into_bivector().unwrap();
    assert_eq!(b, curl_planes(&f).unwrap());
    assert_eq!(b.len(), 6);
    assert_all(b.get(Plane::XW).unwrap(), 1.0, 0.0);
    for plane in [Plane::XY, Plane::XZ, Plane::YZ, Plane::YW, Plane::ZW] {
        assert_all(b.get(plane).unwrap(), 0.0, 0.0);
    }
}

#[test]
fn four_component_gradient_differentiates_every_component() {
    let f = sample::<f64, 4>(&[3, 3, 3, 3], |x| {
        [x[0] + x[3], 2.0 * x[1] + x[3], 3.0 * x[2] + x[3], x[0] + x[1] + x[2] + x[3]]
    });
    let g = gradient(&f).unwrap();
    let want = [
        [1.0, 0.0, 0.0, 1.0],
        [0.0, 2.0, 0.0, 1.0],
        [0.0, 0.0, 3.0, 1.0],
        [1.0, 1.0, 1.0, 1.0],
    ];
    for (axis, row) in want.iter().enumerate() {
        assert!(g.axis(axis).unwrap().as_slice().iter().all(|v| v == row), "axis {axis}");
    }
}
