use glsandbox::math::prelude::*;
use glsandbox::scene::geometry::*;

fn vertices(data: &[f32]) -> Vec<Vector3<f32>> {
    data.chunks(COMPONENTS)
        .map(|v| Vector3::new(v[0], v[1], v[2]))
        .collect()
}

#[test]
fn triangle() {
    assert_eq!(vertex_count(&TRIANGLE_POSITIONS), 3);
    assert_eq!(vertex_count(&TRIANGLE_COLORS), 3);

    let p = vertices(&TRIANGLE_POSITIONS);
    let normal = (p[1] - p[0]).cross(p[2] - p[0]);
    assert!(normal.z > 0.0, "triangle should be counter-clockwise");

    for c in vertices(&TRIANGLE_COLORS) {
        assert!(c.x >= 0.0 && c.x <= 1.0);
        assert!(c.y >= 0.0 && c.y <= 1.0);
        assert!(c.z >= 0.0 && c.z <= 1.0);
    }
}

#[test]
fn cube() {
    assert_eq!(vertex_count(&CUBE_POSITIONS), 36);
    assert_eq!(vertex_count(&CUBE_NORMALS), 36);

    let positions = vertices(&CUBE_POSITIONS);
    let normals = vertices(&CUBE_NORMALS);

    for v in &positions {
        assert_eq!(v.x.abs(), 0.5);
        assert_eq!(v.y.abs(), 0.5);
        assert_eq!(v.z.abs(), 0.5);
    }

    for (i, face) in positions.chunks(3).enumerate() {
        let n = normals[i * 3];
        assert_eq!(n.magnitude2(), 1.0);
        assert_eq!(normals[i * 3 + 1], n);
        assert_eq!(normals[i * 3 + 2], n);

        // Front faces wind counter-clockwise seen from outside.
        let winding = (face[1] - face[0]).cross(face[2] - face[0]);
        assert!(winding.dot(n) > 0.0, "triangle {} winds against its normal", i);

        // Every vertex sits on the face the normal points out of.
        for v in face {
            assert_eq!(v.dot(n), 0.5);
        }
    }
}
