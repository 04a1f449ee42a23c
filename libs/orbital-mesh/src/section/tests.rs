use super::*;
use approx::assert_relative_eq;
use config::constants::SectionConfig;

fn single_wall(steps: u32) -> SectionConfig {
    SectionConfig::new(35.0e6, 4.5e9, 2.0e6, 10.0, steps, Variant::SingleWall)
}

fn double_wall(steps: u32) -> SectionConfig {
    SectionConfig::new(35.0e6, 4.5e9, 2.0e6, 10.0, steps, Variant::DoubleWall)
}

#[test]
fn test_params_scaled_to_unit_width() {
    let params = SectionParams::from_config(&double_wall(32));
    assert_eq!(params.half_width, 0.5);
    assert_relative_eq!(params.radius, 4.5e9 / 35.0e6 * 0.5, max_relative = 1e-12);
    assert_relative_eq!(
        params.wall_radius,
        (4.5e9 * 0.5 - 2.0e6) / 35.0e6,
        max_relative = 1e-12
    );
    assert_eq!(params.angle_increment(), 0.3125);
}

#[test]
fn test_angle_increment_zero_steps_is_finite() {
    let params = SectionParams::from_config(&double_wall(0));
    assert_eq!(params.angle_increment(), 0.0);
}

#[test]
fn test_arc_point_recentres_outer_surface() {
    let params = SectionParams::from_config(&single_wall(5));
    let (x, y) = params.arc_point(params.radius, 0.0);
    assert_eq!(x, 0.0);
    assert_eq!(y, 0.0);

    let (x, y) = params.arc_point(params.radius, 0.1);
    assert_relative_eq!(x, params.radius * (0.1f64.cos() - 1.0), max_relative = 1e-12);
    assert_relative_eq!(y, params.radius * 0.1f64.sin(), max_relative = 1e-12);
}

#[test]
fn test_double_wall_profile_order() {
    let params = SectionParams::from_config(&double_wall(4));
    let sample = Sample { index: 0, angle: 0.0 };
    let profile = params.profile(&sample);
    assert_eq!(profile.len(), 8);

    let wall_x = params.wall_radius - params.radius;
    let e = params.wall_face_offset;
    let expected = [
        DVec3::new(0.0, 0.0, -0.5 - e),
        DVec3::new(wall_x, 0.0, -0.5 - e),
        DVec3::new(wall_x, 0.0, -0.5 + e),
        DVec3::new(0.0, 0.0, -0.5 + e),
        DVec3::new(0.0, 0.0, 0.5 - e),
        DVec3::new(wall_x, 0.0, 0.5 - e),
        DVec3::new(wall_x, 0.0, 0.5 + e),
        DVec3::new(0.0, 0.0, 0.5 + e),
    ];
    for (got, want) in profile.iter().zip(expected) {
        assert_relative_eq!(got.x, want.x, epsilon = 1e-9);
        assert_relative_eq!(got.y, want.y, epsilon = 1e-9);
        assert_relative_eq!(got.z, want.z, epsilon = 1e-12);
    }
}

#[test]
fn test_single_wall_profile() {
    let params = SectionParams::from_config(&single_wall(4));
    let profile = params.profile(&Sample { index: 2, angle: 0.05 });
    assert_eq!(profile.len(), 2);
    assert_eq!(profile[0].z, -0.5);
    assert_eq!(profile[1].z, 0.5);
    assert_eq!(profile[0].x, profile[1].x);
    assert_eq!(profile[0].y, profile[1].y);
}

#[test]
fn test_double_wall_counts() {
    for steps in [2, 5, 32] {
        let section = build_section(&double_wall(steps));
        let n = steps as usize;
        assert_eq!(section.mesh.vertex_count(), n * 8);
        assert_eq!(section.mesh.quad_count(), (n - 1) * 7);
        assert!(section.mesh.validate().is_ok());
    }
}

#[test]
fn test_single_wall_counts() {
    let section = build_section(&single_wall(5));
    assert_eq!(section.mesh.vertex_count(), 10);
    assert_eq!(section.mesh.quad_count(), 4);
    assert_eq!(section.mesh.vertex(0).z, -0.5);
    assert!(section.mesh.validate().is_ok());
}

#[test]
fn test_strip_indices() {
    let section = build_section(&double_wall(3));
    let quads = section.mesh.quads();
    // First strip of the first pair, last strip of the last pair
    assert_eq!(quads[0], [0, 1, 9, 8]);
    assert_eq!(quads[6], [6, 7, 15, 14]);
    assert_eq!(quads[13], [14, 15, 23, 22]);

    let section = build_section(&single_wall(3));
    assert_eq!(section.mesh.quads(), &[[0, 1, 3, 2], [2, 3, 5, 4]]);
}

#[test]
fn test_single_step_has_no_faces() {
    let section = build_section(&double_wall(1));
    assert_eq!(section.mesh.vertex_count(), 8);
    assert_eq!(section.mesh.quad_count(), 0);

    let section = build_section(&single_wall(1));
    assert_eq!(section.mesh.vertex_count(), 2);
    assert_eq!(section.mesh.quad_count(), 0);
}

#[test]
fn test_zero_steps_is_empty() {
    let section = build_section(&double_wall(0));
    assert!(section.mesh.is_empty());
    assert_eq!(section.mesh.quad_count(), 0);
}

#[test]
fn test_wall_as_thick_as_radius_collapses() {
    let cfg = SectionConfig::new(35.0e6, 4.5e9, 2.25e9, 10.0, 4, Variant::DoubleWall);
    let section = build_section(&cfg);
    assert_eq!(section.params.wall_radius, 0.0);

    // Every wall vertex sits at the re-centring offset on the axis
    for sample in 0..4 {
        let wall = section.mesh.vertex(sample * 8 + 1);
        assert_eq!(wall.x, -section.params.radius);
        assert_eq!(wall.y, 0.0);
    }
    assert!(section.mesh.validate().is_ok());
}

#[test]
fn test_inverted_wall_still_builds() {
    let cfg = SectionConfig::new(35.0e6, 4.5e9, 3.0e9, 10.0, 4, Variant::DoubleWall);
    let section = build_section(&cfg);
    assert!(section.params.wall_radius < 0.0);
    assert_eq!(section.mesh.vertex_count(), 32);
    assert_eq!(section.mesh.quad_count(), 21);
}
