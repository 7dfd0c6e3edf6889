use super::*;

fn world_position(system: &OrreryState, id: BodyId) -> Option<DVec3> {
    system
        .frames
        .get(id.0)
        .map(|frame| convert_vec(frame.world_position))
}

/// Spin as a quaternion, wrapped to a single turn before narrowing to f32.
fn spin_rotation(spin: &orrery::Rotation) -> Quat {
    let axis = convert_vec(spin.axis).as_vec3().normalize_or(Vec3::Y);
    Quat::from_axis_angle(axis, spin.angle.rem_euclid(std::f64::consts::TAU) as f32)
}

pub fn set_positions(
    system: Res<OrreryState>,
    mut query: Query<(&SystemBody, &mut Transform, &BodyRadius)>,
    camera: Query<&Transform, (With<Camera3d>, Without<SystemBody>)>,
) {
    let Ok(camera) = camera.get_single() else {
        return;
    };

    for (body, mut transform, radius) in query.iter_mut() {
        let Some(frame) = system.frames.get(body.0.0) else {
            continue;
        };

        let pos = convert_vec(frame.world_position).as_vec3();
        // Keep distant bodies visible: never smaller than a fixed share of the view distance.
        let distance = pos.distance(camera.translation);

        *transform = Transform::from_translation(pos)
            .with_rotation(spin_rotation(&frame.local.spin))
            .with_scale(Vec3::splat((radius.0 as f32).max(distance / 200.0)));
    }
}

pub fn update_paths(
    mut polylines: ResMut<Assets<Polyline>>,
    system: Res<OrreryState>,
    query: Query<(&ComputedPath, &PolylineHandle, Option<&ParentBody>)>,
) {
    for (ComputedPath(path), handle, parent) in query.iter() {
        let Some(line) = polylines.get_mut(&handle.0) else {
            continue;
        };
        line.vertices.clear();

        let origin = parent
            .and_then(|&ParentBody(parent)| world_position(&system, parent))
            .unwrap_or_default();

        // Close the loop back onto the first point.
        line.vertices.extend(
            path.iter()
                .chain(path.first())
                .map(|point| (origin + *point).as_vec3()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_survives_long_runs() {
        let axis = orrery::Vec3::new(0.0, 1.0, 0.0);
        let turns = 1.0e9 * std::f64::consts::TAU;
        let spun = spin_rotation(&orrery::Rotation::new(axis, turns + 0.25));
        let fresh = spin_rotation(&orrery::Rotation::new(axis, 0.25));

        assert!(spun.angle_between(fresh) < 1e-3);
    }
}
