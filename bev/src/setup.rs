use super::*;

pub fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut polyline_materials: ResMut<Assets<PolylineMaterial>>,
    mut polylines: ResMut<Assets<Polyline>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    system: Res<OrreryState>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 250.0, 350.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let sphere_mesh = meshes.add(Sphere::new(1.0).mesh().uv(32, 18));

    commands.spawn((
        SystemStar,
        Name::new("Star"),
        Mesh3d(sphere_mesh.clone()),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::hsl(45.0, 1.0, 0.6),
            unlit: true,
            ..Default::default()
        })),
        Transform::from_scale(Vec3::splat(2.0)),
    ));

    let count = system.orrery.len().max(1) as f32;
    let simulation = system.orrery.simulation();

    for (id, body) in system.orrery.bodies() {
        let hue = id.0 as f32 / count * 360.0;

        commands.spawn((
            SystemBody(id),
            Name::new(body.name().to_string()),
            BodyRadius(body.elements().radius()),
            Mesh3d(sphere_mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::hsl(hue, 0.6, 0.6),
                unlit: true,
                ..Default::default()
            })),
            Transform::IDENTITY,
        ));

        match body.orbit_path(PATH_SAMPLES, simulation) {
            Ok(path) => {
                let mut path_commands = commands.spawn((
                    ComputedPath(path.into_iter().map(convert_vec).collect()),
                    PolylineBundle {
                        polyline: PolylineHandle(polylines.add(Polyline::default())),
                        material: PolylineMaterialHandle(polyline_materials.add(PolylineMaterial {
                            width: 1.0,
                            color: Color::hsl(hue, 0.6, 0.4).to_linear(),
                            perspective: false,
                            ..Default::default()
                        })),
                        ..Default::default()
                    },
                ));
                if let Some(parent) = system.orrery.parent(id) {
                    path_commands.insert(ParentBody(parent));
                }
            }
            Err(err) => warn!("no orbit path for {}: {err}", body.name()),
        }
    }
}
