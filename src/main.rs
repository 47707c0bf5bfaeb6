//! viscone demo - generate every shape variant inside a walled room
//!
//! Builds a small obstacle scene, places one emitter per shape variant,
//! runs an authoring tick for each, and logs the resulting mesh sizes and
//! how many rays the walls clipped. Pass a path to an emitter JSON file
//! to generate that emitter instead.

use nalgebra::Point3;

use viscone::{
    trace_rays, ArrowParams, CircleParams, EmitterConfig, GenerationMode, HalfEllipseParams,
    ObstacleScene, OffsetTriangleParams, Pose, RectangleParams, RhombusParams, ShapeParams,
    VisionMeshGenerator, Wall,
};

fn room() -> ObstacleScene {
    // A 12x12 room with a pillar wall near the middle.
    ObstacleScene::with_walls(vec![
        Wall::new([-6.0, 6.0], [6.0, 6.0]),
        Wall::new([6.0, 6.0], [6.0, -6.0]),
        Wall::new([6.0, -6.0], [-6.0, -6.0]),
        Wall::new([-6.0, -6.0], [-6.0, 6.0]),
        Wall::new([-1.0, 2.5], [1.0, 2.5]),
    ])
}

fn demo_shapes() -> Vec<ShapeParams> {
    vec![
        ShapeParams::Circle(CircleParams {
            vision_angle: 120.0,
            vision_range: 5.0,
            precision: 120,
        }),
        ShapeParams::Rectangle(RectangleParams::default()),
        ShapeParams::Rhombus(RhombusParams::default()),
        ShapeParams::Arrow(ArrowParams::default()),
        ShapeParams::OffsetTriangle(OffsetTriangleParams::default()),
        ShapeParams::HalfEllipse(HalfEllipseParams::default()),
    ]
}

fn main() {
    env_logger::init();
    log::info!("starting viscone demo");

    let scene = room();
    let mut generator = VisionMeshGenerator::new();

    let (pose, shapes) = match std::env::args().nth(1) {
        Some(path) => {
            let config = EmitterConfig::load_or_default(&path);
            log::info!("generating emitter '{}'", config.name);
            generator.set_mask(config.mask);
            (config.pose(), vec![config.shape])
        }
        None => (Pose::from_yaw(Point3::origin(), 0.0), demo_shapes()),
    };

    for shape in &shapes {
        match generator.tick(&pose, shape, &scene, GenerationMode::Authoring) {
            Ok(_) => {
                let mesh = generator.mesh();
                let trace = trace_rays(&pose, shape, &scene, generator.mask());
                log::info!(
                    "{}: {} vertices, {} triangles, {}/{} rays clipped",
                    mesh.name,
                    mesh.vertex_count(),
                    mesh.triangle_count(),
                    trace.occluded_count(),
                    trace.rays.len(),
                );
            }
            Err(e) => log::error!("{}: generation failed: {e}", shape.mesh_name()),
        }
    }
}
