use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spinraster::bench::{EdgeFunctionRasterizer, FlatShader, FrameBuffer, Triangle};
use spinraster::colors;
use spinraster::math::vec3::Vec3;
use spinraster::prelude::{Engine, FrameInput, Mat4, Mesh, RenderConfig};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn create_buffer() -> FrameBuffer {
    FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT, colors::BACKGROUND)
}

fn small_triangle() -> Triangle {
    Triangle::new([
        Vec3::new(100.0, 100.0, 1.0),
        Vec3::new(120.0, 100.0, 1.0),
        Vec3::new(110.0, 120.0, 1.0),
    ])
}

fn medium_triangle() -> Triangle {
    Triangle::new([
        Vec3::new(100.0, 100.0, 1.0),
        Vec3::new(300.0, 100.0, 1.0),
        Vec3::new(200.0, 300.0, 1.0),
    ])
}

fn large_triangle() -> Triangle {
    Triangle::new([
        Vec3::new(50.0, 50.0, 1.0),
        Vec3::new(750.0, 100.0, 1.0),
        Vec3::new(400.0, 550.0, 1.0),
    ])
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let edge_fn = EdgeFunctionRasterizer::new();
    let shader = FlatShader::new(colors::RED, [1.0, 0.5, 0.25]);

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(
            BenchmarkId::new("edge_function", name),
            &triangle,
            |b, tri| {
                let mut fb = create_buffer();
                b.iter(|| {
                    fb.clear();
                    edge_fn.fill_triangle(black_box(tri), &mut fb, &shader);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_many_triangles(c: &mut Criterion) {
    let mut group = c.benchmark_group("many_triangles");

    let edge_fn = EdgeFunctionRasterizer::new();
    let shader = FlatShader::new(colors::RED, [1.0; 3]);

    // Generate a grid of small triangles
    let triangles: Vec<Triangle> = (0..20)
        .flat_map(|row| {
            (0..20).map(move |col| {
                let x = col as f32 * 40.0;
                let y = row as f32 * 30.0;
                Triangle::new([
                    Vec3::new(x, y, 1.0),
                    Vec3::new(x + 35.0, y, 1.0),
                    Vec3::new(x + 17.5, y + 25.0, 1.0),
                ])
            })
        })
        .collect();

    group.bench_function("edge_function_400_triangles", |b| {
        let mut fb = create_buffer();
        b.iter(|| {
            fb.clear();
            for tri in &triangles {
                edge_fn.fill_triangle(black_box(tri), &mut fb, &shader);
            }
        });
    });

    group.finish();
}

fn benchmark_full_frame(c: &mut Criterion) {
    let config = RenderConfig::default();
    let mut engine = Engine::new(&config);
    let mesh = Mesh::cube();
    let input = FrameInput::new(Mat4::rotation_xyz(0.6, 0.8, 0.3));

    c.bench_function("cube_frame_800x600", |b| {
        b.iter(|| engine.render(black_box(&mesh), None, black_box(&input)));
    });
}

criterion_group!(
    benches,
    benchmark_single_triangle,
    benchmark_many_triangles,
    benchmark_full_frame
);
criterion_main!(benches);
