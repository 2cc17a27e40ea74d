//! Core rendering engine.
//!
//! The [`Engine`] struct is the main entry point for the renderer. It owns
//! the frame buffer and runs one full pass per call to [`Engine::render`]:
//!
//! 1. clear the color and depth buffers
//! 2. transform vertices, accumulate normals and light them ([`PreparedMesh`])
//! 3. project to screen space ([`Projection`])
//! 4. cull, rasterize and shade every triangle ([`EdgeFunctionRasterizer`])
//!
//! Scratch vectors live on the engine and are reused from frame to frame.

use crate::colors::Color;
use crate::config::RenderConfig;
use crate::frame::FrameInput;
use crate::light::DirectionalLight;
use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::prepare::PreparedMesh;
use crate::projection::{screen_center, Projection};
use crate::render::{
    EdgeFunctionRasterizer, FlatShader, FrameBuffer, TextureModulateShader, Triangle,
};
use crate::texture::Texture;

/// Counters for one rendered frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    /// Triangles in the mesh.
    pub triangles: usize,
    /// Triangles skipped because their vertex normals face away.
    pub culled: usize,
    /// Triangles skipped because they have zero screen area.
    pub degenerate: usize,
    /// Pixels that passed the depth test and were shaded.
    pub pixels_written: usize,
}

pub struct Engine {
    framebuffer: FrameBuffer,
    rasterizer: EdgeFunctionRasterizer,
    projection: Projection,
    light: DirectionalLight,
    prepared: PreparedMesh,
    screen_points: Vec<Vec3>,
}

impl Engine {
    /// Allocates the frame buffer at the configured size. The size never
    /// changes afterwards.
    pub fn new(config: &RenderConfig) -> Self {
        log::info!(
            "Creating {}x{} engine (fov {}, scale {}, z offset {})",
            config.width,
            config.height,
            config.fov,
            config.scale,
            config.z_offset
        );
        Self {
            framebuffer: FrameBuffer::new(config.width, config.height, config.clear_color),
            rasterizer: EdgeFunctionRasterizer::new(),
            projection: config.projection(),
            light: DirectionalLight::default(),
            prepared: PreparedMesh::new(),
            screen_points: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.framebuffer.width()
    }

    pub fn height(&self) -> u32 {
        self.framebuffer.height()
    }

    /// Projection used when a frame does not bring its own.
    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    pub fn light(&self) -> DirectionalLight {
        self.light
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.framebuffer.set_clear_color(color);
    }

    /// The last rendered frame, for presentation or capture.
    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// View-space data of the last rendered frame.
    pub fn prepared(&self) -> &PreparedMesh {
        &self.prepared
    }

    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Renders one frame of `mesh` into the frame buffer.
    ///
    /// With a texture bound every pixel samples it; otherwise the frame's
    /// flat color is used. Bad geometry never fails the frame, it only
    /// produces wrong or missing pixels.
    pub fn render(
        &mut self,
        mesh: &Mesh,
        texture: Option<&Texture>,
        input: &FrameInput,
    ) -> FrameStats {
        self.framebuffer.clear();

        self.prepared.prepare(mesh, &input.model, &input.view, &self.light);

        let projection = input.projection.unwrap_or(self.projection);
        let center = screen_center(self.framebuffer.width(), self.framebuffer.height());
        projection.project_into(self.prepared.positions(), center, &mut self.screen_points);

        let normals = self.prepared.normals();
        let intensities = self.prepared.intensities();
        let uvs = mesh.uvs();

        let mut stats = FrameStats {
            triangles: mesh.face_count(),
            ..FrameStats::default()
        };

        for face in mesh.faces() {
            let [i0, i1, i2] = face.indices();

            // Approximate cull on the averaged vertex normals, viewer looking down -Z.
            if (normals[i0].z + normals[i1].z + normals[i2].z) / 3.0 >= 0.0 {
                stats.culled += 1;
                continue;
            }

            let triangle = Triangle::new([
                self.screen_points[i0],
                self.screen_points[i1],
                self.screen_points[i2],
            ]);
            let lights = [intensities[i0], intensities[i1], intensities[i2]];

            let filled = match texture {
                Some(texture) => {
                    let shader =
                        TextureModulateShader::new(texture, [uvs[i0], uvs[i1], uvs[i2]], lights);
                    self.rasterizer
                        .fill_triangle(&triangle, &mut self.framebuffer, &shader)
                }
                None => {
                    let shader = FlatShader::new(input.flat_color, lights);
                    self.rasterizer
                        .fill_triangle(&triangle, &mut self.framebuffer, &shader)
                }
            };

            match filled {
                Some(pixels) => stats.pixels_written += pixels,
                None => stats.degenerate += 1,
            }
        }

        log::trace!(
            "Frame: {} triangles, {} culled, {} degenerate, {} pixels",
            stats.triangles,
            stats.culled,
            stats.degenerate,
            stats.pixels_written
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::math::mat4::Mat4;
    use crate::math::vec2::Vec2;
    use crate::mesh::Face;
    use crate::render::FAR_DEPTH;
    use approx::assert_relative_eq;

    const SIZE: u32 = 200;

    fn engine() -> Engine {
        let config = RenderConfig {
            width: SIZE,
            height: SIZE,
            ..RenderConfig::default()
        };
        Engine::new(&config)
    }

    /// Right triangle at z = -5, wound so its normal points along -Z.
    fn facing_triangle(uvs: Vec<Vec2>) -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, -5.0),
                Vec3::new(0.0, 1.0, -5.0),
                Vec3::new(1.0, 0.0, -5.0),
            ],
            uvs,
            vec![Face::new(0, 1, 2)],
        )
        .unwrap()
    }

    /// Interpolated intensity may land a hair under 1.0, which truncates a
    /// channel by one.
    fn assert_near_color(actual: Option<Color>, expected: Color) {
        let actual = actual.expect("pixel in bounds");
        for (a, e) in actual.to_bytes().into_iter().zip(expected.to_bytes()) {
            assert!(a.abs_diff(e) <= 1, "{actual:?} is not {expected:?}");
        }
    }

    fn assert_cleared(fb: &FrameBuffer) {
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                assert_eq!(fb.pixel(x, y), Some(fb.clear_color()));
                assert_eq!(fb.depth(x, y), Some(FAR_DEPTH));
            }
        }
    }

    #[test]
    fn flat_triangle_renders_red_with_uniform_depth() {
        let mut engine = engine();
        let mesh = facing_triangle(vec![]);
        let input = FrameInput::default().with_flat_color(colors::RED);
        let stats = engine.render(&mesh, None, &input);

        assert_eq!(stats.culled, 0);
        assert!(stats.pixels_written > 0);

        // z' = -5 * 25 + 200 = 75; the legs span 25 * 200 / 75 pixels from center.
        let fb = engine.framebuffer();
        let mut covered = 0;
        for y in 0..SIZE {
            for x in 0..SIZE {
                let depth = fb.depth(x, y).unwrap();
                if depth == FAR_DEPTH {
                    continue;
                }
                covered += 1;
                assert_relative_eq!(depth, 75.0, epsilon = 1e-3);
                // Normal is (0, 0, -1) everywhere, so brightness is 1.
                assert_near_color(fb.pixel(x, y), colors::RED);
            }
        }
        assert_eq!(covered, stats.pixels_written);
        assert_near_color(fb.pixel(110, 110), colors::RED);
        assert_eq!(fb.pixel(90, 90), Some(fb.clear_color()));
        assert_eq!(fb.pixel(160, 160), Some(fb.clear_color()));
    }

    #[test]
    fn back_facing_triangle_leaves_buffer_cleared() {
        let mut engine = engine();
        // (0,0), (1,0), (0,1): normal along +Z, away from the viewer.
        let mesh = Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, -5.0),
                Vec3::new(1.0, 0.0, -5.0),
                Vec3::new(0.0, 1.0, -5.0),
            ],
            vec![],
            vec![Face::new(0, 1, 2)],
        )
        .unwrap();
        let input = FrameInput::default().with_flat_color(colors::RED);
        let stats = engine.render(&mesh, None, &input);

        assert_eq!(stats.culled, 1);
        assert_eq!(stats.pixels_written, 0);
        assert_cleared(engine.framebuffer());
    }

    #[test]
    fn textured_triangle_samples_nearest_texel() {
        // 4x4 texture, texel (x, y) colored (x * 60, y * 60, 200).
        let data = (0..4u32)
            .flat_map(|y| (0..4u32).flat_map(move |x| [(x * 60) as u8, (y * 60) as u8, 200, 255]))
            .collect();
        let texture = Texture::from_rgba(4, 4, data).unwrap();
        let mesh = facing_triangle(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(1.0, 0.0),
        ]);

        let mut engine = engine();
        engine.render(&mesh, Some(&texture), &FrameInput::default());

        // Pixel (140, 110) sits at u = 0.6, v = 0.15 -> texel (1, 0).
        let fb = engine.framebuffer();
        assert_near_color(fb.pixel(140, 110), Color::rgb(60, 0, 200));
        // Pixel (110, 140) sits at u = 0.15, v = 0.6 -> texel (0, 1).
        assert_near_color(fb.pixel(110, 140), Color::rgb(0, 60, 200));
    }

    #[test]
    fn cube_renders_only_front_facing_half() {
        let mut engine = engine();
        let stats = engine.render(&Mesh::cube(), None, &FrameInput::default());
        // Facing straight at the -Z side: its two triangles are drawn, the
        // +Z side and the four edge-on sides are culled.
        assert_eq!(stats.triangles, 12);
        assert_eq!(stats.culled, 10);
        assert!(stats.pixels_written > 0);
    }

    #[test]
    fn rendering_is_deterministic() {
        let mesh = Mesh::cube();
        let input = FrameInput::new(Mat4::rotation_xyz(0.4, 0.9, 0.2))
            .with_flat_color(Color::from_hue(1.3));

        let mut engine = engine();
        engine.render(&mesh, None, &input);
        let color = engine.framebuffer().color_bytes().to_vec();
        let depth = engine.framebuffer().depth_buffer().to_vec();

        // An unrelated frame in between must leave no trace.
        engine.render(&mesh, None, &FrameInput::new(Mat4::rotation_xyz(2.0, 0.1, 1.0)));
        engine.render(&mesh, None, &input);

        assert_eq!(engine.framebuffer().color_bytes(), color.as_slice());
        assert_eq!(engine.framebuffer().depth_buffer(), depth.as_slice());
    }

    #[test]
    fn frame_projection_overrides_configured_one_for_that_frame_only() {
        let mesh = facing_triangle(vec![]);
        let mut engine = engine();

        let base = engine.render(&mesh, None, &FrameInput::default()).pixels_written;
        let zoomed_input =
            FrameInput::default().with_projection(engine.projection().with_scale(30.0));
        let zoomed = engine.render(&mesh, None, &zoomed_input).pixels_written;
        let again = engine.render(&mesh, None, &FrameInput::default()).pixels_written;

        assert!(zoomed > base);
        assert_eq!(again, base);
    }

    #[test]
    fn empty_mesh_renders_clear_frame() {
        let mut engine = engine();
        let mesh = Mesh::new(vec![], vec![], vec![]).unwrap();
        let stats = engine.render(&mesh, None, &FrameInput::default());
        assert_eq!(stats, FrameStats::default());
        assert_cleared(engine.framebuffer());
    }

    #[test]
    fn degenerate_triangle_is_counted_and_skipped() {
        let mut engine = engine();
        // Two faces: a real one, and one whose vertices collapse to a line on
        // screen while still sharing the real face's normal.
        let mesh = Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, -5.0),
                Vec3::new(0.0, 1.0, -5.0),
                Vec3::new(1.0, 0.0, -5.0),
            ],
            vec![],
            vec![Face::new(0, 1, 2), Face::new(0, 0, 1)],
        )
        .unwrap();
        let stats = engine.render(&mesh, None, &FrameInput::default());
        assert_eq!(stats.degenerate, 1);
        assert_eq!(stats.culled, 0);
    }

    #[test]
    fn geometry_behind_the_eye_does_not_panic() {
        let mut engine = engine();
        let mesh = Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, -8.0),
                Vec3::new(0.0, 1.0, -9.0),
                Vec3::new(1.0, 0.0, -8.0),
                Vec3::new(f32::NAN, 0.0, 0.0),
            ],
            vec![],
            vec![Face::new(0, 1, 2), Face::new(1, 2, 3)],
        )
        .unwrap();
        engine.render(&mesh, None, &FrameInput::default());
    }
}
