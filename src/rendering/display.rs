//! # Display Management
//!
//! Owns the shader material and the offscreen render target the scene is
//! drawn into, and handles window-mode switches.
//!
//! The scene pass renders a full-screen quad through the raymarching
//! material into the offscreen target at a fixed shader resolution, then
//! blits the target's texture stretched over the live window size. The
//! uniform names `iResolution` and `iTime` are the contract with the shader
//! asset and must not change.

use crate::config::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::MarcherResult;
use macroquad::miniquad::{
    BlendFactor, BlendState, BlendValue, Equation, PipelineParams, ShaderSource, UniformDesc,
    UniformType,
};
use macroquad::prelude::*;

/// Passthrough vertex stage for the full-screen scene quad. The fragment
/// stage comes from the shader asset.
const SCENE_VERTEX_SHADER: &str = r#"#version 100
attribute vec3 position;
attribute vec2 texcoord;

varying vec2 uv;

uniform mat4 Model;
uniform mat4 Projection;

void main() {
    gl_Position = Projection * Model * vec4(position, 1);
    uv = texcoord;
}
"#;

/// Display manager for the shader scene.
///
/// Holds the compiled material, the offscreen render target, and the fixed
/// shader resolution. Created once at startup; the render target is rebuilt
/// after every window-mode change.
pub struct Display {
    material: Material,
    render_target: RenderTarget,
    resolution: Vec2,
}

impl Display {
    /// Loads the fragment shader asset and compiles the scene material.
    ///
    /// A missing or non-compiling shader is a fatal startup error; there is
    /// no fallback rendering path.
    pub async fn new(shader_path: &str) -> MarcherResult<Self> {
        log::info!("loading fragment shader from {}", shader_path);
        let fragment = load_string(shader_path).await?;

        let material = load_material(
            ShaderSource::Glsl {
                vertex: SCENE_VERTEX_SHADER,
                fragment: &fragment,
            },
            MaterialParams {
                uniforms: vec![
                    UniformDesc::new("iResolution", UniformType::Float2),
                    UniformDesc::new("iTime", UniformType::Float1),
                ],
                pipeline_params: PipelineParams {
                    color_blend: Some(BlendState::new(
                        Equation::Add,
                        BlendFactor::Value(BlendValue::SourceAlpha),
                        BlendFactor::One,
                    )),
                    ..Default::default()
                },
                ..Default::default()
            },
        )?;

        let resolution = vec2(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
        material.set_uniform("iResolution", resolution);

        Ok(Self {
            material,
            render_target: Self::create_render_target(resolution),
            resolution,
        })
    }

    fn create_render_target(resolution: Vec2) -> RenderTarget {
        let target = render_target(resolution.x as u32, resolution.y as u32);
        target.texture.set_filter(FilterMode::Linear);
        target
    }

    /// The fixed resolution the scene is rendered at.
    pub fn resolution(&self) -> Vec2 {
        self.resolution
    }

    /// Switches between fullscreen desktop mode and the fixed windowed size.
    ///
    /// Idempotent per flag value; re-applies the resolution uniform so the
    /// shader contract holds across mode changes.
    pub fn apply_window_mode(&mut self, fullscreen: bool) {
        log::info!("window mode -> {}", if fullscreen { "fullscreen" } else { "windowed" });
        set_fullscreen(fullscreen);
        if !fullscreen {
            request_new_screen_size(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32);
        }
        self.material.set_uniform("iResolution", self.resolution);
    }

    /// Recreates the offscreen target at the shader resolution.
    ///
    /// Must run after every window-mode change; the blit in
    /// [`draw_scene`](Self::draw_scene) stretches to whatever the window
    /// size is now.
    pub fn rebuild_render_target(&mut self) {
        self.render_target = Self::create_render_target(self.resolution);
    }

    /// Renders the shader scene for this frame.
    ///
    /// `elapsed` is seconds since the run started and feeds the `iTime`
    /// uniform.
    pub fn draw_scene(&mut self, elapsed: f32) {
        self.material.set_uniform("iTime", elapsed);

        // Scene pass into the offscreen target.
        let mut camera =
            Camera2D::from_display_rect(Rect::new(0.0, 0.0, self.resolution.x, self.resolution.y));
        camera.render_target = Some(self.render_target.clone());
        set_camera(&camera);
        clear_background(BLACK);

        gl_use_material(&self.material);
        draw_rectangle(0.0, 0.0, self.resolution.x, self.resolution.y, WHITE);
        gl_use_default_material();

        // Blit stretched over the whole window.
        set_default_camera();
        draw_texture_ex(
            &self.render_target.texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                flip_y: true,
                ..Default::default()
            },
        );
    }

    /// Draws the frame-time/FPS diagnostics line. Cosmetic only.
    pub fn draw_frame_stats(&self, frame_time: f32) {
        if frame_time <= 0.0 {
            return;
        }
        let text = format!("FT: {:.2} ms    FPS: {:.0}", frame_time * 1000.0, 1.0 / frame_time);
        draw_text(&text, 8.0, screen_height() - 10.0, 18.0, GRAY);
    }
}
