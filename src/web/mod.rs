//! Web bindings for the TV-screen demo.
//!
//! Composes the session, screen material, and surface into a
//! wasm-bindgen application the host page drives: DOM event handlers
//! call in as notifications arrive, and requestAnimationFrame calls
//! [`TvApp::frame`] once per refresh.

use wasm_bindgen::prelude::*;
use web_sys::{window, HtmlCanvasElement};

use wgpu::util::DeviceExt;

use crate::core::{Context, FrameLoop, Session, Settings, Viewport};
use crate::screen::{CameraUniform, ScreenMaterial, ScreenUniforms, ScreenVertex};
use crate::texture::{FeedState, Sampler, Texture2D, VideoFeed};

/// Screen quad width in world units.
const SCREEN_WIDTH: f32 = 16.0;
/// Screen quad height in world units.
const SCREEN_HEIGHT: f32 = 12.0;
/// Screen quad center height, matching the default camera focus.
const SCREEN_CENTER_Y: f32 = 5.0;

/// The TV demo application for web environments.
#[wasm_bindgen]
pub struct TvApp {
    context: Context,
    material: ScreenMaterial,
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    sampler: Sampler,
    white_texture: Texture2D,
    feed: VideoFeed,
    texture_bind_group: wgpu::BindGroup,
    texture_dirty: bool,
    frame_loop: FrameLoop,
}

#[wasm_bindgen]
impl TvApp {
    /// Create a new demo application attached to a canvas element.
    #[wasm_bindgen]
    pub async fn new(canvas_id: &str) -> Result<TvApp, JsValue> {
        let window = window().ok_or_else(|| JsValue::from_str("No window object"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str(&format!("Canvas '{}' not found", canvas_id)))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("Element is not a canvas"))?;

        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;

        canvas.set_width(width);
        canvas.set_height(height);

        let context = Context::new(wgpu::SurfaceTarget::Canvas(canvas), width, height)
            .await
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mut material = ScreenMaterial::new();
        material.build_pipeline(&context.device, context.surface_format);

        let quad = ScreenVertex::quad(SCREEN_WIDTH, SCREEN_HEIGHT, SCREEN_CENTER_Y);
        let vertex_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Screen Quad Vertex Buffer"),
                contents: bytemuck::cast_slice(&quad),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let mut session = Session::new(Viewport::new(width, height));
        let view_proj = session.view_projection();

        let camera_uniform = CameraUniform {
            view_proj: view_proj.to_cols_2d(),
        };
        let camera_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let camera_bind_group = material
            .create_camera_bind_group(&context.device, &camera_buffer)
            .ok_or_else(|| JsValue::from_str("Failed to create camera bind group"))?;

        let uniform_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Screen Uniform Buffer"),
                contents: bytemuck::cast_slice(&[ScreenUniforms::new()]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let uniform_bind_group = material
            .create_uniform_bind_group(&context.device, &uniform_buffer)
            .ok_or_else(|| JsValue::from_str("Failed to create uniform bind group"))?;

        let sampler = Sampler::linear(&context.device);
        let white_texture = Texture2D::white(&context.device, &context.queue);
        let texture_bind_group = material
            .create_texture_bind_group(&context.device, &white_texture, &sampler)
            .ok_or_else(|| JsValue::from_str("Failed to create texture bind group"))?;

        Ok(TvApp {
            context,
            material,
            vertex_buffer,
            vertex_count: quad.len() as u32,
            camera_buffer,
            camera_bind_group,
            uniform_buffer,
            uniform_bind_group,
            sampler,
            white_texture,
            feed: VideoFeed::new(),
            texture_bind_group,
            texture_dirty: false,
            frame_loop: FrameLoop::new(session),
        })
    }

    /// Render a single frame.
    #[wasm_bindgen]
    pub fn frame(&mut self) -> Result<(), JsValue> {
        if self.texture_dirty {
            let texture = self.feed.texture().unwrap_or(&self.white_texture);
            self.texture_bind_group = self
                .material
                .create_texture_bind_group(&self.context.device, texture, &self.sampler)
                .ok_or_else(|| JsValue::from_str("Failed to create texture bind group"))?;
            self.texture_dirty = false;
        }

        let state = self.frame_loop.tick();

        self.context.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[state.uniforms]),
        );

        let view_proj = self.frame_loop.session_mut().view_projection();
        let camera_uniform = CameraUniform {
            view_proj: view_proj.to_cols_2d(),
        };
        self.context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[camera_uniform]),
        );

        let output = self
            .context
            .get_current_texture()
            .map_err(|e| JsValue::from_str(&format!("Surface error: {:?}", e)))?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self.context.create_command_encoder();

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Screen Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.03,
                            g: 0.03,
                            b: 0.04,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // the quad only appears once every tracked load settled
            if state.scene_ready {
                if let Some(pipeline) = self.material.pipeline() {
                    render_pass.set_pipeline(pipeline);
                    render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
                    render_pass.set_bind_group(1, &self.uniform_bind_group, &[]);
                    render_pass.set_bind_group(2, &self.texture_bind_group, &[]);
                    render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                    render_pass.draw(0..self.vertex_count, 0..1);
                }
            }
        }

        self.context.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Handle window resize.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) {
        let dpr = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let width = (width as f64 * dpr) as u32;
        let height = (height as f64 * dpr) as u32;

        self.context.resize(width, height);
        self.frame_loop.session_mut().resized(width, height);
    }

    /// Handle a pointer-move event in CSS pixel coordinates.
    #[wasm_bindgen]
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        let dpr = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0) as f32;
        self.frame_loop
            .session_mut()
            .pointer_moved(x * dpr, y * dpr);
    }

    /// Toggle the camera between its two focus points.
    #[wasm_bindgen]
    pub fn toggle_focus(&mut self) {
        self.frame_loop.session_mut().toggle_focus();
    }

    /// Update the panel's `progress` scalar.
    #[wasm_bindgen]
    pub fn set_progress(&mut self, value: f32) {
        self.frame_loop.session_mut().set_progress(value);
    }

    /// Slider metadata for the `progress` scalar as JSON, for the host
    /// panel to build its widget from.
    #[wasm_bindgen]
    pub fn progress_descriptor(&self) -> String {
        serde_json::to_string(&Settings::PROGRESS).unwrap_or_default()
    }

    /// The host acquired a camera stream of the given dimensions.
    #[wasm_bindgen]
    pub fn video_granted(&mut self, width: u32, height: u32) {
        self.feed
            .grant(&self.context.device, &self.context.queue, width, height);
        let session = self.frame_loop.session_mut();
        session.feed_resolved(FeedState::Live);
        session.set_feed_aspect(self.feed.aspect());
        self.texture_dirty = true;
    }

    /// The host was denied a camera stream (or has no capture support).
    #[wasm_bindgen]
    pub fn video_denied(&mut self, reason: &str) {
        self.feed.deny(reason);
        self.frame_loop
            .session_mut()
            .feed_resolved(FeedState::Unavailable);
    }

    /// Push one decoded RGBA8 camera frame into the feed texture.
    #[wasm_bindgen]
    pub fn upload_video_frame(&mut self, data: &[u8]) {
        self.feed.upload_frame(&self.context.queue, data);
    }

    /// Install the static RGBA8 image shown when no live feed exists.
    #[wasm_bindgen]
    pub fn set_fallback_image(&mut self, data: &[u8], width: u32, height: u32) {
        self.feed.set_fallback_image(
            &self.context.device,
            &self.context.queue,
            data,
            width,
            height,
        );
        let session = self.frame_loop.session_mut();
        session.set_feed_aspect(self.feed.aspect());
        self.texture_dirty = true;
    }

    /// The host started loading a scene asset.
    #[wasm_bindgen]
    pub fn asset_load_started(&mut self, url: &str) {
        self.frame_loop.session_mut().loading_mut().item_start(url);
    }

    /// A scene asset finished loading.
    #[wasm_bindgen]
    pub fn asset_load_finished(&mut self, url: &str) {
        self.frame_loop.session_mut().loading_mut().item_end(url);
    }

    /// A scene asset failed to load.
    #[wasm_bindgen]
    pub fn asset_load_failed(&mut self, url: &str, error: &str) {
        self.frame_loop
            .session_mut()
            .loading_mut()
            .item_error(url, error);
    }

    /// Completed load fraction in 0.0 to 1.0, for the loading overlay.
    #[wasm_bindgen]
    pub fn loading_fraction(&self) -> f32 {
        self.frame_loop.session().loading().fraction()
    }

    /// Whether every tracked asset load has settled.
    #[wasm_bindgen]
    pub fn is_scene_ready(&self) -> bool {
        self.frame_loop.session().loading().is_settled()
    }

    /// Number of completed frames.
    #[wasm_bindgen]
    pub fn frame_count(&self) -> u64 {
        self.frame_loop.frame_count()
    }
}
