use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::frame::FrameInfo;
use crate::math::{Mat4, Vec3};
use crate::mesh::{self, MeshData, Vertex};
use crate::texture::Texture;
use crate::types::{FrameUniform, ModelUniform};

/// Cube spin rate, degrees per second, negative X rotation.
const SPIN_RATE_DEG_PER_SEC: f32 = 50.0;

const AMBIENT_LIGHT: Vec3 = Vec3::new(0.1, 0.1, 0.1);
const LIGHT_POSITION: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const LIGHT_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const LIGHT_MARKER_SCALE: f32 = 0.1;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.1,
    g: 0.2,
    b: 0.2,
    a: 1.0,
};

/// One mesh instance: geometry buffers plus its model uniform and texture
/// bindings.
struct DrawObject {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    lit: bool,
}

pub struct SceneRenderer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    config: RenderConfig,
    depth: Texture,
    pipeline: wgpu::RenderPipeline,
    frame_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    ground: DrawObject,
    cube: DrawObject,
    light_marker: DrawObject,
    egui_renderer: egui_wgpu::Renderer,
    egui_state: egui_winit::State,
    egui_ctx: egui::Context,
    show_ui: bool,
}

impl SceneRenderer {
    pub async fn new(
        window: Arc<Window>,
        config: RenderConfig,
        cube_texture: Option<&Path>,
        ground_texture: Option<&Path>,
        show_ui: bool,
    ) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        log::info!("using adapter: {}", adapter.get_info().name);
        let (device, queue) = Self::request_device(&adapter).await?;

        let surface_config = Self::create_surface_config(&surface, &adapter, size);
        surface.configure(&device, &surface_config);
        log::info!(
            "surface configured: {}x{} {:?}",
            surface_config.width,
            surface_config.height,
            surface_config.format
        );

        let depth = Texture::depth(&device, size.width, size.height);

        let frame_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
                label: Some("frame_bind_group_layout"),
            });

        let object_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
                label: Some("object_bind_group_layout"),
            });

        let frame_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frame Uniform"),
            contents: bytemuck::cast_slice(&[FrameUniform::new(
                &Mat4::IDENTITY,
                &Mat4::IDENTITY,
                AMBIENT_LIGHT,
                LIGHT_POSITION,
                LIGHT_COLOR,
            )]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &frame_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
            label: Some("frame_bind_group"),
        });

        let ground_tex = match ground_texture {
            Some(path) => Texture::from_file(&device, &queue, path)?,
            None => Texture::checkerboard(
                &device,
                &queue,
                8,
                16,
                [90, 90, 95, 255],
                [160, 160, 165, 255],
            ),
        };
        let cube_tex = match cube_texture {
            Some(path) => Texture::from_file(&device, &queue, path)?,
            None => Texture::checkerboard(
                &device,
                &queue,
                4,
                32,
                [200, 120, 40, 255],
                [240, 220, 180, 255],
            ),
        };
        let white_tex = Texture::solid(&device, &queue, [255, 255, 255, 255]);

        let ground = Self::create_object(
            &device,
            &object_bind_group_layout,
            &mesh::ground_plane(),
            &ground_tex,
            ModelUniform::new(&Mat4::IDENTITY, true),
            "ground",
        );
        let cube = Self::create_object(
            &device,
            &object_bind_group_layout,
            &mesh::cube(),
            &cube_tex,
            ModelUniform::new(&Mat4::IDENTITY, true),
            "cube",
        );

        // The marker sits at the light position, shrunk to a tenth, unlit.
        let mut marker_model = Mat4::translation(LIGHT_POSITION);
        marker_model.mul_in_place(&Mat4::scale_uniform(LIGHT_MARKER_SCALE));
        let light_marker = Self::create_object(
            &device,
            &object_bind_group_layout,
            &mesh::cube(),
            &white_tex,
            ModelUniform::new(&marker_model, false),
            "light marker",
        );

        let pipeline = Self::create_pipeline(
            &device,
            &frame_bind_group_layout,
            &object_bind_group_layout,
            surface_config.format,
        );

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            &device,
            surface_config.format,
            egui_wgpu::RendererOptions::default(),
        );

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            size,
            config,
            depth,
            pipeline,
            frame_buffer,
            frame_bind_group,
            ground,
            cube,
            light_marker,
            egui_renderer,
            egui_state,
            egui_ctx,
            show_ui,
        })
    }

    async fn request_adapter(
        instance: &wgpu::Instance,
        surface: &wgpu::Surface<'_>,
    ) -> Result<wgpu::Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow::anyhow!("failed to find appropriate adapter: {e:?}"))
    }

    async fn request_device(adapter: &wgpu::Adapter) -> Result<(wgpu::Device, wgpu::Queue)> {
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| anyhow::anyhow!("failed to create device: {e}"))
    }

    fn create_surface_config(
        surface: &wgpu::Surface,
        adapter: &wgpu::Adapter,
        size: winit::dpi::PhysicalSize<u32>,
    ) -> wgpu::SurfaceConfiguration {
        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    fn create_object(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        mesh: &MeshData,
        texture: &Texture,
        uniform: ModelUniform,
        label: &str,
    ) -> DrawObject {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
            label: Some(label),
        });

        DrawObject {
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
            uniform_buffer,
            bind_group,
            lit: uniform.lit != 0,
        }
    }

    fn create_pipeline(
        device: &wgpu::Device,
        frame_layout: &wgpu::BindGroupLayout,
        object_layout: &wgpu::BindGroupLayout,
        surface_format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("scene.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[frame_layout, object_layout],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Scene Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: Texture::DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.surface_config.width = new_size.width;
        self.surface_config.height = new_size.height;
        self.surface.configure(&self.device, &self.surface_config);
        self.depth = Texture::depth(&self.device, new_size.width, new_size.height);
    }

    pub fn render(
        &mut self,
        camera: &Camera,
        window: &Window,
        fps: f32,
        frame: &FrameInfo,
    ) -> std::result::Result<(), wgpu::SurfaceError> {
        // Per-frame transforms. The projection tracks the live surface size;
        // the view comes straight from the camera basis.
        let projection = Mat4::perspective(
            self.size.width as f32,
            self.size.height as f32,
            self.config.fov,
            self.config.near_clip,
            self.config.far_clip,
        );
        let basis = camera.basis();
        let view = Mat4::look_at(camera.position, basis.right, basis.up, basis.look);

        self.queue.write_buffer(
            &self.frame_buffer,
            0,
            bytemuck::cast_slice(&[FrameUniform::new(
                &view,
                &projection,
                AMBIENT_LIGHT,
                LIGHT_POSITION,
                LIGHT_COLOR,
            )]),
        );

        // Spin the cube about X, negative direction, at the fixed rate.
        let angle = (SPIN_RATE_DEG_PER_SEC * frame.time).to_radians();
        let mut cube_model = Mat4::IDENTITY;
        cube_model.mul_in_place(&Mat4::rotation_x(-angle));
        self.queue.write_buffer(
            &self.cube.uniform_buffer,
            0,
            bytemuck::cast_slice(&[ModelUniform::new(&cube_model, self.cube.lit)]),
        );

        let output = self.surface.get_current_texture()?;
        let view_target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view_target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.frame_bind_group, &[]);
            for object in [&self.ground, &self.cube, &self.light_marker] {
                render_pass.set_bind_group(1, &object.bind_group, &[]);
                render_pass.set_vertex_buffer(0, object.vertex_buffer.slice(..));
                render_pass
                    .set_index_buffer(object.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                render_pass.draw_indexed(0..object.index_count, 0, 0..1);
            }
        }

        if self.show_ui {
            self.draw_overlay(camera, window, fps, frame, &mut encoder, &view_target);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }

    fn draw_overlay(
        &mut self,
        camera: &Camera,
        window: &Window,
        fps: f32,
        frame: &FrameInfo,
        encoder: &mut wgpu::CommandEncoder,
        view_target: &wgpu::TextureView,
    ) {
        let raw_input = self.egui_state.take_egui_input(window);
        let resolution = (self.size.width, self.size.height);
        let position = camera.position;
        let (yaw, pitch) = (camera.yaw, camera.pitch);

        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Debug Info")
                .title_bar(true)
                .resizable(false)
                .fixed_pos(egui::pos2(10.0, 10.0))
                .default_width(250.0)
                .show(ctx, |ui| {
                    ui.heading(
                        egui::RichText::new(format!("{:.0} FPS", fps))
                            .size(32.0)
                            .color(egui::Color32::from_rgb(74, 158, 255)),
                    );

                    let frame_time_ms = if fps > 0.0 { 1000.0 / fps } else { 0.0 };
                    ui.label(
                        egui::RichText::new(format!("{:.2} ms", frame_time_ms))
                            .size(14.0)
                            .color(egui::Color32::GRAY),
                    );

                    ui.add_space(10.0);
                    ui.separator();
                    ui.add_space(5.0);

                    ui.label(
                        egui::RichText::new("Camera")
                            .size(16.0)
                            .color(egui::Color32::from_rgb(100, 200, 100)),
                    );
                    ui.monospace(format!(
                        "Pos: ({:.2}, {:.2}, {:.2})",
                        position.x, position.y, position.z
                    ));
                    ui.monospace(format!("Yaw: {:.1}\u{b0} Pitch: {:.1}\u{b0}", yaw, pitch));

                    ui.add_space(5.0);
                    ui.separator();
                    ui.add_space(5.0);

                    ui.label(
                        egui::RichText::new("Rendering")
                            .size(16.0)
                            .color(egui::Color32::from_rgb(200, 100, 200)),
                    );
                    ui.monospace(format!("Resolution: {}x{}", resolution.0, resolution.1));
                    ui.monospace(format!("Time: {:.2}s", frame.time));
                });
        });

        self.egui_state
            .handle_platform_output(window, full_output.platform_output);

        let tris = self
            .egui_ctx
            .tessellate(full_output.shapes, self.egui_ctx.pixels_per_point());
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.size.width, self.size.height],
            pixels_per_point: window.scale_factor() as f32,
        };

        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            encoder,
            &tris,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: view_target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            // SAFETY: The render pass lifetime is actually tied to the encoder,
            // but egui-wgpu requires 'static. This is safe because we drop the
            // render pass before using the encoder again.
            let render_pass_static = unsafe {
                std::mem::transmute::<&mut wgpu::RenderPass<'_>, &mut wgpu::RenderPass<'static>>(
                    &mut render_pass,
                )
            };

            self.egui_renderer
                .render(render_pass_static, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }

    pub fn handle_event(&mut self, window: &Window, event: &winit::event::WindowEvent) -> bool {
        self.show_ui && self.egui_state.on_window_event(window, event).consumed
    }
}
