//! Application: GPU objects, render loop and event handling.
//!
//! Mirrors the scene model into `three-d` objects once at startup, then
//! keeps the mutable parts (breathing lines, sphere spin, label
//! billboards) in sync every frame. Input order per frame is fixed:
//! events → camera damping → geometry → click picking → render.

use anyhow::Context as _;
use glam::Vec3;
use three_d::*;

use aracne_picking::{billboard_basis, OrbitCamera, PickWorld};
use aracne_scene::{dash_runs, LightRig, Rgb, SceneModel, ThemeMode};

use crate::text::rasterize_label;

/// Open the window and run the scene until the user closes it.
pub fn run(model: SceneModel) -> anyhow::Result<()> {
    let window = Window::new(WindowSettings {
        title: "Aracne Creative Studio".to_string(),
        ..Default::default()
    })
    .context("no graphics context available; the landing scene needs a display")?;
    let context = window.gl();

    let mut app = App::new(&context, model);
    window.render_loop(move |frame_input| app.frame(frame_input));
    Ok(())
}

fn to_vec3(v: Vec3) -> three_d::Vec3 {
    vec3(v.x, v.y, v.z)
}

fn srgba(color: Rgb) -> Srgba {
    Srgba::new_opaque(color.r, color.g, color.b)
}

/// Transform mapping the unit X cylinder onto a stretch of a radial
/// segment: `[start, start + len]` along `direction`, at line `radius`.
fn segment_transform(direction: Vec3, start: f32, len: f32, radius: f32) -> Mat4 {
    let dir = to_vec3(direction);
    let rotation = Mat4::from(Quat::from_arc(vec3(1.0, 0.0, 0.0), dir, None));
    Mat4::from_translation(dir * start)
        * rotation
        * Mat4::from_nonuniform_scale(len, radius, radius)
}

/// Transform mapping the unit XY square onto a camera-facing quad.
fn billboard_transform(position: Vec3, viewer: Vec3, half_width: f32, half_height: f32) -> Mat4 {
    let (right, up, normal) = billboard_basis(position, viewer, Vec3::Y);
    let basis = Mat4::from_cols(
        vec4(right.x, right.y, right.z, 0.0),
        vec4(up.x, up.y, up.z, 0.0),
        vec4(normal.x, normal.y, normal.z, 0.0),
        vec4(position.x, position.y, position.z, 1.0),
    );
    basis * Mat4::from_nonuniform_scale(half_width, half_height, 1.0)
}

/// A rendered line tied back to its segment in the model.
struct SegmentLine {
    segment_index: usize,
    gm: Gm<Mesh, ColorMaterial>,
}

/// A label billboard; the quad re-orients toward the camera every frame.
struct LabelQuad {
    position: Vec3,
    half_width: f32,
    half_height: f32,
    gm: Gm<Mesh, ColorMaterial>,
}

struct Lighting {
    ambient: AmbientLight,
    directional: Option<DirectionalLight>,
    points: Vec<PointLight>,
}

struct App {
    model: SceneModel,
    mode: ThemeMode,
    camera: OrbitCamera,
    picking: PickWorld,

    sphere: Gm<Mesh, PhysicalMaterial>,
    plain_lines: Vec<SegmentLine>,
    dashes: Vec<Gm<Mesh, ColorMaterial>>,
    markers: Vec<Gm<Mesh, PhysicalMaterial>>,
    labels: Vec<LabelQuad>,
    lighting: Lighting,

    pending_click: Option<(f32, f32)>,
}

impl App {
    fn new(context: &Context, model: SceneModel) -> Self {
        let config = &model.config;
        let mode = if config.dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        let theme = mode.theme();

        let camera = OrbitCamera::new(
            Vec3::ZERO,
            config.camera.distance,
            config.camera.min_distance,
            config.camera.max_distance,
            config.camera.fov_deg,
            config.camera.near,
            config.camera.far,
        );

        let sphere = Gm::new(
            Mesh::new(context, &CpuMesh::sphere(64)),
            PhysicalMaterial::new_opaque(
                context,
                &CpuMaterial {
                    albedo: srgba(theme.sphere),
                    metallic: 0.5,
                    roughness: 0.5,
                    ..Default::default()
                },
            ),
        );

        let cylinder = CpuMesh::cylinder(12);
        let plain_lines = model
            .segments
            .iter()
            .filter(|segment| !segment.has_label)
            .map(|segment| SegmentLine {
                segment_index: segment.index,
                gm: Gm::new(
                    Mesh::new(context, &cylinder),
                    ColorMaterial {
                        color: srgba(theme.plain_line),
                        ..Default::default()
                    },
                ),
            })
            .collect();

        let mut dashes = Vec::new();
        let marker_mesh = CpuMesh::sphere(32);
        let mut markers = Vec::new();
        let mut labels = Vec::new();
        let mut picking = PickWorld::new();

        for site in &model.sites {
            let segment = &model.segments[site.segment_index];

            // Dashed restyle of the labelled line, one cylinder per dash.
            for run in dash_runs(segment.current_length(), config.dash_size, config.gap_size) {
                let mut dash = Gm::new(
                    Mesh::new(context, &cylinder),
                    ColorMaterial {
                        color: srgba(theme.dashed_line),
                        ..Default::default()
                    },
                );
                dash.set_transformation(segment_transform(
                    segment.direction,
                    run.start,
                    run.length(),
                    config.line_radius,
                ));
                dashes.push(dash);
            }

            let mut marker = Gm::new(
                Mesh::new(context, &marker_mesh),
                PhysicalMaterial::new_opaque(
                    context,
                    &CpuMaterial {
                        albedo: srgba(theme.marker),
                        ..Default::default()
                    },
                ),
            );
            marker.set_transformation(
                Mat4::from_translation(to_vec3(site.marker_position))
                    * Mat4::from_scale(config.marker_radius),
            );
            markers.push(marker);

            let bitmap = rasterize_label(&site.text);
            let texture = CpuTexture {
                data: TextureData::RgbaU8(bitmap.pixels),
                width: bitmap.width,
                height: bitmap.height,
                ..Default::default()
            };
            labels.push(LabelQuad {
                position: site.sprite_position,
                half_width: config.sprite_size[0] / 2.0,
                half_height: config.sprite_size[1] / 2.0,
                gm: Gm::new(
                    Mesh::new(context, &CpuMesh::square()),
                    ColorMaterial {
                        color: srgba(theme.label_text),
                        texture: Some(Texture2DRef::from_cpu_texture(context, &texture)),
                        render_states: RenderStates {
                            blend: Blend::TRANSPARENCY,
                            ..Default::default()
                        },
                        is_transparent: true,
                    },
                ),
            });

            // Marker and sprite share one destination for joint picking.
            picking.add_sphere(&site.slug, site.marker_position, config.marker_radius);
            picking.add_billboard(
                &site.slug,
                site.sprite_position,
                config.sprite_size[0] / 2.0,
                config.sprite_size[1] / 2.0,
            );
        }

        let lighting = match config.lighting {
            LightRig::Studio => Lighting {
                ambient: AmbientLight::new(context, 1.0, Srgba::WHITE),
                directional: Some(DirectionalLight::new(
                    context,
                    1.0,
                    Srgba::WHITE,
                    &vec3(-1.0, -1.0, -1.0),
                )),
                points: Vec::new(),
            },
            LightRig::Accent => Lighting {
                ambient: AmbientLight::new(context, 0.5, Srgba::WHITE),
                directional: None,
                points: vec![
                    PointLight::new(
                        context,
                        1.0,
                        Srgba::RED,
                        &vec3(5.0, 5.0, 5.0),
                        Attenuation::default(),
                    ),
                    PointLight::new(
                        context,
                        1.0,
                        Srgba::GREEN,
                        &vec3(-5.0, -5.0, -5.0),
                        Attenuation::default(),
                    ),
                ],
            },
        };

        Self {
            model,
            mode,
            camera,
            picking,
            sphere,
            plain_lines,
            dashes,
            markers,
            labels,
            lighting,
            pending_click: None,
        }
    }

    fn frame(&mut self, frame_input: FrameInput) -> FrameOutput {
        let mut exit = false;

        for event in frame_input.events.iter() {
            match event {
                Event::MouseMotion {
                    button: Some(MouseButton::Left),
                    delta,
                    ..
                } => {
                    self.camera.rotate(delta.0 as f32, delta.1 as f32);
                }
                Event::MouseWheel { delta, .. } => {
                    self.camera.zoom(delta.1 as f32);
                }
                Event::MousePress {
                    button: MouseButton::Left,
                    position,
                    ..
                } => {
                    self.pending_click = Some((position.x as f32, position.y as f32));
                }
                Event::KeyPress { kind, .. } => match kind {
                    Key::I => self.invert_theme(),
                    Key::Q | Key::Escape => exit = true,
                    _ => {}
                },
                _ => {}
            }
        }

        let dt = (frame_input.elapsed_time / 1000.0) as f32;
        let time = (frame_input.accumulated_time / 1000.0) as f32;
        let viewport = frame_input.viewport;

        // Damping first, then geometry, then render; same order every frame.
        self.camera.update(dt);
        self.camera
            .resize(viewport.width as f32, viewport.height as f32);
        self.model.advance(time, dt);

        self.sphere.set_transformation(
            Mat4::from_angle_y(radians(self.model.spin.angle))
                * Mat4::from_scale(self.model.config.sphere_radius),
        );
        for line in &mut self.plain_lines {
            let segment = &self.model.segments[line.segment_index];
            line.gm.set_transformation(segment_transform(
                segment.direction,
                0.0,
                segment.current_length(),
                self.model.config.line_radius,
            ));
        }
        let viewer = self.camera.position();
        for label in &mut self.labels {
            label.gm.set_transformation(billboard_transform(
                label.position,
                viewer,
                label.half_width,
                label.half_height,
            ));
        }

        if let Some((px, py)) = self.pending_click.take() {
            let ray =
                self.camera
                    .ray_through_pixel(px, py, viewport.width as f32, viewport.height as f32);
            if let Some(hit) = self.picking.pick(&ray, self.camera.far) {
                navigate(&self.model.destination_url(&hit.destination));
            }
        }

        let camera = Camera::new_perspective(
            viewport,
            to_vec3(self.camera.position()),
            to_vec3(self.camera.target),
            vec3(0.0, 1.0, 0.0),
            degrees(self.camera.fov_y_deg),
            self.camera.near,
            self.camera.far,
        );

        let mut objects: Vec<&dyn Object> = Vec::with_capacity(
            1 + self.plain_lines.len() + self.dashes.len() + self.markers.len() + self.labels.len(),
        );
        objects.push(&self.sphere);
        for line in &self.plain_lines {
            objects.push(&line.gm);
        }
        for dash in &self.dashes {
            objects.push(dash);
        }
        for marker in &self.markers {
            objects.push(marker);
        }
        for label in &self.labels {
            objects.push(&label.gm);
        }

        let mut lights: Vec<&dyn Light> = vec![&self.lighting.ambient];
        if let Some(sun) = &self.lighting.directional {
            lights.push(sun);
        }
        for point in &self.lighting.points {
            lights.push(point);
        }

        let background = self.mode.theme().background;
        frame_input
            .screen()
            .clear(ClearState::color_and_depth(
                background.r as f32 / 255.0,
                background.g as f32 / 255.0,
                background.b as f32 / 255.0,
                1.0,
                1.0,
            ))
            .render(&camera, &objects, &lights);

        FrameOutput {
            exit,
            ..Default::default()
        }
    }

    fn invert_theme(&mut self) {
        self.mode = self.mode.inverted();
        let theme = self.mode.theme();

        self.sphere.material.albedo = srgba(theme.sphere);
        for line in &mut self.plain_lines {
            line.gm.material.color = srgba(theme.plain_line);
        }
        for dash in &mut self.dashes {
            dash.material.color = srgba(theme.dashed_line);
        }
        for marker in &mut self.markers {
            marker.material.albedo = srgba(theme.marker);
        }
        for label in &mut self.labels {
            label.gm.material.color = srgba(theme.label_text);
        }
        log::info!("theme inverted to {:?}", self.mode);
    }
}

/// Open a destination in the system browser. A failure is logged, not
/// fatal; the scene keeps running either way.
fn navigate(url: &str) {
    log::info!("navigating to {url}");
    if let Err(err) = webbrowser::open(url) {
        log::error!("failed to open '{url}': {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_transform_maps_the_unit_cylinder_onto_the_segment() {
        let dir = Vec3::new(0.0, 1.0, 0.0);
        let m = segment_transform(dir, 1.0, 2.0, 0.01);

        // Cylinder base (0,0,0) lands at direction * start.
        let base = m * vec4(0.0, 0.0, 0.0, 1.0);
        assert!((base.x).abs() < 1e-5);
        assert!((base.y - 1.0).abs() < 1e-5);
        // Cylinder tip (1,0,0) lands at direction * (start + len).
        let tip = m * vec4(1.0, 0.0, 0.0, 1.0);
        assert!((tip.y - 3.0).abs() < 1e-5);
        assert!(tip.x.abs() < 1e-5 && tip.z.abs() < 1e-5);
    }

    #[test]
    fn billboard_transform_centers_the_quad_and_faces_the_viewer() {
        let position = Vec3::new(2.0, 1.0, -3.0);
        let viewer = Vec3::new(0.0, 0.0, 10.0);
        let m = billboard_transform(position, viewer, 1.0, 0.5);

        let center = m * vec4(0.0, 0.0, 0.0, 1.0);
        assert!((center.x - 2.0).abs() < 1e-5);
        assert!((center.y - 1.0).abs() < 1e-5);
        assert!((center.z + 3.0).abs() < 1e-5);

        // The quad's +Z edge midpoint moves toward the viewer.
        let front = m * vec4(0.0, 0.0, 1.0, 1.0);
        let toward = Vec3::new(front.x, front.y, front.z) - position;
        let expected = (viewer - position).normalize();
        assert!(toward.normalize().dot(expected) > 0.999);
    }
}
