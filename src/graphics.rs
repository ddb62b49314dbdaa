use crate::render::{DrawSurface, Rgb, SkyGradient};
use bevy::prelude::*;

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    // Default Camera2d shows the window centred on the origin, 1 unit per pixel
    commands.spawn(Camera2d);
    info!("[SETUP] Camera spawned");
}

/// Draw every gizmo line at one pixel; widths are built from parallel lines.
pub fn setup_gizmo_lines(mut store: ResMut<GizmoConfigStore>) {
    let (config, _) = store.config_mut::<DefaultGizmoConfigGroup>();
    config.line.width = 1.0;
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::srgb_u8(rgb.r, rgb.g, rgb.b)
}

/// [`DrawSurface`] backed by immediate-mode gizmos.
///
/// Gizmos only stroke, so filled discs and full-screen fills are built from
/// one-pixel horizontal scanlines.
pub struct GizmoSurface<'a, 'w, 's> {
    gizmos: &'a mut Gizmos<'w, 's>,
    width: f32,
    height: f32,
}

impl<'a, 'w, 's> GizmoSurface<'a, 'w, 's> {
    pub fn new(gizmos: &'a mut Gizmos<'w, 's>, width: f32, height: f32) -> Self {
        Self {
            gizmos,
            width,
            height,
        }
    }

    /// Screen space (top-left origin, +y down) → world space (centred, +y up).
    pub fn to_world(&self, p: Vec2) -> Vec2 {
        screen_to_world(p, self.width, self.height)
    }

    fn row(&mut self, y: f32, color: Color) {
        let from = self.to_world(Vec2::new(0.0, y));
        let to = self.to_world(Vec2::new(self.width, y));
        self.gizmos.line_2d(from, to, color);
    }
}

pub fn screen_to_world(p: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(p.x - width * 0.5, height * 0.5 - p.y)
}

impl DrawSurface for GizmoSurface<'_, '_, '_> {
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb) {
        let (a, b) = (self.to_world(from), self.to_world(to));
        let color = to_color(color);
        let normal = (b - a).perp().normalize_or_zero();
        let strands = width.round().max(1.0) as u32;
        let centre = (strands - 1) as f32 * 0.5;
        for i in 0..strands {
            let shift = normal * (i as f32 - centre);
            self.gizmos.line_2d(a + shift, b + shift, color);
        }
    }

    fn circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        if radius <= 0.0 {
            return;
        }
        let c = self.to_world(center);
        let color = to_color(color);
        let r = radius.ceil() as i32;
        for dy in -r..=r {
            let dy = dy as f32;
            let half = (radius * radius - dy * dy).max(0.0).sqrt();
            self.gizmos.line_2d(
                Vec2::new(c.x - half, c.y + dy),
                Vec2::new(c.x + half, c.y + dy),
                color,
            );
        }
    }

    fn vertical_gradient(&mut self, gradient: &SkyGradient) {
        let rows = self.height.max(0.0) as u32;
        for y in 0..rows {
            let color = to_color(gradient.color_at(y as f32 / self.height));
            self.row(y as f32, color);
        }
    }

    fn fill_screen(&mut self, color: Rgb, alpha: f32) {
        let color = to_color(color).with_alpha(alpha.clamp(0.0, 1.0));
        let rows = self.height.max(0.0) as u32;
        for y in 0..rows {
            self.row(y as f32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_corners_map_to_world_corners() {
        assert_eq!(
            screen_to_world(Vec2::ZERO, 1200.0, 800.0),
            Vec2::new(-600.0, 400.0)
        );
        assert_eq!(
            screen_to_world(Vec2::new(1200.0, 800.0), 1200.0, 800.0),
            Vec2::new(600.0, -400.0)
        );
    }

    #[test]
    fn colors_convert_from_bytes() {
        let c = to_color(Rgb::new(255, 0, 0)).to_srgba();
        assert_eq!((c.red, c.green, c.blue), (1.0, 0.0, 0.0));
    }
}
