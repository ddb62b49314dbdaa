//! Renderer-agnostic frame description.
//!
//! Every simulation entity describes itself as a list of [`Shape`]s.  The
//! engine bundles them with the sky gradient, the lightning overlay and the
//! HUD telemetry into an immutable [`RenderSnapshot`], which any backend that
//! implements [`DrawSurface`] can paint.
//!
//! All coordinates are screen space: origin top-left, `+y` down.
//!
//! ## Paint order
//!
//! | Layer            | Source                  |
//! |------------------|-------------------------|
//! | Sky gradient     | [`SkyGradient`]         |
//! | Clouds           | `Cloud::render_spec`    |
//! | Particles        | `Particle::render_spec` |
//! | Flash + bolts    | [`LightningSpec`]       |

use crate::weather::WeatherKind;
use bevy::math::Vec2;

// ── Colours ───────────────────────────────────────────────────────────────────

/// 8-bit sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }
}

pub const RAIN_COLOR: Rgb = Rgb::new(100, 150, 255);
pub const SNOW_COLOR: Rgb = Rgb::WHITE;
pub const HAIL_COLOR: Rgb = Rgb::new(200, 220, 255);
pub const HAIL_CORE_COLOR: Rgb = Rgb::WHITE;

/// Bolt strokes, painted outermost first so the white core ends on top.
pub const LIGHTNING_STROKES: [(f32, Rgb); 3] = [
    (8.0, Rgb::new(100, 100, 255)),
    (6.0, Rgb::new(150, 150, 255)),
    (3.0, Rgb::WHITE),
];

pub const FLASH_COLOR: Rgb = Rgb::WHITE;

// ── Shapes ────────────────────────────────────────────────────────────────────

/// A single primitive the draw surface knows how to paint.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Straight stroke of the given width.
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgb,
    },
    /// Filled disc.
    Circle { center: Vec2, radius: f32, color: Rgb },
}

impl Shape {
    /// Release-build guard for invariant violations: drops shapes with
    /// non-finite coordinates and clamps negative extents to zero.
    pub fn sanitized(self) -> Option<Self> {
        match self {
            Shape::Line {
                from,
                to,
                width,
                color,
            } => (from.is_finite() && to.is_finite()).then(|| Shape::Line {
                from,
                to,
                width: finite_non_negative(width),
                color,
            }),
            Shape::Circle {
                center,
                radius,
                color,
            } => center.is_finite().then(|| Shape::Circle {
                center,
                radius: finite_non_negative(radius),
                color,
            }),
        }
    }
}

fn finite_non_negative(value: f32) -> f32 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

// ── Sky ───────────────────────────────────────────────────────────────────────

/// Vertical sky gradient, `top` at y = 0 and `bottom` at the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkyGradient {
    pub top: Rgb,
    pub bottom: Rgb,
}

impl SkyGradient {
    /// Sky colours per weather kind.  Hail shares the clear-sky palette.
    pub fn for_weather(kind: WeatherKind) -> Self {
        let (top, bottom) = match kind {
            WeatherKind::Storm => (Rgb::new(40, 40, 80), Rgb::new(20, 20, 60)),
            WeatherKind::Rain => (Rgb::new(80, 80, 120), Rgb::new(60, 60, 100)),
            WeatherKind::Snow => (Rgb::new(200, 200, 220), Rgb::new(180, 180, 200)),
            WeatherKind::Clear | WeatherKind::Hail => {
                (Rgb::new(135, 206, 235), Rgb::new(176, 224, 230))
            }
        };
        Self { top, bottom }
    }

    /// Colour at `ratio` ∈ [0, 1] down the screen, truncated per channel.
    pub fn color_at(&self, ratio: f32) -> Rgb {
        let ratio = ratio.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| {
            let (a, b) = (f32::from(a), f32::from(b));
            (a + (b - a) * ratio) as u8
        };
        Rgb::new(
            lerp(self.top.r, self.bottom.r),
            lerp(self.top.g, self.bottom.g),
            lerp(self.top.b, self.bottom.b),
        )
    }
}

// ── Lightning ─────────────────────────────────────────────────────────────────

/// One polyline stroke of a bolt.
#[derive(Debug, Clone, PartialEq)]
pub struct BoltStroke {
    pub points: Vec<Vec2>,
    pub width: f32,
    pub color: Rgb,
}

/// Active lightning overlay: full-screen flash plus bolt strokes in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct LightningSpec {
    /// Flash opacity in [0, 1].
    pub flash_alpha: f32,
    pub strokes: Vec<BoltStroke>,
}

// ── Telemetry ─────────────────────────────────────────────────────────────────

/// Values shown in the HUD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telemetry {
    pub kind: WeatherKind,
    pub temperature: f32,
    pub wind: f32,
    pub intensity: f32,
    pub particle_count: usize,
}

impl Telemetry {
    /// HUD text, one entry per line.
    pub fn hud_lines(&self) -> Vec<String> {
        vec![
            format!("Weather: {}", self.kind),
            format!("Temperature: {:.1}°C", self.temperature),
            format!("Wind: {:.1} m/s", self.wind),
            format!("Intensity: {:.1}", self.intensity),
            format!("Particles: {}", self.particle_count),
            String::new(),
            "Controls:".to_string(),
            "SPACE - Change weather".to_string(),
            "↑/↓ - Adjust intensity".to_string(),
            "←/→ - Adjust wind".to_string(),
        ]
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// Immutable description of one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub width: f32,
    pub height: f32,
    pub sky: SkyGradient,
    pub clouds: Vec<Shape>,
    pub particles: Vec<Shape>,
    pub lightning: Option<LightningSpec>,
    pub telemetry: Telemetry,
}

/// Minimal painting backend the snapshot needs.
pub trait DrawSurface {
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb);
    fn circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    fn vertical_gradient(&mut self, gradient: &SkyGradient);
    /// Translucent full-screen overlay.
    fn fill_screen(&mut self, color: Rgb, alpha: f32);
}

impl RenderSnapshot {
    /// Paint the whole frame back to front.
    pub fn draw(&self, surface: &mut impl DrawSurface) {
        surface.vertical_gradient(&self.sky);
        for shape in self.clouds.iter().chain(&self.particles) {
            draw_shape(surface, shape);
        }
        if let Some(lightning) = &self.lightning {
            surface.fill_screen(FLASH_COLOR, lightning.flash_alpha);
            for stroke in &lightning.strokes {
                for pair in stroke.points.windows(2) {
                    surface.line(pair[0], pair[1], stroke.width, stroke.color);
                }
            }
        }
    }
}

fn draw_shape(surface: &mut impl DrawSurface, shape: &Shape) {
    match *shape {
        Shape::Line {
            from,
            to,
            width,
            color,
        } => surface.line(from, to, width, color),
        Shape::Circle {
            center,
            radius,
            color,
        } => surface.circle(center, radius, color),
    }
}
