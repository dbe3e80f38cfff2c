use std::f32::consts::PI;

use bytemuck::{Pod, Zeroable};

use crate::color::ColorState;

/// Number of vertices in the triangle (and capacity of the vertex buffer).
pub const VERTEX_COUNT: usize = 3;

/// Resting x positions (top, bottom-left, bottom-right). Never animated.
pub const BASE_X: [f32; VERTEX_COUNT] = [0.0, -0.5, 0.5];

/// Resting y positions (top, bottom-left, bottom-right).
pub const BASE_Y: [f32; VERTEX_COUNT] = [0.5, -0.5, -0.5];

/// Phase offset per vertex; 120° apart so the wave travels around the triangle.
pub const PHASE: [f32; VERTEX_COUNT] = [0.0, 2.0 * PI / 3.0, 4.0 * PI / 3.0];

/// Peak vertical displacement in NDC units.
pub const AMPLITUDE: f32 = 0.25;

/// Angular frequency in radians per second.
pub const FREQUENCY: f32 = 2.0;

/// GPU vertex: NDC position + straight RGBA color.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x4  // color
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Color of every vertex, in vertex order.
///
/// With `clamp` unset the values pass through untouched, out-of-range input
/// included.
pub fn vertex_colors(colors: &ColorState, clamp: bool) -> [[f32; 4]; VERTEX_COUNT] {
    colors.as_array().map(|c| {
        let c = if clamp { c.clamped() } else { c };
        c.to_rgba()
    })
}

/// Triangle at rest: base positions, no oscillation.
///
/// This is what the vertex buffer holds before the first frame.
pub fn rest(colors: &ColorState, clamp: bool) -> [Vertex; VERTEX_COUNT] {
    let color = vertex_colors(colors, clamp);
    std::array::from_fn(|i| Vertex {
        position: [BASE_X[i], BASE_Y[i]],
        color: color[i],
    })
}

/// Vertical position of vertex `i` at animation time `t`.
#[inline]
pub fn animated_y(i: usize, t: f32) -> f32 {
    BASE_Y[i] + AMPLITUDE * (t * FREQUENCY + PHASE[i]).sin()
}

/// Full triangle at animation time `t`.
///
/// Pure: every field of every vertex is recomputed from `t` and `colors`, so
/// writing the result over the previous buffer contents leaves no stale state.
pub fn animate(t: f32, colors: &ColorState, clamp: bool) -> [Vertex; VERTEX_COUNT] {
    let color = vertex_colors(colors, clamp);
    std::array::from_fn(|i| Vertex {
        position: [BASE_X[i], animated_y(i, t)],
        color: color[i],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    const EPS: f32 = 1e-6;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(std::mem::size_of::<[Vertex; VERTEX_COUNT]>(), 72);
        assert_eq!(Vertex::layout().array_stride, 24);
        assert_eq!(Vertex::layout().attributes[1].offset, 8);
    }

    #[test]
    fn rest_positions_match_base() {
        let v = rest(&ColorState::default(), false);
        assert_eq!(v[0].position, [0.0, 0.5]);
        assert_eq!(v[1].position, [-0.5, -0.5]);
        assert_eq!(v[2].position, [0.5, -0.5]);
    }

    #[test]
    fn colors_follow_state_with_opaque_alpha() {
        let colors = ColorState::new(
            Rgb::new(0.1, 0.2, 0.3),
            Rgb::new(0.4, 0.5, 0.6),
            Rgb::new(0.7, 0.8, 0.9),
        );
        for t in [0.0, 0.37, 12.5] {
            let v = animate(t, &colors, false);
            assert_eq!(v[0].color, [0.1, 0.2, 0.3, 1.0]);
            assert_eq!(v[1].color, [0.4, 0.5, 0.6, 1.0]);
            assert_eq!(v[2].color, [0.7, 0.8, 0.9, 1.0]);
        }
    }

    #[test]
    fn y_follows_phase_shifted_sine() {
        let colors = ColorState::default();
        let mut t = 0.0f32;
        while t < 10.0 {
            let v = animate(t, &colors, false);
            for i in 0..VERTEX_COUNT {
                let expected = BASE_Y[i] + 0.25 * (2.0 * t + PHASE[i]).sin();
                assert!(close(v[i].position[1], expected), "t={t} i={i}");
            }
            t += 0.173;
        }
    }

    #[test]
    fn x_is_never_animated() {
        let colors = ColorState::default();
        for step in 0..500 {
            let v = animate(step as f32 * 0.05, &colors, false);
            for i in 0..VERTEX_COUNT {
                assert_eq!(v[i].position[0], BASE_X[i]);
            }
        }
    }

    #[test]
    fn at_time_zero_only_top_is_at_rest() {
        let v = animate(0.0, &ColorState::default(), false);
        let offset = 0.25 * (2.0 * PI / 3.0).sin();
        assert!(close(v[0].position[1], 0.5));
        assert!(close(v[1].position[1], -0.5 + offset));
        assert!(close(v[2].position[1], -0.5 - offset));
    }

    #[test]
    fn displacement_stays_within_amplitude() {
        let colors = ColorState::default();
        for step in 0..1000 {
            let v = animate(step as f32 * 0.01, &colors, false);
            for i in 0..VERTEX_COUNT {
                assert!((v[i].position[1] - BASE_Y[i]).abs() <= AMPLITUDE + EPS);
            }
        }
    }

    #[test]
    fn out_of_range_colors_pass_through_unless_clamped() {
        let colors = ColorState::new(
            Rgb::new(1.5, -0.2, 0.5),
            Rgb::green(),
            Rgb::blue(),
        );
        assert_eq!(vertex_colors(&colors, false)[0], [1.5, -0.2, 0.5, 1.0]);
        assert_eq!(vertex_colors(&colors, true)[0], [1.0, 0.0, 0.5, 1.0]);
    }
}
