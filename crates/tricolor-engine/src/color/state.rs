/// Straight RGB color with `f32` channels.
///
/// Channels are nominally in `[0, 1]`. Values are not clamped on construction;
/// range enforcement belongs to whoever edits them (see [`ColorState::adjust`]).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn red() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn green() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn blue() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn channel(self, channel: Channel) -> f32 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    #[inline]
    pub fn channel_mut(&mut self, channel: Channel) -> &mut f32 {
        match channel {
            Channel::Red => &mut self.r,
            Channel::Green => &mut self.g,
            Channel::Blue => &mut self.b,
        }
    }

    /// Returns the color with every channel clamped to `[0, 1]`.
    ///
    /// NaN channels become `0.0`.
    #[inline]
    pub fn clamped(self) -> Self {
        fn unit(v: f32) -> f32 {
            if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
        }
        Self::new(unit(self.r), unit(self.g), unit(self.b))
    }

    /// RGBA with opaque alpha, the layout the vertex buffer expects.
    #[inline]
    pub fn to_rgba(self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }

    /// Channels scaled to the `0..=255` range, rounded, for display.
    pub fn to_u8(self) -> [u8; 3] {
        let c = self.clamped();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
        ]
    }
}

/// One of the triangle's corners.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    Top,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 3] = [Corner::Top, Corner::BottomLeft, Corner::BottomRight];

    /// Vertex index this corner maps to.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Corner::Top => 0,
            Corner::BottomLeft => 1,
            Corner::BottomRight => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Corner::Top => "Top RGB",
            Corner::BottomLeft => "Bottom Left RGB",
            Corner::BottomRight => "Bottom Right RGB",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const fn label(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

/// The three corner colors driving the triangle.
///
/// The default is the classic red / green / blue triangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorState {
    pub top: Rgb,
    pub bottom_left: Rgb,
    pub bottom_right: Rgb,
}

impl ColorState {
    /// Smallest increment applied by [`ColorState::adjust`].
    pub const STEP: f32 = 0.01;

    #[inline]
    pub const fn new(top: Rgb, bottom_left: Rgb, bottom_right: Rgb) -> Self {
        Self {
            top,
            bottom_left,
            bottom_right,
        }
    }

    #[inline]
    pub fn corner(&self, corner: Corner) -> Rgb {
        match corner {
            Corner::Top => self.top,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    #[inline]
    pub fn corner_mut(&mut self, corner: Corner) -> &mut Rgb {
        match corner {
            Corner::Top => &mut self.top,
            Corner::BottomLeft => &mut self.bottom_left,
            Corner::BottomRight => &mut self.bottom_right,
        }
    }

    /// Colors in vertex order (top, bottom-left, bottom-right).
    #[inline]
    pub fn as_array(&self) -> [Rgb; 3] {
        [self.top, self.bottom_left, self.bottom_right]
    }

    /// Sets one channel, clamped to `[0, 1]` and snapped to [`Self::STEP`].
    ///
    /// This is the input-control contract: editors go through here, the renderer
    /// does not clamp.
    pub fn set(&mut self, corner: Corner, channel: Channel, value: f32) {
        let snapped = (value / Self::STEP).round() * Self::STEP;
        let value = if snapped.is_nan() { 0.0 } else { snapped.clamp(0.0, 1.0) };
        *self.corner_mut(corner).channel_mut(channel) = value;
    }

    /// Moves one channel by `steps` increments of [`Self::STEP`] and returns the new value.
    pub fn adjust(&mut self, corner: Corner, channel: Channel, steps: i32) -> f32 {
        let current = self.corner(corner).channel(channel);
        self.set(corner, channel, current + steps as f32 * Self::STEP);
        self.corner(corner).channel(channel)
    }
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new(Rgb::red(), Rgb::green(), Rgb::blue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_red_green_blue() {
        let s = ColorState::default();
        assert_eq!(s.as_array(), [Rgb::red(), Rgb::green(), Rgb::blue()]);
    }

    #[test]
    fn corner_indices_follow_vertex_order() {
        let indices: Vec<usize> = Corner::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn set_clamps_to_unit_range() {
        let mut s = ColorState::default();
        s.set(Corner::Top, Channel::Green, 1.7);
        assert_eq!(s.top.g, 1.0);
        s.set(Corner::Top, Channel::Green, -0.3);
        assert_eq!(s.top.g, 0.0);
    }

    #[test]
    fn set_snaps_to_step() {
        let mut s = ColorState::default();
        s.set(Corner::BottomLeft, Channel::Blue, 0.123);
        assert!((s.bottom_left.b - 0.12).abs() < 1e-6);
    }

    #[test]
    fn set_nan_becomes_zero() {
        let mut s = ColorState::default();
        s.set(Corner::BottomRight, Channel::Blue, f32::NAN);
        assert_eq!(s.bottom_right.b, 0.0);
    }

    #[test]
    fn adjust_moves_by_steps_and_saturates() {
        let mut s = ColorState::default();
        let v = s.adjust(Corner::Top, Channel::Red, -10);
        assert!((v - 0.9).abs() < 1e-6);
        let v = s.adjust(Corner::Top, Channel::Red, 50);
        assert_eq!(v, 1.0);
        // Other channels and corners are untouched.
        assert_eq!(s.top.g, 0.0);
        assert_eq!(s.bottom_left, Rgb::green());
    }

    #[test]
    fn to_u8_scales_and_rounds() {
        assert_eq!(Rgb::new(1.0, 0.5, 0.0).to_u8(), [255, 128, 0]);
        assert_eq!(Rgb::new(2.0, -1.0, 0.004).to_u8(), [255, 0, 1]);
    }

    #[test]
    fn to_rgba_is_opaque() {
        assert_eq!(Rgb::new(0.2, 0.4, 0.6).to_rgba(), [0.2, 0.4, 0.6, 1.0]);
    }
}
