/// Per-call contact report produced by the resolver.
///
/// Lifecycle: [`ContactState::reset`] runs at the start of every resolve call,
/// carrying the previous `slope_angle` into `slope_angle_old`. The passes then
/// fill the flags in, and the host reads them once the call returns.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContactState {
    pub above: bool,
    pub below: bool,
    pub left: bool,
    pub right: bool,
    pub climbing_slope: bool,
    pub descending_slope: bool,
    /// Slope under the body this call, degrees from up; 0 if none.
    pub slope_angle: f32,
    /// `slope_angle` from the previous call.
    pub slope_angle_old: f32,
}

impl ContactState {
    pub fn reset(&mut self) {
        self.above = false;
        self.below = false;
        self.left = false;
        self.right = false;
        self.climbing_slope = false;
        self.descending_slope = false;
        self.slope_angle_old = self.slope_angle;
        self.slope_angle = 0.0;
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.below
    }

    #[inline]
    pub fn on_wall(&self) -> bool {
        self.left || self.right
    }

    /// Set the facing flags for a sideways block.
    #[inline]
    pub(crate) fn set_horizontal(&mut self, direction_x: f32) {
        self.left = direction_x < 0.0;
        self.right = direction_x > 0.0;
    }

    /// Set the facing flags for a vertical block.
    #[inline]
    pub(crate) fn set_vertical(&mut self, direction_y: f32) {
        self.above = direction_y > 0.0;
        self.below = direction_y < 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_flags_and_carries_slope_angle() {
        let mut c = ContactState {
            above: true,
            below: true,
            left: true,
            right: true,
            climbing_slope: true,
            descending_slope: true,
            slope_angle: 30.0,
            slope_angle_old: 10.0,
        };
        c.reset();
        assert_eq!(
            c,
            ContactState {
                slope_angle_old: 30.0,
                ..ContactState::default()
            }
        );

        // A second reset forgets the old angle once no slope was recorded in between.
        c.reset();
        assert_eq!(c.slope_angle_old, 0.0);
    }

    #[test]
    fn direction_flags_are_exclusive() {
        let mut c = ContactState::default();
        c.set_horizontal(-1.0);
        assert!(c.left && !c.right && c.on_wall());
        c.set_vertical(-1.0);
        assert!(c.below && !c.above && c.is_grounded());
        c.set_vertical(1.0);
        assert!(c.above && !c.below);
    }
}
