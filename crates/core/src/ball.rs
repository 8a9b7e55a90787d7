//! Ball module - motion and collision resolution
//!
//! Each frame the ball advances by its velocity and then resolves collisions
//! in two independent passes:
//!
//! 1. **Walls and goals**: an ordered rule table ([`WALL_RULES`]) is walked
//!    top to bottom and the first rule whose predicate holds is applied. At
//!    most one wall rule fires per frame, so a ball touching a goal line and a
//!    side wall at the same time only scores (the vertical reflection is left
//!    for a later frame).
//! 2. **Paddles**: only the paddle the ball is travelling towards is checked,
//!    and only the ball's centre point is tested against the paddle rectangle.
//!
//! The ball never touches the scoreboard. [`Ball::move_step`] returns a
//! [`BallStep`] describing what happened and the match controller applies the
//! score delta.

use crate::paddle::Paddle;
use crate::surface::Surface;
use crate::types::{Extent, Rgb, Side, Vector2i};

/// Wall or goal line touched during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallContact {
    /// Ball reached the right edge; the left player scores
    RightGoal,
    /// Ball reached the left edge; the right player scores
    LeftGoal,
    /// Ball reached the bottom wall
    Bottom,
    /// Ball reached the top wall
    Top,
}

/// Velocity axis reflected by a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl WallContact {
    pub const fn axis(self) -> Axis {
        match self {
            WallContact::RightGoal | WallContact::LeftGoal => Axis::X,
            WallContact::Bottom | WallContact::Top => Axis::Y,
        }
    }

    /// Player awarded a point by this contact
    pub const fn scorer(self) -> Option<Side> {
        match self {
            WallContact::RightGoal => Some(Side::Left),
            WallContact::LeftGoal => Some(Side::Right),
            WallContact::Bottom | WallContact::Top => None,
        }
    }
}

/// One entry in the wall rule table.
#[derive(Clone, Copy)]
pub struct WallRule {
    pub contact: WallContact,
    hit: fn(Vector2i, i32, Extent) -> bool,
}

impl WallRule {
    pub fn matches(&self, center: Vector2i, radius: i32, arena: Extent) -> bool {
        (self.hit)(center, radius, arena)
    }
}

impl std::fmt::Debug for WallRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WallRule")
            .field("contact", &self.contact)
            .finish()
    }
}

/// Wall rules in priority order. The first match wins.
pub const WALL_RULES: [WallRule; 4] = [
    WallRule {
        contact: WallContact::RightGoal,
        hit: touches_right,
    },
    WallRule {
        contact: WallContact::LeftGoal,
        hit: touches_left,
    },
    WallRule {
        contact: WallContact::Bottom,
        hit: touches_bottom,
    },
    WallRule {
        contact: WallContact::Top,
        hit: touches_top,
    },
];

fn touches_right(c: Vector2i, r: i32, arena: Extent) -> bool {
    c.x.saturating_add(r) >= arena.width
}

fn touches_left(c: Vector2i, r: i32, _arena: Extent) -> bool {
    c.x.saturating_sub(r) <= 0
}

fn touches_bottom(c: Vector2i, r: i32, arena: Extent) -> bool {
    c.y.saturating_add(r) >= arena.height
}

fn touches_top(c: Vector2i, r: i32, _arena: Extent) -> bool {
    c.y.saturating_sub(r) <= 0
}

/// First wall rule matching the given ball state, if any.
pub fn first_wall_contact(center: Vector2i, radius: i32, arena: Extent) -> Option<WallContact> {
    WALL_RULES
        .iter()
        .find(|rule| rule.matches(center, radius, arena))
        .map(|rule| rule.contact)
}

/// Outcome of a single ball move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BallStep {
    pub wall: Option<WallContact>,
    /// Paddle the ball bounced off, if any
    pub paddle: Option<Side>,
}

impl BallStep {
    /// Player who scored this frame
    pub fn scorer(&self) -> Option<Side> {
        self.wall.and_then(WallContact::scorer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ball {
    center: Vector2i,
    radius: i32,
    velocity: Vector2i,
    arena: Extent,
    color: Rgb,
}

impl Ball {
    pub fn new(center: Vector2i, radius: i32, velocity: Vector2i, arena: Extent) -> Self {
        Self {
            center,
            radius,
            velocity,
            arena,
            color: Rgb::WHITE,
        }
    }

    pub fn center(&self) -> Vector2i {
        self.center
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn velocity(&self) -> Vector2i {
        self.velocity
    }

    /// Advance one frame and resolve wall, goal and paddle collisions.
    pub fn move_step(&mut self, left: &Paddle, right: &Paddle) -> BallStep {
        self.center += self.velocity;

        let mut step = BallStep::default();

        if let Some(contact) = first_wall_contact(self.center, self.radius, self.arena) {
            self.reflect(contact.axis());
            step.wall = Some(contact);
        }

        // Only the paddle the ball is heading towards can deflect it.
        let facing = match self.velocity.x {
            vx if vx < 0 => Some((Side::Left, left)),
            vx if vx > 0 => Some((Side::Right, right)),
            _ => None,
        };
        if let Some((side, paddle)) = facing {
            if paddle.bounding_rect().contains(self.center) {
                self.reflect(Axis::X);
                step.paddle = Some(side);
            }
        }

        step
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.fill_circle(self.center, self.radius, self.color);
    }

    fn reflect(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.velocity.x = self.velocity.x.saturating_neg(),
            Axis::Y => self.velocity.y = self.velocity.y.saturating_neg(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{DrawOp, RecordingSurface};
    use crate::types::{BALL_RADIUS, PADDLE_HEIGHT, PADDLE_WIDTH, SCREEN_HEIGHT};
    use proptest::prelude::*;

    fn arena() -> Extent {
        Extent::default()
    }

    fn ball(cx: i32, cy: i32, vx: i32, vy: i32) -> Ball {
        Ball::new(
            Vector2i::new(cx, cy),
            BALL_RADIUS,
            Vector2i::new(vx, vy),
            arena(),
        )
    }

    fn paddle(x: i32, y: i32) -> Paddle {
        Paddle::new(Vector2i::new(x, y), PADDLE_WIDTH, PADDLE_HEIGHT, SCREEN_HEIGHT)
    }

    /// Paddles parked in the top corners, out of the ball's path.
    fn parked_paddles() -> (Paddle, Paddle) {
        (paddle(-100, 0), paddle(900, 0))
    }

    #[test]
    fn test_huge_velocity_saturates_into_a_goal() {
        let (l, r) = parked_paddles();
        let mut b = ball(425, 275, i32::MAX, i32::MIN);
        let step = b.move_step(&l, &r);
        assert_eq!(b.center(), Vector2i::new(i32::MAX, i32::MIN));
        assert_eq!(step.wall, Some(WallContact::RightGoal));
        assert_eq!(b.velocity(), Vector2i::new(-i32::MAX, i32::MIN));

        let mut b = ball(425, 275, i32::MIN, 0);
        let step = b.move_step(&l, &r);
        assert_eq!(step.wall, Some(WallContact::LeftGoal));
        assert_eq!(b.velocity().x, i32::MAX);
    }

    #[test]
    fn test_wall_rule_order() {
        let order: Vec<WallContact> = WALL_RULES.iter().map(|r| r.contact).collect();
        assert_eq!(
            order,
            vec![
                WallContact::RightGoal,
                WallContact::LeftGoal,
                WallContact::Bottom,
                WallContact::Top,
            ]
        );
    }

    #[test]
    fn test_advances_by_velocity() {
        let (l, r) = parked_paddles();
        let mut b = ball(425, 275, 6, 2);
        let step = b.move_step(&l, &r);
        assert_eq!(b.center(), Vector2i::new(431, 277));
        assert_eq!(step, BallStep::default());
    }

    #[test]
    fn test_right_goal_scores_left() {
        let (l, r) = parked_paddles();
        let mut b = ball(425, 275, 6, 2);
        let mut frames = 0;
        let step = loop {
            let step = b.move_step(&l, &r);
            frames += 1;
            if step.wall.is_some() {
                break step;
            }
            assert!(frames < 1000, "ball never reached a wall");
        };
        assert_eq!(step.wall, Some(WallContact::RightGoal));
        assert_eq!(step.scorer(), Some(Side::Left));
        assert!(b.center().x + BALL_RADIUS >= 850);
        assert_eq!(b.velocity().x, -6);
        assert_eq!(b.velocity().y, 2);
    }

    #[test]
    fn test_left_goal_scores_right() {
        let (l, r) = parked_paddles();
        let mut b = ball(12, 275, -6, 0);
        let step = b.move_step(&l, &r);
        assert_eq!(b.center().x, 6);
        assert!(step.wall.is_none());

        let step = b.move_step(&l, &r);
        assert_eq!(b.center().x, 0);
        assert_eq!(step.wall, Some(WallContact::LeftGoal));
        assert_eq!(step.scorer(), Some(Side::Right));
        assert_eq!(b.velocity().x, 6);
    }

    #[test]
    fn test_bottom_and_top_walls_reflect_y_without_score() {
        let (l, r) = parked_paddles();
        let mut b = ball(400, 540, 0, 6);
        let step = b.move_step(&l, &r);
        assert_eq!(step.wall, Some(WallContact::Bottom));
        assert_eq!(step.scorer(), None);
        assert_eq!(b.velocity(), Vector2i::new(0, -6));

        let mut b = ball(400, 8, 0, -6);
        let step = b.move_step(&l, &r);
        assert_eq!(step.wall, Some(WallContact::Top));
        assert_eq!(step.scorer(), None);
        assert_eq!(b.velocity(), Vector2i::new(0, 6));
    }

    #[test]
    fn test_corner_only_processes_goal() {
        let (l, r) = parked_paddles();
        // Ends at (846, 546): both right goal and bottom wall are touched.
        let mut b = ball(840, 540, 6, 6);
        let step = b.move_step(&l, &r);
        assert_eq!(step.wall, Some(WallContact::RightGoal));
        assert_eq!(b.velocity(), Vector2i::new(-6, 6));
    }

    #[test]
    fn test_left_paddle_bounces_ball_moving_left() {
        let l = paddle(225, 245);
        let (_, r) = parked_paddles();
        let mut b = ball(236, 275, -6, 2);
        let step = b.move_step(&l, &r);
        assert_eq!(b.center(), Vector2i::new(230, 277));
        assert_eq!(step.paddle, Some(Side::Left));
        assert_eq!(b.velocity().x, 6);
    }

    #[test]
    fn test_paddle_ignored_when_moving_away() {
        let l = paddle(225, 245);
        let (_, r) = parked_paddles();
        let mut b = ball(224, 275, 6, 0);
        let step = b.move_step(&l, &r);
        assert_eq!(b.center().x, 230);
        assert_eq!(step.paddle, None);
        assert_eq!(b.velocity().x, 6);
    }

    #[test]
    fn test_right_paddle_bounces_ball_moving_right() {
        let (l, _) = parked_paddles();
        let r = paddle(625, 245);
        let mut b = ball(620, 260, 6, 0);
        let step = b.move_step(&l, &r);
        assert_eq!(step.paddle, Some(Side::Right));
        assert_eq!(b.velocity().x, -6);
    }

    #[test]
    fn test_zero_x_velocity_skips_paddle_check() {
        let l = paddle(225, 245);
        let r = paddle(225, 245);
        let mut b = ball(230, 270, 0, 2);
        let step = b.move_step(&l, &r);
        assert_eq!(step.paddle, None);
        assert_eq!(b.velocity(), Vector2i::new(0, 2));
    }

    #[test]
    fn test_centre_outside_paddle_misses() {
        // Left paddle spans x in [25, 45); the ball centre at x=20 is never inside.
        let l = Paddle::new(Vector2i::new(25, 245), 20, 60, SCREEN_HEIGHT);
        let (_, r) = parked_paddles();
        let mut b = ball(20, 275, -6, 0);

        let mut scorer = None;
        for _ in 0..10 {
            let step = b.move_step(&l, &r);
            assert_eq!(step.paddle, None);
            if let Some(side) = step.scorer() {
                scorer = Some(side);
                break;
            }
        }
        assert_eq!(scorer, Some(Side::Right));
        assert!(b.center().x - BALL_RADIUS <= 0);
    }

    #[test]
    fn test_goal_reflection_then_paddle_check_uses_new_direction() {
        // After the goal reflection the ball moves left, so the left paddle is checked.
        let l = paddle(840, 250);
        let (_, r) = parked_paddles();
        let mut b = ball(840, 270, 6, 0);
        let step = b.move_step(&l, &r);
        assert_eq!(step.wall, Some(WallContact::RightGoal));
        assert_eq!(step.paddle, Some(Side::Left));
        assert_eq!(b.velocity().x, 6);
    }

    #[test]
    fn test_draw_fills_circle() {
        let b = ball(425, 275, 6, 2);
        let mut s = RecordingSurface::default();
        b.draw(&mut s);
        assert_eq!(
            s.ops,
            vec![DrawOp::Circle(Vector2i::new(425, 275), 5, Rgb::WHITE)]
        );
    }

    proptest! {
        #[test]
        fn prop_first_contact_follows_priority(
            cx in -20i32..870,
            cy in -20i32..570,
        ) {
            let c = Vector2i::new(cx, cy);
            let expected = if cx + 5 >= 850 {
                Some(WallContact::RightGoal)
            } else if cx - 5 <= 0 {
                Some(WallContact::LeftGoal)
            } else if cy + 5 >= 550 {
                Some(WallContact::Bottom)
            } else if cy - 5 <= 0 {
                Some(WallContact::Top)
            } else {
                None
            };
            prop_assert_eq!(first_wall_contact(c, 5, arena()), expected);
        }

        #[test]
        fn prop_at_most_one_axis_reflected_by_walls(
            cx in 1i32..849,
            cy in 1i32..549,
            vx in -12i32..12,
            vy in -12i32..12,
        ) {
            let (l, r) = parked_paddles();
            let mut b = ball(cx, cy, vx, vy);
            let before = b.velocity();
            let step = b.move_step(&l, &r);
            let after = b.velocity();
            match step.wall.map(WallContact::axis) {
                Some(Axis::X) => {
                    prop_assert_eq!(after.x, -before.x);
                    prop_assert_eq!(after.y, before.y);
                }
                Some(Axis::Y) => {
                    prop_assert_eq!(after.x, before.x);
                    prop_assert_eq!(after.y, -before.y);
                }
                None => {
                    prop_assert_eq!(after, before);
                }
            }
        }
    }
}
