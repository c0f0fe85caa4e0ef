//! Tuning constants for the default race.
//!
//! World space is y-up. Speeds are in world units per frame, turn rates in radians
//! per frame and every duration in seconds of race clock.

pub mod kart {
    use glam::Vec3A;

    /// Top speed of a kart with no modifiers applied
    pub const BASE_SPEED: f32 = 0.5;
    /// Speed gained (or lost when reversing) per frame while the pedal is held
    pub const ACCEL: f32 = 0.02;
    /// Reverse speed is capped at this fraction of the current max speed
    pub const REVERSE_SPEED_RATIO: f32 = 0.5;
    /// Multiplicative speed decay applied on frames with no pedal input
    pub const FRICTION: f32 = 0.95;
    pub const TURN_SPEED: f32 = 0.03;
    pub const DRIFT_FACTOR: f32 = 1.5;
    /// Drifting only engages above this speed
    pub const DRIFT_MIN_SPEED: f32 = 0.1;
    /// Drift time the player must exceed before the drift boost kicks in
    pub const DRIFT_BOOST_TIME: f32 = 1.0;
    pub const DRIFT_BOOST_SCALE: f32 = 1.2;
    /// Below this speed the kart neither moves nor turns
    pub const MIN_MOVE_SPEED: f32 = 0.01;
    pub const WHEEL_SPIN_SCALE: f32 = 2.0;

    pub const MAX_KARTS: usize = 4;

    /// Start grid, the first slot belongs to the player
    pub const START_GRID: [Vec3A; MAX_KARTS] = [
        Vec3A::new(30.0, 1.0, 0.0),
        Vec3A::new(32.0, 1.0, 2.0),
        Vec3A::new(32.0, 1.0, -2.0),
        Vec3A::new(34.0, 1.0, 0.0),
    ];
}

pub mod track {
    use glam::Vec3A;

    pub const SEGMENTS: usize = 64;
    pub const WIDTH: f32 = 8.0;
    pub const SURFACE_Y: f32 = 0.1;
    pub const RADIUS_X: f32 = 30.0;
    pub const WOBBLE_X: f32 = 10.0;
    pub const RADIUS_Z: f32 = 40.0;
    pub const WOBBLE_Z: f32 = 5.0;

    pub const WALL_POST_STRIDE: usize = 3;
    pub const WALL_POST_Y: f32 = 1.5;

    pub const CHECKPOINT_AMOUNT: usize = 4;
    pub const CHECKPOINT_LOCS: [Vec3A; CHECKPOINT_AMOUNT] = [
        Vec3A::new(30.0, 1.0, 0.0),
        Vec3A::new(0.0, 1.0, 40.0),
        Vec3A::new(-30.0, 1.0, 0.0),
        Vec3A::new(0.0, 1.0, -40.0),
    ];
    /// A checkpoint counts as reached when strictly closer than this
    pub const CHECKPOINT_RADIUS: f32 = 15.0;
}

pub mod ai {
    pub const STEER_THRESHOLD: f32 = 0.1;
    pub const CORNER_DEVIATION: f32 = 0.3;
    pub const CORNER_MIN_SPEED: f32 = 0.3;
    pub const CORNER_DRIFT_SCALE: f32 = 0.8;

    pub const ALIGNED_DOT: f32 = 0.8;
    pub const CRUISE_DOT: f32 = 0.5;
    pub const ACCEL: f32 = 0.01;
    pub const CRUISE_ACCEL: f32 = 0.005;
    pub const DECEL: f32 = 0.01;
    pub const CRUISE_SPEED_RATIO: f32 = 0.7;
    pub const SLOW_SPEED_RATIO: f32 = 0.3;
    pub const MIN_SPEED: f32 = 0.1;

    pub const AVOID_RADIUS: f32 = 5.0;
    pub const AVOID_STEP: f32 = 0.1;
    pub const AVOID_SPEED_DECAY: f32 = 0.95;

    pub const BOUNDS_RADIUS: f32 = 50.0;
    pub const BOUNDS_PULL: f32 = 0.2;

    pub mod rubber_band {
        pub const FAR_DIST: f32 = 30.0;
        pub const NEAR_DIST: f32 = 10.0;
        pub const FAR_SPEED_SCALE: f32 = 1.2;
        pub const NEAR_SPEED_SCALE: f32 = 0.9;
    }
}

pub mod items {
    use glam::Vec3A;

    pub const PICKUP_RADIUS: f32 = 3.0;
    pub const RESPAWN_TIME: f32 = 10.0;

    pub const LOCS_AMOUNT: usize = 6;
    pub const LOCS: [Vec3A; LOCS_AMOUNT] = [
        Vec3A::new(20.0, 2.0, 30.0),
        Vec3A::new(-20.0, 2.0, 20.0),
        Vec3A::new(35.0, 2.0, -15.0),
        Vec3A::new(-30.0, 2.0, -25.0),
        Vec3A::new(0.0, 2.0, 45.0),
        Vec3A::new(15.0, 2.0, -35.0),
    ];

    pub const SPIN_PER_FRAME: f32 = 0.02;
    pub const BOB_FREQUENCY: f32 = 2.0;
    pub const BOB_AMPLITUDE: f32 = 0.1;

    pub mod mushroom {
        pub const SPEED_SCALE: f32 = 1.5;
        pub const DURATION: f32 = 2.0;
    }

    pub mod star {
        pub const SPEED_SCALE: f32 = 2.0;
        pub const DURATION: f32 = 3.0;
    }

    pub mod fireball {
        pub const FORWARD_OFFSET: f32 = 3.0;
        pub const LIFETIME: f32 = 1.0;
    }
}

pub mod race {
    pub const TOTAL_LAPS: u32 = 3;
    /// Upper bound on the delta fed to the simulation
    pub const MAX_FRAME_TIME: f32 = 0.016;
    /// Host frames closer than this to the last simulated one are held back.
    /// Just under the 60 Hz frame interval.
    pub const MIN_FRAME_TIME: f32 = 1.0 / 64.0;
    /// Frame events beyond this amount are dropped
    pub const MAX_FRAME_EVENTS: usize = 16;
}

pub mod camera {
    use glam::Vec3A;

    pub const OFFSET: Vec3A = Vec3A::new(0.0, 8.0, 10.0);
    pub const LERP_SPEED: f32 = 0.05;
}

pub mod hud {
    /// Speed readout is `|speed| * SPEED_TO_KMH`
    pub const SPEED_TO_KMH: f32 = 100.0;
}
