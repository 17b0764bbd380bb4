use winit::event::KeyEvent;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::math::Vec3;

/// Pitch is clamped to this many degrees either side of level before the
/// look direction is rebuilt, so the camera never flips over the poles.
pub const PITCH_LIMIT_DEG: f32 = 89.0;

/// Input to [`compute_basis`]. The two modes are mutually exclusive and the
/// enum makes the authoritative fields explicit on every call.
#[derive(Debug, Clone, Copy)]
pub enum BasisInput {
    /// Startup mode: derive the look direction from an explicit target point.
    FromTarget { position: Vec3, target: Vec3 },
    /// Free-look mode: derive the look direction from accumulated yaw/pitch
    /// angles in degrees.
    FromAngles { yaw_deg: f32, pitch_deg: f32 },
}

/// Orthonormal camera orientation.
///
/// `look` points from the scene toward the camera, not the direction the
/// camera faces. Movement code negates it to go forward; the view matrix
/// uses it as-is. Flipping this sign changes which way "forward" feels.
#[derive(Debug, Clone, Copy)]
pub struct Basis {
    pub look: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

/// Look direction from yaw/pitch in degrees, pitch clamped to
/// [`PITCH_LIMIT_DEG`].
pub fn look_from_angles(yaw_deg: f32, pitch_deg: f32) -> Vec3 {
    let pitch = pitch_deg.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG).to_radians();
    let yaw = yaw_deg.to_radians();
    Vec3::new(
        pitch.cos() * yaw.cos(),
        pitch.sin(),
        pitch.cos() * yaw.sin(),
    )
}

fn basis_from_look(look: Vec3) -> Basis {
    let right = Vec3::WORLD_UP.cross(look).normalized();
    let up = look.cross(right).normalized();
    Basis { look, right, up }
}

/// Derives the orthonormal {look, right, up} triad for either input mode.
///
/// In target mode the look direction is `normalize(position - target)`:
/// target to camera, not camera to target. A look direction parallel to the
/// world up axis (or a target equal to the position) degenerates the cross
/// products into NaN; that is a configuration bug the caller screens for at
/// startup, not a runtime condition.
pub fn compute_basis(input: BasisInput) -> Basis {
    let look = match input {
        BasisInput::FromTarget { position, target } => (position - target).normalized(),
        BasisInput::FromAngles { yaw_deg, pitch_deg } => look_from_angles(yaw_deg, pitch_deg),
    };
    basis_from_look(look)
}

/// Movement flags driven by key press/release events.
#[derive(Default, Clone, Copy, Debug)]
pub struct MovementState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// First-person fly camera.
///
/// Starts in target mode; the first mouse delta switches it to free-look,
/// after which yaw/pitch own the look direction. Position integration and
/// the right/up recompute happen once per frame in [`Camera::update`].
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub movement: MovementState,
    look: Vec3,
    speed: f32,
    sensitivity: f32,
}

impl Camera {
    pub fn new(position: Vec3, target: Vec3, speed: f32, sensitivity: f32) -> Self {
        let basis = compute_basis(BasisInput::FromTarget { position, target });
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            movement: MovementState::default(),
            look: basis.look,
            speed,
            sensitivity,
        }
    }

    /// Current orientation, derived from the look direction. Recomputing
    /// right/up from look every frame keeps the triad orthonormal no matter
    /// how look was last set.
    pub fn basis(&self) -> Basis {
        basis_from_look(self.look)
    }

    /// Accumulates a raw mouse delta into yaw/pitch and rebuilds the look
    /// direction. A positive y delta pitches up (the reference controls are
    /// y-inverted and that feel is kept).
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch += dy * self.sensitivity;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
        self.look = look_from_angles(self.yaw, self.pitch);
    }

    /// Integrates one tick of movement along the current basis.
    ///
    /// Each active flag contributes `axis * (sign * speed)` independently;
    /// simultaneous flags add without renormalization, so diagonal movement
    /// is faster than axis-aligned movement. Forward scales look by -speed
    /// because look points away from the view direction.
    pub fn update(&mut self) {
        let basis = self.basis();

        if self.movement.forward {
            self.position += basis.look * -self.speed;
        }
        if self.movement.backward {
            self.position += basis.look * self.speed;
        }
        if self.movement.right {
            self.position += basis.right * self.speed;
        }
        if self.movement.left {
            self.position += basis.right * -self.speed;
        }
        if self.movement.up {
            self.position += basis.up * self.speed;
        }
        if self.movement.down {
            self.position += basis.up * -self.speed;
        }
    }

    pub fn process_keyboard(&mut self, event: &KeyEvent) {
        let is_pressed = event.state.is_pressed();
        if let PhysicalKey::Code(keycode) = event.physical_key {
            match keycode {
                KeyCode::KeyW => self.movement.forward = is_pressed,
                KeyCode::KeyS => self.movement.backward = is_pressed,
                KeyCode::KeyA => self.movement.left = is_pressed,
                KeyCode::KeyD => self.movement.right = is_pressed,
                KeyCode::Space => self.movement.up = is_pressed,
                KeyCode::KeyZ | KeyCode::ShiftLeft => self.movement.down = is_pressed,
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    fn assert_vec_eq(v: Vec3, expected: Vec3) {
        assert!(
            (v.x - expected.x).abs() < TOLERANCE
                && (v.y - expected.y).abs() < TOLERANCE
                && (v.z - expected.z).abs() < TOLERANCE,
            "expected {:?}, got {:?}",
            expected,
            v
        );
    }

    fn test_camera() -> Camera {
        Camera::new(Vec3::new(3.0, 0.0, 3.0), Vec3::ZERO, 0.05, 0.15)
    }

    #[test]
    fn test_basis_from_target_reference_values() {
        let basis = compute_basis(BasisInput::FromTarget {
            position: Vec3::new(3.0, 0.0, 3.0),
            target: Vec3::ZERO,
        });

        assert_vec_eq(basis.look, Vec3::new(0.70711, 0.0, 0.70711));
        assert_vec_eq(basis.right, Vec3::new(0.70711, 0.0, -0.70711));
        assert_vec_eq(basis.up, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_look_points_from_target_to_camera() {
        let position = Vec3::new(0.0, 0.0, 5.0);
        let basis = compute_basis(BasisInput::FromTarget {
            position,
            target: Vec3::ZERO,
        });

        // Same side as the camera, not toward the scene.
        assert!(basis.look.dot(position) > 0.0);
    }

    #[test]
    fn test_basis_is_orthonormal_for_arbitrary_angles() {
        let angle_cases = [
            (0.0, 0.0),
            (45.0, 30.0),
            (-120.0, -60.0),
            (359.0, 88.9),
            (720.0, -45.0),
        ];

        for (yaw, pitch) in angle_cases {
            let basis = compute_basis(BasisInput::FromAngles {
                yaw_deg: yaw,
                pitch_deg: pitch,
            });

            for v in [basis.look, basis.right, basis.up] {
                assert!(
                    (v.length() - 1.0).abs() < TOLERANCE,
                    "non-unit basis vector at yaw {yaw} pitch {pitch}"
                );
            }
            assert!(basis.look.dot(basis.right).abs() < TOLERANCE);
            assert!(basis.look.dot(basis.up).abs() < TOLERANCE);
            assert!(basis.right.dot(basis.up).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_pitch_clamps_to_limit() {
        let clamped = look_from_angles(10.0, 200.0);
        let limit = look_from_angles(10.0, 89.0);

        assert_vec_eq(clamped, limit);

        let clamped_down = look_from_angles(10.0, -500.0);
        let limit_down = look_from_angles(10.0, -89.0);
        assert_vec_eq(clamped_down, limit_down);
    }

    #[test]
    fn test_look_from_angles_reference_axes() {
        // Yaw 0, pitch 0 looks down +X.
        assert_vec_eq(look_from_angles(0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        // Yaw 90 swings to +Z.
        assert_vec_eq(look_from_angles(90.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_forward_moves_against_look() {
        let mut camera = test_camera();
        let start = camera.position;
        let look = camera.basis().look;

        camera.movement.forward = true;
        camera.update();

        let displacement = camera.position - start;
        assert_vec_eq(displacement, look * -0.05);
    }

    #[test]
    fn test_backward_moves_along_look() {
        let mut camera = test_camera();
        let start = camera.position;
        let look = camera.basis().look;

        camera.movement.backward = true;
        camera.update();

        assert_vec_eq(camera.position - start, look * 0.05);
    }

    #[test]
    fn test_combined_flags_add_without_renormalization() {
        let basis = test_camera().basis();

        let mut camera = test_camera();
        camera.movement.forward = true;
        camera.movement.right = true;
        let start = camera.position;
        camera.update();

        let expected = (-basis.look + basis.right) * 0.05;
        assert_vec_eq(camera.position - start, expected);

        // Strictly longer than a single-axis move: no renormalization.
        let diagonal = (camera.position - start).length();
        assert!(diagonal > 0.05 + TOLERANCE);
    }

    #[test]
    fn test_vertical_movement_uses_up_axis() {
        let mut camera = test_camera();
        let up = camera.basis().up;
        let start = camera.position;

        camera.movement.up = true;
        camera.update();
        assert_vec_eq(camera.position - start, up * 0.05);

        camera.movement.up = false;
        camera.movement.down = true;
        let mid = camera.position;
        camera.update();
        assert_vec_eq(camera.position - mid, up * -0.05);
    }

    #[test]
    fn test_opposed_flags_cancel() {
        let mut camera = test_camera();
        let start = camera.position;

        camera.movement.forward = true;
        camera.movement.backward = true;
        camera.update();

        assert_vec_eq(camera.position - start, Vec3::ZERO);
    }

    #[test]
    fn test_mouse_delta_switches_to_free_look() {
        let mut camera = test_camera();

        camera.apply_mouse_delta(600.0, 0.0); // 90 degrees of yaw at 0.15
        assert!((camera.yaw - 90.0).abs() < TOLERANCE);
        assert_vec_eq(camera.basis().look, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_mouse_pitch_accumulation_clamps() {
        let mut camera = test_camera();

        camera.apply_mouse_delta(0.0, 10_000.0);
        assert_eq!(camera.pitch, PITCH_LIMIT_DEG);

        // Clamp applies to the stored angle, so backing off works instantly.
        camera.apply_mouse_delta(0.0, -10.0 / 0.15);
        assert!(camera.pitch < PITCH_LIMIT_DEG);
    }
}
