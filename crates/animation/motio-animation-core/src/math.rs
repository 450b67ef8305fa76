//! Small vector/quaternion helpers on plain arrays.
//! Quaternions are (x, y, z, w).

pub const IDENTITY_QUAT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

#[inline]
pub fn add3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn scale3(a: [f32; 3], s: f32) -> [f32; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
pub fn dot3(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn length3(a: [f32; 3]) -> f32 {
    dot3(a, a).sqrt()
}

/// Unit vector along `a`, or `fallback` when the squared length is at most `epsilon`.
#[inline]
pub fn normalize3_safe(a: [f32; 3], fallback: [f32; 3], epsilon: f32) -> [f32; 3] {
    let len2 = dot3(a, a);
    if len2 <= epsilon {
        return fallback;
    }
    scale3(a, len2.sqrt().recip())
}

#[inline]
pub fn add4(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
}

#[inline]
pub fn scale4(a: [f32; 4], s: f32) -> [f32; 4] {
    [a[0] * s, a[1] * s, a[2] * s, a[3] * s]
}

#[inline]
pub fn neg4(a: [f32; 4]) -> [f32; 4] {
    [-a[0], -a[1], -a[2], -a[3]]
}

#[inline]
pub fn dot4(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

/// Unit quaternion along `q`, or `fallback` when the squared norm is at most `epsilon`.
#[inline]
pub fn normalize4_safe(q: [f32; 4], fallback: [f32; 4], epsilon: f32) -> [f32; 4] {
    let len2 = dot4(q, q);
    if len2 <= epsilon {
        return fallback;
    }
    scale4(q, len2.sqrt().recip())
}

/// Angle in radians between the orientations of two unit quaternions.
/// `q` and `-q` describe the same orientation, so the result ignores sign.
pub fn quat_angle_between(a: [f32; 4], b: [f32; 4]) -> f32 {
    let d = dot4(a, b).abs().min(1.0);
    2.0 * d.acos()
}
