//! Procedural shading for the orb bodies.
//!
//! The render shader is assembled here from the shared noise source plus the
//! deformation (vertex) and color/glow (fragment) stages. Both stages call the
//! one `noise3` definition embedded by [`render_shader`], so the geometry
//! deformation and the color field can never use diverging noise algorithms.
//!
//! The model is a pure function of the surface point, the uniforms and time:
//! vertices are pushed along their normal by a noise displacement, fragments
//! blend `color1` toward `color2` by a low-frequency noise sample, darken by a
//! second high-frequency sample, and gain an additive fresnel rim scaled by
//! the glow intensity. Alpha is fixed at 1; the rim term is left unclamped for
//! the backend's output stage to handle.

use crate::noise::NOISE_WGSL;

/// Spatial frequency of the vertex deformation noise.
pub const DEFORMATION_FREQUENCY: f32 = 10.0;
/// Low spatial frequency of the color-mix noise.
pub const COLOR_FREQUENCY_LOW: f32 = 2.0;
/// High spatial frequency of the darkening noise.
pub const COLOR_FREQUENCY_HIGH: f32 = 8.0;
/// The color noise advances at this fraction of the animation speed.
pub const COLOR_SPEED_FACTOR: f32 = 0.3;
/// Maximum darkening applied by the high-frequency sample.
pub const DARKEN_MAX: f32 = 0.3;
/// Exponent of the fresnel rim term.
pub const FRESNEL_POWER: f32 = 3.0;

/// Build the complete WGSL render shader for the orb.
pub fn render_shader() -> String {
    format!(
        r#"{noise}

struct Uniforms {{
    view_proj: mat4x4<f32>,
    camera_pos: vec3<f32>,
    time: f32,
    color1: vec3<f32>,
    animation_speed: f32,
    color2: vec3<f32>,
    deformation_amount: f32,
    glow_intensity: f32,
}};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexOutput {{
    @builtin(position) clip_position: vec4<f32>,
    @location(0) local_position: vec3<f32>,
    @location(1) local_normal: vec3<f32>,
}};

// XYZ-order Euler rotation, matching the CPU side's instance transforms.
fn euler_xyz(angles: vec3<f32>) -> mat3x3<f32> {{
    let cx = cos(angles.x);
    let sx = sin(angles.x);
    let cy = cos(angles.y);
    let sy = sin(angles.y);
    let cz = cos(angles.z);
    let sz = sin(angles.z);

    let rx = mat3x3<f32>(
        1.0, 0.0, 0.0,
        0.0, cx, sx,
        0.0, -sx, cx,
    );
    let ry = mat3x3<f32>(
        cy, 0.0, -sy,
        0.0, 1.0, 0.0,
        sy, 0.0, cy,
    );
    let rz = mat3x3<f32>(
        cz, sz, 0.0,
        -sz, cz, 0.0,
        0.0, 0.0, 1.0,
    );
    return rx * ry * rz;
}}

@vertex
fn vs_main(
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) instance_translation: vec3<f32>,
    @location(3) instance_rotation: vec3<f32>,
) -> VertexOutput {{
    let displacement = noise3(position * {deform_freq:?}
        + vec3(uniforms.time * uniforms.animation_speed)) * uniforms.deformation_amount;
    let deformed = position + normal * displacement;
    let world = euler_xyz(instance_rotation) * deformed + instance_translation;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(world, 1.0);
    out.local_position = deformed;
    out.local_normal = normal;
    return out;
}}

fn fresnel(power: f32, normal: vec3<f32>, view_dir: vec3<f32>) -> f32 {{
    return pow(1.0 - dot(normal, view_dir), power);
}}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {{
    let noise_speed = {color_speed:?} * uniforms.animation_speed;
    let t = vec3(uniforms.time * noise_speed);
    let n1 = noise3(in.local_position * {freq_low:?} + t);
    let n2 = noise3(in.local_position * {freq_high:?} + t);

    let mix_factor = (n1 + 1.0) * 0.5;
    let base_color = mix(uniforms.color1, uniforms.color2, mix_factor);
    var final_color = mix(base_color, vec3<f32>(0.0), (n2 + 1.0) * 0.5 * {darken:?});

    let view_direction = normalize(uniforms.camera_pos - in.local_position);
    let glow = fresnel({fresnel_power:?}, in.local_normal, view_direction);
    final_color += glow * uniforms.glow_intensity;

    return vec4<f32>(final_color, 1.0);
}}
"#,
        noise = NOISE_WGSL,
        deform_freq = DEFORMATION_FREQUENCY,
        color_speed = COLOR_SPEED_FACTOR,
        freq_low = COLOR_FREQUENCY_LOW,
        freq_high = COLOR_FREQUENCY_HIGH,
        darken = DARKEN_MAX,
        fresnel_power = FRESNEL_POWER,
    )
}
