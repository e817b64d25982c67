//! The composed render shader must be valid WGSL.

use dustorb::shading;

#[test]
fn render_shader_parses_and_validates() {
    let source = shading::render_shader();
    let module = naga::front::wgsl::parse_str(&source)
        .unwrap_or_else(|e| panic!("WGSL parse error: {}", e.emit_to_string(&source)));

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .expect("render shader failed validation");
}

#[test]
fn render_shader_has_both_entry_points() {
    let source = shading::render_shader();
    let module = naga::front::wgsl::parse_str(&source).unwrap();

    let names: Vec<_> = module.entry_points.iter().map(|ep| ep.name.as_str()).collect();
    assert!(names.contains(&"vs_main"));
    assert!(names.contains(&"fs_main"));
}

#[test]
fn noise_is_defined_exactly_once() {
    let source = shading::render_shader();
    assert_eq!(source.matches("fn noise3(").count(), 1);
}
