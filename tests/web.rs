//! Browser tests. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use js_sys::{Float32Array, Uint16Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;

use webgl_facade::enums::*;
use webgl_facade::marshal::{js_bytes, js_floats, parameter_at, to_int, PixelView};
use webgl_facade::{open_asset, version, AssetError, Buffer, CanvasContext, Context, Enum, Program, Shader, Worker};

wasm_bindgen_test_configure!(run_in_browser);

const VERTEX_SRC : &str = "
attribute vec2 position;
void main() {
    gl_Position = vec4(position, 0.0, 1.0);
}
";

const FRAGMENT_SRC : &str = "
precision mediump float;
uniform vec3 u;
uniform mat2 m;
uniform ivec2 k;
void main() {
    gl_FragColor = vec4(u + vec3(m[0], m[1].x) + float(k.x + k.y), 1.0);
}
";

fn context() -> Context {
    let (ctx, _worker) = Context::new().unwrap();
    ctx
}

fn compile(ctx : &Context, ty : Enum, src : &str) -> Shader {
    let shader = ctx.create_shader(ty);
    ctx.shader_source(&shader, src);
    ctx.compile_shader(&shader);
    assert_eq!(ctx.get_shaderi(&shader, COMPILE_STATUS), 1, "{}", ctx.get_shader_info_log(&shader));
    shader
}

fn link(ctx : &Context) -> Program {
    let vs = compile(ctx, VERTEX_SHADER, VERTEX_SRC);
    let fs = compile(ctx, FRAGMENT_SHADER, FRAGMENT_SRC);
    let program = ctx.create_program();
    ctx.attach_shader(&program, &vs);
    ctx.attach_shader(&program, &fs);
    ctx.link_program(&program);
    assert_eq!(ctx.get_programi(&program, LINK_STATUS), 1, "{}", ctx.get_program_info_log(&program));
    program
}

#[wasm_bindgen_test]
fn canvas_fills_the_window() {
    let ctx = context();
    let window = web_sys::window().unwrap();
    assert_eq!(ctx.canvas().width() as f64, window.inner_width().unwrap().as_f64().unwrap());
    assert_eq!(ctx.canvas().height() as f64, window.inner_height().unwrap().as_f64().unwrap());
}

#[wasm_bindgen_test]
fn version_matches_bound_context() {
    let ctx = context();
    let expected = if ctx.is_webgl2() { "GL_ES_3_0" } else { "GL_ES_2_0" };
    assert_eq!(version(), expected);
    assert_eq!(ctx.context3().is_some(), ctx.is_webgl2());
}

#[wasm_bindgen_test]
fn clear_to_red() {
    let ctx = context();
    ctx.clear_color(1.0, 0.0, 0.0, 1.0);
    ctx.clear(COLOR_BUFFER_BIT);
    let mut pixel = [0u8; 4];
    ctx.read_pixels(&mut pixel, 0, 0, 1, 1, RGBA, UNSIGNED_BYTE).unwrap();
    assert_eq!(pixel, [255, 0, 0, 255]);
}

#[wasm_bindgen_test]
fn shader_compile_link_use() {
    let ctx = context();
    let program = link(&ctx);
    assert!(program.init);
    ctx.use_program(&program);
    assert_eq!(ctx.get_error(), NO_ERROR);
    assert_eq!(ctx.get_attached_shaders(&program).len(), 2);
    assert!(ctx.get_attrib_location(&program, "position").is_valid());
    assert!(!ctx.get_attrib_location(&program, "nope").is_valid());
}

#[wasm_bindgen_test]
fn uniform_round_trip() {
    let ctx = context();
    let program = link(&ctx);
    ctx.use_program(&program);

    let loc = ctx.get_uniform_location(&program, "u");
    assert!(!loc.is_null());
    ctx.uniform3f(&loc, 1.0, 2.0, 3.0);
    let mut out = [0.0f32; 3];
    ctx.get_uniformfv(&mut out, &loc, &program);
    assert_eq!(out, [1.0, 2.0, 3.0]);

    ctx.uniform3fv(&loc, &[4.0, 5.0, 6.0]);
    ctx.get_uniformfv(&mut out, &loc, &program);
    assert_eq!(out, [4.0, 5.0, 6.0]);
}

#[wasm_bindgen_test]
fn int_uniform_round_trip() {
    let ctx = context();
    let program = link(&ctx);
    ctx.use_program(&program);

    let loc = ctx.get_uniform_location(&program, "k");
    assert!(!loc.is_null());
    ctx.uniform2i(&loc, 7, -3);
    let mut out = [0i32; 2];
    ctx.get_uniformiv(&mut out, &loc, &program);
    assert_eq!(out, [7, -3]);

    ctx.uniform2iv(&loc, &[-11, 42]);
    assert_eq!(ctx.get_error(), NO_ERROR);
    ctx.get_uniformiv(&mut out, &loc, &program);
    assert_eq!(out, [-11, 42]);
}

#[wasm_bindgen_test]
fn matrix_uniforms_are_not_transposed() {
    let ctx = context();
    let program = link(&ctx);
    ctx.use_program(&program);

    let loc = ctx.get_uniform_location(&program, "m");
    ctx.uniform_matrix2fv(&loc, &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(ctx.get_error(), NO_ERROR);
    let mut out = [0.0f32; 4];
    ctx.get_uniformfv(&mut out, &loc, &program);
    assert_eq!(out, [1.0, 2.0, 3.0, 4.0]);
}

#[wasm_bindgen_test]
fn buffer_upload_and_draw() {
    let ctx = context();
    let program = link(&ctx);
    ctx.use_program(&program);

    let buffer = ctx.create_buffer();
    ctx.bind_buffer(ARRAY_BUFFER, &buffer);
    let vertices : [f32; 6] = [-1.0, -1.0, 1.0, -1.0, 0.0, 1.0];
    let bytes : Vec<u8> = vertices.iter().flat_map(|v| v.to_le_bytes().to_vec()).collect();
    ctx.buffer_data(ARRAY_BUFFER, &bytes, STATIC_DRAW);
    assert_eq!(ctx.get_buffer_parameteri(ARRAY_BUFFER, BUFFER_SIZE), 24);

    let position = ctx.get_attrib_location(&program, "position");
    ctx.enable_vertex_attrib_array(position);
    ctx.vertex_attrib_pointer(position, 2, FLOAT, false, 0, 0);
    ctx.draw_arrays(TRIANGLES, 0, 3);
    assert_eq!(ctx.get_error(), NO_ERROR);

    ctx.buffer_init(ARRAY_BUFFER, 64, DYNAMIC_DRAW);
    assert_eq!(ctx.get_buffer_parameteri(ARRAY_BUFFER, BUFFER_SIZE), 64);
    ctx.buffer_sub_data(ARRAY_BUFFER, 8, &bytes);
    assert_eq!(ctx.get_error(), NO_ERROR);
}

#[wasm_bindgen_test]
fn draw_elements_uses_byte_offsets() {
    let ctx = context();
    let program = link(&ctx);
    ctx.use_program(&program);

    let vertices = ctx.create_buffer();
    ctx.bind_buffer(ARRAY_BUFFER, &vertices);
    let data : [f32; 6] = [-1.0, -1.0, 1.0, -1.0, 0.0, 1.0];
    let bytes : Vec<u8> = data.iter().flat_map(|v| v.to_le_bytes().to_vec()).collect();
    ctx.buffer_data(ARRAY_BUFFER, &bytes, STATIC_DRAW);
    let position = ctx.get_attrib_location(&program, "position");
    ctx.enable_vertex_attrib_array(position);
    ctx.vertex_attrib_pointer(position, 2, FLOAT, false, 0, 0);

    let indices = ctx.create_buffer();
    ctx.bind_buffer(ELEMENT_ARRAY_BUFFER, &indices);
    let index_bytes : Vec<u8> = [0u16, 0, 1, 2].iter().flat_map(|i| i.to_le_bytes().to_vec()).collect();
    ctx.buffer_data(ELEMENT_ARRAY_BUFFER, &index_bytes, STATIC_DRAW);
    ctx.draw_elements(TRIANGLES, 3, UNSIGNED_SHORT, 2);
    assert_eq!(ctx.get_error(), NO_ERROR);
}

#[wasm_bindgen_test]
fn rgb565_read_back() {
    let ctx = context();
    let rb = ctx.create_renderbuffer();
    ctx.bind_renderbuffer(RENDERBUFFER, &rb);
    ctx.renderbuffer_storage(RENDERBUFFER, RGB565, 2, 2);
    let fb = ctx.create_framebuffer();
    ctx.bind_framebuffer(FRAMEBUFFER, &fb);
    ctx.framebuffer_renderbuffer(FRAMEBUFFER, COLOR_ATTACHMENT0, RENDERBUFFER, &rb);
    assert_eq!(ctx.check_framebuffer_status(FRAMEBUFFER), FRAMEBUFFER_COMPLETE);
    assert_eq!(ctx.get_integer(IMPLEMENTATION_COLOR_READ_FORMAT).unwrap() as Enum, RGB);
    assert_eq!(ctx.get_integer(IMPLEMENTATION_COLOR_READ_TYPE).unwrap() as Enum, UNSIGNED_SHORT_5_6_5);

    ctx.clear_color(1.0, 0.0, 0.0, 1.0);
    ctx.clear(COLOR_BUFFER_BIT);
    let mut dst = [0xAAu8; 8];
    ctx.read_pixels(&mut dst, 0, 0, 2, 2, RGB, UNSIGNED_SHORT_5_6_5).unwrap();
    assert_eq!(ctx.get_error(), NO_ERROR);
    assert_eq!(dst, [0x00, 0xF8, 0x00, 0xF8, 0x00, 0xF8, 0x00, 0xF8]);
}

#[wasm_bindgen_test]
fn pixel_views_match_the_pixel_type() {
    let bytes = Uint8Array::new_with_length(8);
    let view = PixelView::for_type(UNSIGNED_SHORT_5_6_5).over(&bytes);
    assert!(view.is_instance_of::<Uint16Array>());
    assert_eq!(view.unchecked_into::<Uint16Array>().length(), 4);

    let view = PixelView::for_type(FLOAT).over(&bytes);
    assert!(view.is_instance_of::<Float32Array>());
    assert_eq!(view.unchecked_into::<Float32Array>().length(), 2);

    let view = PixelView::for_type(UNSIGNED_BYTE).over(&bytes);
    assert!(view.is_instance_of::<Uint8Array>());
}

#[wasm_bindgen_test]
fn odd_sized_pixel_buffers_drop_the_partial_element() {
    let bytes = Uint8Array::new_with_length(9);
    let view = PixelView::Uint16.over(&bytes);
    assert_eq!(view.unchecked_into::<Uint16Array>().length(), 4);
    let view = PixelView::Float32.over(&bytes);
    assert_eq!(view.unchecked_into::<Float32Array>().length(), 2);

    let ctx = context();
    let mut dst = [0u8; 9];
    assert!(ctx.read_pixels(&mut dst, 0, 0, 1, 1, RGBA, FLOAT).is_ok());
}

#[wasm_bindgen_test]
fn created_handles_are_distinct() {
    let ctx = context();
    assert_ne!(ctx.create_buffer(), ctx.create_buffer());
    assert_ne!(ctx.create_texture(), ctx.create_texture());
    assert_ne!(ctx.create_framebuffer(), ctx.create_framebuffer());
    assert_ne!(ctx.create_renderbuffer(), ctx.create_renderbuffer());
    assert_ne!(ctx.create_shader(VERTEX_SHADER), ctx.create_shader(VERTEX_SHADER));
    assert_ne!(ctx.create_program(), ctx.create_program());
    if let Some(ctx3) = ctx.context3() {
        let va = ctx3.create_vertex_array();
        assert_ne!(va, ctx3.create_vertex_array());
        ctx3.bind_vertex_array(&va);
        assert!(ctx3.is_vertex_array(&va));
        ctx3.delete_vertex_array(&va);
        assert!(!ctx3.is_vertex_array(&va));
    }
}

#[wasm_bindgen_test]
fn deleted_objects_are_gone() {
    let ctx = context();
    let buffer = ctx.create_buffer();
    ctx.bind_buffer(ARRAY_BUFFER, &buffer);
    assert!(ctx.is_buffer(&buffer));
    ctx.delete_buffer(&buffer);
    assert!(!ctx.is_buffer(&buffer));

    let texture = ctx.create_texture();
    ctx.bind_texture(TEXTURE_2D, &texture);
    ctx.tex_image_2d(TEXTURE_2D, 0, RGBA as i32, 1, 1, RGBA, UNSIGNED_BYTE, &[0, 0, 0, 255]).unwrap();
    ctx.tex_parameteri(TEXTURE_2D, TEXTURE_MIN_FILTER, NEAREST as i32);
    let mut filter = [0i32; 1];
    ctx.get_tex_parameteriv(&mut filter, TEXTURE_2D, TEXTURE_MIN_FILTER);
    assert_eq!(filter[0], NEAREST as i32);
    assert!(ctx.is_texture(&texture));
    ctx.delete_texture(&texture);
    assert!(!ctx.is_texture(&texture));
}

#[wasm_bindgen_test]
fn zero_program_differs_from_created() {
    let ctx = context();
    assert!(!Program::default().init);
    assert!(ctx.create_program().init);
    assert_eq!(Buffer::default().to_string(), "Buffer(null)");
    assert_eq!(Program::default().to_string(), "Program(null)");
}

#[wasm_bindgen_test]
fn empty_bytes_become_null() {
    assert!(js_bytes(&[]).is_null());
    let bytes = js_bytes(&[1, 2, 3]);
    assert!(!bytes.is_null());
    assert_eq!(to_int(&js_sys::Reflect::get(&bytes, &"length".into()).unwrap()), 3);
    assert_eq!(js_floats(&[1.0, 2.0]).length(), 2);
}

#[wasm_bindgen_test]
fn int_coercion() {
    assert_eq!(to_int(&JsValue::TRUE), 1);
    assert_eq!(to_int(&JsValue::FALSE), 0);
    assert_eq!(to_int(&JsValue::from(42)), 42);
    assert_eq!(to_int(&JsValue::from(-7)), -7);
    assert_eq!(to_int(&JsValue::from(0xFFFF_FFFFu32)) as u32, 0xFFFF_FFFF);
}

#[wasm_bindgen_test]
fn stencil_masks_keep_every_bit() {
    let ctx = context();
    assert_eq!(ctx.get_integer(STENCIL_WRITEMASK).unwrap() as u32, 0xFFFF_FFFF);
    assert_eq!(ctx.get_integer(STENCIL_VALUE_MASK).unwrap() as u32, 0xFFFF_FFFF);

    let mut back = [0i32; 1];
    ctx.get_integerv(&mut back, STENCIL_BACK_WRITEMASK).unwrap();
    assert_eq!(back[0] as u32, 0xFFFF_FFFF);

    let mask = ctx.get_integer(STENCIL_WRITEMASK).unwrap() as u32;
    ctx.stencil_mask(mask);
    assert_eq!(ctx.get_integer(STENCIL_WRITEMASK).unwrap() as u32, mask);
}

#[wasm_bindgen_test]
fn scalar_parameters_fill_index_zero() {
    assert_eq!(to_int(&parameter_at(&JsValue::from(5), 0)), 5);
    assert!(parameter_at(&JsValue::from(5), 1).is_undefined());

    let ctx = context();
    let mut dst = [-1i32; 3];
    ctx.get_integerv(&mut dst, MAX_TEXTURE_SIZE).unwrap();
    assert!(dst[0] > 0);
    assert_eq!(&dst[1..], &[0, 0]);

    let mut viewport = [0i32; 4];
    ctx.get_integerv(&mut viewport, VIEWPORT).unwrap();
    assert_eq!(viewport[2], ctx.webgl().width());

    let mut mask = [false; 4];
    ctx.get_booleanv(&mut mask, COLOR_WRITEMASK).unwrap();
    assert_eq!(mask, [true; 4]);

    let mut width = [0.0f32; 2];
    ctx.get_floatv(&mut width, LINE_WIDTH).unwrap();
    assert_eq!(width[0], 1.0);
    assert!(width[1].is_nan());
}

#[wasm_bindgen_test]
fn string_queries() {
    let ctx = context();
    assert!(ctx.get_string(VERSION).unwrap().contains("WebGL"));
    let format = ctx.get_shader_precision_format(FRAGMENT_SHADER, MEDIUM_FLOAT);
    assert!(format.precision > 0);
}

#[wasm_bindgen_test]
fn worker_never_has_work() {
    let (_ctx, worker) = Context::new().unwrap();
    worker.do_work();
    assert!(!worker.work_available().is_ready());
}

#[wasm_bindgen_test]
async fn missing_asset_reports_name_and_status() {
    let err = open_asset("missing.bin").await.unwrap_err();
    assert!(matches!(err, AssetError::Status { status : 404, .. }));
    let message = err.to_string();
    assert!(message.contains("missing.bin"), "{}", message);
    assert!(message.contains("404"), "{}", message);
}
