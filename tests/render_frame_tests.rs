use luck_report::ReportError;
use luck_report::core::Viewport;
use luck_report::render::{
    CirclePrimitive, Color, NullRenderer, PathPrimitive, RectPrimitive, RenderFrame, Renderer,
    SvgRenderer, TextHAlign, TextPrimitive,
};

fn sample_frame() -> RenderFrame {
    RenderFrame::new(Viewport::new(200, 100))
        .with_rect(RectPrimitive::filled(0.0, 0.0, 200.0, 100.0, Color::css("#ffffff")))
        .with_path(PathPrimitive::stroked("M 0,50 L 200,50", Color::css("#333333"), 1.0))
        .with_circle(CirclePrimitive::new(100.0, 50.0, 4.0, Color::css("teal")))
        .with_text(TextPrimitive::new(
            "2023",
            100.0,
            90.0,
            11.0,
            Color::css("#333333"),
            TextHAlign::Center,
        ))
}

#[test]
fn null_renderer_counts_each_primitive_kind() {
    let frame = sample_frame();
    frame.validate().expect("valid frame");

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.last_path_count, 1);
    assert_eq!(renderer.last_rect_count, 1);
    assert_eq!(renderer.last_circle_count, 1);
    assert_eq!(renderer.last_text_count, 1);
}

#[test]
fn svg_renderer_writes_primitives_in_frame_order() {
    let svg = SvgRenderer::default()
        .render(&sample_frame())
        .expect("render")
        .into_string();

    let rect = svg.find("<rect").expect("rect");
    let path = svg.find("<path").expect("path");
    let circle = svg.find("<circle").expect("circle");
    let text = svg.find("<text").expect("text");
    assert!(rect < path && path < circle && circle < text);
    assert!(svg.contains(r##"stroke="#333333""##));
    assert!(svg.contains(r#"text-anchor="middle""#));
}

#[test]
fn zero_viewport_is_rejected() {
    let frame = RenderFrame::new(Viewport::new(0, 100));
    let err = NullRenderer::default().render(&frame).expect_err("empty viewport");
    assert!(matches!(
        err,
        ReportError::InvalidViewport {
            width: 0,
            height: 100
        }
    ));
}

#[test]
fn invalid_primitives_fail_validation() {
    let negative = RenderFrame::new(Viewport::new(10, 10)).with_rect(RectPrimitive::filled(
        0.0,
        0.0,
        5.0,
        -1.0,
        Color::css("red"),
    ));
    assert!(matches!(negative.validate(), Err(ReportError::InvalidInput(_))));

    let empty_text = RenderFrame::new(Viewport::new(10, 10)).with_text(TextPrimitive::new(
        "",
        1.0,
        1.0,
        11.0,
        Color::css("red"),
        TextHAlign::Left,
    ));
    assert!(empty_text.validate().is_err());

    let no_radius = RenderFrame::new(Viewport::new(10, 10)).with_circle(CirclePrimitive::new(
        1.0,
        1.0,
        0.0,
        Color::css("red"),
    ));
    assert!(no_radius.validate().is_err());
}

#[test]
fn empty_frame_renders_bare_svg() {
    let frame = RenderFrame::new(Viewport::new(40, 30));
    assert!(frame.is_empty());
    let svg = SvgRenderer::default().render(&frame).expect("render");
    assert!(svg.as_str().ends_with("\"></svg>"));
}
